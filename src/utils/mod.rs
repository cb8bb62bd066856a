mod colors;
pub use colors::*;

mod debug;
pub use debug::*;

mod element_id;
pub use element_id::*;

mod style;
pub use style::*;

mod transitions;
pub use transitions::*;
