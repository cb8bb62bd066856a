mod data_state;
pub use data_state::*;

mod focus_ring;
pub use focus_ring::*;
