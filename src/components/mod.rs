mod badge;
pub use badge::*;

mod button;
pub use button::*;

mod card;
pub use card::*;

mod collapsible;
pub use collapsible::*;

mod switch;
pub use switch::*;

mod table;
pub use table::*;

pub mod tooltip;
pub use tooltip::{Tooltip, TooltipContent, TooltipSide, TooltipTrigger};
