pub use deposit_event::*;
pub use withdraw_event::*;

pub mod deposit_event;
pub mod withdraw_event;
