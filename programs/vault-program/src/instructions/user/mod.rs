pub use deposit::*;
pub use withdraw::*;

pub mod deposit;
pub mod withdraw;
