pub use vault::*;
pub use depositor::*;

pub mod vault;
pub mod depositor;
