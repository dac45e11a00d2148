pub use constants::*;
pub use errors::*;

pub mod constants;
pub mod errors;
