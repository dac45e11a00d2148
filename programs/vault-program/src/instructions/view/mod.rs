pub use get_balance::*;
pub use calculate_vault_fee::*;

pub mod get_balance;
pub mod calculate_vault_fee;
