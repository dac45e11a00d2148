pub use calculate_vault_fee::*;
pub use checkers::*;
pub use configure_vault::*;
pub use ledger::*;
pub use spl_token_custody::*;
pub use token_capability::*;

pub mod calculate_vault_fee;
pub mod checkers;
pub mod configure_vault;
pub mod ledger;
pub mod spl_token_custody;
pub mod token_capability;
