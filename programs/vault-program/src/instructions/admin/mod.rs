pub use init_vault::*;
pub use update_admin::*;
pub use set_token_address::*;
pub use set_fee_collector_address::*;
pub use set_fee_rate::*;

pub mod init_vault;
pub mod update_admin;
pub mod set_token_address;
pub mod set_fee_collector_address;
pub mod set_fee_rate;
