use anchor_lang::prelude::Pubkey;
use crate::{states::Vault, utils::VaultError};

pub fn is_admin(vault: &Vault, caller: &Pubkey) -> bool {
    vault.admin == *caller
}

/// True when `owner` is the configured fee collector. An unset collector
/// matches nobody.
pub fn is_fee_collector(vault: &Vault, owner: &Pubkey) -> bool {
    vault.fee_collector == Some(*owner)
}

/// Checks if the caller is the admin of the vault.
/// Returns `Unauthorized` error if not.
pub fn check_admin(vault: &Vault, caller: &Pubkey) -> Result<(), VaultError> {
    if !is_admin(vault, caller) {
        return Err(VaultError::Unauthorized);
    }

    Ok(())
}
