use anchor_lang::prelude::Pubkey;
use crate::{components::check_admin, states::Vault, utils::{VaultError, FEE_DENOMINATOR}};

/// Fresh vault owned by `admin`: no token, no fee collector, zero fee.
pub fn new_vault(admin: Pubkey) -> Vault {
    Vault {
        admin,
        token_mint: None,
        fee_collector: None,
        fee_rate: 0,
        total_deposits: 0,
    }
}

/// Points the vault at the token it accounts for.
///
/// The token can only change while nothing is deposited, since every
/// ledger balance is denominated in the current token.
pub fn configure_token(vault: &mut Vault, caller: &Pubkey, token_mint: Pubkey) -> Result<(), VaultError> {
    check_admin(vault, caller)?;

    if vault.total_deposits > 0 && vault.token_mint != Some(token_mint) {
        return Err(VaultError::InvalidParameter);
    }

    vault.token_mint = Some(token_mint);

    Ok(())
}

pub fn configure_fee_collector(vault: &mut Vault, caller: &Pubkey, fee_collector: Pubkey) -> Result<(), VaultError> {
    check_admin(vault, caller)?;

    vault.fee_collector = Some(fee_collector);

    Ok(())
}

/// Sets the withdrawal fee numerator; anything above 100% is rejected.
pub fn configure_fee_rate(vault: &mut Vault, caller: &Pubkey, fee_rate: u64) -> Result<(), VaultError> {
    check_admin(vault, caller)?;

    if fee_rate > FEE_DENOMINATOR {
        return Err(VaultError::InvalidParameter);
    }

    vault.fee_rate = fee_rate;

    Ok(())
}

pub fn transfer_admin(vault: &mut Vault, caller: &Pubkey, new_admin: Pubkey) -> Result<(), VaultError> {
    check_admin(vault, caller)?;

    vault.admin = new_admin;

    Ok(())
}
