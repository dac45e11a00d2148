use crate::{
    components::{calculate_vault_fee, TokenCapability},
    states::{Depositor, Vault},
    utils::VaultError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalSplit {
    pub user_share: u64,
    pub fee_share: u64,
}

/// Balance held by a ledger entry; an entry that was never created holds nothing.
pub fn ledger_balance(depositor: Option<&Depositor>) -> u64 {
    depositor.map_or(0, |entry| entry.balance)
}

/// Credits `amount` to the depositor after pulling it into vault custody.
///
/// Nothing is written unless the token transfer succeeds, so a rejected
/// transfer leaves the ledger untouched.
///
/// # Arguments
/// * `vault` - Vault configuration and running deposit total
/// * `depositor` - Ledger entry of the caller; `owner` is the account charged
/// * `token` - Token the vault accounts for
/// * `amount` - Amount to deposit, in base units
pub fn deposit_to_ledger<T: TokenCapability>(
    vault: &mut Vault,
    depositor: &mut Depositor,
    token: &mut T,
    amount: u64,
) -> Result<(), VaultError> {
    if amount == 0 {
        return Err(VaultError::InvalidParameter);
    }
    vault.token_mint.ok_or(VaultError::TokenNotSet)?;

    let new_balance = depositor.balance
        .checked_add(amount)
        .ok_or(VaultError::OverflowInAdd)?;
    let new_total = vault.total_deposits
        .checked_add(amount)
        .ok_or(VaultError::OverflowInAdd)?;

    token
        .transfer_from(&depositor.owner, amount)
        .map_err(|_| VaultError::TransferFailed)?;

    depositor.balance = new_balance;
    vault.total_deposits = new_total;

    Ok(())
}

/// Debits `amount` from the depositor and pays it out minus the vault fee.
///
/// Every check, including that a non-zero fee has a collector to go to, runs
/// before the ledger is touched. The ledger is debited before any token
/// leaves custody. A failed payout
/// does not restore the debit here; the enclosing transaction is expected to
/// roll back as a whole.
///
/// # Arguments
/// * `vault` - Vault configuration and running deposit total
/// * `depositor` - Ledger entry of the caller; `owner` receives the user share
/// * `token` - Token the vault accounts for
/// * `amount` - Amount to withdraw before fees, in base units
///
/// # Returns
/// * `Result<WithdrawalSplit, VaultError>` - How `amount` was divided between
///   the depositor and the fee collector
pub fn withdraw_from_ledger<T: TokenCapability>(
    vault: &mut Vault,
    depositor: &mut Depositor,
    token: &mut T,
    amount: u64,
) -> Result<WithdrawalSplit, VaultError> {
    if amount == 0 {
        return Err(VaultError::InvalidParameter);
    }
    if amount > depositor.balance {
        return Err(VaultError::InsufficientBalance);
    }
    vault.token_mint.ok_or(VaultError::TokenNotSet)?;

    let (user_share, fee_share) = calculate_vault_fee(amount as u128, vault.fee_rate)?;
    let split = WithdrawalSplit {
        user_share: u64::try_from(user_share).map_err(|_| VaultError::OverflowInCast)?,
        fee_share: u64::try_from(fee_share).map_err(|_| VaultError::OverflowInCast)?,
    };

    // A fee with nowhere to go is rejected before anything moves
    if split.fee_share > 0 && vault.fee_collector.is_none() {
        return Err(VaultError::TransferFailed);
    }

    // Effects
    depositor.balance = depositor.balance
        .checked_sub(amount)
        .ok_or(VaultError::OverflowInSub)?;
    vault.total_deposits = vault.total_deposits
        .checked_sub(amount)
        .ok_or(VaultError::OverflowInSub)?;

    // Interactions
    if split.user_share > 0 {
        token
            .transfer(&depositor.owner, split.user_share)
            .map_err(|_| VaultError::TransferFailed)?;
    }

    if split.fee_share > 0 {
        let fee_collector = vault.fee_collector.ok_or(VaultError::TransferFailed)?;
        token
            .transfer(&fee_collector, split.fee_share)
            .map_err(|_| VaultError::TransferFailed)?;
    }

    Ok(split)
}
