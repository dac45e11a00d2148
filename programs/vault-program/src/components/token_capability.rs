use anchor_lang::prelude::Pubkey;
use crate::utils::VaultError;

/// The external token as seen from the vault.
///
/// Identities are wallet keys; an implementation resolves them to whatever
/// token accounts it holds. The vault's own custody is addressed through the
/// vault identity the implementation was built for.
pub trait TokenCapability {
    /// Pulls `amount` from `owner` into vault custody, spending the allowance
    /// `owner` granted the vault.
    fn transfer_from(&mut self, owner: &Pubkey, amount: u64) -> Result<(), VaultError>;

    /// Pays `amount` out of vault custody to `to`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<(), VaultError>;

    fn balance_of(&self, account: &Pubkey) -> u64;

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64;
}
