#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use vault_program::components::{new_vault, TokenCapability};
use vault_program::states::{Depositor, Vault};
use vault_program::utils::VaultError;

pub fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

pub const ADMIN: u8 = 1;
pub const VAULT: u8 = 2;
pub const MINT: u8 = 3;
pub const FEE_COLLECTOR: u8 = 8;

/// Vault configured the way a deployment leaves it: token and collector set, zero fee.
pub fn configured_vault() -> Vault {
    let mut vault = new_vault(key(ADMIN));
    vault.token_mint = Some(key(MINT));
    vault.fee_collector = Some(key(FEE_COLLECTOR));
    vault
}

pub fn make_depositor(owner: Pubkey) -> Depositor {
    Depositor {
        owner,
        vault: key(VAULT),
        balance: 0,
    }
}

/// In-memory token. Custody is the balance held by `vault`.
pub struct MockToken {
    pub vault: Pubkey,
    balances: HashMap<Pubkey, u64>,
    allowances: HashMap<(Pubkey, Pubkey), u64>,
    rejected_recipient: Option<Pubkey>,
}

impl MockToken {
    pub fn new(vault: Pubkey) -> Self {
        Self {
            vault,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            rejected_recipient: None,
        }
    }

    pub fn mint(&mut self, to: Pubkey, amount: u64) {
        *self.balances.entry(to).or_default() += amount;
    }

    pub fn approve(&mut self, owner: Pubkey, spender: Pubkey, amount: u64) {
        self.allowances.insert((owner, spender), amount);
    }

    /// Makes every transfer to `recipient` fail.
    pub fn reject_transfers_to(&mut self, recipient: Pubkey) {
        self.rejected_recipient = Some(recipient);
    }

    pub fn custody(&self) -> u64 {
        self.balance_of(&self.vault)
    }

    fn move_tokens(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<(), VaultError> {
        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err(VaultError::TransferFailed);
        }
        self.balances.insert(from, from_balance - amount);
        *self.balances.entry(to).or_default() += amount;
        Ok(())
    }
}

impl TokenCapability for MockToken {
    fn transfer_from(&mut self, owner: &Pubkey, amount: u64) -> Result<(), VaultError> {
        let vault = self.vault;
        let allowance = self.allowance(owner, &vault);
        if allowance < amount {
            return Err(VaultError::TransferFailed);
        }
        self.move_tokens(*owner, vault, amount)?;
        self.allowances.insert((*owner, vault), allowance - amount);
        Ok(())
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<(), VaultError> {
        if self.rejected_recipient == Some(*to) {
            return Err(VaultError::TransferFailed);
        }
        self.move_tokens(self.vault, *to, amount)
    }

    fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }
}

