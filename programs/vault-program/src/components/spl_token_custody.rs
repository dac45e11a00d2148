use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::{components::TokenCapability, utils::VaultError};

/// `TokenCapability` over SPL token accounts.
///
/// `custody` is owned by the vault PDA, which signs every transfer: as the
/// owner when paying out, and as the approved delegate when pulling from a
/// depositor. `counterparties` are the token accounts of the wallets this
/// instruction may move tokens to or from.
pub struct SplTokenCustody<'a, 'info> {
    token_program: AccountInfo<'info>,
    vault_authority: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
    custody: &'a mut Account<'info, TokenAccount>,
    counterparties: Vec<&'a mut Account<'info, TokenAccount>>,
}

impl<'a, 'info> SplTokenCustody<'a, 'info> {
    pub fn new(
        token_program: AccountInfo<'info>,
        vault_authority: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
        custody: &'a mut Account<'info, TokenAccount>,
        counterparties: Vec<&'a mut Account<'info, TokenAccount>>,
    ) -> Self {
        Self { token_program, vault_authority, signer_seeds, custody, counterparties }
    }

    fn counterparty(&self, owner: &Pubkey) -> Option<usize> {
        self.counterparties.iter().position(|account| account.owner == *owner)
    }

    fn cpi_transfer(&self, from: AccountInfo<'info>, to: AccountInfo<'info>, amount: u64) -> std::result::Result<(), VaultError> {
        let cpi_accounts = Transfer {
            from,
            to,
            authority: self.vault_authority.clone(),
        };

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                cpi_accounts,
                self.signer_seeds),
            amount)
            .map_err(|_| VaultError::TransferFailed)
    }

    fn reload(&mut self, index: usize) -> std::result::Result<(), VaultError> {
        self.custody.reload().map_err(|_| VaultError::TransferFailed)?;
        self.counterparties[index].reload().map_err(|_| VaultError::TransferFailed)
    }
}

impl<'a, 'info> TokenCapability for SplTokenCustody<'a, 'info> {
    fn transfer_from(&mut self, owner: &Pubkey, amount: u64) -> std::result::Result<(), VaultError> {
        let index = self.counterparty(owner).ok_or(VaultError::TransferFailed)?;
        let spender = *self.vault_authority.key;

        // The token program would abort the whole transaction; reject first so
        // the vault reports the failure itself.
        if self.allowance(owner, &spender) < amount || self.balance_of(owner) < amount {
            return Err(VaultError::TransferFailed);
        }

        let from = self.counterparties[index].to_account_info();
        let to = self.custody.to_account_info();
        self.cpi_transfer(from, to, amount)?;

        self.reload(index)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> std::result::Result<(), VaultError> {
        let index = self.counterparty(to).ok_or(VaultError::TransferFailed)?;

        if self.custody.amount < amount {
            return Err(VaultError::TransferFailed);
        }

        let from = self.custody.to_account_info();
        let to = self.counterparties[index].to_account_info();
        self.cpi_transfer(from, to, amount)?;

        self.reload(index)
    }

    fn balance_of(&self, account: &Pubkey) -> u64 {
        if *account == *self.vault_authority.key {
            return self.custody.amount;
        }

        self.counterparty(account)
            .map_or(0, |index| self.counterparties[index].amount)
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        match self.counterparty(owner) {
            Some(index) => {
                let account = &self.counterparties[index];
                if account.delegate == COption::Some(*spender) {
                    account.delegated_amount
                } else {
                    0
                }
            }
            None => 0,
        }
    }
}
