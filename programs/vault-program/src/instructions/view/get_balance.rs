use anchor_lang::prelude::*;
use crate::{components::ledger_balance, states::{Depositor, Vault}, utils::{DEPOSITOR_SEED, VAULT_SEED}};

/// Returns the ledger balance of `owner`; zero when no entry exists yet.
pub fn get_balance(ctx: Context<GetBalanceInstructionAccounts>, owner: Pubkey) -> Result<u64> {
    let balance = ledger_balance(ctx.accounts.depositor_pda.as_deref());

    msg!("Balance {{owner: {}, balance: {}}}", owner, balance);

    Ok(balance)
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetBalanceInstructionAccounts<'info> {
    #[account(seeds = [VAULT_SEED.as_bytes()], bump)]
    pub vault_pda: Account<'info, Vault>,

    #[account(seeds = [DEPOSITOR_SEED.as_bytes(), vault_pda.key().as_ref(), owner.as_ref()], bump)]
    pub depositor_pda: Option<Account<'info, Depositor>>,
}
