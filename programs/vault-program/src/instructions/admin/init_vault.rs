use crate::{components::new_vault, states::Vault, utils::VAULT_SEED};
use anchor_lang::prelude::*;

/// Creates the vault with the signer as admin, no token, no fee collector and
/// a zero fee.
pub fn init_vault(ctx: Context<InitVaultInstructionAccounts>) -> Result<()> {
    let vault: &mut Account<'_, Vault> = &mut ctx.accounts.vault_pda;

    vault.set_inner(new_vault(ctx.accounts.signer.key()));

    msg!("InitVault {{admin: {}}}", vault.admin);

    Ok(())
}

#[derive(Accounts)]
pub struct InitVaultInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        seeds = [VAULT_SEED.as_bytes()],
        bump,
        space = Vault::LEN,
    )]
    pub vault_pda: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}
