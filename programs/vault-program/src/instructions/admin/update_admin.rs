use crate::{components::transfer_admin, states::Vault, utils::VAULT_SEED};
use anchor_lang::prelude::*;

#[inline(never)]
pub fn update_admin(ctx: Context<UpdateAdminInstructionAccounts>) -> Result<()> {
    let vault: &mut Account<'_, Vault> = &mut ctx.accounts.vault_pda;

    transfer_admin(vault, &ctx.accounts.signer.key(), ctx.accounts.new_admin.key())?;

    msg!("UpdateAdmin {{new_admin: {}}}", vault.admin);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateAdminInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: No constraints, assumed valid by admin
    pub new_admin: AccountInfo<'info>,

    #[account(mut, seeds = [VAULT_SEED.as_bytes()], bump)]
    pub vault_pda: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}
