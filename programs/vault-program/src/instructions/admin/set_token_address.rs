use crate::{components::configure_token, states::Vault, utils::VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

pub fn set_token_address(ctx: Context<SetTokenAddressInstructionAccounts>) -> Result<()> {
    let vault: &mut Account<'_, Vault> = &mut ctx.accounts.vault_pda;

    configure_token(vault, &ctx.accounts.signer.key(), ctx.accounts.token_mint.key())?;

    msg!("SetTokenAddress {{mint: {}}}", ctx.accounts.token_mint.key());

    Ok(())
}

#[derive(Accounts)]
pub struct SetTokenAddressInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut, seeds = [VAULT_SEED.as_bytes()], bump)]
    pub vault_pda: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}
