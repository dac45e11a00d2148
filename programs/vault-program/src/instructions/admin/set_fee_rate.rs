use crate::{components::configure_fee_rate, states::Vault, utils::{VAULT_SEED, FEE_DENOMINATOR}};
use anchor_lang::prelude::*;

pub fn set_fee_rate(ctx: Context<SetFeeRateInstructionAccounts>, fee_rate: u64) -> Result<()> {
    let vault: &mut Account<'_, Vault> = &mut ctx.accounts.vault_pda;

    configure_fee_rate(vault, &ctx.accounts.signer.key(), fee_rate)?;

    msg!("SetFeeRate {{fee_rate: {}/{}}}", vault.fee_rate, FEE_DENOMINATOR);

    Ok(())
}

#[derive(Accounts)]
pub struct SetFeeRateInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(mut, seeds = [VAULT_SEED.as_bytes()], bump)]
    pub vault_pda: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}
