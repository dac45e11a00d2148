use crate::{components::configure_fee_collector, states::Vault, utils::VAULT_SEED};
use anchor_lang::prelude::*;

pub fn set_fee_collector_address(ctx: Context<SetFeeCollectorAddressInstructionAccounts>) -> Result<()> {
    let vault: &mut Account<'_, Vault> = &mut ctx.accounts.vault_pda;

    configure_fee_collector(vault, &ctx.accounts.signer.key(), ctx.accounts.fee_collector.key())?;

    msg!("SetFeeCollector {{fee_collector: {}}}", ctx.accounts.fee_collector.key());

    Ok(())
}

#[derive(Accounts)]
pub struct SetFeeCollectorAddressInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: wallet that receives fee proceeds, any key is accepted
    pub fee_collector: AccountInfo<'info>,

    #[account(mut, seeds = [VAULT_SEED.as_bytes()], bump)]
    pub vault_pda: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}
