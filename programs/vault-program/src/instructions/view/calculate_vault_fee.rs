use anchor_lang::prelude::*;
use crate::{components, states::Vault, utils::VAULT_SEED};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub user_share: u128,
    pub fee_share: u128,
}

/// Quotes how a withdrawal of `amount` would be split at the current fee rate.
///
/// Takes `u128` so amounts beyond the SPL `u64` range (e.g. 18-decimal
/// quantities) can be priced too.
pub fn calculate_vault_fee(ctx: Context<CalculateVaultFeeInstructionAccounts>, amount: u128) -> Result<FeeSplit> {
    let (user_share, fee_share) = components::calculate_vault_fee(amount, ctx.accounts.vault_pda.fee_rate)?;

    Ok(FeeSplit { user_share, fee_share })
}

#[derive(Accounts)]
pub struct CalculateVaultFeeInstructionAccounts<'info> {
    #[account(seeds = [VAULT_SEED.as_bytes()], bump)]
    pub vault_pda: Account<'info, Vault>,
}
