use anchor_lang::prelude::*;

#[account]
pub struct Vault {
    pub admin: Pubkey,

    pub token_mint: Option<Pubkey>,
    pub fee_collector: Option<Pubkey>,

    /// Numerator over `FEE_DENOMINATOR`.
    pub fee_rate: u64,

    /// Sum of every depositor balance. Never exceeds the custody account balance.
    pub total_deposits: u64,
}

impl Vault {
    pub const LEN: usize = 8 + 32 + (1 + 32) + (1 + 32) + 8 + 8;
}
