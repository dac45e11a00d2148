use anchor_lang::prelude::*;

/// One ledger entry: the balance `owner` holds in custody of `vault`.
#[account]
pub struct Depositor {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub balance: u64,
}

impl Depositor {
    pub const LEN: usize = 8 + 32 + 32 + 8;
}
