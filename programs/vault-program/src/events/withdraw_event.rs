use anchor_lang::prelude::*;

#[event]
pub struct WithdrawEvent {
    pub user: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub user_share: u64,
    pub fee_share: u64
}
