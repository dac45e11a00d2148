#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

use instructions::admin::*;
use instructions::user::*;
use instructions::view::*;

pub mod states;
pub mod instructions;
pub mod components;
pub mod utils;
pub mod events;


declare_id!("AhUH5cxHKQfJLX9z9wurQ43Q8w1uXhNPQvYyRYTT4Sx6");

#[program]
pub mod vault_program {
    use super::*;

    pub fn init_vault(ctx: Context<InitVaultInstructionAccounts>) -> Result<()> {
        instructions::admin::init_vault(ctx)
    }

    pub fn update_admin(ctx: Context<UpdateAdminInstructionAccounts>) -> Result<()> {
        instructions::admin::update_admin(ctx)
    }

    pub fn set_token_address(ctx: Context<SetTokenAddressInstructionAccounts>) -> Result<()> {
        instructions::admin::set_token_address(ctx)
    }

    pub fn set_fee_collector_address(ctx: Context<SetFeeCollectorAddressInstructionAccounts>) -> Result<()> {
        instructions::admin::set_fee_collector_address(ctx)
    }

    pub fn set_fee_rate(ctx: Context<SetFeeRateInstructionAccounts>, fee_rate: u64) -> Result<()> {
        instructions::admin::set_fee_rate(ctx, fee_rate)
    }

    // User instructions
    pub fn deposit(ctx: Context<DepositInstructionAccounts>, amount: u64) -> Result<()> {
        instructions::user::deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<WithdrawInstructionAccounts>, amount: u64) -> Result<()> {
        instructions::user::withdraw(ctx, amount)
    }

    // Views
    pub fn get_balance(ctx: Context<GetBalanceInstructionAccounts>, owner: Pubkey) -> Result<u64> {
        instructions::view::get_balance(ctx, owner)
    }

    pub fn calculate_vault_fee(ctx: Context<CalculateVaultFeeInstructionAccounts>, amount: u128) -> Result<FeeSplit> {
        instructions::view::calculate_vault_fee(ctx, amount)
    }
}
