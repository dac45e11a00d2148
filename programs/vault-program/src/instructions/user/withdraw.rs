use anchor_lang::prelude::*;
use anchor_spl::{associated_token::AssociatedToken, token::{Mint, Token, TokenAccount}};
use crate::{components::{is_fee_collector, withdraw_from_ledger, SplTokenCustody}, events::WithdrawEvent, states::{Depositor, Vault}, utils::*};

/// Withdraw tokens from the signer's ledger entry, minus the vault fee
///
/// # Arguments
/// * `ctx` - context containing all accounts for the withdrawal
/// * `amount` - amount debited from the ledger, before the fee split
#[inline(never)]
pub fn withdraw(ctx: Context<WithdrawInstructionAccounts>, amount: u64) -> Result<()> {
    // Capture AccountInfo before taking mutable borrow of vault_pda (borrow checker)
    let vault_pda_info = ctx.accounts.vault_pda.to_account_info();

    let seeds = &[VAULT_SEED.as_bytes(), &[ctx.bumps.vault_pda]];
    let signer_seeds = &[&seeds[..]];

    let mut counterparties = vec![&mut ctx.accounts.signer_ata];
    if let Some(fee_collector_ata) = ctx.accounts.fee_collector_ata.as_mut() {
        counterparties.push(fee_collector_ata);
    }

    let mut custody = SplTokenCustody::new(
        ctx.accounts.token_program.to_account_info(),
        vault_pda_info,
        signer_seeds,
        &mut ctx.accounts.vault_ata,
        counterparties,
    );

    let split = withdraw_from_ledger(
        &mut ctx.accounts.vault_pda,
        &mut ctx.accounts.depositor_pda,
        &mut custody,
        amount,
    )?;

    emit!(WithdrawEvent {
        user: ctx.accounts.signer.key(),
        mint: ctx.accounts.token_mint.key(),
        amount: amount,
        user_share: split.user_share,
        fee_share: split.fee_share
    });

    Ok(())
}

/// Accounts required for the withdraw instruction
#[derive(Accounts)]
pub struct WithdrawInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_mint: Account<'info, Mint>, // read-only: not modified

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump,
        constraint = vault_pda.token_mint == Some(token_mint.key()) @ VaultError::InvalidTokenMint,
    )]
    pub vault_pda: Account<'info, Vault>,

    #[account(
        mut,
        seeds = [DEPOSITOR_SEED.as_bytes(), vault_pda.key().as_ref(), signer.key().as_ref()],
        bump,
        constraint = depositor_pda.owner == signer.key() @ VaultError::InvalidDepositor,
        constraint = depositor_pda.vault == vault_pda.key() @ VaultError::InvalidDepositor,
    )]
    pub depositor_pda: Account<'info, Depositor>,

    #[account(mut, token::authority = signer, token::mint = token_mint)]
    pub signer_ata: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = vault_pda,
    )]
    pub vault_ata: Account<'info, TokenAccount>,

    /// Needed whenever the withdrawal carries a fee; must be owned by `vault_pda.fee_collector`.
    #[account(
        mut,
        token::mint = token_mint,
        constraint = is_fee_collector(&vault_pda, &fee_collector_ata.owner) @ VaultError::TransferFailed,
    )]
    pub fee_collector_ata: Option<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
