use anchor_lang::prelude::*;
use anchor_spl::{associated_token::AssociatedToken, token::{Mint, Token, TokenAccount}};
use crate::{components::{deposit_to_ledger, SplTokenCustody}, events::DepositEvent, states::{Depositor, Vault}, utils::*};

/// Deposit tokens into the vault and credit the signer's ledger entry
///
/// The signer must first approve the vault PDA as delegate on `signer_ata`
/// for at least `amount`.
///
/// # Arguments
/// * `ctx` - context containing all accounts for the deposit
/// * `amount` - amount of tokens to deposit, in base units
#[inline(never)]
pub fn deposit(ctx: Context<DepositInstructionAccounts>, amount: u64) -> Result<()> {
    // Capture vault PDA key and info before taking mutable borrows (borrow checker)
    let vault_pda_key = ctx.accounts.vault_pda.key();
    let vault_pda_info = ctx.accounts.vault_pda.to_account_info();

    let seeds = &[VAULT_SEED.as_bytes(), &[ctx.bumps.vault_pda]];
    let signer_seeds = &[&seeds[..]];

    let depositor: &mut Account<'_, Depositor> = &mut ctx.accounts.depositor_pda;
    depositor.owner = ctx.accounts.signer.key();
    depositor.vault = vault_pda_key;

    let mut custody = SplTokenCustody::new(
        ctx.accounts.token_program.to_account_info(),
        vault_pda_info,
        signer_seeds,
        &mut ctx.accounts.vault_ata,
        vec![&mut ctx.accounts.signer_ata],
    );

    deposit_to_ledger(
        &mut ctx.accounts.vault_pda,
        &mut ctx.accounts.depositor_pda,
        &mut custody,
        amount,
    )?;

    emit!(DepositEvent {
        user: ctx.accounts.signer.key(),
        mint: ctx.accounts.token_mint.key(),
        amount: amount,
        balance: ctx.accounts.depositor_pda.balance
    });

    Ok(())
}

/// Accounts context for the deposit instruction
#[derive(Accounts)]
pub struct DepositInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>, // the depositor

    pub token_mint: Account<'info, Mint>, // token the vault accounts for

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump,
        constraint = vault_pda.token_mint.is_some() @ VaultError::TokenNotSet,
        constraint = vault_pda.token_mint == Some(token_mint.key()) @ VaultError::InvalidTokenMint,
    )]
    pub vault_pda: Account<'info, Vault>,

    #[account(
        init_if_needed,
        payer = signer,
        seeds = [DEPOSITOR_SEED.as_bytes(), vault_pda.key().as_ref(), signer.key().as_ref()],
        bump,
        space = Depositor::LEN,
    )]
    pub depositor_pda: Account<'info, Depositor>, // signer's ledger entry

    #[account(mut, token::authority = signer, token::mint = token_mint)]
    pub signer_ata: Account<'info, TokenAccount>, // delegate must be vault_pda

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = token_mint,
        associated_token::authority = vault_pda,
    )]
    pub vault_ata: Account<'info, TokenAccount>, // custody of all deposits

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
