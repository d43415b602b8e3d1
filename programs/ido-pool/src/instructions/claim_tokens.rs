use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::IdoError;
use crate::events::TokensClaimed;
use crate::state::{Pool, UserPurchase};
use crate::utils::{check_balance, check_claim_open, transfer_from_pool_vault};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [USER_PURCHASE_SEED, claimer.key().as_ref(), &pool_id.to_le_bytes()],
        bump = user_purchase.bump,
    )]
    pub user_purchase: Box<Account<'info, UserPurchase>>,

    #[account(
        mut,
        constraint = claimer_token_account.mint == pool.token_mint @ IdoError::AccountMismatch,
        constraint = claimer_token_account.owner == claimer.key() @ IdoError::AccountMismatch,
    )]
    pub claimer_token_account: Box<Account<'info, TokenAccount>>,

    /// Pool escrow
    #[account(
        mut,
        address = pool.token_vault @ IdoError::AccountMismatch,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: keyless PDA, signs the escrow transfer via its seeds
    #[account(
        seeds = [POOL_AUTHORITY_SEED, &pool_id.to_le_bytes()],
        bump = pool.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

/// Validate a claim and mark the purchase as paid out. Returns the payout.
///
/// An escrow smaller than the payout is a hard failure; the claim is never
/// truncated to what is left.
pub fn apply_claim(
    pool: &Pool,
    purchase: &mut UserPurchase,
    claimer: &Pubkey,
    escrow_balance: u64,
    current_time: i64,
) -> Result<u64> {
    check_claim_open(pool, current_time)?;
    require!(purchase.pool_id == pool.pool_id, IdoError::AccountMismatch);

    let amount = purchase.claimable_amount(claimer)?;
    check_balance(escrow_balance, amount)?;

    purchase.mark_claimed(current_time);

    Ok(amount)
}

pub fn claim_tokens(ctx: Context<ClaimTokens>, _pool_id: u64) -> Result<()> {
    let pool = &ctx.accounts.pool;
    let user_purchase = &mut ctx.accounts.user_purchase;
    let claimer = &ctx.accounts.claimer;
    let clock = Clock::get()?;

    let amount = apply_claim(
        pool,
        user_purchase,
        &claimer.key(),
        ctx.accounts.token_vault.amount,
        clock.unix_timestamp,
    )?;

    transfer_from_pool_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.token_vault,
        &ctx.accounts.claimer_token_account,
        &ctx.accounts.pool_authority.to_account_info(),
        pool.pool_id,
        pool.authority_bump,
        amount,
    )?;

    let escrow_remaining = ctx.accounts.token_vault.amount
        .checked_sub(amount)
        .ok_or(IdoError::MathOverflow)?;

    emit!(TokensClaimed {
        pool: pool.key(),
        pool_id: pool.pool_id,
        user: claimer.key(),
        amount,
        escrow_remaining,
        timestamp: clock.unix_timestamp,
    });

    msg!("User {} claimed {} tokens from pool {}", claimer.key(), amount, pool.pool_id);

    Ok(())
}
