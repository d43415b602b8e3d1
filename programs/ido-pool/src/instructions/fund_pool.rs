use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::POOL_SEED;
use crate::errors::IdoError;
use crate::events::PoolFunded;
use crate::state::Pool;
use crate::utils::{check_balance, validate_fund_amount};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct FundPool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.creator == creator.key() @ IdoError::Unauthorized,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        constraint = creator_token_account.mint == pool.token_mint @ IdoError::AccountMismatch,
        constraint = creator_token_account.owner == creator.key() @ IdoError::AccountMismatch,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    /// Pool escrow, owned by the pool authority
    #[account(
        mut,
        address = pool.token_vault @ IdoError::AccountMismatch,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Move the declared sale supply into escrow.
///
/// Nothing records that a pool was funded; a second call moves another
/// `sale_amount` into the same escrow.
pub fn fund_pool(ctx: Context<FundPool>, _pool_id: u64, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    validate_fund_amount(&ctx.accounts.pool, amount)?;
    check_balance(ctx.accounts.creator_token_account.amount, amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.token_vault.reload()?;
    let pool = &ctx.accounts.pool;
    let escrow_balance = ctx.accounts.token_vault.amount;

    emit!(PoolFunded {
        pool: pool.key(),
        pool_id: pool.pool_id,
        creator: pool.creator,
        amount,
        escrow_balance,
        timestamp: clock.unix_timestamp,
    });

    msg!("Pool {} funded with {} tokens", pool.pool_id, amount);
    msg!("Escrow balance: {}", escrow_balance);

    Ok(())
}
