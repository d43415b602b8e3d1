use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::IdoError;
use crate::events::ProceedsWithdrawn;
use crate::state::Pool;
use crate::utils::{check_sale_ended, transfer_from_pool_vault};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct WithdrawProceeds<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
        constraint = pool.creator == creator.key() @ IdoError::Unauthorized,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Pool proceeds vault
    #[account(
        mut,
        address = pool.currency_vault @ IdoError::AccountMismatch,
    )]
    pub currency_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = creator_currency_account.mint == pool.currency_mint @ IdoError::AccountMismatch,
        constraint = creator_currency_account.owner == creator.key() @ IdoError::AccountMismatch,
    )]
    pub creator_currency_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: keyless PDA, signs the vault transfer via its seeds
    #[account(
        seeds = [POOL_AUTHORITY_SEED, &pool_id.to_le_bytes()],
        bump = pool.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

/// Validate a proceeds sweep. Returns the amount to move out of the vault.
///
/// `total_raised` is left untouched; it records what was paid in, not what
/// is still held.
pub fn apply_withdraw(
    pool: &Pool,
    withdrawer: &Pubkey,
    vault_balance: u64,
    current_time: i64,
) -> Result<u64> {
    require_keys_eq!(pool.creator, *withdrawer, IdoError::Unauthorized);
    check_sale_ended(pool, current_time)?;
    require!(vault_balance > 0, IdoError::NothingToClaim);

    Ok(vault_balance)
}

/// Sweep collected currency to the creator once the sale window has closed
pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>, _pool_id: u64) -> Result<()> {
    let pool = &ctx.accounts.pool;
    let clock = Clock::get()?;

    let amount = apply_withdraw(
        pool,
        &ctx.accounts.creator.key(),
        ctx.accounts.currency_vault.amount,
        clock.unix_timestamp,
    )?;

    transfer_from_pool_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.currency_vault,
        &ctx.accounts.creator_currency_account,
        &ctx.accounts.pool_authority.to_account_info(),
        pool.pool_id,
        pool.authority_bump,
        amount,
    )?;

    emit!(ProceedsWithdrawn {
        pool: pool.key(),
        pool_id: pool.pool_id,
        creator: pool.creator,
        amount,
        total_raised: pool.total_raised,
        timestamp: clock.unix_timestamp,
    });

    msg!("Creator withdrew {} from pool {}", amount, pool.pool_id);

    Ok(())
}
