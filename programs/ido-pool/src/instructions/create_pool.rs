use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::const_pda::const_config::CONFIG_BUMP;
use crate::constants::*;
use crate::errors::IdoError;
use crate::events::PoolCreated;
use crate::state::{Config, Pool, PoolTerms};
use crate::utils::check_balance;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreatePoolParams {
    pub pool_id: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub claim_time: i64,
    pub sale_amount: u64,
    pub price_per_token: u64,
}

#[derive(Accounts)]
#[instruction(params: CreatePoolParams)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = CONFIG_BUMP,
        constraint = config.can_create_pools(&creator.key()) @ IdoError::Unauthorized,
    )]
    pub config: Box<Account<'info, Config>>,

    /// Pool account; an existing pool under this id is rejected in the handler
    #[account(
        init_if_needed,
        payer = creator,
        space = Pool::SIZE,
        seeds = [POOL_SEED, &params.pool_id.to_le_bytes()],
        bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: keyless PDA, only ever used as a signer via its seeds
    #[account(
        seeds = [POOL_AUTHORITY_SEED, &params.pool_id.to_le_bytes()],
        bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// Sale token
    pub token_mint: Box<Account<'info, Mint>>,

    /// Payment token
    #[account(
        constraint = currency_mint.key() != token_mint.key() @ IdoError::AccountMismatch,
    )]
    pub currency_mint: Box<Account<'info, Mint>>,

    #[account(
        constraint = creator_token_account.mint == token_mint.key() @ IdoError::AccountMismatch,
        constraint = creator_token_account.owner == creator.key() @ IdoError::AccountMismatch,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    /// Escrow for the sale tokens
    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Receives buyer payments
    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = currency_mint,
        associated_token::authority = pool_authority,
    )]
    pub currency_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn create_pool(ctx: Context<CreatePool>, params: CreatePoolParams) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let creator = &ctx.accounts.creator;

    check_balance(ctx.accounts.creator_token_account.amount, params.sale_amount)?;

    let terms = PoolTerms {
        pool_id: params.pool_id,
        creator: creator.key(),
        token_mint: ctx.accounts.token_mint.key(),
        currency_mint: ctx.accounts.currency_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        currency_vault: ctx.accounts.currency_vault.key(),
        sale_amount: params.sale_amount,
        price_per_token: params.price_per_token,
        start_time: params.start_time,
        end_time: params.end_time,
        claim_time: params.claim_time,
    };
    pool.initialize(&terms, ctx.bumps.pool, ctx.bumps.pool_authority)?;

    emit!(PoolCreated {
        pool: pool.key(),
        pool_id: pool.pool_id,
        creator: pool.creator,
        token_mint: pool.token_mint,
        currency_mint: pool.currency_mint,
        sale_amount: pool.sale_amount,
        price_per_token: pool.price_per_token,
        start_time: pool.start_time,
        end_time: pool.end_time,
        claim_time: pool.claim_time,
    });

    msg!("Pool {} created", pool.pool_id);
    msg!("Sale: {} tokens at {} per token", pool.sale_amount, pool.price_per_token);
    msg!("Window: {} -> {}, claims from {}", pool.start_time, pool.end_time, pool.claim_time);

    Ok(())
}
