use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::IdoError;
use crate::events::TokensPurchased;
use crate::state::{Pool, UserPurchase};
use crate::utils::{calculate_tokens_for_currency, check_balance, check_sale_open};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// One record per (buyer, pool); its address serializes concurrent buys
    #[account(
        init_if_needed,
        payer = buyer,
        space = UserPurchase::SIZE,
        seeds = [USER_PURCHASE_SEED, buyer.key().as_ref(), &pool_id.to_le_bytes()],
        bump,
    )]
    pub user_purchase: Box<Account<'info, UserPurchase>>,

    #[account(
        mut,
        constraint = buyer_currency_account.mint == pool.currency_mint @ IdoError::AccountMismatch,
        constraint = buyer_currency_account.owner == buyer.key() @ IdoError::AccountMismatch,
    )]
    pub buyer_currency_account: Box<Account<'info, TokenAccount>>,

    /// Pool proceeds vault
    #[account(
        mut,
        address = pool.currency_vault @ IdoError::AccountMismatch,
    )]
    pub currency_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub tokens_granted: u64,
    pub is_first_purchase: bool,
}

/// Record a purchase against the pool and the buyer's record.
///
/// Each call converts only its own payment, so `tokens_to_claim` is the sum of
/// per-call floors rather than the floor of the cumulative payment.
pub fn apply_purchase(
    pool: &mut Pool,
    purchase: &mut UserPurchase,
    buyer: Pubkey,
    purchase_bump: u8,
    currency_amount: u64,
    current_time: i64,
) -> Result<PurchaseReceipt> {
    check_sale_open(pool, current_time)?;
    require!(currency_amount > 0, IdoError::ZeroAmount);

    let tokens_granted = calculate_tokens_for_currency(currency_amount, pool.price_per_token)?;

    pool.record_raise(currency_amount)?;
    let is_first_purchase = purchase.record_purchase(
        buyer,
        pool.pool_id,
        purchase_bump,
        currency_amount,
        tokens_granted,
        current_time,
    )?;

    Ok(PurchaseReceipt {
        tokens_granted,
        is_first_purchase,
    })
}

pub fn buy_tokens(ctx: Context<BuyTokens>, _pool_id: u64, currency_amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let user_purchase = &mut ctx.accounts.user_purchase;
    let buyer = &ctx.accounts.buyer;
    let clock = Clock::get()?;

    check_balance(ctx.accounts.buyer_currency_account.amount, currency_amount)?;

    let receipt = apply_purchase(
        pool,
        user_purchase,
        buyer.key(),
        ctx.bumps.user_purchase,
        currency_amount,
        clock.unix_timestamp,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_currency_account.to_account_info(),
                to: ctx.accounts.currency_vault.to_account_info(),
                authority: buyer.to_account_info(),
            },
        ),
        currency_amount,
    )?;

    emit!(TokensPurchased {
        pool: pool.key(),
        pool_id: pool.pool_id,
        buyer: buyer.key(),
        currency_amount,
        tokens_granted: receipt.tokens_granted,
        amount_purchased: user_purchase.amount_purchased,
        tokens_to_claim: user_purchase.tokens_to_claim,
        total_raised: pool.total_raised,
        is_first_purchase: receipt.is_first_purchase,
        timestamp: clock.unix_timestamp,
    });

    msg!("User {} bought {} tokens for {}", buyer.key(), receipt.tokens_granted, currency_amount);
    msg!("Total raised: {}", pool.total_raised);

    Ok(())
}
