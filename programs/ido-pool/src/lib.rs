#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod const_pda;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("CkuW9DsH4FhZwbeHV8mx26nosemXZDHYz92QJ5Nb5frM");

#[program]
pub mod ido_pool {
    use super::*;

    /// Create the platform config (once)
    pub fn initialize(ctx: Context<Initialize>, owner: Pubkey, creator: Pubkey) -> Result<()> {
        instructions::initialize(ctx, owner, creator)
    }

    /// Register a new sale pool; moves no tokens
    pub fn create_pool(ctx: Context<CreatePool>, params: CreatePoolParams) -> Result<()> {
        instructions::create_pool(ctx, params)
    }

    /// Move the sale supply from the creator into the pool escrow
    pub fn fund_pool(ctx: Context<FundPool>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::fund_pool(ctx, pool_id, amount)
    }

    /// Pay currency into an open pool
    pub fn buy_tokens(
        ctx: Context<BuyTokens>,
        pool_id: u64,
        currency_amount: u64,
    ) -> Result<()> {
        instructions::buy_tokens(ctx, pool_id, currency_amount)
    }

    /// Redeem purchased tokens after claim time
    pub fn claim_tokens(ctx: Context<ClaimTokens>, pool_id: u64) -> Result<()> {
        instructions::claim_tokens(ctx, pool_id)
    }

    /// Creator sweeps the collected currency after the sale closes
    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>, pool_id: u64) -> Result<()> {
        instructions::withdraw_proceeds(ctx, pool_id)
    }
}
