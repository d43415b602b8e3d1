use anchor_lang::prelude::*;

// =============================================================================
// PLATFORM EVENTS
// =============================================================================

/// Event emitted when the platform config is created
#[event]
pub struct ConfigInitialized {
    /// Config account address
    pub config: Pubkey,
    /// Platform owner
    pub owner: Pubkey,
    /// Default pool creator
    pub creator: Pubkey,
}

// =============================================================================
// POOL LIFECYCLE EVENTS
// =============================================================================

/// Event emitted when a new pool is created
#[event]
pub struct PoolCreated {
    /// Pool account address
    pub pool: Pubkey,
    /// Pool id
    pub pool_id: u64,
    /// Creator of the pool
    pub creator: Pubkey,
    /// Sale token mint
    pub token_mint: Pubkey,
    /// Currency token mint
    pub currency_mint: Pubkey,
    /// Tokens offered for sale
    pub sale_amount: u64,
    /// Currency units per sale token
    pub price_per_token: u64,
    /// Sale opens
    pub start_time: i64,
    /// Sale closes
    pub end_time: i64,
    /// Claims open
    pub claim_time: i64,
}

/// Event emitted when the creator moves sale tokens into escrow
#[event]
pub struct PoolFunded {
    pub pool: Pubkey,
    pub pool_id: u64,
    pub creator: Pubkey,
    /// Amount transferred in this call
    pub amount: u64,
    /// Escrow balance after the transfer
    pub escrow_balance: u64,
    pub timestamp: i64,
}

/// Event emitted when the creator sweeps sale proceeds
#[event]
pub struct ProceedsWithdrawn {
    pub pool: Pubkey,
    pub pool_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
    pub total_raised: u64,
    pub timestamp: i64,
}

// =============================================================================
// BUYER EVENTS
// =============================================================================

/// Event emitted when a buyer pays into a pool
#[event]
pub struct TokensPurchased {
    /// Pool account address
    pub pool: Pubkey,
    pub pool_id: u64,
    /// Buyer
    pub buyer: Pubkey,
    /// Currency paid in this call
    pub currency_amount: u64,
    /// Sale tokens credited by this call
    pub tokens_granted: u64,
    /// Buyer's cumulative currency paid
    pub amount_purchased: u64,
    /// Buyer's cumulative claimable tokens
    pub tokens_to_claim: u64,
    /// Pool total after this purchase
    pub total_raised: u64,
    /// Whether this created the purchase record
    pub is_first_purchase: bool,
    pub timestamp: i64,
}

/// Event emitted when a buyer redeems their allocation
#[event]
pub struct TokensClaimed {
    pub pool: Pubkey,
    pub pool_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    /// Escrow balance left after the payout
    pub escrow_remaining: u64,
    pub timestamp: i64,
}
