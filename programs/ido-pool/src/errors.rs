use anchor_lang::prelude::*;

#[error_code]
pub enum IdoError {
    // ===== Lifecycle Errors =====
    #[msg("Platform config is already initialized")]
    AlreadyInitialized,

    #[msg("A pool with this id already exists")]
    PoolAlreadyExists,

    // ===== Parameter Errors =====
    #[msg("Pool times must satisfy start < end < claim")]
    InvalidTimeOrdering,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    // ===== Permission Errors =====
    #[msg("Unauthorized")]
    Unauthorized,

    // ===== Time Errors =====
    #[msg("Sale is not open")]
    SaleNotOpen,

    #[msg("Sale has not ended yet")]
    SaleStillOpen,

    #[msg("Claim period has not started")]
    ClaimNotYetOpen,

    // ===== Claim Errors =====
    #[msg("Already claimed")]
    AlreadyClaimed,

    #[msg("Nothing to claim")]
    NothingToClaim,

    // ===== Token Errors =====
    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Token account does not match the pool")]
    AccountMismatch,

    // ===== Math Errors =====
    #[msg("Math overflow")]
    MathOverflow,
}
