use anchor_lang::prelude::*;

// ===== Seeds =====
/// Platform-wide config record
#[constant]
pub const CONFIG_SEED: &[u8] = b"ido_platform_seed";

/// Pool record, keyed by pool id
#[constant]
pub const POOL_SEED: &[u8] = b"pool";

/// Keyless authority owning a pool's vaults
#[constant]
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";

/// Per (buyer, pool) purchase record
#[constant]
pub const USER_PURCHASE_SEED: &[u8] = b"user_purchase";
