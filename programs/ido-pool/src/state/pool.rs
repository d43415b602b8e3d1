use anchor_lang::prelude::*;

use crate::errors::IdoError;

/// Sale phase, derived from the pool schedule on every call and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolPhase {
    Created,    // Before start_time
    Open,       // [start_time, end_time)
    Closed,     // [end_time, claim_time)
    Claimable,  // From claim_time on
}

/// Creation inputs copied into a fresh pool record
#[derive(Debug, Clone, Copy)]
pub struct PoolTerms {
    pub pool_id: u64,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub currency_mint: Pubkey,
    pub token_vault: Pubkey,
    pub currency_vault: Pubkey,
    pub sale_amount: u64,
    pub price_per_token: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub claim_time: i64,
}

#[account]
#[derive(Default)]
pub struct Pool {
    pub pool_id: u64,

    /// Pool creator, the only account allowed to fund it
    pub creator: Pubkey,

    pub token_mint: Pubkey,
    pub currency_mint: Pubkey,

    /// Escrow holding the sale tokens, owned by the pool authority
    pub token_vault: Pubkey,

    /// Receives buyer payments, owned by the pool authority
    pub currency_vault: Pubkey,

    // ===== Sale Terms =====
    /// Total tokens for sale
    pub sale_amount: u64,

    /// Currency units per sale token
    pub price_per_token: u64,

    // ===== Schedule =====
    pub start_time: i64,
    pub end_time: i64,
    pub claim_time: i64,

    /// Total currency raised
    pub total_raised: u64,

    pub is_active: bool,

    /// bump seed
    pub bump: u8,

    /// pool authority bump seed
    pub authority_bump: u8,
}

impl Pool {
    pub const SIZE: usize = 8 + // discriminator
        8 + // pool_id
        32 + // creator
        32 + // token_mint
        32 + // currency_mint
        32 + // token_vault
        32 + // currency_vault
        8 + // sale_amount
        8 + // price_per_token
        8 + // start_time
        8 + // end_time
        8 + // claim_time
        8 + // total_raised
        1 + // is_active
        1 + // bump
        1; // authority_bump

    pub fn is_initialized(&self) -> bool {
        self.creator != Pubkey::default()
    }

    /// Populate a freshly allocated pool record
    pub fn initialize(&mut self, terms: &PoolTerms, bump: u8, authority_bump: u8) -> Result<()> {
        require!(!self.is_initialized(), IdoError::PoolAlreadyExists);

        crate::utils::validate_schedule(terms.start_time, terms.end_time, terms.claim_time)?;
        crate::utils::validate_sale_terms(terms.sale_amount, terms.price_per_token)?;

        self.pool_id = terms.pool_id;
        self.creator = terms.creator;
        self.token_mint = terms.token_mint;
        self.currency_mint = terms.currency_mint;
        self.token_vault = terms.token_vault;
        self.currency_vault = terms.currency_vault;
        self.sale_amount = terms.sale_amount;
        self.price_per_token = terms.price_per_token;
        self.start_time = terms.start_time;
        self.end_time = terms.end_time;
        self.claim_time = terms.claim_time;
        self.total_raised = 0;
        self.is_active = true;
        self.bump = bump;
        self.authority_bump = authority_bump;

        Ok(())
    }

    pub fn phase(&self, now: i64) -> PoolPhase {
        if now < self.start_time {
            PoolPhase::Created
        } else if now < self.end_time {
            PoolPhase::Open
        } else if now < self.claim_time {
            PoolPhase::Closed
        } else {
            PoolPhase::Claimable
        }
    }

    /// Check if purchases are accepted at `now`
    pub fn is_open(&self, now: i64) -> bool {
        self.is_active && self.phase(now) == PoolPhase::Open
    }

    /// Check if the sale window is over
    pub fn has_ended(&self, now: i64) -> bool {
        matches!(self.phase(now), PoolPhase::Closed | PoolPhase::Claimable)
    }

    /// Update fundraising progress
    pub fn record_raise(&mut self, currency_amount: u64) -> Result<()> {
        self.total_raised = self.total_raised
            .checked_add(currency_amount)
            .ok_or(error!(IdoError::MathOverflow))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> PoolTerms {
        PoolTerms {
            pool_id: 7,
            creator: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            currency_mint: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            currency_vault: Pubkey::new_unique(),
            sale_amount: 1_000_000,
            price_per_token: 100,
            start_time: 1_000,
            end_time: 2_000,
            claim_time: 3_000,
        }
    }

    #[test]
    fn test_initialize_sets_defaults() {
        let terms = terms();
        let mut pool = Pool::default();
        pool.initialize(&terms, 250, 251).unwrap();

        assert!(pool.is_active);
        assert_eq!(pool.total_raised, 0);
        assert_eq!(pool.pool_id, 7);
        assert_eq!(pool.creator, terms.creator);
        assert_eq!(pool.sale_amount, 1_000_000);
        assert_eq!(pool.price_per_token, 100);
        assert_eq!(pool.bump, 250);
        assert_eq!(pool.authority_bump, 251);
    }

    #[test]
    fn test_initialize_twice_rejected() {
        let mut pool = Pool::default();
        pool.initialize(&terms(), 250, 251).unwrap();
        pool.record_raise(500).unwrap();

        let err = pool.initialize(&terms(), 250, 251).unwrap_err();
        assert_eq!(err, IdoError::PoolAlreadyExists.into());
        assert_eq!(pool.total_raised, 500);
    }

    #[test]
    fn test_initialize_rejects_bad_schedule() {
        let mut bad = terms();
        bad.end_time = bad.start_time;
        let err = Pool::default().initialize(&bad, 1, 1).unwrap_err();
        assert_eq!(err, IdoError::InvalidTimeOrdering.into());

        let mut bad = terms();
        bad.claim_time = bad.end_time;
        let err = Pool::default().initialize(&bad, 1, 1).unwrap_err();
        assert_eq!(err, IdoError::InvalidTimeOrdering.into());
    }

    #[test]
    fn test_initialize_rejects_zero_terms() {
        let mut bad = terms();
        bad.sale_amount = 0;
        let err = Pool::default().initialize(&bad, 1, 1).unwrap_err();
        assert_eq!(err, IdoError::InvalidAmount.into());

        let mut bad = terms();
        bad.price_per_token = 0;
        let err = Pool::default().initialize(&bad, 1, 1).unwrap_err();
        assert_eq!(err, IdoError::InvalidAmount.into());
    }

    #[test]
    fn test_phase_boundaries() {
        let mut pool = Pool::default();
        pool.initialize(&terms(), 1, 1).unwrap();

        assert_eq!(pool.phase(999), PoolPhase::Created);
        assert_eq!(pool.phase(1_000), PoolPhase::Open);
        assert_eq!(pool.phase(1_999), PoolPhase::Open);
        assert_eq!(pool.phase(2_000), PoolPhase::Closed);
        assert_eq!(pool.phase(2_999), PoolPhase::Closed);
        assert_eq!(pool.phase(3_000), PoolPhase::Claimable);
        assert_eq!(pool.phase(i64::MAX), PoolPhase::Claimable);
    }

    #[test]
    fn test_inactive_pool_is_never_open() {
        let mut pool = Pool::default();
        pool.initialize(&terms(), 1, 1).unwrap();
        assert!(pool.is_open(1_500));

        pool.is_active = false;
        assert!(!pool.is_open(1_500));
    }

    #[test]
    fn test_has_ended() {
        let mut pool = Pool::default();
        pool.initialize(&terms(), 1, 1).unwrap();

        assert!(!pool.has_ended(1_999));
        assert!(pool.has_ended(2_000));
        assert!(pool.has_ended(3_500));
    }

    #[test]
    fn test_record_raise_overflow() {
        let mut pool = Pool::default();
        pool.total_raised = u64::MAX - 1;
        pool.record_raise(1).unwrap();

        let err = pool.record_raise(1).unwrap_err();
        assert_eq!(err, IdoError::MathOverflow.into());
        assert_eq!(pool.total_raised, u64::MAX);
    }
}
