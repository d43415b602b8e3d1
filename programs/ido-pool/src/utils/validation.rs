use anchor_lang::prelude::*;

use crate::errors::IdoError;
use crate::state::Pool;

/// Validate monotonic phase ordering: start < end < claim
pub fn validate_schedule(start_time: i64, end_time: i64, claim_time: i64) -> Result<()> {
    require!(
        start_time < end_time && end_time < claim_time,
        IdoError::InvalidTimeOrdering
    );

    Ok(())
}

pub fn validate_sale_terms(sale_amount: u64, price_per_token: u64) -> Result<()> {
    require!(sale_amount > 0, IdoError::InvalidAmount);
    require!(price_per_token > 0, IdoError::InvalidAmount);

    Ok(())
}

/// Funding must move exactly the declared sale amount
pub fn validate_fund_amount(pool: &Pool, amount: u64) -> Result<()> {
    require!(amount == pool.sale_amount, IdoError::InvalidAmount);

    Ok(())
}

/// Source account must cover the transfer
pub fn check_balance(available: u64, required: u64) -> Result<()> {
    require!(available >= required, IdoError::InsufficientFunds);

    Ok(())
}

/// Validate if within the purchase window
pub fn check_sale_open(pool: &Pool, current_time: i64) -> Result<()> {
    require!(pool.is_open(current_time), IdoError::SaleNotOpen);

    Ok(())
}

pub fn check_sale_ended(pool: &Pool, current_time: i64) -> Result<()> {
    require!(pool.has_ended(current_time), IdoError::SaleStillOpen);

    Ok(())
}

pub fn check_claim_open(pool: &Pool, current_time: i64) -> Result<()> {
    require!(
        current_time >= pool.claim_time,
        IdoError::ClaimNotYetOpen
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Pool {
        Pool {
            sale_amount: 1_000,
            price_per_token: 10,
            start_time: 100,
            end_time: 200,
            claim_time: 300,
            is_active: true,
            ..Pool::default()
        }
    }

    #[test]
    fn test_schedule_ordering() {
        assert!(validate_schedule(1, 2, 3).is_ok());
        assert!(validate_schedule(-5, 0, 5).is_ok());

        for (start, end, claim) in [(2, 2, 3), (1, 3, 3), (3, 2, 1), (1, 3, 2)] {
            let err = validate_schedule(start, end, claim).unwrap_err();
            assert_eq!(err, IdoError::InvalidTimeOrdering.into());
        }
    }

    #[test]
    fn test_fund_amount_must_match_sale_amount() {
        let pool = pool();
        assert!(validate_fund_amount(&pool, 1_000).is_ok());
        assert_eq!(
            validate_fund_amount(&pool, 999).unwrap_err(),
            IdoError::InvalidAmount.into()
        );
        assert_eq!(
            validate_fund_amount(&pool, 1_001).unwrap_err(),
            IdoError::InvalidAmount.into()
        );
    }

    #[test]
    fn test_balance_must_cover_amount() {
        assert!(check_balance(1_000, 1_000).is_ok());
        assert!(check_balance(1_001, 1_000).is_ok());
        assert!(check_balance(0, 0).is_ok());
        assert_eq!(
            check_balance(999, 1_000).unwrap_err(),
            IdoError::InsufficientFunds.into()
        );
    }

    #[test]
    fn test_sale_window_is_half_open() {
        let pool = pool();
        assert_eq!(check_sale_open(&pool, 99).unwrap_err(), IdoError::SaleNotOpen.into());
        assert!(check_sale_open(&pool, 100).is_ok());
        assert!(check_sale_open(&pool, 199).is_ok());
        assert_eq!(check_sale_open(&pool, 200).unwrap_err(), IdoError::SaleNotOpen.into());
        assert_eq!(check_sale_open(&pool, 300).unwrap_err(), IdoError::SaleNotOpen.into());
    }

    #[test]
    fn test_inactive_pool_rejects_sale() {
        let mut pool = pool();
        pool.is_active = false;
        assert_eq!(check_sale_open(&pool, 150).unwrap_err(), IdoError::SaleNotOpen.into());
    }

    #[test]
    fn test_claim_window() {
        let pool = pool();
        assert_eq!(check_claim_open(&pool, 299).unwrap_err(), IdoError::ClaimNotYetOpen.into());
        assert!(check_claim_open(&pool, 300).is_ok());

        assert_eq!(check_sale_ended(&pool, 199).unwrap_err(), IdoError::SaleStillOpen.into());
        assert!(check_sale_ended(&pool, 200).is_ok());
    }
}
