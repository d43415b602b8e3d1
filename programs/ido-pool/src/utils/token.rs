use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::POOL_AUTHORITY_SEED;
use crate::errors::IdoError;

/// Sale tokens bought by `currency_amount`, rounded down.
///
/// The remainder is still collected; it just earns no fractional credit.
pub fn calculate_tokens_for_currency(currency_amount: u64, price_per_token: u64) -> Result<u64> {
    let tokens = currency_amount
        .checked_div(price_per_token)
        .ok_or(IdoError::InvalidAmount)?;

    Ok(tokens)
}

/// Move tokens out of a pool vault, signed by the pool's derived authority
pub fn transfer_from_pool_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    pool_authority: &AccountInfo<'info>,
    pool_id: u64,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(vault.owner, pool_authority.key(), IdoError::Unauthorized);
    crate::utils::check_balance(vault.amount, amount)?;

    let pool_id_bytes = pool_id.to_le_bytes();
    let seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, &pool_id_bytes, &[authority_bump]];
    let signer_seeds = &[seeds];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: destination.to_account_info(),
                authority: pool_authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_conversion() {
        assert_eq!(calculate_tokens_for_currency(50_000, 100).unwrap(), 500);
        assert_eq!(calculate_tokens_for_currency(150, 100).unwrap(), 1);
        assert_eq!(calculate_tokens_for_currency(99, 100).unwrap(), 0);
        assert_eq!(calculate_tokens_for_currency(u64::MAX, 1).unwrap(), u64::MAX);
    }

    #[test]
    fn test_zero_price_rejected() {
        assert_eq!(
            calculate_tokens_for_currency(100, 0).unwrap_err(),
            IdoError::InvalidAmount.into()
        );
    }
}
