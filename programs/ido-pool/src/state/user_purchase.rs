use anchor_lang::prelude::*;

use crate::errors::IdoError;

#[account]
#[derive(Default)]
pub struct UserPurchase {
    /// Buyer address
    pub user: Pubkey,

    /// Associated pool id
    pub pool_id: u64,

    // ===== Contribution Information =====
    /// Amount of currency tokens spent
    pub amount_purchased: u64,

    /// Amount of sale tokens to claim
    pub tokens_to_claim: u64,

    // ===== Claim Status =====
    pub has_claimed: bool,

    /// bump seed
    pub bump: u8,

    // ===== Time Records =====
    /// First purchase time
    pub purchased_at: i64,

    /// Last updated time
    pub last_updated: i64,
}

impl UserPurchase {
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        8 + // pool_id
        8 + // amount_purchased
        8 + // tokens_to_claim
        1 + // has_claimed
        1 + // bump
        8 + // purchased_at
        8; // last_updated

    pub fn is_initialized(&self) -> bool {
        self.user != Pubkey::default()
    }

    /// Accumulate one purchase. Returns true when this call created the record.
    ///
    /// `tokens_granted` is the floor conversion of this call's payment alone,
    /// so two small purchases can credit fewer tokens than one large one.
    pub fn record_purchase(
        &mut self,
        user: Pubkey,
        pool_id: u64,
        bump: u8,
        currency_amount: u64,
        tokens_granted: u64,
        current_time: i64,
    ) -> Result<bool> {
        let is_first_purchase = !self.is_initialized();

        if is_first_purchase {
            self.user = user;
            self.pool_id = pool_id;
            self.amount_purchased = currency_amount;
            self.tokens_to_claim = tokens_granted;
            self.has_claimed = false;
            self.bump = bump;
            self.purchased_at = current_time;
        } else {
            require_keys_eq!(self.user, user, IdoError::Unauthorized);
            require!(self.pool_id == pool_id, IdoError::AccountMismatch);

            self.amount_purchased = self.amount_purchased
                .checked_add(currency_amount)
                .ok_or(error!(IdoError::MathOverflow))?;
            self.tokens_to_claim = self.tokens_to_claim
                .checked_add(tokens_granted)
                .ok_or(error!(IdoError::MathOverflow))?;
        }

        self.last_updated = current_time;

        Ok(is_first_purchase)
    }

    /// Tokens owed to `claimer`, if they may claim now
    pub fn claimable_amount(&self, claimer: &Pubkey) -> Result<u64> {
        require_keys_eq!(self.user, *claimer, IdoError::Unauthorized);
        require!(!self.has_claimed, IdoError::AlreadyClaimed);
        require!(self.tokens_to_claim > 0, IdoError::NothingToClaim);

        Ok(self.tokens_to_claim)
    }

    pub fn mark_claimed(&mut self, current_time: i64) {
        self.has_claimed = true;
        self.last_updated = current_time;
    }
}
