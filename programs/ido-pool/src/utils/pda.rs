//! Address derivation for every record the program owns.
//!
//! All addresses are recomputable from public inputs, so clients never need a
//! lookup table. The pool authority has no private key: the program signs for
//! it by presenting the same seeds.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::*;

pub fn config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID)
}

pub fn pool_address(pool_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, &pool_id.to_le_bytes()], &crate::ID)
}

pub fn pool_authority_address(pool_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_AUTHORITY_SEED, &pool_id.to_le_bytes()], &crate::ID)
}

pub fn user_purchase_address(user: &Pubkey, pool_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_PURCHASE_SEED, user.as_ref(), &pool_id.to_le_bytes()],
        &crate::ID,
    )
}

/// Vault of `mint` owned by the pool authority (escrow or proceeds)
pub fn pool_vault_address(pool_id: u64, mint: &Pubkey) -> Pubkey {
    let (authority, _) = pool_authority_address(pool_id);
    get_associated_token_address(&authority, mint)
}
