pub mod const_config {
    use anchor_lang::solana_program::pubkey::Pubkey;
    use const_crypto::ed25519;
    use crate::constants::CONFIG_SEED;

    const CONFIG_AND_BUMP: ([u8; 32], u8) = ed25519::derive_program_address(
        &[CONFIG_SEED],
        &crate::ID_CONST.to_bytes(),
    );

    pub const CONFIG_ADDRESS: Pubkey = Pubkey::new_from_array(CONFIG_AND_BUMP.0);

    pub const CONFIG_BUMP: u8 = CONFIG_AND_BUMP.1;
}
