use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct Config {
    /// Platform owner
    pub owner: Pubkey,

    /// Default pool creator
    pub creator: Pubkey,

    /// Set by the first initialize
    pub initialized: bool,

    /// bump seed
    pub bump: u8,
}

impl Config {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // creator
        1 + // initialized
        1; // bump

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Both the owner and the registered creator may open pools
    pub fn can_create_pools(&self, who: &Pubkey) -> bool {
        *who == self.creator || *who == self.owner
    }

    pub fn initialize(&mut self, owner: Pubkey, creator: Pubkey, bump: u8) -> Result<()> {
        require!(
            !self.is_initialized(),
            crate::errors::IdoError::AlreadyInitialized
        );
        self.owner = owner;
        self.creator = creator;
        self.initialized = true;
        self.bump = bump;

        Ok(())
    }
}
