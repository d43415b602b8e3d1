use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::ConfigInitialized;
use crate::state::Config;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Platform config; a second initialize finds it populated and fails
    #[account(
        init_if_needed,
        payer = payer,
        space = Config::SIZE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, owner: Pubkey, creator: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.initialize(owner, creator, ctx.bumps.config)?;

    emit!(ConfigInitialized {
        config: config.key(),
        owner,
        creator,
    });

    msg!("Platform config initialized");
    msg!("Owner: {}", config.owner);
    msg!("Creator: {}", config.creator);

    Ok(())
}
