use anchor_lang::prelude::*;

use crate::{
    constants::{POOL_SEED, POOL_SIZE},
    events::PoolInitialized,
    state::Pool,
};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = payer,
        space = POOL_SIZE,
        seeds = [POOL_SEED],
        bump
    )]
    pub pool: AccountLoader<'info, Pool>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the shared pool backing the balance ledger
/// Can only succeed once; the rent-exempt reserve is never counted as ledger funds
pub fn handler(ctx: Context<InitializePool>) -> Result<()> {
    let pool = &mut ctx.accounts.pool.load_init()?;
    pool.bump = ctx.bumps.pool;

    emit!(PoolInitialized {
        pool: ctx.accounts.pool.key(),
        payer: ctx.accounts.payer.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
