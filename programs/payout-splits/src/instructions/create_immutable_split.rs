use anchor_lang::prelude::*;

use crate::{
    constants::{IMMUTABLE_SPLIT_SEED, SPLIT_ACCOUNT_SIZE, SPLIT_ACCOUNT_VERSION, SPLIT_WALLET_SEED},
    errors::ErrorCode,
    events::SplitCreated,
    state::SplitAccount,
    utils::validated_hash,
};

#[derive(Accounts)]
#[instruction(
    recipients: Vec<Pubkey>,
    allocations: Vec<u32>,
    distributor_fee: u32,
    config_hash: [u8; 32]
)]
pub struct CreateImmutableSplit<'info> {
    #[account(
        init,
        payer = payer,
        space = SPLIT_ACCOUNT_SIZE,
        seeds = [IMMUTABLE_SPLIT_SEED, config_hash.as_ref()],
        bump
    )]
    pub split: AccountLoader<'info, SplitAccount>,

    /// CHECK: Custody wallet PDA; holds no data, only lamports and token accounts
    #[account(
        seeds = [SPLIT_WALLET_SEED, split.key().as_ref()],
        bump
    )]
    pub split_wallet: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a split with no controller at its content-derived address
/// `config_hash` seeds the address; it must match the submitted configuration
pub fn handler(
    ctx: Context<CreateImmutableSplit>,
    recipients: Vec<Pubkey>,
    allocations: Vec<u32>,
    distributor_fee: u32,
    config_hash: [u8; 32],
) -> Result<()> {
    let computed_hash = validated_hash(&recipients, &allocations, distributor_fee)?;
    require!(computed_hash == config_hash, ErrorCode::HashMismatch);

    let split = &mut ctx.accounts.split.load_init()?;

    split.version = SPLIT_ACCOUNT_VERSION;
    split.config_hash = config_hash;
    split.controller = Pubkey::default();
    split.pending_controller = Pubkey::default();
    split.bump = ctx.bumps.split;
    split.wallet_bump = ctx.bumps.split_wallet;

    emit!(SplitCreated {
        split: ctx.accounts.split.key(),
        wallet: ctx.accounts.split_wallet.key(),
        config_hash,
        controller: Pubkey::default(),
        recipient_count: recipients.len() as u32,
        distributor_fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
