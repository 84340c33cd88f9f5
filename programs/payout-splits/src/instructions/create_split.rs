use anchor_lang::prelude::*;

use crate::{
    constants::{SPLIT_ACCOUNT_SIZE, SPLIT_ACCOUNT_VERSION, SPLIT_SEED, SPLIT_WALLET_SEED},
    errors::ErrorCode,
    events::SplitCreated,
    state::SplitAccount,
    utils::validated_hash,
};

#[derive(Accounts)]
pub struct CreateSplit<'info> {
    #[account(
        init,
        payer = payer,
        space = SPLIT_ACCOUNT_SIZE,
        seeds = [SPLIT_SEED, unique_id.key().as_ref()],
        bump
    )]
    pub split: AccountLoader<'info, SplitAccount>,

    /// CHECK: Custody wallet PDA; holds no data, only lamports and token accounts
    #[account(
        seeds = [SPLIT_WALLET_SEED, split.key().as_ref()],
        bump
    )]
    pub split_wallet: UncheckedAccount<'info>,

    /// CHECK: Used only as PDA seed for uniqueness
    pub unique_id: AccountInfo<'info>,

    /// Account paying rent for the split (need not be the controller)
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a mutable split controlled by `controller`
pub fn handler(
    ctx: Context<CreateSplit>,
    recipients: Vec<Pubkey>,
    allocations: Vec<u32>,
    distributor_fee: u32,
    controller: Pubkey,
) -> Result<()> {
    require!(controller != Pubkey::default(), ErrorCode::InvalidController);

    let config_hash = validated_hash(&recipients, &allocations, distributor_fee)?;

    let split = &mut ctx.accounts.split.load_init()?;

    split.version = SPLIT_ACCOUNT_VERSION;
    split.config_hash = config_hash;
    split.controller = controller;
    split.pending_controller = Pubkey::default(); // No pending transfer initially
    split.bump = ctx.bumps.split;
    split.wallet_bump = ctx.bumps.split_wallet;

    emit!(SplitCreated {
        split: ctx.accounts.split.key(),
        wallet: ctx.accounts.split_wallet.key(),
        config_hash,
        controller,
        recipient_count: recipients.len() as u32,
        distributor_fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
