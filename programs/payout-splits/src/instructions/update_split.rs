use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    events::SplitUpdated,
    state::SplitAccount,
    utils::validated_hash,
};

#[derive(Accounts)]
pub struct UpdateSplit<'info> {
    #[account(
        mut,
        constraint = !split.load()?.is_immutable() @ ErrorCode::ImmutableSplit,
        constraint = split.load()?.controller == controller.key() @ ErrorCode::Unauthorized
    )]
    pub split: AccountLoader<'info, SplitAccount>,

    pub controller: Signer<'info>,
}

/// Replaces the committed configuration hash
/// Only callable by the controller; pending control transfers are left in place
pub fn handler(
    ctx: Context<UpdateSplit>,
    recipients: Vec<Pubkey>,
    allocations: Vec<u32>,
    distributor_fee: u32,
) -> Result<()> {
    let new_config_hash = validated_hash(&recipients, &allocations, distributor_fee)?;

    let split = &mut ctx.accounts.split.load_mut()?;
    let old_config_hash = split.config_hash;

    split.config_hash = new_config_hash;

    emit!(SplitUpdated {
        split: ctx.accounts.split.key(),
        controller: ctx.accounts.controller.key(),
        old_config_hash,
        new_config_hash,
        recipient_count: recipients.len() as u32,
        distributor_fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
