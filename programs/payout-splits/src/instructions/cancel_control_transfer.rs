use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, events::ControlTransferCancelled, state::SplitAccount};

#[derive(Accounts)]
pub struct CancelControlTransfer<'info> {
    #[account(
        mut,
        constraint = !split.load()?.is_immutable() @ ErrorCode::ImmutableSplit,
        constraint = split.load()?.controller == controller.key() @ ErrorCode::Unauthorized
    )]
    pub split: AccountLoader<'info, SplitAccount>,

    pub controller: Signer<'info>,
}

/// Withdraws a pending control transfer
/// Only callable by the current controller
pub fn handler(ctx: Context<CancelControlTransfer>) -> Result<()> {
    let split = &mut ctx.accounts.split.load_mut()?;

    let cancelled_controller = split
        .pending_controller()
        .ok_or(ErrorCode::NoPendingTransfer)?;

    split.pending_controller = Pubkey::default();

    emit!(ControlTransferCancelled {
        split: ctx.accounts.split.key(),
        controller: ctx.accounts.controller.key(),
        cancelled_controller,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
