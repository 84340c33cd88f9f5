use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, events::ControlTransferred, state::SplitAccount};

#[derive(Accounts)]
pub struct AcceptControl<'info> {
    #[account(mut)]
    pub split: AccountLoader<'info, SplitAccount>,

    pub new_controller: Signer<'info>,
}

/// Accepts a pending control transfer (two-step pattern)
/// Only callable by the pending controller
/// Completes the transfer and clears pending_controller
pub fn handler(ctx: Context<AcceptControl>) -> Result<()> {
    let split = &mut ctx.accounts.split.load_mut()?;

    // Verify there is a pending transfer
    require!(
        split.pending_controller != Pubkey::default(),
        ErrorCode::NoPendingTransfer
    );

    // Verify signer is the pending controller
    require!(
        split.pending_controller == ctx.accounts.new_controller.key(),
        ErrorCode::Unauthorized
    );

    let old_controller = split.controller;
    let new_controller = ctx.accounts.new_controller.key();

    // Complete the transfer
    split.controller = new_controller;
    split.pending_controller = Pubkey::default();

    emit!(ControlTransferred {
        split: ctx.accounts.split.key(),
        old_controller,
        new_controller,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
