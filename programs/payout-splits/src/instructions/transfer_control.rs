use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, events::ControlTransferInitiated, state::SplitAccount};

#[derive(Accounts)]
pub struct TransferControl<'info> {
    #[account(
        mut,
        constraint = !split.load()?.is_immutable() @ ErrorCode::ImmutableSplit,
        constraint = split.load()?.controller == controller.key() @ ErrorCode::Unauthorized
    )]
    pub split: AccountLoader<'info, SplitAccount>,

    pub controller: Signer<'info>,
}

/// Proposes a new controller (two-step pattern)
/// Only callable by the current controller
/// New controller must call accept_control to complete
/// Calling again while a transfer is pending replaces the pending controller
pub fn handler(ctx: Context<TransferControl>, new_controller: Pubkey) -> Result<()> {
    require!(
        new_controller != Pubkey::default(),
        ErrorCode::InvalidController
    );

    let split = &mut ctx.accounts.split.load_mut()?;
    split.pending_controller = new_controller;

    emit!(ControlTransferInitiated {
        split: ctx.accounts.split.key(),
        controller: ctx.accounts.controller.key(),
        pending_controller: new_controller,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
