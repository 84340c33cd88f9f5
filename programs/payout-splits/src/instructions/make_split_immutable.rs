use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, events::ControlRenounced, state::SplitAccount};

#[derive(Accounts)]
pub struct MakeSplitImmutable<'info> {
    #[account(
        mut,
        constraint = !split.load()?.is_immutable() @ ErrorCode::ImmutableSplit,
        constraint = split.load()?.controller == controller.key() @ ErrorCode::Unauthorized
    )]
    pub split: AccountLoader<'info, SplitAccount>,

    pub controller: Signer<'info>,
}

/// Renounces control permanently
/// Clears any pending transfer; no instruction can set a controller afterwards
pub fn handler(ctx: Context<MakeSplitImmutable>) -> Result<()> {
    let split = &mut ctx.accounts.split.load_mut()?;

    split.controller = Pubkey::default();
    split.pending_controller = Pubkey::default();

    emit!(ControlRenounced {
        split: ctx.accounts.split.key(),
        old_controller: ctx.accounts.controller.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
