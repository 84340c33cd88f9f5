use anchor_lang::prelude::*;

use crate::{
    state::SplitAccount,
    utils::{immutable_split_address, read_balance, validated_hash},
};

#[derive(Accounts)]
pub struct ReadSplit<'info> {
    pub split: AccountLoader<'info, SplitAccount>,
}

#[derive(Accounts)]
pub struct ReadBalance<'info> {
    /// CHECK: Ledger entry PDA; address validated against (account, asset) in handler
    pub balance: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct PredictImmutableSplit {}

pub fn get_config_hash(ctx: Context<ReadSplit>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.split.load()?.config_hash)
}

pub fn get_controller(ctx: Context<ReadSplit>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.split.load()?.controller())
}

pub fn get_pending_controller(ctx: Context<ReadSplit>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.split.load()?.pending_controller())
}

/// Withdrawable balance of (account, asset); untouched pairs report zero
pub fn get_balance(ctx: Context<ReadBalance>, account: Pubkey, asset: Pubkey) -> Result<u64> {
    let entry = read_balance(&ctx.accounts.balance.to_account_info(), &account, &asset)?;
    Ok(entry.map(|e| e.withdrawable()).unwrap_or(0))
}

/// Address create_immutable_split would assign this configuration
/// Validates exactly like creation so an invalid config never gets an address
pub fn predict_immutable_split(
    _ctx: Context<PredictImmutableSplit>,
    recipients: Vec<Pubkey>,
    allocations: Vec<u32>,
    distributor_fee: u32,
) -> Result<Pubkey> {
    let config_hash = validated_hash(&recipients, &allocations, distributor_fee)?;
    Ok(immutable_split_address(&config_hash).0)
}
