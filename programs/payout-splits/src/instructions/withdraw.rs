use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::get_associated_token_address_with_program_id,
    token_interface::{Mint, TokenInterface},
};

use crate::{
    constants::{NATIVE_ASSET, POOL_SEED, WITHDRAW_ACCOUNTS_PER_MINT},
    errors::ErrorCode,
    events::Withdrawal,
    state::Pool,
    utils::{drain_balance, transfer_tokens_signed, validate_token_destination},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// CHECK: Intentionally not a Signer - withdrawals are permissionless because
    /// funds can only ever flow to this account (or token accounts it owns).
    /// Splits are program-owned; their entries are drained by distribute_*
    #[account(
        mut,
        constraint = account.owner != &crate::ID @ ErrorCode::ProgramOwnedAccount
    )]
    pub account: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.load()?.bump
    )]
    pub pool: AccountLoader<'info, Pool>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Pays out an account's ledger balances
///
/// remaining_accounts: the native balance entry (if `withdraw_native`), then for
/// each mint: [balance entry, mint, pool token account, destination token account]
///
/// Returns the withdrawn amounts, native first, then mints in request order.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
    withdraw_native: bool,
    mints: Vec<Pubkey>,
) -> Result<Vec<u64>> {
    let account_key = ctx.accounts.account.key();
    let pool_key = ctx.accounts.pool.key();
    let pool_bump = ctx.accounts.pool.load()?.bump;

    let native_slots = usize::from(withdraw_native);
    let required = mints
        .len()
        .checked_mul(WITHDRAW_ACCOUNTS_PER_MINT)
        .and_then(|n| n.checked_add(native_slots))
        .ok_or(ErrorCode::MathOverflow)?;
    require!(
        ctx.remaining_accounts.len() >= required,
        ErrorCode::InsufficientRemainingAccounts
    );

    // Phase 1: Reset every requested entry to its floor before moving funds
    let native_amount = if withdraw_native {
        drain_balance(&ctx.remaining_accounts[0], &account_key, &NATIVE_ASSET)?
    } else {
        0
    };

    let mint_accounts = &ctx.remaining_accounts[native_slots..required];
    let mut token_amounts = Vec::with_capacity(mints.len());
    for (mint_key, accounts) in mints
        .iter()
        .zip(mint_accounts.chunks(WITHDRAW_ACCOUNTS_PER_MINT))
    {
        token_amounts.push(drain_balance(&accounts[0], &account_key, mint_key)?);
    }

    // Phase 2: Token transfers out of the pool
    let seeds = &[POOL_SEED, &[pool_bump]];
    let signer_seeds = &[&seeds[..]];

    for ((mint_key, accounts), amount) in mints
        .iter()
        .zip(mint_accounts.chunks(WITHDRAW_ACCOUNTS_PER_MINT))
        .zip(token_amounts.iter())
    {
        let mint_info = &accounts[1];
        let pool_token_info = &accounts[2];
        let destination_info = &accounts[3];

        require!(mint_info.key() == *mint_key, ErrorCode::InvalidTokenAccount);
        let mint = InterfaceAccount::<'info, Mint>::try_from(mint_info)
            .map_err(|_| ErrorCode::InvalidTokenAccount)?;

        // Pool funds for a mint live in the pool's canonical ATA
        let expected_pool_ata = get_associated_token_address_with_program_id(
            &pool_key,
            mint_key,
            &ctx.accounts.token_program.key(),
        );
        require!(
            pool_token_info.key() == expected_pool_ata,
            ErrorCode::InvalidTokenAccount
        );

        let destination = validate_token_destination(destination_info, &account_key, mint_key)?;

        transfer_tokens_signed(
            pool_token_info.clone(),
            destination.to_account_info(),
            &mint,
            ctx.accounts.pool.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            *amount,
            signer_seeds,
        )?;
    }

    // Phase 3: Native lamports straight out of the program-owned pool
    if native_amount > 0 {
        ctx.accounts.pool.sub_lamports(native_amount)?;
        ctx.accounts.account.add_lamports(native_amount)?;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Withdrew {} lamports and {} token balances for {}",
        native_amount,
        token_amounts.len(),
        account_key
    );

    emit!(Withdrawal {
        account: account_key,
        native_amount,
        mints,
        token_amounts: token_amounts.clone(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    let mut amounts = Vec::with_capacity(native_slots + token_amounts.len());
    if withdraw_native {
        amounts.push(native_amount);
    }
    amounts.extend(token_amounts);

    Ok(amounts)
}
