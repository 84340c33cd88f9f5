use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{BALANCE_FLOOR, CUSTODY_TOKEN_FLOOR, POOL_SEED, SPLIT_WALLET_SEED},
    errors::ErrorCode,
    events::SplitDistributed,
    state::{Pool, SplitAccount},
    utils::{
        compute_distribution, credit_distribution, distributable_amount, resolve_distributor,
        split_balance_accounts, transfer_tokens_signed, validated_hash, write_balance, Ledger,
    },
};

#[derive(Accounts)]
pub struct DistributeToken<'info> {
    pub split: AccountLoader<'info, SplitAccount>,

    /// CHECK: Custody wallet PDA; only signs for its token account
    #[account(
        seeds = [SPLIT_WALLET_SEED, split.key().as_ref()],
        bump = split.load()?.wallet_bump
    )]
    pub split_wallet: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = split_wallet,
        associated_token::token_program = token_program,
    )]
    pub split_wallet_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Ledger entry for (split, mint); address validated in handler
    #[account(mut)]
    pub split_balance: UncheckedAccount<'info>,

    #[account(
        seeds = [POOL_SEED],
        bump = pool.load()?.bump
    )]
    pub pool: AccountLoader<'info, Pool>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub pool_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// Permissionless trigger; pays rent for ledger entries opened here
    #[account(mut)]
    pub distributor: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Distributes the split's tokens of one mint into the balance ledger
/// Permissionless - anyone holding the full configuration can call
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
    recipients: Vec<Pubkey>,
    allocations: Vec<u32>,
    distributor_fee: u32,
    distributor_address: Pubkey,
) -> Result<()> {
    let split_key = ctx.accounts.split.key();
    let mint_key = ctx.accounts.mint.key();

    // Phase 1: Verify the submitted configuration against the committed hash
    let (config_hash, wallet_bump) = {
        let split = ctx.accounts.split.load()?;
        (split.config_hash, split.wallet_bump)
    };

    let submitted_hash = validated_hash(&recipients, &allocations, distributor_fee)?;
    require!(submitted_hash == config_hash, ErrorCode::HashMismatch);

    let (recipient_balances, fee_balance) =
        split_balance_accounts(ctx.remaining_accounts, recipients.len(), distributor_fee)?;
    let distributor_address =
        resolve_distributor(distributor_address, ctx.accounts.distributor.key());

    let payer = ctx.accounts.distributor.to_account_info();
    let system_program_info = ctx.accounts.system_program.to_account_info();
    let ledger = Ledger {
        payer: &payer,
        system_program: &system_program_info,
    };

    // Phase 2: Ledger effects
    let split_balance = ctx.accounts.split_balance.to_account_info();
    let mut split_entry = ledger.open(&split_balance, &split_key, &mint_key)?;
    let custody_amount = ctx.accounts.split_wallet_token_account.amount;

    // Checked: an inflated mint balance fails this distribution only
    let (amount_to_split, flush_amount) =
        distributable_amount(split_entry.amount, custody_amount, CUSTODY_TOKEN_FLOOR)?;

    split_entry.amount = BALANCE_FLOOR;
    write_balance(&split_balance, &split_entry)?;

    let distribution = compute_distribution(amount_to_split, &allocations, distributor_fee)?;
    credit_distribution(
        &ledger,
        &mint_key,
        &recipients,
        &distribution,
        recipient_balances,
        fee_balance,
        &distributor_address,
    )?;

    // Phase 3: Flush custody into the pool only after the ledger is settled
    if flush_amount > 0 {
        let seeds = &[SPLIT_WALLET_SEED, split_key.as_ref(), &[wallet_bump]];
        let signer_seeds = &[&seeds[..]];

        transfer_tokens_signed(
            ctx.accounts.split_wallet_token_account.to_account_info(),
            ctx.accounts.pool_token_account.to_account_info(),
            &ctx.accounts.mint,
            ctx.accounts.split_wallet.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            flush_amount,
            signer_seeds,
        )?;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Distributed {} of mint {} from {} ({} flushed)",
        amount_to_split,
        mint_key,
        split_key,
        flush_amount
    );

    emit!(SplitDistributed {
        split: split_key,
        asset: mint_key,
        amount: amount_to_split,
        distributor_fee_amount: distribution.distributor_fee,
        distributor_address,
        flushed_from_wallet: flush_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
