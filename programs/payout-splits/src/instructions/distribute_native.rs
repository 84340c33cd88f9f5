use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::{
    constants::{BALANCE_FLOOR, CUSTODY_NATIVE_FLOOR, NATIVE_ASSET, POOL_SEED, SPLIT_WALLET_SEED},
    errors::ErrorCode,
    events::SplitDistributed,
    state::{Pool, SplitAccount},
    utils::{
        compute_distribution, credit_distribution, distributable_amount, resolve_distributor,
        split_balance_accounts, validated_hash, write_balance, Ledger,
    },
};

#[derive(Accounts)]
pub struct DistributeNative<'info> {
    pub split: AccountLoader<'info, SplitAccount>,

    #[account(
        mut,
        seeds = [SPLIT_WALLET_SEED, split.key().as_ref()],
        bump = split.load()?.wallet_bump
    )]
    pub split_wallet: SystemAccount<'info>,

    /// CHECK: Ledger entry for (split, native); address validated in handler
    #[account(mut)]
    pub split_balance: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.load()?.bump
    )]
    pub pool: AccountLoader<'info, Pool>,

    /// Permissionless trigger; pays rent for ledger entries opened here
    #[account(mut)]
    pub distributor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Distributes the split's lamports into the balance ledger
/// Permissionless - anyone holding the full configuration can call
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeNative<'info>>,
    recipients: Vec<Pubkey>,
    allocations: Vec<u32>,
    distributor_fee: u32,
    distributor_address: Pubkey,
) -> Result<()> {
    let split_key = ctx.accounts.split.key();

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
    let mut split_entry = ledger.open(&split_balance, &split_key, &NATIVE_ASSET)?;
    let custody_amount = ctx.accounts.split_wallet.lamports();

    let (amount_to_split, flush_amount) =
        distributable_amount(split_entry.amount, custody_amount, CUSTODY_NATIVE_FLOOR)?;

    split_entry.amount = BALANCE_FLOOR;
    write_balance(&split_balance, &split_entry)?;

    let distribution = compute_distribution(amount_to_split, &allocations, distributor_fee)?;
    credit_distribution(
        &ledger,
        &NATIVE_ASSET,
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

        system_program::transfer(
            CpiContext::new_with_signer(
                system_program_info.clone(),
                Transfer {
                    from: ctx.accounts.split_wallet.to_account_info(),
                    to: ctx.accounts.pool.to_account_info(),
                },
                signer_seeds,
            ),
            flush_amount,
        )?;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Distributed {} lamports from {} ({} flushed)",
        amount_to_split,
        split_key,
        flush_amount
    );

    emit!(SplitDistributed {
        split: split_key,
        asset: NATIVE_ASSET,
        amount: amount_to_split,
        distributor_fee_amount: distribution.distributor_fee,
        distributor_address,
        flushed_from_wallet: flush_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
