use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;

declare_id!("J1yiaarrKN9fXq4ztR8y5yWCALUEMCiUeRHzM6xi3kg2");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Payout Splits",
    project_url: "https://github.com/payout-splits/payout-splits",
    contacts: "link:https://github.com/payout-splits/payout-splits/security",
    policy: "https://github.com/payout-splits/payout-splits/blob/main/SECURITY.md",
    source_code: "https://github.com/payout-splits/payout-splits",
    source_release: "v0.1.0"
}

#[program]
pub mod payout_splits {
    use super::*;

    /// Creates the shared pool that holds all undistributed-to-wallet funds
    /// Called once per deployment
    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        instructions::initialize_pool::handler(ctx)
    }

    /// Creates a mutable split owned by `controller`
    /// Address derives from the `unique_id` account, not the configuration
    pub fn create_split(
        ctx: Context<CreateSplit>,
        recipients: Vec<Pubkey>,
        allocations: Vec<u32>,
        distributor_fee: u32,
        controller: Pubkey,
    ) -> Result<()> {
        instructions::create_split::handler(
            ctx,
            recipients,
            allocations,
            distributor_fee,
            controller,
        )
    }

    /// Creates a controller-less split at the address derived from its config hash
    pub fn create_immutable_split(
        ctx: Context<CreateImmutableSplit>,
        recipients: Vec<Pubkey>,
        allocations: Vec<u32>,
        distributor_fee: u32,
        config_hash: [u8; 32],
    ) -> Result<()> {
        instructions::create_immutable_split::handler(
            ctx,
            recipients,
            allocations,
            distributor_fee,
            config_hash,
        )
    }

    /// Returns the address create_immutable_split would use for this configuration
    pub fn predict_immutable_split(
        ctx: Context<PredictImmutableSplit>,
        recipients: Vec<Pubkey>,
        allocations: Vec<u32>,
        distributor_fee: u32,
    ) -> Result<Pubkey> {
        instructions::views::predict_immutable_split(ctx, recipients, allocations, distributor_fee)
    }

    /// Replaces the split's configuration
    /// Only callable by the controller; balances already credited are untouched
    pub fn update_split(
        ctx: Context<UpdateSplit>,
        recipients: Vec<Pubkey>,
        allocations: Vec<u32>,
        distributor_fee: u32,
    ) -> Result<()> {
        instructions::update_split::handler(ctx, recipients, allocations, distributor_fee)
    }

    /// Proposes a new controller (two-step pattern)
    /// New controller must call accept_control to complete
    pub fn transfer_control(ctx: Context<TransferControl>, new_controller: Pubkey) -> Result<()> {
        instructions::transfer_control::handler(ctx, new_controller)
    }

    /// Withdraws a pending control transfer
    pub fn cancel_control_transfer(ctx: Context<CancelControlTransfer>) -> Result<()> {
        instructions::cancel_control_transfer::handler(ctx)
    }

    /// Accepts a pending control transfer
    /// Only callable by the pending controller
    pub fn accept_control(ctx: Context<AcceptControl>) -> Result<()> {
        instructions::accept_control::handler(ctx)
    }

    /// Renounces control; the split can never be updated again
    pub fn make_split_immutable(ctx: Context<MakeSplitImmutable>) -> Result<()> {
        instructions::make_split_immutable::handler(ctx)
    }

    /// Splits the wallet's lamports plus the split's own native balance
    /// Permissionless - anyone can call
    pub fn distribute_native<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeNative<'info>>,
        recipients: Vec<Pubkey>,
        allocations: Vec<u32>,
        distributor_fee: u32,
        distributor_address: Pubkey,
    ) -> Result<()> {
        instructions::distribute_native::handler(
            ctx,
            recipients,
            allocations,
            distributor_fee,
            distributor_address,
        )
    }

    /// Splits the wallet's tokens of one mint plus the split's own balance of it
    /// Permissionless - anyone can call
    pub fn distribute_token<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
        recipients: Vec<Pubkey>,
        allocations: Vec<u32>,
        distributor_fee: u32,
        distributor_address: Pubkey,
    ) -> Result<()> {
        instructions::distribute_token::handler(
            ctx,
            recipients,
            allocations,
            distributor_fee,
            distributor_address,
        )
    }

    /// Pays out ledger balances to the account that owns them
    /// Permissionless - funds only ever reach the owning account
    pub fn withdraw<'info>(
        ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
        withdraw_native: bool,
        mints: Vec<Pubkey>,
    ) -> Result<Vec<u64>> {
        instructions::withdraw::handler(ctx, withdraw_native, mints)
    }

    pub fn get_config_hash(ctx: Context<ReadSplit>) -> Result<[u8; 32]> {
        instructions::views::get_config_hash(ctx)
    }

    pub fn get_controller(ctx: Context<ReadSplit>) -> Result<Option<Pubkey>> {
        instructions::views::get_controller(ctx)
    }

    pub fn get_pending_controller(ctx: Context<ReadSplit>) -> Result<Option<Pubkey>> {
        instructions::views::get_pending_controller(ctx)
    }

    /// Withdrawable amount of `asset` held for `account`
    pub fn get_balance(ctx: Context<ReadBalance>, account: Pubkey, asset: Pubkey) -> Result<u64> {
        instructions::views::get_balance(ctx, account, asset)
    }
}
