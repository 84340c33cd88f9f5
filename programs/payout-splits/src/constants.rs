use anchor_lang::prelude::*;

// Percentage scale (1_000_000 = 100.000000%)
pub const PERCENTAGE_SCALE: u32 = 1_000_000;
pub const MAX_DISTRIBUTOR_FEE: u32 = 100_000; // 10%

// Recipient limits
pub const MIN_RECIPIENTS: usize = 2;

// Native asset is keyed by the zero pubkey in the balance ledger
pub const NATIVE_ASSET: Pubkey = Pubkey::new_from_array([0u8; 32]);

// Ledger entries never drop below this once touched
pub const BALANCE_FLOOR: u64 = 1;
// Units the custody wallet keeps after a flush
// A data-less system account can be drained to zero, so native keeps nothing
pub const CUSTODY_NATIVE_FLOOR: u64 = 0;
pub const CUSTODY_TOKEN_FLOOR: u64 = 1;

pub const SPLIT_ACCOUNT_VERSION: u8 = 1;

// PDA seeds
pub const SPLIT_SEED: &[u8] = b"split";
pub const IMMUTABLE_SPLIT_SEED: &[u8] = b"immutable_split";
pub const SPLIT_WALLET_SEED: &[u8] = b"split_wallet";
pub const POOL_SEED: &[u8] = b"pool";
pub const BALANCE_SEED: &[u8] = b"balance";

// Account sizes
// Pool: discriminator (8) + bump (1)
pub const POOL_SIZE: usize = 8 + 1; // 9 bytes

// SplitAccount size calculation:
// - discriminator: 8
// - version: 1
// - config_hash: 32
// - controller: 32
// - pending_controller: 32
// - bump: 1
// - wallet_bump: 1
// Total: 8 + 1 + 32 + 32 + 32 + 1 + 1 = 107 (all fields 1-byte aligned, no padding)
pub const SPLIT_ACCOUNT_SIZE: usize = 107;

// BalanceEntry (borsh): discriminator (8) + account (32) + asset (32) + amount (8) + bump (1)
pub const BALANCE_ENTRY_SIZE: usize = 8 + 32 + 32 + 8 + 1; // 81 bytes

// Trailing accounts per mint in withdraw: balance entry, mint, pool token account, destination
pub const WITHDRAW_ACCOUNTS_PER_MINT: usize = 4;
