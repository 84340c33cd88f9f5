use anchor_lang::prelude::*;

use crate::constants::BALANCE_FLOOR;

/// Shared pool backing the balance ledger (single instance)
///
/// Native funds live in this account's lamports above its rent-exempt minimum;
/// token funds live in associated token accounts owned by this PDA.
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct Pool {
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
}

/// Per-split record: only the hash of the recipient set is kept on-chain
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct SplitAccount {
    /// Schema version for future upgrades
    pub version: u8,
    /// Hash of (recipients, allocations, distributor_fee)
    pub config_hash: [u8; 32],
    /// Controller that can update this split (default = immutable)
    pub controller: Pubkey,
    /// Pending controller for two-step transfer (default = no pending transfer)
    pub pending_controller: Pubkey,
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Bump seed of the custody wallet PDA
    pub wallet_bump: u8,
}

impl SplitAccount {
    pub fn controller(&self) -> Option<Pubkey> {
        (self.controller != Pubkey::default()).then_some(self.controller)
    }

    pub fn pending_controller(&self) -> Option<Pubkey> {
        (self.pending_controller != Pubkey::default()).then_some(self.pending_controller)
    }

    pub fn is_immutable(&self) -> bool {
        self.controller == Pubkey::default()
    }
}

/// Ledger entry for one (account, asset) pair
///
/// Created at `BALANCE_FLOOR` on first touch and never driven back to zero.
#[account]
pub struct BalanceEntry {
    pub account: Pubkey,
    /// Zero pubkey for native lamports, mint otherwise
    pub asset: Pubkey,
    /// Stored amount, including the floor unit
    pub amount: u64,
    pub bump: u8,
}

impl BalanceEntry {
    /// Amount available for withdrawal
    pub fn withdrawable(&self) -> u64 {
        self.amount.saturating_sub(BALANCE_FLOOR)
    }
}

// Compile-time size assertions to catch accidental struct changes
// Pool: discriminator (8) + bump (1) = 9
const _: () = assert!(std::mem::size_of::<Pool>() == 1); // 9 - 8 (discriminator added by Anchor)

// SplitAccount: See constants.rs for full breakdown = 107
const _: () = assert!(std::mem::size_of::<SplitAccount>() == 99); // 107 - 8 (discriminator added by Anchor)
