use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub payer: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SplitCreated {
    pub split: Pubkey,
    pub wallet: Pubkey,
    pub config_hash: [u8; 32],
    /// Zero pubkey for immutable splits
    pub controller: Pubkey,
    pub recipient_count: u32,
    pub distributor_fee: u32,
    pub timestamp: i64,
}

#[event]
pub struct SplitUpdated {
    pub split: Pubkey,
    pub controller: Pubkey,
    pub old_config_hash: [u8; 32],
    pub new_config_hash: [u8; 32],
    pub recipient_count: u32,
    pub distributor_fee: u32,
    pub timestamp: i64,
}

#[event]
pub struct ControlTransferInitiated {
    pub split: Pubkey,
    pub controller: Pubkey,
    pub pending_controller: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ControlTransferCancelled {
    pub split: Pubkey,
    pub controller: Pubkey,
    pub cancelled_controller: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ControlTransferred {
    pub split: Pubkey,
    pub old_controller: Pubkey,
    pub new_controller: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ControlRenounced {
    pub split: Pubkey,
    pub old_controller: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SplitDistributed {
    pub split: Pubkey,
    /// Zero pubkey for native lamports, mint otherwise
    pub asset: Pubkey,
    /// Gross amount split, before the distributor fee is taken
    pub amount: u64,
    pub distributor_fee_amount: u64,
    pub distributor_address: Pubkey,
    pub flushed_from_wallet: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawal {
    pub account: Pubkey,
    pub native_amount: u64,
    pub mints: Vec<Pubkey>,
    pub token_amounts: Vec<u64>,
    pub timestamp: i64,
}
