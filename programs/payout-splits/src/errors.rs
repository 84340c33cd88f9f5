use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("A split needs at least 2 recipients")]
    TooFewRecipients,

    #[msg("Recipients and allocations must have the same length")]
    LengthMismatch,

    #[msg("Allocations must sum to 1_000_000 (100%)")]
    AllocationSumInvalid,

    #[msg("Recipients must be strictly increasing (sorted, no duplicates)")]
    OutOfOrderOrDuplicate,

    #[msg("Recipient allocation cannot be zero")]
    ZeroAllocation,

    #[msg("Distributor fee cannot exceed 100_000 (10%)")]
    FeeTooHigh,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Controller cannot be the zero address")]
    InvalidController,

    #[msg("Split is immutable")]
    ImmutableSplit,

    #[msg("No pending control transfer")]
    NoPendingTransfer,

    #[msg("Submitted configuration does not match the committed hash")]
    HashMismatch,

    #[msg("Nothing to distribute")]
    NothingToDistribute,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Balance account does not match the expected ledger address")]
    InvalidBalanceAccount,

    #[msg("Token account has wrong owner or mint")]
    InvalidTokenAccount,

    #[msg("Invalid token program")]
    InvalidTokenProgram,

    #[msg("Program-owned accounts cannot withdraw; splits redistribute their balance")]
    ProgramOwnedAccount,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,
}
