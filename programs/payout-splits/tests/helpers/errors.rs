//! Error code re-exports from the program
//!
//! Anchor custom errors start at 6000.

pub use payout_splits::errors::ErrorCode;

/// Convert ErrorCode to u32 for ProgramError::Custom
pub fn error_code(code: ErrorCode) -> u32 {
    6000 + code as u32
}
