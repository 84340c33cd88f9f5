#![allow(ambiguous_glob_reexports)]

pub mod accept_control;
pub mod cancel_control_transfer;
pub mod create_immutable_split;
pub mod create_split;
pub mod distribute_native;
pub mod distribute_token;
pub mod initialize_pool;
pub mod make_split_immutable;
pub mod transfer_control;
pub mod update_split;
pub mod views;
pub mod withdraw;

pub use accept_control::*;
pub use cancel_control_transfer::*;
pub use create_immutable_split::*;
pub use create_split::*;
pub use distribute_native::*;
pub use distribute_token::*;
pub use initialize_pool::*;
pub use make_split_immutable::*;
pub use transfer_control::*;
pub use update_split::*;
pub use views::*;
pub use withdraw::*;
