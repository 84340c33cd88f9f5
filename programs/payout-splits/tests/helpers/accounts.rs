//! Account creation helpers for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! In 0.5.1, all imports come from solana_sdk::* (not modular crates like solana_pubkey)
//! Token accounts MUST have owner explicitly set to spl_token::id()

use {
    mollusk_svm::Mollusk,
    // 0.5.1: All types from solana_sdk, not modular crates
    solana_sdk::{
        account::Account, program_pack::Pack, pubkey::Pubkey, rent::Rent, system_program,
    },
    super::{
        instructions::{
            derive_balance, derive_pool, derive_split, derive_split_wallet, SplitInput, PROGRAM_ID,
        },
        serialization::{
            config_hash, serialize_balance_entry, serialize_pool, serialize_split_account, SplitAccountData,
            BALANCE_ENTRY_SIZE, POOL_SIZE, SPLIT_ACCOUNT_SIZE,
        },
    },
    spl_associated_token_account::get_associated_token_address,
    spl_token::state::{Account as TokenAccount, AccountState, Mint},
};

/// Create a system-owned account with given lamports
pub fn system_account(lamports: u64) -> Account {
    Account {
        lamports,
        data: vec![],
        owner: system_program::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Create an uninitialized account (for init and cold ledger entries)
pub fn uninitialized_account() -> Account {
    Account {
        lamports: 0,
        data: vec![],
        owner: system_program::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Create a program-owned account with data
pub fn program_account(lamports: u64, data: Vec<u8>, owner: Pubkey) -> Account {
    Account {
        lamports,
        data,
        owner,
        executable: false,
        rent_epoch: 0,
    }
}

/// Create a mint account
///
/// NOTE (0.5.1): Must explicitly set owner to spl_token::id()
/// This was made more automatic in 0.6.1, but 0.5.1 requires explicit setup
pub fn mint_account(
    mint_authority: Option<Pubkey>,
    decimals: u8,
    supply: u64,
    rent: &Rent,
) -> Account {
    let mut data = vec![0u8; Mint::LEN];
    Mint::pack(
        Mint {
            mint_authority: mint_authority.into(),
            supply,
            decimals,
            is_initialized: true,
            freeze_authority: None.into(),
        },
        &mut data,
    )
    .unwrap();

    Account {
        lamports: rent.minimum_balance(Mint::LEN),
        data,
        // 0.5.1: MUST explicitly set owner to Token program
        owner: spl_token::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Create a token account
///
/// NOTE (0.5.1): Must explicitly set owner to spl_token::id()
/// This was made more automatic in 0.6.1, but 0.5.1 requires explicit setup
pub fn token_account(mint: Pubkey, token_owner: Pubkey, amount: u64, rent: &Rent) -> Account {
    let mut data = vec![0u8; TokenAccount::LEN];
    TokenAccount::pack(
        TokenAccount {
            mint,
            owner: token_owner,
            amount,
            delegate: None.into(),
            state: AccountState::Initialized,
            is_native: None.into(),
            delegated_amount: 0,
            close_authority: None.into(),
        },
        &mut data,
    )
    .unwrap();

    Account {
        lamports: rent.minimum_balance(TokenAccount::LEN),
        data,
        // 0.5.1: MUST explicitly set owner to Token program
        owner: spl_token::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Derive ATA address (classic token program)
pub fn derive_ata(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(wallet, mint)
}

/// Get rent from Mollusk
pub fn get_rent(mollusk: &Mollusk) -> Rent {
    mollusk.sysvars.rent.clone()
}

/// Create a system program account tuple for test setup
pub fn system_program_account() -> (Pubkey, Account) {
    (
        system_program::id(),
        Account {
            lamports: 1,
            data: vec![],
            owner: solana_sdk::native_loader::id(),
            executable: true,
            rent_epoch: 0,
        },
    )
}

/// Initialized pool PDA holding `held` lamports on top of its rent reserve
pub fn pool_account(rent: &Rent, held: u64) -> (Pubkey, Account) {
    let (pool, bump) = derive_pool();
    (
        pool,
        program_account(
            rent.minimum_balance(POOL_SIZE) + held,
            serialize_pool(bump),
            PROGRAM_ID,
        ),
    )
}

/// Initialized split account at `address`
pub fn split_account(rent: &Rent, address: Pubkey, split: &SplitAccountData) -> (Pubkey, Account) {
    (
        address,
        program_account(
            rent.minimum_balance(SPLIT_ACCOUNT_SIZE),
            serialize_split_account(split),
            PROGRAM_ID,
        ),
    )
}

/// Existing ledger entry for (account, asset) holding `amount` (floor included)
pub fn balance_account(rent: &Rent, account: &Pubkey, asset: &Pubkey, amount: u64) -> (Pubkey, Account) {
    let (address, bump) = derive_balance(account, asset);
    (
        address,
        program_account(
            rent.minimum_balance(BALANCE_ENTRY_SIZE),
            serialize_balance_entry(account, asset, amount, bump),
            PROGRAM_ID,
        ),
    )
}

/// Ledger address for a pair that was never touched
pub fn cold_balance_account(account: &Pubkey, asset: &Pubkey) -> (Pubkey, Account) {
    (derive_balance(account, asset).0, uninitialized_account())
}

/// Mutable split state at a fresh address, committed to `split_input`
pub fn mutable_split(
    split_input: &SplitInput,
    controller: Pubkey,
    pending_controller: Pubkey,
) -> (Pubkey, SplitAccountData) {
    let (address, bump) = derive_split(&Pubkey::new_unique());
    let (_, wallet_bump) = derive_split_wallet(&address);
    (
        address,
        SplitAccountData {
            version: 1,
            config_hash: config_hash(split_input),
            controller,
            pending_controller,
            bump,
            wallet_bump,
        },
    )
}
