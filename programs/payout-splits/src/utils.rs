use anchor_lang::{
    prelude::*,
    system_program::{self, Allocate, Assign, CreateAccount, Transfer},
};
use solana_sha256_hasher::hash;
use anchor_spl::{
    token, token_2022,
    token_interface::{self, Mint, TokenAccount, TransferChecked},
};

use crate::{
    constants::{
        BALANCE_ENTRY_SIZE, BALANCE_FLOOR, BALANCE_SEED, IMMUTABLE_SPLIT_SEED,
        MAX_DISTRIBUTOR_FEE, MIN_RECIPIENTS, PERCENTAGE_SCALE,
    },
    errors::ErrorCode,
    state::BalanceEntry,
};

/// Checks that a split configuration is well-formed
///
/// Rules are checked in a fixed priority order so inputs violating several
/// of them always fail with the same error.
pub fn validate_split(
    recipients: &[Pubkey],
    allocations: &[u32],
    distributor_fee: u32,
) -> Result<()> {
    require!(recipients.len() >= MIN_RECIPIENTS, ErrorCode::TooFewRecipients);
    require!(
        recipients.len() == allocations.len(),
        ErrorCode::LengthMismatch
    );

    // A sum that overflows u32 can never equal the scale
    let total = allocations
        .iter()
        .try_fold(0u32, |acc, a| acc.checked_add(*a));
    require!(total == Some(PERCENTAGE_SCALE), ErrorCode::AllocationSumInvalid);

    // Strict ordering gives uniqueness and a canonical hash
    if let Some(i) = recipients.windows(2).position(|pair| pair[0] >= pair[1]) {
        msg!("Recipient out of order or duplicated at index {}", i);
        return err!(ErrorCode::OutOfOrderOrDuplicate);
    }

    if let Some(i) = allocations.iter().position(|a| *a == 0) {
        msg!("Zero allocation at index {}", i);
        return err!(ErrorCode::ZeroAllocation);
    }

    require!(
        distributor_fee <= MAX_DISTRIBUTOR_FEE,
        ErrorCode::FeeTooHigh
    );

    Ok(())
}

/// Hash committing to a split configuration
///
/// Preimage: recipients (32 bytes each) || allocations (u32 LE each) || fee (u32 LE).
/// Every field is fixed width and the total length fixes the recipient count.
pub fn hash_split(recipients: &[Pubkey], allocations: &[u32], distributor_fee: u32) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(recipients.len() * 36 + 4);
    for recipient in recipients {
        preimage.extend_from_slice(recipient.as_ref());
    }
    for allocation in allocations {
        preimage.extend_from_slice(&allocation.to_le_bytes());
    }
    preimage.extend_from_slice(&distributor_fee.to_le_bytes());

    hash(&preimage).to_bytes()
}

/// Validates a configuration and returns its hash
pub fn validated_hash(
    recipients: &[Pubkey],
    allocations: &[u32],
    distributor_fee: u32,
) -> Result<[u8; 32]> {
    validate_split(recipients, allocations, distributor_fee)?;
    Ok(hash_split(recipients, allocations, distributor_fee))
}

/// Handle an immutable split with this configuration hash receives
pub fn immutable_split_address(config_hash: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[IMMUTABLE_SPLIT_SEED, config_hash.as_ref()], &crate::ID)
}

/// Scale an amount by a weight out of PERCENTAGE_SCALE, rounding down
pub fn scale_amount(amount: u64, weight: u32) -> Result<u64> {
    // Multiply before dividing; u128 cannot overflow for u64 * u32
    let scaled = (amount as u128)
        .checked_mul(weight as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(PERCENTAGE_SCALE as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    scaled
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Amounts owed out of one distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub distributor_fee: u64,
    /// Per-recipient credits, in recipient order
    pub shares: Vec<u64>,
}

impl Distribution {
    pub fn total(&self) -> Option<u64> {
        self.shares
            .iter()
            .try_fold(self.distributor_fee, |acc, share| acc.checked_add(*share))
    }
}

/// Splits `amount` into the distributor fee and recipient shares
///
/// Every amount is floored independently. Rounding dust stays with the pool
/// and is never redistributed.
pub fn compute_distribution(
    amount: u64,
    allocations: &[u32],
    distributor_fee: u32,
) -> Result<Distribution> {
    let fee_amount = if distributor_fee != 0 {
        scale_amount(amount, distributor_fee)?
    } else {
        0
    };

    let remaining = amount
        .checked_sub(fee_amount)
        .ok_or(ErrorCode::MathUnderflow)?;

    let shares = allocations
        .iter()
        .map(|allocation| scale_amount(remaining, *allocation))
        .collect::<Result<Vec<u64>>>()?;

    Ok(Distribution {
        distributor_fee: fee_amount,
        shares,
    })
}

/// Returns (amount to split, amount to flush out of custody)
///
/// The split's ledger entry is always open here, so its floor unit is
/// excluded along with whatever floor the custody wallet keeps.
pub fn distributable_amount(
    ledger_amount: u64,
    custody_amount: u64,
    custody_floor: u64,
) -> Result<(u64, u64)> {
    let flush_amount = custody_amount.saturating_sub(custody_floor);

    let amount = ledger_amount
        .checked_sub(BALANCE_FLOOR)
        .ok_or(ErrorCode::NothingToDistribute)?
        .checked_add(flush_amount)
        .ok_or(ErrorCode::MathOverflow)?;

    require!(amount > 0, ErrorCode::NothingToDistribute);

    Ok((amount, flush_amount))
}

/// Keeper fee goes to the signer unless another address is named
pub fn resolve_distributor(distributor_address: Pubkey, signer: Pubkey) -> Pubkey {
    if distributor_address == Pubkey::default() {
        signer
    } else {
        distributor_address
    }
}

/// Splits trailing accounts into recipient ledger entries and the fee recipient's entry
pub fn split_balance_accounts<'a, 'info>(
    remaining: &'a [AccountInfo<'info>],
    recipient_count: usize,
    distributor_fee: u32,
) -> Result<(&'a [AccountInfo<'info>], Option<&'a AccountInfo<'info>>)> {
    let required = recipient_count + usize::from(distributor_fee != 0);
    require!(
        remaining.len() >= required,
        ErrorCode::InsufficientRemainingAccounts
    );

    let (recipient_balances, rest) = remaining.split_at(recipient_count);
    let fee_balance = if distributor_fee != 0 {
        rest.first()
    } else {
        None
    };

    Ok((recipient_balances, fee_balance))
}

/// Ledger PDA for an (account, asset) pair
pub fn balance_address(account: &Pubkey, asset: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BALANCE_SEED, account.as_ref(), asset.as_ref()],
        &crate::ID,
    )
}

/// Verifies `info` is the ledger PDA for (account, asset) and returns its bump
pub fn check_balance_address(info: &AccountInfo, account: &Pubkey, asset: &Pubkey) -> Result<u8> {
    let (expected, bump) = balance_address(account, asset);
    require!(info.key() == expected, ErrorCode::InvalidBalanceAccount);
    Ok(bump)
}

/// Reads a ledger entry; untouched pairs have no entry yet
pub fn read_balance(
    info: &AccountInfo,
    account: &Pubkey,
    asset: &Pubkey,
) -> Result<Option<BalanceEntry>> {
    check_balance_address(info, account, asset)?;
    load_existing(info)
}

fn load_existing(info: &AccountInfo) -> Result<Option<BalanceEntry>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let entry = BalanceEntry::try_deserialize(&mut &data[..])?;
    Ok(Some(entry))
}

/// Writes a ledger entry back to its account
pub fn write_balance(info: &AccountInfo, entry: &BalanceEntry) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    entry.try_serialize(&mut writer)?;
    Ok(())
}

/// Resets an entry to the floor and returns the amount taken off it
pub fn drain_balance(info: &AccountInfo, account: &Pubkey, asset: &Pubkey) -> Result<u64> {
    let mut entry = read_balance(info, account, asset)?.ok_or(ErrorCode::NothingToWithdraw)?;

    let amount = entry.withdrawable();
    require!(amount > 0, ErrorCode::NothingToWithdraw);

    entry.amount = BALANCE_FLOOR;
    write_balance(info, &entry)?;

    Ok(amount)
}

/// Accounts needed to open ledger entries on first touch
pub struct Ledger<'a, 'info> {
    pub payer: &'a AccountInfo<'info>,
    pub system_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> Ledger<'a, 'info> {
    /// Loads an entry, creating it at the floor if the pair was never touched
    pub fn open(
        &self,
        info: &AccountInfo<'info>,
        account: &Pubkey,
        asset: &Pubkey,
    ) -> Result<BalanceEntry> {
        let bump = check_balance_address(info, account, asset)?;
        self.open_checked(info, account, asset, bump)
    }

    /// Adds `amount` to the (account, asset) entry
    pub fn credit(
        &self,
        info: &AccountInfo<'info>,
        account: &Pubkey,
        asset: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        let bump = check_balance_address(info, account, asset)?;

        // Rounded-away shares don't open cold entries
        if amount == 0 {
            return Ok(());
        }

        let mut entry = self.open_checked(info, account, asset, bump)?;
        entry.amount = entry
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        write_balance(info, &entry)
    }

    fn open_checked(
        &self,
        info: &AccountInfo<'info>,
        account: &Pubkey,
        asset: &Pubkey,
        bump: u8,
    ) -> Result<BalanceEntry> {
        match load_existing(info)? {
            Some(entry) => Ok(entry),
            None => self.create(info, account, asset, bump),
        }
    }

    fn create(
        &self,
        info: &AccountInfo<'info>,
        account: &Pubkey,
        asset: &Pubkey,
        bump: u8,
    ) -> Result<BalanceEntry> {
        let bump_seed = [bump];
        let seeds = &[BALANCE_SEED, account.as_ref(), asset.as_ref(), &bump_seed[..]];
        let signer_seeds = &[&seeds[..]];

        let rent = Rent::get()?.minimum_balance(BALANCE_ENTRY_SIZE);
        let current_lamports = info.lamports();

        if current_lamports == 0 {
            system_program::create_account(
                CpiContext::new_with_signer(
                    self.system_program.clone(),
                    CreateAccount {
                        from: self.payer.clone(),
                        to: info.clone(),
                    },
                    signer_seeds,
                ),
                rent,
                BALANCE_ENTRY_SIZE as u64,
                &crate::ID,
            )?;
        } else {
            // Someone pre-funded the address; top up, allocate and assign instead
            let top_up = rent.saturating_sub(current_lamports);
            if top_up > 0 {
                system_program::transfer(
                    CpiContext::new(
                        self.system_program.clone(),
                        Transfer {
                            from: self.payer.clone(),
                            to: info.clone(),
                        },
                    ),
                    top_up,
                )?;
            }
            system_program::allocate(
                CpiContext::new_with_signer(
                    self.system_program.clone(),
                    Allocate {
                        account_to_allocate: info.clone(),
                    },
                    signer_seeds,
                ),
                BALANCE_ENTRY_SIZE as u64,
            )?;
            system_program::assign(
                CpiContext::new_with_signer(
                    self.system_program.clone(),
                    Assign {
                        account_to_assign: info.clone(),
                    },
                    signer_seeds,
                ),
                &crate::ID,
            )?;
        }

        let entry = BalanceEntry {
            account: *account,
            asset: *asset,
            amount: BALANCE_FLOOR,
            bump,
        };
        write_balance(info, &entry)?;

        #[cfg(feature = "verbose")]
        msg!("Opened ledger entry for {} / {}", account, asset);

        Ok(entry)
    }
}

/// Credits the distributor fee, then each recipient's share, for one asset
pub fn credit_distribution<'info>(
    ledger: &Ledger<'_, 'info>,
    asset: &Pubkey,
    recipients: &[Pubkey],
    distribution: &Distribution,
    recipient_balances: &[AccountInfo<'info>],
    fee_balance: Option<&AccountInfo<'info>>,
    distributor_address: &Pubkey,
) -> Result<()> {
    if let Some(info) = fee_balance {
        ledger.credit(info, distributor_address, asset, distribution.distributor_fee)?;
    }

    for ((recipient, share), info) in recipients
        .iter()
        .zip(distribution.shares.iter())
        .zip(recipient_balances.iter())
    {
        ledger.credit(info, recipient, asset, *share)?;
    }

    Ok(())
}

/// Validates that a token account belongs to `owner` and holds `mint`
pub fn validate_token_destination<'info>(
    info: &'info AccountInfo<'info>,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<InterfaceAccount<'info, TokenAccount>> {
    // Must be owned by token program (SPL Token or Token-2022)
    let valid_owner = info.owner == &token::ID || info.owner == &token_2022::ID;
    require!(valid_owner, ErrorCode::InvalidTokenProgram);

    let token_account = InterfaceAccount::<'info, TokenAccount>::try_from(info)
        .map_err(|_| ErrorCode::InvalidTokenAccount)?;

    require!(token_account.owner == *owner, ErrorCode::InvalidTokenAccount);
    require!(token_account.mint == *mint, ErrorCode::InvalidTokenAccount);

    Ok(token_account)
}

/// Moves tokens out of a PDA-owned token account
#[allow(clippy::too_many_arguments)]
pub fn transfer_tokens_signed<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint: mint.to_account_info(),
        to,
        authority,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}
