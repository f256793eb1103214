//! Pure accounting rules for deposits, withdrawals and pool reports.
//!
//! Everything here is free of storage and host calls so the contract can run
//! every check before it touches state or calls the token.

use odra::casper_types::{U256, U512};
use crate::errors::{StakingError, StakingResult};

/// Fixed-point scale for stake percentages (1e8 = 100%)
pub const PERCENTAGE_SCALE: u64 = 100_000_000;

/// Milliseconds per second, block time is reported in milliseconds
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Convert host block time to whole seconds since the Unix epoch.
pub fn block_time_to_seconds(block_time_ms: u64) -> u64 {
    block_time_ms / MILLIS_PER_SECOND
}

/// Validate the window of a new project.
pub fn validate_project_window(start: u64, end: u64, now: u64) -> StakingResult<()> {
    if start < now {
        return Err(StakingError::StartInPast);
    }
    if start >= end {
        return Err(StakingError::StartNotBeforeEnd);
    }
    Ok(())
}

/// Deposits are accepted in `[start, end)`.
pub fn check_deposit_window(start: u64, end: u64, now: u64) -> StakingResult<()> {
    if now < start {
        return Err(StakingError::StakingNotYetOpen);
    }
    if now >= end {
        return Err(StakingError::StakingClosed);
    }
    Ok(())
}

/// Withdrawals are accepted from `end` onwards.
pub fn check_withdraw_window(end: u64, now: u64) -> StakingResult<()> {
    if now < end {
        return Err(StakingError::WithdrawNotYetPermitted);
    }
    Ok(())
}

/// Compute a user's stake after depositing `amount`, enforcing the pool cap.
pub fn stake_after_deposit(current: U256, amount: U256, max_per_user: U256) -> StakingResult<U256> {
    if amount.is_zero() {
        return Err(StakingError::AmountNotSpecified);
    }
    match current.checked_add(amount) {
        Some(total) if total <= max_per_user => Ok(total),
        _ => Err(StakingError::CapExceeded),
    }
}

/// `floor(amount * 1e8 / total)`, multiplied in 512 bits so it cannot overflow
pub fn percentage_of(amount: U256, total: U256) -> StakingResult<U256> {
    if total.is_zero() {
        return Err(StakingError::EmptyPool);
    }
    let scaled = u256_to_u512(amount) * U512::from(PERCENTAGE_SCALE);
    Ok(u512_to_u256_saturating(scaled / u256_to_u512(total)))
}

fn u256_to_u512(value: U256) -> U512 {
    let mut bytes = [0u8; 32];
    value.to_little_endian(&mut bytes);
    U512::from_little_endian(&bytes)
}

/// Lower 256 bits, or `U256::MAX` if the value does not fit
fn u512_to_u256_saturating(value: U512) -> U256 {
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    if bytes[32..].iter().any(|byte| *byte != 0) {
        return U256::MAX;
    }
    U256::from_little_endian(&bytes[..32])
}

/// Registry index range `[start, end)` covered by a 1-indexed page.
///
/// Checks run in the order reports reject them: empty registry, page size,
/// page number, then range.
pub fn page_window(page_number: u64, page_size: u64, registry_len: u64) -> StakingResult<(u64, u64)> {
    if registry_len == 0 {
        return Err(StakingError::EmptyPool);
    }
    if page_size == 0 {
        return Err(StakingError::InvalidPageSize);
    }
    if page_number == 0 {
        return Err(StakingError::InvalidPageNumber);
    }

    let start = (page_number - 1)
        .checked_mul(page_size)
        .ok_or(StakingError::PageOutOfRange)?;
    if start >= registry_len {
        return Err(StakingError::PageOutOfRange);
    }

    let end = start.saturating_add(page_size).min(registry_len);
    Ok((start, end))
}
