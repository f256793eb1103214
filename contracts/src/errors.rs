//! Staking pool error definitions.

use odra::prelude::*;

/// Staking pool errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StakingError {
    // Access control errors (1xx)
    Unauthorized = 100,

    // Project errors (2xx)
    ProjectNotFound = 200,
    EmptyProjectName = 201,
    ProjectNameTaken = 202,
    StartInPast = 203,
    StartNotBeforeEnd = 204,

    // Pool errors (3xx)
    PoolNotFound = 300,
    EmptyPool = 301,

    // Deposit errors (4xx)
    AmountNotSpecified = 400,
    StakingNotYetOpen = 401,
    StakingClosed = 402,
    CapExceeded = 403,

    // Withdraw errors (5xx)
    WithdrawNotYetPermitted = 500,
    AlreadyWithdrawn = 501,
    NothingToWithdraw = 502,

    // Reporting errors (6xx)
    InvalidPageSize = 600,
    InvalidPageNumber = 601,
    PageOutOfRange = 602,

    // Token errors (7xx)
    TokenTransferFailed = 700,
    InsufficientTokenBalance = 701,
    InsufficientAllowance = 702,
    TokenNotConfigured = 703,
}

/// Coarse classification of [`StakingError`] for callers that only care about
/// the kind of rejection, not the exact bound that was violated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Unauthorized,
    InvalidArgument,
    NotFound,
    NameTaken,
    InvalidWindow,
    NotYetOpen,
    WindowClosed,
    NotYetPermitted,
    CapExceeded,
    AlreadyWithdrawn,
    NothingToWithdraw,
    EmptyPool,
    OutOfRange,
    Token,
}

impl StakingError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Access control
            StakingError::Unauthorized => "Caller is not the owner",

            // Project
            StakingError::ProjectNotFound => "Invalid project ID",
            StakingError::EmptyProjectName => "Project name cannot be empty string",
            StakingError::ProjectNameTaken => "Project name already taken",
            StakingError::StartInPast => "startTimestamp is less than the current block timestamp",
            StakingError::StartNotBeforeEnd => "startTimestamp is greater than or equal to the endTimestamp",

            // Pool
            StakingError::PoolNotFound => "Invalid pool ID",
            StakingError::EmptyPool => "Nobody staked in this pool",

            // Deposit
            StakingError::AmountNotSpecified => "Amount not specified",
            StakingError::StakingNotYetOpen => "Staking is not yet permitted for this project",
            StakingError::StakingClosed => "Staking no longer permitted for this project",
            StakingError::CapExceeded => "Cannot exceed max staking amount per user",

            // Withdraw
            StakingError::WithdrawNotYetPermitted => "Withdrawal is not yet permitted for this project",
            StakingError::AlreadyWithdrawn => "User has already withdrawn funds for this pool",
            StakingError::NothingToWithdraw => "User has no staked funds in this pool",

            // Reporting
            StakingError::InvalidPageSize => "Invalid page size",
            StakingError::InvalidPageNumber => "Invalid page number",
            StakingError::PageOutOfRange => "Specified parameters exceed number of users in the pool",

            // Token
            StakingError::TokenTransferFailed => "Token transfer failed",
            StakingError::InsufficientTokenBalance => "Insufficient token balance",
            StakingError::InsufficientAllowance => "Insufficient token allowance",
            StakingError::TokenNotConfigured => "Staking token is not configured",
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            StakingError::Unauthorized => ErrorKind::Unauthorized,
            StakingError::EmptyProjectName
            | StakingError::AmountNotSpecified
            | StakingError::InvalidPageSize
            | StakingError::InvalidPageNumber => ErrorKind::InvalidArgument,
            StakingError::ProjectNotFound | StakingError::PoolNotFound => ErrorKind::NotFound,
            StakingError::ProjectNameTaken => ErrorKind::NameTaken,
            StakingError::StartInPast | StakingError::StartNotBeforeEnd => ErrorKind::InvalidWindow,
            StakingError::StakingNotYetOpen => ErrorKind::NotYetOpen,
            StakingError::StakingClosed => ErrorKind::WindowClosed,
            StakingError::WithdrawNotYetPermitted => ErrorKind::NotYetPermitted,
            StakingError::CapExceeded => ErrorKind::CapExceeded,
            StakingError::AlreadyWithdrawn => ErrorKind::AlreadyWithdrawn,
            StakingError::NothingToWithdraw => ErrorKind::NothingToWithdraw,
            StakingError::EmptyPool => ErrorKind::EmptyPool,
            StakingError::PageOutOfRange => ErrorKind::OutOfRange,
            StakingError::TokenTransferFailed
            | StakingError::InsufficientTokenBalance
            | StakingError::InsufficientAllowance
            | StakingError::TokenNotConfigured => ErrorKind::Token,
        }
    }
}

impl core::fmt::Display for StakingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<StakingError> for OdraError {
    fn from(error: StakingError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}

/// Result type for the pure accounting helpers
pub type StakingResult<T> = Result<T, StakingError>;
