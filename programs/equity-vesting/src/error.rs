use anchor_lang::prelude::*;

#[error_code]
pub enum VestingError {
    #[msg("Schedule window out of order: start <= cliff <= end required.")]
    InvalidScheduleWindow,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Company name is empty or exceeds the maximum length.")]
    InvalidCompanyName,
    #[msg("Signer is not authorized for this pool or schedule.")]
    Unauthorized,
    #[msg("Nothing to claim.")]
    NothingToClaim,
    #[msg("Treasury balance does not cover the claim.")]
    InsufficientTreasuryBalance,
    #[msg("Math overflow.")]
    MathOverflow,
}
