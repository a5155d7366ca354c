use anchor_lang::prelude::*;

/// Point-in-time view of one schedule, for off-chain indexers and the
/// employer/beneficiary UIs.
#[event]
pub struct ScheduleQuote {
    pub schedule: Pubkey,
    pub pool: Pubkey,
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
    pub time: i64,
}
