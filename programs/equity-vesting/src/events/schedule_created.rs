use anchor_lang::prelude::*;

#[event]
pub struct ScheduleCreated {
    pub schedule: Pubkey,
    pub pool: Pubkey,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_allocation: u64,
    /// Treasury balance at registration time, so the employer's tooling can
    /// spot allocations the treasury does not yet cover.
    pub treasury_balance: u64,
}
