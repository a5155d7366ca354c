use anchor_lang::prelude::*;

/// One employee's time-gated entitlement within a pool. Schedule parameters
/// are immutable after creation; only `total_withdrawn` moves, and only
/// through claims.
#[account]
#[derive(InitSpace)]
pub struct EmployeeSchedule {
    pub beneficiary: Pubkey,
    pub pool: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_allocation: u64,
    /// Invariant: never decreases, never exceeds `total_allocation`.
    pub total_withdrawn: u64,
    pub bump: u8,
}
