use anchor_lang::prelude::*;

use crate::{EmployeeSchedule, VestingError};

pub fn validate_schedule_window(start_time: i64, cliff_time: i64, end_time: i64) -> Result<()> {
    require!(start_time <= cliff_time, VestingError::InvalidScheduleWindow);
    require!(cliff_time <= end_time, VestingError::InvalidScheduleWindow);
    Ok(())
}

/// Tokens earned by elapsed time, independent of withdrawals. All-or-nothing
/// before the cliff, linear between start and end, capped at the allocation.
pub fn vested_amount(schedule: &EmployeeSchedule, now: i64) -> Result<u64> {
    if now < schedule.cliff_time {
        return Ok(0);
    }

    if now >= schedule.end_time {
        return Ok(schedule.total_allocation);
    }

    // A zero-length window never reaches this point (cliff == end pushes every
    // `now` into one of the branches above), but guard the division anyway.
    if schedule.start_time == schedule.end_time {
        return Ok(schedule.total_allocation);
    }

    let elapsed = now
        .checked_sub(schedule.start_time)
        .ok_or(VestingError::MathOverflow)?;
    let duration = schedule
        .end_time
        .checked_sub(schedule.start_time)
        .ok_or(VestingError::MathOverflow)?;

    let vested = (schedule.total_allocation as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration as u128)
        .ok_or(VestingError::MathOverflow)?;

    u64::try_from(vested).map_err(|_| VestingError::MathOverflow.into())
}

pub fn calculate_claimable_amount(schedule: &EmployeeSchedule, now: i64) -> Result<u64> {
    let vested = vested_amount(schedule, now)?;

    if schedule.total_withdrawn >= vested {
        Ok(0)
    } else {
        vested
            .checked_sub(schedule.total_withdrawn)
            .ok_or(VestingError::MathOverflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_template(overrides: Option<(i64, i64, i64, u64, u64)>) -> EmployeeSchedule {
        let (start_time, cliff_time, end_time, total_allocation, total_withdrawn) =
            overrides.unwrap_or((0, 250, 1000, 1000, 0));
        EmployeeSchedule {
            beneficiary: Pubkey::default(),
            pool: Pubkey::default(),
            start_time,
            cliff_time,
            end_time,
            total_allocation,
            total_withdrawn,
            bump: 255,
        }
    }

    #[test]
    fn test_window_ordered() {
        assert!(validate_schedule_window(0, 250, 1000).is_ok());
        assert!(validate_schedule_window(0, 0, 1000).is_ok());
        assert!(validate_schedule_window(0, 1000, 1000).is_ok());
    }

    #[test]
    fn test_window_degenerate_point() {
        assert!(validate_schedule_window(100, 100, 100).is_ok());
    }

    #[test]
    fn test_window_cliff_before_start() {
        assert!(validate_schedule_window(500, 250, 1000).is_err());
    }

    #[test]
    fn test_window_end_before_cliff() {
        assert!(validate_schedule_window(0, 800, 500).is_err());
    }

    #[test]
    fn test_before_cliff() {
        let schedule = schedule_template(None);
        assert_eq!(vested_amount(&schedule, 100).unwrap(), 0);
        assert_eq!(calculate_claimable_amount(&schedule, 100).unwrap(), 0);
    }

    #[test]
    fn test_just_before_cliff() {
        let schedule = schedule_template(None);
        assert_eq!(vested_amount(&schedule, 249).unwrap(), 0);
    }

    #[test]
    fn test_at_cliff_vests_elapsed_fraction() {
        let schedule = schedule_template(None);
        // 250 of 1000 elapsed at the cliff
        assert_eq!(vested_amount(&schedule, 250).unwrap(), 250);
    }

    #[test]
    fn test_linear_midpoint() {
        let schedule = schedule_template(None);
        assert_eq!(vested_amount(&schedule, 500).unwrap(), 500);
    }

    #[test]
    fn test_full_vesting_at_end() {
        let schedule = schedule_template(None);
        assert_eq!(vested_amount(&schedule, 1000).unwrap(), 1000);
    }

    #[test]
    fn test_full_vesting_past_end() {
        let schedule = schedule_template(None);
        assert_eq!(vested_amount(&schedule, 9999).unwrap(), 1000);
    }

    #[test]
    fn test_floor_rounding() {
        let schedule = schedule_template(Some((0, 0, 1000, 100, 0)));
        // 100 * 15 / 1000 = 1.5, floored
        assert_eq!(vested_amount(&schedule, 15).unwrap(), 1);
    }

    #[test]
    fn test_vested_bounded_and_non_decreasing() {
        let schedule = schedule_template(Some((0, 300, 997, 12_345, 0)));
        let mut previous = 0;
        for now in -50..1100 {
            let vested = vested_amount(&schedule, now).unwrap();
            assert!(vested <= schedule.total_allocation);
            assert!(vested >= previous);
            previous = vested;
        }
        assert_eq!(previous, schedule.total_allocation);
    }

    #[test]
    fn test_cliff_equals_end_all_or_nothing() {
        let schedule = schedule_template(Some((0, 100, 100, 100, 0)));
        assert_eq!(calculate_claimable_amount(&schedule, 50).unwrap(), 0);
        assert_eq!(calculate_claimable_amount(&schedule, 99).unwrap(), 0);
        assert_eq!(calculate_claimable_amount(&schedule, 100).unwrap(), 100);
    }

    #[test]
    fn test_cliff_equals_end_nothing_left_after_full_claim() {
        let schedule = schedule_template(Some((0, 100, 100, 100, 100)));
        assert_eq!(calculate_claimable_amount(&schedule, 150).unwrap(), 0);
    }

    #[test]
    fn test_zero_length_window() {
        let schedule = schedule_template(Some((100, 100, 100, 500, 0)));
        assert_eq!(vested_amount(&schedule, 99).unwrap(), 0);
        assert_eq!(vested_amount(&schedule, 100).unwrap(), 500);
    }

    #[test]
    fn test_claimable_subtracts_withdrawn() {
        let schedule = schedule_template(Some((0, 0, 1000, 1000, 250)));
        // 500 vested at the midpoint, 250 already withdrawn
        assert_eq!(calculate_claimable_amount(&schedule, 500).unwrap(), 250);
    }

    #[test]
    fn test_claim_sequence_without_cliff() {
        let mut schedule = schedule_template(Some((0, 0, 1000, 1000, 0)));
        assert_eq!(calculate_claimable_amount(&schedule, 250).unwrap(), 250);
        schedule.total_withdrawn = 250;
        assert_eq!(calculate_claimable_amount(&schedule, 500).unwrap(), 250);
    }

    #[test]
    fn test_claimable_clamps_when_overdrawn() {
        let schedule = schedule_template(Some((0, 0, 1000, 1000, 800)));
        // Only 500 vested at t=500; withdrawn already exceeds it
        assert_eq!(calculate_claimable_amount(&schedule, 500).unwrap(), 0);
    }

    #[test]
    fn test_fully_withdrawn_at_end() {
        let schedule = schedule_template(Some((0, 250, 1000, 1000, 1000)));
        assert_eq!(calculate_claimable_amount(&schedule, 2000).unwrap(), 0);
    }

    #[test]
    fn test_zero_allocation() {
        let schedule = schedule_template(Some((0, 250, 1000, 0, 0)));
        assert_eq!(vested_amount(&schedule, 500).unwrap(), 0);
        assert_eq!(calculate_claimable_amount(&schedule, 2000).unwrap(), 0);
    }

    #[test]
    fn test_large_allocation_no_overflow() {
        let schedule = schedule_template(Some((0, 0, i64::MAX - 1, u64::MAX, 0)));
        // Halfway through the widest possible window; the product only fits u128.
        let vested = vested_amount(&schedule, i64::MAX / 2).unwrap();
        assert_eq!(vested, u64::MAX / 2);
        assert_eq!(vested_amount(&schedule, i64::MAX - 1).unwrap(), u64::MAX);
    }

    #[test]
    fn test_repeated_claims_never_exceed_allocation() {
        let mut schedule = schedule_template(Some((0, 300, 1000, 777, 0)));
        let mut claimed_total: u64 = 0;
        for now in [100, 300, 450, 451, 600, 999, 1000, 1500] {
            let claimable = calculate_claimable_amount(&schedule, now).unwrap();
            schedule.total_withdrawn += claimable;
            claimed_total += claimable;
            assert!(claimed_total <= schedule.total_allocation);
            assert!(schedule.total_withdrawn <= schedule.total_allocation);
        }
        assert_eq!(claimed_total, schedule.total_allocation);
    }
}
