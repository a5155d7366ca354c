use anchor_lang::prelude::*;

use crate::events::ScheduleQuote;
use crate::utils;
use crate::EmployeeSchedule;

#[derive(Accounts)]
pub struct EmitScheduleQuote<'info> {
    pub schedule: Account<'info, EmployeeSchedule>,
}

/// Read-only snapshot of a schedule, published as an event so indexers and
/// wallets can track vesting progress without decoding account data.
pub fn schedule_quote_handler(ctx: Context<EmitScheduleQuote>) -> Result<()> {
    let schedule = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;

    let vested = utils::vested_amount(schedule, now)?;
    let claimable = utils::calculate_claimable_amount(schedule, now)?;

    emit!(ScheduleQuote {
        schedule: schedule.key(),
        pool: schedule.pool,
        beneficiary: schedule.beneficiary,
        vested,
        total_withdrawn: schedule.total_withdrawn,
        claimable,
        time: now,
    });

    Ok(())
}
