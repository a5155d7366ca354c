use anchor_lang::prelude::*;

use crate::EmployeeSchedule;

#[derive(Accounts)]
pub struct ReadOnlyClaim<'info> {
    #[account()]
    pub schedule: Account<'info, EmployeeSchedule>,
    pub signer: Signer<'info>,
}

pub fn estimate_claimable_handler(ctx: Context<ReadOnlyClaim>) -> Result<u64> {
    let schedule = &ctx.accounts.schedule;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let claimable_amount = crate::utils::calculate_claimable_amount(schedule, now)?;
    Ok(claimable_amount)
}
