use crate::constants::*;
use crate::error::*;
use crate::events::ScheduleCreated;
use crate::state::{EmployeeSchedule, VestingPool};
use crate::utils;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

#[derive(Accounts)]
pub struct CreateSchedule<'info> {
    #[account(mut)]
    pub employer: Signer<'info>,

    /// CHECK: Only used as a key
    pub beneficiary: AccountInfo<'info>,

    #[account(
        has_one = employer @ VestingError::Unauthorized,
        has_one = treasury,
    )]
    pub pool: Account<'info, VestingPool>,

    pub treasury: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = employer,
        space = ANCHOR_DISCRIMINATOR + EmployeeSchedule::INIT_SPACE,
        seeds = [EMPLOYEE_VESTING_SEED, beneficiary.key().as_ref(), pool.key().as_ref()],
        bump,
    )]
    pub schedule: Account<'info, EmployeeSchedule>,

    pub system_program: Program<'info, System>,
}

pub fn create_schedule_handler(
    ctx: Context<CreateSchedule>,
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_allocation: u64,
) -> Result<()> {
    utils::validate_schedule_window(start_time, cliff_time, end_time)?;

    let schedule_key = ctx.accounts.schedule.key();
    let treasury_balance = ctx.accounts.treasury.amount;

    let schedule = &mut ctx.accounts.schedule;
    schedule.beneficiary = ctx.accounts.beneficiary.key();
    schedule.pool = ctx.accounts.pool.key();
    schedule.start_time = start_time;
    schedule.cliff_time = cliff_time;
    schedule.end_time = end_time;
    schedule.total_allocation = total_allocation;
    schedule.total_withdrawn = 0;
    schedule.bump = ctx.bumps.schedule;

    // Solvency is only checked by the transfer at claim time; registering an
    // allocation the treasury does not cover makes those claims fail, so the
    // shortfall is surfaced here without rejecting the schedule.
    if total_allocation > treasury_balance {
        msg!(
            "allocation {} exceeds current treasury balance {}",
            total_allocation,
            treasury_balance
        );
    }

    emit!(ScheduleCreated {
        schedule: schedule_key,
        pool: schedule.pool,
        beneficiary: schedule.beneficiary,
        start_time,
        cliff_time,
        end_time,
        total_allocation,
        treasury_balance,
    });

    Ok(())
}
