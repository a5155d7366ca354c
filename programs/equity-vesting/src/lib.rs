#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
use solana_security_txt::security_txt;
pub use state::*;

declare_id!("AsjZ3kWAUSQRNt2pZVeJkywhZ6gpLpHZmJjduPmKZDZZ");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Equity Vesting Program" ,
    project_url:  "https://github.com/equity-labs/equity-vesting-program",
    policy:  "https://github.com/equity-labs/equity-vesting-program/security.md",
    contacts:  "mailto:security@equitylabs.dev",
    preferred_languages: "en",
    source_code: "https://github.com/equity-labs/equity-vesting-program"
}

#[program]
pub mod equity_vesting {
    use super::*;

    pub fn create_pool(ctx: Context<CreatePool>, company_name: String) -> Result<()> {
        create_pool::create_pool_handler(ctx, company_name)
    }

    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        fund_treasury::fund_treasury_handler(ctx, amount)
    }

    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        start_time: i64,
        cliff_time: i64,
        end_time: i64,
        total_allocation: u64,
    ) -> Result<()> {
        create_schedule::create_schedule_handler(
            ctx,
            start_time,
            cliff_time,
            end_time,
            total_allocation,
        )
    }

    pub fn claim(ctx: Context<Claim>, company_name: String) -> Result<u64> {
        claim::claim_handler(ctx, company_name)
    }

    pub fn estimate(ctx: Context<ReadOnlyClaim>) -> Result<u64> {
        estimate_claimable::estimate_claimable_handler(ctx)
    }

    pub fn schedule_quote(ctx: Context<EmitScheduleQuote>) -> Result<()> {
        schedule_quote::schedule_quote_handler(ctx)
    }
}
