use crate::constants::*;
use crate::error::*;
use crate::events::PoolCreated;
use crate::state::VestingPool;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub employer: Signer<'info>,

    #[account(
        init,
        payer = employer,
        space = ANCHOR_DISCRIMINATOR + VestingPool::INIT_SPACE,
        seeds = [VESTING_POOL_SEED, company_name.as_bytes()],
        bump,
    )]
    pub pool: Account<'info, VestingPool>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = employer,
        token::mint = mint,
        token::authority = treasury,
        token::token_program = token_program,
        seeds = [VESTING_TREASURY_SEED, company_name.as_bytes()],
        bump,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn create_pool_handler(ctx: Context<CreatePool>, company_name: String) -> Result<()> {
    require!(
        !company_name.is_empty() && company_name.len() <= MAX_COMPANY_NAME_LEN,
        VestingError::InvalidCompanyName
    );

    let pool_key = ctx.accounts.pool.key();

    let pool = &mut ctx.accounts.pool;
    pool.employer = ctx.accounts.employer.key();
    pool.mint = ctx.accounts.mint.key();
    pool.treasury = ctx.accounts.treasury.key();
    pool.company_name = company_name;
    pool.treasury_bump = ctx.bumps.treasury;
    pool.bump = ctx.bumps.pool;

    emit!(PoolCreated {
        pool: pool_key,
        employer: pool.employer,
        mint: pool.mint,
        company_name: pool.company_name.clone(),
    });

    Ok(())
}
