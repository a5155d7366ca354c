use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{constants::*, error::*, events::TokensClaimed, utils, EmployeeSchedule, VestingPool};

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct Claim<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        seeds = [VESTING_POOL_SEED, company_name.as_bytes()],
        bump = pool.bump,
        has_one = mint,
        has_one = treasury,
    )]
    pub pool: Account<'info, VestingPool>,

    #[account(
        mut,
        has_one = beneficiary @ VestingError::Unauthorized,
        has_one = pool @ VestingError::Unauthorized,
    )]
    pub schedule: Account<'info, EmployeeSchedule>,

    #[account(
        mut,
        seeds = [VESTING_TREASURY_SEED, company_name.as_bytes()],
        bump = pool.treasury_bump,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::authority = beneficiary,
        associated_token::mint = mint,
        associated_token::token_program = token_program,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl Claim<'_> {
    /// The beneficiary only authorizes the request; the treasury PDA itself
    /// signs for the movement of funds.
    fn transfer_from_treasury(&self, amount: u64, company_name: &str) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.treasury.to_account_info(),
            to: self.beneficiary_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            authority: self.treasury.to_account_info(),
        };

        let signer_seeds: &[&[u8]] = &[
            VESTING_TREASURY_SEED,
            company_name.as_bytes(),
            &[self.pool.treasury_bump],
        ];
        let s = &[signer_seeds];
        let cpi_ctx =
            CpiContext::new_with_signer(self.token_program.to_account_info(), cpi_accounts, s);
        token_interface::transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

pub fn claim_handler(ctx: Context<Claim>, company_name: String) -> Result<u64> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let claimable = utils::calculate_claimable_amount(&ctx.accounts.schedule, now)?;
    require!(claimable > 0, VestingError::NothingToClaim);
    require!(
        ctx.accounts.treasury.amount >= claimable,
        VestingError::InsufficientTreasuryBalance
    );

    ctx.accounts.transfer_from_treasury(claimable, &company_name)?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.total_withdrawn = schedule
        .total_withdrawn
        .checked_add(claimable)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        schedule: schedule.key(),
        beneficiary: schedule.beneficiary,
        amount: claimable,
        time: now,
    });

    Ok(claimable)
}
