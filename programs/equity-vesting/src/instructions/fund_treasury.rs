use crate::constants::*;
use crate::error::*;
use crate::events::TreasuryFunded;
use crate::state::VestingPool;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        has_one = employer @ VestingError::Unauthorized,
        has_one = mint,
        has_one = treasury,
    )]
    pub pool: Account<'info, VestingPool>,

    #[account(
        mut,
        seeds = [VESTING_TREASURY_SEED, pool.company_name.as_bytes()],
        bump = pool.treasury_bump,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = employer,
        token::token_program = token_program,
    )]
    pub employer_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub employer: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn fund_treasury_handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    // The employer moves their own tokens in; an insufficient source balance
    // fails inside the token program and aborts the whole transaction.
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.employer_token_account.to_account_info(),
        to: ctx.accounts.treasury.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        authority: ctx.accounts.employer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token_interface::transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    ctx.accounts.treasury.reload()?;

    emit!(TreasuryFunded {
        pool: ctx.accounts.pool.key(),
        amount,
        treasury_balance: ctx.accounts.treasury.amount,
    });

    Ok(())
}
