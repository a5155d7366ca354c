use anchor_lang::prelude::*;

use crate::constants::MAX_COMPANY_NAME_LEN;

/// Company-scoped vesting record. One pool exists per company name; the
/// employer is the only signer allowed to fund the treasury or register
/// employee schedules against it.
#[account]
#[derive(InitSpace)]
pub struct VestingPool {
    pub employer: Pubkey,
    pub mint: Pubkey,
    /// Treasury token account holding tokens not yet claimed by any employee.
    pub treasury: Pubkey,
    #[max_len(MAX_COMPANY_NAME_LEN)]
    pub company_name: String,
    pub treasury_bump: u8,
    pub bump: u8,
}
