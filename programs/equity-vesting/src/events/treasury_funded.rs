use anchor_lang::prelude::*;

#[event]
pub struct TreasuryFunded {
    pub pool: Pubkey,
    pub amount: u64,
    /// Treasury balance after the deposit landed.
    pub treasury_balance: u64,
}
