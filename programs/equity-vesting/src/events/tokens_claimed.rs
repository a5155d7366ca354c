use anchor_lang::prelude::*;

#[event]
pub struct TokensClaimed {
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub time: i64,
}
