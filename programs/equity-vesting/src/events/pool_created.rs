use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub employer: Pubkey,
    pub mint: Pubkey,
    pub company_name: String,
}
