pub const ANCHOR_DISCRIMINATOR: usize = 8;

/// Seed prefix for the company vesting pool PDA.
pub const VESTING_POOL_SEED: &[u8] = b"vesting";

/// Seed prefix for the pool treasury token account PDA.
pub const VESTING_TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Seed prefix for per-employee schedule PDAs.
pub const EMPLOYEE_VESTING_SEED: &[u8] = b"employee_vesting";

/// Upper bound on a stored company name, in bytes.
pub const MAX_COMPANY_NAME_LEN: usize = 50;
