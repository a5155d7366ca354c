pub mod employee_schedule;
pub mod vesting_pool;

pub use employee_schedule::*;
pub use vesting_pool::*;
