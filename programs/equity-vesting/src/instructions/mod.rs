pub mod claim;
pub mod create_pool;
pub mod create_schedule;
pub mod estimate_claimable;
pub mod fund_treasury;
pub mod schedule_quote;

pub use claim::*;
pub use create_pool::*;
pub use create_schedule::*;
pub use estimate_claimable::*;
pub use fund_treasury::*;
pub use schedule_quote::*;
