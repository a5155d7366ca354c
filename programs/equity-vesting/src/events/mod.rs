pub mod pool_created;
pub mod schedule_created;
pub mod schedule_quote;
pub mod tokens_claimed;
pub mod treasury_funded;

pub use pool_created::*;
pub use schedule_created::*;
pub use schedule_quote::*;
pub use tokens_claimed::*;
pub use treasury_funded::*;
