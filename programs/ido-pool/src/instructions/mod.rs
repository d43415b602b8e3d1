pub mod buy_tokens;
pub mod claim_tokens;
pub mod create_pool;
pub mod fund_pool;
pub mod initialize;
pub mod withdraw_proceeds;

pub use buy_tokens::*;
pub use claim_tokens::*;
pub use create_pool::*;
pub use fund_pool::*;
pub use initialize::*;
pub use withdraw_proceeds::*;
