pub mod config;
pub mod pool;
pub mod user_purchase;

pub use config::*;
pub use pool::*;
pub use user_purchase::*;
