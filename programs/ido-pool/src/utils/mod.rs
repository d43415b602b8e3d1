pub mod pda;
pub mod token;
pub mod validation;

pub use pda::*;
pub use token::*;
pub use validation::*;
