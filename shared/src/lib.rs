pub mod error;
pub mod evm;
pub mod models;

pub use error::*;
pub use evm::*;
pub use models::*;
