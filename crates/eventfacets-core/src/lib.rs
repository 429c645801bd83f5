pub mod aggregate;
pub mod config;
pub mod error;
pub mod resolve;
pub mod scope;
pub mod tagstore;
pub mod traits;
pub mod types;

pub use aggregate::*;
pub use config::*;
pub use error::*;
pub use resolve::*;
pub use scope::*;
pub use traits::*;
pub use types::*;
