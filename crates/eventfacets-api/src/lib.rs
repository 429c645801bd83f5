pub mod engine;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod stores;

pub use engine::*;
pub use error::*;
pub use handlers::*;
pub use routes::*;
pub use server::*;
pub use state::*;
pub use stores::*;
