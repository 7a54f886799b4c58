pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{apply_middleware, create_router};
pub use state::AppState;
