pub mod envelope;
pub mod handlers;
pub mod routes;

pub use envelope::{success, ErrorEnvelope};
pub use handlers::AppState;
pub use routes::build_router;
