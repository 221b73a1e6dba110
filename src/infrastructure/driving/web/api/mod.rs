pub mod error;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::auth_routes;
pub use routes::user_routes;
