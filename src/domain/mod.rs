pub mod entities;
pub mod repositories;
pub mod schema;
pub mod services;
