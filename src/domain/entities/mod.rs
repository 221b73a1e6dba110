pub mod user;

pub use user::NewUserRecord;
pub use user::User;
