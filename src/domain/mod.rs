pub mod animation;
pub mod models;
pub mod services;

pub use animation::*;
pub use models::*;
pub use services::*;
