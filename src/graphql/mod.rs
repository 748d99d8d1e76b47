pub mod handlers;
pub mod health;
pub mod product;
pub mod schema;
