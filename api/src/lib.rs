pub mod auth;
pub mod config;
pub mod products;

pub use auth::{login, register};
pub use noventa::{Listing, RequestError};
pub use products::{find_product, list_products};
