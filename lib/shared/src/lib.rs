pub mod auth;
pub mod catalog;
pub mod envelope;
pub mod favorites;

pub use catalog::Product;
pub use envelope::Envelope;
pub use favorites::FavoriteItem;
