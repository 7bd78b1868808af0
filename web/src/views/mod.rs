mod auth;
mod favorites;
mod product_detail;
mod products;
mod root;

pub use auth::AuthPage;
pub use favorites::FavoritesPage;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
pub use root::Root;
