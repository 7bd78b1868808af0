mod card;
mod detail;
mod filters;
mod grid;

pub use card::ProductCard;
pub use detail::ProductDetail;
pub use filters::ProductFilters;
pub use grid::ProductGrid;

pub(crate) const PRODUCTS_HREF: &str = "/products";
pub(crate) const FAVORITES_HREF: &str = "/favorites";

pub(crate) fn product_href(id: &str) -> String {
    format!("{PRODUCTS_HREF}/{id}")
}
