pub mod auth_form;
pub mod favorites_list;
pub mod footer;
pub mod product;
pub mod simple;

pub use auth_form::{AuthForm, AuthMode, AuthSubmission, SubmitFuture};
pub use favorites_list::FavoritesList;
pub use footer::Footer;
pub use product::*;
pub use simple::*;
