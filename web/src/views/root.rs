use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Sends visitors to the catalog or the login page.
#[component]
pub fn Root() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth.is_logged_in() {
            nav.replace(Route::ProductsPage {});
        } else {
            nav.replace(Route::auth(None));
        }
    });

    rsx! {}
}
