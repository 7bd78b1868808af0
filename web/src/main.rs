use auth::{AuthProvider, FavoritesProvider};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use noventa::SessionGuard;

use ui::{use_auth, Layout, Navbar};
use views::{AuthPage, FavoritesPage, ProductDetailPage, ProductsPage, Root};

mod auth;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[route("/auth?:next")]
    AuthPage { next: String },

    #[layout(AuthGuard)]
        #[layout(WebNavbar)]
            #[route("/products")]
            ProductsPage {},
            #[route("/products/:id")]
            ProductDetailPage { id: String },
            #[route("/favorites")]
            FavoritesPage {},
}

impl Route {
    pub fn auth(next: Option<String>) -> Self {
        Route::AuthPage {
            next: next.unwrap_or_default(),
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Noventa" }

        AuthProvider {
            FavoritesProvider { Router::<Route> {} }
        }
    }
}

/// Renders protected routes only once a session token is present.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let current = use_route::<Route>();
    let mut guard = use_signal(SessionGuard::new);

    use_effect(move || {
        let path = current.to_string();
        if let Some(redirect) = guard.write().check(auth.is_logged_in(), Some(&path)) {
            info!("No session, redirecting to {}", redirect.target());
            nav.replace(Route::auth(redirect.next));
        }
    });

    if !guard.read().can_render() {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn WebNavbar() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let logout = move |_| {
        auth.logout();
        nav.replace(Route::auth(None));
    };

    rsx! {
        Layout {
            Navbar {
                Link {
                    class: "nav-link",
                    active_class: "active",
                    to: Route::ProductsPage {},
                    "Ürünler"
                }
                Link {
                    class: "nav-link",
                    active_class: "active",
                    to: Route::FavoritesPage {},
                    "Favoriler"
                }
                button {
                    r#type: "button",
                    class: "nav-link logout",
                    onclick: logout,
                    "Çıkış"
                }
            }

            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
