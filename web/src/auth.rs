use dioxus::prelude::*;
use ui::{Auth, Favorites};

/// Restores the stored session and exposes it as [`Auth`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(Auth::restore);
    use_context_provider(|| Auth::new(session));

    rsx! {
        {children}
    }
}

/// Loads stored favorites and exposes them as [`Favorites`].
#[component]
pub fn FavoritesProvider(children: Element) -> Element {
    let items = use_signal(Favorites::load);
    use_context_provider(|| Favorites::new(items));

    rsx! {
        {children}
    }
}
