use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use noventa::session::post_login_path;
use ui::{use_auth, AuthForm, AuthSubmission, SubmitFuture};

use crate::Route;

/// Login/register page. `next` is where a successful login lands.
#[component]
pub fn AuthPage(next: String) -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let landing = use_memo(use_reactive!(|next| {
        post_login_path(&next)
            .parse::<Route>()
            .unwrap_or(Route::ProductsPage {})
    }));

    use_effect(move || {
        if auth.is_logged_in() {
            nav.replace(landing());
        }
    });

    let submit = move |submission: AuthSubmission| -> SubmitFuture {
        Box::pin(async move {
            let (token, remember) = match submission {
                AuthSubmission::Login(form) => (api::login(&form).await, form.remember),
                AuthSubmission::Register(form) => (api::register(&form).await, false),
            };

            match token {
                Ok(token) => {
                    auth.login(token, remember);
                    nav.replace(landing());
                    Ok(())
                }
                Err(e) => {
                    warn!(status = ?e.status(), "Authentication failed: {}", e);
                    Err(e.to_string())
                }
            }
        })
    };

    rsx! {
        AuthForm { submit }
    }
}
