use std::future::Future;
use std::pin::Pin;

use dioxus::prelude::*;
use noventa::validation::{
    extract_phone_digits, format_phone, LoginErrors, LoginForm, RegisterErrors, RegisterForm,
};

use crate::Checkbox;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Giriş Yap",
            AuthMode::Register => "Kayıt Ol",
        }
    }

    fn subtitle(&self) -> &'static str {
        match self {
            AuthMode::Login => "Hesabına giriş yap",
            AuthMode::Register => "Ad, soyad, telefon, e-posta ve şifre bilgileri ile kayıt ol",
        }
    }
}

/// A validated form, handed to the page that talks to the API.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthSubmission {
    Login(LoginForm),
    Register(RegisterForm),
}

/// Resolves to the error message to show next to the form, if any.
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    submit: Callback<AuthSubmission, SubmitFuture>,
}

#[component]
pub fn AuthForm(props: Props) -> Element {
    let submit = props.submit;

    let mut mode = use_signal(AuthMode::default);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password_confirm = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let mut submitted = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut api_error = use_signal(|| None::<String>);

    let login_form = move || LoginForm {
        email: email(),
        password: password(),
        remember: remember(),
    };
    let register_form = move || RegisterForm {
        first_name: first_name(),
        last_name: last_name(),
        phone: phone(),
        email: email(),
        password: password(),
        password_confirm: password_confirm(),
    };

    let handle_submit = move || {
        spawn(async move {
            // Enter still fires while the submit button is disabled.
            if loading() {
                return;
            }
            submitted.set(true);
            api_error.set(None);

            let submission = prepare_submission(mode(), loading(), login_form, register_form);
            let Some(submission) = submission else {
                return;
            };

            loading.set(true);
            if let Err(e) = submit.call(submission).await {
                api_error.set(Some(e));
            }
            loading.set(false);
        });
    };

    let mut switch_mode = move |next: AuthMode| {
        mode.set(next);
        submitted.set(false);
        api_error.set(None);
    };

    let current = mode();

    // Errors only show once the user tried to submit.
    let register_errors = if submitted() && current == AuthMode::Register {
        register_form().errors()
    } else {
        RegisterErrors::default()
    };
    let login_errors = match (submitted(), current) {
        (true, AuthMode::Login) => login_form().errors(),
        (true, AuthMode::Register) => LoginErrors {
            email: register_errors.email.clone(),
            password: register_errors.password.clone(),
        },
        _ => LoginErrors::default(),
    };

    let password_hint = if show_password() { "Şifreyi gizle" } else { "Şifreyi göster" };
    let confirm_hint = if show_confirm() {
        "Şifre tekrarını gizle"
    } else {
        "Şifre tekrarını göster"
    };
    let submit_label = if loading() { "İşleniyor..." } else { current.title() };

    rsx! {
      div { class: "auth-page",
        div { class: "card auth-card",
          div { class: "auth-header",
            h1 { "{current.title()}" }
            div { class: "mode-toggle",
              button {
                r#type: "button",
                class: if current == AuthMode::Login { "mode active" } else { "mode" },
                onclick: move |_| switch_mode(AuthMode::Login),
                "Giriş"
              }
              button {
                r#type: "button",
                class: if current == AuthMode::Register { "mode active" } else { "mode" },
                onclick: move |_| switch_mode(AuthMode::Register),
                "Kayıt"
              }
            }
          }
          p { class: "muted", "{current.subtitle()}" }

          div { class: "form",
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    handle_submit();
                }
            },

            if let Some(error) = api_error() {
              p { class: "alert alert-error", "{error}" }
            }

            if current == AuthMode::Register {
              Field { label: "Ad", error: register_errors.first_name.clone(),
                input {
                  class: "input",
                  value: "{first_name}",
                  oninput: move |e| first_name.set(e.value()),
                }
              }
              Field { label: "Soyad", error: register_errors.last_name.clone(),
                input {
                  class: "input",
                  value: "{last_name}",
                  oninput: move |e| last_name.set(e.value()),
                }
              }
              Field { label: "Telefon", error: register_errors.phone.clone(),
                input {
                  class: "input",
                  r#type: "tel",
                  inputmode: "numeric",
                  value: format_phone(&phone()),
                  oninput: move |e| phone.set(extract_phone_digits(&e.value())),
                }
              }
            }

            Field { label: "E-Posta", error: login_errors.email.clone(),
              input {
                class: "input",
                r#type: "email",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
              }
            }

            Field { label: "Şifre", error: login_errors.password.clone(),
              PasswordInput {
                value: password(),
                visible: show_password(),
                hint: password_hint,
                oninput: move |value| password.set(value),
                ontoggle: move |_| show_password.toggle(),
              }
            }

            if current == AuthMode::Register {
              Field { label: "Şifre Tekrar", error: register_errors.password_confirm.clone(),
                PasswordInput {
                  value: password_confirm(),
                  visible: show_confirm(),
                  hint: confirm_hint,
                  oninput: move |value| password_confirm.set(value),
                  ontoggle: move |_| show_confirm.toggle(),
                }
              }
            }

            if current == AuthMode::Login {
              Checkbox {
                checked: remember(),
                label: "Beni hatırla",
                onchange: move |checked| remember.set(checked),
              }
            }

            button {
              r#type: "button",
              class: "btn btn-primary btn-block",
              disabled: loading(),
              onclick: move |_| handle_submit(),
              "{submit_label}"
            }
          }
        }
      }
    }
}

/// The form to send, or `None` while a request is in flight or when the
/// active form does not validate.
fn prepare_submission(
    mode: AuthMode,
    loading: bool,
    login: impl FnOnce() -> LoginForm,
    register: impl FnOnce() -> RegisterForm,
) -> Option<AuthSubmission> {
    if loading {
        return None;
    }
    match mode {
        AuthMode::Login => Some(login()).filter(LoginForm::is_valid).map(AuthSubmission::Login),
        AuthMode::Register => Some(register())
            .filter(RegisterForm::is_valid)
            .map(AuthSubmission::Register),
    }
}

#[component]
fn Field(
    label: &'static str,
    #[props(!optional)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
      div { class: "field",
        label { class: "field-label", "{label}" }
        {children}
        if let Some(error) = error {
          p { class: "field-error", "{error}" }
        }
      }
    }
}

#[component]
fn PasswordInput(
    value: String,
    visible: bool,
    hint: &'static str,
    oninput: EventHandler<String>,
    ontoggle: EventHandler<()>,
) -> Element {
    rsx! {
      div { class: "password",
        input {
          class: "input",
          r#type: if visible { "text" } else { "password" },
          value: "{value}",
          oninput: move |e| oninput.call(e.value()),
        }
        button {
          r#type: "button",
          class: "password-toggle",
          aria_label: "{hint}",
          title: "{hint}",
          onclick: move |_| ontoggle.call(()),
          if visible { "Gizle" } else { "Göster" }
        }
      }
    }
}
