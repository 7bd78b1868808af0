use noventa::validation::{LoginForm, RegisterForm};
use noventa::Result;

use crate::config::{AppConfig, CONFIG};

/// Logs in with the credentials of `form` and returns the session token.
pub async fn login(form: &LoginForm) -> Result<String> {
    login_with(&CONFIG, form).await
}

/// Registers the account described by `form` and returns its session token.
pub async fn register(form: &RegisterForm) -> Result<String> {
    register_with(&CONFIG, form).await
}

pub async fn login_with(config: &AppConfig, form: &LoginForm) -> Result<String> {
    let client = config.auth_client()?;
    noventa::auth::login(&client, &form.to_request()).await
}

pub async fn register_with(config: &AppConfig, form: &RegisterForm) -> Result<String> {
    let client = config.auth_client()?;
    noventa::auth::register(&client, &form.to_request()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use noventa::auth::{LOGIN_PATH, REGISTER_PATH};
    use noventa::session::{post_login_path, HOME_PATH};
    use noventa::token::SESSION_TOKEN_KEY;
    use noventa::{KeyValueStore, MemoryStore, RequestError, Session, TokenStore};

    fn config_for(server: &mockito::Server) -> AppConfig {
        AppConfig::from_values(Some(&server.url()), Some(&server.url()), None)
    }

    #[tokio::test]
    async fn login_flow_stores_token_and_lands_on_products() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", LOGIN_PATH)
            .match_body(mockito::Matcher::JsonString(
                r#"{"email":"user@example.com","password":"abc123"}"#.to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"success":true,"data":{"token":"T1"}}"#)
            .create_async()
            .await;

        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: "abc123".to_string(),
            remember: true,
        };
        assert!(form.is_valid());

        let durable = MemoryStore::new();
        let session_area = MemoryStore::new();
        let mut session = Session::restore(TokenStore::new(durable.clone(), session_area.clone()));

        let token = login_with(&config_for(&server), &form).await.unwrap();
        session.start(token, form.remember);

        assert_eq!(session.token(), Some("T1"));
        assert_eq!(
            TokenStore::new(durable, session_area).get_token().as_deref(),
            Some("T1")
        );
        assert_eq!(post_login_path(""), HOME_PATH);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn register_sends_full_name_and_keeps_token_session_scoped() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", REGISTER_PATH)
            .match_body(mockito::Matcher::JsonString(
                r#"{"name":"Ada Yılmaz","email":"ada@example.com","password":"abc123"}"#
                    .to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"success":true,"data":{"token":"R1"}}"#)
            .create_async()
            .await;

        let form = RegisterForm {
            first_name: "Ada".to_string(),
            last_name: "Yılmaz".to_string(),
            phone: "5051234567".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc123".to_string(),
            password_confirm: "abc123".to_string(),
        };

        let session_area = MemoryStore::new();
        let tokens = TokenStore::new(MemoryStore::new(), session_area.clone());
        let mut session = Session::restore(tokens);
        session.start(register_with(&config_for(&server), &form).await.unwrap(), false);

        assert_eq!(session_area.get(SESSION_TOKEN_KEY).as_deref(), Some("R1"));
    }

    #[tokio::test]
    async fn failed_login_surfaces_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", LOGIN_PATH)
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: "abc123".to_string(),
            remember: false,
        };
        let err = login_with(&config_for(&server), &form).await.unwrap_err();

        assert!(matches!(err, RequestError::Status { status: 401, .. }));
        assert_eq!(err.to_string(), "Request failed (401) - Unauthorized");
    }
}
