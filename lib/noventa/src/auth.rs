use reqwest::Method;
use shared::auth::{LoginRequest, RegisterRequest, TokenPayload};
use tracing::info;

use crate::client::ApiClient;
use crate::error::{RequestError, Result};

pub const LOGIN_PATH: &str = "/api/v1/user/login";
pub const REGISTER_PATH: &str = "/api/v1/user/register";

/// Exchanges credentials for a session token.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<String> {
    let token = fetch_token(client, LOGIN_PATH, request).await?;
    info!("Logged in as {}", request.email);
    Ok(token)
}

/// Creates an account and returns its session token.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<String> {
    let token = fetch_token(client, REGISTER_PATH, request).await?;
    info!("Registered {}", request.email);
    Ok(token)
}

async fn fetch_token<B: serde::Serialize>(
    client: &ApiClient,
    path: &str,
    body: &B,
) -> Result<String> {
    let token = client
        .request_data::<TokenPayload, B>(Method::POST, path, Some(body), None, &[])
        .await?
        .into_token();

    if token.is_empty() {
        return Err(RequestError::Malformed(format!("empty token from {path}")));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "user@example.com".to_string(),
            password: "abc123".to_string(),
        }
    }

    #[tokio::test]
    async fn login_posts_credentials_and_reads_nested_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", LOGIN_PATH)
            .match_body(mockito::Matcher::Json(
                json!({"email": "user@example.com", "password": "abc123"}),
            ))
            .with_status(200)
            .with_body(r#"{"statusCode":200,"success":true,"data":{"token":"T1"}}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let token = login(&client, &credentials()).await.unwrap();

        assert_eq!(token, "T1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn register_accepts_legacy_bare_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", REGISTER_PATH)
            .match_body(mockito::Matcher::Json(
                json!({"name": "Ada Yılmaz", "email": "ada@example.com", "password": "abc123"}),
            ))
            .with_status(200)
            .with_body(r#"{"success":true,"data":"T2"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let request = RegisterRequest {
            name: "Ada Yılmaz".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc123".to_string(),
        };
        assert_eq!(register(&client, &request).await.unwrap(), "T2");
    }

    #[tokio::test]
    async fn rejected_login_surfaces_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", LOGIN_PATH)
            .with_status(200)
            .with_body(r#"{"success":false,"message":"E-mail veya şifre hatalı"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let err = login(&client, &credentials()).await.unwrap_err();
        assert_eq!(err.to_string(), "E-mail veya şifre hatalı");
    }

    #[tokio::test]
    async fn missing_or_empty_token_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", LOGIN_PATH)
            .with_status(200)
            .with_body(r#"{"success":true,"data":{"token":""}}"#)
            .create_async()
            .await;
        server
            .mock("POST", REGISTER_PATH)
            .with_status(200)
            .with_body(r#"{"success":true,"data":{"user":1}}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        assert!(matches!(
            login(&client, &credentials()).await,
            Err(RequestError::Malformed(_))
        ));

        let request = RegisterRequest {
            name: "A B".to_string(),
            email: "a@b.co".to_string(),
            password: "abc123".to_string(),
        };
        assert!(matches!(
            register(&client, &request).await,
            Err(RequestError::Malformed(_))
        ));
    }
}
