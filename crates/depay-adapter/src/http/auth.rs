/*
[INPUT]:  Credentials, PINs and session bearer tokens
[OUTPUT]: Login/signup results and PIN endpoint confirmations
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When adding new auth endpoints or changing response format
[UPDATE]: 2026-08-14 establish the session store directly from login/signup
*/

use crate::http::{DepayClient, Result};
use crate::types::{
    LoginRequest, LoginResponse, SetPinRequest, SetPinResponse, SignupRequest, SignupResponse,
    ValidateTokenResponse, VerifyPinRequest, VerifyPinResponse,
};
use reqwest::Method;

impl DepayClient {
    /// Log in with email and password
    ///
    /// POST /api/auth/login
    ///
    /// A successful login establishes the session store, so subsequent
    /// authenticated calls pick up the bearer token automatically.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let builder = self.request(Method::POST, "/api/auth/login")?.json(&request);
        let response: LoginResponse = self.send_json(builder).await?;

        self.session().establish(response.token.clone(), email.to_string());
        tracing::info!(email = %email, "login succeeded");

        Ok(response)
    }

    /// Create a new account
    ///
    /// POST /api/auth/signup
    ///
    /// The server issues a token right away, so a successful signup also
    /// establishes the session store.
    pub async fn signup(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupResponse> {
        let request = SignupRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let builder = self.request(Method::POST, "/api/auth/signup")?.json(&request);
        let response: SignupResponse = self.send_json(builder).await?;

        self.session().establish(response.token.clone(), email.to_string());
        tracing::info!(email = %email, account = %response.account_number, "signup succeeded");

        Ok(response)
    }

    /// Persist a new 4-digit PIN for the logged-in account
    ///
    /// POST /api/auth/set-pin
    pub async fn set_pin(&self, pin: &str) -> Result<SetPinResponse> {
        let request = SetPinRequest {
            pin: pin.to_string(),
        };

        let builder = self
            .authed_request(Method::POST, "/api/auth/set-pin")?
            .json(&request);
        self.send_json(builder).await
    }

    /// Check a PIN against the one stored for the logged-in account
    ///
    /// POST /api/auth/verify-pin
    pub async fn verify_pin(&self, pin: &str) -> Result<VerifyPinResponse> {
        let request = VerifyPinRequest {
            pin: pin.to_string(),
        };

        let builder = self
            .authed_request(Method::POST, "/api/auth/verify-pin")?
            .json(&request);
        self.send_json(builder).await
    }

    /// Check whether the stored bearer token is still accepted
    ///
    /// GET /api/auth/validate-token
    pub async fn validate_token(&self) -> Result<ValidateTokenResponse> {
        let builder = self.authed_request(Method::GET, "/api/auth/validate-token")?;
        self.send_json(builder).await
    }

    /// Drop the local session
    ///
    /// Purely client-side: the server keeps no session state beyond the
    /// token's own expiry.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, DepayClient, DepayError};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> DepayClient {
        DepayClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_login_establishes_session() {
        let server = MockServer::start().await;
        let mock_response = r#"{ "token": "jwt_abc", "hasSetPin": true }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({
                "email": "amina@depay.io",
                "password": "Sup3rSecret"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client
            .login("amina@depay.io", "Sup3rSecret")
            .await
            .expect("login failed");

        assert_eq!(response.token, "jwt_abc");
        assert_eq!(response.has_set_pin, Some(true));
        assert_eq!(client.session().token(), Some("jwt_abc".to_string()));
        assert_eq!(client.session().email(), Some("amina@depay.io".to_string()));
    }

    #[tokio::test]
    async fn test_login_rejected_leaves_session_empty() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{ "error": "Invalid password." }"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .login("amina@depay.io", "wrong")
            .await
            .expect_err("login should fail");

        assert_eq!(err.server_message(), Some("Invalid password."));
        assert!(client.session().token().is_none());
    }

    #[tokio::test]
    async fn test_signup_establishes_session() {
        let server = MockServer::start().await;
        let mock_response = r#"{ "account_number": "93001122", "token": "jwt_new" }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .and(body_json(json!({
                "firstName": "Amina",
                "lastName": "Yusuf",
                "email": "amina@depay.io",
                "password": "Sup3rSecret"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client
            .signup("Amina", "Yusuf", "amina@depay.io", "Sup3rSecret")
            .await
            .expect("signup failed");

        assert_eq!(response.account_number, "93001122");
        assert_eq!(client.session().token(), Some("jwt_new".to_string()));
    }

    #[tokio::test]
    async fn test_set_pin_sends_bearer_token() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/auth/set-pin"))
            .and(header("authorization", "Bearer jwt_abc"))
            .and(body_json(json!({ "pin": "1234" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(
                        r#"{ "message": "PIN successfully set", "account_number": "93001122" }"#,
                        "application/json",
                    ),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .session()
            .establish("jwt_abc".to_string(), "amina@depay.io".to_string());

        let response = client.set_pin("1234").await.expect("set_pin failed");
        assert_eq!(response.message, "PIN successfully set");
    }

    #[tokio::test]
    async fn test_set_pin_without_session() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        let err = client.set_pin("1234").await.expect_err("set_pin should fail");
        assert!(matches!(err, DepayError::MissingToken));
    }

    #[tokio::test]
    async fn test_verify_pin_rejected() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/auth/verify-pin"))
            .and(header("authorization", "Bearer jwt_abc"))
            .respond_with(
                ResponseTemplate::new(401)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{ "error": "Invalid PIN" }"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .session()
            .establish("jwt_abc".to_string(), "amina@depay.io".to_string());

        let err = client.verify_pin("0000").await.expect_err("verify should fail");
        assert_eq!(err.server_message(), Some("Invalid PIN"));
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;
        client
            .session()
            .establish("jwt_abc".to_string(), "amina@depay.io".to_string());

        client.logout();
        assert!(client.session().token().is_none());
    }
}
