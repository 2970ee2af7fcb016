use reqwest::{Client, RequestBuilder, Response, StatusCode};
use vaultguard_shared::models::{
    ApiError, ErrorResponse, GeneratedPassword, NewPasswordEntry, PasswordEntry, PasswordPatch,
    RegisterRequest, RegisteredUser, TokenRequest, TokenResponse,
};

use crate::config::AppConfig;
use crate::session::Session;

/// Lightweight API client for VaultGuard backend interactions.
///
/// The session is consulted at call time for every authenticated request;
/// the token is never cached across calls.
#[derive(Clone, Debug)]
pub struct VaultGuardClient {
    base_url: String,
    client: Client,
    session: Session,
}

impl VaultGuardClient {
    /// Create a new API client against the configured base URL.
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
        }
    }

    /// Get the backend base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Read the token from the session, failing when none is stored.
    pub(crate) fn bearer_token(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::Unauthenticated)
    }

    /// Attach the bearer token, or fail before any network I/O when the
    /// session holds none.
    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(request.bearer_auth(self.bearer_token()?))
    }

    async fn decode_detail(response: Response) -> (u16, String) {
        let status = response.status().as_u16();
        let detail = response
            .json::<ErrorResponse>()
            .await
            .map_or_else(|_| format!("status {status}"), |body| body.detail);
        (status, detail)
    }

    /// Map a non-success status to the error taxonomy for authenticated
    /// endpoints.
    async fn accept(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let (code, detail) = Self::decode_detail(response).await;
        Err(match status {
            StatusCode::UNAUTHORIZED => ApiError::Authentication(detail),
            StatusCode::NOT_FOUND => ApiError::NotFound(detail),
            _ => ApiError::Api {
                status: code,
                detail,
            },
        })
    }

    /// Exchange credentials for a session token.
    ///
    /// The token endpoint speaks the OAuth2 password grant and therefore
    /// takes a form-urlencoded body, unlike every other endpoint. On success
    /// the returned token is persisted into the session.
    pub async fn login(&self, request: &TokenRequest) -> Result<TokenResponse, ApiError> {
        let url = self.api_url("api/auth/token");
        let response = self
            .client
            .post(url)
            .form(request)
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.status().is_success() {
            let (_, detail) = Self::decode_detail(response).await;
            return Err(ApiError::Authentication(detail));
        }
        let body: TokenResponse = response.json().await.map_err(ApiError::network)?;
        self.session.set(&body.access_token);
        Ok(body)
    }

    /// Create a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        let url = self.api_url("api/auth/register");
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.status().is_success() {
            let (_, detail) = Self::decode_detail(response).await;
            return Err(ApiError::Registration(detail));
        }
        response.json().await.map_err(ApiError::network)
    }

    /// List the caller's vault entries. The list omits decrypted passwords.
    pub async fn list_passwords(&self) -> Result<Vec<PasswordEntry>, ApiError> {
        // Trailing slash is significant to the backend router.
        let url = self.api_url("api/passwords/");
        let request = self.authorized(self.client.get(url))?;
        let response = request.send().await.map_err(ApiError::network)?;
        let response = Self::accept(response).await?;
        response.json().await.map_err(ApiError::network)
    }

    /// Store a new vault entry.
    pub async fn create_password(
        &self,
        entry: &NewPasswordEntry,
    ) -> Result<PasswordEntry, ApiError> {
        let url = self.api_url("api/passwords/");
        let request = self.authorized(self.client.post(url))?;
        let response = request
            .json(entry)
            .send()
            .await
            .map_err(ApiError::network)?;
        let response = Self::accept(response).await?;
        response.json().await.map_err(ApiError::network)
    }

    /// Fetch a single entry with its decrypted password.
    pub async fn get_password(&self, id: i64) -> Result<PasswordEntry, ApiError> {
        let url = self.api_url(&format!("api/passwords/{id}"));
        let request = self.authorized(self.client.get(url))?;
        let response = request.send().await.map_err(ApiError::network)?;
        let response = Self::accept(response).await?;
        response.json().await.map_err(ApiError::network)
    }

    /// Update fields of an existing entry.
    pub async fn update_password(
        &self,
        id: i64,
        patch: &PasswordPatch,
    ) -> Result<PasswordEntry, ApiError> {
        let url = self.api_url(&format!("api/passwords/{id}"));
        let request = self.authorized(self.client.put(url))?;
        let response = request
            .json(patch)
            .send()
            .await
            .map_err(ApiError::network)?;
        let response = Self::accept(response).await?;
        response.json().await.map_err(ApiError::network)
    }

    /// Delete an entry.
    pub async fn delete_password(&self, id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("api/passwords/{id}"));
        let request = self.authorized(self.client.delete(url))?;
        let response = request.send().await.map_err(ApiError::network)?;
        Self::accept(response).await?;
        Ok(())
    }

    /// Ask the backend for a generated password.
    pub async fn generate_password(
        &self,
        length: u32,
        uppercase: bool,
        digits: bool,
        special: bool,
    ) -> Result<GeneratedPassword, ApiError> {
        let url = self.api_url("api/generator/generate");
        let response = self
            .client
            .get(url)
            .query(&[
                ("length", length.to_string()),
                ("uppercase", uppercase.to_string()),
                ("digits", digits.to_string()),
                ("special", special.to_string()),
            ])
            .send()
            .await
            .map_err(ApiError::network)?;
        let response = Self::accept(response).await?;
        response.json().await.map_err(ApiError::network)
    }
}
