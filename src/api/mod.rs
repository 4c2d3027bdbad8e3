//! Client for the two authentication endpoints of the portal backend.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::ApiError;
use crate::config::ApiConfig;
use crate::forms::RegistrationPayload;
use crate::types::{LoginRequest, LoginResponse, MessageResponse};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// A response that arrived and whose body could be decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiReply<T> {
    pub status: u16,
    pub body: T,
}

impl<T> ApiReply<T> {
    pub fn new(status: u16, body: T) -> Self {
        Self { status, body }
    }

    /// Any 2xx status counts as success; other codes are not distinguished.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the submission flows and the network.
///
/// `Err` means no usable reply arrived (transport failure or an
/// undecodable body). Non-2xx replies are returned as `Ok`.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<ApiReply<LoginResponse>, ApiError>;

    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<ApiReply<MessageResponse>, ApiError>;
}

/// `AuthApi` over the browser's fetch, via `gloo-net`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiReply<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<T>().await?;

        Ok(ApiReply::new(status, body))
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<ApiReply<LoginResponse>, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<ApiReply<MessageResponse>, ApiError> {
        self.post_json(REGISTER_PATH, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_is_success() {
        assert!(ApiReply::new(200, ()).is_success());
        assert!(ApiReply::new(201, ()).is_success());
        assert!(ApiReply::new(299, ()).is_success());
        assert!(!ApiReply::new(199, ()).is_success());
        assert!(!ApiReply::new(302, ()).is_success());
        assert!(!ApiReply::new(401, ()).is_success());
        assert!(!ApiReply::new(500, ()).is_success());
    }

    #[test]
    fn endpoints_hang_off_the_configured_base() {
        let config = ApiConfig::new("https://portal.example/api").unwrap();
        assert_eq!(config.endpoint(LOGIN_PATH), "https://portal.example/api/auth/login");
        assert_eq!(
            config.endpoint(REGISTER_PATH),
            "https://portal.example/api/auth/register"
        );
    }
}
