//! Storefront authentication client
//!
//! `AuthClient` is the capability the sign-in flow depends on. `MedusaClient`
//! implements it against the Medusa store API with cookie sessions.

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use serde::{Deserialize, Serialize};

use super::credentials::SignInCredentials;
use crate::core::config::Config;

/// Customer returned by the store API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Customer {
    /// Full name when known, otherwise the email
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}

/// Per-request context sent alongside the credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub sales_channel_id: String,
}

/// Authentication client errors
#[derive(Debug, thiserror::Error)]
pub enum AuthClientError {
    #[error("Request rejected with status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Request timed out after {0}ms")]
    Timeout(u32),

    #[error("Not available on server")]
    Unavailable,
}

impl From<gloo_net::Error> for AuthClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AuthClientError::Decode(e.to_string()),
            other => AuthClientError::Network(other.to_string()),
        }
    }
}

/// Authenticates a customer against the commerce backend
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn authenticate(
        &self,
        credentials: &SignInCredentials,
        context: &RequestContext,
    ) -> Result<Customer, AuthClientError>;
}

#[derive(Debug, Deserialize)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct CustomerResponse {
    customer: Customer,
}

/// Client for the Medusa store API
#[derive(Debug, Clone, PartialEq)]
pub struct MedusaClient {
    base_url: String,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    timeout_ms: u32,
}

impl MedusaClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            timeout_ms: config.auth_timeout_ms,
        }
    }

    pub fn auth_url(&self) -> String {
        format!("{}/store/auth", self.base_url)
    }

    pub fn customer_url(&self) -> String {
        format!("{}/store/customers/me", self.base_url)
    }

    /// Fetch the customer bound to the current session cookie.
    ///
    /// Returns `Ok(None)` when there is no session.
    #[cfg(feature = "hydrate")]
    pub async fn fetch_customer(&self) -> Result<Option<Customer>, AuthClientError> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let response = Request::get(&self.customer_url())
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        match response.status() {
            401 | 403 => Ok(None),
            _ if response.ok() => {
                let body: CustomerResponse = response.json().await?;
                Ok(Some(body.customer))
            }
            status => Err(AuthClientError::Status(status)),
        }
    }
}

impl AuthClient for MedusaClient {
    #[cfg(feature = "hydrate")]
    async fn authenticate(
        &self,
        credentials: &SignInCredentials,
        context: &RequestContext,
    ) -> Result<Customer, AuthClientError> {
        use gloo_net::http::Request;
        use gloo_timers::future::TimeoutFuture;
        use web_sys::RequestCredentials;

        let request = async {
            let response = Request::post(&self.auth_url())
                .header("sales_channel_id", &context.sales_channel_id)
                .credentials(RequestCredentials::Include)
                .json(credentials)?
                .send()
                .await?;

            if !response.ok() {
                return Err(AuthClientError::Status(response.status()));
            }

            let body: CustomerResponse = response.json().await?;
            Ok::<_, AuthClientError>(body.customer)
        };

        with_timeout(self.timeout_ms, request, TimeoutFuture::new(self.timeout_ms)).await
    }

    #[cfg(not(feature = "hydrate"))]
    async fn authenticate(
        &self,
        _credentials: &SignInCredentials,
        _context: &RequestContext,
    ) -> Result<Customer, AuthClientError> {
        Err(AuthClientError::Unavailable)
    }
}

/// Race a request against a timer that fires after `timeout_ms`
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
async fn with_timeout<T>(
    timeout_ms: u32,
    request: impl Future<Output = Result<T, AuthClientError>>,
    timer: impl Future<Output = ()>,
) -> Result<T, AuthClientError> {
    let request = pin!(request);
    let timer = pin!(timer);

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AuthClientError::Timeout(timeout_ms)),
    }
}

#[cfg(test)]
mod tests {
    use futures::future;

    use super::*;

    fn customer(first: Option<&str>, last: Option<&str>) -> Customer {
        Customer {
            id: "cus_01".to_string(),
            email: "a@b.com".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_customer_response_decodes() {
        let json = r#"{
            "customer": {
                "id": "cus_01",
                "email": "a@b.com",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "has_account": true
            }
        }"#;

        let body: CustomerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.customer, customer(Some("Ada"), Some("Lovelace")));
    }

    #[test]
    fn test_customer_names_are_optional() {
        let json = r#"{ "customer": { "id": "cus_01", "email": "a@b.com" } }"#;

        let body: CustomerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.customer, customer(None, None));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            customer(Some("Ada"), Some("Lovelace")).display_name(),
            "Ada Lovelace"
        );
        assert_eq!(customer(Some("Ada"), None).display_name(), "Ada");
        assert_eq!(customer(Some(""), None).display_name(), "a@b.com");
        assert_eq!(customer(None, None).display_name(), "a@b.com");
    }

    #[test]
    fn test_urls_from_config() {
        let config = Config::from_parts(Some("https://api.shop.example.com/"), Some("sc"), None);
        let client = MedusaClient::new(&config);

        assert_eq!(client.auth_url(), "https://api.shop.example.com/store/auth");
        assert_eq!(
            client.customer_url(),
            "https://api.shop.example.com/store/customers/me"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthClientError::Status(401).to_string(),
            "Request rejected with status 401"
        );
        assert_eq!(
            AuthClientError::Timeout(30000).to_string(),
            "Request timed out after 30000ms"
        );
    }

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_server_side_authenticate_is_unavailable() {
        let client = MedusaClient::new(&Config::from_parts(None, Some("sc"), None));
        let credentials = SignInCredentials::validate("a@b.com", "x").unwrap();
        let context = RequestContext {
            sales_channel_id: "sc".to_string(),
        };

        let result = client.authenticate(&credentials, &context).await;
        assert!(matches!(result, Err(AuthClientError::Unavailable)));
    }

    #[tokio::test]
    async fn test_request_finishing_before_timer_wins() {
        let result = with_timeout(
            50,
            future::ready(Ok::<_, AuthClientError>(customer(None, None))),
            future::pending(),
        )
        .await;

        assert_eq!(result.unwrap(), customer(None, None));
    }

    #[tokio::test]
    async fn test_request_error_before_timer_is_kept() {
        let result = with_timeout(
            50,
            future::ready(Err::<Customer, _>(AuthClientError::Status(401))),
            future::pending(),
        )
        .await;

        assert!(matches!(result, Err(AuthClientError::Status(401))));
    }

    #[tokio::test]
    async fn test_timer_firing_first_is_timeout() {
        let result = with_timeout(
            50,
            future::pending::<Result<Customer, AuthClientError>>(),
            future::ready(()),
        )
        .await;

        assert!(matches!(result, Err(AuthClientError::Timeout(50))));
    }
}
