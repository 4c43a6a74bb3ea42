use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::Environment;
use crate::error::{Error, Result};
use crate::models::{
    Communications, DropLocationDetails, LocationDetails, OrderDetails, OrderStatus, UserDetails,
    Validations,
};

/// Async client for the Shadowfax Flash API.
///
/// Every method maps to exactly one outbound HTTP request. No retries, no
/// caching. The underlying `reqwest::Client` holds the connection pool and is
/// safe to share across concurrent in-flight calls; dropping the last
/// `FlashClient` clone releases the pool on all exit paths.
#[derive(Debug, Clone)]
pub struct FlashClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Builder for [`FlashClient`].
///
/// Example:
/// ```no_run
/// use shadowfax_flash::{Environment, FlashClient};
///
/// let client = FlashClient::builder("my-api-key")
///     .environment(Environment::Staging)
///     .build();
/// ```
pub struct FlashClientBuilder {
    api_key: String,
    environment: Environment,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl FlashClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            environment: Environment::Staging,
            base_url: None,
            http_client: None,
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL entirely, bypassing environment selection.
    /// Intended for pointing the client at a local test server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supply a pre-built HTTP client instead of an internally constructed
    /// one, e.g. to share a connection pool or tune timeouts.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> FlashClient {
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.environment.base_url().to_string());

        FlashClient {
            http: self.http_client.unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
        }
    }
}

/// Credits-key lookup result.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditsValidation {
    #[serde(default)]
    pub is_valid: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Serviceability check result: the flag plus whatever metadata the remote
/// attaches (ETA estimates, surge info).
#[derive(Debug, Clone, Deserialize)]
pub struct Serviceability {
    #[serde(default)]
    pub serviceable: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Order-creation result. OTPs are present only for legs that require them.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
    pub flash_order_id: String,
    #[serde(default)]
    pub pickup_otp: Option<String>,
    #[serde(default)]
    pub drop_otp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Point-in-time tracking snapshot. Rider fields stay `None` until a rider
/// is allotted; their absence in the response is not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackOrderResponse {
    pub status: OrderStatus,
    #[serde(default)]
    pub flash_order_id: Option<String>,
    #[serde(default)]
    pub rider_name: Option<String>,
    #[serde(default)]
    pub rider_contact_number: Option<String>,
    #[serde(default)]
    pub rider_latitude: Option<f64>,
    #[serde(default)]
    pub rider_longitude: Option<f64>,
}

#[derive(Serialize)]
struct ValidateCreditsRequest<'a> {
    credits_key: &'a str,
    store_brand_id: &'a str,
}

#[derive(Serialize)]
struct ServiceabilityRequest<'a> {
    pickup_details: &'a LocationDetails,
    drop_details: &'a DropLocationDetails,
}

#[derive(Serialize)]
pub(crate) struct CreateOrderRequest<'a> {
    pub(crate) pickup_details: &'a LocationDetails,
    pub(crate) drop_details: &'a DropLocationDetails,
    pub(crate) order_details: &'a OrderDetails,
    pub(crate) user_details: &'a UserDetails,
    pub(crate) validations: &'a Validations,
    pub(crate) communications: &'a Communications,
}

impl FlashClient {
    pub fn builder(api_key: impl Into<String>) -> FlashClientBuilder {
        FlashClientBuilder::new(api_key)
    }

    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self::builder(api_key).environment(environment).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that a credits key is valid for the given store brand.
    pub async fn validate_credits_key(
        &self,
        credits_key: &str,
        store_brand_id: &str,
    ) -> Result<CreditsValidation> {
        tracing::debug!(store_brand_id, "validating credits key");

        let response = self
            .http
            .post(format!("{}/api/v1/stores/validate_credits/", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&ValidateCreditsRequest {
                credits_key,
                store_brand_id,
            })
            .send()
            .await?;

        self.decode(response).await
    }

    /// Check whether the service covers the given pickup/drop pair.
    pub async fn check_serviceability(
        &self,
        pickup_details: &LocationDetails,
        drop_details: &DropLocationDetails,
    ) -> Result<Serviceability> {
        tracing::debug!("checking serviceability");

        let response = self
            .http
            .post(format!("{}/api/v1/serviceability/", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&ServiceabilityRequest {
                pickup_details,
                drop_details,
            })
            .send()
            .await?;

        self.decode(response).await
    }

    /// Create a delivery order from the six caller-built payloads.
    pub async fn create_order(
        &self,
        pickup_details: &LocationDetails,
        drop_details: &DropLocationDetails,
        order_details: &OrderDetails,
        user_details: &UserDetails,
        validations: &Validations,
        communications: &Communications,
    ) -> Result<CreateOrderResponse> {
        tracing::debug!(order_id = %order_details.order_id, "creating flash order");

        let response = self
            .http
            .post(format!("{}/api/v1/orders/", self.base_url))
            .header("Authorization", self.auth_header())
            .json(&CreateOrderRequest {
                pickup_details,
                drop_details,
                order_details,
                user_details,
                validations,
                communications,
            })
            .send()
            .await?;

        self.decode(response).await
    }

    /// Fetch the current tracking snapshot for a previously created order.
    /// `order_id` is the remote `flash_order_id`.
    pub async fn track_order(&self, order_id: &str) -> Result<TrackOrderResponse> {
        tracing::debug!(order_id, "tracking flash order");

        let response = self
            .http
            .get(format!("{}/api/v1/orders/{}/track/", self.base_url, order_id))
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        self.decode(response).await
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.api_key)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, "flash api response received");

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(translate_error(status, body))
        }
    }
}

fn translate_error(status: StatusCode, body: String) -> Error {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Error::Authentication { status, body };
    }

    if status.is_client_error() {
        if let Ok(value) = serde_json::from_str::<Value>(&body) {
            if let Some(fields) = field_errors(&value) {
                return Error::Validation {
                    message: format!("remote rejected request ({status})"),
                    fields: Some(fields),
                };
            }
        }
    }

    Error::Request { status, body }
}

/// Pull a structured field-error map out of a 4xx body, if there is one.
/// Accepts both an explicit `errors` key and the bare field-to-messages map
/// the remote emits for per-field rejections.
fn field_errors(value: &Value) -> Option<Value> {
    let object = value.as_object()?;

    if let Some(errors) = object.get("errors") {
        return Some(errors.clone());
    }

    if !object.is_empty() && object.values().all(Value::is_array) {
        return Some(value.clone());
    }

    None
}
