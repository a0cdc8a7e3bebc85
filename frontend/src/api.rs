//! HTTP client for the CamWatch backend.
//!
//! Thin wrapper over `gloo_net`: JSON bodies, a bearer token on every
//! non-public endpoint, and any non-success status reported as a uniform
//! failure (the backend does not guarantee structured error bodies).

use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use camwatch_shared::{
    Alert, BookServiceRequest, Camera, ChangePlanRequest, CreateAlertRequest, CreateCameraRequest,
    CreateOrderRequest, CreateProductRequest, LoginRequest, Order, PaymentRequest, Product,
    Recording, RegisterRequest, ServiceBooking, Session, Subscription, UpdateOrderStatusRequest,
    User,
};

use crate::config;

/// Request failure, at the granularity the UI cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// The backend answered with a non-success status.
    Status(u16),
    /// The response body could not be decoded.
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status(code) => write!(f, "request failed with status {}", code),
            ApiError::Decode(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq)]
pub struct CamWatchApi {
    base_url: String,
    token: Option<String>,
}

impl CamWatchApi {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    /// Client for the public auth endpoints.
    pub fn public() -> Self {
        Self::new(config::api_base_url(), None)
    }

    /// Client that sends `Authorization: Bearer <token>` on every call.
    pub fn with_token(token: String) -> Self {
        Self::new(config::api_base_url(), Some(token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let builder = self
            .authorize(Request::get(&self.url(path)))
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let res = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }
        res.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_body<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> ApiResult<gloo_net::http::Response> {
        let res = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }
        Ok(res)
    }

    /// POST a body, decode the response.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let res = self.send_body(Request::post(&self.url(path)), body).await?;
        res.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST a body, ignore the response body.
    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send_body(Request::post(&self.url(path)), body).await?;
        Ok(())
    }

    async fn patch_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send_body(Request::patch(&self.url(path)), body)
            .await?;
        Ok(())
    }

    async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        let res = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }
        Ok(())
    }

    // =========================================================
    // Auth (public)
    // =========================================================

    pub async fn login(&self, req: &LoginRequest) -> ApiResult<Session> {
        self.post_json("/auth/login", req).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> ApiResult<Session> {
        self.post_json("/auth/register", req).await
    }

    // =========================================================
    // Cameras & recordings
    // =========================================================

    pub async fn get_cameras(&self) -> ApiResult<Vec<Camera>> {
        self.get_json("/cameras", &[]).await
    }

    pub async fn add_camera(&self, req: &CreateCameraRequest) -> ApiResult<()> {
        self.post_unit("/cameras", req).await
    }

    pub async fn get_recordings(&self) -> ApiResult<Vec<Recording>> {
        self.get_json("/recordings", &[]).await
    }

    // =========================================================
    // Alerts
    // =========================================================

    pub async fn get_alerts(&self) -> ApiResult<Vec<Alert>> {
        self.get_json("/alerts", &[]).await
    }

    pub async fn send_alert(&self, req: &CreateAlertRequest) -> ApiResult<()> {
        self.post_unit("/admin/alerts", req).await
    }

    // =========================================================
    // Services & subscription
    // =========================================================

    pub async fn get_services(&self) -> ApiResult<Vec<ServiceBooking>> {
        self.get_json("/services", &[]).await
    }

    pub async fn book_service(&self, req: &BookServiceRequest) -> ApiResult<()> {
        self.post_unit("/services", req).await
    }

    pub async fn get_subscription(&self) -> ApiResult<Subscription> {
        self.get_json("/subscription", &[]).await
    }

    pub async fn change_plan(&self, req: &ChangePlanRequest) -> ApiResult<()> {
        self.post_unit("/subscription", req).await
    }

    // =========================================================
    // Shop & orders
    // =========================================================

    /// Public catalog. Empty filter values are omitted from the query.
    pub async fn get_products(&self, search: &str, category: &str) -> ApiResult<Vec<Product>> {
        let mut query = Vec::new();
        if !search.trim().is_empty() {
            query.push(("search", search.trim().to_string()));
        }
        if !category.trim().is_empty() {
            query.push(("category", category.trim().to_string()));
        }
        self.get_json("/products", &query).await
    }

    pub async fn create_order(&self, req: &CreateOrderRequest) -> ApiResult<Order> {
        self.post_json("/orders", req).await
    }

    pub async fn checkout_payment(&self, req: &PaymentRequest) -> ApiResult<()> {
        self.post_unit("/payments/checkout", req).await
    }

    // =========================================================
    // Admin
    // =========================================================

    pub async fn admin_users(&self) -> ApiResult<Vec<User>> {
        self.get_json("/admin/users", &[]).await
    }

    pub async fn admin_cameras(&self) -> ApiResult<Vec<Camera>> {
        self.get_json("/admin/cameras", &[]).await
    }

    pub async fn admin_services(&self) -> ApiResult<Vec<ServiceBooking>> {
        self.get_json("/admin/services", &[]).await
    }

    pub async fn admin_orders(&self) -> ApiResult<Vec<Order>> {
        self.get_json("/admin/orders", &[]).await
    }

    pub async fn create_product(&self, req: &CreateProductRequest) -> ApiResult<()> {
        self.post_unit("/admin/products", req).await
    }

    pub async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/admin/products/{}", id)).await
    }

    pub async fn update_order_status(
        &self,
        id: &str,
        req: &UpdateOrderStatusRequest,
    ) -> ApiResult<()> {
        self.patch_unit(&format!("/admin/orders/{}", id), req).await
    }
}
