//! Browser Transport
//!
//! [`Backend`] over `fetch` via gloo-net, plus the browser timer and
//! local-storage adapters the controllers need.

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use std::time::Duration;

use atithiverse::api::dto::{self, NewsletterRequest, ProbeRequest, WishlistRequest};
use atithiverse::api::{Backend, ChatRequest, DestinationQuery};
use atithiverse::models::{
    ChatReply, CurrentUser, Destination, SearchSuggestion, SubscriptionReceipt, WeatherReport,
    WishlistUpdate,
};
use atithiverse::session::ClientStorage;
use atithiverse::timer::Sleeper;
use atithiverse::{ApiError, ApiResult};

/// Same origin as the page
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "atithiverse_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = WebStorage.get_item(API_URL_KEY);
    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Site backend reached with `fetch`
#[derive(Clone)]
pub struct BrowserBackend {
    base_url: String,
    chat_timeout: Duration,
}

impl BrowserBackend {
    pub fn new(base_url: &str, chat_timeout: Duration) -> Self {
        Self {
            base_url: normalize_base(base_url),
            chat_timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str, check_status: bool) -> ApiResult<Value> {
        let response = send(Request::get(&self.url(path))).await?;
        if check_status {
            json_body(ensure_success(response).await?).await
        } else {
            json_body(response).await
        }
    }

    async fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> ApiResult<Response> {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Format(e.to_string()))?;
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// POST to the chat endpoint, giving up after the chat deadline
    async fn post_chat<T: serde::Serialize>(&self, body: &T) -> ApiResult<Response> {
        let request = Box::pin(self.post_json(dto::CHAT_PATH, body));
        let deadline = TimeoutFuture::new(self.chat_timeout.as_millis() as u32);

        match select(request, deadline).await {
            Either::Left((response, _)) => response,
            Either::Right(((), _)) => Err(ApiError::Timeout),
        }
    }
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: dto::status_message(&body),
    })
}

async fn json_body(response: Response) -> ApiResult<Value> {
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Format(e.to_string()))
}

#[async_trait(?Send)]
impl Backend for BrowserBackend {
    async fn current_user(&self) -> ApiResult<Option<CurrentUser>> {
        dto::parse_user(self.get_json(dto::USER_PATH, false).await?)
    }

    async fn logout(&self) -> ApiResult<()> {
        let response = send(Request::post(&self.url(dto::LOGOUT_PATH))).await?;
        json_body(response).await.map(|_| ())
    }

    async fn destinations(&self, query: &DestinationQuery) -> ApiResult<Vec<Destination>> {
        let path = format!("{}{}", dto::DESTINATIONS_PATH, query.query_string());
        dto::parse_destinations(self.get_json(&path, true).await?)
    }

    async fn destination(&self, id: u64) -> ApiResult<Destination> {
        dto::parse_destination(self.get_json(&dto::destination_path(id), true).await?)
    }

    async fn toggle_wishlist(&self, destination_id: u64) -> ApiResult<WishlistUpdate> {
        let response = self
            .post_json(dto::WISHLIST_PATH, &WishlistRequest { destination_id })
            .await?;
        dto::parse_wishlist(json_body(response).await?)
    }

    async fn chat(&self, request: &ChatRequest) -> ApiResult<ChatReply> {
        let response = ensure_success(self.post_chat(request).await?).await?;
        dto::parse_chat(json_body(response).await?)
    }

    async fn probe_chat(&self) -> ApiResult<bool> {
        let response = self
            .post_chat(&ProbeRequest {
                user_input: "test connection",
            })
            .await?;
        dto::parse_probe(json_body(response).await?)
    }

    async fn subscribe(&self, email: &str) -> ApiResult<SubscriptionReceipt> {
        let response = self
            .post_json(dto::NEWSLETTER_PATH, &NewsletterRequest { email })
            .await?;
        dto::parse_subscription(json_body(response).await?)
    }

    async fn weather(&self, city: &str) -> ApiResult<WeatherReport> {
        dto::parse_weather(self.get_json(&dto::weather_path(city), false).await?)
    }

    async fn search_suggestions(
        &self,
        query: &str,
        limit: usize,
    ) -> ApiResult<Vec<SearchSuggestion>> {
        dto::parse_suggestions(self.get_json(&dto::search_path(query, limit), false).await?)
    }
}

/// Browser event-loop timer
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// `window.localStorage`; every call is a no-op when storage is blocked
#[derive(Debug, Default, Clone, Copy)]
pub struct WebStorage;

impl WebStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ClientStorage for WebStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_base(" https://atithiverse.in "), "https://atithiverse.in");
        assert_eq!(normalize_base(DEFAULT_API_BASE), "");
    }

    #[test]
    fn test_backend_joins_paths() {
        let backend = BrowserBackend::new("http://localhost:5000/", Duration::from_secs(15));
        assert_eq!(backend.url(dto::USER_PATH), "http://localhost:5000/api/user");

        let same_origin = BrowserBackend::new(DEFAULT_API_BASE, Duration::from_secs(15));
        assert_eq!(same_origin.url(&dto::destination_path(3)), "/api/destinations/3");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_web_storage_round_trip() {
        WebStorage.set_item("atithiverse_test", "1");
        assert_eq!(WebStorage.get_item("atithiverse_test").as_deref(), Some("1"));
        WebStorage.remove_item("atithiverse_test");
        assert_eq!(WebStorage.get_item("atithiverse_test"), None);
    }
}
