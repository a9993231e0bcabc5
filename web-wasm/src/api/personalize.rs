//! Personalization backends
//!
//! One trait, two implementations: `MockPersonalizer` reproduces the demo
//! contract (fixed delay, photo echoed back) and `HttpPersonalizer` posts
//! to the real endpoint. `personalize_with_timeout` races either against
//! the hard deadline.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use pickabook_common::{
    GenerateError, PersonalizeRequest, PersonalizeResponse, MOCK_GENERATION_DELAY_MS,
};

/// Endpoint the HTTP client posts to.
pub const PERSONALIZE_ENDPOINT: &str = "/api/personalize";

/// A backend that turns an uploaded photo into an illustrated one.
///
/// Futures returned here are not `Send`; they run on the browser's single
/// thread via `spawn_local`.
#[async_trait(?Send)]
pub trait Personalizer: Send + Sync {
    async fn personalize(
        &self,
        request: PersonalizeRequest,
    ) -> Result<PersonalizeResponse, GenerateError>;
}

/// Stand-in backend: waits the fixed delay, then echoes the photo back.
pub struct MockPersonalizer {
    delay_ms: u32,
}

impl MockPersonalizer {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockPersonalizer {
    fn default() -> Self {
        Self::with_delay(MOCK_GENERATION_DELAY_MS)
    }
}

#[async_trait(?Send)]
impl Personalizer for MockPersonalizer {
    async fn personalize(
        &self,
        request: PersonalizeRequest,
    ) -> Result<PersonalizeResponse, GenerateError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(PersonalizeResponse::echo(&request))
    }
}

/// Client for `POST /api/personalize`.
pub struct HttpPersonalizer {
    endpoint: String,
}

impl HttpPersonalizer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpPersonalizer {
    fn default() -> Self {
        Self::new(PERSONALIZE_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl Personalizer for HttpPersonalizer {
    async fn personalize(
        &self,
        request: PersonalizeRequest,
    ) -> Result<PersonalizeResponse, GenerateError> {
        let body = request
            .to_json()
            .map_err(|e| GenerateError::Network(format!("request not sent: {}", e)))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoint, &opts)
            .map_err(js_network_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_network_error)?;

        let window = web_sys::window().unwrap();
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_network_error)?;
        let response: Response = response.dyn_into().map_err(js_network_error)?;

        if !response.ok() {
            return Err(GenerateError::Backend {
                status: response.status(),
            });
        }

        let json = JsFuture::from(response.json().map_err(js_network_error)?)
            .await
            .map_err(|e| GenerateError::InvalidResponse(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value(json)
            .map_err(|e| GenerateError::InvalidResponse(e.to_string()))
    }
}

fn js_network_error(value: JsValue) -> GenerateError {
    GenerateError::Network(format!("{:?}", value))
}

/// Run a personalization call against the hard deadline.
///
/// The losing side of the race is dropped, so a late completion from a
/// timed-out call never surfaces.
pub async fn personalize_with_timeout(
    backend: &dyn Personalizer,
    request: PersonalizeRequest,
    timeout_ms: u32,
) -> Result<PersonalizeResponse, GenerateError> {
    let call = backend.personalize(request);
    let deadline = TimeoutFuture::new(timeout_ms);

    match future::select(call, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(GenerateError::TimedOut),
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn wasm_mock_echoes_request_image() {
        let backend = MockPersonalizer::with_delay(10);
        let request = PersonalizeRequest {
            image: "data:image/png;base64,AAAA".to_string(),
        };

        let response = backend
            .personalize(request.clone())
            .await
            .expect("mock personalize failed");
        assert_eq!(response.illustrated_image, request.image);
    }

    #[wasm_bindgen_test]
    async fn wasm_deadline_beats_slow_backend() {
        let backend = MockPersonalizer::with_delay(5_000);
        let request = PersonalizeRequest {
            image: "data:image/png;base64,AAAA".to_string(),
        };

        let outcome = personalize_with_timeout(&backend, request, 20).await;
        assert_eq!(outcome, Err(GenerateError::TimedOut));
    }

    #[wasm_bindgen_test]
    async fn wasm_fast_backend_beats_deadline() {
        let backend = MockPersonalizer::with_delay(10);
        let request = PersonalizeRequest {
            image: "data:image/jpeg;base64,/9j/".to_string(),
        };

        let outcome = personalize_with_timeout(&backend, request.clone(), 5_000).await;
        assert_eq!(outcome.map(|r| r.illustrated_image), Ok(request.image));
    }
}
