//! HTTP client helpers (JSON over `fetch`).
//!
//! # Design
//! - Every request gets its own `AbortController`; the caller's signal and the timeout both abort it.
//! - Status and JSON handling live in the DOM-free pipeline; this layer only moves bytes.

use crate::app::UiContext;
use crate::core::fetch::{
    ApiRequest, CacheMode, Credentials, FetchError, FetchPolicy, RawResponse, RedirectMode,
    ReferrerPolicy, RequestMode, RequestOptions, Transport, run_request,
};
use async_trait::async_trait;
use gloo::console;
use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Headers, Request, RequestInit, Response};

/// `fetch`-backed transport.
pub(crate) struct BrowserTransport {
    signal: Option<AbortSignal>,
}

impl BrowserTransport {
    pub(crate) const fn new(signal: Option<AbortSignal>) -> Self {
        Self { signal }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, FetchError> {
        let window =
            web_sys::window().ok_or_else(|| FetchError::Network("window unavailable".into()))?;
        let controller = AbortController::new().map_err(|err| network_error(&err))?;
        let signal = controller.signal();

        let _relay = self.signal.as_ref().map(|external| {
            if external.aborted() {
                controller.abort();
            }
            let controller = controller.clone();
            EventListener::once(external, "abort", move |_| controller.abort())
        });
        let timed_out = Rc::new(Cell::new(false));
        let _deadline = request.timeout_ms.map(|ms| {
            let controller = controller.clone();
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        });
        let aborted = |err: &JsValue| {
            if timed_out.get() {
                FetchError::TimedOut(request.timeout_ms.unwrap_or_default())
            } else if signal.aborted() {
                FetchError::Aborted
            } else {
                network_error(err)
            }
        };

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_signal(Some(&signal));
        let headers = Headers::new().map_err(|err| network_error(&err))?;
        for (name, value) in &request.headers {
            headers
                .set(name, value)
                .map_err(|err| network_error(&err))?;
        }
        init.set_headers(&headers);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }
        apply_policy(&init, &request.policy);
        let fetch_request = Request::new_with_str_and_init(&request.url, &init)
            .map_err(|err| network_error(&err))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(|err| aborted(&err))?
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch resolved to a non-response".into()))?;
        let status = response.status();
        let text = response.text().map_err(|err| network_error(&err))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|err| aborted(&err))?
            .as_string()
            .unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}

fn apply_policy(init: &RequestInit, policy: &FetchPolicy) {
    if let Some(credentials) = policy.credentials {
        init.set_credentials(match credentials {
            Credentials::Omit => web_sys::RequestCredentials::Omit,
            Credentials::SameOrigin => web_sys::RequestCredentials::SameOrigin,
            Credentials::Include => web_sys::RequestCredentials::Include,
        });
    }
    if let Some(mode) = policy.mode {
        init.set_mode(match mode {
            RequestMode::SameOrigin => web_sys::RequestMode::SameOrigin,
            RequestMode::NoCors => web_sys::RequestMode::NoCors,
            RequestMode::Cors => web_sys::RequestMode::Cors,
            RequestMode::Navigate => web_sys::RequestMode::Navigate,
        });
    }
    if let Some(cache) = policy.cache {
        init.set_cache(match cache {
            CacheMode::Default => web_sys::RequestCache::Default,
            CacheMode::NoStore => web_sys::RequestCache::NoStore,
            CacheMode::Reload => web_sys::RequestCache::Reload,
            CacheMode::NoCache => web_sys::RequestCache::NoCache,
            CacheMode::ForceCache => web_sys::RequestCache::ForceCache,
            CacheMode::OnlyIfCached => web_sys::RequestCache::OnlyIfCached,
        });
    }
    if let Some(redirect) = policy.redirect {
        init.set_redirect(match redirect {
            RedirectMode::Follow => web_sys::RequestRedirect::Follow,
            RedirectMode::Error => web_sys::RequestRedirect::Error,
            RedirectMode::Manual => web_sys::RequestRedirect::Manual,
        });
    }
    if let Some(referrer) = &policy.referrer {
        init.set_referrer(referrer);
    }
    if let Some(referrer_policy) = policy.referrer_policy {
        init.set_referrer_policy(match referrer_policy {
            ReferrerPolicy::Inherit => web_sys::ReferrerPolicy::None,
            ReferrerPolicy::NoReferrer => web_sys::ReferrerPolicy::NoReferrer,
            ReferrerPolicy::NoReferrerWhenDowngrade => {
                web_sys::ReferrerPolicy::NoReferrerWhenDowngrade
            }
            ReferrerPolicy::Origin => web_sys::ReferrerPolicy::Origin,
            ReferrerPolicy::OriginWhenCrossOrigin => {
                web_sys::ReferrerPolicy::OriginWhenCrossOrigin
            }
            ReferrerPolicy::UnsafeUrl => web_sys::ReferrerPolicy::UnsafeUrl,
            ReferrerPolicy::SameOrigin => web_sys::ReferrerPolicy::SameOrigin,
            ReferrerPolicy::StrictOrigin => web_sys::ReferrerPolicy::StrictOrigin,
            ReferrerPolicy::StrictOriginWhenCrossOrigin => {
                web_sys::ReferrerPolicy::StrictOriginWhenCrossOrigin
            }
        });
    }
    if let Some(integrity) = &policy.integrity {
        init.set_integrity(integrity);
    }
    if let Some(keepalive) = policy.keepalive {
        init.set_keepalive(keepalive);
    }
}

fn network_error(err: &JsValue) -> FetchError {
    let detail = err
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "request failed".to_string());
    FetchError::Network(detail)
}

/// JSON client that reports through the page's spinner and flash messages.
#[derive(Clone)]
pub(crate) struct ApiClient {
    ctx: UiContext,
}

impl ApiClient {
    pub(crate) const fn new(ctx: UiContext) -> Self {
        Self { ctx }
    }

    /// Fetch `url` and decode its JSON body, optionally cancellable through `signal`.
    ///
    /// Options that failed to parse are reported like any other request failure.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        options: Result<RequestOptions, FetchError>,
        signal: Option<AbortSignal>,
    ) -> Result<T, FetchError> {
        let config = self.ctx.config();
        let request = options.map(|options| ApiRequest::build(url, options, &config.api));
        let transport = BrowserTransport::new(signal);
        let result =
            run_request(&transport, &self.ctx, request.as_ref().map_err(Clone::clone)).await;
        if let Err(err) = &result {
            let method = request
                .as_ref()
                .map_or("?", |request| request.method.as_str());
            console::error!("API Error:", method, url, err.to_string());
        }
        result
    }
}
