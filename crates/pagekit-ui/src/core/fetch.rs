//! JSON fetch pipeline with spinner and flash feedback.
//!
//! # Design
//! - Transport-agnostic: the browser supplies a `fetch`-backed [`Transport`], tests supply stubs.
//! - The spinner is released by a drop guard, so early returns and dropped futures still hide it.
//! - Network, status and decode failures share one [`FetchError`] path: flashed, then returned.

use crate::core::config::ApiSettings;
use crate::core::flash::FlashMessage;
use async_trait::async_trait;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failures surfaced by [`fetch_json`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The caller's options could not be turned into a request.
    #[error("invalid request options: {0}")]
    InvalidOptions(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body was not valid JSON for the expected type.
    #[error("invalid JSON response: {0}")]
    Decode(String),
    /// The caller aborted the request.
    #[error("request aborted")]
    Aborted,
    /// The request exceeded its timeout.
    #[error("request timed out after {0} ms")]
    TimedOut(u32),
}

/// HTTP method token.
///
/// The six methods `fetch` normalises are upper-cased; any other valid token
/// is kept as written. `CONNECT`, `TRACE` and `TRACK` are refused, as `fetch`
/// refuses them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Method(Cow<'static, str>);

impl Method {
    /// `GET`
    pub const GET: Self = Self(Cow::Borrowed("GET"));
    /// `POST`
    pub const POST: Self = Self(Cow::Borrowed("POST"));
    /// `PUT`
    pub const PUT: Self = Self(Cow::Borrowed("PUT"));
    /// `PATCH`
    pub const PATCH: Self = Self(Cow::Borrowed("PATCH"));
    /// `DELETE`
    pub const DELETE: Self = Self(Cow::Borrowed("DELETE"));
    /// `HEAD`
    pub const HEAD: Self = Self(Cow::Borrowed("HEAD"));
    /// `OPTIONS`
    pub const OPTIONS: Self = Self(Cow::Borrowed("OPTIONS"));

    /// Method name as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::GET
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const NORMALISED_METHODS: [&str; 6] = ["DELETE", "GET", "HEAD", "OPTIONS", "POST", "PUT"];
const FORBIDDEN_METHODS: [&str; 3] = ["CONNECT", "TRACE", "TRACK"];

const fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

impl FromStr for Method {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim();
        if token.is_empty() || !token.chars().all(is_token_char) {
            return Err(format!("invalid HTTP method `{token}`"));
        }
        let upper = token.to_ascii_uppercase();
        if FORBIDDEN_METHODS.contains(&upper.as_str()) {
            return Err(format!("forbidden HTTP method `{token}`"));
        }
        if NORMALISED_METHODS.contains(&upper.as_str()) {
            return Ok(Self(Cow::Owned(upper)));
        }
        Ok(Self(Cow::Owned(token.to_string())))
    }
}

impl TryFrom<String> for Method {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Credentials mode (`credentials`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Credentials {
    /// `omit`
    Omit,
    /// `same-origin`
    SameOrigin,
    /// `include`
    Include,
}

/// Request mode (`mode`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestMode {
    /// `same-origin`
    SameOrigin,
    /// `no-cors`
    NoCors,
    /// `cors`
    Cors,
    /// `navigate`
    Navigate,
}

/// HTTP cache mode (`cache`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheMode {
    /// `default`
    Default,
    /// `no-store`
    NoStore,
    /// `reload`
    Reload,
    /// `no-cache`
    NoCache,
    /// `force-cache`
    ForceCache,
    /// `only-if-cached`
    OnlyIfCached,
}

/// Redirect handling (`redirect`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectMode {
    /// `follow`
    Follow,
    /// `error`
    Error,
    /// `manual`
    Manual,
}

/// Referrer policy (`referrerPolicy`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferrerPolicy {
    /// Empty string: the document's policy applies.
    #[serde(rename = "")]
    Inherit,
    /// `no-referrer`
    NoReferrer,
    /// `no-referrer-when-downgrade`
    NoReferrerWhenDowngrade,
    /// `origin`
    Origin,
    /// `origin-when-cross-origin`
    OriginWhenCrossOrigin,
    /// `unsafe-url`
    UnsafeUrl,
    /// `same-origin`
    SameOrigin,
    /// `strict-origin`
    StrictOrigin,
    /// `strict-origin-when-cross-origin`
    StrictOriginWhenCrossOrigin,
}

/// `fetch` settings passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Credentials mode.
    pub credentials: Option<Credentials>,
    /// Request mode.
    pub mode: Option<RequestMode>,
    /// Cache mode.
    pub cache: Option<CacheMode>,
    /// Redirect handling.
    pub redirect: Option<RedirectMode>,
    /// Referrer URL, `about:client`, or empty for none.
    pub referrer: Option<String>,
    /// Referrer policy.
    pub referrer_policy: Option<ReferrerPolicy>,
    /// Subresource integrity metadata.
    pub integrity: Option<String>,
    /// Let the request outlive the page.
    pub keepalive: Option<bool>,
}

/// Caller-supplied request options, using the `fetch` option names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Extra headers; these replace defaults with the same name.
    /// Number and boolean values are sent in their text form.
    #[serde(deserialize_with = "header_values")]
    pub headers: BTreeMap<String, String>,
    /// Request body. Non-string JSON values are serialized.
    #[serde(deserialize_with = "body_text")]
    pub body: Option<String>,
    /// Per-request timeout overriding the configured one.
    pub timeout_ms: Option<u32>,
    /// Credentials mode.
    pub credentials: Option<Credentials>,
    /// Request mode.
    pub mode: Option<RequestMode>,
    /// Cache mode.
    pub cache: Option<CacheMode>,
    /// Redirect handling.
    pub redirect: Option<RedirectMode>,
    /// Referrer URL.
    pub referrer: Option<String>,
    /// Referrer policy.
    pub referrer_policy: Option<ReferrerPolicy>,
    /// Subresource integrity metadata.
    pub integrity: Option<String>,
    /// Let the request outlive the page.
    pub keepalive: Option<bool>,
}

fn header_values<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(text) => Ok((name, text)),
            Value::Number(number) => Ok((name, number.to_string())),
            Value::Bool(flag) => Ok((name, flag.to_string())),
            other => Err(D::Error::custom(format!(
                "header `{name}` must be a string, number or boolean, got {other}"
            ))),
        })
        .collect()
}

fn body_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    /// Target URL.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// Headers after merging defaults with caller overrides.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: Option<String>,
    /// Effective timeout.
    pub timeout_ms: Option<u32>,
    /// Remaining `fetch` settings.
    pub policy: FetchPolicy,
}

impl ApiRequest {
    /// Merge caller options with the configured defaults.
    ///
    /// Header names compare case-insensitively; a caller header replaces the
    /// default of the same name and keeps the caller's spelling.
    #[must_use]
    pub fn build(url: impl Into<String>, options: RequestOptions, settings: &ApiSettings) -> Self {
        let mut headers: Vec<(String, String)> = settings
            .default_headers
            .iter()
            .filter(|(name, _)| {
                !options
                    .headers
                    .keys()
                    .any(|override_name| override_name.eq_ignore_ascii_case(name))
            })
            .cloned()
            .collect();
        headers.extend(options.headers);
        Self {
            url: url.into(),
            method: options.method,
            headers,
            body: options.body,
            timeout_ms: options.timeout_ms.or(settings.timeout_ms),
            policy: FetchPolicy {
                credentials: options.credentials,
                mode: options.mode,
                cache: options.cache,
                redirect: options.redirect,
                referrer: options.referrer,
                referrer_policy: options.referrer_policy,
                integrity: options.integrity,
                keepalive: options.keepalive,
            },
        }
    }

    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body text.
    pub body: String,
}

impl RawResponse {
    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns the raw response.
#[async_trait(?Send)]
pub trait Transport {
    /// Perform the exchange.
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, FetchError>;
}

/// User-visible side effects of a request.
pub trait Feedback {
    /// Request the loading indicator.
    fn show_spinner(&self);
    /// Release the loading indicator.
    fn hide_spinner(&self);
    /// Surface a notice.
    fn flash(&self, message: FlashMessage);
    /// Lifetime of error notices.
    fn flash_timeout_ms(&self) -> u32 {
        FlashMessage::DEFAULT_TIMEOUT_MS
    }
}

struct SpinnerGuard<'a, F: Feedback + ?Sized> {
    feedback: &'a F,
}

impl<'a, F: Feedback + ?Sized> SpinnerGuard<'a, F> {
    fn show(feedback: &'a F) -> Self {
        feedback.show_spinner();
        Self { feedback }
    }
}

impl<F: Feedback + ?Sized> Drop for SpinnerGuard<'_, F> {
    fn drop(&mut self) {
        self.feedback.hide_spinner();
    }
}

/// Send `request`, decode the JSON body, and report failures.
///
/// # Errors
///
/// Returns the [`FetchError`] after it has been flashed to the user.
#[allow(clippy::future_not_send)]
pub async fn fetch_json<T, X, F>(
    transport: &X,
    feedback: &F,
    request: &ApiRequest,
) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    X: Transport + ?Sized,
    F: Feedback + ?Sized,
{
    run_request(transport, feedback, Ok(request)).await
}

/// [`fetch_json`] for a request that may have failed to build.
///
/// A build failure takes the same path as a failed exchange: the spinner
/// blinks, the error is flashed, then returned.
///
/// # Errors
///
/// Returns the build error or the exchange error after flashing it.
#[allow(clippy::future_not_send)]
pub async fn run_request<T, X, F>(
    transport: &X,
    feedback: &F,
    request: Result<&ApiRequest, FetchError>,
) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    X: Transport + ?Sized,
    F: Feedback + ?Sized,
{
    let result = {
        let _spinner = SpinnerGuard::show(feedback);
        match request {
            Ok(request) => send_and_decode(transport, request).await,
            Err(err) => Err(err),
        }
    };
    if let Err(err) = &result {
        let notice = FlashMessage::error(err.to_string()).with_timeout(feedback.flash_timeout_ms());
        feedback.flash(notice);
    }
    result
}

#[allow(clippy::future_not_send)]
async fn send_and_decode<T, X>(transport: &X, request: &ApiRequest) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    X: Transport + ?Sized,
{
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }
    serde_json::from_str(&response.body).map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{
        ApiRequest, CacheMode, Credentials, FetchError, Feedback, Method, RawResponse,
        RequestMode, RequestOptions, Transport, fetch_json, run_request,
    };
    use crate::core::config::ApiSettings;
    use crate::core::flash::{FlashCategory, FlashMessage};
    use async_trait::async_trait;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::time::Duration;

    struct StubTransport {
        reply: Result<RawResponse, FetchError>,
        seen: RefCell<Vec<ApiRequest>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: FetchError) -> Self {
            Self {
                reply: Err(err),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for StubTransport {
        async fn send(&self, request: &ApiRequest) -> Result<RawResponse, FetchError> {
            self.seen.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    struct HangingTransport;

    #[async_trait(?Send)]
    impl Transport for HangingTransport {
        async fn send(&self, _request: &ApiRequest) -> Result<RawResponse, FetchError> {
            std::future::pending().await
        }
    }

    #[derive(Default)]
    struct RecordingFeedback {
        events: RefCell<Vec<String>>,
        flashes: RefCell<Vec<FlashMessage>>,
        timeout_ms: Option<u32>,
    }

    impl Feedback for RecordingFeedback {
        fn show_spinner(&self) {
            self.events.borrow_mut().push("show".into());
        }

        fn hide_spinner(&self) {
            self.events.borrow_mut().push("hide".into());
        }

        fn flash(&self, message: FlashMessage) {
            self.events.borrow_mut().push("flash".into());
            self.flashes.borrow_mut().push(message);
        }

        fn flash_timeout_ms(&self) -> u32 {
            self.timeout_ms.unwrap_or(FlashMessage::DEFAULT_TIMEOUT_MS)
        }
    }

    fn request(url: &str) -> ApiRequest {
        ApiRequest::build(url, RequestOptions::default(), &ApiSettings::default())
    }

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Person {
        id: u32,
        name: String,
    }

    #[tokio::test]
    async fn success_returns_decoded_body() {
        let transport = StubTransport::replying(200, r#"{"id": 7, "name": "Ada"}"#);
        let feedback = RecordingFeedback::default();

        let person: Person = fetch_json(&transport, &feedback, &request("/api/people/7"))
            .await
            .expect("decoded");

        assert_eq!(
            person,
            Person {
                id: 7,
                name: "Ada".into()
            }
        );
        assert_eq!(*feedback.events.borrow(), vec!["show", "hide"]);
        assert!(feedback.flashes.borrow().is_empty());
    }

    #[tokio::test]
    async fn error_status_is_flashed_and_returned() {
        let transport = StubTransport::replying(404, r#"{"error": "missing"}"#);
        let feedback = RecordingFeedback::default();

        let result: Result<Value, _> = fetch_json(&transport, &feedback, &request("/x")).await;

        assert_eq!(result, Err(FetchError::Status(404)));
        assert_eq!(*feedback.events.borrow(), vec!["show", "hide", "flash"]);
        let flashes = feedback.flashes.borrow();
        assert_eq!(flashes[0].text, "HTTP error! status: 404");
        assert_eq!(flashes[0].category, FlashCategory::Error);
    }

    #[tokio::test]
    async fn malformed_json_takes_the_same_path() {
        let transport = StubTransport::replying(200, "<html>oops</html>");
        let feedback = RecordingFeedback::default();

        let result: Result<Value, _> = fetch_json(&transport, &feedback, &request("/x")).await;

        assert!(matches!(result, Err(FetchError::Decode(_))));
        assert_eq!(*feedback.events.borrow(), vec!["show", "hide", "flash"]);
    }

    #[tokio::test]
    async fn network_failure_is_flashed_and_returned() {
        let transport = StubTransport::failing(FetchError::Network("offline".into()));
        let feedback = RecordingFeedback::default();

        let result: Result<Value, _> = fetch_json(&transport, &feedback, &request("/x")).await;

        assert_eq!(result, Err(FetchError::Network("offline".into())));
        assert_eq!(feedback.flashes.borrow()[0].text, "network error: offline");
    }

    #[tokio::test]
    async fn dropped_request_still_hides_spinner() {
        let feedback = RecordingFeedback::default();
        let slow = request("/slow");
        let pending = fetch_json::<Value, _, _>(&HangingTransport, &feedback, &slow);

        let outcome = tokio::time::timeout(Duration::from_millis(5), pending).await;

        assert!(outcome.is_err());
        assert_eq!(*feedback.events.borrow(), vec!["show", "hide"]);
    }

    #[tokio::test]
    async fn transport_sees_merged_headers() {
        let transport = StubTransport::replying(200, "null");
        let feedback = RecordingFeedback::default();
        let req = request("/x");

        let _: Value = fetch_json(&transport, &feedback, &req).await.expect("null");

        let seen = transport.seen.borrow();
        assert_eq!(seen[0].header("content-type"), Some("application/json"));
        assert_eq!(seen[0].header("X-Requested-With"), Some("XMLHttpRequest"));
    }

    #[test]
    fn caller_headers_override_defaults_case_insensitively() {
        let options: RequestOptions = serde_json::from_value(json!({
            "method": "post",
            "headers": {"content-type": "text/plain", "X-Csrf-Token": "abc"},
            "body": "hello"
        }))
        .expect("options");
        let req = ApiRequest::build("/submit", options, &ApiSettings::default());

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.header("Content-Type"), Some("text/plain"));
        assert_eq!(req.header("x-csrf-token"), Some("abc"));
        assert_eq!(req.header("X-Requested-With"), Some("XMLHttpRequest"));
        assert_eq!(req.headers.len(), 3);
        assert_eq!(req.body.as_deref(), Some("hello"));
    }

    #[test]
    fn object_bodies_are_serialized() {
        let options: RequestOptions =
            serde_json::from_value(json!({"body": {"name": "Ada"}, "timeoutMs": 250}))
                .expect("options");
        assert_eq!(options.body.as_deref(), Some(r#"{"name":"Ada"}"#));
        assert_eq!(options.timeout_ms, Some(250));
    }

    #[test]
    fn timeout_falls_back_to_settings() {
        let settings = ApiSettings {
            timeout_ms: Some(30_000),
            ..ApiSettings::default()
        };
        let req = ApiRequest::build("/x", RequestOptions::default(), &settings);
        assert_eq!(req.timeout_ms, Some(30_000));
        assert_eq!(req.method.as_str(), "GET");
    }

    #[test]
    fn any_method_token_is_accepted() {
        let parse = |value| serde_json::from_value::<RequestOptions>(json!({"method": value}));
        assert_eq!(parse("OPTIONS").expect("options").method, Method::OPTIONS);
        assert_eq!(parse("delete").expect("delete").method, Method::DELETE);
        assert_eq!(parse("PROPFIND").expect("custom").method.as_str(), "PROPFIND");
        assert_eq!(parse("patch").expect("patch").method.as_str(), "patch");
    }

    #[test]
    fn malformed_and_forbidden_methods_are_rejected() {
        assert!("BR EW".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
        assert_eq!(
            "connect".parse::<Method>(),
            Err("forbidden HTTP method `connect`".to_string())
        );
    }

    #[test]
    fn numeric_and_boolean_headers_are_sent_as_text() {
        let options: RequestOptions =
            serde_json::from_value(json!({"headers": {"X-Retry": 3, "X-Debug": true}}))
                .expect("options");
        assert_eq!(options.headers["X-Retry"], "3");
        assert_eq!(options.headers["X-Debug"], "true");
        assert!(
            serde_json::from_value::<RequestOptions>(json!({"headers": {"X-Bad": [1]}})).is_err()
        );
    }

    #[test]
    fn fetch_settings_reach_the_request() {
        let options: RequestOptions = serde_json::from_value(json!({
            "credentials": "include",
            "mode": "cors",
            "cache": "no-store",
            "referrerPolicy": "no-referrer",
            "keepalive": true
        }))
        .expect("options");
        let req = ApiRequest::build("/x", options, &ApiSettings::default());

        assert_eq!(req.policy.credentials, Some(Credentials::Include));
        assert_eq!(req.policy.mode, Some(RequestMode::Cors));
        assert_eq!(req.policy.cache, Some(CacheMode::NoStore));
        assert!(req.policy.referrer_policy.is_some());
        assert_eq!(req.policy.keepalive, Some(true));
        assert_eq!(req.policy.redirect, None);
    }

    #[tokio::test]
    async fn invalid_options_are_flashed_and_returned() {
        let transport = StubTransport::replying(200, "null");
        let feedback = RecordingFeedback::default();
        let invalid = FetchError::InvalidOptions("bad mode".into());

        let result: Result<Value, _> = run_request(&transport, &feedback, Err(invalid.clone())).await;

        assert_eq!(result, Err(invalid));
        assert!(transport.seen.borrow().is_empty());
        assert_eq!(*feedback.events.borrow(), vec!["show", "hide", "flash"]);
        assert_eq!(
            feedback.flashes.borrow()[0].text,
            "invalid request options: bad mode"
        );
    }

    #[tokio::test]
    async fn error_notices_use_the_configured_lifetime() {
        let transport = StubTransport::replying(500, "");
        let feedback = RecordingFeedback {
            timeout_ms: Some(1_500),
            ..RecordingFeedback::default()
        };

        let _: Result<Value, _> = fetch_json(&transport, &feedback, &request("/x")).await;

        assert_eq!(feedback.flashes.borrow()[0].timeout_ms, 1_500);
    }

    #[test]
    fn success_range_is_2xx() {
        let response = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(302).is_success());
        assert!(!response(500).is_success());
    }
}
