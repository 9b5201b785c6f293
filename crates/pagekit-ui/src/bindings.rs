//! JavaScript entry points used by page markup and inline scripts.
//!
//! Every function resolves the page-wide context lazily, so markup can call
//! these before or after the start hook has wired the page.

use crate::app::debounce::TimeoutScheduler;
use crate::app::{UiContext, flash, forms, shared_context, spinner, theme};
use crate::core::debounce::Debouncer;
use crate::core::fetch::{FetchError, RequestOptions};
use crate::core::flash::{FlashCategory, FlashMessage};
use crate::core::password::{PasswordPolicy, StrengthLevel};
use crate::services::api::ApiClient;
use gloo::console;
use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{AbortSignal, Element};

/// Module start hook: installs the panic hook and wires the page.
///
/// # Errors
///
/// Returns an error when no document is available.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::run_page()
}

/// Swap the theme stylesheet and persist `name`.
///
/// # Errors
///
/// Throws when `name` is not a valid or available theme.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(name: &str) -> Result<(), JsValue> {
    let ctx = shared_context()?;
    theme::set_theme(&ctx, name)
        .map(drop)
        .map_err(|err| js_error(&err.to_string()))
}

/// Stored theme preference, or the configured default.
///
/// # Errors
///
/// Throws when no document is available.
#[wasm_bindgen(js_name = loadTheme)]
pub fn load_theme() -> Result<String, JsValue> {
    let ctx = shared_context()?;
    Ok(theme::load_theme(&ctx).to_string())
}

/// Show a dismissible notice that removes itself after `timeout` milliseconds.
///
/// # Errors
///
/// Throws when no document is available.
#[wasm_bindgen(js_name = createFlashMessage)]
pub fn create_flash_message(
    message: &str,
    category: Option<String>,
    timeout: Option<u32>,
) -> Result<(), JsValue> {
    let ctx = shared_context()?;
    let category = category
        .as_deref()
        .map_or(FlashCategory::Info, FlashCategory::from_label);
    let notice = FlashMessage::new(message)
        .with_category(category)
        .with_timeout(timeout.unwrap_or(ctx.config().flash.timeout_ms));
    flash::render(&ctx, &notice);
    Ok(())
}

/// Flag empty required fields under `form`; true when every one is filled.
///
/// # Errors
///
/// Throws when no document is available.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: &Element) -> Result<bool, JsValue> {
    let ctx = shared_context()?;
    Ok(forms::validate_form(&ctx, form))
}

/// Score `password` from 0 to 5.
#[wasm_bindgen(js_name = checkPasswordStrength)]
#[must_use]
pub fn check_password_strength(password: &str) -> u8 {
    page_policy().score(password)
}

/// Meter label for `password` ("very weak" through "strong").
#[wasm_bindgen(js_name = passwordStrengthLabel)]
#[must_use]
pub fn password_strength_label(password: &str) -> String {
    StrengthLevel::from_score(page_policy().score(password))
        .label()
        .to_string()
}

/// Hints for the complexity rules `password` fails.
#[wasm_bindgen(js_name = passwordHints)]
#[must_use]
pub fn password_hints(password: &str) -> Array {
    page_policy()
        .violations(password)
        .into_iter()
        .map(|rule| JsValue::from_str(&rule.hint()))
        .collect()
}

/// Request the loading indicator.
///
/// # Errors
///
/// Throws when no document is available.
#[wasm_bindgen(js_name = showSpinner)]
pub fn show_spinner() -> Result<(), JsValue> {
    spinner::show(&shared_context()?);
    Ok(())
}

/// Release the loading indicator.
///
/// # Errors
///
/// Throws when no document is available.
#[wasm_bindgen(js_name = hideSpinner)]
pub fn hide_spinner() -> Result<(), JsValue> {
    spinner::hide(&shared_context()?);
    Ok(())
}

/// Fetch `url` as JSON with spinner and error notices.
///
/// `options` takes the `fetch` option names (`method`, `headers`, `body`,
/// `credentials`, `mode`, `cache`, `redirect`, `referrer`, `referrerPolicy`,
/// `integrity`, `keepalive`, `signal`) plus `timeoutMs`. The promise rejects
/// with the error after it has been shown to the user, malformed options
/// included.
#[wasm_bindgen(js_name = fetchAPI)]
#[must_use]
pub fn fetch_api(url: String, options: JsValue) -> Promise {
    future_to_promise(async move {
        let ctx = shared_context()?;
        let signal = abort_signal(&options);
        let options = request_options(options);
        let value: serde_json::Value = ApiClient::new(ctx)
            .fetch_json(&url, options, signal)
            .await
            .map_err(|err| js_error(&err.to_string()))?;
        value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(JsValue::from)
    })
}

/// Wrap `func` so it runs `wait` milliseconds after the last call, with that call's arguments.
#[wasm_bindgen]
#[must_use]
pub fn debounce(func: Function, wait: u32) -> Function {
    let debouncer = Debouncer::new(
        TimeoutScheduler,
        wait,
        yew::Callback::from(move |args: Array| {
            if let Err(err) = func.apply(&JsValue::NULL, &args) {
                console::error!("debounced callback failed", err);
            }
        }),
    );
    let receiver =
        Closure::wrap(Box::new(move |args: Array| debouncer.call(args)) as Box<dyn Fn(Array)>);
    variadic(&receiver.into_js_value())
}

#[wasm_bindgen(inline_js = "export function variadic(receive) { return (...args) => receive(args); }")]
extern "C" {
    /// Wrap `receive` in a function that hands it every argument as one array.
    fn variadic(receive: &JsValue) -> Function;
}

fn page_policy() -> PasswordPolicy {
    shared_context()
        .map(|ctx: UiContext| ctx.config().password.policy())
        .unwrap_or_default()
}

fn request_options(options: JsValue) -> Result<RequestOptions, FetchError> {
    if options.is_undefined() || options.is_null() {
        return Ok(RequestOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|err| FetchError::InvalidOptions(err.to_string()))
}

fn abort_signal(options: &JsValue) -> Option<AbortSignal> {
    if !options.is_object() {
        return None;
    }
    Reflect::get(options, &JsValue::from_str("signal"))
        .ok()
        .and_then(|value| value.dyn_into::<AbortSignal>().ok())
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}
