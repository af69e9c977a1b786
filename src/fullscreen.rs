//! Cross-vendor fullscreen handling.
//!
//! Browsers shipped the Fullscreen API behind vendor prefixes for years, so
//! the document may expose the standard methods, the WebKit ones or the old
//! Mozilla ones. One provider is picked at startup by probing the document;
//! fullscreen state itself is never cached and always re-read live, so a
//! stale async completion can't leave us out of sync.
//!
//! Enter/exit requests are fire-and-forget: a rejected promise is logged to
//! the console and otherwise dropped. Nothing here is fatal.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

/// Which flavor of the Fullscreen API this browser speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenApi {
    Standard,
    Webkit,
    Moz,
    Unsupported,
}

/// Legacy boolean flags some engines still set on the document.
const LEGACY_FLAGS: &[&str] = &[
    "fullScreen",
    "fullscreen",
    "mozFullScreen",
    "webkitIsFullScreen",
];

impl FullscreenApi {
    /// Probe the document once and pick a provider.
    pub fn detect() -> Self {
        let Some(doc) = document() else {
            return FullscreenApi::Unsupported;
        };
        let doc: JsValue = doc.into();
        if method(&doc, "exitFullscreen").is_some() {
            FullscreenApi::Standard
        } else if method(&doc, "webkitExitFullscreen").is_some() {
            FullscreenApi::Webkit
        } else if method(&doc, "mozCancelFullScreen").is_some() {
            FullscreenApi::Moz
        } else {
            FullscreenApi::Unsupported
        }
    }

    /// Live query of the current fullscreen state, standard element check
    /// plus the legacy flags.
    pub fn is_fullscreen(&self) -> bool {
        let Some(doc) = document() else {
            return false;
        };
        if doc.fullscreen_element().is_some() {
            return true;
        }
        let doc: JsValue = doc.into();
        LEGACY_FLAGS.iter().any(|flag| {
            Reflect::get(&doc, &JsValue::from_str(flag))
                .map(|v| v.is_truthy())
                .unwrap_or(false)
        })
    }

    /// Exit when fullscreen, enter (on the document body) otherwise.
    pub fn toggle(&self) {
        if self.is_fullscreen() {
            self.exit();
        } else {
            self.enter();
        }
    }

    fn enter(&self) {
        let name = match self {
            FullscreenApi::Standard => "requestFullscreen",
            FullscreenApi::Webkit => "webkitRequestFullScreen",
            FullscreenApi::Moz => "mozRequestFullScreen",
            FullscreenApi::Unsupported => return,
        };
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        call_logged(&body.into(), name);
    }

    fn exit(&self) {
        let name = match self {
            FullscreenApi::Standard => "exitFullscreen",
            FullscreenApi::Webkit => "webkitExitFullscreen",
            FullscreenApi::Moz => "mozCancelFullScreen",
            FullscreenApi::Unsupported => return,
        };
        let Some(doc) = document() else {
            return;
        };
        call_logged(&doc.into(), name);
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Call a zero-argument DOM method; a synchronous throw or an eventual
/// promise rejection is logged and swallowed.
fn call_logged(target: &JsValue, name: &str) {
    let Some(f) = method(target, name) else {
        return;
    };
    match f.call0(target) {
        Ok(ret) => {
            // Modern engines return a promise; attach a log-only rejection
            // handler and let it run to completion on its own.
            if let Some(promise) = ret.dyn_ref::<Promise>() {
                let on_reject = Closure::<dyn FnMut(JsValue)>::wrap(Box::new(|err: JsValue| {
                    console::error_1(&err);
                }));
                let _ = promise.catch(&on_reject);
                on_reject.forget();
            }
        }
        Err(err) => console::error_1(&err),
    }
}
