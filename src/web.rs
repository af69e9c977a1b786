//! DOM wiring and the JS-facing surface.
//!
//! The engine and the translation service are JS objects handed to
//! [`start_play_screen`]; they are called through `Reflect`, so a missing
//! method degrades to a no-op instead of throwing across the boundary. The
//! controller lives in a thread local for the lifetime of the page, mirroring
//! how the rest of the app keeps its per-page state.

use std::cell::{Cell, RefCell};

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::controller::{Key, PlayController};
use crate::fullscreen::FullscreenApi;
use crate::locale::Translator;
use crate::session::Session;
use crate::settings::LocalStore;

/// Game-engine collaborator living on the JS side.
pub struct JsSession {
    obj: JsValue,
}

impl JsSession {
    pub fn new(obj: JsValue) -> Self {
        JsSession { obj }
    }

    fn call0(&self, name: &str) -> Option<JsValue> {
        let f = Reflect::get(&self.obj, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        f.call0(&self.obj).ok()
    }

    fn call1(&self, name: &str, arg: &JsValue) -> Option<JsValue> {
        let f = Reflect::get(&self.obj, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        f.call1(&self.obj, arg).ok()
    }

    fn query(&self, name: &str) -> bool {
        self.call0(name).map(|v| v.is_truthy()).unwrap_or(false)
    }
}

impl Session for JsSession {
    type Stone = JsValue;

    fn is_idle(&self) -> bool {
        self.query("isIdle")
    }

    fn is_running(&self) -> bool {
        self.query("isRunning")
    }

    fn is_paused(&self) -> bool {
        self.query("isPaused")
    }

    fn pause(&mut self) {
        self.call0("pause");
    }

    fn resume(&mut self) {
        self.call0("resume");
    }

    fn reset(&mut self) {
        self.call0("reset");
    }

    fn start(&mut self, layout: &str, mode: &str) {
        if let Ok(f) =
            Reflect::get(&self.obj, &JsValue::from_str("start")).and_then(|v| v.dyn_into::<Function>())
        {
            let _ = f.call2(
                &self.obj,
                &JsValue::from_str(layout),
                &JsValue::from_str(mode),
            );
        }
    }

    fn hint(&mut self) {
        self.call0("hint");
    }

    fn back(&mut self) {
        self.call0("back");
    }

    fn click(&mut self, stone: JsValue) {
        self.call1("click", &stone);
    }

    fn set_sound_enabled(&mut self, enabled: bool) {
        if let Ok(sound) = Reflect::get(&self.obj, &JsValue::from_str("sound")) {
            let _ = Reflect::set(
                &sound,
                &JsValue::from_str("enabled"),
                &JsValue::from_bool(enabled),
            );
        }
    }
}

/// Translation collaborator; exposes a single `use(langCode)` method.
pub struct JsTranslator {
    obj: JsValue,
}

impl JsTranslator {
    pub fn new(obj: JsValue) -> Self {
        JsTranslator { obj }
    }
}

impl Translator for JsTranslator {
    fn use_lang(&mut self, code: &str) {
        if let Ok(f) =
            Reflect::get(&self.obj, &JsValue::from_str("use")).and_then(|v| v.dyn_into::<Function>())
        {
            let _ = f.call1(&self.obj, &JsValue::from_str(code));
        }
    }
}

type Controller = PlayController<JsSession, JsTranslator, LocalStore>;

thread_local! {
    static CONTROLLER: RefCell<Option<Controller>> = RefCell::new(None);
    static FULLSCREEN: Cell<FullscreenApi> = Cell::new(FullscreenApi::Unsupported);
}

fn with_controller<R>(f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
    CONTROLLER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Wire the play screen: build the controller around the JS collaborators,
/// pick a fullscreen provider and start listening for key presses.
#[wasm_bindgen]
pub fn start_play_screen(game: JsValue, translator: JsValue) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let settings = LocalStore::load();
    let client_locale = win.navigator().language();
    let controller = Controller::new(
        JsSession::new(game),
        JsTranslator::new(translator),
        LocalStore,
        settings,
        client_locale,
    );
    CONTROLLER.with(|cell| cell.replace(Some(controller)));
    FULLSCREEN.with(|cell| cell.set(FullscreenApi::detect()));

    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
        let Some(key) = Key::from_event_key(&e.key()) else {
            return;
        };
        if e.key() == " " {
            // keep space from scrolling the page
            e.prevent_default();
        }
        with_controller(|c| c.handle_key(key));
    }));
    doc.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();
    Ok(())
}

// --- View bindings -----------------------------------------------------------

#[wasm_bindgen]
pub fn help_visible() -> bool {
    with_controller(|c| c.help_visible()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn new_game_visible() -> bool {
    with_controller(|c| c.new_game_visible()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn tiles_info_visible() -> bool {
    with_controller(|c| c.tiles_info_visible()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn settings_visible() -> bool {
    with_controller(|c| c.settings_visible()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn toggle_help() {
    with_controller(|c| c.toggle_help());
}

#[wasm_bindgen]
pub fn toggle_tiles_info() {
    with_controller(|c| c.toggle_tiles_info());
}

#[wasm_bindgen]
pub fn toggle_settings() {
    with_controller(|c| c.toggle_settings());
}

#[wasm_bindgen]
pub fn toggle_new_game() {
    with_controller(|c| c.toggle_new_game());
}

#[wasm_bindgen]
pub fn new_game() {
    with_controller(|c| c.new_game());
}

#[wasm_bindgen]
pub fn start_game(layout: &str, mode: &str) {
    with_controller(|c| c.start_game(layout, mode));
}

#[wasm_bindgen]
pub fn click_message() {
    with_controller(|c| c.click_message());
}

#[wasm_bindgen]
pub fn stone_click(stone: JsValue) {
    with_controller(|c| c.stone_click(stone));
}

#[wasm_bindgen]
pub fn toggle_sound() {
    with_controller(|c| c.toggle_sound());
}

#[wasm_bindgen]
pub fn sound_enabled() -> bool {
    with_controller(|c| c.settings().sounds).unwrap_or(true)
}

/// Language setting as shown in the settings panel (`"auto"`, `"de"`, `"en"`).
#[wasm_bindgen]
pub fn language() -> String {
    with_controller(|c| c.settings().lang.clone()).unwrap_or_else(|| "auto".to_string())
}

/// Settings-panel language picker; takes effect when the panel closes.
#[wasm_bindgen]
pub fn set_language(lang: &str) {
    with_controller(|c| c.settings_mut().lang = lang.to_string());
}

#[wasm_bindgen]
pub fn toggle_fullscreen() {
    FULLSCREEN.with(|cell| cell.get().toggle());
}

#[wasm_bindgen]
pub fn is_fullscreen() -> bool {
    FULLSCREEN.with(|cell| cell.get().is_fullscreen())
}
