//! Mah Tiles play-screen controller crate.
//!
//! Interaction layer for the single-screen Mahjong solitaire board: routes
//! keyboard input, arbitrates the overlay panels (help, new game, tile info,
//! settings), drives the game lifecycle through the engine collaborator and
//! normalizes vendor-prefixed fullscreen APIs. The engine itself (board
//! layout, move validation, win detection) stays on the JS side behind the
//! [`session::Session`] trait.
//!
//! Core dispatch and overlay logic is pure Rust (native `cargo test`
//! friendly); everything browser-shaped lives in [`web`] and [`fullscreen`].

use wasm_bindgen::prelude::*;

pub mod controller;
pub mod fullscreen;
pub mod locale;
pub mod session;
pub mod settings;
pub mod web;

pub use controller::{Key, Overlay, PlayController};
pub use locale::{resolve_lang, Translator, SUPPORTED_LANGS};
pub use session::Session;
pub use settings::{Settings, SettingsStore};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
