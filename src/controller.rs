//! Play-screen controller: key dispatch, overlay panels and game lifecycle.
//!
//! The controller arbitrates between four mutually-exclusive overlay panels
//! (help, new-game, tile info, settings) and routes every key press either to
//! the open overlay's dismiss handling or to the command table. Lifecycle
//! state (Idle / Running / Paused) lives in the engine behind [`Session`];
//! the controller only reads it and requests transitions.
//!
//! Everything here is pure Rust with no browser dependency, so it runs under
//! `cargo test` on the host. The DOM wiring lives in `web`.

use crate::locale::{apply_lang, resolve_lang, Translator};
use crate::session::Session;
use crate::settings::{Settings, SettingsStore};

/// The overlay panels. At most one is visible at a time; the controller
/// stores `Option<Overlay>`, so two panels at once is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    Help,
    NewGame,
    TilesInfo,
    Settings,
}

/// Semantic key commands, parsed from `KeyboardEvent.key` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Dismisses whichever overlay is open.
    Escape,
    /// `h` — help panel.
    Help,
    /// `i` — tile info panel.
    TilesInfo,
    /// `s` — settings panel.
    Settings,
    /// `t` — ask the engine for a hint.
    Hint,
    /// `u` — undo the last move.
    Undo,
    /// `n` — pause and open the new-game panel.
    NewGame,
    /// Space or `p` — pause when running, resume when paused.
    PauseResume,
}

impl Key {
    /// Map a raw `KeyboardEvent.key` string to a command. Unmapped keys are
    /// `None` and ignored by the dispatcher.
    pub fn from_event_key(key: &str) -> Option<Key> {
        match key {
            "Escape" => Some(Key::Escape),
            "h" | "H" => Some(Key::Help),
            "i" | "I" => Some(Key::TilesInfo),
            "s" | "S" => Some(Key::Settings),
            "t" | "T" => Some(Key::Hint),
            "u" | "U" => Some(Key::Undo),
            "n" | "N" => Some(Key::NewGame),
            " " | "p" | "P" => Some(Key::PauseResume),
            _ => None,
        }
    }
}

/// Interaction controller for the play surface.
pub struct PlayController<S, T, P>
where
    S: Session,
    T: Translator,
    P: SettingsStore,
{
    session: S,
    translator: T,
    store: P,
    settings: Settings,
    overlay: Option<Overlay>,
    /// Snapshot of the client locale (`navigator.language`), consulted
    /// whenever the language setting resolves to `auto`.
    client_locale: Option<String>,
}

impl<S, T, P> PlayController<S, T, P>
where
    S: Session,
    T: Translator,
    P: SettingsStore,
{
    /// Build the controller and apply the display language. A session that is
    /// still idle gets the new-game panel forced open so the player lands on
    /// the layout picker.
    pub fn new(
        session: S,
        translator: T,
        store: P,
        settings: Settings,
        client_locale: Option<String>,
    ) -> Self {
        let overlay = if session.is_idle() {
            Some(Overlay::NewGame)
        } else {
            None
        };
        let mut controller = PlayController {
            session,
            translator,
            store,
            settings,
            overlay,
            client_locale,
        };
        controller.set_lang();
        controller
    }

    // --- Input dispatch -----------------------------------------------------

    /// Route one key press. An open overlay owns the keyboard: only `Escape`
    /// does anything, and it dismisses that overlay. Only with no overlay
    /// open does the command table apply.
    pub fn handle_key(&mut self, key: Key) {
        match self.overlay {
            Some(Overlay::Help) => {
                if key == Key::Escape {
                    self.toggle_help();
                }
            }
            Some(Overlay::NewGame) => {
                // Direct flip: dismissal works even while the session is
                // idle, unlike toggle_new_game.
                if key == Key::Escape {
                    self.overlay = None;
                }
            }
            Some(Overlay::TilesInfo) => {
                if key == Key::Escape {
                    self.toggle_tiles_info();
                }
            }
            Some(Overlay::Settings) => {
                if key == Key::Escape {
                    self.toggle_settings();
                }
            }
            None => match key {
                Key::Help => self.toggle_help(),
                Key::TilesInfo => self.toggle_tiles_info(),
                Key::Settings => self.toggle_settings(),
                Key::Hint => self.session.hint(),
                Key::Undo => self.session.back(),
                Key::NewGame => self.new_game(),
                Key::PauseResume => {
                    if self.session.is_running() {
                        self.session.pause();
                    } else if self.session.is_paused() {
                        self.session.resume();
                    }
                }
                Key::Escape => {}
            },
        }
    }

    // --- Overlay transitions ------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.flip(Overlay::Help);
    }

    pub fn toggle_tiles_info(&mut self) {
        self.flip(Overlay::TilesInfo);
    }

    /// No-op while the session is idle: a fresh idle session keeps the
    /// new-game panel forced open.
    pub fn toggle_new_game(&mut self) {
        if !self.session.is_idle() {
            self.flip(Overlay::NewGame);
        }
    }

    /// Closing the settings panel commits it: persist the record, hand the
    /// sound flag to the engine, then re-resolve and apply the language.
    pub fn toggle_settings(&mut self) {
        let was_open = self.overlay == Some(Overlay::Settings);
        self.flip(Overlay::Settings);
        if was_open {
            self.store.save(&self.settings);
            self.session.set_sound_enabled(self.settings.sounds);
            self.set_lang();
        }
    }

    /// Explicit new-game request while a game may be underway: pause it and
    /// force the new-game panel open.
    pub fn new_game(&mut self) {
        self.session.pause();
        self.overlay = Some(Overlay::NewGame);
    }

    /// Leave the new-game panel and launch a fresh session on the chosen
    /// layout. The only path through which this controller changes the
    /// lifecycle to Running.
    pub fn start_game(&mut self, layout: &str, mode: &str) {
        self.overlay = None;
        self.session.reset();
        self.session.start(layout, mode);
    }

    /// Click on the idle/paused message surface: resume a paused game,
    /// otherwise scrap the session and reopen the layout picker.
    pub fn click_message(&mut self) {
        if self.session.is_paused() {
            self.session.resume();
        } else {
            self.session.reset();
            self.overlay = Some(Overlay::NewGame);
        }
    }

    pub fn stone_click(&mut self, stone: S::Stone) {
        self.session.click(stone);
    }

    /// Flip the sound setting, mirror it into the engine and persist.
    pub fn toggle_sound(&mut self) {
        self.settings.sounds = !self.settings.sounds;
        self.session.set_sound_enabled(self.settings.sounds);
        self.store.save(&self.settings);
    }

    fn flip(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == Some(overlay) {
            None
        } else {
            Some(overlay)
        };
    }

    fn set_lang(&mut self) {
        let lang = resolve_lang(&self.settings.lang, self.client_locale.as_deref());
        apply_lang(&mut self.translator, &lang);
    }

    // --- View bindings ------------------------------------------------------

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn help_visible(&self) -> bool {
        self.overlay == Some(Overlay::Help)
    }

    pub fn new_game_visible(&self) -> bool {
        self.overlay == Some(Overlay::NewGame)
    }

    pub fn tiles_info_visible(&self) -> bool {
        self.overlay == Some(Overlay::TilesInfo)
    }

    pub fn settings_visible(&self) -> bool {
        self.overlay == Some(Overlay::Settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}
