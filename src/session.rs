//! Seam to the game-engine collaborator.
//!
//! The engine owns all board and lifecycle state (Idle / Running / Paused);
//! the controller only queries it and requests transitions. Move legality,
//! undo availability and win detection are the engine's business entirely.

/// Interface of the active game session as seen by the play-screen controller.
///
/// `Stone` is whatever handle the engine uses to identify a tile on the board;
/// the controller passes it through untouched on tile clicks.
pub trait Session {
    type Stone;

    fn is_idle(&self) -> bool;
    fn is_running(&self) -> bool;
    fn is_paused(&self) -> bool;

    fn pause(&mut self);
    fn resume(&mut self);
    fn reset(&mut self);
    /// Begin a fresh game on the given board layout in the given mode.
    fn start(&mut self, layout: &str, mode: &str);
    fn hint(&mut self);
    /// Undo the last move.
    fn back(&mut self);
    fn click(&mut self, stone: Self::Stone);

    /// Mirror of the settings sound flag into the engine's sound channel.
    fn set_sound_enabled(&mut self, enabled: bool);
}
