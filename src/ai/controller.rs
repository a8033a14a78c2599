// Controller trait for scripted opponents

use crate::game::state::{Ball, Racket};

/// Trait for opponent paddle controllers.
///
/// A controller is re-evaluated once per tick and returns the paddle's
/// direction flag for that frame: -1.0 (up), 0.0 (hold) or 1.0 (down).
pub trait Controller {
    /// Pick a direction for this frame given the paddle and ball.
    fn steer(&mut self, paddle: &Racket, ball: &Ball) -> f32;

    /// Reset internal state (called when a new round starts).
    fn reset(&mut self);

    /// Controller name for diagnostics.
    fn name(&self) -> &str;
}
