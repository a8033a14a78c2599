// Tracker - the dead-zone proportional opponent

use super::Controller;
use crate::game::physics::{BALL_SIZE, PADDLE_HEIGHT};
use crate::game::state::{Ball, Racket};

/// Vertical distance within which the tracker treats the ball as aligned
/// and stays put.
pub const WAIT_TOLERANCE: f32 = PADDLE_HEIGHT / 5.0;

/// A constant-speed tracker with a dead zone.
///
/// Follows the ball's vertical center, but only in sign: the paddle moves
/// at full speed toward the ball or not at all. No prediction and no speed
/// scaling with distance, which keeps it beatable.
pub struct Tracker {
    tolerance: f32,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            tolerance: WAIT_TOLERANCE,
        }
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for Tracker {
    fn steer(&mut self, paddle: &Racket, ball: &Ball) -> f32 {
        let middle_y = paddle.y + PADDLE_HEIGHT / 2.0;
        let ball_middle_y = ball.y + BALL_SIZE / 2.0;
        let diff = middle_y - ball_middle_y;

        if diff.abs() <= self.tolerance {
            0.0
        } else {
            -diff / diff.abs()
        }
    }

    fn reset(&mut self) {
        // Stateless tracker, nothing to clear.
    }

    fn name(&self) -> &str {
        "Tracker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(y: f32) -> Ball {
        Ball {
            x: 300.0,
            y,
            dx: 1.0,
            dy: 0.0,
        }
    }

    #[test]
    fn holds_inside_dead_zone() {
        let mut tracker = Tracker::new();
        let paddle = Racket { y: 210.0, dy: 0.0 };
        // Paddle center 240, ball center 240 +/- 1: well inside tolerance.
        assert_eq!(tracker.steer(&paddle, &ball_at(231.0)), 0.0);
        assert_eq!(tracker.steer(&paddle, &ball_at(229.0)), 0.0);
        assert_eq!(tracker.steer(&paddle, &ball_at(230.0)), 0.0);
    }

    #[test]
    fn holds_exactly_at_tolerance() {
        let mut tracker = Tracker::new();
        let paddle = Racket { y: 210.0, dy: 0.0 };
        // Ball center exactly WAIT_TOLERANCE away: still aligned.
        assert_eq!(tracker.steer(&paddle, &ball_at(230.0 + WAIT_TOLERANCE)), 0.0);
    }

    #[test]
    fn chases_ball_below() {
        let mut tracker = Tracker::new();
        let paddle = Racket { y: 210.0, dy: 0.0 };
        // Ball center 100 below the paddle center: move down.
        assert_eq!(tracker.steer(&paddle, &ball_at(330.0)), 1.0);
    }

    #[test]
    fn chases_ball_above() {
        let mut tracker = Tracker::new();
        let paddle = Racket { y: 210.0, dy: 0.0 };
        assert_eq!(tracker.steer(&paddle, &ball_at(130.0)), -1.0);
    }

    #[test]
    fn direction_is_a_step_function() {
        let mut tracker = Tracker::new();
        let paddle = Racket { y: 210.0, dy: 0.0 };
        // Just past tolerance and far past it give the same magnitude.
        let near = tracker.steer(&paddle, &ball_at(230.0 + WAIT_TOLERANCE + 1.0));
        let far = tracker.steer(&paddle, &ball_at(460.0));
        assert_eq!(near, 1.0);
        assert_eq!(far, 1.0);
    }
}
