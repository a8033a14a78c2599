use rand::Rng;

use crate::ai::Controller;
use crate::config::PhysicsConfig;
use crate::game::physics::{self, PhysicsEvents, BALL_SIZE, PADDLE_HEIGHT};

/// Play-field size in virtual pixels, captured once at state construction.
/// The field is fixed for the session, so a plain copy is enough.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct Racket {
    pub y: f32,
    /// Direction flag, -1.0, 0.0 or 1.0. Speed lives in the integrator.
    pub dy: f32,
}

impl Racket {
    pub fn centered(field: Dimension) -> Self {
        Self {
            y: field.height / 2.0 - PADDLE_HEIGHT / 2.0,
            dy: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Ball {
    /// Set the velocity from a serve angle. The horizontal sign reverses
    /// whatever direction the ball had before, so serves alternate sides.
    pub fn launch(&mut self, angle: f32) {
        self.dy = angle.sin();
        self.dx = physics::serve_direction(self.dx) * angle.cos();
    }

    /// Recenter the ball and serve it at a fresh random angle.
    pub fn serve(&mut self, field: Dimension) {
        self.x = field.width / 2.0 - BALL_SIZE / 2.0;
        self.y = field.height / 2.0 - BALL_SIZE / 2.0;
        let angle =
            rand::thread_rng().gen_range(-physics::MAX_BOUNCE_ANGLE..=physics::MAX_BOUNCE_ANGLE);
        self.launch(angle);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Score {
    pub player: u32,
    pub enemy: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

/// All gameplay state, mutated exactly once per frame by `tick`.
#[derive(Debug, Clone)]
pub struct PlayState {
    pub player: Racket,
    pub enemy: Racket,
    pub ball: Ball,
    pub score: Score,
    pub last_update_ms: u64,
    pub field: Dimension,
    pub end_score: u32,
}

impl PlayState {
    pub fn new(field: Dimension, physics: &PhysicsConfig, now_ms: u64) -> Self {
        let mut ball = Ball {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
        };
        // First serve: direction arbitrary within the legal angle range,
        // since the pre-serve dx is zero.
        ball.serve(field);

        Self {
            player: Racket::centered(field),
            enemy: Racket::centered(field),
            ball,
            score: Score::default(),
            last_update_ms: now_ms,
            field,
            end_score: physics.end_score,
        }
    }

    /// Advance the simulation to `now_ms`. Order matters: collisions are
    /// resolved against the prospective position first, then the opponent
    /// picks a direction, then everything integrates over the same delta.
    pub fn tick(&mut self, now_ms: u64, opponent: &mut dyn Controller) -> PhysicsEvents {
        let delta_ms = now_ms.saturating_sub(self.last_update_ms);
        let events = physics::run_collisions(self, delta_ms);
        self.enemy.dy = opponent.steer(&self.enemy, &self.ball);
        physics::apply_movement(self, delta_ms);
        self.last_update_ms = now_ms;
        events
    }

    /// First side to reach the end score wins the round.
    pub fn round_winner(&self) -> Option<Side> {
        if self.score.player >= self.end_score {
            Some(Side::Player)
        } else if self.score.enemy >= self.end_score {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    /// Full reset: recenter both paddles, zero the score, re-serve.
    pub fn reset_round(&mut self, now_ms: u64) {
        self.player = Racket::centered(self.field);
        self.enemy = Racket::centered(self.field);
        self.score = Score::default();
        self.ball.dx = 0.0;
        self.ball.dy = 0.0;
        self.ball.serve(self.field);
        self.last_update_ms = now_ms;
    }
}
