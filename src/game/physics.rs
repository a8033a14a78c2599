use super::state::{Ball, Dimension, PlayState, Racket, Side};

// All dimensions in virtual pixels on the 640x480 field.
pub const PADDLE_WIDTH: f32 = 20.0;
pub const PADDLE_HEIGHT: f32 = PADDLE_WIDTH * 3.0;
pub const BALL_SIZE: f32 = 20.0;

/// Paddle speed in pixels per second; ball runs 10% faster.
pub const PADDLE_SPEED: f32 = 550.0;
pub const BALL_SPEED: f32 = 11.0 * PADDLE_SPEED / 10.0;

const PADDLE_MS_SPEED: f32 = PADDLE_SPEED / 1000.0;
const BALL_MS_SPEED: f32 = BALL_SPEED / 1000.0;

/// Steepest angle the ball can leave a paddle (or a serve) at, in radians.
pub const MAX_BOUNCE_ANGLE: f32 = 85.0 * std::f32::consts::PI / 180.0;

/// Largest center-to-center distance at which the ball still overlaps a paddle.
pub const MAX_HIT_DISTANCE: f32 = PADDLE_HEIGHT / 2.0 + BALL_SIZE / 2.0;

/// What happened during collision resolution this tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhysicsEvents {
    pub wall_bounce: bool,
    pub paddle_hit: bool,
    pub point_scored: Option<Side>,
}

/// Bounce angle from the paddle/ball center offset. Zero offset sends the
/// ball straight back; the ratio caps at 1 whenever an overlap actually
/// occurred, so the result stays within ±MAX_BOUNCE_ANGLE.
pub fn bounce_angle(mid_distance: f32) -> f32 {
    MAX_BOUNCE_ANGLE * (mid_distance / MAX_HIT_DISTANCE)
}

/// Horizontal sign for the next serve: opposite of the ball's prior travel.
/// A zeroed prior dx (first serve) counts as non-negative and serves left.
pub fn serve_direction(prior_dx: f32) -> f32 {
    if prior_dx < 0.0 {
        1.0
    } else {
        -1.0
    }
}

fn clamp0(x: f32, max: f32) -> f32 {
    if x > max {
        max
    } else if x < 0.0 {
        0.0
    } else {
        x
    }
}

fn move_racket(racket: &mut Racket, delta_ms: u64, max_y: f32) {
    racket.y += delta_ms as f32 * PADDLE_MS_SPEED * racket.dy;
    racket.y = clamp0(racket.y, max_y);
}

fn move_ball(ball: &mut Ball, field: Dimension, delta_ms: u64) {
    ball.x += ball.dx * delta_ms as f32 * BALL_MS_SPEED;
    ball.y += ball.dy * delta_ms as f32 * BALL_MS_SPEED;
    ball.x = clamp0(ball.x, field.width);
    ball.y = clamp0(ball.y, field.height - BALL_SIZE);
}

/// Integrate both paddles and the ball over the same delta. Clamping is the
/// only backstop for large deltas; no sub-stepping is performed.
pub fn apply_movement(play: &mut PlayState, delta_ms: u64) {
    let max_y = play.field.height - PADDLE_HEIGHT;
    move_racket(&mut play.player, delta_ms, max_y);
    move_racket(&mut play.enemy, delta_ms, max_y);
    move_ball(&mut play.ball, play.field, delta_ms);
}

/// Strict open-interval overlap of the ball's top or bottom edge against
/// the paddle's vertical span.
fn racket_blocks(ball: &Ball, racket: &Racket) -> bool {
    let by0 = ball.y;
    let by1 = ball.y + BALL_SIZE;
    let ry0 = racket.y;
    let ry1 = racket.y + PADDLE_HEIGHT;

    (ry0 < by0 && by0 < ry1) || (ry0 < by1 && by1 < ry1)
}

/// Send the ball back off a paddle. The exit angle grows with the contact
/// offset; dy is negated because y increases downward.
fn rebound(ball: &mut Ball, racket: &Racket) {
    let mid_ball = ball.y + BALL_SIZE / 2.0;
    let mid_racket = racket.y + PADDLE_HEIGHT / 2.0;
    let angle = bounce_angle(mid_racket - mid_ball);

    ball.dy = -angle.sin();
    ball.dx = if ball.dx < 0.0 {
        angle.cos()
    } else {
        -angle.cos()
    };
}

/// Resolve collisions against the ball's prospective position, without
/// moving anything. Wall contact flips the vertical sign; reaching either
/// edge is a paddle rebound or a point for the other side, which re-serves
/// the ball. No bounce math happens on a miss.
pub fn run_collisions(play: &mut PlayState, delta_ms: u64) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();

    let xp = play.ball.x + play.ball.dx * delta_ms as f32 * BALL_MS_SPEED;
    let yp = play.ball.y + play.ball.dy * delta_ms as f32 * BALL_MS_SPEED;

    if yp > play.field.height - BALL_SIZE || yp < 0.0 {
        play.ball.dy = -play.ball.dy;
        events.wall_bounce = true;
    }

    if xp < PADDLE_WIDTH {
        if racket_blocks(&play.ball, &play.player) {
            rebound(&mut play.ball, &play.player);
            events.paddle_hit = true;
        } else {
            play.score.enemy += 1;
            play.ball.serve(play.field);
            events.point_scored = Some(Side::Enemy);
        }
    } else if xp > play.field.width - PADDLE_WIDTH - BALL_SIZE {
        if racket_blocks(&play.ball, &play.enemy) {
            rebound(&mut play.ball, &play.enemy);
            events.paddle_hit = true;
        } else {
            play.score.player += 1;
            play.ball.serve(play.field);
            events.point_scored = Some(Side::Player);
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;

    const FIELD: Dimension = Dimension {
        width: 640.0,
        height: 480.0,
    };

    fn state_with_ball(x: f32, y: f32, dx: f32, dy: f32) -> PlayState {
        let mut state = PlayState::new(FIELD, &PhysicsConfig::default(), 0);
        state.ball = Ball { x, y, dx, dy };
        state
    }

    #[test]
    fn racket_stays_in_bounds_for_any_delta() {
        let max_y = FIELD.height - PADDLE_HEIGHT;
        for delta_ms in [0u64, 1, 16, 100, 10_000] {
            for dy in [-1.0f32, 0.0, 1.0] {
                let mut racket = Racket { y: 200.0, dy };
                move_racket(&mut racket, delta_ms, max_y);
                assert!(racket.y >= 0.0, "delta {} dy {}", delta_ms, dy);
                assert!(racket.y <= max_y, "delta {} dy {}", delta_ms, dy);
            }
        }
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut racket = Racket { y: 123.0, dy: 1.0 };
        move_racket(&mut racket, 0, FIELD.height - PADDLE_HEIGHT);
        assert_eq!(racket.y, 123.0);

        let mut ball = Ball {
            x: 50.0,
            y: 60.0,
            dx: 0.6,
            dy: -0.8,
        };
        move_ball(&mut ball, FIELD, 0);
        assert_eq!(ball.x, 50.0);
        assert_eq!(ball.y, 60.0);
    }

    #[test]
    fn ball_clamps_after_large_delta() {
        let mut ball = Ball {
            x: 300.0,
            y: 200.0,
            dx: 1.0,
            dy: 1.0,
        };
        // A pause-sized delta overshoots wildly; clamping is the backstop.
        move_ball(&mut ball, FIELD, 60_000);
        assert_eq!(ball.x, FIELD.width);
        assert_eq!(ball.y, FIELD.height - BALL_SIZE);

        ball.dx = -1.0;
        ball.dy = -1.0;
        move_ball(&mut ball, FIELD, 60_000);
        assert_eq!(ball.x, 0.0);
        assert_eq!(ball.y, 0.0);
    }

    #[test]
    fn wall_bounce_flips_vertical_sign_only() {
        let mut state = state_with_ball(300.0, 5.0, 0.6, -0.8);
        let events = run_collisions(&mut state, 16);
        assert!(events.wall_bounce);
        assert_eq!(state.ball.dy, 0.8);
        assert_eq!(state.ball.dx, 0.6);

        let mut state = state_with_ball(300.0, 455.0, 0.6, 0.8);
        let events = run_collisions(&mut state, 16);
        assert!(events.wall_bounce);
        assert_eq!(state.ball.dy, -0.8);
    }

    #[test]
    fn bounce_angle_is_monotonic_in_offset() {
        let mut last = -1.0;
        for step in 0..=10 {
            let offset = MAX_HIT_DISTANCE * step as f32 / 10.0;
            let angle = bounce_angle(offset);
            assert!(angle > last);
            assert!(angle <= MAX_BOUNCE_ANGLE + 1e-6);
            last = angle;
        }
        assert_eq!(bounce_angle(0.0), 0.0);
        assert!((bounce_angle(MAX_HIT_DISTANCE) - MAX_BOUNCE_ANGLE).abs() < 1e-6);
        assert!((bounce_angle(-MAX_HIT_DISTANCE) + MAX_BOUNCE_ANGLE).abs() < 1e-6);
    }

    #[test]
    fn centered_hit_goes_straight_back() {
        // Ball dead-center on the player paddle: angle 0, pure horizontal.
        let mut state = state_with_ball(5.0, 230.0, -1.0, 0.0);
        state.player.y = 210.0;

        let events = run_collisions(&mut state, 16);

        assert!(events.paddle_hit);
        assert!(events.point_scored.is_none());
        assert_eq!(state.ball.dx, 1.0);
        assert!(state.ball.dy.abs() < 1e-6);
        assert_eq!(state.score.enemy, 0);
    }

    #[test]
    fn rebound_keeps_unit_velocity() {
        let mut state = state_with_ball(5.0, 215.0, -1.0, 0.0);
        state.player.y = 210.0;

        run_collisions(&mut state, 16);

        let norm = state.ball.dx * state.ball.dx + state.ball.dy * state.ball.dy;
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn paddle_center_below_ball_sends_it_upward() {
        // Positive mid-distance (paddle center below ball center) gives a
        // positive angle; with the inverted y convention dy < 0 means the
        // ball rises on screen.
        let mut state = state_with_ball(5.0, 212.0, -1.0, 0.0);
        state.player.y = 210.0;

        run_collisions(&mut state, 16);

        assert!(state.ball.dy < 0.0);
        assert!(state.ball.dx > 0.0);
    }

    #[test]
    fn left_miss_scores_for_enemy_and_reserves() {
        let mut state = state_with_ball(5.0, 400.0, -1.0, 0.0);
        state.player.y = 210.0;

        let events = run_collisions(&mut state, 16);

        assert_eq!(events.point_scored, Some(Side::Enemy));
        assert!(!events.paddle_hit);
        assert_eq!(state.score.enemy, 1);
        assert_eq!(state.score.player, 0);
        assert_eq!(state.ball.x, 310.0);
        assert_eq!(state.ball.y, 230.0);
        let norm = state.ball.dx * state.ball.dx + state.ball.dy * state.ball.dy;
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn right_miss_scores_for_player() {
        let mut state = state_with_ball(635.0, 30.0, 1.0, 0.0);
        state.enemy.y = 400.0;

        let events = run_collisions(&mut state, 16);

        assert_eq!(events.point_scored, Some(Side::Player));
        assert_eq!(state.score.player, 1);
        assert_eq!(state.score.enemy, 0);
    }

    #[test]
    fn midfield_ball_triggers_nothing() {
        let mut state = state_with_ball(320.0, 240.0, 0.6, 0.4);
        let events = run_collisions(&mut state, 16);
        assert!(!events.wall_bounce);
        assert!(!events.paddle_hit);
        assert!(events.point_scored.is_none());
    }

    #[test]
    fn serve_direction_opposes_prior_travel() {
        assert_eq!(serve_direction(-0.5), 1.0);
        assert_eq!(serve_direction(0.5), -1.0);
        // First serve: dx was zeroed, sign comparison is degenerate.
        assert_eq!(serve_direction(0.0), -1.0);
    }
}
