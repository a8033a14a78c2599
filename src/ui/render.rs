use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::digits::{self, GLYPH_SIZE, INNER_MARGIN, OUTER_MARGIN, PIECE_SIZE};
use crate::config::DisplayConfig;
use crate::game::physics::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::game::state::PlayState;

// Dotted midline, sized in field pixels like everything else.
const MIDLINE_POINT_WIDTH: f32 = 3.0;
const MIDLINE_POINT_HEIGHT: f32 = 2.0 * MIDLINE_POINT_WIDTH;
const MIDLINE_POINT_MARGIN: f32 = 3.0;
const MIDLINE_PADDING: f32 = 20.0;

/// Scale factors from field pixels to Braille pixels.
#[derive(Clone, Copy)]
struct FieldScale {
    x: f32,
    y: f32,
}

pub fn render(frame: &mut Frame, play: &PlayState, display: &DisplayConfig) {
    let area = frame.area();

    let [r, g, b] = display.bg_color;
    let bg = Block::default().style(Style::default().bg(Color::Rgb(r, g, b)));
    frame.render_widget(bg, area);

    // The whole terminal is one Braille canvas; the 640x480 field maps
    // onto it with independent horizontal and vertical scales.
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let scale = FieldScale {
        x: canvas.pixel_width() as f32 / play.field.width,
        y: canvas.pixel_height() as f32 / play.field.height,
    };

    // Player on the left edge, enemy flush against the right edge.
    fill_field_rect(
        &mut canvas,
        scale,
        0.0,
        play.player.y,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
    );
    fill_field_rect(
        &mut canvas,
        scale,
        play.field.width - PADDLE_WIDTH,
        play.enemy.y,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
    );

    fill_field_rect(
        &mut canvas,
        scale,
        play.ball.x,
        play.ball.y,
        BALL_SIZE,
        BALL_SIZE,
    );

    draw_midline(&mut canvas, scale, play);
    draw_scores(&mut canvas, scale, play);

    let [r, g, b] = display.fg_color;
    render_canvas(frame, &canvas, area, Color::Rgb(r, g, b));
}

/// Fill a rectangle given in field coordinates.
fn fill_field_rect(canvas: &mut BrailleCanvas, scale: FieldScale, x: f32, y: f32, w: f32, h: f32) {
    let px = (x * scale.x) as usize;
    let py = (y * scale.y) as usize;
    let pw = ((w * scale.x) as usize).max(1);
    let ph = ((h * scale.y) as usize).max(1);
    canvas.fill_rect(px, py, pw, ph);
}

fn draw_midline(canvas: &mut BrailleCanvas, scale: FieldScale, play: &PlayState) {
    let step = MIDLINE_POINT_HEIGHT + MIDLINE_POINT_MARGIN;
    let span = play.field.height - 2.0 * MIDLINE_PADDING - MIDLINE_POINT_HEIGHT;
    let npoints = 1 + (span / step) as usize;

    let x = play.field.width / 2.0 - MIDLINE_POINT_WIDTH / 2.0;
    let mut y = MIDLINE_PADDING;
    for _ in 0..npoints {
        fill_field_rect(
            canvas,
            scale,
            x,
            y,
            MIDLINE_POINT_WIDTH,
            MIDLINE_POINT_HEIGHT,
        );
        y += step;
    }
}

/// Draw both scores as block digits anchored to the midline: the player's
/// number ends an outer margin left of it, the enemy's starts an outer
/// margin right of it.
fn draw_scores(canvas: &mut BrailleCanvas, scale: FieldScale, play: &PlayState) {
    let midline_x = play.field.width / 2.0;
    let glyph_width = GLYPH_SIZE as f32 * PIECE_SIZE;

    let player_digits = split_digits(play.score.player);
    let player_width = glyph_width * player_digits.len() as f32
        + INNER_MARGIN * PIECE_SIZE * (player_digits.len() - 1) as f32;
    draw_number(
        canvas,
        scale,
        &player_digits,
        midline_x - OUTER_MARGIN * PIECE_SIZE - player_width,
    );

    let enemy_digits = split_digits(play.score.enemy);
    draw_number(
        canvas,
        scale,
        &enemy_digits,
        midline_x + OUTER_MARGIN * PIECE_SIZE,
    );
}

/// A score's digits in reading order. Every element is a single glyph-table
/// index, whatever the end score is configured to.
fn split_digits(score: u32) -> Vec<u32> {
    let mut digits = vec![score % 10];
    let mut rest = score / 10;
    while rest > 0 {
        digits.push(rest % 10);
        rest /= 10;
    }
    digits.reverse();
    digits
}

fn draw_number(canvas: &mut BrailleCanvas, scale: FieldScale, digits: &[u32], start_x: f32) {
    let mut x = start_x;
    for &digit in digits {
        draw_digit(canvas, scale, digit, x);
        x += (GLYPH_SIZE as f32 + INNER_MARGIN) * PIECE_SIZE;
    }
}

fn draw_digit(canvas: &mut BrailleCanvas, scale: FieldScale, digit: u32, x: f32) {
    let y = OUTER_MARGIN * PIECE_SIZE;
    for row in 0..GLYPH_SIZE {
        for col in 0..GLYPH_SIZE {
            if digits::segment_on(digit, row, col) {
                fill_field_rect(
                    canvas,
                    scale,
                    x + col as f32 * PIECE_SIZE,
                    y + row as f32 * PIECE_SIZE,
                    PIECE_SIZE,
                    PIECE_SIZE,
                );
            }
        }
    }
}

fn render_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect, fg: Color) {
    for y in 0..canvas.pixel_height() / 4 {
        let mut line_text = String::new();
        for x in 0..canvas.pixel_width() / 2 {
            line_text.push(canvas.to_char(x, y));
        }

        let paragraph = Paragraph::new(line_text).style(Style::default().fg(fg));

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(paragraph, row_area);
    }
}
