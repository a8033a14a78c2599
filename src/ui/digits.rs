// Block digit glyphs for the score display

/// Glyphs are 5×5 grids of filled squares, one bitmask row per line with
/// bit 4 as the leftmost column. Pure lookup data.
pub const GLYPH_SIZE: usize = 5;

/// Square size of one glyph piece, in field pixels.
pub const PIECE_SIZE: f32 = 7.0;

/// Margins around and between digits, in piece units.
pub const OUTER_MARGIN: f32 = 2.0;
pub const INNER_MARGIN: f32 = 1.0;

#[rustfmt::skip]
const GLYPHS: [[u8; GLYPH_SIZE]; 10] = [
    [0x0E, 0x11, 0x11, 0x11, 0x0E], // 0
    [0x02, 0x02, 0x02, 0x02, 0x02], // 1
    [0x1E, 0x02, 0x1E, 0x10, 0x1E], // 2
    [0x1E, 0x02, 0x0E, 0x02, 0x1E], // 3
    [0x12, 0x12, 0x1E, 0x02, 0x02], // 4
    [0x1E, 0x10, 0x1E, 0x02, 0x1E], // 5
    [0x1E, 0x10, 0x1E, 0x12, 0x1E], // 6
    [0x1E, 0x02, 0x02, 0x02, 0x02], // 7
    [0x1E, 0x12, 0x1E, 0x12, 0x1E], // 8
    [0x1E, 0x12, 0x1E, 0x02, 0x02], // 9
];

/// Whether the glyph square at (row, col) is filled for the given digit.
pub fn segment_on(digit: u32, row: usize, col: usize) -> bool {
    GLYPHS[digit as usize][row] & (1 << (GLYPH_SIZE - 1 - col)) != 0
}
