// Value of holding n stones of one colour in a single quadrant. Concave, so that
// losing the last stones of a quadrant costs more than trimming a full one.
pub const STONE_VALUES: [i16; 5] = [0, 100, 180, 240, 280];

// Extra penalty keyed by the stone count of a colour's weakest quadrant, which is
// where the game is lost.
pub const WEAKEST_QUADRANT_PENALTY: [i16; 5] = [0, 160, 60, 15, 0];

// Per-cell bonus, indexed by cell (a1 = 0 .. d4 = 15). Stones in the middle of a
// quadrant cannot be pushed off in one move.
#[rustfmt::skip]
pub const CENTRALITY_BONUS: [i16; 16] = [
    0, 3, 3, 0,
    3, 8, 8, 3,
    3, 8, 8, 3,
    0, 3, 3, 0,
];
