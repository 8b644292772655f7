//! Fixed topology of the four quadrants.
//!
//! ```text
//!   [2][3]   White's home quadrants (top)
//!   [0][1]   Black's home quadrants (bottom)
//!  light dark
//! ```
//!
//! A passive sub-move is played on one of the mover's home quadrants, the
//! aggressive sub-move on one of the two quadrants of the other shade.

use std::fmt;

use super::color::Color;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Shade {
    Light,
    Dark,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Quadrant {
    BlackLight = 0,
    BlackDark = 1,
    WhiteLight = 2,
    WhiteDark = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BlackLight,
        Quadrant::BlackDark,
        Quadrant::WhiteLight,
        Quadrant::WhiteDark,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn home_of(self) -> Color {
        match self {
            Quadrant::BlackLight | Quadrant::BlackDark => Color::Black,
            Quadrant::WhiteLight | Quadrant::WhiteDark => Color::White,
        }
    }

    pub fn shade(self) -> Shade {
        match self {
            Quadrant::BlackLight | Quadrant::WhiteLight => Shade::Light,
            Quadrant::BlackDark | Quadrant::WhiteDark => Shade::Dark,
        }
    }

    /// The two quadrants a player may choose for the passive sub-move.
    pub fn homes(color: Color) -> [Quadrant; 2] {
        match color {
            Color::Black => [Quadrant::BlackLight, Quadrant::BlackDark],
            Color::White => [Quadrant::WhiteLight, Quadrant::WhiteDark],
        }
    }

    /// Quadrants of the other shade, where the aggressive sub-move may follow a
    /// passive sub-move played here. Ascending by id.
    pub fn aggressive_partners(self) -> [Quadrant; 2] {
        match self.shade() {
            Shade::Light => [Quadrant::BlackDark, Quadrant::WhiteDark],
            Shade::Dark => [Quadrant::BlackLight, Quadrant::WhiteLight],
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partners_have_other_shade() {
        for quadrant in Quadrant::ALL {
            for partner in quadrant.aggressive_partners() {
                assert_ne!(quadrant.shade(), partner.shade());
            }
        }
    }

    #[test]
    fn test_each_player_has_one_home_of_each_shade() {
        for color in Color::ALL {
            let [first, second] = Quadrant::homes(color);
            assert_eq!(first.home_of(), color);
            assert_eq!(second.home_of(), color);
            assert_ne!(first.shade(), second.shade());
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Quadrant::from_id(3), Some(Quadrant::WhiteDark));
        assert_eq!(Quadrant::from_id(4), None);
    }
}
