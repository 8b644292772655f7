use std::fmt;

use crate::board::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    /// A quadrant of the loser holds none of their stones.
    QuadrantCleared,
    /// The loser's clock ran out.
    ClockExpired,
    /// The loser's agent gave up on choosing a move in time.
    TimeExpired,
    /// The loser's agent produced an illegal move or failed to answer.
    Forfeit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    QuietTurns,
    TurnLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory { winner: Color, reason: WinReason },
    Draw(DrawReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    /// Moves played before the game ended.
    pub turns: u32,
}

impl GameResult {
    pub fn winner(&self) -> Option<Color> {
        match self.outcome {
            Outcome::Victory { winner, .. } => Some(winner),
            Outcome::Draw(_) => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Victory { winner, reason } => {
                let how = match reason {
                    WinReason::QuadrantCleared => "cleared a quadrant",
                    WinReason::ClockExpired => "won on time",
                    WinReason::TimeExpired => "won as the opponent ran out of time",
                    WinReason::Forfeit => "won by forfeit",
                };
                write!(f, "{} {} after {} turns", winner, how, self.turns)
            }
            Outcome::Draw(DrawReason::QuietTurns) => {
                write!(f, "draw by quiet turns after {} turns", self.turns)
            }
            Outcome::Draw(DrawReason::TurnLimit) => {
                write!(f, "draw by turn limit after {} turns", self.turns)
            }
        }
    }
}
