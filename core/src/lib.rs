pub use board::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod config;
mod error;
mod generator;
mod layout;
mod tile;
mod types;
mod view;

/// Result of a reveal request.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// At least one tile was revealed and the game goes on
    Continued,
    /// The last safe tile was revealed
    Won,
    /// A bomb was revealed
    Lost,
    /// Nothing happened
    Rejected(Rejection),
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            Continued => true,
            Won => true,
            Lost => true,
            Rejected(_) => false,
        }
    }

    /// Whether the game ended with this move
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

/// Result of a flag toggle.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    Rejected(Rejection),
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::Flagged | Self::Unflagged => true,
            Self::Rejected(_) => false,
        }
    }

    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}
