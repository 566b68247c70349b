use std::fmt;
use serde::{Deserialize, Serialize};

use crate::challenge_engine::error::ChallengeError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// The four card families. Purely cosmetic: correctness never looks at suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Snow,
    Moon,
    Clouds,
    Wind,
}

impl Suit {
    /// Catalog order. Card `i` of the catalog belongs to `ALL[i / 8]`.
    pub const ALL: [Suit; 4] = [Suit::Snow, Suit::Moon, Suit::Clouds, Suit::Wind];

    /// Suit at catalog position `index`, if any.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Snow),
            1 => Some(Suit::Moon),
            2 => Some(Suit::Clouds),
            3 => Some(Suit::Wind),
            _ => None,
        }
    }

    /// Position in [`Suit::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Suit::Snow   => 0,
            Suit::Moon   => 1,
            Suit::Clouds => 2,
            Suit::Wind   => 3,
        }
    }

    /// Directory holding this suit's artwork under the catalog root.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Suit::Snow   => "Snow",
            Suit::Moon   => "Moon",
            Suit::Clouds => "Nuages",
            Suit::Wind   => "Wind",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Rank 1..=8. Construction is checked, so a `Rank` in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// Checked constructor; `InvalidArgument` outside 1..=8.
    pub fn new(value: u8) -> Result<Self, ChallengeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rank(value))
        } else {
            Err(ChallengeError::InvalidArgument(format!(
                "rank {value} outside {}..={}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Raw numeric rank.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Rank `offset` steps above this one, if it stays within range.
    pub fn step(self, offset: u8) -> Option<Rank> {
        self.0.checked_add(offset).and_then(|v| Rank::new(v).ok())
    }
}

impl TryFrom<u8> for Rank {
    type Error = ChallengeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog card. Identity is the `(rank, suit)` pair; the asset path is
/// derived from it on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Card from an already-validated rank.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Same rank means same answer, whatever the suit.
    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

// ---------------------------------------------------------------------------
// Challenge types
// ---------------------------------------------------------------------------

/// Number of positions in a sequence, and of options offered.
pub const SEQUENCE_LEN: usize = 4;
pub const OPTION_COUNT: usize = 4;

/// One sequence position: a card, or `None` for the blank the user must fill.
pub type Slot = Option<Card>;

/// Outcome of an answer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// No answer given yet for the current challenge.
    #[default]
    None,
    Correct,
    Incorrect,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::None      => write!(f, "none"),
            Feedback::Correct   => write!(f, "correct"),
            Feedback::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// Lifecycle of a [`ChallengeSession`](crate::ChallengeSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotStarted,
    InProgress,
}

/// A complete puzzle instance. Generated in one piece and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// `SQ-` followed by 8 hex digits.
    pub challenge_id: String,
    pub sequence: [Slot; SEQUENCE_LEN],
    pub options: [Card; OPTION_COUNT],
    pub missing_card: Card,
    pub missing_index: usize,
}

impl Challenge {
    /// Rank-only comparison against the hidden card.
    pub fn evaluate(&self, selected: &Card) -> Feedback {
        if selected.same_rank(&self.missing_card) {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        }
    }

    /// Rank of the first slot, whether shown or blank.
    pub fn base_rank(&self) -> u8 {
        self.missing_card.rank.value().saturating_sub(self.missing_index as u8)
    }
}
