//! Core types for the squad optimizer.
//!
//! This crate provides the shared data model used across the workspace:
//! newtype identifiers, whole-dollar monetary values, the position
//! enumeration, and the player record consumed by the scoring and
//! allocation stages.

use derive_more::{Add, AddAssign, From, Into, Neg, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Core ID Types (Newtypes for type safety)
// =============================================================================

/// Unique identifier for players, stable for the lifetime of one pool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:04}", self.0)
    }
}

// =============================================================================
// Monetary Types
// =============================================================================

/// Write an amount with thousands separators ("1234567" -> "1,234,567").
fn write_grouped(f: &mut fmt::Formatter<'_>, amount: u64) -> fmt::Result {
    let digits = amount.to_string();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", c)?;
    }
    Ok(())
}

/// A player's salary-cap price in whole dollars.
///
/// Prices are non-negative by construction (unsigned). Player salaries are
/// integral amounts, so no fixed-point scaling is needed.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    AddAssign,
    Sum,
    From,
    Into,
)]
pub struct Price(pub u64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Raw dollar amount.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Check if zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Widen into signed cash for budget arithmetic.
    #[inline]
    pub fn as_cash(self) -> Cash {
        Cash(self.0 as i64)
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price(${})", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        write_grouped(f, self.0)
    }
}

// Allow `price == 350_000` comparisons in tests and callers
impl PartialEq<u64> for Price {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

/// Signed cash amount in whole dollars.
///
/// Semantically a budget/spend figure rather than a single price. Signed so
/// that planner arithmetic (budget minus minimum feasible costs) can go
/// negative before the infeasibility check fires.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Cash(pub i64);

impl Cash {
    pub const ZERO: Cash = Cash(0);

    /// Raw dollar amount.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Check if the amount is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Fractional share of this amount, truncated to whole dollars.
    #[inline]
    pub fn share(self, weight: f64) -> Cash {
        Cash((self.0 as f64 * weight) as i64)
    }
}

impl From<Price> for Cash {
    fn from(price: Price) -> Self {
        price.as_cash()
    }
}

impl fmt::Debug for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cash(${})", self.0)
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-$")?;
            write_grouped(f, self.0.unsigned_abs())
        } else {
            write!(f, "$")?;
            write_grouped(f, self.0 as u64)
        }
    }
}

// =============================================================================
// Position
// =============================================================================

/// Field position a player is registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Defender,
    Midfielder,
    Ruck,
    Forward,
}

impl Position {
    /// All positions, in enum order.
    pub const ALL: [Position; 4] = [
        Position::Defender,
        Position::Midfielder,
        Position::Ruck,
        Position::Forward,
    ];

    pub const COUNT: usize = 4;

    /// Dense index for per-position arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Position::Defender => 0,
            Position::Midfielder => 1,
            Position::Ruck => 2,
            Position::Forward => 3,
        }
    }

    /// Short code used in reports ("DEF", "MID", "RUC", "FWD").
    pub fn code(self) -> &'static str {
        match self {
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Ruck => "RUC",
            Position::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// =============================================================================
// Player Record
// =============================================================================

/// One priced, scored, categorized selectable unit.
///
/// Raw attributes (`age` through `injured_last_year`) are inputs to the
/// scoring stage; `predicted_score` and `adjusted_value` are populated by it
/// before the record reaches the allocator. The allocator reads records and
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier within the pool.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Club the player belongs to (diversity analysis / display only).
    pub club: String,
    /// Registered position.
    pub position: Position,
    /// Salary-cap price.
    pub price: Price,

    /// Age in years.
    pub age: u32,
    /// Career games played.
    pub games_played: u32,
    /// Average fantasy score per game last season.
    pub avg_score: f64,
    /// Development ceiling multiplier (1.0 = no projected growth).
    pub potential: f64,
    /// National draft selection number (1 = first pick).
    pub draft_pick: u32,
    /// Count of significant past injuries.
    pub injury_history: u32,
    /// Whether the player missed games through injury last season.
    pub injured_last_year: bool,

    /// Projected score for the coming season (set by scoring).
    pub predicted_score: f64,
    /// Risk/upside-adjusted value per $100k (set by scoring).
    pub adjusted_value: f64,
}

impl Player {
    /// Create a player with core fields; attributes default to a journeyman
    /// profile and scoring outputs to zero until the scoring stage runs.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        club: impl Into<String>,
        position: Position,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            club: club.into(),
            position,
            price,
            age: 25,
            games_played: 100,
            avg_score: 0.0,
            potential: 1.0,
            draft_pick: 30,
            injury_history: 0,
            injured_last_year: false,
            predicted_score: 0.0,
            adjusted_value: 0.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
