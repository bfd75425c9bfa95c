//! Experience, levels and ranks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Threshold increase per level, also the XP a completed level is worth
/// towards the rank total.
pub const XP_PER_LEVEL: u64 = 500;

/// Rank tiers, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Novice,
    Apprentice,
    Expert,
    Master,
    Grandmaster,
}

impl Rank {
    /// Every rank with its minimum total XP, highest first.
    const TIERS: [(Rank, u64); 5] = [
        (Rank::Grandmaster, 10_000),
        (Rank::Master, 5_000),
        (Rank::Expert, 2_000),
        (Rank::Apprentice, 500),
        (Rank::Novice, 0),
    ];

    /// The highest rank whose minimum does not exceed `total_xp`.
    ///
    /// ```rust
    /// use questforce_core::simulation::Rank;
    ///
    /// assert_eq!(Rank::for_total_xp(0), Rank::Novice);
    /// assert_eq!(Rank::for_total_xp(2000), Rank::Expert);
    /// assert_eq!(Rank::for_total_xp(6250), Rank::Master);
    /// ```
    pub fn for_total_xp(total_xp: u64) -> Rank {
        Self::TIERS
            .iter()
            .find(|(_, min)| total_xp >= *min)
            .map_or(Rank::Novice, |(rank, _)| *rank)
    }

    pub fn min_xp(&self) -> u64 {
        Self::TIERS
            .iter()
            .find(|(rank, _)| rank == self)
            .map_or(0, |(_, min)| *min)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Novice => "Novice",
            Rank::Apprentice => "Apprentice",
            Rank::Expert => "Expert",
            Rank::Master => "Master",
            Rank::Grandmaster => "Grandmaster",
        };
        f.write_str(name)
    }
}

/// Level state of the simulated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub level: u32,
    pub current_xp: u64,
    pub next_level_xp: u64,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 8,
            current_xp: 2750,
            next_level_xp: 3000,
        }
    }
}

impl Progression {
    /// Adds experience, levelling up at most once.
    ///
    /// On reaching the threshold the surplus carries into the new level and
    /// the threshold rises by [`XP_PER_LEVEL`]. Returns whether a level was
    /// gained. A single large gain can leave `current_xp` above the new
    /// threshold; the next gain rolls over again.
    ///
    /// ```rust
    /// use questforce_core::simulation::Progression;
    ///
    /// let mut progression = Progression { level: 8, current_xp: 2950, next_level_xp: 3000 };
    /// assert!(progression.gain(60));
    /// assert_eq!(progression.level, 9);
    /// assert_eq!(progression.current_xp, 10);
    /// assert_eq!(progression.next_level_xp, 3500);
    /// ```
    pub fn gain(&mut self, delta: u64) -> bool {
        let xp = self.current_xp + delta;
        if xp >= self.next_level_xp {
            self.current_xp = xp - self.next_level_xp;
            self.next_level_xp += XP_PER_LEVEL;
            self.level += 1;
            true
        } else {
            self.current_xp = xp;
            false
        }
    }

    /// XP counted towards rank: completed levels plus progress in this one.
    pub fn total_xp(&self) -> u64 {
        u64::from(self.level.saturating_sub(1)) * XP_PER_LEVEL + self.current_xp
    }

    pub fn rank(&self) -> Rank {
        Rank::for_total_xp(self.total_xp())
    }

    /// Progress towards the next level, in percent.
    pub fn progress_percent(&self) -> f64 {
        if self.next_level_xp == 0 {
            return 100.0;
        }
        self.current_xp as f64 / self.next_level_xp as f64 * 100.0
    }

    pub fn summary(&self) -> ProgressionSummary {
        ProgressionSummary {
            level: self.level,
            current_xp: self.current_xp,
            next_level_xp: self.next_level_xp,
            rank: self.rank(),
            progress_percent: self.progress_percent(),
        }
    }
}

/// Serializable view of a [`Progression`] with its derived values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionSummary {
    pub level: u32,
    pub current_xp: u64,
    pub next_level_xp: u64,
    pub rank: Rank,
    pub progress_percent: f64,
}
