//! Shared types used across modules
//!
//! This module contains types that are used by multiple modules
//! to avoid circular dependencies.

use serde::{Deserialize, Serialize};

/// Skill level, shown on user profiles and course cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Level reached at a given experience-point total
    pub fn for_xp(xp: u32) -> Self {
        match xp {
            0..=1999 => Level::Beginner,
            2000..=4999 => Level::Intermediate,
            _ => Level::Advanced,
        }
    }

    /// XP needed to reach the next level, if there is one
    pub fn next_threshold(&self) -> Option<u32> {
        match self {
            Level::Beginner => Some(2000),
            Level::Intermediate => Some(5000),
            Level::Advanced => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Beginner => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Challenge difficulty; ordering is easy-to-hard for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds() {
        assert_eq!(Level::for_xp(0), Level::Beginner);
        assert_eq!(Level::for_xp(1250), Level::Beginner);
        assert_eq!(Level::for_xp(2000), Level::Intermediate);
        assert_eq!(Level::for_xp(4999), Level::Intermediate);
        assert_eq!(Level::for_xp(5000), Level::Advanced);
    }

    #[test]
    fn difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }
}
