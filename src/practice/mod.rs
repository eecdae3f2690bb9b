//! Practice challenges - filtered listings and a simulated test runner
//!
//! Challenges come from the catalog; completion state lives in the session.
//! Running an attempt never executes the submitted code: after the usual
//! delay the outcome is a coin flip, and the transcript shown is the
//! challenge's canned pass or fail output.

use anyhow::{bail, Result};
use std::collections::HashSet;
use tracing::info;

use crate::catalog::{self, Challenge};
use crate::config::LatencyConfig;
use crate::types::Difficulty;

/// Listing filter, mirroring the filter chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengeFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
    Completed,
    NotCompleted,
}

impl std::str::FromStr for ChallengeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ChallengeFilter::All),
            "easy" => Ok(ChallengeFilter::Easy),
            "medium" => Ok(ChallengeFilter::Medium),
            "hard" => Ok(ChallengeFilter::Hard),
            "completed" => Ok(ChallengeFilter::Completed),
            "not-completed" | "not-started" => Ok(ChallengeFilter::NotCompleted),
            other => bail!(
                "Unknown filter '{}' (all, easy, medium, hard, completed, not-completed)",
                other
            ),
        }
    }
}

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengeSort {
    #[default]
    Popular,
    Newest,
    DifficultyAsc,
    DifficultyDesc,
}

impl std::str::FromStr for ChallengeSort {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "popular" => Ok(ChallengeSort::Popular),
            "newest" => Ok(ChallengeSort::Newest),
            "difficulty-asc" => Ok(ChallengeSort::DifficultyAsc),
            "difficulty-desc" => Ok(ChallengeSort::DifficultyDesc),
            other => bail!(
                "Unknown sort '{}' (popular, newest, difficulty-asc, difficulty-desc)",
                other
            ),
        }
    }
}

/// Result of a simulated challenge attempt
#[derive(Debug, Clone)]
pub struct AttemptOutcome {
    pub passed: bool,
    pub transcript: String,
}

/// Session-scoped practice state
pub struct PracticeSession {
    completed: HashSet<String>,
    latency: LatencyConfig,
}

impl PracticeSession {
    /// Fresh session with nothing completed
    pub fn new(latency: LatencyConfig) -> Self {
        Self {
            completed: HashSet::new(),
            latency,
        }
    }

    /// Session seeded with the sample completion state
    pub fn with_sample_state(latency: LatencyConfig) -> Self {
        let mut session = Self::new(latency);
        session.completed.insert("sum-array".to_string());
        session.completed.insert("palindrome-check".to_string());
        session
    }

    pub fn is_completed(&self, challenge_id: &str) -> bool {
        self.completed.contains(challenge_id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Challenges matching the filter and query, in the requested order
    pub fn challenges(
        &self,
        filter: ChallengeFilter,
        sort: ChallengeSort,
        query: Option<&str>,
    ) -> Vec<&'static Challenge> {
        let mut challenges: Vec<&'static Challenge> = catalog::catalog()
            .challenges()
            .iter()
            .filter(|challenge| match query {
                Some(q) if !q.trim().is_empty() => {
                    challenge.title.to_lowercase().contains(&q.to_lowercase())
                }
                _ => true,
            })
            .filter(|challenge| match filter {
                ChallengeFilter::All => true,
                ChallengeFilter::Easy => challenge.difficulty == Difficulty::Easy,
                ChallengeFilter::Medium => challenge.difficulty == Difficulty::Medium,
                ChallengeFilter::Hard => challenge.difficulty == Difficulty::Hard,
                ChallengeFilter::Completed => self.is_completed(&challenge.id),
                ChallengeFilter::NotCompleted => !self.is_completed(&challenge.id),
            })
            .collect();

        match sort {
            ChallengeSort::Popular => {
                challenges.sort_by(|a, b| b.completed_count.cmp(&a.completed_count))
            }
            // Sample data carries no dates; "newest" keeps catalog order
            ChallengeSort::Newest => {}
            ChallengeSort::DifficultyAsc => {
                challenges.sort_by(|a, b| a.difficulty.cmp(&b.difficulty))
            }
            ChallengeSort::DifficultyDesc => {
                challenges.sort_by(|a, b| b.difficulty.cmp(&a.difficulty))
            }
        }
        challenges
    }

    /// Run a simulated attempt: coin-flip outcome, canned transcript.
    ///
    /// A passing attempt marks the challenge completed for the session.
    pub async fn run_attempt(
        &mut self,
        challenge_id: &str,
        _code: &str,
    ) -> Result<AttemptOutcome> {
        let challenge = catalog::catalog()
            .challenge(challenge_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown challenge: {}", challenge_id))?;

        tokio::time::sleep(self.latency.run_code()).await;

        let passed = rand::random::<bool>();
        if passed {
            self.completed.insert(challenge.id.clone());
        }
        info!(
            "Attempt on {}: {}",
            challenge_id,
            if passed { "passed" } else { "failed" }
        );

        Ok(AttemptOutcome {
            passed,
            transcript: if passed {
                challenge.passed_transcript.clone()
            } else {
                challenge.failed_transcript.clone()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PracticeSession {
        PracticeSession::with_sample_state(LatencyConfig::none())
    }

    #[test]
    fn sample_state_marks_the_easy_pair_completed() {
        let session = session();
        assert!(session.is_completed("sum-array"));
        assert!(session.is_completed("palindrome-check"));
        assert!(!session.is_completed("merge-sort"));
        assert_eq!(session.completed_count(), 2);
    }

    #[test]
    fn filters_narrow_the_listing() {
        let session = session();

        let all = session.challenges(ChallengeFilter::All, ChallengeSort::Popular, None);
        assert_eq!(all.len(), 6);

        let easy = session.challenges(ChallengeFilter::Easy, ChallengeSort::Popular, None);
        assert!(easy.iter().all(|c| c.difficulty == Difficulty::Easy));
        assert_eq!(easy.len(), 2);

        let done = session.challenges(ChallengeFilter::Completed, ChallengeSort::Popular, None);
        assert_eq!(done.len(), 2);

        let todo =
            session.challenges(ChallengeFilter::NotCompleted, ChallengeSort::Popular, None);
        assert_eq!(todo.len(), 4);
    }

    #[test]
    fn popular_sort_orders_by_completion_count() {
        let session = session();
        let list = session.challenges(ChallengeFilter::All, ChallengeSort::Popular, None);
        assert_eq!(list[0].id, "sum-array"); // 3278 completions
        assert_eq!(list[5].id, "merge-sort"); // 765 completions
    }

    #[test]
    fn difficulty_sorts_run_both_ways() {
        let session = session();
        let asc = session.challenges(ChallengeFilter::All, ChallengeSort::DifficultyAsc, None);
        assert_eq!(asc.first().unwrap().difficulty, Difficulty::Easy);
        assert_eq!(asc.last().unwrap().difficulty, Difficulty::Hard);

        let desc = session.challenges(ChallengeFilter::All, ChallengeSort::DifficultyDesc, None);
        assert_eq!(desc.first().unwrap().difficulty, Difficulty::Hard);
    }

    #[test]
    fn search_matches_titles() {
        let session = session();
        let list = session.challenges(
            ChallengeFilter::All,
            ChallengeSort::Popular,
            Some("palindrome"),
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "palindrome-check");
    }

    #[tokio::test]
    async fn attempt_returns_the_matching_transcript() {
        let mut session = PracticeSession::new(LatencyConfig::none());
        let outcome = session.run_attempt("sum-array", "function sumArray() {}").await.unwrap();
        if outcome.passed {
            assert!(outcome.transcript.starts_with("All tests passed!"));
            assert!(session.is_completed("sum-array"));
        } else {
            assert!(outcome.transcript.starts_with("Some tests failed!"));
            assert!(!session.is_completed("sum-array"));
        }
    }

    #[tokio::test]
    async fn attempt_on_unknown_challenge_errors() {
        let mut session = PracticeSession::new(LatencyConfig::none());
        assert!(session.run_attempt("no-such-challenge", "").await.is_err());
    }
}
