//! Course progress - per-user keyed collection persisted to local storage
//!
//! Maps course id to a progress record under the `course-progress-{userId}`
//! storage key, serialized as a flat JSON array. Completion is tracked as a
//! set of lesson ids; a lesson id appears at most once per record. Nothing
//! checks that the ids exist in the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::catalog;
use crate::config::LatencyConfig;
use crate::storage::{course_progress_key, LocalStore};

/// The fixed total-lesson denominator used by overall progress.
///
/// A placeholder figure, not the real catalog total.
pub const TOTAL_LESSONS_DENOMINATOR: usize = 100;

/// Assumed study time per completed lesson, in minutes
pub const MINUTES_PER_LESSON: u32 = 20;

/// Placeholder streak shown whenever any progress exists
pub const PLACEHOLDER_STREAK_DAYS: u32 = 7;

/// Progress through a single course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub course_id: String,
    pub completed_lessons: Vec<String>,
    pub current_lesson_id: Option<String>,
    pub last_accessed_at: DateTime<Utc>,
    pub is_completed: bool,
}

/// Aggregated stats across every tracked course
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressStats {
    pub total_completed: usize,
    pub percentage_completed: u32,
    pub completed_by_category: HashMap<String, usize>,
    pub streak_days: u32,
    /// Estimated minutes of study
    pub total_study_time: u32,
}

/// Per-user course progress store
pub struct ProgressStore {
    store: LocalStore,
    user_id: String,
    records: HashMap<String, CourseProgress>,
    latency: LatencyConfig,
}

impl ProgressStore {
    /// Load the user's progress collection from storage
    pub fn load(store: LocalStore, user_id: &str, latency: LatencyConfig) -> anyhow::Result<Self> {
        let key = course_progress_key(user_id);
        let saved: Vec<CourseProgress> = store.get(&key)?.unwrap_or_default();
        let records = saved
            .into_iter()
            .map(|record| (record.course_id.clone(), record))
            .collect();
        Ok(Self {
            store,
            user_id: user_id.to_string(),
            records,
            latency,
        })
    }

    /// Mark a lesson completed, creating the course record on first use.
    ///
    /// Completing the same lesson twice leaves the completed set unchanged.
    pub async fn complete_lesson(
        &mut self,
        course_id: &str,
        lesson_id: &str,
    ) -> anyhow::Result<&CourseProgress> {
        tokio::time::sleep(self.latency.lesson()).await;

        let record = self
            .records
            .entry(course_id.to_string())
            .or_insert_with(|| CourseProgress {
                course_id: course_id.to_string(),
                completed_lessons: Vec::new(),
                current_lesson_id: None,
                last_accessed_at: Utc::now(),
                is_completed: false,
            });

        if !record.completed_lessons.iter().any(|id| id == lesson_id) {
            record.completed_lessons.push(lesson_id.to_string());
        }
        record.current_lesson_id = Some(lesson_id.to_string());
        record.last_accessed_at = Utc::now();

        // A course with a known catalog entry completes when every lesson is done
        if let Some(course) = catalog::catalog().course(course_id) {
            record.is_completed = record.completed_lessons.len() >= course.total_lessons();
        }

        info!(
            "Completed lesson {} in {} ({} done)",
            lesson_id,
            course_id,
            record.completed_lessons.len()
        );

        self.persist()?;
        Ok(&self.records[course_id])
    }

    /// Drop the course's record entirely; resetting an untracked course is a no-op
    pub async fn reset_progress(&mut self, course_id: &str) -> anyhow::Result<()> {
        tokio::time::sleep(self.latency.lesson()).await;

        if self.records.remove(course_id).is_some() {
            info!("Reset progress for {}", course_id);
            self.persist()?;
        }
        Ok(())
    }

    /// Progress for a single course
    pub fn course_progress(&self, course_id: &str) -> Option<&CourseProgress> {
        self.records.get(course_id)
    }

    /// All tracked records, in no particular order
    pub fn records(&self) -> impl Iterator<Item = &CourseProgress> {
        self.records.values()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate stats across all tracked courses.
    ///
    /// Percentage uses a fixed 100-lesson denominator and study time a fixed
    /// 20-minute estimate per lesson; both are placeholder arithmetic.
    pub fn overall_progress(&self) -> ProgressStats {
        if self.records.is_empty() {
            return ProgressStats::default();
        }

        let total_completed: usize = self
            .records
            .values()
            .map(|record| record.completed_lessons.len())
            .sum();

        let mut completed_by_category: HashMap<String, usize> = HashMap::new();
        for record in self.records.values() {
            let category = catalog::catalog().category_for_course(&record.course_id);
            *completed_by_category.entry(category.to_string()).or_default() +=
                record.completed_lessons.len();
        }

        let percentage_completed =
            ((total_completed as f64 / TOTAL_LESSONS_DENOMINATOR as f64) * 100.0).round() as u32;

        ProgressStats {
            total_completed,
            percentage_completed,
            completed_by_category,
            streak_days: PLACEHOLDER_STREAK_DAYS,
            total_study_time: total_completed as u32 * MINUTES_PER_LESSON,
        }
    }

    fn persist(&self) -> anyhow::Result<()> {
        // Stored as an array, sorted for a stable file
        let mut records: Vec<&CourseProgress> = self.records.values().collect();
        records.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        self.store.set(&course_progress_key(&self.user_id), &records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ProgressStore) {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::open(dir.path()).unwrap();
        let progress = ProgressStore::load(local, "user-001", LatencyConfig::none()).unwrap();
        (dir, progress)
    }

    #[tokio::test]
    async fn completing_a_lesson_creates_the_record() {
        let (_dir, mut progress) = store();
        let record = progress
            .complete_lesson("js-fundamentals", "js-intro")
            .await
            .unwrap();
        assert_eq!(record.completed_lessons, vec!["js-intro"]);
        assert_eq!(record.current_lesson_id.as_deref(), Some("js-intro"));
        assert!(!record.is_completed);
    }

    #[tokio::test]
    async fn completing_twice_does_not_duplicate() {
        let (_dir, mut progress) = store();
        progress.complete_lesson("js-fundamentals", "js-intro").await.unwrap();
        let record = progress
            .complete_lesson("js-fundamentals", "js-intro")
            .await
            .unwrap();
        assert_eq!(record.completed_lessons.len(), 1);
    }

    #[tokio::test]
    async fn current_lesson_follows_the_latest_completion() {
        let (_dir, mut progress) = store();
        progress.complete_lesson("js-fundamentals", "js-intro").await.unwrap();
        let record = progress
            .complete_lesson("js-fundamentals", "js-variables")
            .await
            .unwrap();
        assert_eq!(record.current_lesson_id.as_deref(), Some("js-variables"));
        assert_eq!(record.completed_lessons.len(), 2);
    }

    #[tokio::test]
    async fn reset_removes_the_record_entirely() {
        let (dir, mut progress) = store();
        progress.complete_lesson("js-fundamentals", "js-intro").await.unwrap();
        progress.reset_progress("js-fundamentals").await.unwrap();
        assert!(progress.course_progress("js-fundamentals").is_none());

        // The stored array no longer carries the course
        let local = LocalStore::open(dir.path()).unwrap();
        let reloaded = ProgressStore::load(local, "user-001", LatencyConfig::none()).unwrap();
        assert!(reloaded.course_progress("js-fundamentals").is_none());

        // Resetting an untracked course is fine
        progress.reset_progress("js-fundamentals").await.unwrap();
    }

    #[tokio::test]
    async fn progress_round_trips_through_storage() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::open(dir.path()).unwrap();

        {
            let mut progress =
                ProgressStore::load(local.clone(), "user-001", LatencyConfig::none()).unwrap();
            progress.complete_lesson("js-fundamentals", "js-intro").await.unwrap();
            progress.complete_lesson("react-hooks", "react-intro").await.unwrap();
        }

        let reloaded = ProgressStore::load(local, "user-001", LatencyConfig::none()).unwrap();
        assert_eq!(reloaded.records().count(), 2);
        assert_eq!(
            reloaded
                .course_progress("js-fundamentals")
                .unwrap()
                .completed_lessons,
            vec!["js-intro"]
        );
    }

    #[tokio::test]
    async fn progress_is_scoped_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::open(dir.path()).unwrap();

        let mut first =
            ProgressStore::load(local.clone(), "user-001", LatencyConfig::none()).unwrap();
        first.complete_lesson("js-fundamentals", "js-intro").await.unwrap();

        let second = ProgressStore::load(local, "user-002", LatencyConfig::none()).unwrap();
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn overall_progress_uses_the_fixed_denominators() {
        let (_dir, mut progress) = store();
        assert_eq!(progress.overall_progress(), ProgressStats::default());

        progress.complete_lesson("js-fundamentals", "js-intro").await.unwrap();
        progress.complete_lesson("js-fundamentals", "js-variables").await.unwrap();
        progress.complete_lesson("react-hooks", "react-intro").await.unwrap();

        let stats = progress.overall_progress();
        assert_eq!(stats.total_completed, 3);
        // 3 of the fixed 100-lesson denominator
        assert_eq!(stats.percentage_completed, 3);
        assert_eq!(stats.total_study_time, 60);
        assert_eq!(stats.streak_days, PLACEHOLDER_STREAK_DAYS);
        assert_eq!(stats.completed_by_category["JavaScript"], 2);
        assert_eq!(stats.completed_by_category["React"], 1);
    }

    #[tokio::test]
    async fn unknown_course_ids_are_tracked_without_completion() {
        let (_dir, mut progress) = store();
        let record = progress
            .complete_lesson("mystery-course", "lesson-1")
            .await
            .unwrap();
        assert!(!record.is_completed);

        let stats = progress.overall_progress();
        assert_eq!(stats.completed_by_category["Uncategorized"], 1);
    }

    #[tokio::test]
    async fn finishing_every_lesson_completes_the_course() {
        let (_dir, mut progress) = store();
        let course = crate::catalog::catalog().course("tailwind-css").unwrap();
        let lesson_ids: Vec<String> =
            course.lessons.iter().map(|l| l.id.clone()).collect();
        for lesson_id in &lesson_ids {
            progress.complete_lesson("tailwind-css", lesson_id).await.unwrap();
        }
        assert!(progress.course_progress("tailwind-css").unwrap().is_completed);
    }
}
