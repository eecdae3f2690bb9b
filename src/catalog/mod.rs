//! Course catalog - static sample data standing in for a backend
//!
//! Courses, lesson content, practice challenges, and playground languages are
//! all hard-coded records, built once behind a lazy static. Nothing here is
//! fetched; nothing here changes at runtime.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{Difficulty, Level};

mod data;

/// A course in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: Level,
    pub tags: Vec<String>,
    pub instructor: String,
    pub rating: f32,
    pub review_count: u32,
    pub total_time: String,
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Number of lessons in the course
    pub fn total_lessons(&self) -> usize {
        self.lessons.len()
    }

    /// Look up a lesson by id
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// The lesson after `lesson_id`, if any
    pub fn next_lesson_after(&self, lesson_id: &str) -> Option<&Lesson> {
        let index = self.lessons.iter().position(|l| l.id == lesson_id)?;
        self.lessons.get(index + 1)
    }
}

/// A lesson entry within a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration_minutes: u32,
}

/// Full viewer content for a lesson
#[derive(Debug, Clone)]
pub struct LessonContent {
    pub id: String,
    pub title: String,
    pub course_id: String,
    pub blocks: Vec<ContentBlock>,
    pub prev_lesson_id: Option<String>,
    pub next_lesson_id: Option<String>,
    pub time_to_complete: String,
}

impl LessonContent {
    /// Number of quiz blocks in the lesson
    pub fn quiz_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, ContentBlock::Quiz { .. }))
            .count()
    }
}

/// One block of lesson content
#[derive(Debug, Clone)]
pub enum ContentBlock {
    Text(String),
    Code { language: String, source: String },
    Quiz { question: String, options: Vec<String>, answer: usize },
}

/// A practice challenge
#[derive(Debug, Clone)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub estimated_minutes: u32,
    /// How many people have completed this challenge (sample figure)
    pub completed_count: u32,
    pub description: String,
    pub starter_code: String,
    /// Canned runner transcript when the simulated attempt passes
    pub passed_transcript: String,
    /// Canned runner transcript when the simulated attempt fails
    pub failed_transcript: String,
}

/// A playground language with its default snippet
#[derive(Debug, Clone)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub extension: String,
    pub default_code: String,
}

/// The full static catalog
pub struct Catalog {
    courses: Vec<Course>,
    lesson_content: HashMap<String, LessonContent>,
    challenges: Vec<Challenge>,
    languages: Vec<Language>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(data::seed);

/// Access the shared catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn lesson_content(&self, lesson_id: &str) -> Option<&LessonContent> {
        self.lesson_content.get(lesson_id)
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn challenge(&self, challenge_id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == challenge_id)
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn language(&self, language_id: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.id == language_id)
    }

    /// Category used when aggregating progress, from a fixed course map
    pub fn category_for_course(&self, course_id: &str) -> &'static str {
        match course_id {
            "js-fundamentals" => "JavaScript",
            "react-hooks" => "React",
            "typescript-advanced" => "TypeScript",
            "nextjs-app" => "Next.js",
            "tailwind-css" => "CSS",
            _ => "Uncategorized",
        }
    }
}

/// Topic chips shown on the home screen
pub fn featured_topics() -> &'static [&'static str] {
    &["JavaScript", "React", "TypeScript", "Next.js", "Tailwind CSS", "Node.js"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_the_sample_courses() {
        let cat = catalog();
        assert!(cat.course("js-fundamentals").is_some());
        assert!(cat.course("react-hooks").is_some());
        assert!(cat.course("typescript-advanced").is_some());
        assert!(cat.course("no-such-course").is_none());
    }

    #[test]
    fn js_fundamentals_has_twelve_lessons() {
        let course = catalog().course("js-fundamentals").unwrap();
        assert_eq!(course.total_lessons(), 12);
        assert_eq!(course.lessons[0].id, "js-intro");
        assert_eq!(course.lessons[11].id, "js-project");
    }

    #[test]
    fn next_lesson_walks_the_course_order() {
        let course = catalog().course("js-fundamentals").unwrap();
        let next = course.next_lesson_after("js-arrays").unwrap();
        assert_eq!(next.id, "js-functions");
        assert!(course.next_lesson_after("js-project").is_none());
    }

    #[test]
    fn arrays_lesson_content_matches_course_links() {
        let content = catalog().lesson_content("js-arrays").unwrap();
        assert_eq!(content.course_id, "js-fundamentals");
        assert_eq!(content.prev_lesson_id.as_deref(), Some("js-loops"));
        assert_eq!(content.next_lesson_id.as_deref(), Some("js-functions"));
        assert_eq!(content.quiz_count(), 1);
    }

    #[test]
    fn challenges_and_languages_are_seeded() {
        let cat = catalog();
        assert_eq!(cat.challenges().len(), 6);
        assert_eq!(cat.languages().len(), 5);
        assert!(cat.challenge("sum-array").is_some());
        assert!(cat.language("python").is_some());
    }

    #[test]
    fn category_map_covers_the_sample_courses() {
        let cat = catalog();
        assert_eq!(cat.category_for_course("js-fundamentals"), "JavaScript");
        assert_eq!(cat.category_for_course("react-hooks"), "React");
        assert_eq!(cat.category_for_course("mystery"), "Uncategorized");
    }
}
