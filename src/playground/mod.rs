//! Code playground - canned execution and saved projects
//!
//! `run_code` never executes anything: it sleeps the configured delay and
//! returns a fixed transcript per language. Saved projects persist under the
//! `playground-projects` storage key as a flat JSON array.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::LatencyConfig;
use crate::storage::{LocalStore, PLAYGROUND_PROJECTS_KEY};

/// Simulate running playground code, returning the console transcript.
///
/// The output depends only on the language; the code itself is never
/// executed or inspected.
pub async fn run_code(language_id: &str, _code: &str, latency: &LatencyConfig) -> String {
    tokio::time::sleep(latency.run_code()).await;

    match language_id {
        "javascript" | "typescript" | "python" => {
            "Hello, World!\nProgram executed successfully.".to_string()
        }
        "html" => "HTML rendering is not supported in the console output.\n\
                   Please use the preview tab to view your HTML."
            .to_string(),
        "css" => "CSS styling is not displayed in the console output.\n\
                  Please use the preview tab to view your styles."
            .to_string(),
        _ => "Language not supported for execution.".to_string(),
    }
}

/// A saved playground project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProject {
    pub id: String,
    pub name: String,
    pub language: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Saved-project collection persisted to local storage
pub struct ProjectStore {
    store: LocalStore,
    projects: Vec<SavedProject>,
    latency: LatencyConfig,
}

impl ProjectStore {
    /// Load the saved projects from storage
    pub fn load(store: LocalStore, latency: LatencyConfig) -> Result<Self> {
        let projects = store.get(PLAYGROUND_PROJECTS_KEY)?.unwrap_or_default();
        Ok(Self { store, projects, latency })
    }

    pub fn projects(&self) -> &[SavedProject] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&SavedProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&SavedProject> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Save a project, upserting by name.
    ///
    /// An existing project keeps its id and creation time; its code,
    /// language, and update time are replaced. A new name appends a record.
    pub async fn save_project(
        &mut self,
        name: &str,
        language: &str,
        code: &str,
    ) -> Result<&SavedProject> {
        if name.trim().is_empty() {
            bail!("Project name cannot be empty");
        }
        let name = name.trim();

        tokio::time::sleep(self.latency.save_project()).await;

        let now = Utc::now();
        let index = match self.projects.iter().position(|p| p.name == name) {
            Some(index) => {
                let existing = &mut self.projects[index];
                existing.code = code.to_string();
                existing.language = language.to_string();
                existing.updated_at = now;
                info!("Updated project '{}'", name);
                index
            }
            None => {
                self.projects.push(SavedProject {
                    id: format!("project-{}", uuid::Uuid::new_v4()),
                    name: name.to_string(),
                    language: language.to_string(),
                    code: code.to_string(),
                    created_at: now,
                    updated_at: now,
                });
                info!("Saved new project '{}'", name);
                self.projects.len() - 1
            }
        };

        self.persist()?;
        Ok(&self.projects[index])
    }

    /// Delete a project by id; unknown ids are a no-op
    pub fn delete_project(&mut self, id: &str) -> Result<()> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() != before {
            info!("Deleted project {}", id);
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        self.store.set(PLAYGROUND_PROJECTS_KEY, &self.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ProjectStore) {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::open(dir.path()).unwrap();
        let projects = ProjectStore::load(local, LatencyConfig::none()).unwrap();
        (dir, projects)
    }

    #[tokio::test]
    async fn runner_returns_the_canned_transcripts() {
        let latency = LatencyConfig::none();
        let expected = "Hello, World!\nProgram executed successfully.";
        assert_eq!(run_code("javascript", "anything", &latency).await, expected);
        assert_eq!(run_code("typescript", "anything", &latency).await, expected);
        assert_eq!(run_code("python", "anything", &latency).await, expected);
        assert!(run_code("html", "", &latency).await.contains("preview tab"));
        assert!(run_code("css", "", &latency).await.contains("preview tab"));
        assert_eq!(
            run_code("cobol", "", &latency).await,
            "Language not supported for execution."
        );
    }

    #[tokio::test]
    async fn save_appends_new_projects() {
        let (_dir, mut projects) = store();
        projects.save_project("First", "javascript", "let a = 1;").await.unwrap();
        projects.save_project("Second", "python", "a = 1").await.unwrap();
        assert_eq!(projects.projects().len(), 2);
        assert!(projects.find_by_name("First").is_some());
    }

    #[tokio::test]
    async fn save_upserts_by_name() {
        let (_dir, mut projects) = store();
        let first = projects
            .save_project("Demo", "javascript", "v1")
            .await
            .unwrap()
            .clone();
        let second = projects
            .save_project("Demo", "typescript", "v2")
            .await
            .unwrap()
            .clone();

        assert_eq!(projects.projects().len(), 1);
        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.code, "v2");
        assert_eq!(second.language, "typescript");
    }

    #[tokio::test]
    async fn empty_names_are_rejected() {
        let (_dir, mut projects) = store();
        assert!(projects.save_project("  ", "javascript", "x").await.is_err());
    }

    #[tokio::test]
    async fn delete_removes_and_is_idempotent() {
        let (_dir, mut projects) = store();
        let id = projects
            .save_project("Gone", "css", "body {}")
            .await
            .unwrap()
            .id
            .clone();
        projects.delete_project(&id).unwrap();
        assert!(projects.project(&id).is_none());
        // Unknown id is a no-op
        projects.delete_project(&id).unwrap();
    }

    #[tokio::test]
    async fn projects_round_trip_through_storage() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::open(dir.path()).unwrap();

        {
            let mut projects =
                ProjectStore::load(local.clone(), LatencyConfig::none()).unwrap();
            projects.save_project("Kept", "python", "print(1)").await.unwrap();
        }

        let reloaded = ProjectStore::load(local, LatencyConfig::none()).unwrap();
        assert_eq!(reloaded.projects().len(), 1);
        assert_eq!(reloaded.find_by_name("Kept").unwrap().code, "print(1)");
    }
}
