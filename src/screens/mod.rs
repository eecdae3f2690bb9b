//! Interactive terminal app - the mobile screens as a CLI session
//!
//! A rustyline loop with slash-command navigation standing in for the bottom
//! navigation bar. Each screen renders, then reads commands until the user
//! navigates away. Simulated waits show a spinner for their fixed duration.

use anyhow::Result;
use crossterm::{execute, style::{Color, Print, ResetColor, SetForegroundColor}};
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::Helper;
use std::future::Future;
use std::io;
use std::time::Duration;

use crate::auth::AuthService;
use crate::community::CommunityFeed;
use crate::config::Config;
use crate::playground::ProjectStore;
use crate::practice::PracticeSession;
use crate::progress::ProgressStore;
use crate::storage::LocalStore;

mod auth;
mod community;
mod courses;
mod home;
mod lesson;
mod playground;
mod practice;
mod profile;

/// Where to go next after a screen finishes
#[derive(Debug, Clone, PartialEq)]
pub enum Nav {
    Home,
    Explore,
    Course(String),
    Lesson { course_id: String, lesson_id: String },
    Practice,
    Playground,
    Community,
    Profile,
    Logout,
    Exit,
}

/// Slash commands recognized on every screen
const GLOBAL_COMMANDS: &[(&str, &str)] = &[
    ("/home", "Home screen"),
    ("/courses", "Explore the course catalog"),
    ("/practice", "Practice challenges"),
    ("/playground", "Code playground"),
    ("/community", "Community forum"),
    ("/profile", "Your profile"),
    ("/help", "Show this help"),
    ("/logout", "Log out"),
    ("/exit", "Quit"),
];

/// Custom helper for autocomplete and hints
struct CampusHelper {
    commands: Vec<&'static str>,
}

impl CampusHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/home", "/courses", "/practice", "/playground", "/community",
                "/profile", "/help", "/logout", "/exit", "/quit",
            ],
        }
    }
}

impl Completer for CampusHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let partial = &line[..pos];
        if partial.starts_with('/') {
            let matches: Vec<Pair> = self
                .commands
                .iter()
                .filter(|c| c.starts_with(partial))
                .map(|c| Pair {
                    display: c.to_string(),
                    replacement: c[partial.len()..].to_string(),
                })
                .collect();
            return Ok((pos, matches));
        }
        Ok((pos, Vec::new()))
    }
}

impl Hinter for CampusHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if line.is_empty() || pos < line.len() || !line.starts_with('/') {
            return None;
        }
        self.commands
            .iter()
            .find(|c| c.starts_with(line) && **c != line)
            .map(|c| c[line.len()..].to_string())
    }
}

impl Validator for CampusHelper {
    fn validate(&self, _ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Highlighter for CampusHelper {}

impl Helper for CampusHelper {}

/// Interactive session state: the stores plus the shared line editor
pub struct Session {
    pub auth: AuthService,
    pub progress: Option<ProgressStore>,
    pub community: CommunityFeed,
    pub projects: ProjectStore,
    pub practice: PracticeSession,
    pub config: Config,
    editor: rustyline::Editor<CampusHelper, rustyline::history::DefaultHistory>,
}

impl Session {
    fn new(config: Config) -> Result<Self> {
        let store = LocalStore::from_config(&config)?;
        let auth = AuthService::new(store.clone(), &config)?;
        let community = CommunityFeed::with_sample_data(config.latency.clone());
        let projects = ProjectStore::load(store.clone(), config.latency.clone())?;
        let practice = PracticeSession::with_sample_state(config.latency.clone());

        let editor_config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .edit_mode(rustyline::EditMode::Emacs)
            .auto_add_history(true)
            .build();
        let mut editor = rustyline::Editor::<CampusHelper, rustyline::history::DefaultHistory>::with_config(editor_config)?;
        editor.set_helper(Some(CampusHelper::new()));

        let mut session = Self {
            auth,
            progress: None,
            community,
            projects,
            practice,
            config,
            editor,
        };
        session.reload_progress(store)?;
        Ok(session)
    }

    fn reload_progress(&mut self, store: LocalStore) -> Result<()> {
        self.progress = match self.auth.current_user() {
            Some(user) => Some(ProgressStore::load(
                store,
                &user.id,
                self.config.latency.clone(),
            )?),
            None => None,
        };
        Ok(())
    }

    /// (Re)load the progress store for the signed-in user
    pub fn refresh_progress(&mut self) -> Result<()> {
        let store = LocalStore::from_config(&self.config)?;
        self.reload_progress(store)
    }

    /// Read one line; `None` means the user cancelled (Ctrl+C / Ctrl+D)
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(rustyline::error::ReadlineError::Interrupted)
            | Err(rustyline::error::ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Standard screen prompt
    pub fn prompt(&mut self) -> Result<Option<String>> {
        self.read_line("\x1b[32m❯\x1b[0m ")
    }

    /// Prompt with a label, returning `None` on cancel
    pub fn prompt_field(&mut self, label: &str) -> Result<Option<String>> {
        self.read_line(&format!("  {}: ", label))
    }

    /// Ask a yes/no question; cancel counts as "no"
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        match self.read_line(&format!("  {} [y/N]: ", question))? {
            Some(answer) => Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes")),
            None => Ok(false),
        }
    }
}

/// Run the interactive app
pub async fn run_interactive(config: Config) -> Result<()> {
    let mut session = Session::new(config)?;

    print_banner(&session);

    // Unauthenticated sessions only see the auth screens
    if !session.auth.is_authenticated() && !auth::run(&mut session).await? {
        return Ok(());
    }
    session.refresh_progress()?;

    let mut nav = Nav::Home;
    loop {
        nav = match nav {
            Nav::Home => home::run(&mut session).await?,
            Nav::Explore => courses::run_explore(&mut session).await?,
            Nav::Course(course_id) => courses::run_detail(&mut session, &course_id).await?,
            Nav::Lesson { course_id, lesson_id } => {
                lesson::run(&mut session, &course_id, &lesson_id).await?
            }
            Nav::Practice => practice::run(&mut session).await?,
            Nav::Playground => playground::run(&mut session).await?,
            Nav::Community => community::run(&mut session).await?,
            Nav::Profile => profile::run(&mut session).await?,
            Nav::Logout => {
                let spinner = create_spinner("Logging out...");
                let result = session.auth.logout().await;
                spinner.finish_and_clear();
                result?;
                session.progress = None;
                print_success("Logged out.\n");
                if !auth::run(&mut session).await? {
                    return Ok(());
                }
                session.refresh_progress()?;
                Nav::Home
            }
            Nav::Exit => {
                print_dim("  See you next time!\n");
                return Ok(());
            }
        };
    }
}

/// Map a slash command to a navigation target
pub(crate) fn parse_nav(input: &str) -> Option<Nav> {
    match input {
        "/home" => Some(Nav::Home),
        "/courses" | "/explore" => Some(Nav::Explore),
        "/practice" => Some(Nav::Practice),
        "/playground" => Some(Nav::Playground),
        "/community" => Some(Nav::Community),
        "/profile" => Some(Nav::Profile),
        "/logout" => Some(Nav::Logout),
        "/exit" | "/quit" => Some(Nav::Exit),
        _ => None,
    }
}

/// Print the global command help
pub(crate) fn print_global_help() {
    print_header("Navigation");
    for (command, description) in GLOBAL_COMMANDS {
        println!("  {:<14} {}", command, description);
    }
    println!();
}

/// Print the welcome banner
fn print_banner(session: &Session) {
    println!();
    println!("  \x1b[1mCodeCampus v{}\x1b[0m", crate::VERSION);
    println!();
    match session.auth.current_user() {
        Some(user) => {
            println!("  \x1b[90muser\x1b[0m     \x1b[36m{}\x1b[0m", user.name);
            println!("  \x1b[90mlevel\x1b[0m    \x1b[32m{}\x1b[0m · {} XP", user.level, user.experience_points);
        }
        None => {
            println!("  \x1b[90mLearn to code, one lesson at a time.\x1b[0m");
        }
    }
    println!();
    println!("  \x1b[90m/help for commands · Tab for autocomplete\x1b[0m");
    println!();
}

/// Print colored output
fn print_colored(text: &str, color: Color) {
    let _ = execute!(
        io::stdout(),
        SetForegroundColor(color),
        Print(text),
        ResetColor
    );
}

/// Print a dimmed line
pub(crate) fn print_dim(text: &str) {
    print_colored(text, Color::DarkGrey);
}

/// Print a success message
pub(crate) fn print_success(text: &str) {
    print_colored(text, Color::Green);
}

/// Print an error message
pub(crate) fn print_error(text: &str) {
    print_colored(&format!("  {}\n", text), Color::Red);
}

/// Print a section header
pub(crate) fn print_header(text: &str) {
    print_colored(&format!("\n  {}\n", text), Color::Cyan);
}

/// Create a spinner shown while a simulated operation sleeps
pub(crate) fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.dim} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run a future behind a spinner, clearing it when done
pub(crate) async fn with_spinner<F, T>(message: &str, future: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = create_spinner(message);
    let result = future.await;
    spinner.finish_and_clear();
    result
}

/// Render a text progress bar like `█████░░░░░░░`
pub(crate) fn progress_bar(completed: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let filled = (completed.min(total) * width) / total;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_parses_the_bottom_bar_commands() {
        assert_eq!(parse_nav("/home"), Some(Nav::Home));
        assert_eq!(parse_nav("/courses"), Some(Nav::Explore));
        assert_eq!(parse_nav("/quit"), Some(Nav::Exit));
        assert_eq!(parse_nav("/unknown"), None);
        assert_eq!(parse_nav("hello"), None);
    }

    #[test]
    fn progress_bar_scales_to_width() {
        assert_eq!(progress_bar(0, 10, 10), "░░░░░░░░░░");
        assert_eq!(progress_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(progress_bar(10, 10, 10), "██████████");
        // Over-complete clamps
        assert_eq!(progress_bar(15, 10, 10), "██████████");
        // Empty course renders an empty bar
        assert_eq!(progress_bar(3, 0, 4), "░░░░");
    }
}
