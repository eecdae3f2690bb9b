//! CLI interface for codecampus

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::auth::AuthService;
use crate::catalog;
use crate::community::{CommunityFeed, FeedTab};
use crate::config::Config;
use crate::playground::ProjectStore;
use crate::practice::{ChallengeFilter, ChallengeSort, PracticeSession};
use crate::progress::ProgressStore;
use crate::storage::LocalStore;

#[derive(Parser)]
#[command(name = "codecampus")]
#[command(about = "Terminal learning platform: courses, practice challenges, and a code playground", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive app (default when no command given)
    Interactive,
    /// Log in, sign up, or inspect the session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Browse the course catalog
    Courses {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Inspect and update course progress
    Progress {
        #[command(subcommand)]
        command: ProgressCommands,
    },
    /// List practice challenges
    Practice {
        /// Filter: all, easy, medium, hard, completed, not-completed
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// Sort: popular, newest, difficulty-asc, difficulty-desc
        #[arg(short, long, default_value = "popular")]
        sort: String,
        /// Search by title
        #[arg(long)]
        search: Option<String>,
    },
    /// Run code and manage saved playground projects
    Playground {
        #[command(subcommand)]
        command: PlaygroundCommands,
    },
    /// Browse the community feed
    Community {
        #[command(subcommand)]
        command: CommunityCommands,
    },
    /// Show or reset the configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
        /// Print the config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Log in with the demo credentials
    Login {
        /// Account email
        email: String,
        /// Account password
        password: String,
    },
    /// Create a local account
    Signup {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Password (8+ characters)
        password: String,
    },
    /// Log out and clear the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
enum CourseCommands {
    /// List all courses
    List,
    /// Show a course with its lesson list
    Show {
        /// Course id (e.g. js-fundamentals)
        id: String,
    },
}

#[derive(Subcommand)]
enum ProgressCommands {
    /// Show progress, overall or for one course
    Show {
        /// Limit to a single course
        #[arg(short, long)]
        course: Option<String>,
    },
    /// Mark a lesson completed
    Complete {
        /// Course id
        course: String,
        /// Lesson id
        lesson: String,
    },
    /// Remove a course's progress record entirely
    Reset {
        /// Course id
        course: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PlaygroundCommands {
    /// Run code (simulated) and print the console output
    Run {
        /// Language id: javascript, python, html, css, typescript
        #[arg(short, long)]
        lang: String,
        /// Read code from a file instead of the language default
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,
    },
    /// List saved projects
    Projects,
    /// Save a project (upserts by name)
    Save {
        /// Project name
        name: String,
        /// Language id
        #[arg(short, long)]
        lang: String,
        /// File holding the code
        #[arg(short, long)]
        file: std::path::PathBuf,
    },
    /// Delete a saved project by id
    Delete {
        /// Project id
        id: String,
    },
}

#[derive(Subcommand)]
enum CommunityCommands {
    /// List posts
    Posts {
        /// Tab: latest, popular, bookmarked
        #[arg(short, long, default_value = "latest")]
        tab: String,
        /// Search posts
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a post with its comments
    Show {
        /// Post id (e.g. post-1)
        id: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        None | Some(Commands::Interactive) => {
            crate::screens::run_interactive(config).await?;
        }
        Some(Commands::Auth { command }) => match command {
            AuthCommands::Login { email, password } => {
                let mut auth = open_auth(&config)?;
                let user = auth.login(&email, &password).await?;
                println!("Logged in as {} ({})", user.name, user.email);
            }
            AuthCommands::Signup { name, email, password } => {
                let mut auth = open_auth(&config)?;
                let user = auth.signup(&name, &email, &password).await?;
                println!("Account created for {} ({})", user.name, user.email);
            }
            AuthCommands::Logout => {
                let mut auth = open_auth(&config)?;
                auth.logout().await?;
                println!("Logged out.");
            }
            AuthCommands::Whoami => {
                let auth = open_auth(&config)?;
                match auth.current_user() {
                    Some(user) => println!(
                        "{} ({}) · {} · {} XP",
                        user.name, user.email, user.level, user.experience_points
                    ),
                    None => println!("Not logged in. Use 'codecampus auth login'."),
                }
            }
        },
        Some(Commands::Courses { command }) => match command {
            CourseCommands::List => {
                for course in catalog::catalog().courses() {
                    println!(
                        "{:<22} {:<32} {:<13} {} lessons",
                        course.id,
                        course.title,
                        course.level.to_string(),
                        course.total_lessons()
                    );
                }
            }
            CourseCommands::Show { id } => {
                let course = catalog::catalog()
                    .course(&id)
                    .with_context(|| format!("Course not found: {}", id))?;
                println!("{} ({})", course.title, course.level);
                println!("{}", course.description);
                println!(
                    "Instructor: {} · {:.1}★ ({} reviews) · {}",
                    course.instructor, course.rating, course.review_count, course.total_time
                );
                println!();
                for (index, lesson) in course.lessons.iter().enumerate() {
                    println!(
                        "  {:>2}. {:<40} {:>3} min  [{}]",
                        index + 1,
                        lesson.title,
                        lesson.duration_minutes,
                        lesson.id
                    );
                }
            }
        },
        Some(Commands::Progress { command }) => {
            let mut progress = open_progress(&config)?;
            match command {
                ProgressCommands::Show { course } => match course {
                    Some(course_id) => match progress.course_progress(&course_id) {
                        Some(record) => {
                            println!("{}:", record.course_id);
                            println!("  Completed: {}", record.completed_lessons.join(", "));
                            if let Some(current) = &record.current_lesson_id {
                                println!("  Current lesson: {}", current);
                            }
                            println!(
                                "  Last accessed: {}",
                                record.last_accessed_at.format("%Y-%m-%d %H:%M UTC")
                            );
                            println!("  Course completed: {}", record.is_completed);
                        }
                        None => println!("No progress recorded for {}.", course_id),
                    },
                    None => {
                        let stats = progress.overall_progress();
                        println!("Lessons completed: {}", stats.total_completed);
                        println!("Overall progress:  {}%", stats.percentage_completed);
                        println!("Day streak:        {}", stats.streak_days);
                        println!(
                            "Study time:        {}h {}m",
                            stats.total_study_time / 60,
                            stats.total_study_time % 60
                        );
                        for (category, count) in &stats.completed_by_category {
                            println!("  {:<16} {}", category, count);
                        }
                    }
                },
                ProgressCommands::Complete { course, lesson } => {
                    let record = progress.complete_lesson(&course, &lesson).await?;
                    println!(
                        "Marked {} complete in {} ({} lessons done).",
                        lesson,
                        course,
                        record.completed_lessons.len()
                    );
                }
                ProgressCommands::Reset { course, yes } => {
                    if !yes {
                        println!("This removes all progress for {}.", course);
                        println!("Are you sure? [y/N]:");
                        let mut input = String::new();
                        std::io::stdin().read_line(&mut input)?;
                        if !matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
                            println!("Cancelled.");
                            return Ok(());
                        }
                    }
                    progress.reset_progress(&course).await?;
                    println!("Progress reset for {}.", course);
                }
            }
        }
        Some(Commands::Practice { filter, sort, search }) => {
            let filter: ChallengeFilter = filter.parse()?;
            let sort: ChallengeSort = sort.parse()?;
            let session = PracticeSession::with_sample_state(config.latency.clone());
            for challenge in session.challenges(filter, sort, search.as_deref()) {
                let done = if session.is_completed(&challenge.id) { "✓" } else { " " };
                println!(
                    "{} {:<22} {:<32} {:<7} {:<13} ~{} min",
                    done,
                    challenge.id,
                    challenge.title,
                    challenge.difficulty.to_string(),
                    challenge.category,
                    challenge.estimated_minutes
                );
            }
        }
        Some(Commands::Playground { command }) => {
            match command {
                PlaygroundCommands::Run { lang, file } => {
                    let language = catalog::catalog()
                        .language(&lang)
                        .with_context(|| format!("Unknown language: {}", lang))?;
                    let code = match file {
                        Some(path) => std::fs::read_to_string(&path)
                            .with_context(|| format!("Failed to read {}", path.display()))?,
                        None => language.default_code.clone(),
                    };
                    let output =
                        crate::playground::run_code(&language.id, &code, &config.latency).await;
                    println!("{}", output);
                }
                PlaygroundCommands::Projects => {
                    let projects = open_projects(&config)?;
                    if projects.projects().is_empty() {
                        println!("No saved projects.");
                    }
                    for project in projects.projects() {
                        println!(
                            "{:<40} {:<24} {:<12} updated {}",
                            project.id,
                            project.name,
                            project.language,
                            project.updated_at.format("%Y-%m-%d %H:%M")
                        );
                    }
                }
                PlaygroundCommands::Save { name, lang, file } => {
                    require_login(&config)?;
                    catalog::catalog()
                        .language(&lang)
                        .with_context(|| format!("Unknown language: {}", lang))?;
                    let code = std::fs::read_to_string(&file)
                        .with_context(|| format!("Failed to read {}", file.display()))?;
                    let mut projects = open_projects(&config)?;
                    let project = projects.save_project(&name, &lang, &code).await?;
                    println!("Saved \"{}\" ({}).", project.name, project.id);
                }
                PlaygroundCommands::Delete { id } => {
                    let mut projects = open_projects(&config)?;
                    projects.delete_project(&id)?;
                    println!("Deleted {} (if it existed).", id);
                }
            }
        }
        Some(Commands::Community { command }) => {
            // The feed is session state seeded from sample data, like a
            // fresh page load
            let feed = CommunityFeed::with_sample_data(config.latency.clone());
            match command {
                CommunityCommands::Posts { tab, search } => {
                    let tab: FeedTab = tab.parse()?;
                    for post in feed.posts(tab, search.as_deref()) {
                        println!(
                            "{:<10} {:<56} {} likes · {} comments",
                            post.id, post.title, post.likes_count, post.comments_count
                        );
                    }
                }
                CommunityCommands::Show { id } => {
                    let post = feed
                        .post(&id)
                        .with_context(|| format!("Post not found: {}", id))?;
                    println!("{}", post.title);
                    println!("by {} · {} likes · {} comments", post.user_name, post.likes_count, post.comments_count);
                    println!();
                    println!("{}", post.content);
                    println!();
                    println!("Tags: {}", post.tags.join(", "));
                    let comments = feed.comments(&id);
                    if !comments.is_empty() {
                        println!();
                        for comment in comments {
                            println!("- {} ({} likes):", comment.user_name, comment.likes_count);
                            println!("  {}", comment.content);
                        }
                    }
                }
            }
        }
        Some(Commands::Config { show, reset, path }) => {
            if reset {
                crate::config::reset_config()?;
            } else if path {
                println!("{}", crate::config::config_path()?.display());
            } else if show {
                crate::config::show_config()?;
            } else {
                println!("Configuration options:");
                println!("  --show    Display current configuration");
                println!("  --reset   Reset configuration to defaults");
                println!("  --path    Print the config file path");
            }
        }
    }

    Ok(())
}

fn open_store(config: &Config) -> Result<LocalStore> {
    LocalStore::from_config(config)
}

fn open_auth(config: &Config) -> Result<AuthService> {
    Ok(AuthService::new(open_store(config)?, config)?)
}

fn open_projects(config: &Config) -> Result<ProjectStore> {
    ProjectStore::load(open_store(config)?, config.latency.clone())
}

/// Progress commands need a signed-in user to scope the storage key
fn open_progress(config: &Config) -> Result<ProgressStore> {
    let auth = open_auth(config)?;
    let user = auth
        .current_user()
        .context("Not logged in. Use 'codecampus auth login' first.")?;
    ProgressStore::load(open_store(config)?, &user.id, config.latency.clone())
}

fn require_login(config: &Config) -> Result<()> {
    let auth = open_auth(config)?;
    auth.current_user()
        .context("Not logged in. Use 'codecampus auth login' first.")?;
    Ok(())
}
