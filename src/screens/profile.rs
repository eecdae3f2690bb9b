//! Profile screen - user card, stats, badges, and achievements
//!
//! Badges and achievement progress are derived from the progress store and
//! practice session rather than stored anywhere.

use anyhow::Result;

use super::{
    parse_nav, print_dim, print_error, print_global_help, print_header, print_success,
    progress_bar, with_spinner, Nav, Session,
};
use crate::auth::UserPatch;
use crate::catalog;

pub(super) async fn run(session: &mut Session) -> Result<Nav> {
    render(session);

    loop {
        let Some(input) = session.prompt()? else {
            return Ok(Nav::Exit);
        };
        if input.is_empty() {
            continue;
        }
        if let Some(nav) = parse_nav(&input) {
            return Ok(nav);
        }

        match input.as_str() {
            "/help" => {
                print_global_help();
                print_dim("  edit      Change your display name\n");
                print_dim("  refresh   Redraw the profile\n");
                print_dim("  logout    Sign out\n");
            }
            "edit" => {
                let Some(name) = session.prompt_field("New name")? else {
                    continue;
                };
                if name.trim().is_empty() {
                    print_error("Name cannot be empty.");
                    continue;
                }
                let patch = UserPatch { name: Some(name.trim().to_string()), ..Default::default() };
                let result =
                    with_spinner("Updating profile...", session.auth.update_user(patch)).await;
                match result {
                    Ok(user) => print_success(&format!("  Name updated to {}.\n", user.name)),
                    Err(e) => print_error(&e.to_string()),
                }
            }
            "refresh" => render(session),
            "logout" => return Ok(Nav::Logout),
            _ => print_error("Try edit, refresh, logout, or /help."),
        }
    }
}

fn render(session: &Session) {
    let Some(user) = session.auth.current_user() else {
        return;
    };

    print_header(&user.name);
    print_dim(&format!("  {}\n", user.email));
    println!();
    println!("  Level: \x1b[1m{}\x1b[0m · {} XP", user.level, user.experience_points);
    match user.level.next_threshold() {
        Some(next) => {
            println!(
                "  {} {} XP to next level",
                progress_bar(user.experience_points as usize, next as usize, 20),
                next.saturating_sub(user.experience_points)
            );
        }
        None => print_dim("  Top level reached.\n"),
    }

    let stats = session
        .progress
        .as_ref()
        .map(|p| p.overall_progress())
        .unwrap_or_default();

    print_header("Stats");
    println!("  Lessons completed     {}", stats.total_completed);
    println!("  Overall progress      {}%", stats.percentage_completed);
    println!("  Day streak            {}", stats.streak_days);
    println!(
        "  Study time            {}h {}m",
        stats.total_study_time / 60,
        stats.total_study_time % 60
    );
    println!(
        "  Challenges solved     {}/{}",
        session.practice.completed_count(),
        catalog::catalog().challenges().len()
    );
    if !stats.completed_by_category.is_empty() {
        let mut categories: Vec<_> = stats.completed_by_category.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        print_dim("  By category:\n");
        for (category, count) in categories {
            print_dim(&format!("    {:<18} {}\n", category, count));
        }
    }

    render_badges(session);
    render_achievements(session);

    println!();
    print_dim("  edit · logout · /help\n");
}

fn render_badges(session: &Session) {
    let stats = session
        .progress
        .as_ref()
        .map(|p| p.overall_progress())
        .unwrap_or_default();
    let course_completed = session
        .progress
        .as_ref()
        .map(|p| p.records().any(|r| r.is_completed))
        .unwrap_or(false);

    let badges: [(&str, bool); 3] = [
        ("First Course", course_completed),
        ("Code Newbie", session.practice.completed_count() > 0),
        ("7-Day Streak", stats.streak_days >= 7),
    ];

    print_header("Badges");
    for (name, earned) in badges {
        if earned {
            println!("  \x1b[33m★\x1b[0m {}", name);
        } else {
            print_dim(&format!("  ☆ {} (locked)\n", name));
        }
    }
}

fn render_achievements(session: &Session) {
    let achievements = [
        ("JavaScript Basics", course_percent(session, "js-fundamentals")),
        ("React Apprentice", course_percent(session, "react-hooks")),
        ("Problem Solver", challenge_percent(session)),
    ];

    print_header("Achievements");
    for (name, percent) in achievements {
        println!(
            "  {:<20} {} {:>3}%",
            name,
            progress_bar(percent as usize, 100, 12),
            percent
        );
    }
}

/// Percentage of a course's lessons completed
fn course_percent(session: &Session, course_id: &str) -> u32 {
    let total = catalog::catalog()
        .course(course_id)
        .map(|c| c.total_lessons())
        .unwrap_or(0);
    if total == 0 {
        return 0;
    }
    let completed = session
        .progress
        .as_ref()
        .and_then(|p| p.course_progress(course_id))
        .map(|r| r.completed_lessons.len())
        .unwrap_or(0);
    ((completed.min(total) as f64 / total as f64) * 100.0).round() as u32
}

/// Percentage of catalog challenges completed this session
fn challenge_percent(session: &Session) -> u32 {
    let total = catalog::catalog().challenges().len();
    if total == 0 {
        return 0;
    }
    let completed = session.practice.completed_count().min(total);
    ((completed as f64 / total as f64) * 100.0).round() as u32
}
