//! Home screen - continue learning, course list, featured topics

use anyhow::Result;

use super::{
    parse_nav, print_dim, print_error, print_global_help, print_header, progress_bar, Nav,
    Session,
};
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
        if input == "/help" {
            print_global_help();
            print_dim("  Enter a course number to open it.\n");
            continue;
        }

        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= catalog::catalog().courses().len() => {
                let course = &catalog::catalog().courses()[n - 1];
                return Ok(Nav::Course(course.id.clone()));
            }
            _ => print_error("Enter a course number, or /help for commands."),
        }
    }
}

fn render(session: &Session) {
    let name = session
        .auth
        .current_user()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    print_header(&format!("Hi {}, ready to learn?", name));

    // Continue-learning card: the first course with any progress
    if let Some(progress) = &session.progress {
        let continuing = catalog::catalog()
            .courses()
            .iter()
            .find(|course| {
                progress
                    .course_progress(&course.id)
                    .map(|p| !p.completed_lessons.is_empty())
                    .unwrap_or(false)
            });
        if let Some(course) = continuing {
            let record = progress.course_progress(&course.id).unwrap();
            let current = record
                .current_lesson_id
                .as_deref()
                .and_then(|id| course.lesson(id))
                .map(|l| l.title.clone())
                .unwrap_or_else(|| "Pick up where you left off".to_string());
            println!("  Continue Learning");
            println!("  \x1b[1m{}\x1b[0m — {}", course.title, current);
            println!(
                "  {} {}/{} lessons\n",
                progress_bar(record.completed_lessons.len(), course.total_lessons(), 20),
                record.completed_lessons.len(),
                course.total_lessons()
            );
        }
    }

    println!("  My Courses");
    for (index, course) in catalog::catalog().courses().iter().enumerate() {
        let completed = session
            .progress
            .as_ref()
            .and_then(|p| p.course_progress(&course.id))
            .map(|r| r.completed_lessons.len())
            .unwrap_or(0);
        println!(
            "  {}. {:<28} {} {:>2}/{} · {}",
            index + 1,
            course.title,
            progress_bar(completed, course.total_lessons(), 12),
            completed,
            course.total_lessons(),
            course.level,
        );
    }
    println!();

    println!("  Featured Topics");
    print_dim(&format!("  {}\n", catalog::featured_topics().join(" · ")));
    println!();
    print_dim("  Enter a course number to open it · /help for commands\n");
}
