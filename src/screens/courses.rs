//! Course catalog screens - explore list and course detail

use anyhow::Result;

use super::{
    parse_nav, print_dim, print_error, print_global_help, print_header, print_success,
    with_spinner, Nav, Session,
};
use crate::catalog::{self, Course};

/// Explore screen: the full catalog with search
pub(super) async fn run_explore(session: &mut Session) -> Result<Nav> {
    let mut query: Option<String> = None;
    let mut redraw = true;

    loop {
        let courses = filtered(query.as_deref());
        if redraw {
            render_list(&courses, query.as_deref());
            redraw = false;
        }

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
            print_dim("  search <text>   Filter courses\n");
            print_dim("  clear           Clear the search\n");
            print_dim("  <number>        Open a course\n");
            continue;
        }
        if let Some(q) = input.strip_prefix("search ") {
            query = Some(q.trim().to_string());
            redraw = true;
            continue;
        }
        if input == "clear" {
            query = None;
            redraw = true;
            continue;
        }

        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= courses.len() => {
                return Ok(Nav::Course(courses[n - 1].id.clone()));
            }
            _ => print_error("Enter a course number, `search <text>`, or /help."),
        }
    }
}

fn filtered(query: Option<&str>) -> Vec<&'static Course> {
    catalog::catalog()
        .courses()
        .iter()
        .filter(|course| match query {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                course.title.to_lowercase().contains(&q)
                    || course.description.to_lowercase().contains(&q)
                    || course.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
            }
            _ => true,
        })
        .collect()
}

fn render_list(courses: &[&Course], query: Option<&str>) {
    print_header("Explore Courses");
    if let Some(q) = query {
        print_dim(&format!("  Search: {}\n\n", q));
    }

    if courses.is_empty() {
        print_dim("  No courses found. Try different search terms.\n\n");
        return;
    }

    for (index, course) in courses.iter().enumerate() {
        println!("  {}. \x1b[1m{}\x1b[0m ({})", index + 1, course.title, course.level);
        print_dim(&format!("     {}\n", course.description));
        print_dim(&format!(
            "     {} lessons · {} · {}\n",
            course.total_lessons(),
            course.total_time,
            course.tags.join(", ")
        ));
    }
    println!();
    print_dim("  Enter a number to open a course · search <text> · /help\n");
}

/// Course detail screen: lessons, about, reset
pub(super) async fn run_detail(session: &mut Session, course_id: &str) -> Result<Nav> {
    let Some(course) = catalog::catalog().course(course_id) else {
        print_error(&format!("Course not found: {}", course_id));
        return Ok(Nav::Explore);
    };

    render_lessons(session, course);

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
                print_dim("  <number>   Open a lesson\n");
                print_dim("  about      Course details\n");
                print_dim("  reset      Reset course progress\n");
                print_dim("  back       Back to explore\n");
            }
            "about" => render_about(course),
            "lessons" => render_lessons(session, course),
            "back" => return Ok(Nav::Explore),
            "reset" => {
                if reset_progress(session, course).await? {
                    render_lessons(session, course);
                }
            }
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 && n <= course.lessons.len() => {
                    let lesson = &course.lessons[n - 1];
                    if catalog::catalog().lesson_content(&lesson.id).is_some() {
                        return Ok(Nav::Lesson {
                            course_id: course.id.clone(),
                            lesson_id: lesson.id.clone(),
                        });
                    }
                    print_dim("  This lesson's content isn't written yet. Check back soon.\n");
                }
                _ => print_error("Enter a lesson number, `about`, `reset`, or `back`."),
            },
        }
    }
}

async fn reset_progress(session: &mut Session, course: &Course) -> Result<bool> {
    let has_progress = session
        .progress
        .as_ref()
        .and_then(|p| p.course_progress(&course.id))
        .is_some();
    if !has_progress {
        print_dim("  No progress to reset for this course.\n");
        return Ok(false);
    }

    if !session.confirm(&format!("Reset all progress for \"{}\"?", course.title))? {
        print_dim("  Cancelled.\n");
        return Ok(false);
    }

    if let Some(progress) = session.progress.as_mut() {
        with_spinner("Resetting progress...", progress.reset_progress(&course.id)).await?;
        print_success("  Progress reset.\n");
    }
    Ok(true)
}

fn render_lessons(session: &Session, course: &Course) {
    print_header(&course.title);
    print_dim(&format!("  {}\n", course.description));

    let record = session
        .progress
        .as_ref()
        .and_then(|p| p.course_progress(&course.id));
    let completed = record.map(|r| r.completed_lessons.len()).unwrap_or(0);
    println!(
        "\n  {} {}/{} lessons completed\n",
        super::progress_bar(completed, course.total_lessons(), 20),
        completed,
        course.total_lessons()
    );

    for (index, lesson) in course.lessons.iter().enumerate() {
        let done = record
            .map(|r| r.completed_lessons.iter().any(|id| id == &lesson.id))
            .unwrap_or(false);
        let current = record
            .and_then(|r| r.current_lesson_id.as_deref())
            .map(|id| id == lesson.id)
            .unwrap_or(false);
        let marker = if done {
            "\x1b[32m✓\x1b[0m"
        } else if current {
            "\x1b[36m▶\x1b[0m"
        } else {
            " "
        };
        println!(
            "  {} {:>2}. {:<36} {} min",
            marker,
            index + 1,
            lesson.title,
            lesson.duration_minutes
        );
    }
    println!();
    print_dim("  Enter a lesson number · about · reset · back · /help\n");
}

fn render_about(course: &Course) {
    print_header(&format!("About {}", course.title));
    println!("  Instructor   {}", course.instructor);
    println!("  Rating       {:.1} ({} reviews)", course.rating, course.review_count);
    println!("  Level        {}", course.level);
    println!("  Total time   {}", course.total_time);
    println!("  Lessons      {}", course.total_lessons());
    println!("  Tags         {}", course.tags.join(", "));
    println!();
}
