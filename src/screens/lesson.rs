//! Lesson viewer - content blocks, quizzes, and completion
//!
//! Completion is gated on answering every quiz in the lesson correctly,
//! then records progress and awards XP. Completing a lesson with a
//! follow-up offers to continue straight into it.

use anyhow::Result;

use super::{
    parse_nav, print_dim, print_error, print_header, print_success, with_spinner, Nav, Session,
};
use crate::auth::XP_PER_LESSON;
use crate::catalog::{self, ContentBlock, LessonContent};

pub(super) async fn run(
    session: &mut Session,
    course_id: &str,
    lesson_id: &str,
) -> Result<Nav> {
    let Some(content) = catalog::catalog().lesson_content(lesson_id) else {
        print_error(&format!("Lesson content not found: {}", lesson_id));
        return Ok(Nav::Course(course_id.to_string()));
    };

    render(content);

    // Walk the quizzes inline; all must be answered correctly to complete
    let mut all_correct = true;
    for block in &content.blocks {
        if let ContentBlock::Quiz { question, options, answer } = block {
            if !run_quiz(session, question, options, *answer)? {
                all_correct = false;
            }
        }
    }

    let already_done = session
        .progress
        .as_ref()
        .and_then(|p| p.course_progress(course_id))
        .map(|r| r.completed_lessons.iter().any(|id| id == lesson_id))
        .unwrap_or(false);

    if already_done {
        print_dim("  You've already completed this lesson.\n");
    } else if !all_correct {
        print_dim("  Answer every quiz correctly to mark this lesson complete.\n");
    }

    loop {
        print_dim("  complete · next · prev · back\n");
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
            "complete" | "done" => {
                if already_done {
                    print_dim("  Already completed.\n");
                    continue;
                }
                if !all_correct {
                    print_error("Not yet - there's a quiz answer to fix. Re-open the lesson to retry.");
                    continue;
                }
                return complete(session, course_id, content).await;
            }
            "next" => {
                if let Some(next_id) = &content.next_lesson_id {
                    if catalog::catalog().lesson_content(next_id).is_some() {
                        return Ok(Nav::Lesson {
                            course_id: course_id.to_string(),
                            lesson_id: next_id.clone(),
                        });
                    }
                    print_dim("  The next lesson's content isn't written yet.\n");
                } else {
                    print_dim("  This is the last lesson.\n");
                }
            }
            "prev" | "previous" => {
                if let Some(prev_id) = &content.prev_lesson_id {
                    if catalog::catalog().lesson_content(prev_id).is_some() {
                        return Ok(Nav::Lesson {
                            course_id: course_id.to_string(),
                            lesson_id: prev_id.clone(),
                        });
                    }
                    print_dim("  The previous lesson's content isn't written yet.\n");
                } else {
                    print_dim("  This is the first lesson.\n");
                }
            }
            "back" => return Ok(Nav::Course(course_id.to_string())),
            _ => print_error("Try complete, next, prev, or back."),
        }
    }
}

async fn complete(
    session: &mut Session,
    course_id: &str,
    content: &LessonContent,
) -> Result<Nav> {
    if let Some(progress) = session.progress.as_mut() {
        with_spinner(
            "Saving progress...",
            progress.complete_lesson(course_id, &content.id),
        )
        .await?;
    }
    let user = session.auth.award_xp(XP_PER_LESSON)?;
    print_success(&format!(
        "  Lesson complete! +{} XP ({} total, {})\n",
        XP_PER_LESSON, user.experience_points, user.level
    ));

    // Offer to roll straight into the next lesson
    if let Some(next_id) = content.next_lesson_id.clone() {
        if catalog::catalog().lesson_content(&next_id).is_some()
            && session.confirm("Continue to the next lesson?")?
        {
            return Ok(Nav::Lesson {
                course_id: course_id.to_string(),
                lesson_id: next_id,
            });
        }
    }
    Ok(Nav::Course(course_id.to_string()))
}

/// Ask one quiz question, allowing retries; returns whether it ended correct
fn run_quiz(
    session: &mut Session,
    question: &str,
    options: &[String],
    answer: usize,
) -> Result<bool> {
    print_header("Quiz");
    println!("  {}", question);
    for (index, option) in options.iter().enumerate() {
        println!("    {}. {}", index + 1, option);
    }

    loop {
        let Some(input) = session.prompt_field("Your answer (number, or skip)")? else {
            return Ok(false);
        };
        if input.eq_ignore_ascii_case("skip") {
            return Ok(false);
        }
        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => {
                if n - 1 == answer {
                    print_success("  Correct!\n");
                    return Ok(true);
                }
                print_error("Incorrect - try again, or type `skip`.");
            }
            _ => print_error("Enter the number of an option."),
        }
    }
}

fn render(content: &LessonContent) {
    print_header(&content.title);
    print_dim(&format!("  {} · {}\n", content.course_id, content.time_to_complete));
    println!();

    for block in &content.blocks {
        match block {
            ContentBlock::Text(body) => {
                for line in body.lines() {
                    if let Some(heading) = line.strip_prefix("## ") {
                        println!("  \x1b[1m{}\x1b[0m", heading);
                    } else if let Some(heading) = line.strip_prefix("# ") {
                        println!("  \x1b[1m\x1b[4m{}\x1b[0m", heading);
                    } else {
                        println!("  {}", line);
                    }
                }
                println!();
            }
            ContentBlock::Code { language, source } => {
                print_dim(&format!("  ── {} ──\n", language));
                for line in source.lines() {
                    println!("  \x1b[90m│\x1b[0m {}", line);
                }
                println!();
            }
            // Quizzes run interactively after the content
            ContentBlock::Quiz { .. } => {}
        }
    }
}
