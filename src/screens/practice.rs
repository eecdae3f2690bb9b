//! Practice screen - challenge list, filters, and the simulated runner

use anyhow::Result;

use super::{
    parse_nav, print_dim, print_error, print_global_help, print_header, print_success,
    with_spinner, Nav, Session,
};
use crate::catalog::Challenge;
use crate::practice::{ChallengeFilter, ChallengeSort};

pub(super) async fn run(session: &mut Session) -> Result<Nav> {
    let mut filter = ChallengeFilter::All;
    let mut sort = ChallengeSort::Popular;
    let mut query: Option<String> = None;
    let mut redraw = true;

    loop {
        let challenges: Vec<&'static Challenge> =
            session.practice.challenges(filter, sort, query.as_deref());
        if redraw {
            render_list(session, &challenges, filter, sort, query.as_deref());
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
            print_dim("  filter <all|easy|medium|hard|completed|not-completed>\n");
            print_dim("  sort <popular|newest|difficulty-asc|difficulty-desc>\n");
            print_dim("  search <text> · clear · <number> to open a challenge\n");
            continue;
        }
        if let Some(arg) = input.strip_prefix("filter ") {
            match arg.trim().parse() {
                Ok(parsed) => {
                    filter = parsed;
                    redraw = true;
                }
                Err(e) => print_error(&e.to_string()),
            }
            continue;
        }
        if let Some(arg) = input.strip_prefix("sort ") {
            match arg.trim().parse() {
                Ok(parsed) => {
                    sort = parsed;
                    redraw = true;
                }
                Err(e) => print_error(&e.to_string()),
            }
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
            Ok(n) if n >= 1 && n <= challenges.len() => {
                run_challenge(session, challenges[n - 1]).await?;
                redraw = true;
            }
            _ => print_error("Enter a challenge number, or /help for commands."),
        }
    }
}

async fn run_challenge(session: &mut Session, challenge: &'static Challenge) -> Result<()> {
    print_header(&challenge.title);
    println!(
        "  {} · {} · ~{} min · {} completions",
        challenge.difficulty, challenge.category, challenge.estimated_minutes,
        challenge.completed_count
    );
    print_dim(&format!("  {}\n", challenge.tags.join(", ")));
    println!();
    println!("  {}", challenge.description);
    println!();
    print_dim("  ── starter code ──\n");
    for line in challenge.starter_code.lines() {
        println!("  \x1b[90m│\x1b[0m {}", line);
    }
    println!();

    loop {
        print_dim("  run · back\n");
        let Some(input) = session.prompt()? else {
            return Ok(());
        };
        match input.as_str() {
            "" => continue,
            "run" => {
                let outcome = with_spinner(
                    "Running tests...",
                    session.practice.run_attempt(&challenge.id, &challenge.starter_code),
                )
                .await?;

                println!();
                if outcome.passed {
                    print_success("  All tests passed!\n\n");
                } else {
                    print_error("Some tests failed.");
                    println!();
                }
                for line in outcome.transcript.lines() {
                    println!("  {}", line);
                }
                println!();
                if outcome.passed {
                    print_success("  Challenge completed.\n");
                    return Ok(());
                }
                print_dim("  The grader is moody today - run it again.\n");
            }
            "back" => return Ok(()),
            _ => print_error("Try run, or back."),
        }
    }
}

fn render_list(
    session: &Session,
    challenges: &[&Challenge],
    filter: ChallengeFilter,
    sort: ChallengeSort,
    query: Option<&str>,
) {
    print_header("Practice Coding");
    print_dim("  Solve challenges to improve your programming skills.\n");
    print_dim(&format!("  Filter: {:?} · Sort: {:?}", filter, sort));
    if let Some(q) = query {
        print_dim(&format!(" · Search: {}", q));
    }
    println!("\n");

    if challenges.is_empty() {
        print_dim("  No challenges match. Try a different filter or search.\n\n");
        return;
    }

    for (index, challenge) in challenges.iter().enumerate() {
        let marker = if session.practice.is_completed(&challenge.id) {
            "\x1b[32m✓\x1b[0m"
        } else {
            " "
        };
        println!(
            "  {} {}. {:<32} {:<6} {:<13} ~{} min",
            marker,
            index + 1,
            challenge.title,
            challenge.difficulty.to_string(),
            challenge.category,
            challenge.estimated_minutes
        );
    }
    println!();
    print_dim("  Enter a number to open a challenge · filter/sort/search · /help\n");
}
