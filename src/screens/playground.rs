//! Playground screen - editor, simulated runner, and saved projects

use anyhow::Result;

use super::{
    parse_nav, print_dim, print_error, print_global_help, print_header, print_success,
    with_spinner, Nav, Session,
};
use crate::catalog::{self, Language};
use crate::playground;

pub(super) async fn run(session: &mut Session) -> Result<Nav> {
    let languages = catalog::catalog().languages();
    let mut language: &'static Language = &languages[0];
    let mut code = language.default_code.clone();
    let mut project_name = "Untitled Project".to_string();

    render(language, &project_name, &code);

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

        match input.split_whitespace().next().unwrap_or("") {
            "/help" => {
                print_global_help();
                print_dim("  run              Run the code (simulated)\n");
                print_dim("  edit             Re-enter the code\n");
                print_dim("  lang <id>        Switch language (resets the code)\n");
                print_dim("  name <text>      Rename the project\n");
                print_dim("  save             Save the project\n");
                print_dim("  projects         List saved projects\n");
                print_dim("  load <number>    Load a saved project\n");
                print_dim("  delete <number>  Delete a saved project\n");
                print_dim("  show             Show the current code\n");
            }
            "run" => {
                let output = with_spinner(
                    "Running...",
                    playground::run_code(&language.id, &code, &session.config.latency),
                )
                .await;
                print_dim("  ── console output ──\n");
                for line in output.lines() {
                    println!("  {}", line);
                }
                println!();
            }
            "show" => render(language, &project_name, &code),
            "edit" => {
                if let Some(entered) = read_code(session)? {
                    code = entered;
                    print_success("  Code updated.\n");
                }
            }
            "lang" => {
                let id = input.split_whitespace().nth(1).unwrap_or("");
                match catalog::catalog().language(id) {
                    Some(next) => {
                        // Switching resets the buffer, so confirm when edited
                        if code != language.default_code
                            && !session.confirm("Changing language will reset your code. Continue?")?
                        {
                            continue;
                        }
                        language = next;
                        code = next.default_code.clone();
                        print_success(&format!("  Switched to {}.\n", next.name));
                    }
                    None => {
                        let ids: Vec<&str> =
                            languages.iter().map(|l| l.id.as_str()).collect();
                        print_error(&format!("Unknown language. Available: {}", ids.join(", ")));
                    }
                }
            }
            "name" => {
                let rest = input.strip_prefix("name").unwrap_or("").trim();
                if rest.is_empty() {
                    print_error("Usage: name <project name>");
                } else {
                    project_name = rest.to_string();
                    print_success(&format!("  Project renamed to \"{}\".\n", project_name));
                }
            }
            "save" => {
                let saved = with_spinner(
                    "Saving...",
                    session.projects.save_project(&project_name, &language.id, &code),
                )
                .await;
                match saved {
                    Ok(project) => {
                        print_success(&format!("  Saved \"{}\".\n", project.name))
                    }
                    Err(e) => print_error(&e.to_string()),
                }
            }
            "projects" => render_projects(session),
            "load" => {
                let Some(index) = parse_index(&input, session.projects.projects().len()) else {
                    print_error("Usage: load <project number> (see `projects`)");
                    continue;
                };
                let project = session.projects.projects()[index].clone();
                if code != language.default_code
                    && !session.confirm("Loading a project will replace your current code. Continue?")?
                {
                    continue;
                }
                language = catalog::catalog()
                    .language(&project.language)
                    .unwrap_or(&languages[0]);
                code = project.code.clone();
                project_name = project.name.clone();
                print_success(&format!("  Loaded \"{}\".\n", project.name));
            }
            "delete" => {
                let Some(index) = parse_index(&input, session.projects.projects().len()) else {
                    print_error("Usage: delete <project number> (see `projects`)");
                    continue;
                };
                let project = session.projects.projects()[index].clone();
                if session.confirm(&format!("Delete \"{}\"?", project.name))? {
                    session.projects.delete_project(&project.id)?;
                    print_success("  Project deleted.\n");
                }
            }
            _ => print_error("Unknown command. Type /help for the playground commands."),
        }
    }
}

fn parse_index(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.split_whitespace().nth(1)?.parse().ok()?;
    if n >= 1 && n <= len {
        Some(n - 1)
    } else {
        None
    }
}

/// Multi-line code entry, finished with a single `.` on its own line
fn read_code(session: &mut Session) -> Result<Option<String>> {
    print_dim("  Enter your code. Finish with a single `.` on its own line.\n");
    let mut lines = Vec::new();
    loop {
        let Some(line) = session.read_line("  ")? else {
            return Ok(None);
        };
        if line == "." {
            break;
        }
        lines.push(line);
    }
    Ok(Some(lines.join("\n")))
}

fn render(language: &Language, project_name: &str, code: &str) {
    print_header("Code Playground");
    println!("  Project: \x1b[1m{}\x1b[0m · Language: {}", project_name, language.name);
    println!();
    print_dim(&format!("  ── {}.{} ──\n", project_name.to_lowercase().replace(' ', "-"), language.extension));
    for line in code.lines() {
        println!("  \x1b[90m│\x1b[0m {}", line);
    }
    println!();
    print_dim("  run · edit · lang <id> · save · projects · /help\n");
}

fn render_projects(session: &Session) {
    print_header("Saved Projects");
    let projects = session.projects.projects();
    if projects.is_empty() {
        print_dim("  No saved projects.\n\n");
        return;
    }
    for (index, project) in projects.iter().enumerate() {
        println!(
            "  {}. {:<24} {:<12} updated {}",
            index + 1,
            project.name,
            project.language,
            project.updated_at.format("%Y-%m-%d %H:%M")
        );
    }
    println!();
}
