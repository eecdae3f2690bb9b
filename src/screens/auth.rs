//! Login and signup screens
//!
//! Form errors are shown inline at the submit boundary and the form
//! re-prompts; nothing is retried automatically.

use anyhow::Result;

use super::{print_dim, print_error, print_header, print_success, with_spinner, Session};

/// Run the auth screens until the user is signed in.
///
/// Returns `false` when the user quits instead of signing in.
pub(super) async fn run(session: &mut Session) -> Result<bool> {
    print_header("Welcome to CodeCampus");
    print_dim("  Learn JavaScript, TypeScript, React and more - right from your terminal.\n");
    print_dim("  Track progress, solve challenges, and join the community.\n");
    println!();
    print_dim("  login · signup · exit\n");
    println!();

    loop {
        let Some(input) = session.prompt()? else {
            return Ok(false);
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "login" | "/login" => {
                if login_form(session).await? {
                    return Ok(true);
                }
            }
            "signup" | "/signup" => {
                if signup_form(session).await? {
                    return Ok(true);
                }
            }
            "exit" | "quit" | "/exit" | "/quit" => return Ok(false),
            "help" | "/help" => {
                print_dim("  login   Sign in with your email and password\n");
                print_dim("  signup  Create a new account\n");
                print_dim("  exit    Quit\n");
            }
            other => {
                print_error(&format!("Unknown command '{}'. Try login, signup, or exit.", other));
            }
        }
    }
}

async fn login_form(session: &mut Session) -> Result<bool> {
    print_header("Log in");
    print_dim(&format!("  Demo account: {} / {}\n", session.config.demo.email, session.config.demo.password));
    println!();

    let Some(email) = session.prompt_field("Email")? else {
        return Ok(false);
    };
    let Some(password) = session.prompt_field("Password")? else {
        return Ok(false);
    };

    let result = with_spinner("Signing in...", session.auth.login(&email, &password)).await;

    match result {
        Ok(user) => {
            print_success(&format!("\n  Welcome back, {}!\n\n", user.name));
            Ok(true)
        }
        Err(e) => {
            print_error(&e.to_string());
            Ok(false)
        }
    }
}

async fn signup_form(session: &mut Session) -> Result<bool> {
    print_header("Create your account");

    let Some(name) = session.prompt_field("Name")? else {
        return Ok(false);
    };
    let Some(email) = session.prompt_field("Email")? else {
        return Ok(false);
    };
    let Some(password) = session.prompt_field("Password (8+ characters)")? else {
        return Ok(false);
    };

    let result =
        with_spinner("Creating account...", session.auth.signup(&name, &email, &password)).await;

    match result {
        Ok(user) => {
            print_success(&format!("\n  Welcome to CodeCampus, {}!\n", user.name));
            print_dim("  You start at Beginner with 0 XP. Complete lessons to level up.\n\n");
            Ok(true)
        }
        Err(e) => {
            print_error(&e.to_string());
            Ok(false)
        }
    }
}
