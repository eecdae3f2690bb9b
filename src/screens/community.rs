//! Community screen - forum feed, post detail, and submissions

use anyhow::Result;
use chrono::Utc;

use super::{
    parse_nav, print_dim, print_error, print_global_help, print_header, print_success,
    with_spinner, Nav, Session,
};
use crate::community::{format_relative, FeedTab};

pub(super) async fn run(session: &mut Session) -> Result<Nav> {
    let mut tab = FeedTab::Latest;
    let mut query: Option<String> = None;
    let mut redraw = true;

    loop {
        let post_ids: Vec<String> = session
            .community
            .posts(tab, query.as_deref())
            .iter()
            .map(|p| p.id.clone())
            .collect();
        if redraw {
            render_feed(session, tab, query.as_deref());
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
            print_dim("  tab <latest|popular|bookmarked>\n");
            print_dim("  search <text> · clear\n");
            print_dim("  <number>          Open a post\n");
            print_dim("  like <number>     Toggle like\n");
            print_dim("  mark <number>     Toggle bookmark\n");
            print_dim("  new               Start a discussion\n");
            continue;
        }
        if let Some(arg) = input.strip_prefix("tab ") {
            match arg.trim().parse() {
                Ok(parsed) => {
                    tab = parsed;
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
        if input == "new" {
            new_post_form(session).await?;
            redraw = true;
            continue;
        }
        if let Some(arg) = input.strip_prefix("like ") {
            match indexed(&post_ids, arg) {
                Some(post_id) => {
                    session.community.toggle_post_like(&post_id)?;
                    redraw = true;
                }
                None => print_error("Usage: like <post number>"),
            }
            continue;
        }
        if let Some(arg) = input.strip_prefix("mark ") {
            match indexed(&post_ids, arg) {
                Some(post_id) => {
                    session.community.toggle_bookmark(&post_id)?;
                    redraw = true;
                }
                None => print_error("Usage: mark <post number>"),
            }
            continue;
        }

        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= post_ids.len() => {
                post_detail(session, &post_ids[n - 1]).await?;
                redraw = true;
            }
            _ => print_error("Enter a post number, or /help for commands."),
        }
    }
}

fn indexed(post_ids: &[String], arg: &str) -> Option<String> {
    let n: usize = arg.trim().parse().ok()?;
    if n >= 1 && n <= post_ids.len() {
        Some(post_ids[n - 1].clone())
    } else {
        None
    }
}

async fn post_detail(session: &mut Session, post_id: &str) -> Result<()> {
    loop {
        render_post(session, post_id);

        print_dim("  like · mark · likec <n> · comment · back\n");
        let Some(input) = session.prompt()? else {
            return Ok(());
        };
        match input.split_whitespace().next().unwrap_or("") {
            "" => continue,
            "like" => {
                session.community.toggle_post_like(post_id)?;
            }
            "mark" => {
                session.community.toggle_bookmark(post_id)?;
            }
            "likec" => {
                let comment_ids: Vec<String> = session
                    .community
                    .comments(post_id)
                    .iter()
                    .map(|c| c.id.clone())
                    .collect();
                match input
                    .split_whitespace()
                    .nth(1)
                    .and_then(|arg| indexed(&comment_ids, arg))
                {
                    Some(comment_id) => {
                        session.community.toggle_comment_like(post_id, &comment_id)?;
                    }
                    None => print_error("Usage: likec <comment number>"),
                }
            }
            "comment" => {
                let Some(user) = session.auth.current_user().cloned() else {
                    print_error("Log in to comment.");
                    continue;
                };
                let Some(content) = session.prompt_field("Comment")? else {
                    continue;
                };
                let result = with_spinner(
                    "Posting comment...",
                    session.community.submit_comment(&user, post_id, &content),
                )
                .await;
                match result {
                    Ok(_) => print_success("  Comment posted.\n"),
                    Err(e) => print_error(&e.to_string()),
                }
            }
            "back" => return Ok(()),
            _ => print_error("Try like, mark, likec <n>, comment, or back."),
        }
    }
}

async fn new_post_form(session: &mut Session) -> Result<()> {
    let Some(user) = session.auth.current_user().cloned() else {
        print_error("Log in to post.");
        return Ok(());
    };

    print_header("Start a Discussion");
    let Some(title) = session.prompt_field("Title")? else {
        return Ok(());
    };
    let Some(content) = session.prompt_field("Content")? else {
        return Ok(());
    };
    let Some(tags) = session.prompt_field("Tags (comma-separated)")? else {
        return Ok(());
    };

    let result = with_spinner(
        "Publishing...",
        session.community.submit_post(&user, &title, &content, &tags),
    )
    .await;
    match result {
        Ok(post) => print_success(&format!("  Posted \"{}\".\n", post.title)),
        Err(e) => print_error(&e.to_string()),
    }
    Ok(())
}

fn render_feed(session: &Session, tab: FeedTab, query: Option<&str>) {
    print_header("Community Forum");
    print_dim("  Connect, share, and learn with fellow developers.\n");
    print_dim(&format!("  Tab: {:?}", tab));
    if let Some(q) = query {
        print_dim(&format!(" · Search: {}", q));
    }
    println!("\n");

    let posts = session.community.posts(tab, query);
    if posts.is_empty() {
        match tab {
            FeedTab::Bookmarked => {
                print_dim("  No bookmarked posts yet.\n");
                print_dim("  Bookmark interesting discussions to find them easily later.\n\n");
            }
            _ if query.is_some() => {
                print_dim("  No posts found. Try different search terms.\n\n")
            }
            _ => {
                print_dim("  No posts yet. Be the first to start a discussion.\n\n")
            }
        }
        return;
    }

    let now = Utc::now();
    for (index, post) in posts.iter().enumerate() {
        let liked = if post.is_liked { "\x1b[36m♥\x1b[0m" } else { "♡" };
        let marked = if post.is_bookmarked { "\x1b[36m■\x1b[0m" } else { " " };
        println!("  {}. \x1b[1m{}\x1b[0m {}", index + 1, post.title, marked);
        print_dim(&format!(
            "     {} · {} · {} {} · {} comments · {}\n",
            post.user_name,
            format_relative(post.created_at, now),
            liked,
            post.likes_count,
            post.comments_count,
            post.tags.join(", ")
        ));
    }
    println!();
    print_dim("  Enter a number to open a post · new · tab <name> · /help\n");
}

fn render_post(session: &Session, post_id: &str) {
    let Some(post) = session.community.post(post_id) else {
        return;
    };
    let now = Utc::now();

    print_header(&post.title);
    print_dim(&format!(
        "  {} · {}\n",
        post.user_name,
        format_relative(post.created_at, now)
    ));
    println!();
    println!("  {}", post.content);
    println!();
    print_dim(&format!("  Tags: {}\n", post.tags.join(", ")));
    println!(
        "  {} {} likes · {} comments{}",
        if post.is_liked { "\x1b[36m♥\x1b[0m" } else { "♡" },
        post.likes_count,
        post.comments_count,
        if post.is_bookmarked { " · bookmarked" } else { "" }
    );

    let comments = session.community.comments(post_id);
    if !comments.is_empty() {
        print_header("Comments");
        for (index, comment) in comments.iter().enumerate() {
            println!(
                "  {}. {} · {}",
                index + 1,
                comment.user_name,
                format_relative(comment.created_at, now)
            );
            println!("     {}", comment.content);
            print_dim(&format!(
                "     {} {} likes\n",
                if comment.is_liked { "♥" } else { "♡" },
                comment.likes_count
            ));
        }
    }
    println!();
}
