use crate::cli::{ProfileArgs, SortKey};
use crate::model::{Repository, UserProfile};
use crate::style;
use std::io;

use super::{CommandContext, report_api_error};

pub fn cmd_profile(args: ProfileArgs, ctx: &CommandContext) -> i32 {
    let rt = super::runtime();

    let user = match rt.block_on(ctx.client.user(&args.username)) {
        Ok(user) => user,
        Err(e) => {
            report_api_error(&e);
            return 1;
        }
    };

    let repos = if args.starred {
        rt.block_on(ctx.client.user_starred(&args.username))
    } else {
        rt.block_on(ctx.client.user_repositories(&args.username))
    };
    let mut repos = match repos {
        Ok(repos) => repos,
        Err(e) => {
            report_api_error(&e);
            return 1;
        }
    };

    sort_repositories(&mut repos, args.sort);
    if let Some(limit) = args.limit {
        repos.truncate(limit);
    }

    let markdown = render_profile(&user, &repos, args.starred);
    let mut stdout = io::stdout();
    if let Err(e) = style::render_markdown(&markdown, &mut stdout) {
        style::error(&format!("Failed to write output: {}", e));
        return 1;
    }
    0
}

fn sort_repositories(repos: &mut [Repository], key: SortKey) {
    match key {
        SortKey::Updated => repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortKey::Stars => repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count)),
        SortKey::Forks => repos.sort_by(|a, b| b.forks_count.cmp(&a.forks_count)),
        SortKey::Name => repos.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }
}

fn render_profile(user: &UserProfile, repos: &[Repository], starred: bool) -> String {
    let mut md = String::new();
    md.push_str(&format!("# {} (@{})\n\n", user.display_name(), user.login));
    if let Some(bio) = &user.bio {
        md.push_str(&format!("> {}\n\n", bio));
    }

    let mut facts = Vec::new();
    if let Some(location) = &user.location {
        facts.push(format!("**Location:** {location}"));
    }
    if let Some(company) = &user.company {
        facts.push(format!("**Company:** {company}"));
    }
    if let Some(blog) = &user.blog
        && !blog.is_empty()
    {
        facts.push(format!("**Blog:** {blog}"));
    }
    if !facts.is_empty() {
        md.push_str(&facts.join(" • "));
        md.push_str("\n\n");
    }

    md.push_str(&format!(
        "**{}** public repos • **{}** followers • **{}** following\n\n",
        user.public_repos, user.followers, user.following
    ));

    md.push_str(if starred {
        "## Starred repositories\n\n"
    } else {
        "## Repositories\n\n"
    });
    if repos.is_empty() {
        md.push_str("*none found*\n");
        return md;
    }

    for repo in repos {
        // Starred repositories belong to other owners, so show the full name.
        let name = if starred { &repo.full_name } else { &repo.name };
        let mut line = format!(
            "- `{}` ★ {} ⑂ {}",
            name, repo.stargazers_count, repo.forks_count
        );
        if let Some(language) = &repo.language {
            line.push_str(&format!(" ({language})"));
        }
        if repo.fork {
            line.push_str(" [fork]");
        }
        if let Some(description) = &repo.description {
            line.push_str(&format!(" - {}", truncate(description, 80)));
        }
        md.push_str(&line);
        md.push('\n');
    }
    md
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}
