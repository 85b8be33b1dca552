use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use git_semantic::actions::{self, PushCredentials};
use git_semantic::config;
use git_semantic::git::Git2Repository;
use git_semantic::{logging, ui, ReleaseInfoBuilder};

#[derive(clap::Parser)]
#[command(
    name = "git-semantic",
    version,
    about = "Compute the next semantic version from conventional commits"
)]
struct Args {
    #[arg(default_value = ".", help = "Path inside the repository")]
    path: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the release info as JSON")]
    json: bool,

    #[arg(long, help = "Tag HEAD with the next version")]
    tag: bool,

    #[arg(long, help = "Push branches and tags to the remote (experimental)")]
    push: bool,

    #[arg(long, env = "GIT_SEMANTIC_USER", default_value = "", help = "Push user name")]
    user: String,

    #[arg(
        long,
        env = "GIT_SEMANTIC_PASSWORD",
        default_value = "",
        hide_env_values = true,
        help = "Push password, or key passphrase for ssh remotes"
    )]
    password: String,

    #[arg(
        long,
        env = "GIT_SEMANTIC_KEY",
        default_value = "~/.ssh/id_rsa",
        help = "Private key for ssh remotes"
    )]
    key: String,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(short, long, help = "Only log errors")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.quiet, args.verbose);

    if let Err(e) = run(args) {
        tracing::error!(error = %e, "fatal error");
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let repo = Git2Repository::open(&args.path)
        .with_context(|| format!("Cannot open repository at {}", args.path.display()))?;

    let info = ReleaseInfoBuilder::from_config(&config.classification)
        .build(&repo)
        .context("Failed to compute release info")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        ui::display_release_info(&info);
    }

    if args.tag {
        match actions::create_release_tag(&repo, &info, &config.tag_prefix)? {
            Some(tag) if !args.json => ui::display_success(&format!("Created tag: {}", tag)),
            _ => {}
        }
    }

    if args.push {
        if !args.json {
            ui::display_status(&format!("Pushing to {}", config.push.remote));
        }
        let credentials = PushCredentials {
            user: args.user,
            password: args.password,
            key: args.key,
        };
        actions::push_experimental(&repo, &config.push.remote, &credentials)
            .with_context(|| format!("Failed to push to '{}'", config.push.remote))?;
        if !args.json {
            ui::display_success(&format!("Pushed to {}", config.push.remote));
        }
    }

    Ok(())
}
