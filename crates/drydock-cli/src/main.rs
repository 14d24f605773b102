mod commands;
mod workdir;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::TaskContext;

#[derive(Parser)]
#[command(name = "drydock", about = "Build, run, and publish the containerized site builder")]
#[command(version)]
struct Cli {
    /// Local configuration tier to merge on top of the global one
    #[arg(long, short = 'l', global = true)]
    local: Option<String>,

    /// Change into this directory before doing anything else
    #[arg(long, short = 'C', global = true)]
    chdir: Option<PathBuf>,

    /// Print synthesized commands instead of executing them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the image from the configured context
    Build {
        /// Build against the remote registry image name
        #[arg(long)]
        remote: bool,
        /// Tag for the image
        #[arg(long, default_value = "")]
        tag: String,
        /// Skip the build cache
        #[arg(long)]
        no_cache: bool,
    },
    /// Run the container over the configured volumes
    Run {
        /// Pull the image from the registry first
        #[arg(long)]
        remote: bool,
        /// Tag for the image
        #[arg(long, default_value = "")]
        tag: String,
        /// Command to run instead of the image default
        #[arg(long, default_value = "")]
        command: String,
    },
    /// Open an interactive shell in the container
    Shell {
        /// Pull the image from the registry first
        #[arg(long)]
        remote: bool,
        /// Tag for the image
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Log in to the configured registry
    Login,
    /// Pull the image from the registry
    Pull {
        /// Tag for the image
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Push the image to the registry
    Push {
        /// Tag for the image
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Build with a cold cache and push the result
    Release {
        /// Tag for the image
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Fetch a URL with retrying GET and print the body
    Probe {
        url: String,
        /// Per-attempt timeout in seconds
        #[arg(long, default_value_t = 6)]
        timeout: u64,
        /// Additional attempts after the first
        #[arg(long, default_value_t = 3)]
        retries: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Restores the previous directory when main returns.
    let _guard = match &cli.chdir {
        Some(dir) => Some(workdir::enter(dir)?),
        None => None,
    };

    let ctx = TaskContext {
        config_dir: PathBuf::from("."),
        local: cli.local,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Build {
            remote,
            tag,
            no_cache,
        } => commands::build(&ctx, remote, &tag, no_cache).await?,
        Commands::Run {
            remote,
            tag,
            command,
        } => commands::run(&ctx, remote, &tag, &command).await?,
        Commands::Shell { remote, tag } => commands::shell(&ctx, remote, &tag).await?,
        Commands::Login => commands::login(&ctx).await?,
        Commands::Pull { tag } => commands::pull(&ctx, &tag).await?,
        Commands::Push { tag } => commands::push(&ctx, &tag).await?,
        Commands::Release { tag } => commands::release(&ctx, &tag).await?,
        Commands::Probe {
            url,
            timeout,
            retries,
        } => commands::probe(&url, timeout, retries).await?,
    }

    Ok(())
}
