use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{extract_title, io, markdown_to_html};
use std::path::{Path, PathBuf};
use std::process;

mod site;

#[derive(Debug, Parser)]
#[command(name = "markdown-sitegen", version, about = "Build a static HTML site from markdown")]
struct Cli {
    /// Config file (defaults to ./sitegen.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rebuild the public directory from static assets and content
    Build {
        #[arg(long)]
        content: Option<PathBuf>,
        #[arg(long)]
        template: Option<PathBuf>,
        #[arg(long)]
        public: Option<PathBuf>,
        #[arg(long = "static")]
        static_dir: Option<PathBuf>,
    },
    /// Print the HTML for one markdown file
    Render { file: PathBuf },
    /// Print the title of one markdown file
    Title { file: PathBuf },
    /// Write a default config file
    Init,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    match cli.command {
        Command::Build {
            content,
            template,
            public,
            static_dir,
        } => {
            let mut config = load_config(&config_path)?;
            if let Some(content) = content {
                config.content_dir = content;
            }
            if let Some(template) = template {
                config.template_path = template;
            }
            if let Some(public) = public {
                config.public_dir = public;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }
            site::build_site(&config)?;
        }
        Command::Render { file } => {
            let markdown = io::read_file(&file)?;
            let html = markdown_to_html(&markdown)
                .with_context(|| format!("Failed to render {}", file.display()))?;
            println!("{html}");
        }
        Command::Title { file } => {
            let markdown = io::read_file(&file)?;
            match extract_title(&markdown) {
                Some(title) => println!("{title}"),
                None => bail!("{} has no `#` heading to use as a title", file.display()),
            }
        }
        Command::Init => {
            if config_path.exists() {
                bail!("{} already exists", config_path.display());
            }
            Config::default().save_to_path(&config_path)?;
            log::info!("Wrote default config to {}", config_path.display());
        }
    }

    Ok(())
}

fn load_config(config_path: &Path) -> Result<Config> {
    match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Using config {}", config_path.display());
            Ok(config)
        }
        None => {
            log::info!(
                "No config at {}, using default layout",
                config_path.display()
            );
            Ok(Config::default())
        }
    }
}
