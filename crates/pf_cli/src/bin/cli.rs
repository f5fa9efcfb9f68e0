use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::*;
use pf_cli::args::valid_section;
use pf_cli::terminal;
use pf_content::Portfolio;
use pf_navigation::section::SectionId;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Cli {
    /// JSON file with the portfolio content, instead of the built-in page
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the navigable sections, in page order
    Sections,
    /// Print the page to the terminal
    Render {
        /// Only print this section (home, about, experience, projects, contact)
        #[arg(short, long, value_parser = valid_section)]
        section: Option<SectionId>,
    },
    /// Write the page as a standalone HTML document
    Export {
        /// Output path of the HTML file
        #[arg(short, long, default_value = "./site/index.html")]
        out: PathBuf,
    },
}

fn load_portfolio(file: Option<&PathBuf>) -> Portfolio {
    match file {
        Some(path) => match Portfolio::load(path) {
            Ok(portfolio) => portfolio,
            Err(e) => {
                error!(path = %path.display(), "Failed to load content: {}", e);
                println!("{}: {}", "Could not load content".red(), e);
                std::process::exit(1)
            }
        },
        None => Portfolio::builtin(),
    }
}

fn main() {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let portfolio = load_portfolio(cli.file.as_ref());

    match cli.command {
        Commands::Sections => {
            for section in portfolio.anchors() {
                println!("{:<12}{}", section.as_str().cyan(), section.title());
            }
        }
        Commands::Render { section } => {
            let text = match section {
                Some(section) => terminal::render_section(&portfolio, section),
                None => terminal::render(&portfolio),
            };

            if text.is_empty() {
                println!("{}", "This portfolio has no such section".yellow());
            } else {
                print!("{}", text);
            }
        }
        Commands::Export { out } => {
            info!(out = %out.display(), "Export portfolio");

            match pf_export::write_html(&portfolio, &out) {
                Ok(()) => println!("{} {}", "Exported".green(), out.display()),
                Err(e) => {
                    error!("Export failed: {}", e);
                    println!("{}: {}", "Export failed".red(), e);
                    std::process::exit(1)
                }
            }
        }
    }
}
