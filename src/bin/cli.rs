//! SmartHealth CLI
//!
//! Command-line interface for SmartHealth operations:
//! - Render the dashboard for a location and session
//! - List tabs and their links
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use smarthealth::config::generate_default_config;
use smarthealth::{
    Dashboard, Layout, Navigator, Page, Render, Session, Tab, UserProfile, DASHBOARD_PATH,
};

#[derive(Parser)]
#[command(name = "smarthealth")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect SmartHealth dashboard routing and layouts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard for a location
    Render {
        /// Location to mount at, e.g. "/dashboard?tab=sleep"
        #[arg(short, long, default_value = DASHBOARD_PATH)]
        location: String,
        /// Session JSON file (same shape the browser persists)
        #[arg(short, long, conflicts_with = "signed_out")]
        session: Option<PathBuf>,
        /// Render as a signed-out visitor
        #[arg(long)]
        signed_out: bool,
    },

    /// List dashboard tabs
    Tabs,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// There is no browser history here; redirects are reported from the
/// render result instead.
struct DetachedNavigator;

impl Navigator for DetachedNavigator {
    fn navigate(&mut self, _href: &str) {}
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            location,
            session,
            signed_out,
        } => {
            let session = load_session(session, signed_out)?;
            let mut dashboard = Dashboard::mount(&location);
            let render = dashboard.render(&session, &mut DetachedNavigator);

            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&render)?),
                Format::Text => print_render(&render),
            }
        }

        Commands::Tabs => match cli.format {
            Format::Json => {
                let tabs: Vec<_> = smarthealth::tab_strip(DASHBOARD_PATH, Tab::default());
                println!("{}", serde_json::to_string_pretty(&tabs)?);
            }
            Format::Text => {
                println!("{:<12} {:<12} {}", "ID", "LABEL", "LINK");
                for link in smarthealth::tab_strip(DASHBOARD_PATH, Tab::default()) {
                    println!("{:<12} {:<12} {}", link.tab, link.label, link.href);
                }
            }
        },

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn load_session(path: Option<PathBuf>, signed_out: bool) -> anyhow::Result<Session> {
    if signed_out {
        return Ok(Session::signed_out());
    }

    match path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Session::from_json(&json).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(Session::authenticated(UserProfile::new("Guest"))),
    }
}

fn print_render(render: &Render) {
    match render {
        Render::Redirect { to } => println!("→ redirect to {}", to),
        Render::Nothing => println!("(nothing rendered)"),
        Render::Page(page) => print_page(page),
    }
}

fn print_page(page: &Page) {
    println!("{}", page.greeting);
    println!("{}", page.subtitle);
    println!();

    let strip: Vec<String> = page
        .tabs
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label)
            } else {
                link.label.clone()
            }
        })
        .collect();
    println!("{}", strip.join(" | "));
    println!();

    match &page.layout {
        Layout::Overview { figures, rows } => {
            for figure in figures {
                let trend = figure
                    .trend
                    .as_ref()
                    .map(|t| format!("  {} {}", t.trend.arrow(), t.label))
                    .unwrap_or_default();
                println!(
                    "{:<16} {:>10}  {}{}",
                    figure.title, figure.value, figure.description, trend
                );
            }
            println!();
            for [left, right] in rows {
                println!("{:<24} {}", left.title(), right.title());
            }
        }
        Layout::Single { tracker } => println!("{}", tracker.title()),
        Layout::Profile(card) => {
            println!("{}", card.name);
            println!("Member since {}", card.member_since);
            for fact in &card.facts {
                println!("  {:<8} {}", fact.label, fact.value);
            }
            println!();
            println!("Health Goals");
            for goal in &card.goals {
                println!("  {:<16} {}", goal.label, goal.target);
            }
        }
    }
}
