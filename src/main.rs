//! Guild Build - Entry Point
//!
//! Loads the rating table, applies command-line overrides to the
//! configuration, then either prints a listing or comparison report or
//! starts the interactive terminal UI.

use clap::{Parser, Subcommand, ValueEnum};
use guild_build::core::config::ComparisonConfig;
use guild_build::core::error::{GuildError, Result};
use guild_build::display::RatingBands;
use guild_build::model::SkillComparisonModel;
use guild_build::report::ComparisonReport;
use guild_build::table::load_table;
use guild_build::ui;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Compare job-role skill profiles across seniority levels
#[derive(Parser, Debug)]
#[command(name = "guild-build")]
#[command(about = "Compare job-role skill ratings, similarity and level trends")]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rating table JSON (overrides the config file)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Ordered level names, most junior first
    #[arg(long, global = true, value_delimiter = ',')]
    levels: Option<Vec<String>>,

    /// Load tables whose roles or levels disagree on the skill set
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List role names in table order
    Roles,
    /// List level names, most junior first
    Levels,
    /// List the skills rated for a role and level
    Skills {
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        level: Option<String>,
    },
    /// Print the comparison for one selection
    Compare {
        #[arg(long)]
        role_a: Option<String>,
        #[arg(long)]
        level_a: Option<String>,
        #[arg(long)]
        role_b: Option<String>,
        #[arg(long)]
        level_b: Option<String>,
        /// Skill to include (repeatable); all skills when omitted
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Interactive terminal UI
    Tui {
        /// Write logs here instead of discarding them
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;
    init_tracing(&config, &args.command)?;
    tracing::debug!("Effective config: {:?}", config);

    let table = load_table(&config)?;
    let mut model = SkillComparisonModel::new(table);
    let bands = RatingBands::new(config.band_marks);

    match args.command {
        Command::Roles => {
            for role in model.role_names() {
                println!("{}", role);
            }
        }
        Command::Levels => {
            for level in model.level_names() {
                println!("{}", level);
            }
        }
        Command::Skills { role, level } => {
            if let Some(role) = role {
                model.set_role_a(&role)?;
            }
            if let Some(level) = level {
                model.set_level_a(&level)?;
            }
            for skill in model.skill_universe() {
                println!("{}", skill);
            }
        }
        Command::Compare {
            role_a,
            level_a,
            role_b,
            level_b,
            skills,
            format,
        } => {
            if let Some(role) = role_a {
                model.set_role_a(&role)?;
            }
            if let Some(level) = level_a {
                model.set_level_a(&level)?;
            }
            model.set_role_b(role_b.as_deref())?;
            if let Some(level) = level_b {
                model.set_level_b(&level)?;
            }
            if !skills.is_empty() {
                model.clear_all();
                for skill in &skills {
                    if !model.is_selected(skill) {
                        model.toggle_skill(skill);
                    }
                }
            } else {
                model.select_all();
            }

            let report = ComparisonReport::from_model(&model)?;
            match format {
                Format::Text => print!("{}", report.to_text(&bands)),
                Format::Json => println!("{}", report.to_json()?),
            }
        }
        Command::Tui { .. } => ui::run(&mut model, &bands)?,
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
fn resolve_config(args: &Args) -> Result<ComparisonConfig> {
    let mut config = match &args.config {
        Some(path) => ComparisonConfig::load(path)?,
        None => ComparisonConfig::default(),
    };
    if let Some(data) = &args.data {
        config.data_path = Some(data.clone());
    }
    if let Some(levels) = &args.levels {
        config.levels = Some(levels.clone());
    }
    if args.lenient {
        config.strict = false;
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &ComparisonConfig, command: &Command) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| GuildError::Config(format!("invalid log filter: {}", e)))?;

    match command {
        // the TUI owns the screen; logs go to a file or nowhere
        Command::Tui { log_file: Some(path) } => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        Command::Tui { log_file: None } => {}
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
