//! playprep CLI
//!
//! Publishing helpers for submitting PocketPilot to Google Play.

use anyhow::Result;
use clap::{Parser, Subcommand};
use playprep_android::{audit_screenshots, ScreenshotGuide, ScreenshotRequirements, Severity};
use playprep_cli::output::{format_count, format_size, Status};
use playprep_core::config::Config;
use playprep_core::error::exit_codes;
use playprep_graphic::{color_name, FontUsed};
use playprep_telemetry::{TelemetryConfig, Timer};
use playprep_verify::{render_error_json, render_json, render_report, RenderOptions, Verifier};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "playprep")]
#[command(about = "Google Play publishing helpers for PocketPilot")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Write log events to stderr as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every required publishing file is present
    Verify {
        /// Directory the file list is relative to
        #[arg(long)]
        root: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Always exit 0, even when files are missing
        #[arg(long)]
        report_only: bool,
    },

    /// Generate the feature graphic PNG
    Graphic {
        /// Output path (overrides graphic.output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print screenshot capture instructions
    Screenshots {
        /// Also audit collected screenshots against the requirements
        #[arg(long)]
        check: bool,
        /// Screenshots directory (overrides screenshots.dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    playprep_telemetry::init_with_config(
        TelemetryConfig::from_flags(cli.verbose, cli.quiet).with_json(cli.log_json),
    )?;

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            std::process::exit(exit_codes::CONFIG_ERROR);
        }
    };

    let color = !cli.no_color && io::stdout().is_terminal();

    let exit_code = match cli.command {
        Commands::Verify { root, json, report_only } => {
            run_verify(&config, root, json, report_only, cli.quiet, color)
        }
        Commands::Graphic { output } => run_graphic(&config, output, cli.quiet),
        Commands::Screenshots { check, dir } => run_screenshots(&config, check, dir, cli.quiet),
        Commands::Config => run_config(&config),
    };

    std::process::exit(exit_code);
}

fn run_verify(
    config: &Config,
    root: Option<PathBuf>,
    json: bool,
    report_only: bool,
    quiet: bool,
    color: bool,
) -> i32 {
    let timer = Timer::start("verify");
    let root = root.unwrap_or_else(|| PathBuf::from("."));
    let verify = &config.schema.verify;

    let report = match Verifier::from_config(&root, verify).run() {
        Ok(report) => report,
        Err(e) => {
            Status::error(&format!("Verification failed: {}", e));
            if json {
                let mut stdout = io::stdout().lock();
                if let Err(write_err) = render_error_json(&e, &mut stdout) {
                    Status::error(&format!("Failed to write report: {}", write_err));
                }
            }
            return e.exit_code();
        }
    };
    timer.stop();

    let mut stdout = io::stdout().lock();
    let written = if json {
        render_json(&report, &mut stdout)
    } else if quiet {
        Ok(())
    } else {
        let options = RenderOptions::from_config(verify).with_color(color);
        render_report(&report, &options, &mut stdout).map_err(playprep_core::Error::from)
    };
    if let Err(e) = written.and_then(|()| stdout.flush().map_err(playprep_core::Error::from)) {
        Status::error(&format!("Failed to write report: {}", e));
        return exit_codes::FAILURE;
    }

    match report.require_all_present() {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            tracing::info!(code = %e.code, "{}", e.message);
            if report_only {
                exit_codes::SUCCESS
            } else {
                e.exit_code()
            }
        }
    }
}

fn run_graphic(config: &Config, output: Option<PathBuf>, quiet: bool) -> i32 {
    let mut graphic = config.schema.graphic.clone();
    if let Some(path) = output {
        graphic.output = path;
    }

    match playprep_graphic::generate(&graphic) {
        Ok(outcome) => {
            if let FontUsed::TrueType(path) = &outcome.font {
                tracing::debug!(font = %path.display(), "Rendered with preferred font");
            }
            if !quiet {
                Status::success(&format!(
                    "Feature graphic created successfully at {}",
                    outcome.path.display()
                ));
                println!("Dimensions: {}x{} pixels", outcome.width, outcome.height);
                println!("Background color: {}", describe_background(&graphic.background));
                println!("Text color: {}", color_name(&graphic.accent).unwrap_or(graphic.accent.as_str()));
                println!("File size: {}", format_size(outcome.size_bytes));
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            let error = playprep_core::Error::from(e);
            Status::error(&error.to_string());
            error.exit_code()
        }
    }
}

/// `#009688 (Teal)` for named colours, the raw value otherwise
fn describe_background(value: &str) -> String {
    match color_name(value) {
        Some(name) => format!("{} ({})", value, name),
        None => value.to_string(),
    }
}

fn run_screenshots(config: &Config, check: bool, dir: Option<PathBuf>, quiet: bool) -> i32 {
    let mut screenshots = config.schema.screenshots.clone();
    if let Some(dir) = dir {
        screenshots.dir = dir;
    }
    let requirements = ScreenshotRequirements::google_play_phone();

    if !quiet {
        let guide = ScreenshotGuide::new(&config.schema.general.app_name, &screenshots, &requirements);
        let mut stdout = io::stdout().lock();
        if let Err(e) = guide.render(&mut stdout) {
            Status::error(&format!("Failed to print guide: {}", e));
            return exit_codes::FAILURE;
        }
    }

    if !check {
        return exit_codes::SUCCESS;
    }

    let audit = match audit_screenshots(&screenshots.dir, &requirements) {
        Ok(audit) => audit,
        Err(e) => {
            Status::error(&format!("Screenshot audit failed: {}", e));
            return exit_codes::FAILURE;
        }
    };

    for finding in &audit.findings {
        match finding.severity() {
            Severity::Error => Status::error(&finding.to_string()),
            Severity::Warning => Status::warning(&finding.to_string()),
        }
    }

    match audit.require_passed() {
        Ok(()) => {
            if !quiet {
                let found = format_count(audit.screenshots.len(), "screenshot", "screenshots");
                Status::success(&format!("{} in {} meet the requirements", found, audit.dir.display()));
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&e.to_string());
            e.exit_code()
        }
    }
}

fn run_config(config: &Config) -> i32 {
    match toml::to_string_pretty(&config.schema) {
        Ok(text) => {
            if let Some(path) = &config.path {
                println!("# Loaded from {}", path.display());
            }
            print!("{}", text);
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("Failed to serialize configuration: {}", e));
            exit_codes::FAILURE
        }
    }
}
