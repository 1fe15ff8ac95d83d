//! CLI entry point for hyprcontrol
//!
//! Provides a command-line interface for listing resolved config files,
//! viewing and searching settings, editing values, and triggering a
//! Hyprland reload.

use clap::{Parser, Subcommand};
use colored::*;
use hyprcontrol::config::{ConfigError, ConfigManager};
use hyprcontrol::core::{ConfigFile, Setting};
use hyprcontrol::ipc::{ClientMode, HyprlandClient};

const DEFAULT_CONFIG: &str = "~/.config/hypr/hyprland.conf";

#[derive(Parser)]
#[command(name = "hyprcontrol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all config files reachable from the root via source directives
    Files {
        /// Path to the root Hyprland config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: String,
    },

    /// List the settings of one resolved config file
    Settings {
        /// Path to the root Hyprland config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: String,

        /// Index of the file in the resolved set (see `files`)
        #[arg(short, long, default_value_t = 0)]
        file: usize,
    },

    /// Search keys and values across all resolved config files
    Search {
        /// Path to the root Hyprland config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: String,

        /// Case-insensitive substring to look for
        query: String,
    },

    /// Edit one setting and save the owning file
    Set {
        /// Path to the root Hyprland config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: String,

        /// Index of the file in the resolved set (see `files`)
        #[arg(short, long, default_value_t = 0)]
        file: usize,

        /// Setting key to edit (first match unless --line is given)
        key: String,

        /// New value
        value: String,

        /// Zero-based line number, for keys that appear more than once
        #[arg(short, long)]
        line: Option<usize>,

        /// Reload Hyprland after a successful save
        #[arg(long)]
        reload: bool,
    },

    /// Reload the Hyprland configuration
    Reload,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Files { config } => list_files(&config)?,
        Commands::Settings { config, file } => list_settings(&config, file)?,
        Commands::Search { config, query } => search_settings(&config, &query)?,
        Commands::Set {
            config,
            file,
            key,
            value,
            line,
            reload,
        } => {
            set_value(&config, file, &key, &value, line)?;
            if reload {
                reload_hyprland();
            }
        }
        Commands::Reload => reload_hyprland(),
    }

    Ok(())
}

/// List the resolved config files in discovery order
fn list_files(config_path: &str) -> anyhow::Result<()> {
    let manager = ConfigManager::new(config_path)?;
    let configs = manager.load(None);

    println!(
        "{}",
        format!("Config files from: {}\n", manager.root_path().display()).bold()
    );

    for (index, file) in configs.iter().enumerate() {
        let marker = if file.lines.is_empty() {
            "(missing or empty)".to_string()
        } else {
            format!("{} settings", file.settings().len())
        };

        println!(
            "{} {} {}",
            format!("[{}]", index).cyan(),
            file.path.display(),
            marker.dimmed()
        );
    }

    println!("\n{} Total: {} files", "✓".green(), configs.len());

    Ok(())
}

/// List the settings of one file in the resolved set
fn list_settings(config_path: &str, file_index: usize) -> anyhow::Result<()> {
    let manager = ConfigManager::new(config_path)?;
    let configs = manager.load(None);
    let file = select_file(&configs, file_index)?;

    println!("{}", format!("Settings in: {}\n", file.path.display()).bold());

    let settings = file.settings();
    for setting in &settings {
        println!(
            "{} {} = {}",
            format!("{:>4}", setting.line).dimmed(),
            setting.key.cyan(),
            setting.value
        );
    }

    println!("\n{} Total: {} settings", "✓".green(), settings.len());

    Ok(())
}

/// Search keys and values across every resolved file
fn search_settings(config_path: &str, query: &str) -> anyhow::Result<()> {
    let manager = ConfigManager::new(config_path)?;
    let configs = manager.load(None);
    let needle = query.trim().to_lowercase();

    let mut matches = 0;
    for (index, file) in configs.iter().enumerate() {
        for setting in file.settings() {
            if setting.key.to_lowercase().contains(&needle)
                || setting.value.to_lowercase().contains(&needle)
            {
                matches += 1;
                println!(
                    "{} {}:{} {} = {}",
                    format!("[{}]", index).cyan(),
                    file.name(),
                    setting.line.to_string().dimmed(),
                    setting.key.cyan(),
                    setting.value
                );
            }
        }
    }

    if matches == 0 {
        println!("{} No match for: {}", "✗".yellow(), query);
    } else {
        println!(
            "\n{} {} match{}",
            "✓".green(),
            matches,
            if matches == 1 { "" } else { "es" }
        );
    }

    Ok(())
}

/// Edit one setting and save the owning file through the transaction path
fn set_value(
    config_path: &str,
    file_index: usize,
    key: &str,
    value: &str,
    line: Option<usize>,
) -> anyhow::Result<()> {
    let manager = ConfigManager::new(config_path)?;
    let configs = manager.load(None);
    let file = select_file(&configs, file_index)?;

    let settings = file.settings();
    let target = match line {
        Some(line) => settings.iter().find(|s| s.line == line && s.key == key),
        None => settings.iter().find(|s| s.key == key),
    };

    let Some(target) = target else {
        return Err(ConfigError::NoSuchSetting(key.to_string(), file.path.clone()).into());
    };

    let edit = Setting::new(target.line, key, value);
    manager.save_settings(file, &[edit])?;

    println!(
        "{} Saved {} = {} (line {}) to {}",
        "✓".green(),
        key.cyan(),
        value,
        target.line,
        file.path.display()
    );

    Ok(())
}

/// Trigger `hyprctl reload` and report the outcome
///
/// A failed reload is a message and an exit code, never a panic; the
/// just-saved config stays on disk either way.
fn reload_hyprland() {
    let client = HyprlandClient::new(ClientMode::Live);

    match client.reload() {
        Ok(()) => println!(
            "{} {}",
            "✓".green().bold(),
            "Hyprland configuration reloaded successfully."
        ),
        Err(e) => {
            eprintln!("{} Failed to reload Hyprland configuration: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Resolve a file index against the loaded set
fn select_file(
    configs: &hyprcontrol::ResolvedConfigSet,
    index: usize,
) -> Result<&ConfigFile, ConfigError> {
    configs
        .get(index)
        .ok_or(ConfigError::NoSuchFile(index, configs.len()))
}
