use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::{eyre, Result};
use comfy_table::{Attribute, Cell, Color, Table};
use flixlens_config::{Config, PathManager, CONFIG_DIR_ENV};
use owo_colors::OwoColorize;
use tracing::info;

pub fn run_config(cmd: ConfigCommands, config: &Config, paths: &PathManager, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(config, paths, output),
        ConfigCommands::Init { force } => init_config(force, paths, output),
        ConfigCommands::Path => {
            let config_file = paths.config_file();
            if output.is_human() {
                println!("{}", config_file.display());
            } else {
                output.json(&serde_json::json!({ "path": config_file.display().to_string() }));
            }
            Ok(())
        }
    }
}

fn show_config(config: &Config, paths: &PathManager, output: &Output) -> Result<()> {
    let config_file = paths.config_file();
    let validation = config.validate().err().map(|e| e.to_string());

    if !output.is_human() {
        let settings = serde_json::to_value(config)?;
        let document = serde_json::json!({
            "path": config_file.display().to_string(),
            "exists": config_file.exists(),
            "config": settings,
            "error": validation,
        });
        output.json(&document);
        return Ok(());
    }

    if output.is_quiet() {
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.info("Using built-in defaults. Run 'flixlens config init' to write them to disk.");
        println!();
    }

    let mut info_table = Table::new();
    info_table.set_header(vec![
        Cell::new("Config File").add_attribute(Attribute::Bold),
        Cell::new(config_file.display().to_string()),
    ]);
    info_table.add_row(vec![Cell::new("Override"), Cell::new(format!("${}", CONFIG_DIR_ENV))]);
    info_table.load_preset(comfy_table::presets::UTF8_FULL);
    info_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", info_table);
    println!();

    let analysis = &config.analysis;
    let mut analysis_table = section_table("Analysis");
    analysis_table.add_row(vec![Cell::new("Top titles"), Cell::new(analysis.top_titles_limit)]);
    analysis_table.add_row(vec![Cell::new("Word cloud size"), Cell::new(analysis.word_cloud_limit)]);
    analysis_table.add_row(vec![Cell::new("Top searches"), Cell::new(analysis.top_searches_limit)]);
    analysis_table.add_row(vec![Cell::new("Smoothing window"), Cell::new(analysis.smoothing_window)]);
    println!("{}", analysis_table);
    println!();

    let mut parsing_table = section_table("Parsing");
    parsing_table.add_row(vec![
        Cell::new("UTC offset"),
        Cell::new(format_offset(config.parsing.utc_offset_minutes)),
    ]);
    println!("{}", parsing_table);
    println!();

    let mut logging_table = section_table("Logging");
    let log_file = match &config.logging.file {
        Some(path) => path.display().to_string(),
        None => "stderr".dimmed().to_string(),
    };
    logging_table.add_row(vec![Cell::new("File"), Cell::new(log_file)]);
    println!("{}", logging_table);
    println!();

    match validation {
        None => output.success("Configuration is valid"),
        Some(e) => output.warn(format!("Configuration is invalid: {}", e)),
    }

    Ok(())
}

fn init_config(force: bool, paths: &PathManager, output: &Output) -> Result<()> {
    let config_file = paths.config_file();
    if config_file.exists() && !force {
        return Err(eyre!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
    }

    paths.ensure_directories().map_err(|e| eyre!("{}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    info!(path = %config_file.display(), "Wrote default configuration");
    output.success(format!("Configuration written to {}", config_file.display()));
    Ok(())
}

fn section_table(title: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(format!("{} Configuration", title)).fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// `"UTC+05:30"` style label
fn format_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}
