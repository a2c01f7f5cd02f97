use crate::output::Output;
use color_eyre::eyre::{eyre, Context, Result};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use flixlens_config::Config;
use flixlens_core::aggregate::{bucket_label, roll_up_heatmap};
use flixlens_core::text::minutes_to_hours;
use flixlens_core::DashboardReport;
use flixlens_ingest::{DashboardSession, UploadStatus};
use flixlens_models::DistributionPoint;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Width of heatmap buckets in the human view
const HEATMAP_BUCKET_HOURS: u32 = 3;
const BAR_WIDTH: usize = 24;
const WORD_CLOUD_PREVIEW: usize = 15;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisDocument<'a> {
    viewing_status: &'a UploadStatus,
    search_status: &'a UploadStatus,
    report: &'a DashboardReport,
}

pub struct AnalyzeRequest {
    pub viewing: Option<PathBuf>,
    pub search: Option<PathBuf>,
    pub sample: bool,
    pub top: Option<usize>,
}

pub fn run_analyze(request: AnalyzeRequest, config: &Config, output: &Output) -> Result<()> {
    config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;

    if request.viewing.is_none() && !request.sample {
        return Err(eyre!("Nothing to analyze: pass --viewing PATH or --sample"));
    }

    let parse_options = config.parse_options().map_err(|e| eyre!("{}", e))?;
    let mut session = DashboardSession::new(parse_options);

    if request.sample {
        session.load_samples().wrap_err("Failed to load bundled sample exports")?;
        info!("Loaded bundled sample exports");
    }

    if let Some(path) = &request.viewing {
        session
            .load_viewing_file(path)
            .wrap_err_with(|| format!("Failed to load viewing activity from {}", path.display()))?;
    }

    // Search history is optional; a bad file leaves the search views empty
    if let Some(path) = &request.search {
        if let Err(e) = session.load_search_file(path) {
            output.warn(format!("Skipping search history {}: {}", path.display(), e));
        }
    }

    let mut options = config.analysis_options();
    if let Some(top) = request.top {
        if top == 0 {
            return Err(eyre!("--top must be greater than zero"));
        }
        options.top_titles_limit = top;
    }
    debug!(?options, "Building dashboard");

    let report = session.report(&options);

    if !output.is_human() {
        let document = AnalysisDocument {
            viewing_status: session.viewing_status(),
            search_status: session.search_status(),
            report: &report,
        };
        output.json(&serde_json::to_value(&document)?);
        return Ok(());
    }

    if output.is_quiet() {
        return Ok(());
    }

    println!("\n{}", "╔════════════════════════════════════════════════════════════╗".bright_white());
    println!("{} {}", "║".bright_white(), "FlixLens Dashboard".bright_cyan().bold());
    println!("{}", "╚════════════════════════════════════════════════════════════╝".bright_white());
    println!(
        "Viewing activity: {}   Search history: {}",
        session.viewing_status(),
        session.search_status()
    );
    println!();

    if report.is_empty() {
        output.warn("No usable rows found; nothing to show");
        return Ok(());
    }

    render_report(&report);
    Ok(())
}

fn render_report(report: &DashboardReport) {
    print_table(summary_table(report));
    print_table(trend_table(report));
    print_table(genre_table(report));
    print_table(device_table(report));
    print_table(top_titles_table(report));
    print_table(heatmap_table(report));
    print_table(day_totals_table(report));
    print_table(distribution_table("Minutes by Day of Month", "Day", &report.day_distribution));
    print_table(distribution_table("Minutes by Hour", "Hour", &report.hour_distribution));
    print_table(search_table(report));

    if !report.insights.is_empty() {
        println!("{}", "Insights".bright_cyan().bold());
        for insight in &report.insights {
            println!("  {} {}", insight.label.bold(), insight.highlight);
            println!("    {}", insight.detail.dimmed());
        }
        println!();
    }
}

fn print_table(table: Option<Table>) {
    if let Some(table) = table {
        println!("{}", table);
        println!();
    }
}

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(
        headers
            .iter()
            .map(|header| Cell::new(header).fg(Color::Cyan).add_attribute(Attribute::Bold)),
    );
    table
}

fn hours_cell(minutes: u64) -> Cell {
    Cell::new(format!("{:.1}", minutes_to_hours(minutes))).set_alignment(CellAlignment::Right)
}

fn count_cell(count: u64) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}

fn summary_table(report: &DashboardReport) -> Option<Table> {
    let summary = &report.summary;
    if summary.total_sessions == 0 {
        return None;
    }

    let mut table = styled_table(&["Overview", ""]);
    table.add_row(vec![Cell::new("Titles"), count_cell(summary.total_titles)]);
    table.add_row(vec![Cell::new("Hours watched"), Cell::new(format!("{:.1}", summary.total_hours))]);
    table.add_row(vec![Cell::new("Sessions"), count_cell(summary.total_sessions)]);
    table.add_row(vec![
        Cell::new("Average session"),
        Cell::new(format!("{} min", summary.average_session_minutes)),
    ]);
    table.add_row(vec![Cell::new("Peak day"), Cell::new(&summary.peak_day)]);
    table.add_row(vec![Cell::new("Peak hours"), Cell::new(&summary.peak_hour_range)]);
    if let Some(top) = &summary.top_title {
        table.add_row(vec![Cell::new("Top title"), Cell::new(format!("{} ({:.1} h)", top.value, top.hours))]);
    }
    Some(table)
}

fn trend_table(report: &DashboardReport) -> Option<Table> {
    if report.trend.is_empty() {
        return None;
    }

    let mut table = styled_table(&["Month", "Hours"]);
    for point in &report.trend {
        table.add_row(vec![Cell::new(&point.label), hours_cell(point.minutes)]);
    }
    Some(table)
}

fn genre_table(report: &DashboardReport) -> Option<Table> {
    if report.genres.is_empty() {
        return None;
    }

    let mut table = styled_table(&["Genre", "Sessions", "Hours"]);
    for stat in &report.genres {
        table.add_row(vec![Cell::new(stat.genre), count_cell(stat.entries), hours_cell(stat.minutes)]);
    }
    Some(table)
}

fn device_table(report: &DashboardReport) -> Option<Table> {
    if report.devices.is_empty() {
        return None;
    }

    let mut table = styled_table(&["Device", "Sessions", "Hours"]);
    for stat in &report.devices {
        table.add_row(vec![Cell::new(&stat.device), count_cell(stat.count), hours_cell(stat.minutes)]);
    }
    Some(table)
}

fn top_titles_table(report: &DashboardReport) -> Option<Table> {
    if report.top_titles.is_empty() {
        return None;
    }

    let mut table = styled_table(&["#", "Title", "Genre", "Sessions", "Hours"]);
    for (rank, stat) in report.top_titles.iter().enumerate() {
        table.add_row(vec![
            count_cell(rank as u64 + 1),
            Cell::new(&stat.title),
            Cell::new(stat.genre),
            count_cell(stat.sessions),
            hours_cell(stat.minutes),
        ]);
    }
    Some(table)
}

fn heatmap_table(report: &DashboardReport) -> Option<Table> {
    if report.heatmap.is_empty() {
        return None;
    }

    let grid = roll_up_heatmap(&report.heatmap, HEATMAP_BUCKET_HOURS);
    let max = grid.max_value();

    let labels: Vec<String> = grid
        .bucket_starts()
        .map(|start| bucket_label(start, grid.bucket_hours))
        .collect();
    let mut headers = vec!["Minutes"];
    headers.extend(labels.iter().map(String::as_str));
    let mut table = styled_table(&headers);

    for (day, values) in &grid.rows {
        let mut row = vec![Cell::new(day.short_label())];
        row.extend(values.iter().map(|&value| heat_cell(value, max)));
        table.add_row(row);
    }
    Some(table)
}

fn day_totals_table(report: &DashboardReport) -> Option<Table> {
    let max = report.day_totals.first()?.minutes;

    let mut table = styled_table(&["Day", "Hours", "Day-of-week leaders"]);
    for total in &report.day_totals {
        table.add_row(vec![
            Cell::new(total.day),
            hours_cell(total.minutes),
            Cell::new(bar(total.minutes, max, BAR_WIDTH)).fg(Color::Magenta),
        ]);
    }
    Some(table)
}

fn heat_cell(value: u64, max: u64) -> Cell {
    let cell = Cell::new(if value == 0 { "·".to_string() } else { value.to_string() })
        .set_alignment(CellAlignment::Right);
    match intensity(value, max) {
        0 => cell.fg(Color::DarkGrey),
        1 => cell,
        2 => cell.fg(Color::Yellow),
        _ => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

/// Quartile of `value` relative to `max`, 0 for empty cells
fn intensity(value: u64, max: u64) -> u8 {
    if value == 0 || max == 0 {
        return 0;
    }
    let ratio = value as f64 / max as f64;
    if ratio > 0.75 {
        3
    } else if ratio > 0.4 {
        2
    } else {
        1
    }
}

fn distribution_table(title: &str, label: &str, points: &[DistributionPoint]) -> Option<Table> {
    if points.is_empty() {
        return None;
    }

    let max = points.iter().map(|point| point.value).max().unwrap_or(0);
    let mut table = styled_table(&[label, "Minutes", "Smoothed", title]);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.label).set_alignment(CellAlignment::Right),
            count_cell(point.value),
            Cell::new(format!("{:.1}", point.smooth)).set_alignment(CellAlignment::Right),
            Cell::new(bar(point.value, max, BAR_WIDTH)).fg(Color::Green),
        ]);
    }
    Some(table)
}

/// Horizontal bar scaled so `max` fills `width` cells
fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

fn search_table(report: &DashboardReport) -> Option<Table> {
    let search = &report.search;
    if search.total_queries == 0 {
        return None;
    }

    let mut table = styled_table(&["Search", ""]);
    table.add_row(vec![Cell::new("Queries"), count_cell(search.total_queries)]);

    let months: Vec<String> = search
        .monthly_counts
        .iter()
        .map(|point| format!("{}: {}", point.label, point.minutes))
        .collect();
    table.add_row(vec![Cell::new("By month"), Cell::new(months.join("\n"))]);

    let top: Vec<String> = search
        .top_searches
        .iter()
        .map(|token| format!("{} ({})", token.value, token.count))
        .collect();
    table.add_row(vec![Cell::new("Top searches"), Cell::new(top.join("\n"))]);

    let words: Vec<&str> = search
        .word_cloud
        .iter()
        .take(WORD_CLOUD_PREVIEW)
        .map(|token| token.value.as_str())
        .collect();
    table.add_row(vec![Cell::new("Frequent words"), Cell::new(words.join(", "))]);
    Some(table)
}
