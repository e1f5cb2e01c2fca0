//! searchexport - Entry Point

use clap::Parser;
use searchexport::export::ExportRequest;
use searchexport::model::{
    AppError, Direction, FieldTypesProvider, InvalidIdentifier, SortConfig, WidgetId,
};
use searchexport::source::ViewDocument;
use searchexport::state::{info_text, ExportModalState};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Prepare CSV exports of log search results
#[derive(Parser, Debug)]
#[command(name = "searchexport")]
#[command(version)]
#[command(about = "Select export settings for a search or dashboard and emit the export request")]
pub struct Args {
    /// Path to the view document (JSON), or `-` to read from stdin
    pub view: PathBuf,

    /// Open the export for this widget only (no widget picker)
    #[arg(long, value_parser = parse_widget_id)]
    pub fixed_widget: Option<WidgetId>,

    /// Message table whose fields and sort to adopt
    #[arg(short, long, value_parser = parse_widget_id)]
    pub widget: Option<WidgetId>,

    /// Fields to export, in order (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Sort field; repeat for secondary sort fields
    #[arg(short, long)]
    pub sort: Vec<String>,

    /// Sort direction applied to every sort field
    #[arg(short, long, value_parser = parse_direction)]
    pub direction: Option<Direction>,

    /// List message tables and fields instead of exporting
    #[arg(long)]
    pub list: bool,

    /// Pretty-print the emitted requests
    #[arg(long)]
    pub pretty: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_widget_id(raw: &str) -> Result<WidgetId, InvalidIdentifier> {
    WidgetId::new(raw)
}

fn parse_direction(raw: &str) -> Result<Direction, String> {
    Direction::parse(raw).ok_or_else(|| format!("unknown sort direction '{raw}' (use asc or desc)"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = searchexport::config::load_config_with_precedence(args.config.clone())?;
        let merged = searchexport::config::merge_config(config_file);
        let with_env = searchexport::config::apply_env_overrides(merged);
        let pretty_override = if args.pretty { Some(true) } else { None };
        searchexport::config::apply_cli_overrides(with_env, pretty_override)
    };

    searchexport::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let document = searchexport::source::load_view_document(&args.view)?;
    let mut state =
        ExportModalState::open(&document.view, args.fixed_widget.clone(), &config.default_fields);

    let mut out = std::io::stdout().lock();

    if args.list {
        write_listing(&mut out, &state, &document, config.credentials_in_url)?;
        return Ok(());
    }

    if let Some(widget_id) = &args.widget {
        state.select_widget(widget_id)?;
    }
    if let Some(fields) = args.fields {
        state.select_fields(fields);
    }
    if !args.sort.is_empty() {
        let direction = state.sort_direction().unwrap_or(Direction::Descending);
        state.set_sort(
            args.sort
                .iter()
                .map(|field| SortConfig::new(field.as_str(), direction))
                .collect(),
        );
    }
    if let Some(direction) = args.direction {
        state.set_sort_direction(direction);
    }

    let mut requests: Vec<ExportRequest> = Vec::new();
    state.start_download(&document.view, &mut requests)?;

    if config.pretty {
        serde_json::to_writer_pretty(&mut out, &requests).map_err(std::io::Error::from)?;
    } else {
        serde_json::to_writer(&mut out, &requests).map_err(std::io::Error::from)?;
    }
    writeln!(out)?;

    Ok(())
}

fn write_listing(
    out: &mut impl Write,
    state: &ExportModalState,
    document: &ViewDocument,
    credentials_in_url: bool,
) -> std::io::Result<()> {
    writeln!(out, "{}", state.title())?;
    writeln!(out, "{}", info_text(credentials_in_url))?;
    writeln!(out)?;

    writeln!(out, "Message tables:")?;
    let selected = state.selected_widget().map(|w| &w.id);
    for option in state.widget_options() {
        let marker = if Some(&option.widget_id) == selected {
            "  [SELECTED]"
        } else {
            ""
        };
        writeln!(out, "  {}  {}{}", option.widget_id, option.label, marker)?;
    }
    if state.show_widget_selection() {
        writeln!(out, "  (select one with --widget)")?;
    }
    writeln!(out)?;

    writeln!(out, "Fields:")?;
    for field in document.all() {
        writeln!(out, "  {} ({})", field.name, field.field_type)?;
    }

    Ok(())
}
