//! Command line viewer for JSON row snapshots.
//!
//! Loads an array of JSON objects, restores the table state from a URL query
//! string, and prints the resulting page as tab-separated text.

use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dataview_lib::DataView;
use dataview_lib::TableConfig;
use dataview_lib::columns::ColumnDescriptor;
use dataview_lib::columns::ColumnModel;
use dataview_lib::error::BuildError;
use dataview_lib::error::ConfigError;
use dataview_lib::model::Record;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

#[derive(Debug, Parser)]
#[command(name = "dataview", version, about = "Render one page of a JSON row snapshot")]
struct Args {
    /// JSON file holding an array of row objects.
    #[arg(long)]
    rows: PathBuf,

    /// Field holding each row's identity.
    #[arg(long, default_value = "id")]
    id_field: String,

    /// Columns to show, comma separated. Defaults to every field of the first row.
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Query string with the table state, e.g. `page=2&sort=[...]`.
    #[arg(long, short, default_value = "", env = "DATAVIEW_QUERY")]
    query: String,

    /// JSON table config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print value counts for these columns.
    #[arg(long = "facet")]
    facets: Vec<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Minimum level to log (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid rows file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rows file must contain a JSON array")]
    NotAnArray,

    #[error("row {index} has no string or number field '{id_field}'")]
    InvalidRow { index: usize, id_field: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    init_logger(args.log_file.as_deref(), args.log_level)?;

    let config = match &args.config {
        Some(path) => TableConfig::from_json_file(path)?,
        None => TableConfig::default(),
    };

    let text = std::fs::read_to_string(&args.rows).map_err(|source| CliError::Io {
        path: args.rows.clone(),
        source,
    })?;
    let rows = parse_rows(&text, &args.id_field)?;

    let column_ids = if args.columns.is_empty() {
        rows.first()
            .map(|row| row.field_names().into_iter().map(String::from).collect())
            .unwrap_or_default()
    } else {
        args.columns.clone()
    };
    let descriptors: Vec<_> = column_ids
        .into_iter()
        .map(|id| ColumnDescriptor::field(id.clone(), id))
        .collect();
    let columns = ColumnModel::build(descriptors, None, false)?;

    log::info!("Loaded {} rows from {}", rows.len(), args.rows.display());
    let view = DataView::from_query(columns, rows, config, &args.query);

    let mut out = io::stdout().lock();
    render(&view, &args.facets, &mut out).map_err(CliError::Output)
}

fn init_logger(path: Option<&Path>, level: LevelFilter) -> Result<(), CliError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => WriteLogger::init(level, Config::default(), io::stderr())?,
    }
    Ok(())
}

fn parse_rows(text: &str, id_field: &str) -> Result<Vec<Record>, CliError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CliError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Record::from_json(item, id_field).ok_or_else(|| CliError::InvalidRow {
                index,
                id_field: id_field.to_string(),
            })
        })
        .collect()
}

fn render<W: Write>(view: &DataView<Record>, facets: &[String], out: &mut W) -> io::Result<()> {
    let columns: Vec<_> = view
        .visible_columns()
        .into_iter()
        .filter(|c| !c.kind.is_structural())
        .collect();

    let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
    writeln!(out, "{}", headers.join("\t"))?;

    for row in view.visible_rows() {
        let cells: Vec<String> = columns.iter().map(|c| c.value(row).to_string()).collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }

    let projection = view.projection();
    writeln!(
        out,
        "page {} of {} ({} rows)",
        view.state().pagination.page_index() + 1,
        projection.page_count().max(1),
        projection.filtered_count()
    )?;

    for column_id in facets {
        let counts: Vec<String> = view
            .faceted_values(column_id)
            .into_iter()
            .map(|(value, count)| format!("{value}={count}"))
            .collect();
        writeln!(out, "{}: {}", column_id, counts.join(", "))?;
    }

    let query = view.query_string();
    if !query.is_empty() {
        writeln!(out, "?{}", query)?;
    }
    Ok(())
}
