use anyhow::{Context, Result};
use chartprep::csv_reader::{self, CsvLayout};
use chartprep::{parser, runtime, telemetry, ChartOptions};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "chartprep")]
#[command(about = "Turn CSV tables into interactive Vega-Lite line charts", long_about = None)]
struct Args {
    /// Chart pipeline (e.g., 'aes(x: Frequency, y: SPL, color: Speaker) | scale_x_log10()')
    pipeline: String,

    /// Columns mapping (e.g., '(speaker, "") -> Speaker, (spl, on_axis) -> SPL')
    #[arg(short, long)]
    map: String,

    /// Read CSV from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of leading CSV columns that form the row index
    #[arg(long, default_value_t = 0)]
    index_cols: usize,

    /// Number of CSV header rows (one per column level)
    #[arg(long, default_value_t = 1)]
    header_rows: usize,

    /// JSON file with chart options
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    let args = Args::parse();

    let options = match &args.config {
        Some(path) => ChartOptions::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ChartOptions::default(),
    };

    let layout = CsvLayout {
        index_cols: args.index_cols,
        header_rows: args.header_rows,
    };
    let table = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            csv_reader::read_csv(BufReader::new(file), layout)
        }
        None => csv_reader::read_csv_from_stdin(layout),
    }
    .context("Failed to read CSV")?;
    debug!(rows = table.n_rows(), columns = table.columns().len(), "loaded table");

    let mapping = match parser::parse_columns_mapping(&args.map) {
        Ok((_, mapping)) => mapping,
        Err(e) => anyhow::bail!("Mapping parse error: {:?}", e),
    };

    let plot_spec = match parser::parse_plot_spec(&args.pipeline) {
        Ok((_, plot_spec)) => plot_spec,
        Err(e) => anyhow::bail!("Parse error: {:?}", e),
    };

    let json = runtime::render_chart(&table, &mapping, &plot_spec, &options)
        .context("Failed to render chart")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json).context("Failed to write chart to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
