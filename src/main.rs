
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use duotone::export::{DEFAULT_RASTER_TIMEOUT_MS, GraphicExporter, make_title_file_safe};
use duotone::native::{DirectorySink, NativeExporter, ResvgRasterizer, SvgFileSource, TokioSleeper};
use duotone::state::{ColorSettings, LabelSettings};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("export failed; see log output")]
    ExportFailed,
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "duotone", about = "Export duotone label graphics to SVG or PNG")]
struct Cli {
    /// Directory exported files are written to.
    #[arg(long, env = "DUOTONE_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Upper bound on PNG rasterization time, in milliseconds.
    #[arg(long, env = "DUOTONE_RASTER_TIMEOUT_MS", default_value_t = DEFAULT_RASTER_TIMEOUT_MS)]
    raster_timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export the graphic in INPUT as `<title>.svg`.
    Svg {
        input: PathBuf,
        /// Title used for the file name; made file-safe before use.
        #[arg(long, default_value = "duotone")]
        title: String,
    },
    /// Export the graphic in INPUT as `title.png`.
    Png { input: PathBuf },
    /// Print the default color and label settings as JSON.
    Defaults,
}

#[derive(Serialize)]
struct Defaults {
    #[serde(flatten)]
    colors: ColorSettings,
    #[serde(flatten)]
    label: LabelSettings,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "duotone failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let timeout = Duration::from_millis(cli.raster_timeout_ms);
    match cli.command {
        Command::Svg { input, title } => {
            let exporter = exporter(input, cli.out_dir, timeout);
            let file_title = make_title_file_safe(&title);
            exporter.export_svg(&file_title).map(|_| ()).ok_or(CliError::ExportFailed)
        }
        Command::Png { input } => {
            let exporter = exporter(input, cli.out_dir, timeout);
            exporter.export_png().await.map(|_| ()).ok_or(CliError::ExportFailed)
        }
        Command::Defaults => {
            println!("{}", defaults_json()?);
            Ok(())
        }
    }
}

/// Default color and label settings under their camelCase keys.
fn defaults_json() -> Result<String, serde_json::Error> {
    let defaults = Defaults { colors: ColorSettings::default(), label: LabelSettings::default() };
    serde_json::to_string_pretty(&defaults)
}

fn exporter(input: PathBuf, out_dir: PathBuf, timeout: Duration) -> NativeExporter {
    GraphicExporter::new(SvgFileSource::new(input), ResvgRasterizer::new(), DirectorySink::new(out_dir), TokioSleeper)
        .with_raster_timeout(timeout)
}
