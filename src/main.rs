use std::path::PathBuf;

use bench_plot::LabelMode;
use clap::Parser;
use eyre::Result;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Render benchmark run data as labeled bar charts.
#[derive(Parser)]
struct Cli {
    /// Directory containing benchmark run JSON files
    #[arg(long, default_value = "bench-data")]
    data_dir: PathBuf,
    /// Directory to write the rendered charts into
    #[arg(long, default_value = "plots")]
    plot_dir: PathBuf,
    /// Bar labeling strategy
    #[arg(short, long, value_enum, default_value = "plain")]
    labels: LabelMode,
}

fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::new(format!("bench_plot={log_level}")))
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .init();

    match bench_plot::render_all(&args.data_dir, &args.plot_dir, args.labels) {
        Ok(rendered) => {
            info!("Rendered {rendered} charts into {}", args.plot_dir.display());
            Ok(())
        }
        Err(err) => {
            error!("{err:#?}");
            Err(err)
        }
    }
}
