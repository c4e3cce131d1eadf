//! Renders benchmark run JSON files as labeled bar chart images.
//!
//! Each file under the data directory holds one run record: a title plus one
//! timing per implementation. Every record becomes one PNG bar chart in the
//! plot directory, annotated per the selected [`LabelMode`].

pub mod chart;
pub mod label;
pub mod record;

use std::{fs, path::Path};

use eyre::{Context, Result};
use tracing::debug;

pub use chart::{output_path, render_chart};
pub use label::{BarLabel, LabelMode, bar_labels};
pub use record::{DataPoint, RunRecord, load_run_records};

/// Renders every run record under `data_dir` into `plot_dir`, one PNG per
/// input file, sequentially. Returns the number of charts written.
///
/// The first failure aborts the rest of the batch; charts already written
/// stay on disk. Existing outputs are overwritten without warning.
pub fn render_all(data_dir: &Path, plot_dir: &Path, mode: LabelMode) -> Result<usize> {
    fs::create_dir_all(plot_dir).context(format!("Create plot dir {}", plot_dir.display()))?;

    let mut rendered = 0;
    for loaded in load_run_records(data_dir)? {
        let (path, record) = loaded?;
        let out = output_path(plot_dir, &path)?;
        debug!("Rendering {} -> {}", path.display(), out.display());
        render_chart(&record, mode, &out)?;
        rendered += 1;
    }
    Ok(rendered)
}
