use std::path::{Path, PathBuf};

use eyre::{Context, ContextCompat, Result};
use plotters::prelude::*;
use plotters::style::{
    FontTransform,
    text_anchor::{HPos, Pos, VPos},
};

use crate::{
    label::{LabelMode, bar_labels},
    record::RunRecord,
};

const CANVAS_SIZE: (u32, u32) = (800, 600);
const X_DESC: &str = "Implementation";
const Y_DESC: &str = "Average runtime (ms)";

/// Derives the output file by replacing the input's extension with `.png`,
/// keeping any dots in the base name itself.
pub fn output_path(plot_dir: &Path, input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .context(format!("No file name in {}", input.display()))?;
    Ok(plot_dir.join(Path::new(name).with_extension("png")))
}

/// Renders one run record as a labeled bar chart and writes it to `out`,
/// overwriting any existing file. The drawing area is filled before anything
/// is drawn, so nothing carries over between renders.
pub fn render_chart(record: &RunRecord, mode: LabelMode, out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let names: Vec<&str> = record
        .data
        .iter()
        .map(|p| p.implementation.as_str())
        .collect();
    let tallest = record
        .data
        .iter()
        .map(|p| p.milliseconds)
        .fold(0.0_f64, f64::max);
    // Headroom above the tallest bar so its label stays inside the plot.
    let y_max = if tallest > 0.0 { tallest * 1.2 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(&record.title, ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d((0..record.data.len()).into_segmented(), 0f64..y_max)?;

    let tick_font = match mode {
        LabelMode::Plain => ("sans-serif", 15).into_font(),
        // Delta mode angles the tick labels for readability; the backend only
        // supports quarter-turn rotations.
        LabelMode::Delta => ("sans-serif", 15).into_font().transform(FontTransform::Rotate90),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(record.data.len() + 1)
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_style(tick_font)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => names.get(*i).map(|s| s.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(record.data.iter().enumerate().map(|(i, point)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), point.milliseconds),
            ],
            BLUE.mix(0.6).filled(),
        );
        bar.set_margin(0, 0, 10, 10);
        bar
    }))?;

    let labels = bar_labels(&record.data, mode);
    let style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(record.data.iter().zip(labels).enumerate().map(
        |(i, (point, label))| {
            // Value line above the delta line, both anchored to the bar top.
            let value_offset = if label.delta.is_empty() { -4 } else { -20 };
            EmptyElement::at((SegmentValue::CenterOf(i), point.milliseconds))
                + Text::new(label.value, (0, value_offset), style.clone())
                + Text::new(label.delta, (0, -4), style.clone())
        },
    ))?;

    root.present().context(format!("Write {}", out.display()))?;
    Ok(())
}
