use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::record::DataPoint;

/// Bar labeling strategy: raw values only, or raw values plus the change
/// relative to the previous bar in sequence order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LabelMode {
    #[default]
    Plain,
    Delta,
}

/// Text drawn above one bar. `delta` is the second line and stays empty in
/// plain mode and on the first bar of delta mode.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub value: String,
    pub delta: String,
}

/// Builds one label per data point, in sequence order.
///
/// A zero previous value in delta mode is not guarded; the division follows
/// IEEE semantics and the label prints `inf`/`NaN`.
pub fn bar_labels(points: &[DataPoint], mode: LabelMode) -> Vec<BarLabel> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let delta = match mode {
                LabelMode::Delta if i > 0 => {
                    let prev = points[i - 1].milliseconds;
                    let change = (point.milliseconds - prev) / prev * 100.0;
                    format!("{change:+.2}%")
                }
                _ => String::new(),
            };
            BarLabel {
                value: format_ms(point.milliseconds),
                delta,
            }
        })
        .collect()
}

/// Whole-number values keep one decimal place (`40.0`), fractional values
/// print in full.
pub fn format_ms(value: f64) -> String {
    if value == value.trunc() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
