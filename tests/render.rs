use std::{fs, path::Path};

use bench_plot::{LabelMode, render_all};
use eyre::Result;
use tempfile::tempdir;

const SORT_RUN: &str = r#"{"title":"Sort Benchmark","data":[
    {"implementation":"bubble","milliseconds":100.0},
    {"implementation":"quick","milliseconds":40.0}]}"#;

const SINGLE_RUN: &str = r#"{"title":"Lone Run","data":[
    {"implementation":"only","milliseconds":7.5}]}"#;

fn assert_png(path: &Path) {
    let bytes = fs::read(path).unwrap();
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']),
        "{} is not a PNG",
        path.display()
    );
}

#[test]
fn renders_one_png_per_input() -> Result<()> {
    let data = tempdir()?;
    let plots = tempdir()?;
    fs::write(data.path().join("sort.json"), SORT_RUN)?;
    fs::write(data.path().join("single.json"), SINGLE_RUN)?;

    let rendered = render_all(data.path(), plots.path(), LabelMode::Plain)?;
    assert_eq!(rendered, 2);
    assert_png(&plots.path().join("sort.png"));
    assert_png(&plots.path().join("single.png"));
    Ok(())
}

#[test]
fn delta_mode_renders_the_same_inputs() -> Result<()> {
    let data = tempdir()?;
    let plots = tempdir()?;
    fs::write(data.path().join("sort.json"), SORT_RUN)?;
    fs::write(data.path().join("single.json"), SINGLE_RUN)?;

    let rendered = render_all(data.path(), plots.path(), LabelMode::Delta)?;
    assert_eq!(rendered, 2);
    assert_png(&plots.path().join("sort.png"));
    assert_png(&plots.path().join("single.png"));
    Ok(())
}

#[test]
fn creates_missing_plot_dir_before_writing() -> Result<()> {
    let data = tempdir()?;
    let parent = tempdir()?;
    let plots = parent.path().join("plots");
    fs::write(data.path().join("run.json"), SORT_RUN)?;

    assert!(!plots.exists());
    render_all(data.path(), &plots, LabelMode::Delta)?;
    assert!(plots.is_dir());
    assert_png(&plots.join("run.png"));
    Ok(())
}

#[test]
fn rerun_overwrites_existing_outputs() -> Result<()> {
    let data = tempdir()?;
    let plots = tempdir()?;
    fs::write(data.path().join("run.json"), SORT_RUN)?;

    render_all(data.path(), plots.path(), LabelMode::Plain)?;
    let first = fs::read(plots.path().join("run.png"))?;
    render_all(data.path(), plots.path(), LabelMode::Plain)?;
    let second = fs::read(plots.path().join("run.png"))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn malformed_input_aborts_the_batch() -> Result<()> {
    let data = tempdir()?;
    let plots = tempdir()?;
    fs::write(data.path().join("broken.json"), "not a run record")?;

    assert!(render_all(data.path(), plots.path(), LabelMode::Plain).is_err());
    Ok(())
}

#[test]
fn missing_data_dir_is_an_error() -> Result<()> {
    let plots = tempdir()?;
    let missing = plots.path().join("no-such-dir");

    assert!(render_all(&missing, plots.path(), LabelMode::Plain).is_err());
    Ok(())
}
