use std::path::{Path, PathBuf};

use tabplot::data::rows::RowParser;
use tabplot::{LoadOutcome, PlotterApp, PlotterConfig, PlotterError};

fn loaded(path: &str, text: &str) -> LoadOutcome {
    LoadOutcome {
        generation: 1,
        path: PathBuf::from(path),
        result: RowParser::new().parse_str(text),
    }
}

fn failed(path: &str) -> LoadOutcome {
    LoadOutcome {
        generation: 2,
        path: PathBuf::from(path),
        result: Err(PlotterError::Io {
            path: PathBuf::from(path),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }),
    }
}

#[test]
fn failed_load_keeps_previous_data() {
    let mut app = PlotterApp::new(PlotterConfig::default());
    app.apply(loaded("a.csv", "10,100,0.5,12\n20,150,0.6,12\n"));
    let before_preview = app.data().preview.clone();
    let before_traces = app.data().traces.clone();

    app.apply(failed("b.csv"));

    assert_eq!(app.data().preview, before_preview);
    assert_eq!(app.data().traces, before_traces);
    assert_eq!(app.data().source.as_deref(), Some(Path::new("a.csv")));
    assert!(app.data().has_preview());
    assert!(app.data().has_traces());
}

#[test]
fn empty_load_clears_both_gates() {
    let mut app = PlotterApp::new(PlotterConfig::default());
    app.apply(loaded("a.csv", "10,100,0.5,12\n"));
    assert!(app.data().has_preview() && app.data().has_traces());

    app.apply(loaded("empty.csv", "\n\n"));
    assert!(!app.data().has_preview());
    assert!(!app.data().has_traces());
    assert_eq!(app.data().source.as_deref(), Some(Path::new("empty.csv")));
}

#[test]
fn second_load_replaces_preview_and_traces() {
    let mut app = PlotterApp::new(PlotterConfig::default());
    app.apply(loaded("a.csv", "10,100,0.5,12\n20,150,0.6,12\n"));
    app.apply(loaded("b.csv", "1,2,3,4\n"));

    let data = app.data();
    assert_eq!(data.preview.len(), 1);
    assert_eq!(data.preview.cell(0, 3), "4");
    assert_eq!(data.row_count(), 1);
    assert_eq!(data.traces[0].x, vec![1.0]);
    assert_eq!(data.traces[0].y, vec![2.0]);
    assert_eq!(data.traces[1].y, vec![3.0]);
}

#[test]
fn failed_first_load_shows_nothing() {
    let mut app = PlotterApp::new(PlotterConfig::default());
    app.apply(failed("missing.csv"));
    assert!(!app.data().has_preview());
    assert!(!app.data().has_traces());
    assert!(app.data().source.is_none());
}
