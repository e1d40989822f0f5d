use egui::Color32;
use tabplot::data::rows::CsvRow;
use tabplot::data::traces::MARKER_POINT_LIMIT;
use tabplot::{derive_traces, PlotterConfig, TraceKind, YAxis};

fn rows(data: &[&[&str]]) -> Vec<CsvRow> {
    data.iter().map(|r| CsvRow::from(r.to_vec())).collect()
}

#[test]
fn two_rows_scenario() {
    let cfg = PlotterConfig::default();
    let rows = rows(&[&["10", "100", "0.5", "12"], &["20", "150", "0.6", "12"]]);
    let traces = derive_traces(&rows, &cfg.trace_specs());
    assert_eq!(traces.len(), 2);

    let a = &traces[0];
    assert_eq!(a.name, "Toneladas");
    assert_eq!(a.kind, TraceKind::Scatter);
    assert_eq!(a.kind.label(), "scatter");
    assert_eq!(a.x, vec![10.0, 20.0]);
    assert_eq!(a.y, vec![100.0, 150.0]);
    assert_eq!(a.marker_color, Some(Color32::ORANGE));
    assert_eq!(a.y_axis, YAxis::Primary);

    let b = &traces[1];
    assert_eq!(b.name, "Au (g/tn)");
    assert_eq!(b.x, vec![10.0, 20.0]);
    assert_eq!(b.y, vec![0.5, 0.6]);
    assert_eq!(b.marker_color, Some(Color32::GRAY));
    assert_eq!(b.y_axis, YAxis::Secondary);
}

#[test]
fn short_row_yields_nan_only_where_missing() {
    let cfg = PlotterConfig::default();
    let rows = rows(&[&["10", "100"], &["20", "150", "0.6"]]);
    let traces = derive_traces(&rows, &cfg.trace_specs());
    assert_eq!(traces[0].y, vec![100.0, 150.0]);
    assert!(traces[1].y[0].is_nan());
    assert_eq!(traces[1].y[1], 0.6);
}

#[test]
fn one_point_per_row_in_order() {
    let cfg = PlotterConfig::default();
    let rows = rows(&[
        &["3", "x", "1"],
        &["1", "2", "2"],
        &["abc", "5", ""],
        &["2", "7", "3"],
    ]);
    let traces = derive_traces(&rows, &cfg.trace_specs());
    for tr in &traces {
        assert_eq!(tr.x.len(), 4);
        assert_eq!(tr.y.len(), 4);
    }
    assert_eq!(traces[0].x[0], 3.0);
    assert!(traces[0].x[2].is_nan());
    assert!(traces[0].y[0].is_nan());
    assert!(traces[1].y[2].is_nan());
}

#[test]
fn finite_points_skip_nan() {
    let cfg = PlotterConfig::default();
    let rows = rows(&[&["1", "2", "3"], &["x", "4", "5"], &["6", "7"]]);
    let traces = derive_traces(&rows, &cfg.trace_specs());
    let a: Vec<[f64; 2]> = traces[0].finite_points().collect();
    assert_eq!(a, vec![[1.0, 2.0], [6.0, 7.0]]);
    let b: Vec<[f64; 2]> = traces[1].finite_points().collect();
    assert_eq!(b, vec![[1.0, 3.0]]);
}

#[test]
fn no_rows_no_traces() {
    let cfg = PlotterConfig::default();
    assert!(derive_traces(&[], &cfg.trace_specs()).is_empty());
}

#[test]
fn nan_splits_line_segments() {
    let cfg = PlotterConfig::default();
    let rows = rows(&[
        &["1", "10", "1"],
        &["2", "20", "2"],
        &["3", "x", "3"],
        &["4", "40", "4"],
        &["5", "50"],
    ]);
    let traces = derive_traces(&rows, &cfg.trace_specs());
    assert_eq!(
        traces[0].finite_segments(),
        vec![vec![[1.0, 10.0], [2.0, 20.0]], vec![[4.0, 40.0], [5.0, 50.0]]]
    );
    assert_eq!(
        traces[1].finite_segments(),
        vec![vec![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]]
    );
}

#[test]
fn leading_and_trailing_gaps_make_no_empty_segments() {
    let cfg = PlotterConfig::default();
    let rows = rows(&[&["a", "1", "1"], &["2", "2", "2"], &["b", "3", "3"]]);
    let traces = derive_traces(&rows, &cfg.trace_specs());
    assert_eq!(traces[0].finite_segments(), vec![vec![[2.0, 2.0]]]);
}

#[test]
fn markers_only_below_twenty_points() {
    let cfg = PlotterConfig::default();
    let make = |n: usize| -> Vec<CsvRow> {
        (0..n)
            .map(|i| CsvRow(vec![i.to_string(), "1".into(), "2".into()]))
            .collect()
    };
    assert_eq!(MARKER_POINT_LIMIT, 20);
    assert!(derive_traces(&make(19), &cfg.trace_specs())[0].show_markers());
    assert!(!derive_traces(&make(20), &cfg.trace_specs())[0].show_markers());
    assert!(!derive_traces(&make(25), &cfg.trace_specs())[1].show_markers());
}
