use tabplot::data::axis::{finite_range, format_tick, nice_step, SecondaryAxisMap};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn maps_secondary_range_onto_primary() {
    let map = SecondaryAxisMap::fit(&[0.0, 100.0], &[0.0, 10.0]);
    assert_eq!(map.primary, (0.0, 100.0));
    assert_eq!(map.secondary, (0.0, 10.0));
    assert_eq!(map.to_primary(5.0), 50.0);
    assert_eq!(map.to_secondary(50.0), 5.0);
}

#[test]
fn mapping_round_trips() {
    let map = SecondaryAxisMap::fit(&[123.0, 4567.0], &[0.37, 2.91]);
    for v in [0.37, 1.0, 2.91] {
        assert!(close(map.to_secondary(map.to_primary(v)), v));
    }
}

#[test]
fn bounds_cover_the_data() {
    let map = SecondaryAxisMap::fit(&[123.0, 4567.0], &[0.37, 2.91]);
    assert!(map.primary.0 <= 123.0 && map.primary.1 >= 4567.0);
    assert!(map.secondary.0 <= 0.37 && map.secondary.1 >= 2.91);
}

#[test]
fn nice_steps_are_one_two_or_five() {
    assert_eq!(nice_step(100.0), 20.0);
    assert_eq!(nice_step(10.0), 2.0);
    assert!(close(nice_step(0.74), 0.2));
    assert!(close(nice_step(0.3), 0.1));
    assert!(close(nice_step(2.0), 0.5));
}

#[test]
fn primary_grid_lines_land_on_round_secondary_labels() {
    let map = SecondaryAxisMap::fit(&[0.0, 100.0], &[0.13, 0.87]);
    assert!(close(map.secondary.0, 0.0));
    assert!(close(map.secondary.1, 1.0));
    let labels: Vec<String> = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        .iter()
        .map(|&g| format_tick(map.to_secondary(g)))
        .collect();
    assert_eq!(labels, vec!["0", "0.2", "0.4", "0.6", "0.8", "1"]);
}

#[test]
fn both_axes_share_the_step_count() {
    // Left needs five steps of 20, right only three of 0.1; the right
    // range is stretched to five steps as well.
    let map = SecondaryAxisMap::fit(&[0.0, 95.0], &[0.0, 0.3]);
    assert!(close(map.primary.1, 100.0));
    assert!(close(map.secondary.1, 0.5));
    assert_eq!(format_tick(map.to_secondary(50.0)), "0.25");
}

#[test]
fn nan_values_do_not_affect_ranges() {
    assert_eq!(finite_range(&[f64::NAN, 2.0, 5.0, f64::INFINITY]), (2.0, 5.0));
}

#[test]
fn degenerate_ranges_are_widened() {
    assert_eq!(finite_range(&[]), (0.0, 1.0));
    assert_eq!(finite_range(&[f64::NAN]), (0.0, 1.0));
    assert_eq!(finite_range(&[3.0, 3.0]), (2.5, 3.5));
    let map = SecondaryAxisMap::fit(&[3.0], &[0.6]);
    assert!(map.to_primary(0.6).is_finite());
}

#[test]
fn tick_labels_drop_trailing_zeros() {
    assert_eq!(format_tick(0.5), "0.5");
    assert_eq!(format_tick(12.0), "12");
    assert_eq!(format_tick(0.123456), "0.1235");
    assert_eq!(format_tick(-0.00001), "0");
}
