use approx::assert_relative_eq;
use scrolly_chart::core::{BandScale, DEFAULT_BAND_PADDING, LinearScale, SiFormat};

#[test]
fn band_scale_reserves_padding_inside_and_outside() {
    let scale = BandScale::new(["Left Bar", "Right Bar"], (0.0, 880.0), DEFAULT_BAND_PADDING);
    assert_relative_eq!(scale.step(), 400.0);
    assert_relative_eq!(scale.bandwidth(), 320.0);
    assert_relative_eq!(scale.position("Left Bar").expect("left"), 80.0);
    assert_relative_eq!(scale.position("Right Bar").expect("right"), 480.0);
    assert_relative_eq!(scale.center("Right Bar").expect("right"), 640.0);
    assert_eq!(scale.position("Missing"), None);
}

#[test]
fn band_scale_keeps_first_occurrence_order() {
    let scale = BandScale::new(["b", "a", "b", "c"], (0.0, 100.0), 0.2);
    assert_eq!(scale.domain(), vec!["b", "a", "c"]);
}

#[test]
fn linear_scale_maps_zero_to_the_bottom_of_the_plot() {
    let scale = LinearScale::new((0.0, 34.0), (550.0, 0.0));
    assert_relative_eq!(scale.map(0.0), 550.0);
    assert_relative_eq!(scale.map(34.0), 0.0);
    assert_relative_eq!(scale.map(11.0), 550.0 - 550.0 * 11.0 / 34.0);
    assert_relative_eq!(scale.invert(275.0), 17.0);
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let scale = LinearScale::new((0.0, 0.0), (550.0, 0.0));
    assert_eq!(scale.map(0.0), 550.0);
    assert!(scale.ticks(10).is_empty());
}

#[test]
fn missing_maximum_yields_nan_positions() {
    let scale = LinearScale::new((0.0, f64::NAN), (550.0, 0.0));
    assert!(scale.map(11.0).is_nan());
    assert!(scale.ticks(10).is_empty());
}

#[test]
fn nice_ticks_use_one_two_five_steps() {
    let ticks = |max: f64| LinearScale::new((0.0, max), (1.0, 0.0)).ticks(10).to_vec();
    assert_eq!(ticks(34.0), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
    assert_eq!(ticks(10.0), (0..=10).map(f64::from).collect::<Vec<_>>());
    assert_eq!(
        ticks(1.0),
        vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
    );
    assert_eq!(ticks(2500.0).len(), 13);
}

#[test]
fn si_format_matches_two_significant_digit_labels() {
    let format = SiFormat::default();
    let labels: Vec<String> = [0.0, 5.0, 30.0, 1500.0, 0.5, 1_000_000.0]
        .into_iter()
        .map(|value| format.format(value))
        .collect();
    assert_eq!(labels, ["0.0", "5.0", "30", "1.5k", "500m", "1.0M"]);
}
