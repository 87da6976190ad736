use scrolly_chart::api::{BarChart, ChartConfig};
use scrolly_chart::core::Margins;

#[test]
fn defaults_match_the_reference_chart() {
    let chart = BarChart::new();
    assert_eq!(chart.width(), 1000.0);
    assert_eq!(chart.height(), 600.0);
    assert_eq!(chart.margin(), Margins::new(0.0, 50.0, 70.0, 50.0));
    assert_eq!(chart.fill_color(), "purple");
    assert_eq!(chart.x_var(), "x");
    assert_eq!(chart.y_var(), "y");
    assert_eq!(chart.x_axis_label(), "X Axis Label");
    assert_eq!(chart.y_axis_label(), "Y Axis Label");
}

#[test]
fn every_getter_returns_the_value_just_set() {
    let mut chart = BarChart::new();
    chart
        .set_width(640.0)
        .set_height(480.0)
        .set_margin(Margins::new(10.0, 20.0, 30.0, 40.0))
        .set_fill_color("steelblue")
        .set_x_var("name")
        .set_y_var("value")
        .set_x_axis_label("Bar")
        .set_y_axis_label("Arbitrary Value");

    assert_eq!(chart.width(), 640.0);
    assert_eq!(chart.height(), 480.0);
    assert_eq!(chart.margin(), Margins::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(chart.fill_color(), "steelblue");
    assert_eq!(chart.x_var(), "name");
    assert_eq!(chart.y_var(), "value");
    assert_eq!(chart.x_axis_label(), "Bar");
    assert_eq!(chart.y_axis_label(), "Arbitrary Value");
}

#[test]
fn setters_accept_values_without_validation() {
    let mut chart = BarChart::new();
    chart.set_width(-5.0).set_fill_color("not a color").set_x_var("");
    assert_eq!(chart.width(), -5.0);
    assert_eq!(chart.fill_color(), "not a color");
    assert_eq!(chart.x_var(), "");
}

#[test]
fn chart_round_trips_through_json_config() {
    let mut chart = BarChart::new();
    chart.set_x_var("name").set_y_axis_label("Value");

    let json = chart.config().to_json_pretty().expect("serialize config");
    let restored = BarChart::from_config(ChartConfig::from_json_str(&json).expect("parse config"));
    assert_eq!(restored, chart);
}

#[test]
fn set_config_replaces_everything() {
    let mut chart = BarChart::new();
    chart.set_fill_color("red");
    chart.set_config(ChartConfig::default().with_size(300.0, 200.0));
    assert_eq!(chart.fill_color(), "purple");
    assert_eq!(chart.width(), 300.0);
    assert_eq!(chart.height(), 200.0);
}
