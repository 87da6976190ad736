use approx::assert_relative_eq;
use scrolly_chart::api::{BarChart, Container};
use scrolly_chart::core::{Animated, Easing, Record, Transition};

fn sample() -> Vec<Record> {
    vec![
        Record::new().with("x", "A").with("y", 11),
        Record::new().with("x", "B").with("y", 34),
    ]
}

#[test]
fn cubic_in_out_is_symmetric_and_pinned_at_the_ends() {
    let ease = Easing::CubicInOut;
    assert_eq!(ease.apply(0.0), 0.0);
    assert_eq!(ease.apply(1.0), 1.0);
    assert_relative_eq!(ease.apply(0.5), 0.5);
    assert_relative_eq!(ease.apply(0.25) + ease.apply(0.75), 1.0);
    assert!(ease.apply(0.1) < 0.1);
}

#[test]
fn retarget_starts_from_the_value_at_transition_start() {
    let mut value = Animated::settled(0.0);
    value.retarget(100.0, 0.0, Transition::new(1000.0).with_easing(Easing::Linear));
    value.retarget(0.0, 500.0, Transition::new(1000.0).with_easing(Easing::Linear));

    assert_relative_eq!(value.value_at(500.0), 50.0);
    assert_relative_eq!(value.value_at(1000.0), 25.0);
    assert_eq!(value.value_at(1500.0), 0.0);
}

#[test]
fn superseded_transition_runs_until_the_new_delay_elapses() {
    let linear = Transition::new(1000.0).with_easing(Easing::Linear);
    let mut value = Animated::settled(0.0);
    value.retarget(100.0, 0.0, linear);
    value.retarget(0.0, 200.0, linear.with_delay(300.0));

    assert_relative_eq!(value.value_at(400.0), 40.0);
    assert_relative_eq!(value.value_at(500.0), 50.0);
    assert_relative_eq!(value.value_at(1000.0), 25.0);
    assert_eq!(*value.target(), 0.0);
}

#[test]
fn bars_are_staggered_by_fifty_milliseconds() {
    let chart = BarChart::new();
    let mut container = Container::new("vis");
    chart.render(&mut container, &sample());

    let starts: Vec<f64> = container
        .surface()
        .expect("surface")
        .bars()
        .iter()
        .map(|bar| bar.transition_start_ms())
        .collect();
    assert_eq!(starts, vec![0.0, 50.0]);
    assert!(!container.is_settled());

    container.settle();
    assert_eq!(container.now_ms(), 1550.0);
    assert!(container.is_settled());
}

#[test]
fn later_render_wins_but_earlier_transition_finishes_its_delay() {
    let mut chart = BarChart::new();
    let mut container = Container::new("vis");
    chart.set_fill_color("blue");
    chart.render(&mut container, &sample());
    container.advance(700.0);
    let before = container.surface().expect("surface").bars()[1].clone();

    chart.set_fill_color("red");
    chart.render(&mut container, &sample());
    let after = &container.surface().expect("surface").bars()[1];
    assert_eq!(after.geometry_at(725.0), before.geometry_at(725.0));
    assert_eq!(after.target().fill.to_css(), "#ff0000");

    container.settle();
    let settled = &container.surface().expect("surface").bars()[1];
    assert_eq!(settled.geometry_at(container.now_ms()).fill.to_css(), "#ff0000");
}

#[test]
fn axis_ticks_fade_out_and_are_pruned_after_advance() {
    let chart = BarChart::new();
    let mut container = Container::new("vis");
    chart.render(&mut container, &sample());
    container.settle();

    chart.render(&mut container, &sample()[..1]);
    let x_axis = container.surface().expect("surface").x_axis();
    assert_eq!(x_axis.labels(), vec!["A"]);
    assert_eq!(x_axis.ticks().len(), 2);

    container.advance(500.0);
    assert_eq!(container.surface().expect("surface").x_axis().ticks().len(), 1);
}

#[test]
fn repeated_renders_without_advancing_the_clock_stay_sampleable() {
    let mut chart = BarChart::new();
    let mut container = Container::new("vis");
    let data = sample();
    for round in 0..20_000 {
        chart.set_fill_color(if round % 2 == 0 { "blue" } else { "red" });
        chart.render(&mut container, &data);
    }
    let frame = container.frame().expect("frame");
    assert_eq!(frame.rect_count(), 2);

    container.settle();
    assert_eq!(container.now_ms(), 1550.0);
    let bars = container.surface().expect("surface").bars();
    assert_eq!(bars[1].geometry_at(container.now_ms()).fill.to_css(), "#ff0000");
}
