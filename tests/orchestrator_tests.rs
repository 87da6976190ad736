use scrolly_chart::api::{Orchestrator, OrchestratorState, section_fill_color};
use scrolly_chart::interaction::{
    NarrativeBinding, NarrativeEvent, ScriptedNarrative, SectionListener,
};

#[test]
fn section_colors_follow_the_palette() {
    assert_eq!(section_fill_color(0), "blue");
    assert_eq!(section_fill_color(1), "red");
    assert_eq!(section_fill_color(2), "orange");
    assert_eq!(section_fill_color(3), "black");
    assert_eq!(section_fill_color(99), "black");
}

#[test]
fn demo_renders_two_bars_over_the_sample_domain() {
    let mut orchestrator = Orchestrator::demo();
    orchestrator.start();
    assert_eq!(orchestrator.state(), OrchestratorState::Rendered);
    assert_eq!(orchestrator.container().id(), "vis");

    let chart = orchestrator.chart();
    let data = orchestrator.data();
    assert_eq!(chart.x_scale(data).domain(), vec!["Left Bar", "Right Bar"]);
    assert_eq!(chart.y_scale(data).domain(), (0.0, 34.0));

    let surface = orchestrator.container().surface().expect("surface");
    assert_eq!(surface.bars().len(), 2);
    assert_eq!(surface.x_axis().labels(), vec!["Left Bar", "Right Bar"]);
    assert_eq!(surface.x_title().text(), "Bar");
    assert_eq!(surface.y_title().text(), "Arbitrary Value");
}

#[test]
fn active_events_recolor_every_bar() {
    let mut orchestrator = Orchestrator::demo();
    orchestrator.start();
    orchestrator.on_narrative_event(NarrativeEvent::Active { index: 1 });
    orchestrator.container_mut().settle();

    let container = orchestrator.container();
    let fills: Vec<String> = container
        .surface()
        .expect("surface")
        .bars()
        .iter()
        .map(|bar| bar.geometry_at(container.now_ms()).fill.to_css())
        .collect();
    assert_eq!(fills, vec!["#ff0000", "#ff0000"]);
}

#[test]
fn section_event_before_start_still_renders() {
    let mut orchestrator = Orchestrator::demo();
    orchestrator.on_active_section(0);
    assert_eq!(orchestrator.state(), OrchestratorState::Rendered);
    assert_eq!(orchestrator.chart().fill_color(), "blue");
    assert!(orchestrator.container().has_surface());
}

#[test]
fn scripted_narrative_drives_the_orchestrator() {
    let mut orchestrator = Orchestrator::demo();
    orchestrator.start();
    let mut narrative = ScriptedNarrative::new(NarrativeBinding::default(), 4);

    let events = narrative.replay([0, 1, 1, 2, 3, 9], &mut orchestrator);
    assert_eq!(events.len(), 4);
    assert_eq!(orchestrator.chart().fill_color(), "black");
    assert_eq!(
        orchestrator.container().surface().expect("surface").bars().len(),
        2
    );
}
