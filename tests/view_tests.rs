use cost_tree::aggregator::SortKey;
use cost_tree::formatter::TimeUnit;
use cost_tree::parser::{parse_cost_data, CostData, Mode};
use cost_tree::presenter::flatten;
use cost_tree::view::{ViewSettings, ViewState};

const DOCUMENT: &str = r#"{
    "init": {
        "app/db/pool": {"cost": 40, "count": 4},
        "app/db": {"cost": 10, "count": 1},
        "app/http": {"cost": 30, "count": 30},
        "logging": {"cost": 20, "count": 1}
    },
    "late": {
        "plugins/a": {"cost": 5, "count": 1},
        "plugins/b": {"cost": 15, "count": 3}
    }
}"#;

fn data() -> CostData {
    parse_cost_data(DOCUMENT).unwrap().unwrap()
}

#[test]
fn test_initial_render() {
    let mut view = ViewState::new(Some(data()), ViewSettings::default());
    let presentation = view.render_all().unwrap();

    assert_eq!(presentation.summary.total_cost, 100.0);
    assert_eq!(presentation.summary.total_count, 36);
    assert_eq!(presentation.summary.types, 4);
    assert_eq!(presentation.summary.avg_cost, 2.0);
    assert_eq!(presentation.nodes[0].name, "app");
    assert_eq!(presentation.nodes[0].percentage, 80.0);
}

#[test]
fn test_ascii_micro_selector_is_a_distinct_identity_unit() {
    let mut view = ViewState::new(Some(data()), ViewSettings::default());
    view.set_time_unit(TimeUnit::Microseconds);

    let presentation = view.set_time_unit(TimeUnit::parse("us")).unwrap();
    assert_eq!(presentation.summary.total_cost, 100.0);
    assert_eq!(presentation.nodes[0].cost, 80.0);
    assert_eq!(view.render_count(), 2);
}

#[test]
fn test_setters_rerender_only_on_change() {
    let mut view = ViewState::new(Some(data()), ViewSettings::default());
    view.render_all();

    assert!(view.set_sort(SortKey::Avg).is_some());
    assert_eq!(view.render_count(), 2);
    assert!(view.set_sort(SortKey::Avg).is_none());
    assert_eq!(view.render_count(), 2);

    assert!(view.set_time_unit(TimeUnit::Milliseconds).is_some());
    assert!(view.set_time_unit(TimeUnit::parse("ms")).is_none());
    assert_eq!(view.render_count(), 3);

    assert!(view.set_mode(Mode::Late).is_some());
    assert!(view.set_mode(Mode::Late).is_none());
    assert_eq!(view.render_count(), 4);
}

#[test]
fn test_sort_switch_changes_top_level_order() {
    let mut view = ViewState::new(Some(data()), ViewSettings::default());
    let first = view.render_all().unwrap().nodes[0].name.clone();
    assert_eq!(first, "app");

    // logging: 20 per instance, app: 80 / 35
    let by_avg = view.set_sort(SortKey::Avg).unwrap();
    assert_eq!(by_avg.nodes[0].name, "logging");
    assert_eq!(by_avg.summary.sort_description(), "Average time per instance");
}

#[test]
fn test_unit_switch_scales_figures() {
    let mut view = ViewState::new(Some(data()), ViewSettings::default());
    view.render_all();

    let presentation = view.set_time_unit(TimeUnit::Microseconds).unwrap();
    assert_eq!(presentation.summary.total_cost, 10_000_000.0);
    assert_eq!(presentation.summary.total_cost_seconds, 10.0);
    assert_eq!(presentation.nodes[0].cost, 8_000_000.0);
    assert_eq!(presentation.nodes[0].percentage, 80.0);
}

#[test]
fn test_mode_switch_uses_late_map() {
    let mut view = ViewState::new(Some(data()), ViewSettings::default());
    let presentation = view.set_mode(Mode::Late).unwrap();

    assert_eq!(presentation.summary.title, "Late Initialization Cost Analysis");
    assert_eq!(presentation.summary.types, 2);
    assert_eq!(presentation.nodes.len(), 1);
    assert_eq!(presentation.nodes[0].name, "plugins");
    assert_eq!(presentation.nodes[0].children[0].name, "b");
}

#[test]
fn test_direct_figures_in_view() {
    let mut view = ViewState::new(Some(data()), ViewSettings::default());
    let presentation = view.render_all().unwrap();

    let db = flatten(&presentation.nodes)
        .into_iter()
        .find(|n| n.path == "app/db")
        .unwrap();
    let direct = db.direct.as_ref().unwrap();
    assert_eq!(db.cost, 50.0);
    assert_eq!(direct.cost, 10.0);
    assert_eq!(direct.count, 1);
}

#[test]
fn test_null_document_renders_nothing() {
    let data = parse_cost_data("null").unwrap();
    let mut view = ViewState::new(data, ViewSettings::default());

    assert!(view.render_all().is_none());
    assert!(view.set_sort(SortKey::Avg).is_none());
    assert!(view.presentation().is_none());
    assert_eq!(view.render_count(), 0);
}

#[test]
fn test_data_arrives_later() {
    let mut view = ViewState::new(None, ViewSettings::default());
    assert!(view.set_mode(Mode::Late).is_none());

    let presentation = view.set_data(Some(data())).unwrap();
    assert_eq!(presentation.summary.mode, Mode::Late);
}

#[test]
fn test_empty_maps() {
    let mut view = ViewState::new(Some(CostData::default()), ViewSettings::default());
    let presentation = view.render_all().unwrap();

    assert!(presentation.nodes.is_empty());
    assert_eq!(presentation.summary.total_cost, 0.0);
    assert_eq!(presentation.summary.total_count, 0);
    assert_eq!(presentation.summary.types, 0);
    assert_eq!(presentation.summary.avg_cost, 0.0);
}
