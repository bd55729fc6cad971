use approx::assert_relative_eq;
use launchboard::charts::{ChartKind, ChartSeries, ScatterPoint, resolve_scatter};
use launchboard::core::{Dataset, LaunchRecord, Outcome, PayloadRange, SiteSelection};

fn scenario_dataset() -> Dataset {
    Dataset::from_records(vec![
        LaunchRecord::new("A", 500.0, Outcome::Success, "v1"),
        LaunchRecord::new("A", 9000.0, Outcome::Failure, "v2"),
        LaunchRecord::new("B", 3000.0, Outcome::Success, "v1"),
    ])
    .expect("valid dataset")
}

fn scatter_points(spec: &launchboard::ChartSpec) -> &[ScatterPoint] {
    match &spec.series {
        ChartSeries::Scatter(points) => points,
        ChartSeries::Pie(_) => panic!("expected scatter series"),
    }
}

#[test]
fn range_filter_keeps_inclusive_bounds() {
    let dataset = scenario_dataset();
    let spec = resolve_scatter(&dataset, &SiteSelection::All, PayloadRange::new(500.0, 3000.0));

    let points = scatter_points(&spec);
    assert_eq!(points.len(), 2);
    assert_relative_eq!(points[0].payload_mass_kg, 500.0);
    assert_relative_eq!(points[1].payload_mass_kg, 3000.0);
}

#[test]
fn scenario_range_zero_to_4000_keeps_two_points() {
    let dataset = scenario_dataset();
    let spec = resolve_scatter(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 4000.0));

    assert_eq!(spec.kind(), ChartKind::Scatter);
    assert_eq!(spec.title, "Payload vs. Outcome for All Sites");
    let points = scatter_points(&spec);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].launch_site, "A");
    assert_relative_eq!(points[0].payload_mass_kg, 500.0);
    assert_eq!(points[1].launch_site, "B");
    assert_relative_eq!(points[1].payload_mass_kg, 3000.0);
}

#[test]
fn full_range_all_sites_is_identity_filter() {
    let dataset = scenario_dataset();
    let bounds = dataset.payload_bounds();
    let spec = resolve_scatter(&dataset, &SiteSelection::All, bounds);

    assert_eq!(scatter_points(&spec).len(), dataset.len());
}

#[test]
fn site_selection_restricts_points_and_title() {
    let dataset = scenario_dataset();
    let spec = resolve_scatter(
        &dataset,
        &SiteSelection::Site("A".to_owned()),
        PayloadRange::new(0.0, 10_000.0),
    );

    assert_eq!(spec.title, "Payload vs. Outcome for A");
    let points = scatter_points(&spec);
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|point| point.launch_site == "A"));
}

#[test]
fn points_carry_outcome_booster_and_site() {
    let dataset = scenario_dataset();
    let spec = resolve_scatter(
        &dataset,
        &SiteSelection::Site("A".to_owned()),
        PayloadRange::new(8000.0, 10_000.0),
    );

    let points = scatter_points(&spec);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].outcome_class, 0);
    assert_eq!(points[0].booster_category, "v2");
    assert_eq!(points[0].launch_site, "A");
}

#[test]
fn inverted_range_produces_zero_points() {
    let dataset = scenario_dataset();
    let spec = resolve_scatter(&dataset, &SiteSelection::All, PayloadRange::new(4000.0, 0.0));
    assert!(scatter_points(&spec).is_empty());
}

#[test]
fn unknown_site_produces_zero_points() {
    let dataset = scenario_dataset();
    let spec = resolve_scatter(
        &dataset,
        &SiteSelection::Site("Z".to_owned()),
        PayloadRange::new(0.0, 10_000.0),
    );
    assert!(scatter_points(&spec).is_empty());
}

#[test]
fn resolver_is_idempotent() {
    let dataset = scenario_dataset();
    let range = PayloadRange::new(0.0, 10_000.0);

    let first = resolve_scatter(&dataset, &SiteSelection::All, range);
    let second = resolve_scatter(&dataset, &SiteSelection::All, range);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializable"),
        serde_json::to_string(&second).expect("serializable")
    );
}
