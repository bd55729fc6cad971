use crate::charts::spec::{ChartSpec, ScatterPoint};
use crate::core::{Dataset, PayloadRange, SiteSelection};

/// Resolves the payload-vs-outcome scatter chart.
///
/// Keeps records whose payload mass lies in `range` (inclusive on both
/// ends), restricted to the selected site unless the selection is `All`.
/// An inverted range matches nothing and produces an empty point set.
#[must_use]
pub fn resolve_scatter(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ChartSpec {
    let points: Vec<ScatterPoint> = dataset
        .records()
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .filter(|record| selection.matches(&record.launch_site))
        .map(|record| ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome.class(),
            booster_category: record.booster_category.clone(),
            launch_site: record.launch_site.clone(),
        })
        .collect();

    let title = match selection {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_owned(),
        SiteSelection::Site(site) => format!("Payload vs. Outcome for {site}"),
    };
    ChartSpec::scatter(title, points)
}
