use indexmap::IndexMap;

use crate::charts::spec::{ChartSpec, PieSlice};
use crate::core::{Dataset, Outcome, SiteSelection};

/// Resolves the success pie chart for the current dropdown selection.
///
/// With [`SiteSelection::All`] every site becomes one slice valued at its
/// success count, in dataset first-appearance order; zero-success sites keep
/// their slice. With a single site the slices are the occurrence counts of
/// each outcome class, omitting a class that never occurs. An unknown site
/// yields zero slices rather than failing.
///
/// Pure function of its inputs; no side effects beyond the returned spec.
#[must_use]
pub fn resolve_pie(dataset: &Dataset, selection: &SiteSelection) -> ChartSpec {
    match selection {
        SiteSelection::All => {
            let mut successes_by_site: IndexMap<&str, u64> = IndexMap::new();
            for record in dataset.records() {
                let entry = successes_by_site
                    .entry(record.launch_site.as_str())
                    .or_insert(0);
                *entry += u64::from(record.outcome.class());
            }

            let slices = successes_by_site
                .into_iter()
                .map(|(site, successes)| PieSlice::new(site, successes))
                .collect();
            ChartSpec::pie("Total Successful Launches by Site", slices)
        }
        SiteSelection::Site(site) => {
            let mut successes = 0_u64;
            let mut failures = 0_u64;
            for record in dataset.records() {
                if &record.launch_site != site {
                    continue;
                }
                match record.outcome {
                    Outcome::Success => successes += 1,
                    Outcome::Failure => failures += 1,
                }
            }

            let mut slices = Vec::with_capacity(2);
            if successes > 0 {
                slices.push(PieSlice::new(Outcome::Success.label(), successes));
            }
            if failures > 0 {
                slices.push(PieSlice::new(Outcome::Failure.label(), failures));
            }
            ChartSpec::pie(format!("Launch Outcomes for {site}"), slices)
        }
    }
}
