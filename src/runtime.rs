//! Reactive dispatch: which chart recomputes when which control changes.
//!
//! The original framework wired this declaratively; here the wiring is an
//! explicit table keyed by input identity, and the resolvers stay pure
//! functions taking state as arguments instead of reading ambient globals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::{ChartSpec, resolve_pie, resolve_scatter};
use crate::core::{Dataset, PayloadRange, SiteSelection};

pub const INPUT_SITE_DROPDOWN: &str = "site-dropdown";
pub const INPUT_PAYLOAD_SLIDER: &str = "payload-slider";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPie,
    #[serde(rename = "success-payload-scatter-chart")]
    PayloadScatter,
}

impl OutputId {
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::SuccessPie => "success-pie-chart",
            Self::PayloadScatter => "success-payload-scatter-chart",
        }
    }

    pub const ALL: [OutputId; 2] = [OutputId::SuccessPie, OutputId::PayloadScatter];
}

/// The dropdown feeds both charts; the slider only feeds the scatter.
#[must_use]
pub fn affected_outputs(input: InputId) -> &'static [OutputId] {
    match input {
        InputId::SiteDropdown => &[OutputId::SuccessPie, OutputId::PayloadScatter],
        InputId::PayloadSlider => &[OutputId::PayloadScatter],
    }
}

/// Per-session control state. Never persisted; each browser session owns
/// its own copy and mutates it only through [`apply_change`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl SelectionState {
    /// The page-load defaults: all sites, observed payload bounds.
    #[must_use]
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload: dataset.payload_bounds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input", content = "value")]
pub enum InputChange {
    #[serde(rename = "site-dropdown")]
    Site(SiteSelection),
    #[serde(rename = "payload-slider")]
    PayloadRange(PayloadRange),
}

impl InputChange {
    #[must_use]
    pub fn input_id(&self) -> InputId {
        match self {
            Self::Site(_) => InputId::SiteDropdown,
            Self::PayloadRange(_) => InputId::PayloadSlider,
        }
    }
}

/// One recomputed chart, addressed by its output identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub output: OutputId,
    pub spec: ChartSpec,
}

/// Resolves one chart from the current state.
#[must_use]
pub fn resolve_output(dataset: &Dataset, state: &SelectionState, output: OutputId) -> ChartSpec {
    match output {
        OutputId::SuccessPie => resolve_pie(dataset, &state.site),
        OutputId::PayloadScatter => resolve_scatter(dataset, &state.site, state.payload),
    }
}

/// Resolves every chart, the initial page render.
#[must_use]
pub fn render_all(dataset: &Dataset, state: &SelectionState) -> Vec<ChartUpdate> {
    OutputId::ALL
        .into_iter()
        .map(|output| ChartUpdate {
            output,
            spec: resolve_output(dataset, state, output),
        })
        .collect()
}

/// Applies one control change and recomputes exactly the charts wired to
/// that input.
pub fn apply_change(
    dataset: &Dataset,
    state: &mut SelectionState,
    change: InputChange,
) -> Vec<ChartUpdate> {
    let input = change.input_id();
    match change {
        InputChange::Site(site) => state.site = site,
        InputChange::PayloadRange(range) => state.payload = range,
    }

    let outputs = affected_outputs(input);
    debug!(?input, affected = outputs.len(), "dispatch input change");
    outputs
        .iter()
        .map(|&output| ChartUpdate {
            output,
            spec: resolve_output(dataset, state, output),
        })
        .collect()
}
