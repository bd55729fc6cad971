//! launchboard: dashboard core for rocket launch records.
//!
//! The crate loads a launch CSV into an immutable [`core::Dataset`], derives
//! a static page layout, and exposes two pure chart resolvers plus the
//! dispatch table that recomputes affected charts on input change. Rendering
//! and session state belong to the front end; the optional `server` feature
//! ships an axum surface for both.

pub mod charts;
pub mod core;
pub mod error;
pub mod layout;
pub mod runtime;
pub mod telemetry;

#[cfg(feature = "server")]
pub mod server;

pub use charts::{ChartKind, ChartSeries, ChartSpec, resolve_pie, resolve_scatter};
pub use crate::core::{Dataset, LaunchRecord, Outcome, PayloadRange, SiteSelection};
pub use error::{DashResult, DashboardError};
