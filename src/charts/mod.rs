pub mod pie;
pub mod scatter;
pub mod spec;

pub use pie::resolve_pie;
pub use scatter::resolve_scatter;
pub use spec::{ChartKind, ChartSeries, ChartSpec, PieSlice, ScatterPoint};
