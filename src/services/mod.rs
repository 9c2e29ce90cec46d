//! High-level operations consumed by the HTTP layer.

pub mod chart;
pub mod weekday;

pub use chart::calc_astro_chart;
pub use weekday::resolve_weekday;
