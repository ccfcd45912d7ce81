pub mod date_ranges;
pub mod excluded_sets;
pub mod thresholds;
