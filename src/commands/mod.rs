//! Command implementations

pub mod share;
pub mod simple;
pub mod spread;
pub mod stats;

pub use share::{ShareOutput, all_regions_share, daily_share};
pub use simple::run_simple;
pub use spread::{SpreadReport, run_spread};
pub use stats::{StatsReport, gather_stats};
