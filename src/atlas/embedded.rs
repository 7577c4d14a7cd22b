//! Embedded capital tables
//!
//! Reference data compiled into the binary at build time.

/// One row of the embedded reference tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapitalRecord {
    pub city: &'static str,
    pub region_name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub region: &'static str,
}

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/capitals.rs"));
include!(concat!(env!("OUT_DIR"), "/state_capitals.rs"));
