//! Build script to generate embedded capital tables
//!
//! Reads tab-separated reference data and generates Rust source code with
//! const record arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate world capitals table
    generate_capital_table(
        "data/capitals.tsv",
        &Path::new(&out_dir).join("capitals.rs"),
        "CAPITALS",
        "World capital cities with coordinates and continent tags",
    );

    // Generate US state capitals table
    generate_capital_table(
        "data/us_state_capitals.tsv",
        &Path::new(&out_dir).join("state_capitals.rs"),
        "STATE_CAPITALS",
        "Capitals of the 50 U.S. states",
    );

    // Rebuild if reference data changes
    println!("cargo:rerun-if-changed=data/capitals.tsv");
    println!("cargo:rerun-if-changed=data/us_state_capitals.tsv");
}

fn generate_capital_table(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<[&str; 5]> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            assert!(
                fields.len() == 5,
                "Malformed row in {input_path}: expected 5 tab-separated fields, got {}: {line:?}",
                fields.len()
            );
            [fields[0], fields[1], fields[2], fields[3], fields[4]]
        })
        .collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated capital table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[CapitalRecord] = &[").unwrap();

    for [city, region_name, lat, lng, region] in rows {
        // Validate coordinates parse at build time
        let lat_val: f64 = lat
            .parse()
            .unwrap_or_else(|e| panic!("Bad latitude {lat:?} for {city}: {e}"));
        let lng_val: f64 = lng
            .parse()
            .unwrap_or_else(|e| panic!("Bad longitude {lng:?} for {city}: {e}"));

        writeln!(
            output,
            "    CapitalRecord {{ city: \"{}\", region_name: \"{}\", lat: {lat_val:?}, lng: {lng_val:?}, region: \"{}\" }},",
            escape(city),
            escape(region_name),
            escape(region),
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
