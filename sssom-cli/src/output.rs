use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sssom_align::review::AxiomMapping;

/// Print a warning line. Warnings name skipped files and missing schema
/// roles; they bypass the tracing filter and always reach stderr.
pub fn warn(msg: &str) {
    eprintln!("{} {msg}", "warning:".yellow().bold());
}

/// Render loaded mappings as a table (`review --list`).
pub fn mapping_table(mappings: &[AxiomMapping]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["SUBJECT", "PREDICATE", "OBJECT", "CONFIDENCE"]);

    for mapping in mappings {
        table.add_row(vec![
            mapping.subject_id.clone(),
            mapping
                .predicate_id
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            mapping.object_id.clone(),
            mapping
                .confidence
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}
