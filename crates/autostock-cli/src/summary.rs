use autostock_generate::{GenerationReport, OutputFormat};

/// Lines printed after the output file is written, followed by the
/// per-location counts sorted by `"Province - City"`.
pub fn render_summary(report: &GenerationReport) -> String {
    let label = match report.format {
        OutputFormat::Sql => "SQL",
        OutputFormat::Csv => "CSV",
    };

    let mut out = format!(
        "Generated {} vehicles\n{label} file written to: {}\n\nVehicles by location:\n",
        report.records_generated,
        report.output_path.display()
    );
    for (location, count) in &report.by_location {
        out.push_str(&format!("  {location}: {count}\n"));
    }
    out
}
