use std::path::{Path, PathBuf};

use autostock_generate::{GenerateOptions, OutputFormat};

use crate::CliError;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub total: Option<u64>,
    pub seed: Option<u64>,
    pub out: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub report: Option<PathBuf>,
}

/// Load options from an optional TOML file, then apply flag overrides.
pub fn resolve_options(
    config: Option<&Path>,
    overrides: Overrides,
) -> Result<GenerateOptions, CliError> {
    let base = match config {
        Some(path) => parse_options(&std::fs::read_to_string(path)?)?,
        None => GenerateOptions::default(),
    };
    Ok(apply_overrides(base, overrides))
}

fn parse_options(content: &str) -> Result<GenerateOptions, CliError> {
    Ok(toml::from_str(content)?)
}

fn apply_overrides(mut options: GenerateOptions, overrides: Overrides) -> GenerateOptions {
    if let Some(total) = overrides.total {
        options.total = total;
    }
    if let Some(seed) = overrides.seed {
        options.seed = Some(seed);
    }
    if let Some(out) = overrides.out {
        options.out_path = out;
    }
    if let Some(format) = overrides.format {
        options.format = format;
    }
    if let Some(report) = overrides.report {
        options.report_path = Some(report);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let options = parse_options("").expect("parse empty config");
        assert_eq!(options, GenerateOptions::default());
    }

    #[test]
    fn config_fields_are_read() {
        let options = parse_options(
            r#"
total = 92
seed = 5
out_path = "seed/vehicles.csv"
format = "csv"
report_path = "seed/report.json"
"#,
        )
        .expect("parse config");
        assert_eq!(options.total, 92);
        assert_eq!(options.seed, Some(5));
        assert_eq!(options.out_path, PathBuf::from("seed/vehicles.csv"));
        assert_eq!(options.format, OutputFormat::Csv);
        assert_eq!(options.report_path, Some(PathBuf::from("seed/report.json")));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let result = parse_options("totl = 10\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn flags_override_config_values() {
        let base = parse_options("total = 92\nseed = 5\n").expect("parse config");
        let options = apply_overrides(
            base,
            Overrides {
                total: Some(10),
                format: Some(OutputFormat::Csv),
                ..Overrides::default()
            },
        );
        assert_eq!(options.total, 10);
        assert_eq!(options.seed, Some(5));
        assert_eq!(options.format, OutputFormat::Csv);
    }

    #[test]
    fn no_flags_keep_defaults() {
        let options = resolve_options(None, Overrides::default()).expect("resolve defaults");
        assert_eq!(options, GenerateOptions::default());
    }
}
