use std::env;
use std::path::PathBuf;

use autostock_generate::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut options = GenerateOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--total" => {
                options.total = args.next().ok_or("missing --total value")?.parse()?;
            }
            "--seed" => {
                options.seed = Some(args.next().ok_or("missing --seed value")?.parse()?);
            }
            "--out" => {
                options.out_path = args.next().map(PathBuf::from).ok_or("missing --out path")?;
            }
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let result = GenerationEngine::new(options).run()?;
    println!(
        "wrote {} records to {} (seed {})",
        result.report.records_generated,
        result.report.output_path.display(),
        result.report.seed
    );
    Ok(())
}
