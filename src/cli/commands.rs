use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::models::OutputSchema;
use crate::processors::{DataMerger, Retyper};
use crate::readers::{read_zip_artifact, CleaningConfig, CountyFilter, IncidentReader, ZipReader};
use crate::utils::constants::{
    FIRST_YEAR, LAST_YEAR, OUTPUT_FILE, RAW_DATA_DIR, ZIP_ARTIFACT_FILE, ZIP_REFERENCE_FILE,
};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;

pub fn run(cli: Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let schema = run_pipeline(&cli.data_dir, cli.quiet)?;

    // Diagnostic dtype report, printed after the output file lands.
    println!("\n{}", schema.summary());
    Ok(())
}

/// Run the full five-stage pipeline against one data directory and return
/// the output schema. Strictly sequential; each stage owns its table until
/// it hands the result to the next one.
pub fn run_pipeline(data_dir: &Path, quiet: bool) -> Result<OutputSchema> {
    let raw_dir = data_dir.join(RAW_DATA_DIR);
    let artifact_path = data_dir.join(ZIP_ARTIFACT_FILE);
    let output_path = data_dir.join(OUTPUT_FILE);
    let writer = CsvWriter::new();

    let progress = ProgressReporter::new_spinner("Filtering ZIP reference table...", quiet);
    let zip_reader = ZipReader::new(CountyFilter::jefferson_ky());
    let county_zips = zip_reader.read_filtered(&raw_dir.join(ZIP_REFERENCE_FILE))?;
    writer.write_zip_codes(&county_zips, &artifact_path)?;
    progress.finish_with_message(&format!("Filtered {} county ZIP rows", county_zips.len()));

    let progress = ProgressReporter::new_spinner("Loading yearly incident files...", quiet);
    let yearly_paths: Vec<_> = (FIRST_YEAR..=LAST_YEAR)
        .map(|year| raw_dir.join(format!("{}.csv", year)))
        .collect();
    let incident_reader = IncidentReader::new(CleaningConfig::lmpd());
    let crime_records = incident_reader.read_files(&yearly_paths)?;
    progress.finish_with_message(&format!("Cleaned {} auto-theft rows", crime_records.len()));

    let progress = ProgressReporter::new_spinner("Merging and enriching...", quiet);
    let artifact_zips = read_zip_artifact(&artifact_path)?;
    let merged = DataMerger::new().merge(&crime_records, &artifact_zips)?;
    progress.finish_with_message(&format!("Merged {} county incidents", merged.len()));

    let schema = Retyper::new().assign_types();
    writer.write_merged(&merged, &schema, &output_path)?;
    info!(path = %output_path.display(), "pipeline complete");

    Ok(schema)
}
