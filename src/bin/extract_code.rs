// Entrypoint for the source-code extractor.
// - Keeps `main` small: build the scan settings and hand them to the
//   extractor.
// - Returns `anyhow::Result` so I/O errors on the output file print a
//   readable diagnostic.

use edusys_devtools::config::ScanConfig;
use edusys_devtools::extract;

fn main() -> anyhow::Result<()> {
    let config = ScanConfig::default();
    let report = extract::extract_code(&config)?;

    println!("Extraction finished: {}", config.output.display());
    println!("Total lines written: {}", report.total_lines);
    if report.skipped_files > 0 {
        println!("Skipped {} unreadable files", report.skipped_files);
    }
    Ok(())
}
