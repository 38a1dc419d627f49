// Source-tree extractor: concatenates the "effective" code lines of a
// project into one text file for a copyright registration submission.
// Blank lines and comment-looking lines are dropped by a textual
// heuristic; the goal is an approximate strip, not program analysis.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Summary of one extraction run.
#[derive(Debug)]
pub struct ExtractReport {
    /// Count of lines written to the output file.
    pub total_lines: usize,
    /// Count of files that matched but could not be read.
    pub skipped_files: usize,
}

/// Returns true for lines the heuristic treats as comments, judged on the
/// trimmed line: a `//` prefix, a `/*` or `*` prefix, or a `*/` suffix.
/// A `//` in the middle of a line does NOT mark it as a comment, and a
/// string literal starting with `//` is misclassified. Both are accepted
/// behavior for this tool.
pub fn is_comment_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.starts_with("//") {
        return true;
    }
    if stripped.starts_with("/*") || stripped.starts_with('*') || stripped.ends_with("*/") {
        return true;
    }
    false
}

/// Returns true when the file name ends with any accepted suffix. This is
/// a case-sensitive suffix match on the name, so `.ts` also admits
/// `.d.ts` files.
fn matches_extension(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Walk the configured roots in order, filter files by suffix, and write
/// every non-blank, non-comment line to the output file. The output is
/// truncated first, so each run replaces the previous one. Unreadable
/// files are logged and skipped; only the output file itself can fail the
/// run.
pub fn extract_code(config: &ScanConfig) -> Result<ExtractReport> {
    let out = File::create(&config.output)
        .with_context(|| format!("Failed to create output file {}", config.output.display()))?;
    let mut writer = BufWriter::new(out);
    let mut report = ExtractReport {
        total_lines: 0,
        skipped_files: 0,
    };

    for root in &config.roots {
        // Entries are sorted by file name so re-runs on an unchanged tree
        // produce byte-identical output.
        let walker = WalkDir::new(root).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("Skipping unreadable entry under {}: {}", root.display(), err);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if !matches_extension(name, &config.extensions) {
                continue;
            }
            match append_file(path, &mut writer) {
                Ok(written) => report.total_lines += written,
                Err(err) => {
                    eprintln!("Skipping file {}: {}", path.display(), err);
                    report.skipped_files += 1;
                }
            }
        }
    }

    writer.flush().context("Flushing output file")?;
    Ok(report)
}

/// Append one file's retained lines to the writer and return how many
/// were written. The file is read fully before any line is written, so a
/// file that fails to read contributes nothing.
fn append_file(path: &Path, writer: &mut impl Write) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let mut written = 0;
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if is_comment_line(line) {
            continue;
        }
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}
