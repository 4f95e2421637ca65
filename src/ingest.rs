//! Batch ingestion of raw activity lines.
//!
//! Each line is parsed and summarized independently; a failing line is
//! logged and recorded, and processing carries on with the next one.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::models::RecordId;
use crate::records::ActivityParser;

/// Stage at which a line failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Parse,
    Describe,
}

/// A successfully processed line.
#[derive(Debug, Clone, Serialize)]
pub struct IngestEntry<S> {
    pub id: RecordId,
    pub line: String,
    pub summary: S,
}

/// A line that failed to parse or describe.
#[derive(Debug, Clone, Serialize)]
pub struct IngestFailure {
    pub id: RecordId,
    pub line: String,
    pub stage: Stage,
    pub error: String,
}

/// Result of ingesting a batch of lines.
#[derive(Debug, Clone, Serialize)]
pub struct IngestResult<S> {
    pub kind: &'static str,
    pub entries: Vec<IngestEntry<S>>,
    pub errors: Vec<IngestFailure>,
}

impl<S: std::fmt::Display> IngestResult<S> {
    /// Text descriptions of the successful lines, in input order.
    pub fn reports(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| entry.summary.to_string())
    }
}

/// Run every line through `parser`, isolating failures per line.
pub fn ingest_lines<P, L>(lines: &[L], parser: &mut P) -> IngestResult<P::Summary>
where
    P: ActivityParser + ?Sized,
    L: AsRef<str>,
{
    let mut result = IngestResult {
        kind: parser.kind(),
        entries: Vec::new(),
        errors: Vec::new(),
    };

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let id = RecordId::for_line(index, line);

        if let Err(e) = parser.parse(line) {
            warn!(%id, kind = result.kind, "Failed to parse '{}': {}", line, e);
            result.errors.push(IngestFailure {
                id,
                line: line.to_string(),
                stage: Stage::Parse,
                error: e.to_string(),
            });
            continue;
        }

        match parser.summarize() {
            Ok(summary) => result.entries.push(IngestEntry {
                id,
                line: line.to_string(),
                summary,
            }),
            Err(e) => {
                warn!(%id, kind = result.kind, "Failed to describe '{}': {}", line, e);
                result.errors.push(IngestFailure {
                    id,
                    line: line.to_string(),
                    stage: Stage::Describe,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        "Ingested {} {} records ({} failed)",
        result.entries.len(),
        result.kind,
        result.errors.len()
    );
    result
}

/// Read input lines from a file, skipping blank lines.
pub fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(collect_lines(&content))
}

/// Split text into record lines, skipping blank lines and stripping `\r`.
pub fn collect_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
