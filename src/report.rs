//! # Report — Line-Oriented Result Files
//!
//! The analyses hand their results over as plain nested values ([`Entry`]):
//! integers, floats, strings, and lists of those. [`ReportWriter`] puts one
//! entry per line into a `.txt` file under its data directory, each line
//! rendered as compact JSON.
//!
//! Files are written atomically: the content goes to a `.tmp` sibling first
//! and is then renamed over the target, so a crash never leaves half a report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::pattern::{GapPattern, OffsetPattern, Periodicity};
use crate::stats::{Statistics, TimingCurve};

/// A stringifiable nested value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Int(u64),
    Float(f64),
    Text(String),
    List(Vec<Entry>),
}

impl From<usize> for Entry {
    fn from(n: usize) -> Self {
        Entry::Int(n as u64)
    }
}

impl From<f64> for Entry {
    fn from(x: f64) -> Self {
        Entry::Float(x)
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Text(s.to_string())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Text(s)
    }
}

impl<T: Into<Entry>> From<Vec<T>> for Entry {
    fn from(items: Vec<T>) -> Self {
        Entry::List(items.into_iter().map(Into::into).collect())
    }
}

// ── Conversions ─────────────────────────────────────────────────

/// Header row, then one `[bound, [seconds per variant…]]` row per size.
pub fn statistics_entries(stats: &Statistics) -> Vec<Entry> {
    let header = Entry::List(vec![
        Entry::from(vec![
            "Smallest Test Size",
            "Largest Test Size",
            "Number of Tests per Sieve per Size",
        ]),
        Entry::from(vec![
            stats.plan.min_size,
            stats.plan.max_size,
            stats.plan.trials,
        ]),
    ]);
    let mut entries = vec![header];
    entries.extend(stats.rows.iter().map(|row| {
        Entry::List(vec![
            Entry::from(row.bound),
            Entry::from(
                row.averages
                    .iter()
                    .map(|d| d.as_secs_f64())
                    .collect::<Vec<_>>(),
            ),
        ])
    }));
    entries
}

/// One `["Sieve i (name)", [[bound, seconds], …]]` row per variant.
pub fn curve_entries(curves: &[TimingCurve]) -> Vec<Entry> {
    curves
        .iter()
        .map(|curve| {
            let points = curve
                .points
                .iter()
                .map(|&(bound, secs)| Entry::List(vec![Entry::from(bound), Entry::from(secs)]))
                .collect();
            Entry::List(vec![
                Entry::from(format!("Sieve {} ({})", curve.variant, curve.name)),
                Entry::List(points),
            ])
        })
        .collect()
}

pub fn gap_entries(bound: usize, patterns: &[GapPattern]) -> Vec<Entry> {
    let mut entries = vec![Entry::from(format!(
        "Patterns of unchecked numbers in sieve from a starting number up to {}",
        bound.saturating_sub(1)
    ))];
    entries.extend(patterns.iter().map(|p| {
        let mut row = vec![Entry::from(format!("Pattern for {}", p.prime))];
        row.extend(p.gaps.iter().map(|&g| Entry::from(g)));
        Entry::List(row)
    }));
    entries
}

pub fn offset_entries(bound: usize, patterns: &[OffsetPattern]) -> Vec<Entry> {
    let mut entries = vec![Entry::from(format!(
        "Distances to the next composite in multiples of the current prime up to {}",
        bound
    ))];
    entries.extend(patterns.iter().map(|p| {
        let (status, length) = match &p.offsets {
            Periodicity::Found { period } => ("Found", format!("Length: {}", period.len())),
            Periodicity::NotFound { .. } => ("Not Found", "Length: NA".to_string()),
        };
        let mut row = vec![
            Entry::from(format!("Pattern for {}", p.prime)),
            Entry::from(status),
            Entry::from(length),
        ];
        row.extend(p.offsets.values().iter().map(|&v| Entry::from(v)));
        Entry::List(row)
    }));
    entries
}

// ── Writer ──────────────────────────────────────────────────────

pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReportWriter { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Target path for `name`, with `.txt` appended when missing.
    pub fn path_for(&self, name: &str) -> PathBuf {
        if name.ends_with(".txt") {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{}.txt", name))
        }
    }

    /// Write `entries` one per line and return the final path.
    pub fn write(&self, name: &str, entries: &[Entry]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating report directory {}", self.dir.display()))?;

        let mut body = String::new();
        for entry in entries {
            body.push_str(&serde_json::to_string(entry)?);
            body.push('\n');
        }

        let path = self.path_for(name);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &body).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("renaming into {}", path.display()))?;

        info!(path = %path.display(), lines = entries.len(), "report written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{SizeAverages, StatsPlan};
    use std::time::Duration;

    #[test]
    fn entries_render_as_compact_json() {
        let entry = Entry::List(vec![
            Entry::from("Pattern for 5"),
            Entry::from(4usize),
            Entry::from(vec![0.5f64]),
        ]);
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"["Pattern for 5",4,[0.5]]"#
        );
    }

    #[test]
    fn path_for_appends_txt_once() {
        let writer = ReportWriter::new("data");
        assert_eq!(writer.path_for("stats"), PathBuf::from("data/stats.txt"));
        assert_eq!(writer.path_for("stats.txt"), PathBuf::from("data/stats.txt"));
    }

    #[test]
    fn write_creates_directory_and_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().join("nested/data"));
        let entries = vec![Entry::from("header"), Entry::from(vec![1usize, 2, 3])];

        let path = writer.write("out", &entries).unwrap();
        assert_eq!(path, dir.path().join("nested/data/out.txt"));

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "\"header\"\n[1,2,3]\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn write_replaces_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());
        writer.write("r", &[Entry::from("old")]).unwrap();
        let path = writer.write("r", &[Entry::from("new")]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "\"new\"\n");
    }

    #[test]
    fn offset_entries_tag_found_and_not_found() {
        let patterns = vec![
            OffsetPattern {
                prime: 5,
                offsets: Periodicity::Found { period: vec![4, 2] },
            },
            OffsetPattern {
                prime: 11,
                offsets: Periodicity::NotFound {
                    sequence: vec![10, 2],
                },
            },
        ];
        let entries = offset_entries(100, &patterns);
        assert_eq!(entries.len(), 3);
        assert_eq!(
            serde_json::to_string(&entries[1]).unwrap(),
            r#"["Pattern for 5","Found","Length: 2",4,2]"#
        );
        assert_eq!(
            serde_json::to_string(&entries[2]).unwrap(),
            r#"["Pattern for 11","Not Found","Length: NA",10,2]"#
        );
    }

    #[test]
    fn statistics_entries_lead_with_the_plan() {
        let stats = Statistics {
            plan: StatsPlan {
                min_size: 1_000,
                max_size: 1_000,
                trials: 2,
            },
            rows: vec![SizeAverages {
                bound: 1_000,
                averages: vec![Duration::from_millis(500), Duration::from_millis(250)],
            }],
        };
        let entries = statistics_entries(&stats);
        assert_eq!(entries.len(), 2);
        assert_eq!(
            serde_json::to_string(&entries[1]).unwrap(),
            "[1000,[0.5,0.25]]"
        );
    }

    #[test]
    fn gap_entries_prefix_each_pattern() {
        let patterns = vec![GapPattern {
            prime: 3,
            gaps: vec![2, 2],
        }];
        let entries = gap_entries(8, &patterns);
        assert_eq!(
            serde_json::to_string(&entries[1]).unwrap(),
            r#"["Pattern for 3",2,2]"#
        );
    }
}
