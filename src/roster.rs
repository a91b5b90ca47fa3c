//! Team-selection domain: loading the candidate roster.

use crate::io::{self, LoadError};
use crate::solvers::Candidate;
use std::path::Path;

/// Parses roster text with one `name skill rate` line per candidate.
///
/// Skill is the value a candidate contributes, rate the budget they
/// consume. Blank lines are ignored; anything else malformed is an error
/// against `path`.
pub fn parse_roster(text: &str, path: &Path) -> Result<Vec<Candidate<String>>, LoadError> {
    let mut candidates = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.is_empty() {
            continue;
        }

        if fields.len() != 3 {
            return Err(LoadError::Line {
                path: path.to_path_buf(),
                line: number + 1,
                message: format!(
                    "expected `name skill rate`, found {count} fields",
                    count = fields.len()
                ),
            });
        }

        let parse = |field: &str| -> Result<f64, LoadError> {
            field.parse().map_err(|_| LoadError::Line {
                path: path.to_path_buf(),
                line: number + 1,
                message: format!("invalid number {field:?}"),
            })
        };

        candidates.push(Candidate {
            id: fields[0].to_string(),
            value: parse(fields[1])?,
            cost: parse(fields[2])?,
        });
    }

    Ok(candidates)
}

/// Reads and parses a roster file.
pub fn load_roster(path: &Path) -> Result<Vec<Candidate<String>>, LoadError> {
    parse_roster(&io::read_to_string(path)?, path)
}
