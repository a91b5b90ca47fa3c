use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Error loading or parsing an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {message}", path.display())]
    Line {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("{0}")]
    Format(String),
}

/// Reads a whole file, attaching the path to any I/O error.
pub fn read_to_string(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses exactly `expected` whitespace-separated values from a string.
///
/// # Examples
///
/// ```
/// use frontier::io;
///
/// let values = io::parse_tokens::<i32>("1 2 3\n4 5", 5).unwrap();
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
///
/// assert!(io::parse_tokens::<i32>("1 2", 5).is_err());
/// ```
pub fn parse_tokens<T: FromStr>(input: &str, expected: usize) -> Result<Vec<T>, LoadError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    if tokens.len() != expected {
        return Err(LoadError::Format(format!(
            "expected {expected} fields, found {found}",
            found = tokens.len()
        )));
    }

    tokens
        .into_iter()
        .map(|token| {
            token
                .parse()
                .map_err(|_| LoadError::Format(format!("invalid field {token:?}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        let values = parse_tokens::<u8>("1 2 3 \n 4", 4).unwrap();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_tokens_wrong_count() {
        let result = parse_tokens::<u8>("1 2 3", 4);
        assert!(matches!(result, Err(LoadError::Format(_))));
    }

    #[test]
    fn test_parse_tokens_bad_field() {
        let result = parse_tokens::<u8>("1 2 x 4", 4);
        assert!(matches!(result, Err(LoadError::Format(_))));
    }

    #[test]
    fn test_read_to_string_missing_file() {
        let result = read_to_string(Path::new("no-such-file.txt"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
