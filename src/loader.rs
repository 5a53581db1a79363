//! Loading integer lists from text files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, StatsError};

/// Integers in file line order until sorted.
pub type NumberList = Vec<i32>;

/// Parse every non-blank line of `reader` as an integer.
///
/// Stops at the first line that is not an integer; nothing parsed before it
/// is returned. Lines are numbered from 1 in the error.
pub fn parse_numbers<R: BufRead>(reader: R) -> Result<NumberList> {
    let mut numbers = NumberList::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(StatsError::ReadError)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.parse::<i32>() {
            Ok(number) => numbers.push(number),
            Err(_) => {
                return Err(StatsError::MalformedLine {
                    line: index + 1,
                    content: trimmed.to_string(),
                })
            }
        }
    }

    Ok(numbers)
}

/// Load a non-empty [NumberList] from `path`.
pub fn load_numbers(path: &Path) -> Result<NumberList> {
    let name = path.display().to_string();
    if !path.is_file() {
        warn!("`{}` does not exist or is not a file", name);
        return Err(StatsError::MissingFile(name));
    }

    let file = File::open(path).map_err(|err| {
        warn!("Unable to open `{}`: {}", name, err);
        StatsError::MissingFile(name.clone())
    })?;

    let numbers = parse_numbers(BufReader::new(file)).map_err(|err| {
        warn!("Aborting read of `{}`: {}", name, err);
        err
    })?;

    if numbers.is_empty() {
        warn!("`{}` has no numbers", name);
        return Err(StatsError::EmptyData(name));
    }

    debug!("Loaded {} numbers from `{}`", numbers.len(), name);
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::{tempdir, NamedTempFile};

    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let input = Cursor::new("5\n\n  3  \n\t\n-9\n+1\r\n");
        assert_eq!(parse_numbers(input).unwrap(), vec![5, 3, -9, 1]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_numbers(Cursor::new("")).unwrap().is_empty());
        assert!(parse_numbers(Cursor::new("\n \n\n")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_line_is_fatal() {
        let input = Cursor::new("1\n2\n\n3.5\n4\n");
        match parse_numbers(input) {
            Err(StatsError::MalformedLine { line, content }) => {
                assert_eq!(line, 4);
                assert_eq!(content, "3.5");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        let input = Cursor::new("2147483647\n-2147483648\n");
        assert_eq!(parse_numbers(input).unwrap(), vec![i32::MAX, i32::MIN]);

        let input = Cursor::new("2147483648\n");
        assert!(matches!(
            parse_numbers(input),
            Err(StatsError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let input = Cursor::new(vec![b'1', b'\n', 0xff, 0xfe, b'\n']);
        assert!(matches!(
            parse_numbers(input),
            Err(StatsError::ReadError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_numbers(&dir.path().join("File 1.txt")).unwrap_err();
        assert!(matches!(err, StatsError::MissingFile(_)));
    }

    #[test]
    fn test_load_directory_is_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("File 3.txt");
        std::fs::create_dir(&path).unwrap();

        let err = load_numbers(&path).unwrap_err();
        assert!(matches!(err, StatsError::MissingFile(_)));
    }

    #[test]
    fn test_load_blank_file_is_empty_data() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\n   \n").unwrap();

        let err = load_numbers(file.path()).unwrap_err();
        assert!(matches!(err, StatsError::EmptyData(_)));
    }

    #[test]
    fn test_load_numbers_in_file_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "5\n3\n9\n1\n7").unwrap();

        assert_eq!(load_numbers(file.path()).unwrap(), vec![5, 3, 9, 1, 7]);
    }
}
