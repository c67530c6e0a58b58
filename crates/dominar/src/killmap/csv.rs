//! Kill-map CSV reader.
//!
//! Accepts one row per kill event. The defaults match the `killMap.csv` written
//! by the Major mutation framework:
//!
//! ```text
//! TestNo,MutantNo,[FAIL | TIME | EXC]
//! 1,1,FAIL
//! 1,4,EXC
//! 2,4,FAIL
//! ```
//!
//! Columns beyond the two identifiers are ignored. Fields may be double-quoted
//! to carry the delimiter; an unbalanced quote is a parse error. A leading
//! UTF-8 byte order mark is skipped. No schema validation is performed beyond
//! what is needed to extract the identifiers.

use super::KillMap;
use crate::result::{DominarError, DominarResult};
use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;
use tracing::{debug, warn};

/// Reference to a CSV column, by zero-based index or by header name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    /// Zero-based column index
    Index(usize),
    /// Column name from the header row
    Name(String),
}

impl ColumnRef {
    /// Parse a command-line value: digits are an index, anything else a name
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value
            .parse::<usize>()
            .map_or_else(|_| Self::Name(value.to_string()), Self::Index)
    }

    fn resolve(&self, header: Option<&[String]>) -> DominarResult<usize> {
        match self {
            Self::Index(index) => Ok(*index),
            Self::Name(name) => header
                .and_then(|fields| fields.iter().position(|field| field == name))
                .ok_or_else(|| DominarError::missing_column(name.clone())),
        }
    }
}

/// Options for reading a kill-map CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: char,
    /// Whether the first record is a header row
    pub has_header: bool,
    /// Column holding the mutant identifier
    pub mutant_column: ColumnRef,
    /// Column holding the test identifier
    pub test_column: ColumnRef,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            mutant_column: ColumnRef::Index(1),
            test_column: ColumnRef::Index(0),
        }
    }
}

impl CsvOptions {
    /// Create default (Major `killMap.csv`) options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether a header row is present
    #[must_use]
    pub const fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the mutant column
    #[must_use]
    pub fn with_mutant_column(mut self, column: ColumnRef) -> Self {
        self.mutant_column = column;
        self
    }

    /// Set the test column
    #[must_use]
    pub fn with_test_column(mut self, column: ColumnRef) -> Self {
        self.test_column = column;
        self
    }
}

fn skip_blank(chars: &mut Peekable<Chars<'_>>, delimiter: char) {
    while chars
        .next_if(|c| c.is_whitespace() && *c != delimiter)
        .is_some()
    {}
}

/// Split one record into fields.
///
/// A field wrapped in double quotes may contain the delimiter, and `""` inside
/// it is a literal quote. Whitespace around fields is dropped. Records span a
/// single line.
fn split_fields(line: &str, delimiter: char) -> Result<Vec<String>, &'static str> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        skip_blank(&mut chars, delimiter);
        let mut field = String::new();

        if chars.next_if_eq(&'"').is_some() {
            loop {
                match chars.next() {
                    Some('"') if chars.next_if_eq(&'"').is_some() => field.push('"'),
                    Some('"') => break,
                    Some(c) => field.push(c),
                    None => return Err("unterminated quoted field"),
                }
            }
            skip_blank(&mut chars, delimiter);
            match chars.next() {
                None => {
                    fields.push(field);
                    return Ok(fields);
                }
                Some(c) if c == delimiter => fields.push(field),
                Some(_) => return Err("unexpected text after closing quote"),
            }
        } else {
            let mut last = true;
            for c in chars.by_ref() {
                if c == delimiter {
                    last = false;
                    break;
                }
                field.push(c);
            }
            fields.push(field.trim_end().to_string());
            if last {
                return Ok(fields);
            }
        }
    }
}

/// Parse kill-map CSV text
pub fn parse_kill_map(text: &str, options: &CsvOptions) -> DominarResult<KillMap> {
    if matches!(options.delimiter, '"' | '\n' | '\r') {
        return Err(DominarError::config(format!(
            "unusable kill map delimiter {:?}",
            options.delimiter
        )));
    }

    let mut kills = KillMap::new();
    let mut columns: Option<(usize, usize)> = None;
    let mut rows = 0usize;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = split_fields(line, options.delimiter)
            .map_err(|message| DominarError::kill_map_parse(line_no, message))?;

        let (mutant_col, test_col) = match columns {
            Some(resolved) => resolved,
            None => {
                let header = options.has_header.then_some(fields.as_slice());
                let resolved = (
                    options.mutant_column.resolve(header)?,
                    options.test_column.resolve(header)?,
                );
                columns = Some(resolved);
                if options.has_header {
                    debug!(header = line, "skipping kill map header");
                    continue;
                }
                resolved
            }
        };

        let needed = mutant_col.max(test_col) + 1;
        if fields.len() < needed {
            return Err(DominarError::kill_map_parse(
                line_no,
                format!("expected at least {needed} fields, found {}", fields.len()),
            ));
        }

        let mutant = fields[mutant_col].as_str();
        let test = fields[test_col].as_str();
        if mutant.is_empty() {
            return Err(DominarError::kill_map_parse(line_no, "empty mutant identifier"));
        }
        if test.is_empty() {
            return Err(DominarError::kill_map_parse(line_no, "empty test identifier"));
        }

        if !kills.insert_kill(mutant, test) {
            warn!(line = line_no, mutant, test, "duplicate kill row ignored");
        }
        rows += 1;
    }

    debug!(
        rows,
        mutants = kills.len(),
        kills = kills.kill_count(),
        "parsed kill map"
    );
    Ok(kills)
}

/// Read and parse a kill-map CSV file
pub fn read_kill_map(path: &Path, options: &CsvOptions) -> DominarResult<KillMap> {
    let text = std::fs::read_to_string(path)?;
    parse_kill_map(&text, options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::mutant::{MutantId, TestId};
    use std::io::Write;

    const MAJOR_KILL_MAP: &str = "TestNo,MutantNo,[FAIL | TIME | EXC]
1,1,FAIL
1,4,EXC
2,4,FAIL
3,7,TIME
";

    fn tests_of(kills: &KillMap, mutant: &str) -> Vec<String> {
        kills
            .tests_for(&MutantId::from(mutant))
            .map(|tests| tests.iter().map(TestId::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_parse_major_format() {
        let kills = parse_kill_map(MAJOR_KILL_MAP, &CsvOptions::default()).unwrap();
        assert_eq!(kills.len(), 3);
        assert_eq!(tests_of(&kills, "1"), vec!["1"]);
        assert_eq!(tests_of(&kills, "4"), vec!["1", "2"]);
        assert_eq!(tests_of(&kills, "7"), vec!["3"]);
    }

    #[test]
    fn test_named_columns_resolved_from_header() {
        let text = "mutant;test\nm1;tA\nm2;tB\n";
        let options = CsvOptions::new()
            .with_delimiter(';')
            .with_mutant_column(ColumnRef::Name("mutant".into()))
            .with_test_column(ColumnRef::Name("test".into()));
        let kills = parse_kill_map(text, &options).unwrap();
        assert_eq!(tests_of(&kills, "m1"), vec!["tA"]);
        assert_eq!(tests_of(&kills, "m2"), vec!["tB"]);
    }

    #[test]
    fn test_missing_named_column() {
        let options = CsvOptions::new().with_mutant_column(ColumnRef::Name("Mutant".into()));
        let err = parse_kill_map(MAJOR_KILL_MAP, &options).unwrap_err();
        assert!(matches!(err, DominarError::MissingColumn { ref column } if column == "Mutant"));
    }

    #[test]
    fn test_named_column_without_header_fails() {
        let options = CsvOptions::new()
            .with_header(false)
            .with_mutant_column(ColumnRef::Name("MutantNo".into()));
        let err = parse_kill_map("1,1\n", &options).unwrap_err();
        assert!(matches!(err, DominarError::MissingColumn { .. }));
    }

    #[test]
    fn test_headerless_input() {
        let options = CsvOptions::new()
            .with_header(false)
            .with_mutant_column(ColumnRef::Index(0))
            .with_test_column(ColumnRef::Index(1));
        let kills = parse_kill_map("m1,t1\nm1,t2\n", &options).unwrap();
        assert_eq!(tests_of(&kills, "m1"), vec!["t1", "t2"]);
    }

    #[test]
    fn test_short_row_reports_line_number() {
        let text = "TestNo,MutantNo\n1,1\n\n2\n";
        let err = parse_kill_map(text, &CsvOptions::default()).unwrap_err();
        match err {
            DominarError::KillMapParse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("expected at least 2 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let err = parse_kill_map("TestNo,MutantNo\n1,\n", &CsvOptions::default()).unwrap_err();
        assert!(err.to_string().contains("empty mutant identifier"));
    }

    #[test]
    fn test_comments_blank_lines_and_quotes() {
        let text = "# generated\nTestNo,MutantNo\n\n\"t 1\", \"5\"\n";
        let kills = parse_kill_map(text, &CsvOptions::default()).unwrap();
        assert_eq!(tests_of(&kills, "5"), vec!["t 1"]);
    }

    #[test]
    fn test_quoted_field_keeps_delimiter() {
        let text = "TestNo,MutantNo\n\"testA, case 1\",5\n\"say \"\"hi\"\"\",6\n";
        let kills = parse_kill_map(text, &CsvOptions::default()).unwrap();
        assert_eq!(kills.len(), 2);
        assert_eq!(tests_of(&kills, "5"), vec!["testA, case 1"]);
        assert_eq!(tests_of(&kills, "6"), vec!["say \"hi\""]);
    }

    #[test]
    fn test_unterminated_quote_rejected() {
        let text = "TestNo,MutantNo\n\"testA, 5\n";
        match parse_kill_map(text, &CsvOptions::default()).unwrap_err() {
            DominarError::KillMapParse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("unterminated"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_text_after_closing_quote_rejected() {
        let err = parse_kill_map("TestNo,MutantNo\n\"t1\"x,5\n", &CsvOptions::default())
            .unwrap_err();
        assert!(matches!(err, DominarError::KillMapParse { line: 2, .. }));
    }

    #[test]
    fn test_split_fields_edges() {
        assert_eq!(split_fields("a,,b,", ',').unwrap(), vec!["a", "", "b", ""]);
        assert_eq!(split_fields(" \"x\" \t y ", '\t').unwrap(), vec!["x", "y"]);
        assert_eq!(split_fields("\"\"", ',').unwrap(), vec![""]);
    }

    #[test]
    fn test_quote_delimiter_is_config_error() {
        let options = CsvOptions::new().with_delimiter('"');
        let err = parse_kill_map("1\"1\n", &options).unwrap_err();
        assert!(matches!(err, DominarError::Config { .. }));
    }

    #[test]
    fn test_byte_order_mark_skipped() {
        let text = "\u{feff}TestNo,MutantNo\n1,1\n";
        let options = CsvOptions::new()
            .with_test_column(ColumnRef::Name("TestNo".into()))
            .with_mutant_column(ColumnRef::Name("MutantNo".into()));
        let kills = parse_kill_map(text, &options).unwrap();
        assert_eq!(tests_of(&kills, "1"), vec!["1"]);
    }

    #[test]
    fn test_duplicate_rows_collapse() {
        let text = "TestNo,MutantNo\n1,1\n1,1\n";
        let kills = parse_kill_map(text, &CsvOptions::default()).unwrap();
        assert_eq!(kills.kill_count(), 1);
    }

    #[test]
    fn test_header_only_is_empty() {
        let kills = parse_kill_map("TestNo,MutantNo\n", &CsvOptions::default()).unwrap();
        assert!(kills.is_empty());
    }

    #[test]
    fn test_column_ref_parse() {
        assert_eq!(ColumnRef::parse("3"), ColumnRef::Index(3));
        assert_eq!(ColumnRef::parse("MutantNo"), ColumnRef::Name("MutantNo".into()));
    }

    #[test]
    fn test_read_kill_map_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MAJOR_KILL_MAP.as_bytes()).unwrap();
        let kills = read_kill_map(file.path(), &CsvOptions::default()).unwrap();
        assert_eq!(kills.kill_count(), 4);
    }

    #[test]
    fn test_read_kill_map_missing_file() {
        let err = read_kill_map(Path::new("/nonexistent/killMap.csv"), &CsvOptions::default())
            .unwrap_err();
        assert!(matches!(err, DominarError::Io(_)));
    }

    #[test]
    fn test_options_yaml() {
        let yaml = "delimiter: ';'\nmutant_column: mutant\ntest_column: 2\n";
        let options: CsvOptions = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(options.delimiter, ';');
        assert!(options.has_header);
        assert_eq!(options.mutant_column, ColumnRef::Name("mutant".into()));
        assert_eq!(options.test_column, ColumnRef::Index(2));
    }
}
