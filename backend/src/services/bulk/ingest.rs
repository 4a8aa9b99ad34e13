//! Bulk blob parsing: a tabular text blob in, validated rows out.
//!
//! The accepted format is deliberately plain: a comma-separated header row
//! followed by data rows, no quoting, no escaping. A comma inside a value
//! is always a separator. That is a documented limitation of the format,
//! not something the parser papers over.

use crate::error::ApiError;
use common::model::bulk::{BulkRow, ParseOutcome};

/// Parses a bulk text blob into rows ready for encoding.
///
/// The first non-empty line is the header; every following line is a data
/// row aligned positionally to it. Values are trimmed and short rows are
/// padded with empty strings, so a missing trailing cell is never an
/// out-of-bounds condition.
///
/// Rows whose `type` or `content` cell is empty after trimming are dropped
/// silently: an incomplete row is "not ready", like an incomplete form.
/// Only a header missing the `type` or `content` column fails the whole
/// parse, since without both there is no way to interpret any row.
pub fn parse(text: &str) -> Result<ParseOutcome, ApiError> {
    let mut lines = text.lines();

    let header_line = loop {
        match lines.next() {
            Some(line) if !line.trim().is_empty() => break line,
            Some(_) => continue,
            None => break "",
        }
    };
    let header: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let type_idx = header.iter().position(|h| *h == "type");
    let content_idx = header.iter().position(|h| *h == "content");
    let (type_idx, content_idx) = match (type_idx, content_idx) {
        (Some(t), Some(c)) => (t, c),
        (t, c) => {
            let mut missing = Vec::new();
            if t.is_none() {
                missing.push("'type'");
            }
            if c.is_none() {
                missing.push("'content'");
            }
            return Err(ApiError::MissingRequiredColumns(missing.join(" and ")));
        }
    };
    let title_idx = header.iter().position(|h| *h == "title");

    let mut outcome = ParseOutcome::default();
    for (row_index, line) in lines.enumerate() {
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        let cell = |idx: usize| values.get(idx).copied().unwrap_or("");

        let kind = cell(type_idx);
        let content = cell(content_idx);
        if kind.is_empty() || content.is_empty() {
            continue;
        }

        let title = title_idx
            .map(cell)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        outcome.rows.push(BulkRow {
            row_index,
            kind: kind.to_string(),
            content: content.to_string(),
            title,
        });
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_with_blank_line_yields_nothing() {
        let outcome = parse("type,content\n\n").unwrap();
        assert!(outcome.rows.is_empty());
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn missing_required_columns_fail_the_whole_parse() {
        let err = parse("foo,bar\nx,y").unwrap_err();
        assert!(matches!(err, ApiError::MissingRequiredColumns(_)));
        assert!(err.to_string().contains("'type'"));
        assert!(err.to_string().contains("'content'"));

        let err = parse("type,title\ntext,Hello").unwrap_err();
        assert!(err.to_string().contains("'content'"));
        assert!(!err.to_string().contains("'type'"));
    }

    #[test]
    fn empty_input_cannot_be_interpreted() {
        assert!(matches!(
            parse(""),
            Err(ApiError::MissingRequiredColumns(_))
        ));
    }

    #[test]
    fn rows_missing_type_or_content_are_dropped_silently() {
        let outcome = parse("type,content,title\ntext,Hello,Sample\n,Missing,Title").unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert!(outcome.errors.is_empty());

        let row = &outcome.rows[0];
        assert_eq!(row.kind, "text");
        assert_eq!(row.content, "Hello");
        assert_eq!(row.title.as_deref(), Some("Sample"));
    }

    #[test]
    fn short_rows_are_padded_not_rejected() {
        let outcome = parse("type,content,title\nurl,https://example.com").unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].title, None);
    }

    #[test]
    fn commas_are_always_separators() {
        // No quoting: " two" lands in the title column, "three" is dropped.
        let outcome = parse("type,content,title\ntext,one, two,three").unwrap();
        assert_eq!(outcome.rows[0].content, "one");
        assert_eq!(outcome.rows[0].title.as_deref(), Some("two"));
    }

    #[test]
    fn source_order_and_indices_are_preserved() {
        let text = "type,content\ntext,a\n,skipped\ntext,b";
        let outcome = parse(text).unwrap();
        let indexed: Vec<(usize, &str)> = outcome
            .rows
            .iter()
            .map(|r| (r.row_index, r.content.as_str()))
            .collect();
        assert_eq!(indexed, [(0, "a"), (2, "b")]);
    }

    #[test]
    fn header_position_is_flexible() {
        // Column order comes from the header, not a fixed layout.
        let outcome = parse("title,type,content\nGreeting,text,Hi").unwrap();
        let row = &outcome.rows[0];
        assert_eq!(row.kind, "text");
        assert_eq!(row.content, "Hi");
        assert_eq!(row.title.as_deref(), Some("Greeting"));
    }
}
