//! Line-oriented field lookup and in-place rewriting.
//!
//! Creature files are not parsed. Fields are found by name, one line at a time,
//! with a few heuristics deciding which occurrence is the real one:
//!
//! * text after `//` is a comment and never matches,
//! * occurrences three or more braces deep belong to nested blocks
//!   (`graphics`, `sound`, ability bodies) and are skipped,
//! * on lines with more than two `"`, an occurrence whose value is a string
//!   (`"attack": "ATTACK.wav"`) is skipped.
//!
//! Rewrites touch only the value text of the matched line.

use std::ops::Range;

use tracing::{debug, warn};

use crate::core_api::{CoreError, CoreErrorCode};
use crate::document::Document;

pub const MAX_FIELD: &str = "max";
pub const MIN_FIELD: &str = "min";
pub const ABILITIES_FIELD: &str = "abilities";
pub const ABILITY_VALUE_FIELD: &str = "val";

const COMMENT_MARKER: &str = "//";
const NESTED_BLOCK_DEPTH: i32 = 3;
const MAX_QUOTES_FOR_NUMERIC_FIELD: usize = 2;

/// Value reported for a `min` or `max` that is missing from its block.
pub const ABSENT: i32 = -1;

/// The `min`/`max` pair of a block such as `"damage": { "min": 1, "max": 3 }`.
///
/// Either side is [`ABSENT`] when the block does not define it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMaxPair {
    pub max: i32,
    pub min: i32,
}

impl MinMaxPair {
    pub const ABSENT: Self = Self {
        max: ABSENT,
        min: ABSENT,
    };
}

/// Byte position of `text` on `line`, unless that occurrence sits inside a `//` comment.
pub fn uncommented_position(line: &str, text: &str) -> Option<usize> {
    let position = line.find(text)?;
    match line.find(COMMENT_MARKER) {
        Some(comment) if comment <= position => None,
        _ => Some(position),
    }
}

pub fn is_uncommented(line: &str, text: &str) -> bool {
    uncommented_position(line, text).is_some()
}

/// True when `field` on `line` carries a string rather than a number.
///
/// Only lines with more than two `"` are suspects (`"attack": "PIKEATTK.wav"`);
/// among those, a field whose value does not start with a quote, as in
/// `"attack": 5, "defense": 7`, is still numeric.
pub fn is_string_valued(line: &str, field: &str) -> bool {
    if line.matches('"').count() <= MAX_QUOTES_FOR_NUMERIC_FIELD {
        return false;
    }
    match value_span(line, field) {
        Some(span) => line[span].trim_start().starts_with('"'),
        None => true,
    }
}

pub fn is_within_field_depth(depth: i32) -> bool {
    depth < NESTED_BLOCK_DEPTH
}

pub fn brace_delta(line: &str) -> i32 {
    let opened = line.matches('{').count() as i32;
    let closed = line.matches('}').count() as i32;
    opened - closed
}

pub fn closes_block(line: &str) -> bool {
    line.contains('}')
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(comment) => &line[..comment],
        None => line,
    }
}

/// Index of the line holding the top-level numeric `field`.
///
/// Depth is counted with the braces of the candidate line already applied, so a
/// line that opens a nested block is judged at the nested depth.
pub fn locate_field_line(document: &Document, field: &str) -> Option<usize> {
    let mut depth = 0;
    for (index, line) in document.lines().iter().enumerate() {
        depth += brace_delta(line);
        if !is_uncommented(line, field) || is_string_valued(line, field) {
            continue;
        }
        if is_within_field_depth(depth) {
            return Some(index);
        }
    }
    None
}

/// Position of the `:` after the first occurrence of `field` used as a key,
/// `"field" : ...` or `field: ...`. Occurrences inside comments or inside other
/// text (`"attack.def"`) do not count.
fn key_colon(code: &str, field: &str) -> Option<usize> {
    code.match_indices(field).find_map(|(position, _)| {
        let rest = &code[position + field.len()..];
        let rest = rest.strip_prefix('"').unwrap_or(rest).trim_start();
        rest.starts_with(':').then_some(code.len() - rest.len())
    })
}

/// Byte range of the value belonging to `field` on `line`.
///
/// The value starts right after the key's `:` and ends at the next `,` or `}`,
/// at a `//` comment, or at the end of the line.
fn value_span(line: &str, field: &str) -> Option<Range<usize>> {
    let code = strip_comment(line);
    let start = key_colon(code, field)? + 1;
    let end = code[start..]
        .find(|c: char| c == ',' || c == '}')
        .map_or(code.len(), |offset| start + offset);
    Some(start..end)
}

/// Integer value of `field` on a single line.
///
/// When several fields share the line the comma-separated segment holding
/// `field` is used, so `"attack": 5, "defense": 7,` yields both values.
pub fn extract_value(line: &str, field: &str) -> Result<i32, CoreError> {
    let Some(span) = value_span(line, field) else {
        return Err(CoreError::new(
            CoreErrorCode::Parse,
            format!("\"{field}\" is not used as a key in line {:?}", line.trim()),
        ));
    };
    let raw = line[span].trim();
    raw.parse().map_err(|_| {
        CoreError::new(
            CoreErrorCode::Parse,
            format!("value of \"{field}\" is not an integer: {raw:?}"),
        )
    })
}

pub fn locate_and_extract_int(document: &Document, field: &str) -> Result<i32, CoreError> {
    let index =
        locate_field_line(document, field).ok_or_else(|| CoreError::field_not_found(field))?;
    let value = extract_value(&document.lines()[index], field)?;
    debug!(field, line = index, value, "located field");
    Ok(value)
}

/// Lines of the first block opened by `block_field`, up to and including the
/// first line that contains a closing brace.
fn block_lines(document: &Document, block_field: &str) -> Option<Range<usize>> {
    let lines = document.lines();
    let start = lines.iter().position(|line| is_uncommented(line, block_field))?;
    let end = lines[start..]
        .iter()
        .position(|line| closes_block(line))
        .map_or(lines.len(), |offset| start + offset + 1);
    Some(start..end)
}

/// Reads the `max` and `min` fields of the block opened by `block_field`.
///
/// Missing values (or a missing block) come back as [`ABSENT`].
pub fn locate_min_max_pair(
    document: &Document,
    block_field: &str,
) -> Result<MinMaxPair, CoreError> {
    let mut pair = MinMaxPair::ABSENT;
    let Some(range) = block_lines(document, block_field) else {
        return Ok(pair);
    };
    for line in &document.lines()[range] {
        if is_uncommented(line, MAX_FIELD) {
            pair.max = extract_value(line, MAX_FIELD)?;
        }
        if is_uncommented(line, MIN_FIELD) {
            pair.min = extract_value(line, MIN_FIELD)?;
        }
    }
    Ok(pair)
}

/// True when `ability` appears anywhere outside a comment.
pub fn ability_exists(document: &Document, ability: &str) -> bool {
    document
        .lines()
        .iter()
        .any(|line| is_uncommented(line, ability))
}

/// The `val` of the first ability found inside an `abilities` block, or [`ABSENT`].
///
/// Every magnitude-bearing ability of a creature reads this same number.
pub fn ability_magnitude(document: &Document) -> Result<i32, CoreError> {
    let mut inside = false;
    for line in document.lines() {
        if is_uncommented(line, ABILITIES_FIELD) {
            inside = true;
        }
        if inside {
            if is_uncommented(line, ABILITY_VALUE_FIELD) {
                return extract_value(line, ABILITY_VALUE_FIELD);
            }
            if closes_block(line) {
                inside = false;
            }
        }
    }
    Ok(ABSENT)
}

/// Rewrites the value of the top-level numeric `field`.
///
/// Indentation, the key, a trailing comma and any trailing comment are kept.
/// A missing field leaves the document as it is.
pub fn replace_scalar_field(document: &mut Document, field: &str, value: i32) {
    let Some(index) = locate_field_line(document, field) else {
        warn!(field, "field not present, nothing rewritten");
        return;
    };
    let line = document.line_mut(index);
    let Some(span) = value_span(line, field) else {
        warn!(field, line = index, "field has no value to rewrite");
        return;
    };
    let old = &line[span.clone()];
    let trailing = &old[old.trim_end().len()..];
    let replacement = format!(" {value}{trailing}");
    line.replace_range(span, &replacement);
    debug!(field, line = index, value, "rewrote field");
}

/// Rewrites `min` and `max` inside the block opened by `block_field`.
///
/// Space characters are removed from every `min`/`max` line of the block before
/// the old `"max":<old>` / `"min":<old>` text is substituted, so those lines come
/// back without spaces apart from the one after each rewritten colon.
pub fn replace_min_max_pair(
    document: &mut Document,
    block_field: &str,
    min: i32,
    max: i32,
) -> Result<bool, CoreError> {
    let old = locate_min_max_pair(document, block_field)?;
    let Some(range) = block_lines(document, block_field) else {
        warn!(block = block_field, "block not present, nothing rewritten");
        return Ok(false);
    };
    for index in range {
        let line = document.line_mut(index);
        if is_uncommented(line, MAX_FIELD) {
            line.retain(|c| c != ' ');
            *line = line.replace(
                &format!("\"{MAX_FIELD}\":{}", old.max),
                &format!("\"{MAX_FIELD}\": {max}"),
            );
        }
        if is_uncommented(line, MIN_FIELD) {
            line.retain(|c| c != ' ');
            *line = line.replace(
                &format!("\"{MIN_FIELD}\":{}", old.min),
                &format!("\"{MIN_FIELD}\": {min}"),
            );
        }
    }
    debug!(block = block_field, min, max, "rewrote min/max block");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_occurrence_is_ignored() {
        assert!(is_uncommented("\"attack\": 5, // was 4", "attack"));
        assert!(!is_uncommented("// \"attack\": 5", "attack"));
        assert!(!is_uncommented("\"speed\": 5 // faster than attack", "attack"));
        assert!(!is_uncommented("\"speed\": 5", "attack"));
    }

    #[test]
    fn string_values_are_sniffed_on_quote_heavy_lines() {
        assert!(is_string_valued("\"attack\": \"PIKEATTK.wav\",", "attack"));
        assert!(is_string_valued("\"animation\": \"attack.def\", \"x\": 5", "attack"));
        assert!(!is_string_valued("\"attack\": 4,", "attack"));
        assert!(!is_string_valued("\"attack\": 5, \"defense\": 7,", "defense"));
    }

    #[test]
    fn key_colon_requires_key_position() {
        assert_eq!(key_colon("\"level\" : 1", "level"), Some(8));
        assert_eq!(key_colon("level: 1", "level"), Some(5));
        assert_eq!(key_colon("\"levelUp\": 1", "level"), None);
    }

    #[test]
    fn brace_delta_counts_both_directions() {
        assert_eq!(brace_delta("\"damage\": { \"min\": 1, \"max\": 3 },"), 0);
        assert_eq!(brace_delta("\"graphics\" : {"), 1);
        assert_eq!(brace_delta("}}"), -2);
    }

    #[test]
    fn nesting_limit_is_three() {
        assert!(is_within_field_depth(2));
        assert!(!is_within_field_depth(3));
    }

    #[test]
    fn value_span_stops_at_comma_brace_or_comment() {
        let line = "\t\"hitPoints\" : 10, // note";
        let span = value_span(line, "hitPoints").unwrap();
        assert_eq!(&line[span], " 10");

        let line = "{ \"min\": 1, \"max\": 3 }";
        let span = value_span(line, "max").unwrap();
        assert_eq!(&line[span], " 3 ");
    }

    #[test]
    fn extract_value_rejects_text() {
        let err = extract_value("\"level\": high,", "level").unwrap_err();
        assert_eq!(err.code, CoreErrorCode::Parse);
    }
}
