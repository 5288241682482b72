//! # Front Matter Extraction
//!
//! Splits a content file into its YAML front matter block and Markdown body,
//! then converts the YAML into a `serde_json::Value` tree for validation.
//!
//! A content file must open with a `---` line and close the block with a
//! second `---` line. CRLF line endings and a leading UTF-8 BOM are accepted.

use serde_json::Value;
use thiserror::Error;

/// Error extracting front matter from a content file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterError {
    /// The file does not start with a `---` line.
    #[error("front matter must open with a '---' line")]
    MissingOpening,

    /// The opening `---` has no matching closing line.
    #[error("front matter block is not closed with a '---' line")]
    MissingClosing,

    /// The block is not valid YAML.
    #[error("invalid YAML in front matter: {0}")]
    InvalidYaml(String),

    /// The YAML uses a construct with no JSON equivalent.
    #[error("unsupported front matter value: {0}")]
    Unsupported(String),
}

/// A content file split into parsed front matter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContent<'a> {
    /// Front matter as a JSON value tree. An empty block is an empty mapping.
    pub data: Value,
    /// Everything after the closing delimiter.
    pub body: &'a str,
}

/// Split `source` into the raw YAML block and the body.
///
/// # Errors
///
/// Returns [`FrontMatterError::MissingOpening`] or
/// [`FrontMatterError::MissingClosing`] when the delimiters are absent.
pub fn split(source: &str) -> Result<(&str, &str), FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let first = lines.next().ok_or(FrontMatterError::MissingOpening)?;
    if !is_delimiter(first) {
        return Err(FrontMatterError::MissingOpening);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_delimiter(line) {
            return Ok((&source[yaml_start..offset], &source[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(FrontMatterError::MissingClosing)
}

/// Split and parse a content file.
///
/// # Errors
///
/// Returns a [`FrontMatterError`] when the delimiters are missing or the block
/// cannot be parsed.
pub fn parse(source: &str) -> Result<ParsedContent<'_>, FrontMatterError> {
    let (yaml, body) = split(source)?;

    if yaml.trim().is_empty() {
        return Ok(ParsedContent {
            data: Value::Object(serde_json::Map::new()),
            body,
        });
    }

    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?;
    let data = yaml_to_json_value(yaml_value).map_err(FrontMatterError::Unsupported)?;

    Ok(ParsedContent { data, body })
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Convert parsed YAML into a JSON value tree.
///
/// Non-finite floats have no JSON form and are rejected rather than turned
/// into `null`. Tagged values and non-string keys have no JSON form either
/// and surface as deserialization errors.
pub fn yaml_to_json_value(yaml: serde_yaml::Value) -> Result<Value, String> {
    if let Some(f) = find_non_finite(&yaml) {
        return Err(format!("cannot represent float {f} in JSON"));
    }
    serde_yaml::from_value(yaml).map_err(|e| e.to_string())
}

fn find_non_finite(yaml: &serde_yaml::Value) -> Option<f64> {
    match yaml {
        serde_yaml::Value::Number(n) => n.as_f64().filter(|f| !f.is_finite()),
        serde_yaml::Value::Sequence(seq) => seq.iter().find_map(find_non_finite),
        serde_yaml::Value::Mapping(map) => map
            .iter()
            .find_map(|(k, v)| find_non_finite(k).or_else(|| find_non_finite(v))),
        serde_yaml::Value::Tagged(tagged) => find_non_finite(&tagged.value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let src = "---\ntitle: Hello\n---\n# Body\n";
        let (yaml, body) = split(src).unwrap();
        assert_eq!(yaml, "title: Hello\n");
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_crlf_and_bom() {
        let src = "\u{feff}---\r\ntitle: Hello\r\n---\r\nBody";
        let (yaml, body) = split(src).unwrap();
        assert_eq!(yaml, "title: Hello\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_closing_at_eof() {
        let (yaml, body) = split("---\ntitle: x\n---").unwrap();
        assert_eq!(yaml, "title: x\n");
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_missing_opening() {
        assert_eq!(split("# Just markdown\n"), Err(FrontMatterError::MissingOpening));
        assert_eq!(split(""), Err(FrontMatterError::MissingOpening));
    }

    #[test]
    fn test_split_missing_closing() {
        assert_eq!(
            split("---\ntitle: x\n# body\n"),
            Err(FrontMatterError::MissingClosing)
        );
    }

    #[test]
    fn test_horizontal_rule_in_body_is_kept() {
        let (_, body) = split("---\ntitle: x\n---\nabove\n---\nbelow\n").unwrap();
        assert_eq!(body, "above\n---\nbelow\n");
    }

    #[test]
    fn test_parse_empty_block_is_empty_mapping() {
        let parsed = parse("---\n---\nbody").unwrap();
        assert_eq!(parsed.data, serde_json::json!({}));
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn test_parse_values() {
        let parsed = parse("---\ntitle: Codes\npriority: 2\ngroup: Codes\n---\n").unwrap();
        assert_eq!(parsed.data["title"], "Codes");
        assert_eq!(parsed.data["priority"], 2);
        assert_eq!(parsed.data["group"], "Codes");
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse("---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::InvalidYaml(_)));
    }

    #[test]
    fn test_nan_is_unsupported() {
        let err = parse("---\npriority: .nan\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unsupported(_)));
    }

    #[test]
    fn test_nested_infinity_is_unsupported() {
        let err = parse("---\ntitle: x\nextra:\n  - [1, -.inf]\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unsupported(_)));
    }

    #[test]
    fn test_nested_values_convert() {
        let parsed = parse("---\nlinks:\n  home: first\nflags: [true, 2.5]\n---\n").unwrap();
        assert_eq!(parsed.data["links"]["home"], "first");
        assert_eq!(parsed.data["flags"][0], true);
        assert_eq!(parsed.data["flags"][1], 2.5);
    }
}
