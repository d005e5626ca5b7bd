//! Delimiter-bounded replacement inside a larger text document.
//!
//! The editable region of a remote document is framed by two literal
//! markers. Publishing a status replaces whatever lies between the first
//! start marker and the next end marker, markers included, and leaves every
//! other byte untouched.
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::marsclock_errors::MarsClockError;

/// Start and end delimiters of the editable region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_end")]
    pub end: String,
}

fn default_start() -> String {
    "[](#edit_start)".to_string()
}

fn default_end() -> String {
    "[](#edit_stop)".to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            start: default_start(),
            end: default_end(),
        }
    }
}

impl Markers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Markers {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Shortest `start … end` span, across newlines, markers matched literally
    fn region_regex(&self) -> Result<Regex, MarsClockError> {
        let pattern = format!(
            "(?s){}.*?{}",
            regex::escape(&self.start),
            regex::escape(&self.end)
        );
        Regex::new(&pattern).map_err(|e| MarsClockError::Config(format!("markers: {e}")))
    }

    /// `new_text` framed by the markers
    pub fn wrap(&self, new_text: &str) -> String {
        format!("{}{}{}", self.start, new_text, self.end)
    }
}

/// Undo the HTML escaping applied by the wiki to its markdown source
pub fn unescape_entities(document: &str) -> String {
    document
        .replace("&amp;", "&")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
}

/// Replace the marked region of `document` with `new_text`.
///
/// Arguments
/// ---------
/// * `document`: the full document, possibly HTML-escaped
/// * `markers`: delimiters of the editable region
/// * `new_text`: content placed between the markers
///
/// Return
/// ------
/// * the unescaped document with its first marked region replaced, or
///   [`MarsClockError::MarkersNotFound`] if no region is present
pub fn replace_between_markers(
    document: &str,
    markers: &Markers,
    new_text: &str,
) -> Result<String, MarsClockError> {
    let document = unescape_entities(document);
    let region = markers.region_regex()?;

    if !region.is_match(&document) {
        return Err(MarsClockError::MarkersNotFound {
            start: markers.start.clone(),
            end: markers.end.clone(),
        });
    }

    let replacement = markers.wrap(new_text);
    Ok(region
        .replace(&document, NoExpand(replacement.as_str()))
        .into_owned())
}

#[cfg(test)]
mod patch_test {
    use super::*;

    #[test]
    fn test_replace_region() {
        let doc = "# Sidebar\n\n[](#edit_start)\nold status\n[](#edit_stop)\n\nRules below";
        let out = replace_between_markers(doc, &Markers::default(), "NEW").unwrap();
        assert_eq!(out, "# Sidebar\n\n[](#edit_start)NEW[](#edit_stop)\n\nRules below");
    }

    #[test]
    fn test_only_first_region_replaced() {
        let doc = "<a>1</a> mid <a>2</a>";
        let markers = Markers::new("<a>", "</a>");
        let out = replace_between_markers(doc, &markers, "x").unwrap();
        assert_eq!(out, "<a>x</a> mid <a>2</a>");
    }

    #[test]
    fn test_unescapes_entities() {
        let doc = "Tom &amp; Jerry &gt; [](#edit_start)old[](#edit_stop) &lt;3";
        let out = replace_between_markers(doc, &Markers::default(), "new").unwrap();
        assert_eq!(out, "Tom & Jerry > [](#edit_start)new[](#edit_stop) <3");
    }

    #[test]
    fn test_replacement_is_literal() {
        let doc = "[](#edit_start)[](#edit_stop)";
        let out = replace_between_markers(doc, &Markers::default(), "$1 costs $5").unwrap();
        assert_eq!(out, "[](#edit_start)$1 costs $5[](#edit_stop)");
    }

    #[test]
    fn test_missing_markers() {
        let doc = "[](#edit_start) but never closed";
        assert_eq!(
            replace_between_markers(doc, &Markers::default(), "x"),
            Err(MarsClockError::MarkersNotFound {
                start: "[](#edit_start)".into(),
                end: "[](#edit_stop)".into(),
            })
        );
    }

    #[test]
    fn test_idempotent_patch() {
        let doc = "a [](#edit_start)b[](#edit_stop) c";
        let once = replace_between_markers(doc, &Markers::default(), "z").unwrap();
        let twice = replace_between_markers(&once, &Markers::default(), "z").unwrap();
        assert_eq!(once, twice);
    }
}
