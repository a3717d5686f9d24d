//! Sectioned key/value descriptor parsing (.desktop files).
//!
//! The dialect is the one the original dashboard consumed through Python's
//! `configparser`: `[Section]` headers, `key=value` lines with keys kept
//! case-sensitive, full-line `#`/`;` comments, indented continuation lines,
//! literal `%` (no interpolation), and strict duplicate handling. Anything
//! outside that shape is a parse error carrying the offending line number;
//! callers decide whether a bad file is fatal (the scanner skips it).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, XfdashError};

/// Name of the primary section every descriptor must carry.
pub const DESKTOP_ENTRY_SECTION: &str = "Desktop Entry";

/// File extension of descriptor files, without the dot.
pub const DESKTOP_FILE_EXTENSION: &str = "desktop";

/// Icon identifier used when a descriptor declares none.
pub const DEFAULT_ICON: &str = "application-x-executable";

/// One `[Section]` of a descriptor: a case-sensitive key/value map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    values: HashMap<String, String>,
}

impl Section {
    /// Look up a key, case-sensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the section carries the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Read a boolean key, returning `default` when the key is absent.
    ///
    /// Accepts the canonical token set case-insensitively: `1`, `yes`,
    /// `true`, `on` are true; `0`, `no`, `false`, `off` are false. Any other
    /// value is a parse error, which the scanner treats as a skip for the
    /// whole file.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        let Some(raw) = self.values.get(key) else {
            return Ok(default);
        };
        match raw.to_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => Ok(true),
            "0" | "no" | "false" | "off" => Ok(false),
            other => Err(XfdashError::InvalidValue {
                key: key.to_string(),
                message: format!("not a boolean: {other}"),
            }),
        }
    }

    /// Number of keys in the section.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the section has no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A parsed descriptor file: named sections in no particular order.
#[derive(Debug, Clone, Default)]
pub struct DesktopFile {
    sections: HashMap<String, Section>,
}

impl DesktopFile {
    /// Parse descriptor text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut sections: HashMap<String, Section> = HashMap::new();
        // (section, key) of the last value line, for continuation lines.
        let mut current_section: Option<String> = None;
        let mut current_key: Option<String> = None;

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim_end();
            let stripped = line.trim_start();

            if stripped.is_empty() || stripped.starts_with('#') || stripped.starts_with(';') {
                continue;
            }

            // Indented content continues the previous value.
            if line.starts_with(char::is_whitespace) {
                let (Some(section), Some(key)) = (&current_section, &current_key) else {
                    return Err(XfdashError::Parse {
                        path: None,
                        line: line_no,
                        message: format!("continuation line without a preceding key: {stripped}"),
                    });
                };
                let value = sections
                    .get_mut(section)
                    .and_then(|s| s.values.get_mut(key))
                    .expect("continuation target tracked by parser");
                value.push('\n');
                value.push_str(stripped);
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let Some(name) = header.strip_suffix(']') else {
                    return Err(XfdashError::Parse {
                        path: None,
                        line: line_no,
                        message: format!("unterminated section header: {line}"),
                    });
                };
                if sections.contains_key(name) {
                    return Err(XfdashError::Parse {
                        path: None,
                        line: line_no,
                        message: format!("duplicate section: [{name}]"),
                    });
                }
                sections.insert(name.to_string(), Section::default());
                current_section = Some(name.to_string());
                current_key = None;
                continue;
            }

            // Key/value line. `=` and `:` both delimit; the earliest wins.
            let delim = match (line.find('='), line.find(':')) {
                (Some(e), Some(c)) => Some(e.min(c)),
                (Some(e), None) => Some(e),
                (None, Some(c)) => Some(c),
                (None, None) => None,
            };
            let Some(delim) = delim else {
                return Err(XfdashError::Parse {
                    path: None,
                    line: line_no,
                    message: format!("expected key=value: {line}"),
                });
            };

            let key = line[..delim].trim().to_string();
            let value = line[delim + 1..].trim().to_string();
            if key.is_empty() {
                return Err(XfdashError::Parse {
                    path: None,
                    line: line_no,
                    message: "empty key name".to_string(),
                });
            }

            let Some(section_name) = &current_section else {
                return Err(XfdashError::Parse {
                    path: None,
                    line: line_no,
                    message: format!("key/value before any section header: {key}"),
                });
            };
            let section = sections
                .get_mut(section_name)
                .expect("current section tracked by parser");
            if section.values.contains_key(&key) {
                return Err(XfdashError::Parse {
                    path: None,
                    line: line_no,
                    message: format!("duplicate key in [{section_name}]: {key}"),
                });
            }
            section.values.insert(key.clone(), value);
            current_key = Some(key);
        }

        Ok(Self { sections })
    }

    /// Read and parse a descriptor file, attaching the path to any error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| XfdashError::io_with_path(e, path))?;
        Self::parse(&text).map_err(|e| e.with_path(path))
    }

    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// The `[Desktop Entry]` section, if present.
    pub fn desktop_entry(&self) -> Option<&Section> {
        self.section(DESKTOP_ENTRY_SECTION)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the file has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
