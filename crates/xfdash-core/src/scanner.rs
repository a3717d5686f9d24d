//! Descriptor discovery: scan, filter, de-duplicate, and group settings
//! tools from the XDG application directories.
//!
//! One `discover` pass is synchronous, reads the file system sequentially,
//! and always returns a catalog: malformed descriptors are logged and
//! skipped, never fatal. All accumulators are local to the pass, so
//! concurrent callers do not share state.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::desktop::{DesktopFile, DEFAULT_ICON, DESKTOP_FILE_EXTENSION};
use crate::error::Result;
use crate::locale::Locale;
use crate::model::{Catalog, Category, SettingsEntry};

/// Candidate application directories, in increasing specificity:
/// system-wide, system-local, then per-user.
///
/// The scan visits them in *reverse* order. Combined with first-seen-wins
/// de-duplication this makes a user-level descriptor override system ones
/// with the same id. The reversal is deliberate inherited behavior; see the
/// precedence tests before touching it.
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from("/usr/share/applications"),
        PathBuf::from("/usr/local/share/applications"),
    ];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local").join("share").join("applications"));
    }
    candidates
}

/// Scans descriptor directories and produces the grouped catalog.
#[derive(Debug, Clone)]
pub struct Scanner {
    search_dirs: Vec<PathBuf>,
    locale: Locale,
}

impl Scanner {
    /// Scanner over the default directories, with the locale detected from
    /// the environment.
    pub fn new() -> Self {
        Self::with_dirs(default_search_dirs(), Locale::detect())
    }

    /// Scanner over explicit directories and an explicit locale preference.
    ///
    /// `search_dirs` is the candidate list in increasing specificity; the
    /// scan itself visits it reversed.
    pub fn with_dirs(search_dirs: Vec<PathBuf>, locale: Locale) -> Self {
        Self {
            search_dirs,
            locale,
        }
    }

    /// Run one discovery pass.
    ///
    /// Deterministic for fixed file-system contents. Missing directories
    /// are skipped silently; files that fail to parse are logged with
    /// their path and skipped.
    pub fn discover(&self) -> Catalog {
        let mut catalog = Catalog::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for dir in self.search_dirs.iter().rev() {
            if !dir.is_dir() {
                continue;
            }
            for path in descriptor_files(dir) {
                match self.process_file(&path, &seen_ids) {
                    Ok(Some((category, entry))) => {
                        debug!("Accepted {} into {}", entry.id, category);
                        seen_ids.insert(entry.id.clone());
                        catalog.push(category, entry);
                    }
                    Ok(None) => {}
                    Err(e) => warn!("Skipping {}: {}", path.display(), e),
                }
            }
        }

        catalog.sort_by_name();
        info!("Discovered {} settings entries", catalog.len());
        catalog
    }

    /// Parse and filter a single descriptor file.
    ///
    /// `Ok(None)` means the file is valid but not a visible, new
    /// settings-like entry; `Err` means the file is malformed.
    fn process_file(
        &self,
        path: &Path,
        seen_ids: &HashSet<String>,
    ) -> Result<Option<(Category, SettingsEntry)>> {
        let file = DesktopFile::load(path)?;
        let Some(section) = file.desktop_entry() else {
            debug!("No [Desktop Entry] section in {}", path.display());
            return Ok(None);
        };

        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let categories: HashSet<String> = section
            .get("Categories")
            .unwrap_or_default()
            .split(';')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        // Settings-like: the marker category, or the distro's id heuristic.
        let is_settings = categories.contains("Settings") || id.to_lowercase().contains("big");
        if !is_settings {
            return Ok(None);
        }
        if section.get_bool("NoDisplay", false)? {
            return Ok(None);
        }
        // First seen wins. Ids are only reserved on acceptance, so a hidden
        // user-level descriptor does not shadow a visible system one.
        if seen_ids.contains(&id) {
            return Ok(None);
        }

        let category = Category::classify(&categories, &id);
        let entry = SettingsEntry {
            name: self.locale.localized(section, "Name"),
            comment: self.locale.localized(section, "Comment"),
            icon: section.get("Icon").unwrap_or(DEFAULT_ICON).to_string(),
            command: section.get("Exec").unwrap_or_default().to_string(),
            id,
        };
        Ok(Some((category, entry)))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively yield `*.desktop` files under a directory, sorted by file
/// name for a deterministic scan.
fn descriptor_files(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == DESKTOP_FILE_EXTENSION)
        })
        .map(|e| e.into_path())
}

/// Run one discovery pass over the default directories with the detected
/// locale.
pub fn discover() -> Catalog {
    Scanner::new().discover()
}
