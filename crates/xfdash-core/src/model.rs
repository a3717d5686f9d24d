//! Catalog data model: settings entries, category buckets, and search.

use std::collections::HashSet;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One discovered configuration tool.
///
/// Immutable once produced; `id` is unique across a whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsEntry {
    /// Descriptor file name without extension.
    pub id: String,
    /// Localized display name. May be empty if the descriptor has none.
    pub name: String,
    /// Localized subtitle. May be empty.
    pub comment: String,
    /// Icon identifier, defaulted when the descriptor declares none.
    pub icon: String,
    /// Raw launch command, possibly with `%`-placeholders. May be empty.
    pub command: String,
}

impl SettingsEntry {
    /// Case-insensitive substring match over name and comment.
    ///
    /// The empty query matches every entry.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.comment.to_lowercase().contains(&query)
    }
}

/// The five fixed dashboard groupings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Big,
    Personal,
    Hardware,
    System,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Big,
        Category::Personal,
        Category::Hardware,
        Category::System,
        Category::Other,
    ];

    /// Stable lowercase key, used in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            Category::Big => "big",
            Category::Personal => "personal",
            Category::Hardware => "hardware",
            Category::System => "system",
            Category::Other => "other",
        }
    }

    /// Human heading for the category.
    pub fn title(self) -> &'static str {
        match self {
            Category::Big => "BigLinux",
            Category::Personal => "Personal",
            Category::Hardware => "Hardware",
            Category::System => "System",
            Category::Other => "Others",
        }
    }

    /// Assign a settings-eligible descriptor to its bucket.
    ///
    /// First match wins: the XFCE marker categories, then the `big` id
    /// substring (raw, not lowercased), then the `Other` fallback.
    pub fn classify(categories: &HashSet<String>, id: &str) -> Category {
        if categories.contains("X-XFCE-PersonalSettings") {
            Category::Personal
        } else if categories.contains("X-XFCE-HardwareSettings") {
            Category::Hardware
        } else if categories.contains("X-XFCE-SystemSettings") {
            Category::System
        } else if id.contains("big") {
            Category::Big
        } else {
            Category::Other
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A fully materialized discovery result: one ordered entry list per
/// category, iterated in fixed category order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    buckets: [Vec<SettingsEntry>; 5],
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, category: Category, entry: SettingsEntry) {
        self.buckets[category as usize].push(entry);
    }

    /// Sort every bucket by case-insensitive display name.
    pub(crate) fn sort_by_name(&mut self) {
        for bucket in &mut self.buckets {
            bucket.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }

    /// Entries in one bucket, in display order.
    pub fn entries(&self, category: Category) -> &[SettingsEntry] {
        &self.buckets[category as usize]
    }

    /// Iterate buckets in fixed category order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[SettingsEntry])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.entries(category)))
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether no entries were discovered.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Find an entry by id anywhere in the catalog.
    pub fn find(&self, id: &str) -> Option<&SettingsEntry> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .find(|entry| entry.id == id)
    }

    /// First category, in display order, containing an entry that matches
    /// the query. Drives the "jump to the first tab with results" behavior.
    pub fn first_match(&self, query: &str) -> Option<Category> {
        self.iter()
            .find(|(_, entries)| entries.iter().any(|e| e.matches(query)))
            .map(|(category, _)| category)
    }

    /// A filtered copy keeping only matching entries, order preserved.
    pub fn search(&self, query: &str) -> Catalog {
        let mut filtered = Catalog::new();
        for (category, entries) in self.iter() {
            for entry in entries {
                if entry.matches(query) {
                    filtered.push(category, entry.clone());
                }
            }
        }
        filtered
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, entries) in self.iter() {
            map.serialize_entry(category.key(), entries)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, comment: &str) -> SettingsEntry {
        SettingsEntry {
            id: id.to_string(),
            name: name.to_string(),
            comment: comment.to_string(),
            icon: "application-x-executable".to_string(),
            command: String::new(),
        }
    }

    fn tokens(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_marker_categories() {
        assert_eq!(
            Category::classify(&tokens(&["Settings", "X-XFCE-PersonalSettings"]), "foo"),
            Category::Personal
        );
        assert_eq!(
            Category::classify(&tokens(&["Settings", "X-XFCE-HardwareSettings"]), "foo"),
            Category::Hardware
        );
        assert_eq!(
            Category::classify(&tokens(&["Settings", "X-XFCE-SystemSettings"]), "foo"),
            Category::System
        );
    }

    #[test]
    fn test_classify_marker_beats_big_id() {
        assert_eq!(
            Category::classify(
                &tokens(&["Settings", "X-XFCE-HardwareSettings"]),
                "bigscreen"
            ),
            Category::Hardware
        );
    }

    #[test]
    fn test_classify_big_id_fallback() {
        assert_eq!(
            Category::classify(&tokens(&["Settings"]), "big-store"),
            Category::Big
        );
        assert_eq!(Category::classify(&tokens(&["Settings"]), "foo"), Category::Other);
    }

    #[test]
    fn test_classify_big_id_is_case_sensitive() {
        // Eligibility lowercases the id; assignment does not. An id like
        // BIGscreen qualifies as settings-like but buckets into Other.
        assert_eq!(
            Category::classify(&tokens(&["Settings"]), "BIGscreen"),
            Category::Other
        );
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let e = entry("a", "Display Settings", "Configure Screens");
        assert!(e.matches("display"));
        assert!(e.matches("SCREEN"));
        assert!(e.matches(""));
        assert!(!e.matches("printer"));
    }

    #[test]
    fn test_iter_fixed_order() {
        let order: Vec<Category> = Catalog::new().iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_find_and_len() {
        let mut catalog = Catalog::new();
        catalog.push(Category::Other, entry("a", "A", ""));
        catalog.push(Category::Big, entry("b", "B", ""));

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.find("b").unwrap().name, "B");
        assert!(catalog.find("c").is_none());
    }

    #[test]
    fn test_first_match_honors_category_order() {
        let mut catalog = Catalog::new();
        catalog.push(Category::System, entry("s", "Session", ""));
        catalog.push(Category::Hardware, entry("d", "Display", "session output"));

        // Hardware precedes System in display order.
        assert_eq!(catalog.first_match("session"), Some(Category::Hardware));
        assert_eq!(catalog.first_match("nothing"), None);
    }

    #[test]
    fn test_search_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.push(Category::Other, entry("a", "Alpha", ""));
        catalog.push(Category::Other, entry("b", "Beta", ""));
        catalog.push(Category::Other, entry("c", "Alphabet", ""));

        let filtered = catalog.search("alpha");
        let names: Vec<&str> = filtered
            .entries(Category::Other)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["Alpha", "Alphabet"]);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.push(Category::Other, entry("1", "banana", ""));
        catalog.push(Category::Other, entry("2", "Apple", ""));
        catalog.push(Category::Other, entry("3", "cherry", ""));
        catalog.sort_by_name();

        let names: Vec<&str> = catalog
            .entries(Category::Other)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_serialized_shape() {
        let mut catalog = Catalog::new();
        catalog.push(Category::Big, entry("bigx", "Big X", "tool"));

        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["big"][0]["id"], "bigx");
        assert!(json["personal"].as_array().unwrap().is_empty());
        assert_eq!(json.as_object().unwrap().len(), 5);

        // Streamed output writes buckets in display order.
        let text = serde_json::to_string(&catalog).unwrap();
        let positions: Vec<usize> = ["\"big\"", "\"personal\"", "\"hardware\"", "\"system\"", "\"other\""]
            .iter()
            .map(|key| text.find(*key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
