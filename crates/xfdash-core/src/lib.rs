//! xfdash core — headless discovery for a desktop settings dashboard.
//!
//! This crate scans the XDG application directories for `.desktop`
//! descriptors of configuration tools, filters and de-duplicates them, and
//! groups them into the five fixed dashboard categories. A presentation
//! frontend renders the resulting [`Catalog`] and uses [`launch`] to start
//! the selected tool; the library itself has no UI.
//!
//! # Example
//!
//! ```rust,ignore
//! use xfdash_core::{discover, Category};
//!
//! let catalog = discover();
//! for (category, entries) in catalog.iter() {
//!     println!("{}: {} tools", category.title(), entries.len());
//! }
//! if let Some(entry) = catalog.find("xfce4-display-settings") {
//!     xfdash_core::launch::spawn(entry)?;
//! }
//! # Ok::<(), xfdash_core::XfdashError>(())
//! ```

pub mod desktop;
pub mod error;
pub mod launch;
pub mod locale;
pub mod model;
pub mod scanner;

// Re-export commonly used types
pub use error::{Result, XfdashError};
pub use locale::Locale;
pub use model::{Catalog, Category, SettingsEntry};
pub use scanner::{default_search_dirs, discover, Scanner};
