pub mod config;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;

pub use config::{LexiconConfig, UNITS_LIST_PATH_ENV};

/// The unit list compiled into the crate.
pub const BUNDLED_UNITS: &str = include_str!("units_list.txt");

static SHARED: Lazy<UnitLexicon> = Lazy::new(|| UnitLexicon::load(&LexiconConfig::from_env()));

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read unit list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Immutable set of lowercase measurement-unit suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLexicon {
    units: HashSet<String>,
}

impl UnitLexicon {
    /// The process-wide lexicon, loaded on first use from [`LexiconConfig::from_env`].
    pub fn shared() -> &'static UnitLexicon {
        &SHARED
    }

    pub fn bundled() -> Self {
        Self::from_list(BUNDLED_UNITS)
    }

    /// Parses a newline-delimited list. Entries are trimmed and lowercased;
    /// blank lines and `#` comments are skipped.
    pub fn from_list(list: &str) -> Self {
        let units = list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        Self { units }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let list = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_list(&list))
    }

    /// Uses the configured override when it can be read, the bundled list otherwise.
    pub fn load(config: &LexiconConfig) -> Self {
        let Some(path) = config.units_list_path.as_deref() else {
            return Self::bundled();
        };

        match Self::from_path(path) {
            Ok(lexicon) => {
                tracing::debug!(path = %path.display(), units = lexicon.len(), "loaded unit list override");
                lexicon
            }
            Err(err) => {
                tracing::debug!(error = %err, "falling back to bundled unit list");
                Self::bundled()
            }
        }
    }

    /// Expects an already-lowercased unit.
    pub fn contains(&self, unit: &str) -> bool {
        self.units.contains(unit)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }
}

impl Default for UnitLexicon {
    fn default() -> Self {
        Self::bundled()
    }
}

impl<S: AsRef<str>> FromIterator<S> for UnitLexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let units = iter
            .into_iter()
            .map(|unit| unit.as_ref().trim().to_lowercase())
            .filter(|unit| !unit.is_empty())
            .collect();

        Self { units }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    #[test]
    fn test_bundled_has_common_units() {
        let lexicon = UnitLexicon::bundled();
        for unit in ["cm", "mm", "mg", "ml", "kg", "mmhg", "mmol", "hrs"] {
            assert!(lexicon.contains(unit), "missing {unit}");
        }
        assert!(!lexicon.contains("cM"));
        assert!(!lexicon.contains("# length"));
    }

    #[test]
    fn test_bundled_entries_are_normalised() {
        let lexicon = UnitLexicon::bundled();
        assert!(!lexicon.is_empty());
        assert!(lexicon
            .iter()
            .all(|unit| unit == unit.trim() && unit == unit.to_lowercase() && !unit.starts_with('#')));
    }

    #[test]
    fn test_empty_list() {
        assert!(UnitLexicon::from_list("\n# nothing here\n").is_empty());
    }

    #[test]
    fn test_list_parsing() {
        let lexicon = UnitLexicon::from_list("  CM \n\n# comment\nmL\r\nfoo");
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("cm"));
        assert!(lexicon.contains("ml"));
        assert!(lexicon.contains("foo"));
    }

    #[test]
    fn test_override_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "furlong\nFortnight").unwrap();

        let lexicon = UnitLexicon::load(&LexiconConfig::with_units_list(file.path()));
        assert!(lexicon.contains("furlong"));
        assert!(lexicon.contains("fortnight"));
        assert!(!lexicon.contains("cm"));
    }

    #[test]
    fn test_missing_override_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-units.txt");

        assert!(matches!(
            UnitLexicon::from_path(&missing),
            Err(LexiconError::Io { .. })
        ));

        let lexicon = UnitLexicon::load(&LexiconConfig::with_units_list(&missing));
        assert_eq!(lexicon, UnitLexicon::bundled());
    }

    #[test]
    fn test_shared_is_single_instance() {
        let first = UnitLexicon::shared() as *const UnitLexicon;
        let second = UnitLexicon::shared() as *const UnitLexicon;
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| UnitLexicon::shared().len()))
            .collect();
        let sizes: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(sizes.windows(2).all(|w| w[0] == w[1]));
    }

    proptest! {
        #[test]
        fn test_lookup_is_case_folded_at_load(unit in "[a-zA-Z]{1,8}") {
            let lexicon: UnitLexicon = [unit.as_str()].into_iter().collect();
            prop_assert!(lexicon.contains(&unit.to_lowercase()));
        }
    }
}
