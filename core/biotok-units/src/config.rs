use std::env;
use std::path::PathBuf;

/// Environment variable naming a newline-delimited unit list that replaces the
/// bundled one.
pub const UNITS_LIST_PATH_ENV: &str = "BIOTOK_UNITS_LIST_PATH";

/// Where the unit lexicon comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Override list; `None` uses the bundled default.
    pub units_list_path: Option<PathBuf>,
}

impl LexiconConfig {
    pub fn with_units_list(path: impl Into<PathBuf>) -> Self {
        Self {
            units_list_path: Some(path.into()),
        }
    }

    /// Reads the override from [`UNITS_LIST_PATH_ENV`]. An unset or empty
    /// variable means no override.
    pub fn from_env() -> Self {
        let units_list_path = env::var_os(UNITS_LIST_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self { units_list_path }
    }
}
