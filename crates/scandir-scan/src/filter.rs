//! Case-insensitive name suffix filter.

/// Selects which files get their content hashed.
///
/// A name matches when, ignoring case, it ends with one of the configured
/// suffixes. This is a plain suffix test: `txt` matches `notes.txt` and also
/// `abtxt`.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Create a filter from a list of suffixes.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check if a file name matches any suffix.
    pub fn matches(&self, name: &str) -> bool {
        if self.suffixes.is_empty() {
            return false;
        }
        let name = name.to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Check if no suffix is configured (nothing will match).
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// One-shot form of [`ExtensionFilter::matches`].
pub fn matches_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    ExtensionFilter::new(extensions).matches(name)
}
