//! Registry of supported platform classifiers
//!
//! A classifier is an opaque string naming one supported platform, combining
//! OS family and CPU architecture (e.g. `linux-x86_64`). The registry is the
//! iteration domain for every per-platform operation: assembly, subset
//! validation, and layout verification all walk this list.

/// Ordered, de-duplicated set of platform classifiers
#[derive(Debug, Clone)]
pub struct ClassifierRegistry {
    classifiers: Vec<String>,
}

impl ClassifierRegistry {
    /// Create a registry from a classifier list, preserving order and
    /// dropping duplicates.
    pub fn new(classifiers: impl IntoIterator<Item = String>) -> Self {
        let mut seen = Vec::new();
        for classifier in classifiers {
            if !seen.contains(&classifier) {
                seen.push(classifier);
            }
        }
        Self { classifiers: seen }
    }

    /// All classifiers, in declaration order
    pub fn all(&self) -> &[String] {
        &self.classifiers
    }

    /// Number of classifiers
    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}

/// Default classifier set for the bundled native libraries
pub fn default_classifiers() -> Vec<String> {
    [
        "linux-x86_64",
        "linux-aarch64",
        "osx-x86_64",
        "osx-aarch64",
        "windows-x86_64",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
