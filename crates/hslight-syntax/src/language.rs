//! Language identity and file type for Haskell.

use std::fmt;

/// Identity of a language as seen by a host editor.
///
/// The `id` is the routing tag the host compares against, so it is matched
/// exactly (case-sensitively).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    id: &'static str,
    display_name: &'static str,
    case_sensitive: bool,
}

impl Language {
    pub const fn new(id: &'static str, display_name: &'static str, case_sensitive: bool) -> Self {
        Self {
            id,
            display_name,
            case_sensitive,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Whether identifiers in this language compare case-sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}

/// The Haskell language.
pub static HASKELL: Language = Language::new("Haskell", "Haskell language", true);

/// A file type the host associates with a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileType {
    name: &'static str,
    description: &'static str,
    default_extension: &'static str,
    language: &'static Language,
}

impl FileType {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        default_extension: &'static str,
        language: &'static Language,
    ) -> Self {
        Self {
            name,
            description,
            default_extension,
            language,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Extension without the leading dot.
    pub fn default_extension(&self) -> &'static str {
        self.default_extension
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }
}

/// Haskell source files (`.hs`).
pub static HASKELL_FILE: FileType =
    FileType::new("Haskell file", "Haskell language file", "hs", &HASKELL);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haskell_identity() {
        assert_eq!(HASKELL.id(), "Haskell");
        assert_eq!(HASKELL.display_name(), "Haskell language");
        assert!(HASKELL.is_case_sensitive());
        assert_eq!(HASKELL.to_string(), "Haskell language");
    }

    #[test]
    fn test_haskell_file_type() {
        assert_eq!(HASKELL_FILE.default_extension(), "hs");
        assert_eq!(HASKELL_FILE.language(), &HASKELL);
        assert_eq!(HASKELL_FILE.name(), "Haskell file");
    }
}
