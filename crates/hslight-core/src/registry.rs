//! File-type registry.
//!
//! Routes files to languages by extension, the way a host editor decides
//! which highlighter handles a buffer.

use std::collections::HashMap;
use std::path::Path;

use hslight_syntax::{FileType, HASKELL_FILE, Language};

use crate::config::FileConfig;

/// Registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Extension .{extension} is already registered to {existing}")]
    ExtensionTaken {
        extension: String,
        existing: &'static str,
    },

    #[error("Empty file extension")]
    EmptyExtension,
}

/// Maps file extensions to file types and language ids to languages.
#[derive(Debug, Default)]
pub struct FileTypeRegistry {
    by_extension: HashMap<String, &'static FileType>,
    languages: HashMap<&'static str, &'static Language>,
}

impl FileTypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in Haskell file type.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(normalize(HASKELL_FILE.default_extension()), &HASKELL_FILE);
        registry
    }

    /// Creates a registry with the built-ins plus configured extensions.
    pub fn from_config(files: &FileConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::with_builtin();
        for ext in &files.extra_extensions {
            registry.register_extension(ext, &HASKELL_FILE)?;
        }
        Ok(registry)
    }

    /// Registers a file type under its default extension.
    pub fn register(&mut self, file_type: &'static FileType) -> Result<(), RegistryError> {
        self.register_extension(file_type.default_extension(), file_type)
    }

    /// Associates an extension (with or without leading dot) with a file type.
    ///
    /// Registering the same pair twice is a no-op.
    pub fn register_extension(
        &mut self,
        extension: &str,
        file_type: &'static FileType,
    ) -> Result<(), RegistryError> {
        let extension = normalize(extension);
        if extension.is_empty() {
            return Err(RegistryError::EmptyExtension);
        }
        if let Some(existing) = self.by_extension.get(&extension) {
            if *existing != file_type {
                return Err(RegistryError::ExtensionTaken {
                    extension,
                    existing: existing.name(),
                });
            }
            return Ok(());
        }
        self.insert(extension, file_type);
        Ok(())
    }

    fn insert(&mut self, extension: String, file_type: &'static FileType) {
        tracing::debug!("Registered .{} as {}", extension, file_type.name());
        let language = file_type.language();
        self.languages.insert(language.id(), language);
        self.by_extension.insert(extension, file_type);
    }

    /// Returns the file type for a path, by extension.
    pub fn file_type_for(&self, path: impl AsRef<Path>) -> Option<&'static FileType> {
        let ext = path.as_ref().extension()?.to_str()?;
        self.by_extension.get(&normalize(ext)).copied()
    }

    /// Returns the language for a path, by extension.
    pub fn language_for(&self, path: impl AsRef<Path>) -> Option<&'static Language> {
        self.file_type_for(path).map(FileType::language)
    }

    /// Looks up a language by its exact id.
    pub fn language(&self, id: &str) -> Option<&'static Language> {
        self.languages.get(id).copied()
    }

    /// Returns registered extensions, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<_> = self.by_extension.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }
}

fn normalize(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hslight_syntax::HASKELL;

    static OTHER_LANGUAGE: Language = Language::new("Other", "Other language", false);
    static OTHER_FILE: FileType = FileType::new("Other file", "Other file", "oth", &OTHER_LANGUAGE);

    #[test]
    fn test_builtin_routes_hs() {
        let registry = FileTypeRegistry::with_builtin();
        assert_eq!(registry.language_for("src/Main.hs"), Some(&HASKELL));
        assert_eq!(registry.file_type_for("Main.HS"), Some(&HASKELL_FILE));
        assert_eq!(registry.language_for("main.rs"), None);
        assert_eq!(registry.language_for("Makefile"), None);
    }

    #[test]
    fn test_language_lookup_is_case_sensitive() {
        let registry = FileTypeRegistry::with_builtin();
        assert_eq!(registry.language("Haskell"), Some(&HASKELL));
        assert_eq!(registry.language("haskell"), None);
    }

    #[test]
    fn test_extra_extensions_from_config() {
        let files = FileConfig {
            extra_extensions: vec![".hsc".to_string(), "HS-BOOT".to_string()],
        };
        let registry = FileTypeRegistry::from_config(&files).unwrap();
        assert_eq!(registry.language_for("Foreign.hsc"), Some(&HASKELL));
        assert_eq!(registry.language_for("A.hs-boot"), Some(&HASKELL));
        assert_eq!(registry.extensions(), vec!["hs", "hs-boot", "hsc"]);
    }

    #[test]
    fn test_duplicate_registration_is_noop() {
        let mut registry = FileTypeRegistry::with_builtin();
        registry.register_extension(".hs", &HASKELL_FILE).unwrap();
        assert_eq!(registry.extensions(), vec!["hs"]);
    }

    #[test]
    fn test_conflicting_registration_fails() {
        let mut registry = FileTypeRegistry::with_builtin();
        let err = registry.register_extension("hs", &OTHER_FILE).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::ExtensionTaken { ref extension, existing: "Haskell file" } if extension == "hs"
        ));
        registry.register(&OTHER_FILE).unwrap();
        assert_eq!(registry.language("Other"), Some(&OTHER_LANGUAGE));
    }

    #[test]
    fn test_empty_extension_fails() {
        let mut registry = FileTypeRegistry::new();
        assert!(matches!(
            registry.register_extension(".", &HASKELL_FILE),
            Err(RegistryError::EmptyExtension)
        ));
    }
}
