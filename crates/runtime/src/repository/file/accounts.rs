//! File-based AccountRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::accounts::AccountBook;
use crate::repository::{AccountRepository, RepositoryError, Result};

/// File-based implementation of AccountRepository.
///
/// Stores every account in a single JSON object keyed by username:
///
/// ```text
/// {
///     "ash": {
///         "password": "<sha-256 hex>",
///         "wins": 3,
///         "losses": 1
///     }
/// }
/// ```
pub struct FileAccountRepository {
    path: PathBuf,
}

impl FileAccountRepository {
    /// Open (or create) the account file at `path`.
    ///
    /// Missing parent directories are created, and a missing file is
    /// initialized with an empty object.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let repository = Self { path };
        if !repository.path.exists() {
            repository.save(&AccountBook::default())?;
            tracing::debug!("Created account file {}", repository.path.display());
        }

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountRepository for FileAccountRepository {
    fn load(&self) -> Result<AccountBook> {
        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let book: AccountBook =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!("Loaded {} accounts from {}", book.len(), self.path.display());

        Ok(book)
    }

    fn save(&self, book: &AccountBook) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        // Serialize with 4-space indentation
        let mut bytes = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"    "));
        book.serialize(&mut serializer)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} accounts to {}", book.len(), self.path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{AccountName, Record};

    use super::*;
    use crate::accounts::Account;

    #[test]
    fn creates_empty_file_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/users.json");

        let repository = FileAccountRepository::new(&path).unwrap();

        assert!(path.exists());
        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_accounts() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileAccountRepository::new(dir.path().join("users.json")).unwrap();

        let mut book = AccountBook::default();
        book.insert(
            AccountName::new("ash"),
            Account::with_record("deadbeef".to_string(), Record::new(3, 1)),
        )
        .unwrap();
        repository.save(&book).unwrap();

        assert_eq!(repository.load().unwrap(), book);
        assert!(!dir.path().join("users.json.tmp").exists());
    }

    #[test]
    fn reads_flat_account_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(
            &path,
            r#"{"misty": {"password": "abc123", "wins": 2, "losses": 5}}"#,
        )
        .unwrap();

        let book = FileAccountRepository::new(&path).unwrap().load().unwrap();
        let misty = book.account(&AccountName::new("misty")).unwrap();

        assert_eq!(misty.password_hash, "abc123");
        assert_eq!(misty.record, Record::new(2, 5));
    }

    #[test]
    fn corrupted_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "not json").unwrap();

        let err = FileAccountRepository::new(&path).unwrap().load().unwrap_err();
        assert!(matches!(err, RepositoryError::Json(_)));
    }
}
