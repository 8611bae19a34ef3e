//! File-based Credential Store
//!
//! Persists the bearer token as the sole content of one file, so a later
//! session can reuse it. The parent directory is created on first write and,
//! on unix, the file is readable by its owner only.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::foundation::AccessToken;
use crate::ports::{CredentialStore, CredentialStoreError};

#[cfg(unix)]
const TOKEN_FILE_MODE: u32 = 0o600;

#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// # Example
    /// ```ignore
    /// let store = FileCredentialStore::new("./data/access_token");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<AccessToken>, CredentialStoreError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CredentialStoreError::Io(e.to_string())),
        };

        // A blank file is a logged-out state, same as a missing one.
        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }
        if token.chars().any(char::is_whitespace) {
            return Err(CredentialStoreError::Corrupt(format!(
                "{} contains whitespace inside the token",
                self.path.display()
            )));
        }
        Ok(Some(AccessToken::new(token)))
    }

    async fn store(&self, token: &AccessToken) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CredentialStoreError::Io(e.to_string()))?;
        }
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(TOKEN_FILE_MODE);

        let mut file = options
            .open(&self.path)
            .await
            .map_err(|e| CredentialStoreError::Io(e.to_string()))?;
        // `mode` only applies on creation; tighten a file left by an older write.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, std::fs::Permissions::from_mode(TOKEN_FILE_MODE))
                .await
                .map_err(|e| CredentialStoreError::Io(e.to_string()))?;
        }
        file.write_all(token.expose().as_bytes())
            .await
            .map_err(|e| CredentialStoreError::Io(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| CredentialStoreError::Io(e.to_string()))?;
        debug!(path = %self.path.display(), "Stored access token");
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialStoreError::Io(e.to_string())),
        }
    }
}
