use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A per-request audio file that is removed when the guard is dropped.
///
/// The guard travels with the response body, so the file outlives the
/// handler and disappears once the body is sent or the client goes away.
#[derive(Debug)]
pub struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    /// Reserve a unique path under `dir`. Nothing is created on disk.
    pub fn allocate(dir: &Path, text_len: usize, voice: &str) -> Self {
        let file_name = format!(
            "{}-{}-{}-{}.mp3",
            text_len,
            Utc::now().timestamp_millis(),
            sanitize(voice),
            Uuid::new_v4().simple()
        );

        Self {
            path: dir.join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn open(&self) -> io::Result<(tokio::fs::File, u64)> {
        let file = tokio::fs::File::open(&self.path).await?;
        let len = file.metadata().await?.len();
        Ok((file, len))
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Temporary audio removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                error = %e,
                path = %self.path.display(),
                "Failed to remove temporary audio"
            ),
        }
    }
}

/// Voice names come from the request body; keep them inside the directory.
fn sanitize(voice: &str) -> String {
    voice
        .chars()
        .take(64)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
