//! Save pipeline: writes submitted photos into a folder

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use super::collaborators::Uploader;
use crate::domain::{CapturedArtifact, SubmitFailure, SubmitReceipt};

#[derive(Debug, Clone)]
pub struct SaveFolderUploader {
    dir: PathBuf,
}

impl SaveFolderUploader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Write `data` to a new file in `dir` named after `name`, never replacing
/// an existing one ("photo.jpg", then "photo-1.jpg", "photo-2.jpg", ...)
async fn write_new(dir: &Path, name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };
    let mut n = 0u32;
    loop {
        let file = match (n, ext) {
            (0, _) => name.to_string(),
            (_, Some(ext)) => format!("{}-{}.{}", stem, n, ext),
            (_, None) => format!("{}-{}", stem, n),
        };
        let path = dir.join(file);
        let opened = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;
        match opened {
            Ok(mut out) => {
                out.write_all(data).await?;
                out.flush().await?;
                return Ok(path);
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => n += 1,
            Err(err) => return Err(err),
        }
    }
}

impl Uploader for SaveFolderUploader {
    fn submit(
        &self,
        artifact: CapturedArtifact,
    ) -> LocalBoxFuture<'static, Result<SubmitReceipt, SubmitFailure>> {
        let dir = self.dir.clone();
        async move {
            let failure = |err: std::io::Error| SubmitFailure {
                name: artifact.name.clone(),
                reason: err.to_string(),
            };
            tokio::fs::create_dir_all(&dir).await.map_err(failure)?;
            let path = write_new(&dir, &artifact.name, &artifact.data)
                .await
                .map_err(failure)?;
            log::info!("Saved {} ({} bytes)", path.display(), artifact.len());
            Ok::<_, SubmitFailure>(SubmitReceipt {
                name: artifact.name.clone(),
                location: path.display().to_string(),
            })
        }
        .boxed_local()
    }
}
