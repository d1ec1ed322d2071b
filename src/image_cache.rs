//! Resolves configured image sources to local files gpui can load.
//!
//! Remote sources are downloaded once into the cache directory, keyed by the
//! SHA-256 of their URL.

use anyhow::{Context, Result};
use image_compare_core::ImageSourceSpec;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Get the downloaded-image cache directory
pub fn get_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("image-compare")
        .join("images")
}

/// Cache file name for a URL
pub fn cache_key(url: &str) -> String {
    format!("{:x}", Sha256::digest(url.as_bytes()))
}

/// Resolve a source off the main thread.
pub async fn resolve(source: ImageSourceSpec) -> Result<PathBuf> {
    let cache_dir = get_cache_dir();
    smol::unblock(move || resolve_blocking(&source, &cache_dir)).await
}

pub fn resolve_blocking(source: &ImageSourceSpec, cache_dir: &Path) -> Result<PathBuf> {
    match source {
        ImageSourceSpec::Path(path) => {
            if !path.is_file() {
                anyhow::bail!("image file not found: {}", path.display());
            }
            Ok(path.clone())
        }
        ImageSourceSpec::Url(url) => {
            let target = cache_dir.join(cache_key(url));
            if target.is_file() {
                log::debug!("Using cached image for {}", url);
                return Ok(target);
            }
            download(url, &target)?;
            Ok(target)
        }
    }
}

fn download(url: &str, target: &Path) -> Result<()> {
    log::debug!("Downloading {}", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(format!("image-compare/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to fetch {}", url))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("{} returned status {}", url, status);
    }

    let bytes = response
        .bytes()
        .with_context(|| format!("failed to read body of {}", url))?;

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    // Write under a temporary name so a partial download is never picked up
    let partial = target.with_extension("part");
    std::fs::write(&partial, &bytes)
        .with_context(|| format!("failed to write {}", partial.display()))?;
    std::fs::rename(&partial, target)
        .with_context(|| format!("failed to move image into {}", target.display()))?;

    log::debug!("Cached {} ({} bytes)", url, bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_stable_hex() {
        let key = cache_key("https://picsum.photos/id/800/800");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(key, cache_key("https://picsum.photos/id/800/800"));
        assert_ne!(key, cache_key("https://picsum.photos/id/800/800?grayscale"));
    }

    #[test]
    fn test_local_path_resolves_to_itself() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("before.png");
        std::fs::write(&file, b"png").unwrap();

        let resolved =
            resolve_blocking(&ImageSourceSpec::Path(file.clone()), dir.path()).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_missing_local_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = ImageSourceSpec::Path(dir.path().join("nope.png"));
        let err = resolve_blocking(&missing, dir.path()).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_cached_url_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        // Unroutable host: only succeeds if the cache is hit
        let url = "http://invalid.invalid/after.png";
        let cached = dir.path().join(cache_key(url));
        std::fs::write(&cached, b"jpeg").unwrap();

        let resolved =
            resolve_blocking(&ImageSourceSpec::Url(url.to_string()), dir.path()).unwrap();
        assert_eq!(resolved, cached);
    }
}
