//! Downloader module for retrieving catalog files
//!
//! Files are fetched once into a cache directory and reused afterwards.

use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};

use crate::Result;
use crate::SkywatchError;

/// Hipparcos main catalog (ESA 1997), pipe-separated
pub const HIPPARCOS_URL: &str = "https://cdsarc.cds.unistra.fr/ftp/cats/I/239/hip_main.dat";

/// IAU constellation boundaries (Davenhall & Leggett 1989), J2000 vertices
pub const BOUNDARIES_URL: &str = "https://cdsarc.cds.unistra.fr/ftp/VI/49/bound_20.dat";

pub const HIPPARCOS_FILE: &str = "hip_main.dat";
pub const BOUNDARIES_FILE: &str = "bound_20.dat";

/// Get the default cache directory path
pub fn get_cache_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".cache").join("skywatch")
}

/// Ensure that a cache directory exists
pub fn ensure_cache_dir(cache_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(cache_dir)?;
    Ok(cache_dir.to_path_buf())
}

/// Check if a file exists and is not empty
pub(crate) fn file_exists_and_not_empty<P: AsRef<Path>>(path: P) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.len() > 0,
        Err(_) => false,
    }
}

/// Download a file from URL to a local path
fn download_file<P: AsRef<Path>>(url: &str, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    // Write to a temporary file first to avoid partial downloads
    let temp_path = path.as_ref().with_extension("tmp");
    let mut file = BufWriter::new(File::create(&temp_path)?);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| SkywatchError::DataError(format!("Failed to create HTTP client: {}", e)))?;

    let mut response = client
        .get(url)
        .send()
        .map_err(|e| SkywatchError::DataError(format!("Failed to download {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(SkywatchError::DataError(format!(
            "Failed to download {}, status: {}",
            url,
            response.status()
        )));
    }

    let mut buffer = [0; 8192];
    let mut total = 0usize;
    loop {
        let bytes_read = response
            .read(&mut buffer)
            .map_err(|e| SkywatchError::DataError(format!("Failed to read response: {}", e)))?;

        if bytes_read == 0 {
            break;
        }

        file.write_all(&buffer[..bytes_read])?;
        total += bytes_read;
    }

    file.flush()?;
    drop(file);

    fs::rename(temp_path, &path)?;
    debug!("wrote {} bytes to {}", total, path.as_ref().display());

    Ok(())
}

/// Return the cached copy of `file_name`, downloading it from `url` if needed
pub fn fetch_cached(url: &str, cache_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let cache_dir = ensure_cache_dir(cache_dir)?;
    let path = cache_dir.join(file_name);

    if file_exists_and_not_empty(&path) {
        debug!("using cached {}", path.display());
        return Ok(path);
    }

    info!("downloading {} to {}", url, path.display());
    match download_file(url, &path) {
        Ok(()) => Ok(path),
        Err(e) => {
            warn!("download of {} failed: {}", url, e);
            Err(e)
        }
    }
}

/// Download the Hipparcos catalog into `cache_dir`
pub fn download_hipparcos(cache_dir: &Path) -> Result<PathBuf> {
    fetch_cached(HIPPARCOS_URL, cache_dir, HIPPARCOS_FILE)
}

/// Download the constellation boundary file into `cache_dir`
pub fn download_boundaries(cache_dir: &Path) -> Result<PathBuf> {
    fetch_cached(BOUNDARIES_URL, cache_dir, BOUNDARIES_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cache_dir() {
        let cache_dir = get_cache_dir();
        assert!(cache_dir.ends_with(".cache/skywatch"));
    }

    #[test]
    fn test_cached_file_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BOUNDARIES_FILE);
        let mut file = File::create(&path).unwrap();
        writeln!(file, "22.8722221 +35.1666679 AND").unwrap();

        // An unreachable URL proves no request was made
        let found = fetch_cached("http://invalid.invalid/bound_20.dat", dir.path(), BOUNDARIES_FILE).unwrap();
        assert_eq!(found, path);
    }

    #[test]
    fn test_empty_file_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        File::create(&path).unwrap();
        assert!(!file_exists_and_not_empty(&path));
        assert!(!file_exists_and_not_empty(dir.path()));
    }

    #[test]
    fn test_ensure_cache_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let created = ensure_cache_dir(&nested).unwrap();
        assert!(created.is_dir());
    }
}
