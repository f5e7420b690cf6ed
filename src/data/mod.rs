//! Data module for downloading and caching catalog files
//!
//! Nothing in the computational modules calls into here; callers fetch files
//! first and hand the parsed tables to the core.

mod downloader;

pub use downloader::{
    download_boundaries, download_hipparcos, ensure_cache_dir, fetch_cached, get_cache_dir,
    BOUNDARIES_FILE, BOUNDARIES_URL, HIPPARCOS_FILE, HIPPARCOS_URL,
};
