//! Static file serving for front-end assets.
//!
//! Files are served byte-for-byte from the front-end directory with the
//! content type inferred from the file extension. Requests with no matching
//! file get a plain 404.

use std::path::Path;

use tower_http::services::ServeDir;

/// Create the static file service rooted at the front-end directory.
pub fn create_static_service(frontend_dir: &Path) -> ServeDir {
    ServeDir::new(frontend_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_static_service_accepts_missing_dir() {
        // Directory existence is checked per request, not at construction
        let _service = create_static_service(Path::new("does/not/exist"));
    }
}
