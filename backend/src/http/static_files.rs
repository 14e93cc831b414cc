//! Static file serving for the web UI.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use crate::http::protocol::{write_response, write_text};

/// Serves files from a web root, falling back to `index.html` the way a
/// single-page app expects.
#[derive(Clone)]
pub struct StaticFiles {
    web_root: PathBuf,
}

impl StaticFiles {
    pub fn new(web_root: impl Into<PathBuf>) -> Self {
        StaticFiles {
            web_root: web_root.into(),
        }
    }

    /// Resolves and serves `uri_path`. Anything that does not resolve to a
    /// regular file inside the web root (including traversal attempts and
    /// directories) falls back to `index.html`; a missing fallback is 404.
    pub fn serve<S: Write>(&self, stream: &mut S, uri_path: &str) -> io::Result<()> {
        let resolved = match self.resolve(uri_path) {
            Some(path) if path.is_file() => path,
            _ => self.web_root.join("index.html"),
        };

        if !resolved.is_file() {
            return write_text(stream, 404, "File not found");
        }

        let data = fs::read(&resolved)?;
        write_response(stream, 200, mime_type(&resolved), &data)
    }

    fn resolve(&self, uri_path: &str) -> Option<PathBuf> {
        let cleaned = uri_path.trim_start_matches('/');
        let cleaned = if cleaned.is_empty() { "index.html" } else { cleaned };

        let relative = Path::new(cleaned);
        // Anything but plain path segments could climb out of the root.
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return None;
        }
        Some(self.web_root.join(relative))
    }
}

fn mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("html") => "text/html; charset=UTF-8",
        Some("css") => "text/css; charset=UTF-8",
        Some("js") => "application/javascript; charset=UTF-8",
        Some("json") => "application/json; charset=UTF-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn web_root() -> (StaticFiles, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>menu</html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log('pos');").unwrap();
        (StaticFiles::new(dir.path()), dir)
    }

    fn serve_to_string(files: &StaticFiles, path: &str) -> String {
        let mut out = Vec::new();
        files.serve(&mut out, path).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_serves_named_file_with_mime_type() {
        let (files, _dir) = web_root();
        let response = serve_to_string(&files, "/app.js");

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("Content-Type: application/javascript; charset=UTF-8"));
        assert!(response.contains("console.log('pos');"));
    }

    #[test]
    fn test_root_falls_back_to_index() {
        let (files, _dir) = web_root();
        let response = serve_to_string(&files, "/");
        assert!(response.contains("<html>menu</html>"));
        assert!(response.contains("Content-Type: text/html; charset=UTF-8"));
    }

    #[test]
    fn test_missing_file_falls_back_to_index() {
        let (files, _dir) = web_root();
        let response = serve_to_string(&files, "/orders-view");
        assert!(response.contains("<html>menu</html>"));
    }

    #[test]
    fn test_traversal_attempt_gets_index_not_the_file() {
        let (files, dir) = web_root();
        fs::write(dir.path().join("secret.txt"), "do not serve by climbing").unwrap();

        let response = serve_to_string(&files, "/../secret.txt");
        assert!(response.contains("<html>menu</html>"));
        assert!(!response.contains("do not serve by climbing"));
    }

    #[test]
    fn test_missing_index_is_not_found() {
        let dir = tempdir().unwrap();
        let files = StaticFiles::new(dir.path());

        let mut out = Vec::new();
        files.serve(&mut out, "/").unwrap();
        let response = String::from_utf8(out).unwrap();
        assert!(response.starts_with("HTTP/1.1 404 Not Found"));
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_type(Path::new("a.html")), "text/html; charset=UTF-8");
        assert_eq!(mime_type(Path::new("a.css")), "text/css; charset=UTF-8");
        assert_eq!(mime_type(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_type(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(mime_type(Path::new("noext")), "application/octet-stream");
    }
}
