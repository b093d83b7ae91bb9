//! Content-type resolution from file extensions.
//!
//! Fixed table; anything unknown (including files with no extension) is
//! `application/octet-stream`.

/// Resolves the Content-Type for a file path from its extension.
pub fn content_type_for(path: &str) -> &'static str {
    match extension(path) {
        Some("bmp") => "image/bmp",
        Some("css") => "text/css",
        Some("csv") => "text/csv",
        Some("gif") => "image/gif",
        Some("htm" | "html") => "text/html",
        Some("ico") => "image/vnd.microsoft.icon",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        Some("php") => "application/x-httpd-php",
        Some("svg") => "image/svg+xml",
        Some("tif" | "tiff") => "image/tiff",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Extension of the last path segment, if it has one.
///
/// The segment is isolated first so a dot in a directory name does not count
/// as an extension: `"dir.d/file"` has none.
pub fn extension(path: &str) -> Option<&str> {
    let file = match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    };
    file.rsplit_once('.').map(|(_, ext)| ext)
}
