use std::path::Path;

pub const DEFAULT_ENTRY_DOCUMENT: &str = "index.html";
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
pub const NO_CACHE: &str = "no-cache";
pub const IMMUTABLE_CACHE: &str = "public, max-age=31536000";

pub fn content_type_for(path: impl AsRef<Path>) -> &'static str {
    let Some(extension) = path.as_ref().extension().and_then(|ext| ext.to_str()) else {
        return FALLBACK_CONTENT_TYPE;
    };

    match extension.to_ascii_lowercase().as_str() {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "eot" => "application/vnd.ms-fontobject",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

/// The entry document must always be revalidated; every other asset is
/// content-hashed by the bundler and can be cached for a year.
pub fn cache_control_for(key: &str, entry_document: &str) -> &'static str {
    if key == entry_document {
        NO_CACHE
    } else {
        IMMUTABLE_CACHE
    }
}
