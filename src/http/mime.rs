use std::path::Path;

/// Suffix to content type, checked in order. First match wins.
const CONTENT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".gif", "image/gif"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".mp4", "video/mp4"),
];

const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Content type for a file, decided by the suffix of its name.
///
/// ```
/// # use tiny::http::mime::content_type_for;
/// # use std::path::Path;
/// assert_eq!(content_type_for(Path::new("./home.html")), "text/html");
/// assert_eq!(content_type_for(Path::new("./notes")), "text/plain");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    let name = path.to_string_lossy();

    CONTENT_TYPES
        .iter()
        .find(|(suffix, _)| name.ends_with(suffix))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
