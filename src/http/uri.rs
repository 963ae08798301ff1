//! Request target classification.
//!
//! Decides whether a URI names a file to transfer or a program to run, and
//! where on disk it lives. The `cgi-bin` check happens before any other
//! parsing of the URI; it is the only thing that makes a request executable.

use std::path::{Path, PathBuf};

/// Path segment that marks a request for dynamic content.
pub const CGI_MARKER: &str = "cgi-bin";

/// Appended to static URIs that end in `/`.
pub const DEFAULT_DOCUMENT: &str = "home.html";

/// Kept for old links: `/adder` serves the adder form page.
const LEGACY_ALIAS: (&str, &str) = ("/adder", "adder.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Static,
    Dynamic,
}

/// Where a URI resolves to and how it is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    /// CGI argument string, always empty for static content
    pub args: String,
    pub kind: ContentKind,
}

impl Target {
    pub fn is_static(&self) -> bool {
        self.kind == ContentKind::Static
    }
}

/// Classifies `uri` and resolves it under `doc_root`.
///
/// The resolved path is the document root with the URI appended as text, so
/// `.` and `/home.html` give `./home.html`.
pub fn classify(uri: &str, doc_root: &Path) -> Target {
    if !uri.contains(CGI_MARKER) {
        if uri == LEGACY_ALIAS.0 {
            return Target {
                path: doc_root.join(LEGACY_ALIAS.1),
                args: String::new(),
                kind: ContentKind::Static,
            };
        }

        let mut path = rooted(doc_root, uri);
        if uri.ends_with('/') {
            path.push_str(DEFAULT_DOCUMENT);
        }

        return Target {
            path: PathBuf::from(path),
            args: String::new(),
            kind: ContentKind::Static,
        };
    }

    let (program, args) = uri.split_once('?').unwrap_or((uri, ""));

    Target {
        path: PathBuf::from(rooted(doc_root, program)),
        args: args.to_string(),
        kind: ContentKind::Dynamic,
    }
}

fn rooted(doc_root: &Path, uri: &str) -> String {
    let mut path = doc_root.to_string_lossy().into_owned();
    if path.ends_with('/') && uri.starts_with('/') {
        path.pop();
    }
    path.push_str(uri);
    path
}
