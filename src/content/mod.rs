//! Response bodies: files transferred from the document root and output of
//! CGI programs.

pub mod cgi;
pub mod static_file;

pub use cgi::{CgiInvocation, serve_dynamic};
pub use static_file::serve_static;
