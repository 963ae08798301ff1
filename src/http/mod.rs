//! HTTP/1.0 protocol implementation.
//!
//! Each accepted connection carries exactly one transaction: one request head
//! is read and one response is written, then the connection is closed.
//!
//! # Architecture
//!
//! - **`connection`**: Reads the request head and drives the transaction
//! - **`parser`**: Parses the request line and header lines from a byte buffer
//! - **`request`**: Parsed request representation
//! - **`uri`**: Classifies a URI as static or dynamic and resolves its path
//! - **`mime`**: Content type lookup by file name suffix
//! - **`response`**: Status codes and response heads
//! - **`error`**: HTML error pages for failed requests
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Transaction
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Request line + headers up to the blank line
//!        └──────┬──────┘
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │     Routing      │ ← Method, classification, stat checks
//!        └──────┬───────────┘
//!               │
//!      ┌────────┼─────────────┐
//!      ▼        ▼             ▼
//!   Static   Dynamic     Error page
//!   (file)   (CGI child)
//!               │
//!               ▼
//!        Connection closed by the accept loop
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod uri;
pub mod writer;
