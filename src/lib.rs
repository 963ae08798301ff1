//! Tiny - iterative HTTP/1.0 server
//!
//! Core library for the web server, its content handlers and the echo
//! companion programs.

pub mod config;
pub mod content;
pub mod echo;
pub mod http;
pub mod server;
