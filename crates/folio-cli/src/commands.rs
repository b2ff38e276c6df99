// Rust guideline compliant 2026-10-18

//! Command implementations for the Folio CLI.
//!
//! Each command returns the text to print so the binary stays a thin
//! dispatcher and the commands can be driven from tests.

pub mod attach;
pub mod auth;
pub mod categories;
pub mod contact;
pub mod delete;
pub mod init;
pub mod list;
pub mod projects;
pub mod show;
pub mod upload;
