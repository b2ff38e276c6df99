// Rust guideline compliant 2026-10-12

//! Folio Core Library
//!
//! This crate provides the foundational components for the Folio portfolio site:
//! - Data models (Project, Mode, Layout, CategorySet)
//! - Gallery filtering and ordering
//! - Mobile carousel gesture/scroll state machine
//! - Contact form validation
//! - Project ID generation
//! - File-backed document storage (JSONL projects, JSON category document)
//! - Configuration and error types

pub mod carousel;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod identity;
pub mod intro;
pub mod media;
pub mod models;
pub mod storage;

pub use carousel::{CarouselAction, CarouselConfig, CarouselController, GesturePhase, Point, Slide};
pub use config::{Config, OutputFormat};
pub use contact::{validate_contact, ContactForm, ContactField, FieldErrors};
pub use error::{Error, Result};
pub use filter::{visible_projects, CategoryFilter, GalleryQuery, ALL_PROJECTS};
pub use intro::{IntroPhase, IntroSequence};
pub use media::{gallery_images, image_count, is_video, MediaKind};
pub use models::{CategorySet, ImageSource, Layout, Mode, Project};
pub use storage::{CategoryDocument, Storage};
