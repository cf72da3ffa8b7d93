//! fastforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the fastforge
//! FastAPI project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          fastforge-cli (CLI)            │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Store, Renderer, Filesystem, Parser,  │
//! │               Archiver)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   fastforge-adapters (Infrastructure)   │
//! │ (Parsers, InMemoryStore, ZipArchiver..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectSchema, classifier, StructurePlan)│
//! │          No I/O, no adapters            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fastforge_core::prelude::*;
//!
//! // 1. Parse a schema with any SchemaParser adapter
//! let schema = parser.parse(&source)?;
//!
//! // 2. Generate with injected adapters
//! let service = GenerateService::new(store, renderer, filesystem);
//! let report = service.generate(&schema, Path::new("./my_api"), &GenerateOptions::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, GenerateService, GenerationReport,
        ports::{Archiver, Filesystem, SchemaParser, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Architecture, FileType, ProjectFile, ProjectSchema, RenderContext, TemplateKey,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
