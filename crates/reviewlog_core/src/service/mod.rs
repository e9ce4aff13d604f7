//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Assemble serialization views from repository read models.
//! - Keep callers (request handlers, CLI) decoupled from storage details.

pub mod customer_service;
pub mod item_service;
pub mod review_service;
