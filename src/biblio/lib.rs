//! # Biblio Architecture
//!
//! Biblio is a **UI-agnostic book catalog library**. The CLI shipped with it is
//! one client; the simulated REST endpoints in [`rest`] are another. Neither
//! holds any business rule.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (cli/ wired by main.rs, rest.rs)                   │
//! │  - Parse input, render output, map errors to statuses       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, validation.rs)               │
//! │  - Validation, Book → BookView conversion                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait, InMemoryStore                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Books and views
//!
//! A [`model::Book`] is what the store keeps, including its internal
//! `available` flag. Everything that leaves the API is a [`model::BookView`],
//! which has no such flag.
//!
//! ## Errors
//!
//! Invalid input and unknown ids are the only expected failures
//! ([`error::BiblioError::InvalidInput`], [`error::BiblioError::NotFound`]).
//! Anything else is an internal error. A failed create leaves the store as it
//! was.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`validation`]: Title, author and publication year rules
//! - [`store`]: Storage abstraction, in-memory implementation, sample seed
//! - [`model`]: `Book`, `BookView`
//! - [`rest`]: Simulated HTTP endpoints over the API
//! - [`config`]: Client configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod rest;
pub mod store;
pub mod validation;
