//! Typed data access over the document store.

pub mod document_repo;

pub use document_repo::DocumentRepo;
