//! Read-only access to the study-material catalog.
//!
//! The catalog is fetched from the backend on every call; there is no cache.
//! [`CatalogClient`] turns fetch failures into empty results so the dialog
//! can degrade gracefully.

pub mod client;
pub mod error;
pub mod filiere;
pub mod record;
pub mod source;

pub use {
    client::CatalogClient,
    error::{Error, Result},
    filiere::Filiere,
    record::CourseRecord,
    source::{CatalogSource, HttpCatalogSource, InMemoryCatalogSource},
};
