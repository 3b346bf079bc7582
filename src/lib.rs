//! catalogd: a small asset-catalog HTTP service.
//!
//! Postgres owns durable state; Redis holds point-in-time snapshots with a
//! fixed expiration. The [`application::catalog::CatalogService`] mediates
//! between the two and is the only component with a consistency policy:
//! read-through on both read paths, delete-on-create for the list snapshot.

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
