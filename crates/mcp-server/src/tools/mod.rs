//! Gateway tool surface.
//!
//! Discovery tool descriptors live in `catalog`, their argument shapes in `schemas`, and routing in
//! `dispatch`.

pub(crate) mod catalog;
mod catalog_cache;
mod dispatch;
mod schemas;

pub use dispatch::GatewayService;
