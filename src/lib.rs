//! WooCommerce Schema Resolver
//!
//! Maps WooCommerce v3 REST API request paths to response schemas and
//! decodes response bodies into typed records.
//!
//! The route table is fixed at compile time: each of its entries pairs a
//! path template (literal segments plus `{param}` placeholders) with a
//! schema and a shape (single object or collection). Resolution strips the
//! `wp-json/wc/v3` namespace prefix, matches the remaining segments, and
//! prefers literal matches over parameter matches when both apply.
//!
//! # Example
//!
//! ```
//! use wc_schema::{decode, Payload, Resolver, Resource, SchemaKind};
//! use serde_json::json;
//!
//! let resolver = Resolver::new();
//!
//! let route = resolver
//!     .resolve("https://shop.example.com/wp-json/wc/v3/orders/727")
//!     .unwrap();
//! assert_eq!(route.kind, SchemaKind::Single);
//!
//! let body = json!({ "id": 727, "status": "processing", "total": "29.35" });
//! let payload = decode(route, &body).unwrap();
//!
//! match payload {
//!     Payload::Single(Resource::ShopOrder(order)) => {
//!         assert_eq!(order.id, Some(727));
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! With the default `remote` feature, [`Api`] fetches endpoints over HTTP
//! and decodes the responses the same way.

mod decoder;
mod error;
mod resolver;
pub mod resources;
mod routes;
mod types;

#[cfg(feature = "remote")]
mod client;

pub use decoder::{decode, decode_str, load_json, Payload, Resource};
pub use error::{DecodeError, ResolveError};
pub use resolver::{endpoint_segments, Resolver};
pub use routes::{RouteEntry, RouteTable};
pub use types::{json_type_name, ResolvedRoute, SchemaId, SchemaKind};

#[cfg(feature = "remote")]
pub use client::{Api, ApiResponse};

#[cfg(feature = "remote")]
pub use error::ClientError;
