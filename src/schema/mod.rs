//! Schemas and validation.
//!
//! - [`registry`] declares the admissible shape of every boundary value.
//! - [`validate`](mod@validate) checks untrusted JSON against those shapes, single or in batches.
//!
//! ```rust
//! use userflow::schema::{validate_batch, SchemaRegistry};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::new().unwrap();
//! let values = vec![
//!     json!({"id": 1, "name": "Ann", "email": "ann@example.com"}),
//!     json!({"id": 2, "name": "", "email": "bob@example.com"}),
//! ];
//! let batch = validate_batch(&registry.user, &values, "Users");
//! assert_eq!(batch.successful(), 1);
//! assert_eq!(batch.failed(), 1);
//! ```

pub mod registry;
pub mod validate;

pub use registry::{envelope_schema, SchemaRegistry};
pub use validate::{
    validate, validate_batch, BatchItem, BatchValidation, Schema, ValidationError, Violation,
};
