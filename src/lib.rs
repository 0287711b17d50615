//! Render a readable line of text from a loosely structured record.
//!
//! A [`Template`] is an ordered list of evaluators: [`Field`]s that look up
//! a key in a [`Context`], [`Constant`] labels, and [`FirstMatch`] groups that
//! pick the first alternative with a value. Non-empty results are joined with
//! a space.
//!
//! ```
//! use context_string_format::{formatters, Context, Evaluate, Field, FirstMatch, Template, Constant};
//! use serde_json::{json, Value};
//!
//! let author = Template::new()
//!     .then(Constant::new("Author:"))
//!     .then(
//!         FirstMatch::new()
//!             .or(Field::new("preferred_name"))
//!             .or(Field::new("legal_name").required()),
//!     )
//!     .then(Field::new("email").formatter(|v: &Value| format!("<{}>", formatters::value(v))));
//!
//! let ctx: Context = serde_json::from_value(json!({
//!     "legal_name": "John Smith",
//!     "email": "john-smith@example.com",
//! }))
//! .unwrap();
//! assert_eq!(author.evaluate(&ctx).unwrap(), "Author: John Smith <john-smith@example.com>");
//! ```
pub mod context;
pub mod engine;
pub mod errors;
pub mod field;
pub mod formatters;

pub use context::Context;
pub use engine::{Constant, Evaluate, FirstMatch, Template};
pub use errors::{EvalError, Result};
pub use field::Field;
pub use formatters::{array, constant, value, Format};
