use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::context::Context;
use crate::engine::Evaluate;
use crate::errors::{EvalError, Result};
use crate::formatters::{builtins::Plain, Format};

/// A single named value pulled from the context.
///
/// Fields are optional, have no default and format with [`Plain`] unless
/// configured otherwise. The builder methods take `self`, so a field is fixed
/// once it has been handed to a [`crate::FirstMatch`] or [`crate::Template`].
#[derive(Clone)]
pub struct Field {
    id: String,
    required: bool,
    default: Option<Value>,
    format: Arc<dyn Format>,
}

impl Field {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required: false,
            default: None,
            format: Arc::new(Plain),
        }
    }

    /// Fail evaluation when neither the context nor the default supplies a
    /// value.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value used when the key is missing or `null`. A `null` default is the
    /// same as no default.
    pub fn default(mut self, v: impl Into<Value>) -> Self {
        self.default = match v.into() {
            Value::Null => None,
            v => Some(v),
        };
        self
    }

    pub fn formatter(mut self, f: impl Format + 'static) -> Self {
        self.format = Arc::new(f);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    fn resolve<'a>(&'a self, ctx: &'a Context) -> Option<&'a Value> {
        match ctx.get(&self.id) {
            Some(v) if !v.is_null() => Some(v),
            _ => {
                if self.default.is_some() {
                    trace!(field = %self.id, "using default value");
                }
                self.default.as_ref()
            }
        }
    }
}

impl Evaluate for Field {
    fn evaluate(&self, ctx: &Context) -> Result<String> {
        match self.resolve(ctx) {
            Some(v) => Ok(self.format.format(v)),
            None if self.required => {
                debug!(field = %self.id, "required field missing");
                Err(EvalError::MissingRequiredField(self.id.clone()))
            }
            None => {
                trace!(field = %self.id, "optional field absent");
                Ok(String::new())
            }
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("required", &self.required)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
