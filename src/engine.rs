use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::context::Context;
use crate::errors::{EvalError, Result};

/// Anything that can render itself against a context.
///
/// An empty string means "nothing to contribute" and is treated the same as
/// a missing value by composite evaluators. Errors are reserved for values
/// that had to be present and were not.
pub trait Evaluate: Send + Sync {
    fn evaluate(&self, ctx: &Context) -> Result<String>;
}

impl<E: Evaluate + ?Sized> Evaluate for Box<E> {
    fn evaluate(&self, ctx: &Context) -> Result<String> {
        (**self).evaluate(ctx)
    }
}

impl<E: Evaluate + ?Sized> Evaluate for Arc<E> {
    fn evaluate(&self, ctx: &Context) -> Result<String> {
        (**self).evaluate(ctx)
    }
}

impl<E: Evaluate + ?Sized> Evaluate for &E {
    fn evaluate(&self, ctx: &Context) -> Result<String> {
        (**self).evaluate(ctx)
    }
}

/// Fixed text, for labels and punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant(String);

impl Constant {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Evaluate for Constant {
    fn evaluate(&self, _: &Context) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Tries alternatives in order and yields the first non-empty result.
///
/// Evaluation is strictly sequential: an alternative that fails stops the
/// search even if a later one would have matched, and nothing after a match
/// is evaluated.
#[derive(Clone, Default)]
pub struct FirstMatch {
    alternatives: Vec<Arc<dyn Evaluate>>,
}

impl FirstMatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(alternatives: Vec<Arc<dyn Evaluate>>) -> Self {
        Self { alternatives }
    }

    pub fn or(mut self, alternative: impl Evaluate + 'static) -> Self {
        self.alternatives.push(Arc::new(alternative));
        self
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl Evaluate for FirstMatch {
    fn evaluate(&self, ctx: &Context) -> Result<String> {
        for (index, alt) in self.alternatives.iter().enumerate() {
            match alt.evaluate(ctx) {
                Err(e) => {
                    debug!(index, error = %e, "alternative failed");
                    return Err(EvalError::Alternative {
                        index,
                        source: Box::new(e),
                    });
                }
                Ok(s) if !s.is_empty() => {
                    trace!(index, "alternative matched");
                    return Ok(s);
                }
                Ok(_) => {}
            }
        }
        Ok(String::new())
    }
}

/// Root of a rendering: evaluates every part in order and joins the
/// non-empty results with a separator (a single space unless overridden).
///
/// A failing part fails the whole template; there is no partial output.
#[derive(Clone)]
pub struct Template {
    parts: Vec<Arc<dyn Evaluate>>,
    separator: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            parts: Vec::new(),
            separator: " ".to_string(),
        }
    }
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(parts: Vec<Arc<dyn Evaluate>>) -> Self {
        Self {
            parts,
            ..Self::default()
        }
    }

    pub fn then(mut self, part: impl Evaluate + 'static) -> Self {
        self.parts.push(Arc::new(part));
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Evaluate for Template {
    fn evaluate(&self, ctx: &Context) -> Result<String> {
        let mut fragments = Vec::with_capacity(self.parts.len());
        for (index, part) in self.parts.iter().enumerate() {
            let s = part.evaluate(ctx).map_err(|e| {
                debug!(index, error = %e, "template part failed");
                EvalError::Part {
                    index,
                    source: Box::new(e),
                }
            })?;
            if s.is_empty() {
                trace!(index, "template part empty, dropped");
            } else {
                fragments.push(s);
            }
        }
        Ok(fragments.iter().join(&self.separator))
    }
}
