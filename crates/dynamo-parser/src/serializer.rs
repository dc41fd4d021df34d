//! Serialize-only facade over a built parser.

use std::sync::Arc;

use crate::attr_value::AttrMap;
use crate::error::RequiredValueError;
use crate::parser::ParserInner;

/// Narrow serialize-only view of a [`DynamoParser`](crate::DynamoParser).
///
/// Holds the parser's state by shared reference, not by snapshot: fields
/// registered after this facade was issued are visible through it.
pub struct DynamoSerializer<T> {
    inner: Arc<ParserInner<T>>,
}

impl<T> Clone for DynamoSerializer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> DynamoSerializer<T> {
    pub(crate) fn new(inner: Arc<ParserInner<T>>) -> Self {
        Self { inner }
    }

    /// Encode `object` into a wire map. `None` in, `Ok(None)` out.
    pub fn serialize(&self, object: Option<&T>) -> Result<Option<AttrMap>, RequiredValueError> {
        self.inner.serialize(object)
    }
}
