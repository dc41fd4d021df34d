//! Deserialize-only facade over a built parser.

use std::sync::Arc;

use crate::attr_value::AttrMap;
use crate::error::RequiredValueError;
use crate::parser::ParserInner;

/// Narrow deserialize-only view of a [`DynamoParser`](crate::DynamoParser).
///
/// Holds the parser's state by shared reference, not by snapshot: fields
/// registered after this facade was issued are visible through it.
pub struct DynamoDeserializer<T> {
    inner: Arc<ParserInner<T>>,
}

impl<T> Clone for DynamoDeserializer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> DynamoDeserializer<T> {
    pub(crate) fn new(inner: Arc<ParserInner<T>>) -> Self {
        Self { inner }
    }
}

impl<T: Default> DynamoDeserializer<T> {
    /// Decode a wire map into a freshly constructed `T`. `None` in,
    /// `Ok(None)` out.
    pub fn deserialize(&self, map: Option<&AttrMap>) -> Result<Option<T>, RequiredValueError> {
        self.inner.deserialize(map)
    }
}
