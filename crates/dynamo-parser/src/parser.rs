//! The field-declaration builder and its serialize/deserialize algorithms.

use std::fmt;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::attr::Attr;
use crate::attr_value::AttrMap;
use crate::deserializer::DynamoDeserializer;
use crate::error::RequiredValueError;
use crate::scalar::{self, ScalarCodec};
use crate::serializer::DynamoSerializer;

/// Shared state behind a [`DynamoParser`] and the facades it issues.
///
/// Registration takes the write lock; `serialize`/`deserialize` take the
/// read lock and never mutate, so concurrent calls to either are safe as
/// long as no thread is registering at the same time.
pub(crate) struct ParserInner<T> {
    type_name: String,
    attrs: RwLock<Vec<Attr<T>>>,
}

impl<T> ParserInner<T> {
    pub(crate) fn serialize(&self, object: Option<&T>) -> Result<Option<AttrMap>, RequiredValueError> {
        let Some(object) = object else {
            return Ok(None);
        };
        let attrs = self.attrs.read().unwrap();
        let mut map = AttrMap::new();
        for attr in attrs.iter() {
            match (attr.encode)(object) {
                Some(value) => {
                    map.insert(attr.key.clone(), value);
                }
                None if attr.optional => {}
                None => return Err(RequiredValueError::new(&self.type_name, &attr.key)),
            }
        }
        Ok(Some(map))
    }

    pub(crate) fn deserialize(&self, map: Option<&AttrMap>) -> Result<Option<T>, RequiredValueError>
    where
        T: Default,
    {
        let Some(map) = map else {
            return Ok(None);
        };
        let attrs = self.attrs.read().unwrap();
        let mut result = T::default();
        for attr in attrs.iter() {
            let assigned = (attr.decode)(map.get(&attr.key), &mut result);
            if !assigned && !attr.optional {
                return Err(RequiredValueError::new(&self.type_name, &attr.key));
            }
        }
        Ok(Some(result))
    }
}

/// Builder/parser for one domain type `T`.
///
/// Fields are declared one at a time through the fluent `optional_*` /
/// `required_*` methods, each binding a wire key to an accessor and a setter
/// on `T`. The finished parser serializes domain objects into [`AttrMap`]s
/// and deserializes wire maps back into freshly constructed objects,
/// enforcing required/optional semantics in both directions.
///
/// Reads off the wire are permissive: a key that is missing, carries the
/// wrong tag, or holds a malformed payload is treated as absent — silently
/// omitted for optional fields, a [`RequiredValueError`] for required ones.
///
/// Clones and issued facades share the underlying field list, so a
/// registration made through one handle is visible through all of them.
pub struct DynamoParser<T> {
    inner: Arc<ParserInner<T>>,
}

impl<T> Clone for DynamoParser<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for DynamoParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs = self.inner.attrs.read().unwrap();
        let keys: Vec<&str> = attrs.iter().map(|a| a.key.as_str()).collect();
        f.debug_struct("DynamoParser")
            .field("type_name", &self.inner.type_name)
            .field("attrs", &keys)
            .finish()
    }
}

impl<T> DynamoParser<T> {
    /// Create an empty parser. `type_name` is the display name used in
    /// error messages (`"<type_name>.<attr_name>"`).
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ParserInner {
                type_name: type_name.into(),
                attrs: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Register one field. Registration order is preserved and duplicate
    /// keys are not deduplicated; each registration appends.
    fn attr<V, G, S>(self, key: &str, optional: bool, codec: ScalarCodec<V>, accessor: G, setter: S) -> Self
    where
        V: 'static,
        G: Fn(&T) -> Option<V> + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.inner
            .attrs
            .write()
            .unwrap()
            .push(Attr::new(key, optional, codec, accessor, setter));
        self
    }

    /// Register an optional string field.
    pub fn optional_string<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<String> + Send + Sync + 'static,
        S: Fn(&mut T, String) + Send + Sync + 'static,
    {
        self.attr(key, true, scalar::string(), accessor, setter)
    }

    /// Register a required string field.
    pub fn required_string<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<String> + Send + Sync + 'static,
        S: Fn(&mut T, String) + Send + Sync + 'static,
    {
        self.attr(key, false, scalar::string(), accessor, setter)
    }

    /// Register an optional integer field.
    pub fn optional_int<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<i64> + Send + Sync + 'static,
        S: Fn(&mut T, i64) + Send + Sync + 'static,
    {
        self.attr(key, true, scalar::int(), accessor, setter)
    }

    /// Register a required integer field.
    pub fn required_int<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<i64> + Send + Sync + 'static,
        S: Fn(&mut T, i64) + Send + Sync + 'static,
    {
        self.attr(key, false, scalar::int(), accessor, setter)
    }

    /// Register an optional float field.
    pub fn optional_float<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<f64> + Send + Sync + 'static,
        S: Fn(&mut T, f64) + Send + Sync + 'static,
    {
        self.attr(key, true, scalar::float(), accessor, setter)
    }

    /// Register a required float field.
    pub fn required_float<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<f64> + Send + Sync + 'static,
        S: Fn(&mut T, f64) + Send + Sync + 'static,
    {
        self.attr(key, false, scalar::float(), accessor, setter)
    }

    /// Register an optional boolean field.
    pub fn optional_bool<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<bool> + Send + Sync + 'static,
        S: Fn(&mut T, bool) + Send + Sync + 'static,
    {
        self.attr(key, true, scalar::bool(), accessor, setter)
    }

    /// Register a required boolean field.
    pub fn required_bool<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<bool> + Send + Sync + 'static,
        S: Fn(&mut T, bool) + Send + Sync + 'static,
    {
        self.attr(key, false, scalar::bool(), accessor, setter)
    }

    /// Register an optional date field (epoch milliseconds on the wire).
    pub fn optional_date<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<DateTime<Utc>> + Send + Sync + 'static,
        S: Fn(&mut T, DateTime<Utc>) + Send + Sync + 'static,
    {
        self.attr(key, true, scalar::date(), accessor, setter)
    }

    /// Register a required date field (epoch milliseconds on the wire).
    pub fn required_date<G, S>(self, key: &str, accessor: G, setter: S) -> Self
    where
        G: Fn(&T) -> Option<DateTime<Utc>> + Send + Sync + 'static,
        S: Fn(&mut T, DateTime<Utc>) + Send + Sync + 'static,
    {
        self.attr(key, false, scalar::date(), accessor, setter)
    }

    /// Encode `object` into a wire map, in field-registration order.
    ///
    /// `None` in, `Ok(None)` out; a `Some` input never yields `Ok(None)`.
    /// An unset optional field omits its key entirely; an unset required
    /// field raises [`RequiredValueError`] at the first violation.
    pub fn serialize(&self, object: Option<&T>) -> Result<Option<AttrMap>, RequiredValueError> {
        self.inner.serialize(object)
    }

    /// Issue a serialize-only view of this parser.
    ///
    /// The facade shares this parser's field list by reference, not by
    /// snapshot: fields registered later are visible through it. Whether
    /// every required field of `T` has been registered is not expressible
    /// in the type system here; completeness is the caller's contract.
    pub fn serializer(&self) -> DynamoSerializer<T> {
        DynamoSerializer::new(Arc::clone(&self.inner))
    }
}

impl<T: Default> DynamoParser<T> {
    /// Decode a wire map into a freshly constructed `T`, in
    /// field-registration order.
    ///
    /// `None` in, `Ok(None)` out — checked before any field validation.
    /// A key that is missing, wrongly tagged, or malformed counts as
    /// absent: omitted for optional fields, [`RequiredValueError`] for
    /// required ones (short-circuiting the remaining fields).
    pub fn deserialize(&self, map: Option<&AttrMap>) -> Result<Option<T>, RequiredValueError> {
        self.inner.deserialize(map)
    }

    /// Issue a deserialize-only view of this parser. Shares state the same
    /// way [`serializer`](Self::serializer) does.
    pub fn deserializer(&self) -> DynamoDeserializer<T> {
        DynamoDeserializer::new(Arc::clone(&self.inner))
    }
}
