//! Field descriptor — binds one domain field to its codec and requiredness.

use crate::attr_value::AttrValue;
use crate::scalar::ScalarCodec;

/// One registered field of a domain type `T`.
///
/// The scalar type is erased at construction time, so a single descriptor
/// list (and a single serialize/deserialize walk) serves every kind.
pub(crate) struct Attr<T> {
    pub(crate) key: String,
    pub(crate) optional: bool,
    /// Accessor plus writer: reads the field from the domain object and
    /// encodes it; `None` when the field is unset.
    pub(crate) encode: Box<dyn Fn(&T) -> Option<AttrValue> + Send + Sync>,
    /// Reader plus setter: permissively decodes the wire value and assigns
    /// it into the domain object; `false` when it decoded to absent (the
    /// setter is not called).
    pub(crate) decode: Box<dyn Fn(Option<&AttrValue>, &mut T) -> bool + Send + Sync>,
}

impl<T> Attr<T> {
    pub(crate) fn new<V, G, S>(
        key: impl Into<String>,
        optional: bool,
        codec: ScalarCodec<V>,
        accessor: G,
        setter: S,
    ) -> Self
    where
        V: 'static,
        G: Fn(&T) -> Option<V> + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            optional,
            encode: Box::new(move |object| accessor(object).map(|v| (codec.write)(&v))),
            decode: Box::new(move |value, object| match codec.read_optional(value) {
                Some(v) => {
                    setter(object, v);
                    true
                }
                None => false,
            }),
        }
    }
}
