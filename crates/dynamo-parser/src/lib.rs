//! Bidirectional mapping between strongly-typed domain records and the
//! tagged attribute-map wire format of a document-style data store.
//!
//! A [`DynamoParser`] is declared field by field: each registration binds a
//! wire key to an accessor and a setter on the domain type, together with
//! the scalar codec for one of the five supported kinds (string, int,
//! float, bool, date). The finished parser — or the narrow
//! [`DynamoSerializer`] / [`DynamoDeserializer`] views it issues — encodes
//! records into [`AttrMap`]s and decodes wire maps back into records,
//! enforcing required/optional semantics in both directions.
//!
//! # Example
//!
//! ```
//! use dynamo_parser::{AttrValue, DynamoParser};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct User {
//!     id: String,
//!     age: Option<i64>,
//! }
//!
//! let parser = DynamoParser::<User>::new("User")
//!     .required_string("id", |u: &User| Some(u.id.clone()), |u, v| u.id = v)
//!     .optional_int("age", |u: &User| u.age, |u, v| u.age = Some(v));
//!
//! let user = User { id: "u-1".to_owned(), age: Some(41) };
//! let map = parser.serialize(Some(&user)).unwrap().unwrap();
//! assert_eq!(map["id"], AttrValue::s("u-1"));
//! assert_eq!(map["age"], AttrValue::n(41));
//!
//! let back = parser.deserialize(Some(&map)).unwrap().unwrap();
//! assert_eq!(back, user);
//! ```

mod attr;
mod attr_value;
mod deserializer;
mod error;
mod parser;
pub mod scalar;
mod serializer;

pub use attr_value::{AttrMap, AttrValue};
pub use deserializer::DynamoDeserializer;
pub use error::RequiredValueError;
pub use parser::DynamoParser;
pub use scalar::{FromAttr, ScalarCodec, ToAttr};
pub use serializer::DynamoSerializer;
