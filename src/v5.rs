//! UUIDv5-related functionality

use sha1::Sha1;

use crate::name::{hashed, Name};
use crate::Uuid;

/// Generates a UUIDv5 object by hashing a namespace and a name with SHA-1.
///
/// The digest input is the 16 canonical bytes of the namespace followed by the
/// byte form of the name (see [`Name`]); the first 16 of the 20 digest bytes
/// become the UUID after the version and variant bits are stamped. The result
/// is fully deterministic: the same namespace and name always map to the same
/// UUID, on any implementation that follows RFC 4122.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid5, Uuid};
///
/// let uuid = uuid5(&Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
pub fn uuid5(namespace: &Uuid, name: impl Name) -> Uuid {
    Uuid::from_versioned_bytes(5, hashed::<Sha1>(namespace, &name.to_name_bytes()))
}
