//! UUIDv3-related functionality

use md5::Md5;

use crate::name::{hashed, Name};
use crate::Uuid;

/// Generates a UUIDv3 object by hashing a namespace and a name with MD5.
///
/// The digest input is the 16 canonical bytes of the namespace followed by the
/// byte form of the name (see [`Name`]); the first 16 digest bytes become the
/// UUID after the version and variant bits are stamped. The result is fully
/// deterministic: the same namespace and name always map to the same UUID, on
/// any implementation that follows RFC 4122.
///
/// Prefer [`uuid5`](crate::uuid5) unless compatibility with an existing MD5
/// naming scheme is required.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid3, Uuid};
///
/// let uuid = uuid3(&Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
/// ```
pub fn uuid3(namespace: &Uuid, name: impl Name) -> Uuid {
    Uuid::from_versioned_bytes(3, hashed::<Md5>(namespace, &name.to_name_bytes()))
}

#[cfg(test)]
mod tests {
    use super::uuid3;
    use crate::{Uuid, Variant};

    /// Reproduces the published reference values
    #[test]
    fn reproduces_the_published_reference_values() {
        let cases = [
            ("kotlinlang.org", "2c1e4e06-ef3a-3961-aca7-f845f66353d3"),
            ("example.org", "04738bdf-b25a-3829-a801-b21a1d25095b"),
            ("www.example.com", "5df41881-3aed-3515-88a7-2f4a814cf09e"),
        ];

        for (name, text) in cases {
            assert_eq!(&uuid3(&Uuid::NAMESPACE_DNS, name).to_string(), text);
        }
    }

    /// Hashes integer names through their big-endian byte form
    #[test]
    fn hashes_integer_names_through_their_big_endian_byte_form() {
        let by_int = uuid3(&Uuid::NAMESPACE_DNS, 42u32);
        assert_eq!(&by_int.to_string(), "da063c7c-c2d4-32f1-b44b-00207e07dead");
        assert_eq!(by_int, uuid3(&Uuid::NAMESPACE_DNS, 42i32));
        assert_eq!(by_int, uuid3(&Uuid::NAMESPACE_DNS, [0u8, 0, 0, 42]));

        // a 64-bit 42 is eight bytes and must hash differently
        assert_ne!(by_int, uuid3(&Uuid::NAMESPACE_DNS, 42u64));
    }

    /// Generates identical output for identical input
    #[test]
    fn generates_identical_output_for_identical_input() {
        let a = uuid3(&Uuid::NAMESPACE_URL, "https://example.org/a");
        let b = uuid3(&Uuid::NAMESPACE_URL, "https://example.org/a");
        assert_eq!(a, b);

        // one byte of difference in the name changes the output
        assert_ne!(a, uuid3(&Uuid::NAMESPACE_URL, "https://example.org/b"));
        // so does the namespace
        assert_ne!(a, uuid3(&Uuid::NAMESPACE_DNS, "https://example.org/a"));
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for name in ["", "a", "example", "\u{1f980}"] {
            let e = uuid3(&Uuid::NAMESPACE_DNS, name);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 3);
        }
    }
}
