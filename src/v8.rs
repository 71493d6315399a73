//! UUIDv8-related functionality

use crate::Uuid;

/// Generates a UUIDv8 object from sixteen caller-supplied bytes.
///
/// Version 8 is the vendor-specific format: the payload carries whatever the
/// caller wants it to, and only the six version and variant bits are forced.
/// Uniqueness is entirely the caller's responsibility.
///
/// # Examples
///
/// ```rust
/// use uuid4122::uuid8;
///
/// let uuid = uuid8(*b"custom layout +1");
/// assert_eq!(uuid.version(), 8);
/// ```
pub fn uuid8(data: [u8; 16]) -> Uuid {
    Uuid::from_versioned_bytes(8, data)
}

#[cfg(test)]
mod tests {
    use super::uuid8;
    use crate::Variant;

    /// Keeps the payload except for the version and variant bits
    #[test]
    fn keeps_the_payload_except_for_the_version_and_variant_bits() {
        let payload = [
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ];
        let e = uuid8(payload);
        assert_eq!(e.version(), 8);
        assert_eq!(e.variant(), Variant::Rfc4122);
        for (i, (actual, supplied)) in e.as_bytes().iter().zip(payload.iter()).enumerate() {
            match i {
                6 => assert_eq!(*actual, 0x8d),
                8 => assert_eq!(*actual, 0xbe),
                _ => assert_eq!(actual, supplied),
            }
        }
    }

    /// Encodes boundary payloads to the expected strings
    #[test]
    fn encodes_boundary_payloads_to_the_expected_strings() {
        assert_eq!(
            &uuid8([0x00; 16]).to_string(),
            "00000000-0000-8000-8000-000000000000"
        );
        assert_eq!(
            &uuid8([0xff; 16]).to_string(),
            "ffffffff-ffff-8fff-bfff-ffffffffffff"
        );
    }
}
