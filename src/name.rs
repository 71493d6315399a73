//! Name inputs for the name-based generators.
//!
//! [`uuid3`](crate::uuid3) and [`uuid5`](crate::uuid5) hash the 16 canonical
//! bytes of a namespace UUID followed by the byte form of a name. The [`Name`]
//! trait defines that byte form: text contributes its UTF-8 bytes, byte
//! containers pass through unchanged, and integers contribute their big-endian
//! bytes (exactly four for 32-bit values, exactly eight for 64-bit values).
//! The mapping has to stay stable because every byte of it feeds the digest;
//! hashing the same name through a different byte form yields a different,
//! non-interoperable UUID.

use std::borrow::Cow;

use md5::Digest;

use crate::Uuid;

/// A value that can serve as the name input of a name-based UUID.
///
/// # Examples
///
/// ```rust
/// use uuid4122::name::Name;
///
/// assert_eq!("a".to_name_bytes().as_ref(), b"a");
/// assert_eq!(0x01020304u32.to_name_bytes().as_ref(), [1, 2, 3, 4]);
/// assert_eq!(4u64.to_name_bytes().as_ref(), [0, 0, 0, 0, 0, 0, 0, 4]);
/// ```
pub trait Name {
    /// Returns the byte sequence hashed on behalf of this name.
    fn to_name_bytes(&self) -> Cow<'_, [u8]>;
}

impl Name for str {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Name for String {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Name for [u8] {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> Name for [u8; N] {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Name for Vec<u8> {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Name for u32 {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.to_be_bytes().to_vec())
    }
}

impl Name for i32 {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.to_be_bytes().to_vec())
    }
}

impl Name for u64 {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.to_be_bytes().to_vec())
    }
}

impl Name for i64 {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.to_be_bytes().to_vec())
    }
}

impl<T: Name + ?Sized> Name for &T {
    fn to_name_bytes(&self) -> Cow<'_, [u8]> {
        (**self).to_name_bytes()
    }
}

/// Hashes the namespace bytes followed by the name bytes, in that order, and
/// truncates the digest to the first 16 bytes.
pub(crate) fn hashed<D: Digest>(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
    let mut hasher = D::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();
    let mut data = [0u8; 16];
    data.copy_from_slice(&digest[..16]);
    data
}
