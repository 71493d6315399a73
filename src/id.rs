use std::{fmt, ops, str};

use crate::Error;

/// Represents a Universally Unique IDentifier.
///
/// A UUID is an unsigned 128-bit value, canonically laid out as 16 big-endian
/// bytes. Equality, ordering, and hashing are defined on those bytes alone;
/// every bit pattern is a valid value. Use the version-specific constructors
/// ([`uuid3`](crate::uuid3), [`uuid4`](crate::uuid4), [`uuid5`](crate::uuid5),
/// [`uuid8`](crate::uuid8)) to obtain identifiers whose variant and version
/// fields are meaningful.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (RFC 4122 Appendix C).
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for URLs (RFC 4122 Appendix C).
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for ISO OIDs (RFC 4122 Appendix C).
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for X.500 distinguished names (RFC 4122 Appendix C).
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a fresh copy of the underlying byte array.
    ///
    /// The copy is independent; mutating it cannot affect this UUID.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates a UUID from a big-endian byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless the slice is exactly 16 bytes
    /// long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = Uuid::from_slice(&[
    ///     0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1,
    ///     0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
    /// ])?;
    /// assert_eq!(x, Uuid::NAMESPACE_DNS);
    /// # Ok::<(), uuid4122::Error>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        match <[u8; 16]>::try_from(src) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(_) => Err(Error::InvalidLength {
                expected: 16,
                actual: src.len(),
            }),
        }
    }

    /// Creates a UUID from a big-endian byte slice, or returns `None` if the
    /// slice is not exactly 16 bytes long.
    pub fn from_slice_or_none(src: &[u8]) -> Option<Self> {
        Self::from_slice(src).ok()
    }

    /// Creates a UUID from the most and least significant 64 bits of its
    /// big-endian 128-bit value.
    pub const fn from_halves(msb: u64, lsb: u64) -> Self {
        Self((((msb as u128) << 64) | lsb as u128).to_be_bytes())
    }

    /// Creates a UUID from two 64-bit halves given in reversed byte order,
    /// swapping the bytes of each half before combining them.
    pub const fn from_halves_le(msb: u64, lsb: u64) -> Self {
        Self::from_halves(msb.swap_bytes(), lsb.swap_bytes())
    }

    /// Returns the most significant 64 bits of the big-endian 128-bit value.
    pub const fn msb(&self) -> u64 {
        (u128::from_be_bytes(self.0) >> 64) as u64
    }

    /// Returns the least significant 64 bits of the big-endian 128-bit value.
    pub const fn lsb(&self) -> u64 {
        u128::from_be_bytes(self.0) as u64
    }

    /// Creates a UUID from a 16-byte payload, overwriting the version field
    /// with `version` and the variant field with the RFC 4122 bit pattern
    /// `10`.
    ///
    /// This is the final step of every generation algorithm; apart from the
    /// six overwritten bits the payload is taken as is.
    pub const fn from_versioned_bytes(version: u8, data: [u8; 16]) -> Self {
        let mut data = data;
        data[6] = (data[6] & 0x0f) | (version & 0x0f) << 4;
        data[8] = (data[8] & 0x3f) | 0x80;
        Self(data)
    }

    /// Returns the variant field describing the data layout of this UUID.
    ///
    /// The field is read from the top bits of byte 8 without validation; it is
    /// meaningful only for UUIDs that were produced by a variant-aware
    /// generator.
    pub const fn variant(&self) -> Variant {
        Variant::of(self.0[8])
    }

    /// Returns the version field of this UUID, i.e. the top nibble of byte 6
    /// as a number between 0 and 15.
    ///
    /// As with [`variant`](Self::variant), the bits are reported as found; a
    /// UUID built from arbitrary bytes carries whatever happens to be there.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Creates a UUID from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Hexadecimal digits are accepted in either case; the four hyphens must
    /// sit exactly at indices 8, 13, 18, and 23.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless the input is exactly 36
    /// characters long, [`Error::InvalidSeparator`] if a hyphen is missing or
    /// misplaced, and [`Error::InvalidDigit`] for any other non-hexadecimal
    /// character, naming the character and its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = Uuid::parse("F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6")?;
    /// assert_eq!(x.to_string(), "f81d4fae-7dec-11d0-a765-00a0c91e6bf6");
    /// # Ok::<(), uuid4122::Error>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self, Error> {
        if src.len() != 36 {
            return Err(Error::InvalidLength {
                expected: 36,
                actual: src.len(),
            });
        }

        let mut dst = [0u8; 16];
        let mut cursor = 0;
        for (i, byte) in src.bytes().enumerate() {
            match (i, byte) {
                (8 | 13 | 18 | 23, b'-') => {}
                (8 | 13 | 18 | 23, _) | (_, b'-') => {
                    return Err(Error::InvalidSeparator { index: i });
                }
                _ => match hex_value(byte) {
                    Some(digit) => {
                        dst[cursor >> 1] = (dst[cursor >> 1] << 4) | digit;
                        cursor += 1;
                    }
                    None => {
                        return Err(Error::InvalidDigit {
                            character: char_at(src, i),
                            index: i,
                        });
                    }
                },
            }
        }
        Ok(Self(dst))
    }

    /// Creates a UUID from the 8-4-4-4-12 hexadecimal string representation,
    /// or returns `None` if the string is not a valid representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// assert!(Uuid::parse_or_none("f81d4fae-7dec-11d0-a765-00a0c91e6bf6").is_some());
    /// assert!(Uuid::parse_or_none("f81d4fae7dec11d0a76500a0c91e6bf6").is_none());
    /// ```
    pub fn parse_or_none(src: &str) -> Option<Self> {
        Self::parse(src).ok()
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// Rendering never allocates; hexadecimal digits are always lowercase.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid4122::Error>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut cursor = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[cursor] = DIGITS[(e >> 4) as usize];
            buffer[cursor + 1] = DIGITS[(e & 15) as usize];
            cursor += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[cursor] = b'-';
                cursor += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

/// Returns the numeric value of an ASCII hexadecimal digit, upper or lower
/// case, or `None` for any other byte.
const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Returns the character starting at byte `index`.
///
/// `index` always falls on a character boundary here: the lead byte of a
/// multi-byte character is itself neither a hexadecimal digit nor a hyphen, so
/// parsing can never progress into the middle of a character.
fn char_at(src: &str, index: usize) -> char {
    src[index..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// The variant field of a UUID, describing the layout family of its bits.
///
/// The four families occupy mutually exclusive prefix ranges of byte 8: `0xx`
/// is NCS, `10x` is RFC 4122, `110` is Microsoft, and `111` is reserved for
/// the future.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Reserved for NCS backward compatibility (top bit `0`).
    Ncs,
    /// The layout specified in RFC 4122 (top bits `10`).
    Rfc4122,
    /// Reserved for Microsoft backward compatibility (top bits `110`).
    Microsoft,
    /// Reserved for future definition (top bits `111`).
    Future,
}

impl Variant {
    /// Determines the variant encoded in byte 8 of a UUID.
    ///
    /// The prefix ranges are checked from the shortest to the longest: NCS,
    /// then RFC 4122, then Microsoft, with Future as the remainder.
    pub const fn of(byte: u8) -> Self {
        if byte & 0x80 == 0x00 {
            Self::Ncs
        } else if byte & 0xc0 == 0x80 {
            Self::Rfc4122
        } else if byte & 0xe0 == 0xc0 {
            Self::Microsoft
        } else {
            Self::Future
        }
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated
/// 8-4-4-4-12 string representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}
