//! An implementation of RFC 4122 Universally Unique Identifiers
//!
//! ```rust
//! use uuid4122::{uuid4, uuid5, Uuid};
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let named = uuid5(&Uuid::NAMESPACE_DNS, "www.example.com");
//! assert_eq!(named.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//!
//! let parsed: Uuid = "F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6".parse()?;
//! assert_eq!(parsed.to_string(), "f81d4fae-7dec-11d0-a765-00a0c91e6bf6");
//! # Ok::<(), uuid4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! A UUID is an unsigned 128-bit value carried as 16 big-endian bytes. All
//! identifiers produced by this crate share the following bit layout; the
//! payload bits come from an MD5 digest (version 3), a cryptographically
//! strong random number (version 4), a SHA-1 digest (version 5), or the
//! caller (version 8):
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            payload                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            payload            |  ver  |        payload        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         payload                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            payload                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field names the generation algorithm (3, 4, 5, or 8).
//! - The 2-bit `var` field is set at `10`, the RFC 4122 layout.
//!
//! The string form is the canonical 8-4-4-4-12 hyphenated hexadecimal
//! representation, emitted in lowercase and parsed in either case. Equality
//! and ordering ignore both fields and compare the plain 128-bit value, so
//! identifiers from different generators collate without surprises.
//!
//! # Unsupported versions
//!
//! The time-based versions 1, 2, 6, and 7 need durable clock sequence or
//! counter state that this crate does not keep. Their entry points return
//! [`Error::Unsupported`] rather than pretending otherwise; see the
//! [`unsupported`] module.
//!
//! # Crate features
//!
//! - `serde`: serialization into the string form for human-readable formats
//!   and the 16 raw bytes for compact ones.
//! - `uuid`: lossless conversions to and from the `uuid` crate's type.

mod error;
pub use error::Error;

mod id;
pub use id::{Uuid, Variant};

pub mod name;

mod v3;
pub use v3::uuid3;

mod v4;
pub use v4::{uuid4, uuid4_with};

mod v5;
pub use v5::uuid5;

mod v8;
pub use v8::uuid8;

pub mod unsupported;
#[doc(inline)]
pub use unsupported::{uuid1, uuid2, uuid6, uuid7};
