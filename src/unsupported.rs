//! Declared but unimplemented UUID versions.
//!
//! Versions 1, 2, 6, and 7 all encode a timestamp and need durable clock
//! sequence or counter state to stay unique across restarts; this crate keeps
//! no such state. Their entry points exist so that callers get an explicit
//! [`Error::Unsupported`] instead of a silently missing or approximated
//! algorithm.

use crate::{Error, Uuid};

/// Would generate a time-based UUIDv1 object.
///
/// # Errors
///
/// Always returns [`Error::Unsupported`]: v1 generation requires a stable
/// node identifier and persistent clock sequence state.
pub fn uuid1() -> Result<Uuid, Error> {
    Err(Error::Unsupported { version: 1 })
}

/// Would generate a DCE Security UUIDv2 object.
///
/// # Errors
///
/// Always returns [`Error::Unsupported`]: v2 embeds POSIX UID/GID domains on
/// top of the v1 machinery and shares its state requirements.
pub fn uuid2() -> Result<Uuid, Error> {
    Err(Error::Unsupported { version: 2 })
}

/// Would generate a reordered-time UUIDv6 object.
///
/// # Errors
///
/// Always returns [`Error::Unsupported`]: v6 is the lexicographically
/// sortable reshuffle of v1 and shares its state requirements.
pub fn uuid6() -> Result<Uuid, Error> {
    Err(Error::Unsupported { version: 6 })
}

/// Would generate a Unix-epoch time-based UUIDv7 object.
///
/// # Errors
///
/// Always returns [`Error::Unsupported`]: monotonic v7 generation requires a
/// per-process counter over the millisecond timestamp.
pub fn uuid7() -> Result<Uuid, Error> {
    Err(Error::Unsupported { version: 7 })
}
