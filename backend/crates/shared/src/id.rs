//! Common ID Types
//!
//! Type-safe opaque ID wrappers for domain entities, plus a monotonic
//! sequence that allocates them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// The value is opaque to callers; only equality and the string form matter.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
///
/// let id = UserId::from_string("user_1");
/// assert_eq!(id.as_str(), "user_1");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap an existing identifier (e.g. one decoded from a token)
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

// Manual impls: derives would add bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_string(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T> From<Id<T>> for String {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Monotonic ID allocator
///
/// Produces `<prefix>_1`, `<prefix>_2`, ... and never hands out a value twice
/// for the life of the sequence. Not synchronized: the owner serializes access.
#[derive(Debug)]
pub struct IdSequence<T> {
    prefix: &'static str,
    next: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> IdSequence<T> {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: 1,
            _marker: PhantomData,
        }
    }

    /// Allocate the next identifier
    pub fn next_id(&mut self) -> Id<T> {
        let id = Id::from_string(format!("{}_{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for registered user identities
    pub struct User;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq: IdSequence<markers::User> = IdSequence::new("user");
        assert_eq!(seq.next_id().as_str(), "user_1");
        assert_eq!(seq.next_id().as_str(), "user_2");
    }

    #[test]
    fn test_sequence_never_repeats() {
        let mut seq: IdSequence<markers::User> = IdSequence::new("user");
        let ids: HashSet<UserId> = (0..1000).map(|_| seq.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_equality_and_display() {
        let a = UserId::from_string("user_7");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "user_7");
        assert_eq!(String::from(b), "user_7");
    }
}
