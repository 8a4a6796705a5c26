//! SecretString - protected storage for credentials
//!
//! Passwords and API keys live in locked memory (`secrets::SecretVec`) and
//! are zeroized on drop. `Debug` and `Serialize` never expose the content, and
//! equality is checked in constant time.
use std::{fmt, sync::Mutex};

use secrets::SecretVec;
use serde::{Serialize, Serializer};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

pub struct SecretString(Mutex<SecretVec<u8>>);

impl SecretString {
    pub fn new(value: &str) -> Self {
        let bytes = Zeroizing::new(value.as_bytes().to_vec());
        Self(Mutex::new(SecretVec::new(bytes.len(), |buffer| {
            buffer.copy_from_slice(&bytes)
        })))
    }

    fn with_bytes<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        let guard = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let bytes = guard.borrow();
        f(&bytes)
    }

    /// Runs `f` against the secret without copying it out.
    pub fn as_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        // Content always originates from a `&str`.
        self.with_bytes(|bytes| f(std::str::from_utf8(bytes).unwrap_or_default()))
    }

    /// Copies the secret into a string that is wiped when dropped.
    pub fn to_str(&self) -> Zeroizing<String> {
        self.as_str(|s| Zeroizing::new(s.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.with_bytes(|bytes| bytes.is_empty())
    }

    pub fn has_minimum_length(&self, min_length: usize) -> bool {
        self.with_bytes(|bytes| bytes.len() >= min_length)
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        self.as_str(SecretString::new)
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.with_bytes(|ours| {
            other.with_bytes(|theirs| ours.len() == theirs.len() && bool::from(ours.ct_eq(theirs)))
        })
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SecretString(REDACTED)")
    }
}

impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str("REDACTED")
    }
}
