//! Scoped property storage with strict byte-buffer semantics.
//!
//! Values are opaque byte sequences stored verbatim: no implicit NUL
//! terminator is appended on Set, and Get copies exactly the stored length
//! into the destination, leaving every byte past it untouched. A failed
//! Set never alters the stored value; a failed Get never writes bytes.

use fxhash::FxHashMap;
use parking_lot::Mutex;

use crate::consts::{buflen, properties};
use crate::error::ClientError;

/// Per-context table of configured property values.
///
/// Owned by a `ClientContext`; entries persist until cleared or the context
/// is dropped. Mutating a context's store concurrently from two call paths
/// requires external synchronization (per-scope serialization contract).
#[derive(Debug, Default)]
pub(crate) struct PropertyStore {
    entries: Mutex<FxHashMap<i32, Vec<u8>>>,
}

impl PropertyStore {
    fn is_known(property: i32) -> bool {
        matches!(property, properties::USERDATA | properties::APP_NAME)
    }

    /// Replace the stored value for `property` with bytes from `src`.
    ///
    /// `len` is an exact byte count, or [`buflen::NULLTERM`] to take bytes
    /// up to the first NUL in `src` (resolved now, not stored). The copy is
    /// capped at the available source length. Any other sentinel or
    /// negative length is rejected and the store is left unchanged.
    pub(crate) fn set(&self, property: i32, src: &[u8], len: i32) -> Result<(), ClientError> {
        if !Self::is_known(property) {
            return Err(ClientError::config_illegal_param("property"));
        }
        let count = match len {
            buflen::NULLTERM => src.iter().position(|&b| b == 0).unwrap_or(src.len()),
            n if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX).min(src.len()),
            _ => return Err(ClientError::config_illegal_param("buflen")),
        };
        self.entries
            .lock()
            .insert(property, src[..count].to_vec());
        Ok(())
    }

    /// Copy the stored value for `property` into `dest`.
    ///
    /// `len` is the destination capacity, or [`buflen::NO_LIMIT`] (requires
    /// `outlen`) to use the whole of `dest`. On success exactly the stored
    /// length is copied and `outlen`, if supplied, receives it. If the
    /// capacity is too small, `dest` is left completely unchanged and
    /// `outlen` receives the true stored length. On an illegal `len`,
    /// `outlen` is left unmodified.
    pub(crate) fn get(
        &self,
        property: i32,
        dest: &mut [u8],
        len: i32,
        outlen: Option<&mut i32>,
    ) -> Result<(), ClientError> {
        if !Self::is_known(property) {
            return Err(ClientError::config_illegal_param("property"));
        }
        let capacity = match len {
            n if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX).min(dest.len()),
            buflen::NO_LIMIT if outlen.is_some() => dest.len(),
            _ => return Err(ClientError::config_illegal_param("buflen")),
        };

        let entries = self.entries.lock();
        let value = entries.get(&property).map_or(&[] as &[u8], Vec::as_slice);
        let stored_len = i32::try_from(value.len()).unwrap_or(i32::MAX);

        if value.len() > capacity {
            if let Some(out) = outlen {
                *out = stored_len;
            }
            return Err(ClientError::buffer_too_small(capacity, value.len()));
        }

        dest[..value.len()].copy_from_slice(value);
        if let Some(out) = outlen {
            *out = stored_len;
        }
        Ok(())
    }

    /// Remove the stored value for `property`; a later Get sees an empty
    /// value.
    pub(crate) fn clear(&self, property: i32) -> Result<(), ClientError> {
        if !Self::is_known(property) {
            return Err(ClientError::config_illegal_param("property"));
        }
        self.entries.lock().remove(&property);
        Ok(())
    }
}
