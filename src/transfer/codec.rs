//! Persisted reference codec
//!
//! The host stores references as opaque blobs; this codec fixes the blob
//! format to a version-tagged JSON envelope so unknown payloads are
//! rejected outright instead of decoding into half-populated objects.

use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, Result};
use crate::models::FileReference;

const REFERENCE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u32,
    #[serde(flatten)]
    reference: FileReference,
}

/// Serialize a reference into the blob the host persists.
pub fn encode(reference: &FileReference) -> Result<String> {
    let envelope = Envelope {
        version: REFERENCE_VERSION,
        reference: reference.clone(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Deserialize a persisted blob back into a reference.
///
/// Fails with [`ReferenceError::Corrupt`] on unreadable payloads and
/// [`ReferenceError::UnsupportedVersion`] on envelopes from a newer
/// format; it never returns a partially populated reference.
pub fn decode(blob: &str) -> Result<FileReference> {
    let envelope: Envelope =
        serde_json::from_str(blob).map_err(|err| ReferenceError::Corrupt(err.to_string()))?;

    if envelope.version != REFERENCE_VERSION {
        return Err(ReferenceError::UnsupportedVersion(envelope.version).into());
    }

    Ok(envelope.reference)
}
