//! Document parsing.

use super::{MapDocument, MapError};

/// UTF-8 byte-order mark.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Parse a raw upload into a map document.
///
/// A leading UTF-8 byte-order mark is stripped if present (the authoring
/// tool writes one on some platforms). Any structural problem after that
/// surfaces as [`MapError::Json`] and no partial document is produced.
pub fn parse_document(bytes: &[u8]) -> Result<MapDocument, MapError> {
    if bytes.is_empty() {
        return Err(MapError::Empty);
    }

    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    let document = serde_json::from_slice(bytes)?;
    Ok(document)
}
