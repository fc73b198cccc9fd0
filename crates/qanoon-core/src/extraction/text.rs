use crate::error::QanoonError;

/// Decode a plain-text upload as strict UTF-8.
pub fn decode_utf8(bytes: &[u8]) -> Result<String, QanoonError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| QanoonError::Decode {
        offset: e.utf8_error().valid_up_to(),
    })
}
