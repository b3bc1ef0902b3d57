use crate::{CoreError, Result};

/// Check that every `(field, value)` pair is non-blank.
///
/// All blank fields are reported together, in the order given.
#[track_caller]
pub fn require(fields: &[(&'static str, &str)]) -> Result<()> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::missing_fields(missing))
    }
}
