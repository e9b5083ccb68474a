//! Structural completeness check run before any mapping.

use crate::error::{Section, ValidationError};
use crate::snapshot::Snapshot;

/// Check that every required section of the snapshot was extracted.
///
/// All missing sections are collected so one report names every problem.
pub fn validate(snapshot: &Snapshot) -> Result<(), ValidationError> {
    let mut missing = Vec::new();

    if snapshot.heroes.is_none() {
        missing.push(Section::Heroes);
    }
    if snapshot.artifacts.is_none() {
        missing.push(Section::Artifacts);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(missing))
    }
}
