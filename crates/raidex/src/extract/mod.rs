//! Boundary with the external process inspector.
//!
//! Reading game memory is the inspector's job. This crate only consumes the
//! snapshot it produces, through the [`Extractor`] trait.

mod dump;
mod fixed;

pub use dump::DumpFileExtractor;
pub use fixed::StaticExtractor;

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Produces one account snapshot per call.
///
/// Returns `Error::ExtractionUnavailable` when the game client is not running,
/// so callers can report it instead of crashing.
pub trait Extractor {
    fn extract(&self) -> Result<Snapshot>;
}

impl<E: Extractor + ?Sized> Extractor for &E {
    fn extract(&self) -> Result<Snapshot> {
        (**self).extract()
    }
}
