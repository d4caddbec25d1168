//! Service layer for the export desk.
//! - `carrier`: pass-through client for the carrier rate API.
//! - `documents`: object storage uploads behind the [`documents::ObjectStore`] seam.
//! - `queries`: support tickets behind the [`queries::QueryRepository`] seam.

pub mod errors;
pub mod carrier;
pub mod documents;
pub mod queries;
#[cfg(test)]
pub mod test_support;
