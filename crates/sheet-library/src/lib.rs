//! Parameter Library
//!
//! The canonical catalogue of field definitions for water-treatment
//! technical sheets. Each entry maps a parameter id to its complete
//! metadata: label, type, units, options, validation rule, importance.
//!
//! The library is the source of truth for everything except user-entered
//! values: templates reference entries by id, the document builder
//! materializes them into working fields, and rehydration re-derives
//! field metadata from here after a document round-trips through storage.
//!
//! Built once at process start and passed explicitly to consumers; it is
//! never mutated afterwards.

mod catalogue;
mod definition;
mod library;

pub use definition::ParameterDefinition;
pub use library::ParameterLibrary;
