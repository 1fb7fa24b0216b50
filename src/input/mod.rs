//! Report input: the JSON wire format, file loading, and validation.

pub mod load;
pub mod raw;
pub mod validate;

pub use load::{load_report, load_reports, LoadError, RawDocument};
pub use raw::{RawReport, SCHEMA_VERSION};
pub use validate::{validate, ValidationError, ValidationErrorKind, ValidationErrors};
