#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! Decoding of whole files into header summaries,
//! and the encoding of those summaries back into files.
//!
//! A file is loaded into a chain of chunks,
//! its meta group and data set are walked element by element,
//! the elements of interest are projected into the typed fields
//! of a [`HeaderSummary`],
//! and the pixel data is extracted into one buffer.
//!
//! # Example
//!
//! ```no_run
//! use dcmingest_parser::{open_file, EditSpec};
//!
//! let mut summary = open_file("CT_small.dcm")?;
//! println!("{:?} {:?}", summary.modality, summary.patient_name);
//!
//! let edit: EditSpec = "PatientID=ANON".parse()?;
//! summary.apply_edits(&[edit])?;
//! summary.write_to_file("CT_small_anon.dcm")?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```

pub mod edit;
pub mod error;
pub mod file;
mod pixel;
pub mod projector;
pub mod render;
pub mod summary;
pub mod value;
pub mod vendor;
mod walker;
mod write;

pub use edit::EditSpec;
pub use error::{Error, FailureKind, Result};
pub use file::{from_reader, open_file, DecodeOptions, InputOrigin, ReadPreamble};
pub use projector::{ProjectionState, Scope, SpecialElement, SPECIAL_ELEMENTS};
pub use render::render_value;
pub use summary::{FileDecodingPlan, HeaderSummary};
pub use vendor::{Relaxation, SignatureField, VendorIdentity, VendorQuirk, VendorQuirks};
