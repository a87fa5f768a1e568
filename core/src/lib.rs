#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the ingest codec,
//! containing the concepts and data structures
//! shared by the dictionary, the encoding primitives, and the parser.
//!
//! - [`header`] comprises the data types of an element header,
//!   including tags, value representations and value lengths.
//! - [`dictionary`] describes the behavior of data dictionaries,
//!   which translate tags into entries
//!   with the typical value representation of the attribute.
//! - [`value`] holds the decoded forms of element values,
//!   including person names.
//! - [`element`] holds the decoded element itself.

pub mod dictionary;
pub mod element;
pub mod header;
pub mod value;

pub use dictionary::{DataDictionary, DataDictionaryEntry, TagRange};
pub use element::Element;
pub use header::{DataElementHeader, HasLength, Header, Length, Tag, VR};
pub use value::{ElementValue, PersonName};

// re-export crates that are part of the public API
pub use smallvec;
