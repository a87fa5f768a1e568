//! This crate implements the attribute dictionary and constants
//! consulted while decoding.
//!
//! ## Run-time dictionaries
//!
//! - [`data_element`]: the registry of standard attributes
//!   needed to decode and summarize image files,
//!   used by default in the other crates of the workspace.
//! - [`private`]: vendor-private sub-dictionaries,
//!   selected by the value of a private creator element.
//!
//! Each dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! ## Constants
//!
//! - [`tags`], which map an attribute alias to a tag
//! - [`uids`], for transfer syntax and storage class identifiers
pub mod data_element;
pub mod private;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
