//! This module includes the representation of decoded element values.
//!
//! Values are kept in their natural Rust types.
//! The raw value bytes are kept separately by the element,
//! so that no decoding choice here affects re-encoding.

use crate::header::Tag;
use smallvec::SmallVec;

pub mod person_name;

pub use person_name::PersonName;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// The decoded form of an element value,
/// whose shape depends on the value representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    /// No data. Used for zero-length values
    /// as well as for item and delimiter markers.
    Empty,
    /// One or more strings, trimmed of padding.
    /// Single-valued text VRs (LT, ST, UT, UR) always hold one string.
    Strs(C<String>),
    /// One or more person names.
    PersonName(C<PersonName>),
    /// A sequence of attribute tags.
    Tags(C<Tag>),
    /// Unsigned 16-bit integers (US, OW).
    U16(C<u16>),
    /// Signed 16-bit integers (SS).
    I16(C<i16>),
    /// Unsigned 32-bit integers (UL, OL).
    U32(C<u32>),
    /// Signed 32-bit integers (SL).
    I32(C<i32>),
    /// Unsigned 64-bit integers (UV, OV).
    U64(C<u64>),
    /// Signed 64-bit integers (SV).
    I64(C<i64>),
    /// Single precision floats (FL, OF).
    F32(C<f32>),
    /// Double precision floats (FD, OD).
    F64(C<f64>),
    /// Opaque bytes (OB, UN and undecoded words),
    /// available through the element's raw buffer.
    Bytes,
    /// The start of a nested sequence.
    Sequence,
}

impl ElementValue {
    /// The number of individual values.
    ///
    /// Opaque bytes and sequences count as a single value.
    pub fn multiplicity(&self) -> u32 {
        use ElementValue::*;
        let n = match self {
            Empty => 0,
            Strs(v) => v.len(),
            PersonName(v) => v.len(),
            Tags(v) => v.len(),
            U16(v) => v.len(),
            I16(v) => v.len(),
            U32(v) => v.len(),
            I32(v) => v.len(),
            U64(v) => v.len(),
            I64(v) => v.len(),
            F32(v) => v.len(),
            F64(v) => v.len(),
            Bytes | Sequence => 1,
        };
        n as u32
    }

    /// Retrieve the strings of a textual value.
    pub fn strings(&self) -> Option<&[String]> {
        match self {
            ElementValue::Strs(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieve the first string of a textual value.
    pub fn first_str(&self) -> Option<&str> {
        self.strings()
            .and_then(|v| v.first())
            .map(|s| s.as_str())
    }

    /// Retrieve the first person name of a PN value.
    pub fn first_person_name(&self) -> Option<&PersonName> {
        match self {
            ElementValue::PersonName(v) => v.first(),
            _ => None,
        }
    }

    /// Convert the value into a sequence of doubles.
    ///
    /// Binary numbers are widened,
    /// while decimal and integer strings are parsed.
    /// Returns `None` if the value is not numeric
    /// or any string fails to parse.
    pub fn to_f64s(&self) -> Option<Vec<f64>> {
        use ElementValue::*;
        match self {
            U16(v) => Some(v.iter().map(|&x| f64::from(x)).collect()),
            I16(v) => Some(v.iter().map(|&x| f64::from(x)).collect()),
            U32(v) => Some(v.iter().map(|&x| f64::from(x)).collect()),
            I32(v) => Some(v.iter().map(|&x| f64::from(x)).collect()),
            U64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            I64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            F32(v) => Some(v.iter().map(|&x| f64::from(x)).collect()),
            F64(v) => Some(v.to_vec()),
            Strs(v) => v.iter().map(|s| s.trim().parse::<f64>().ok()).collect(),
            _ => None,
        }
    }

    /// Convert the first value into a double.
    pub fn to_f64(&self) -> Option<f64> {
        self.to_f64s().and_then(|v| v.first().copied())
    }

    /// Convert the first value into a signed integer.
    ///
    /// Integer strings are parsed.
    /// Floating point values are not admitted.
    pub fn to_i64(&self) -> Option<i64> {
        use ElementValue::*;
        match self {
            U16(v) => v.first().map(|&x| i64::from(x)),
            I16(v) => v.first().map(|&x| i64::from(x)),
            U32(v) => v.first().map(|&x| i64::from(x)),
            I32(v) => v.first().map(|&x| i64::from(x)),
            U64(v) => v.first().and_then(|&x| i64::try_from(x).ok()),
            I64(v) => v.first().copied(),
            Strs(v) => v.first().and_then(|s| s.trim().parse().ok()),
            _ => None,
        }
    }

    /// Convert the first value into an unsigned 16-bit integer, if it fits.
    pub fn to_u16(&self) -> Option<u16> {
        self.to_i64().and_then(|x| u16::try_from(x).ok())
    }

    /// Convert the first value into an unsigned 32-bit integer, if it fits.
    pub fn to_u32(&self) -> Option<u32> {
        self.to_i64().and_then(|x| u32::try_from(x).ok())
    }
}
