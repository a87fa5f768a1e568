//! This module contains a stub dictionary.

use super::{DataDictionary, DataDictionaryEntry};
use crate::header::Tag;

/// An empty attribute dictionary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    fn by_name(&self, _: &str) -> Option<&'static DataDictionaryEntry> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&'static DataDictionaryEntry> {
        None
    }
}
