//! Edits of top level element values.

use crate::error::{InvalidEditSnafu, ParseEditSnafu, Result};
use crate::projector::reproject;
use crate::summary::HeaderSummary;
use crate::value::{decode_value, raw_from_text};
use dcmingest_core::dictionary::DataDictionary;
use dcmingest_core::{Tag, VR};
use dcmingest_dictionary_std::StandardDataDictionary;
use snafu::{ensure, OptionExt};
use std::str::FromStr;
use tracing::debug;

/// A new textual value for one top level element,
/// written as `gggg,eeee=value`, `(gggg,eeee)=value` or `Alias=value`.
/// Multiple values are separated by a backslash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSpec {
    pub tag: Tag,
    pub value: String,
}

impl EditSpec {
    pub fn new(tag: Tag, value: impl Into<String>) -> Self {
        EditSpec {
            tag,
            value: value.into(),
        }
    }
}

impl FromStr for EditSpec {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s.split_once('=').context(ParseEditSnafu { text: s })?;
        let key = key.trim();
        let tag = match key.parse::<Tag>() {
            Ok(tag) => tag,
            Err(_) => StandardDataDictionary
                .by_name(key)
                .map(|entry| entry.tag.inner())
                .context(ParseEditSnafu { text: s })?,
        };
        Ok(EditSpec::new(tag, value))
    }
}

impl HeaderSummary {
    /// Replace the values of top level elements,
    /// updating the summary fields bound to them.
    ///
    /// The edits are checked before any element is changed,
    /// so that a failed call leaves the summary as it was.
    pub fn apply_edits(&mut self, edits: &[EditSpec]) -> Result<()> {
        let mut changes = Vec::with_capacity(edits.len());
        for edit in edits {
            let tag = edit.tag;
            let index = self
                .elements
                .iter()
                .position(|e| e.nesting_level() == 0 && e.header().tag == tag)
                .context(InvalidEditSnafu {
                    tag,
                    reason: "no such element at the top level",
                })?;
            let vr = self.elements[index].vr();
            ensure!(
                !tag.is_delimiter_group() && !matches!(vr, VR::SQ | VR::OB | VR::UN | VR::AT),
                InvalidEditSnafu {
                    tag,
                    reason: format!("values of VR {} cannot be edited", vr),
                }
            );
            ensure!(
                self.elements[index].header().len.is_defined(),
                InvalidEditSnafu {
                    tag,
                    reason: "elements of undefined length cannot be edited",
                }
            );
            let raw = raw_from_text(vr, &edit.value).context(InvalidEditSnafu {
                tag,
                reason: format!("'{}' is not a valid {} value", edit.value, vr),
            })?;
            changes.push((index, raw));
        }

        for (index, raw) in changes {
            let element = &mut self.elements[index];
            debug!("Editing {} to {} bytes", element.header().tag, raw.len());
            let value = decode_value(element.vr(), &raw);
            element.replace_value(raw, value);
            reproject(self, index);
        }
        Ok(())
    }
}
