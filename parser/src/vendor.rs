//! Data-driven vendor exceptions.
//!
//! Some devices produce files which break a rule of the standard
//! in a predictable way.
//! Each [`VendorQuirk`] pairs a signature,
//! matched against identifying values of the file being decoded,
//! with the rule it relaxes.
//! New quirks are added as table entries through [`VendorQuirks::with`].

use dcmingest_core::VR;

/// The identifying value inspected by a quirk signature.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SignatureField {
    /// Implementation Class UID (0002,0012)
    ImplementationClassUid,
    /// Implementation Version Name (0002,0013)
    ImplementationVersionName,
    /// Source Application Entity Title (0002,0016)
    SourceApplicationEntityTitle,
    /// Manufacturer (0008,0070)
    Manufacturer,
}

/// The rule relaxed by a quirk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relaxation {
    /// Odd value lengths are tolerated
    AllowOddLength,
    /// In implicit VR syntaxes,
    /// private elements reserved by the given creator
    /// are read with the given VR
    PrivateVr { creator: String, vr: VR },
}

/// A vendor signature and the rule it relaxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorQuirk {
    /// a short name, for logging
    pub name: String,
    /// the inspected value
    pub field: SignatureField,
    /// the substring which identifies the vendor
    pub pattern: String,
    /// the relaxed rule
    pub relaxation: Relaxation,
}

impl VendorQuirk {
    pub fn new(
        name: impl Into<String>,
        field: SignatureField,
        pattern: impl Into<String>,
        relaxation: Relaxation,
    ) -> Self {
        VendorQuirk {
            name: name.into(),
            field,
            pattern: pattern.into(),
            relaxation,
        }
    }

    fn matches(&self, identity: &VendorIdentity<'_>) -> bool {
        let value = match self.field {
            SignatureField::ImplementationClassUid => identity.implementation_class_uid,
            SignatureField::ImplementationVersionName => identity.implementation_version_name,
            SignatureField::SourceApplicationEntityTitle => identity.source_ae_title,
            SignatureField::Manufacturer => identity.manufacturer,
        };
        value.map_or(false, |v| v.contains(self.pattern.as_str()))
    }
}

/// The identifying values of the file being decoded,
/// as far as they are known.
#[derive(Debug, Default, Copy, Clone)]
pub struct VendorIdentity<'a> {
    pub implementation_class_uid: Option<&'a str>,
    pub implementation_version_name: Option<&'a str>,
    pub source_ae_title: Option<&'a str>,
    pub manufacturer: Option<&'a str>,
}

/// The table of known vendor quirks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorQuirks {
    quirks: Vec<VendorQuirk>,
}

impl Default for VendorQuirks {
    fn default() -> Self {
        use Relaxation::*;
        use SignatureField::*;
        VendorQuirks {
            quirks: vec![
                VendorQuirk::new("GE", ImplementationClassUid, "1.2.840.113619", AllowOddLength),
                VendorQuirk::new(
                    "Philips",
                    ImplementationClassUid,
                    "1.3.46.670589",
                    AllowOddLength,
                ),
                VendorQuirk::new("Agfa", ImplementationVersionName, "AGFA", AllowOddLength),
                VendorQuirk::new("Fujifilm", Manufacturer, "FUJI", AllowOddLength),
                VendorQuirk::new(
                    "Fujifilm",
                    Manufacturer,
                    "FUJI",
                    PrivateVr {
                        creator: "FDMS 1.0".to_string(),
                        vr: VR::OB,
                    },
                ),
            ],
        }
    }
}

impl VendorQuirks {
    /// A table without any quirk.
    pub fn none() -> Self {
        VendorQuirks { quirks: Vec::new() }
    }

    /// Add a quirk to the table.
    pub fn with(mut self, quirk: VendorQuirk) -> Self {
        self.quirks.push(quirk);
        self
    }

    /// All quirks in the table.
    pub fn iter(&self) -> impl Iterator<Item = &VendorQuirk> {
        self.quirks.iter()
    }

    /// Find a quirk tolerating odd value lengths for this file.
    pub fn odd_length_allowed(&self, identity: &VendorIdentity<'_>) -> Option<&VendorQuirk> {
        self.quirks
            .iter()
            .find(|q| q.relaxation == Relaxation::AllowOddLength && q.matches(identity))
    }

    /// Find the VR forced onto private elements of the given creator, if any.
    ///
    /// Only applies to implicit VR syntaxes.
    pub fn private_vr(&self, identity: &VendorIdentity<'_>, creator: &str) -> Option<VR> {
        let creator = creator.trim_matches(|c: char| c == ' ' || c == '\0');
        self.quirks.iter().find_map(|q| match &q.relaxation {
            Relaxation::PrivateVr { creator: c, vr } if c == creator && q.matches(identity) => {
                Some(*vr)
            }
            _ => None,
        })
    }
}
