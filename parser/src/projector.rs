//! Projection of special elements into the named fields of a [`HeaderSummary`].
//!
//! A fixed table binds each special tag to a summary field.
//! Which occurrence of a tag was bound is tracked per decode
//! in a [`ProjectionState`]:
//! an occurrence is bound when the tag was not seen yet,
//! or when it sits at a shallower nesting level than the one bound before.

use crate::error::{RequiredElementMissingSnafu, Result};
use crate::summary::HeaderSummary;
use dcmingest_core::{Element, ElementValue, Tag};
use dcmingest_dictionary_std::tags;
use std::collections::HashMap;

/// Where in the data set a special element may be bound from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Scope {
    /// at any nesting level
    Any,
    /// only in the root data set
    TopLevel,
}

/// An entry of the special element table.
#[derive(Debug, Copy, Clone)]
pub struct SpecialElement {
    pub tag: Tag,
    pub alias: &'static str,
    /// whether decoding fails when the element is never bound
    pub required: bool,
    pub scope: Scope,
    bind: fn(&mut HeaderSummary, &ElementValue),
}

fn text(v: &ElementValue) -> Option<String> {
    v.first_str().map(str::to_string)
}

fn texts(v: &ElementValue) -> Vec<String> {
    v.strings().map(<[String]>::to_vec).unwrap_or_default()
}

fn numbers(v: &ElementValue) -> Vec<f64> {
    v.to_f64s().unwrap_or_default()
}

macro_rules! special {
    ($tag:expr, $alias:literal, $required:expr, $scope:ident, |$s:ident, $v:ident| $bind:expr) => {
        SpecialElement {
            tag: $tag,
            alias: $alias,
            required: $required,
            scope: Scope::$scope,
            bind: |$s, $v| $bind,
        }
    };
}

/// The table of special elements, in binding order.
#[rustfmt::skip]
pub static SPECIAL_ELEMENTS: &[SpecialElement] = &[
    special!(tags::MEDIA_STORAGE_SOP_CLASS_UID, "MediaStorageSOPClassUID", false, TopLevel, |s, v| s.media_storage_sop_class_uid = text(v)),
    special!(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, "MediaStorageSOPInstanceUID", false, TopLevel, |s, v| s.media_storage_sop_instance_uid = text(v)),
    special!(tags::TRANSFER_SYNTAX_UID, "TransferSyntaxUID", false, TopLevel, |s, v| s.transfer_syntax_uid = text(v)),
    special!(tags::IMPLEMENTATION_CLASS_UID, "ImplementationClassUID", false, TopLevel, |s, v| s.implementation_class_uid = text(v)),
    special!(tags::IMPLEMENTATION_VERSION_NAME, "ImplementationVersionName", false, TopLevel, |s, v| s.implementation_version_name = text(v)),
    special!(tags::SOURCE_APPLICATION_ENTITY_TITLE, "SourceApplicationEntityTitle", false, TopLevel, |s, v| s.source_ae_title = text(v)),

    special!(tags::SPECIFIC_CHARACTER_SET, "SpecificCharacterSet", false, Any, |s, v| s.specific_character_set = text(v)),
    special!(tags::IMAGE_TYPE, "ImageType", false, Any, |s, v| s.image_type = texts(v)),
    special!(tags::SOP_CLASS_UID, "SOPClassUID", false, Any, |s, v| s.sop_class_uid = text(v)),
    special!(tags::SOP_INSTANCE_UID, "SOPInstanceUID", false, Any, |s, v| s.sop_instance_uid = text(v)),
    special!(tags::STUDY_DATE, "StudyDate", false, Any, |s, v| s.study_date_text = text(v)),
    special!(tags::SERIES_DATE, "SeriesDate", false, Any, |s, v| s.series_date_text = text(v)),
    special!(tags::ACQUISITION_DATE, "AcquisitionDate", false, Any, |s, v| s.acquisition_date = text(v)),
    special!(tags::CONTENT_DATE, "ContentDate", false, Any, |s, v| s.content_date = text(v)),
    special!(tags::STUDY_TIME, "StudyTime", false, Any, |s, v| s.study_time = text(v)),
    special!(tags::SERIES_TIME, "SeriesTime", false, Any, |s, v| s.series_time = text(v)),
    special!(tags::ACQUISITION_TIME, "AcquisitionTime", false, Any, |s, v| s.acquisition_time = text(v)),
    special!(tags::CONTENT_TIME, "ContentTime", false, Any, |s, v| s.content_time = text(v)),
    special!(tags::ACCESSION_NUMBER, "AccessionNumber", false, Any, |s, v| s.accession_number = text(v)),
    special!(tags::MODALITY, "Modality", true, Any, |s, v| s.modality = text(v)),
    special!(tags::CONVERSION_TYPE, "ConversionType", false, Any, |s, v| s.conversion_type = text(v)),
    special!(tags::MANUFACTURER, "Manufacturer", false, Any, |s, v| s.manufacturer = text(v)),
    special!(tags::INSTITUTION_NAME, "InstitutionName", false, Any, |s, v| s.institution_name = text(v)),
    special!(tags::REFERRING_PHYSICIAN_NAME, "ReferringPhysicianName", false, Any, |s, v| s.referring_physician_name = v.first_person_name().cloned()),
    special!(tags::STATION_NAME, "StationName", false, Any, |s, v| s.station_name = text(v)),
    special!(tags::STUDY_DESCRIPTION, "StudyDescription", false, Any, |s, v| s.study_description = text(v)),
    special!(tags::SERIES_DESCRIPTION, "SeriesDescription", false, Any, |s, v| s.series_description = text(v)),
    special!(tags::MANUFACTURER_MODEL_NAME, "ManufacturerModelName", false, Any, |s, v| s.manufacturer_model_name = text(v)),

    special!(tags::PATIENT_NAME, "PatientName", true, Any, |s, v| s.patient_name = v.first_person_name().cloned()),
    special!(tags::PATIENT_ID, "PatientID", true, Any, |s, v| s.patient_id = text(v)),
    special!(tags::PATIENT_BIRTH_DATE, "PatientBirthDate", false, Any, |s, v| s.patient_birth_date_text = text(v)),
    special!(tags::PATIENT_SEX, "PatientSex", false, Any, |s, v| s.patient_sex = text(v)),
    special!(tags::PATIENT_AGE, "PatientAge", false, Any, |s, v| s.patient_age = text(v)),
    special!(tags::PATIENT_SIZE, "PatientSize", false, Any, |s, v| s.patient_size = v.to_f64()),
    special!(tags::PATIENT_WEIGHT, "PatientWeight", false, Any, |s, v| s.patient_weight = v.to_f64()),

    special!(tags::BODY_PART_EXAMINED, "BodyPartExamined", false, Any, |s, v| s.body_part_examined = text(v)),
    special!(tags::SLICE_THICKNESS, "SliceThickness", false, Any, |s, v| s.slice_thickness = v.to_f64()),
    special!(tags::KVP, "KVP", false, Any, |s, v| s.kvp = v.to_f64()),
    special!(tags::SPACING_BETWEEN_SLICES, "SpacingBetweenSlices", false, Any, |s, v| s.spacing_between_slices = v.to_f64()),
    special!(tags::SOFTWARE_VERSIONS, "SoftwareVersions", false, Any, |s, v| s.software_versions = text(v)),
    special!(tags::PROTOCOL_NAME, "ProtocolName", false, Any, |s, v| s.protocol_name = text(v)),
    special!(tags::IMAGER_PIXEL_SPACING, "ImagerPixelSpacing", false, Any, |s, v| s.imager_pixel_spacing = numbers(v)),
    special!(tags::PATIENT_POSITION, "PatientPosition", false, Any, |s, v| s.patient_position = text(v)),

    special!(tags::STUDY_INSTANCE_UID, "StudyInstanceUID", false, Any, |s, v| s.study_instance_uid = text(v)),
    special!(tags::SERIES_INSTANCE_UID, "SeriesInstanceUID", false, Any, |s, v| s.series_instance_uid = text(v)),
    special!(tags::STUDY_ID, "StudyID", false, Any, |s, v| s.study_id = text(v)),
    special!(tags::SERIES_NUMBER, "SeriesNumber", false, Any, |s, v| s.series_number = v.to_i64()),
    special!(tags::ACQUISITION_NUMBER, "AcquisitionNumber", false, Any, |s, v| s.acquisition_number = v.to_i64()),
    special!(tags::INSTANCE_NUMBER, "InstanceNumber", false, Any, |s, v| s.instance_number = v.to_i64()),
    special!(tags::IMAGE_POSITION_PATIENT, "ImagePositionPatient", false, Any, |s, v| s.image_position_patient = numbers(v)),
    special!(tags::IMAGE_ORIENTATION_PATIENT, "ImageOrientationPatient", false, Any, |s, v| s.image_orientation_patient = numbers(v)),
    special!(tags::FRAME_OF_REFERENCE_UID, "FrameOfReferenceUID", false, Any, |s, v| s.frame_of_reference_uid = text(v)),
    special!(tags::SLICE_LOCATION, "SliceLocation", false, Any, |s, v| s.slice_location = v.to_f64()),

    special!(tags::SAMPLES_PER_PIXEL, "SamplesPerPixel", false, TopLevel, |s, v| s.samples_per_pixel = v.to_u16()),
    special!(tags::PHOTOMETRIC_INTERPRETATION, "PhotometricInterpretation", false, TopLevel, |s, v| s.photometric_interpretation = text(v)),
    special!(tags::PLANAR_CONFIGURATION, "PlanarConfiguration", false, TopLevel, |s, v| s.planar_configuration = v.to_u16()),
    special!(tags::NUMBER_OF_FRAMES, "NumberOfFrames", false, TopLevel, |s, v| s.number_of_frames = v.to_u32()),
    special!(tags::ROWS, "Rows", false, TopLevel, |s, v| s.rows = v.to_u16()),
    special!(tags::COLUMNS, "Columns", false, TopLevel, |s, v| s.columns = v.to_u16()),
    special!(tags::PIXEL_SPACING, "PixelSpacing", false, Any, |s, v| s.pixel_spacing = numbers(v)),
    special!(tags::BITS_ALLOCATED, "BitsAllocated", false, TopLevel, |s, v| s.bits_allocated = v.to_u16()),
    special!(tags::BITS_STORED, "BitsStored", false, TopLevel, |s, v| s.bits_stored = v.to_u16()),
    special!(tags::HIGH_BIT, "HighBit", false, TopLevel, |s, v| s.high_bit = v.to_u16()),
    special!(tags::PIXEL_REPRESENTATION, "PixelRepresentation", false, TopLevel, |s, v| s.pixel_representation = v.to_u16()),
    special!(tags::WINDOW_CENTER, "WindowCenter", false, Any, |s, v| s.window_center = numbers(v)),
    special!(tags::WINDOW_WIDTH, "WindowWidth", false, Any, |s, v| s.window_width = numbers(v)),
    special!(tags::RESCALE_INTERCEPT, "RescaleIntercept", false, Any, |s, v| s.rescale_intercept = v.to_f64()),
    special!(tags::RESCALE_SLOPE, "RescaleSlope", false, Any, |s, v| s.rescale_slope = v.to_f64()),
    special!(tags::RESCALE_TYPE, "RescaleType", false, Any, |s, v| s.rescale_type = text(v)),
    special!(tags::LOSSY_IMAGE_COMPRESSION, "LossyImageCompression", false, Any, |s, v| s.lossy_image_compression = text(v)),
];

/// Look up a tag in the special element table.
pub fn special_element(tag: Tag) -> Option<&'static SpecialElement> {
    SPECIAL_ELEMENTS.iter().find(|e| e.tag == tag)
}

/// The bookkeeping of one decode:
/// the nesting level at which each special tag was bound.
#[derive(Debug, Default, Clone)]
pub struct ProjectionState {
    bound_at: HashMap<Tag, u32>,
}

impl ProjectionState {
    /// A fresh state, with no tag bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nesting level of the occurrence bound for this tag, if any.
    pub fn bound_level(&self, tag: Tag) -> Option<u32> {
        self.bound_at.get(&tag).copied()
    }

    /// Bind the element into the summary if it is special
    /// and no shallower occurrence was bound before.
    /// Returns whether the element was bound.
    pub fn project(&mut self, summary: &mut HeaderSummary, element: &Element) -> bool {
        let Some(special) = special_element(element.header().tag) else {
            return false;
        };
        let level = element.nesting_level();
        if special.scope == Scope::TopLevel && level > 0 {
            return false;
        }
        if self.bound_at.get(&special.tag).map_or(false, |&bound| bound <= level) {
            return false;
        }
        (special.bind)(summary, element.value());
        self.bound_at.insert(special.tag, level);
        true
    }

    /// Fail on the first required special element which was never bound.
    pub fn check_required(&self) -> Result<()> {
        match SPECIAL_ELEMENTS
            .iter()
            .find(|e| e.required && !self.bound_at.contains_key(&e.tag))
        {
            Some(missing) => RequiredElementMissingSnafu {
                tag: missing.tag,
                alias: missing.alias,
            }
            .fail(),
            None => Ok(()),
        }
    }
}

/// Bind a top level element again, after its value changed.
pub(crate) fn reproject(summary: &mut HeaderSummary, index: usize) {
    let Some(element) = summary.elements.get(index) else {
        return;
    };
    if let Some(special) = special_element(element.header().tag) {
        if element.nesting_level() == 0 {
            let value = element.value().clone();
            (special.bind)(summary, &value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::FileDecodingPlan;
    use crate::value::decode_value;
    use dcmingest_core::{DataElementHeader, Length, VR};
    use dcmingest_encoding::stream::{ChunkChain, InputStream};

    fn summary() -> HeaderSummary {
        HeaderSummary::new(InputStream::new(ChunkChain::new(16)), FileDecodingPlan::default())
    }

    fn element(tag: Tag, vr: VR, level: u32, raw: &[u8]) -> Element {
        Element::new(
            DataElementHeader::new(tag, vr, Length(raw.len() as u32)),
            level,
            raw.to_vec(),
            decode_value(vr, raw),
            None,
        )
    }

    #[test]
    fn table_has_unique_tags() {
        for (i, e) in SPECIAL_ELEMENTS.iter().enumerate() {
            assert!(
                SPECIAL_ELEMENTS[i + 1..].iter().all(|o| o.tag != e.tag),
                "duplicate entry for {}",
                e.alias
            );
        }
    }

    #[test]
    fn shallower_occurrence_wins() {
        let mut s = summary();
        let mut state = ProjectionState::new();

        assert!(state.project(&mut s, &element(tags::PATIENT_ID, VR::LO, 2, b"NESTED")));
        assert_eq!(s.patient_id.as_deref(), Some("NESTED"));
        assert!(state.project(&mut s, &element(tags::PATIENT_ID, VR::LO, 0, b"P001")));
        assert_eq!(s.patient_id.as_deref(), Some("P001"));
        // an equal or deeper occurrence never replaces the bound one
        assert!(!state.project(&mut s, &element(tags::PATIENT_ID, VR::LO, 0, b"P002")));
        assert!(!state.project(&mut s, &element(tags::PATIENT_ID, VR::LO, 1, b"P003")));
        assert_eq!(s.patient_id.as_deref(), Some("P001"));
        assert_eq!(state.bound_level(tags::PATIENT_ID), Some(0));
    }

    #[test]
    fn top_level_scope() {
        let mut s = summary();
        let mut state = ProjectionState::new();
        let rows = 64_u16.to_ne_bytes();
        assert!(!state.project(&mut s, &element(tags::ROWS, VR::US, 1, &rows)));
        assert_eq!(s.rows, None);
        assert!(state.project(&mut s, &element(tags::ROWS, VR::US, 0, &rows)));
        assert_eq!(s.rows, Some(64));
    }

    #[test]
    fn required_elements() {
        let mut s = summary();
        let mut state = ProjectionState::new();
        state.project(&mut s, &element(tags::PATIENT_NAME, VR::PN, 0, b"Doe^John"));
        state.project(&mut s, &element(tags::PATIENT_ID, VR::LO, 0, b"P001"));

        let err = state.check_required().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::RequiredElementMissing { tag, alias: "Modality", .. } if tag == tags::MODALITY
        ));

        state.project(&mut s, &element(tags::MODALITY, VR::CS, 0, b"CT"));
        state.check_required().unwrap();
        assert_eq!(s.modality.as_deref(), Some("CT"));
        assert_eq!(s.patient_name.as_ref().map(|n| n.last()), Some("Doe"));
    }

    #[test]
    fn states_are_independent() {
        let mut s = summary();
        let mut first = ProjectionState::new();
        first.project(&mut s, &element(tags::MODALITY, VR::CS, 0, b"MR"));
        let second = ProjectionState::new();
        assert_eq!(first.bound_level(tags::MODALITY), Some(0));
        assert_eq!(second.bound_level(tags::MODALITY), None);
    }
}
