//! The header summary: the named projection of a decoded file,
//! together with everything the decode produced.

use crate::vendor::VendorIdentity;
use chrono::NaiveDate;
use dcmingest_core::{DataElementHeader, Element, PersonName};
use dcmingest_encoding::decode::VrContext;
use dcmingest_encoding::stream::{ChunkChain, Cursor, InputStream};
use dcmingest_encoding::transfer_syntax::{PixelEncoding, TransferSyntax};

/// The resolved encodings of one file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FileDecodingPlan {
    /// the syntax of the file meta group,
    /// Explicit VR Little Endian unless the bytes said otherwise
    pub meta_syntax: TransferSyntax,
    /// the syntax of the main data set
    pub dataset_syntax: TransferSyntax,
    /// the syntax of the pixel data element
    pub pixel_syntax: TransferSyntax,
    /// the pixel data category,
    /// `None` until known from the declared UID or from the extracted size
    pub pixel_encoding: Option<PixelEncoding>,
    /// whether declared encodings of file input were believed
    pub trust_declared_file: bool,
    /// whether declared encodings of network input were believed
    pub trust_declared_network: bool,
}

impl Default for FileDecodingPlan {
    fn default() -> Self {
        FileDecodingPlan {
            meta_syntax: TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            dataset_syntax: TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
            pixel_syntax: TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
            pixel_encoding: None,
            trust_declared_file: false,
            trust_declared_network: false,
        }
    }
}

/// The decoded projection of one file.
///
/// Named fields are filled in while the elements are walked,
/// following the special element table of the [projector](crate::projector).
/// The summary also owns the full element list,
/// the input chunks, the output chunks once encoded,
/// and the extracted pixel data.
#[derive(Debug, Clone)]
pub struct HeaderSummary {
    // file meta information
    pub media_storage_sop_class_uid: Option<String>,
    pub media_storage_sop_instance_uid: Option<String>,
    pub transfer_syntax_uid: Option<String>,
    pub implementation_class_uid: Option<String>,
    pub implementation_version_name: Option<String>,
    pub source_ae_title: Option<String>,

    // identifiers
    pub sop_class_uid: Option<String>,
    pub sop_instance_uid: Option<String>,
    pub study_instance_uid: Option<String>,
    pub series_instance_uid: Option<String>,
    pub frame_of_reference_uid: Option<String>,
    pub accession_number: Option<String>,
    pub study_id: Option<String>,

    // dates and times, as written
    pub study_date_text: Option<String>,
    pub study_time: Option<String>,
    pub series_date_text: Option<String>,
    pub series_time: Option<String>,
    pub acquisition_date: Option<String>,
    pub acquisition_time: Option<String>,
    pub content_date: Option<String>,
    pub content_time: Option<String>,

    // descriptors
    pub specific_character_set: Option<String>,
    pub image_type: Vec<String>,
    pub modality: Option<String>,
    pub conversion_type: Option<String>,
    pub manufacturer: Option<String>,
    pub manufacturer_model_name: Option<String>,
    pub institution_name: Option<String>,
    pub referring_physician_name: Option<PersonName>,
    pub station_name: Option<String>,
    pub study_description: Option<String>,
    pub series_description: Option<String>,
    pub protocol_name: Option<String>,
    pub body_part_examined: Option<String>,
    pub software_versions: Option<String>,

    // patient
    pub patient_name: Option<PersonName>,
    pub patient_id: Option<String>,
    pub patient_birth_date_text: Option<String>,
    pub patient_sex: Option<String>,
    pub patient_age: Option<String>,
    pub patient_size: Option<f64>,
    pub patient_weight: Option<f64>,

    // acquisition
    pub slice_thickness: Option<f64>,
    pub kvp: Option<f64>,
    pub spacing_between_slices: Option<f64>,
    pub patient_position: Option<String>,
    pub series_number: Option<i64>,
    pub acquisition_number: Option<i64>,
    pub instance_number: Option<i64>,
    pub slice_location: Option<f64>,

    // geometry
    pub image_position_patient: Vec<f64>,
    pub image_orientation_patient: Vec<f64>,
    pub pixel_spacing: Vec<f64>,
    pub imager_pixel_spacing: Vec<f64>,

    // image pixel module
    pub samples_per_pixel: Option<u16>,
    pub photometric_interpretation: Option<String>,
    pub planar_configuration: Option<u16>,
    pub number_of_frames: Option<u32>,
    pub rows: Option<u16>,
    pub columns: Option<u16>,
    pub bits_allocated: Option<u16>,
    pub bits_stored: Option<u16>,
    pub high_bit: Option<u16>,
    pub pixel_representation: Option<u16>,

    // calibration
    pub window_center: Vec<f64>,
    pub window_width: Vec<f64>,
    pub rescale_intercept: Option<f64>,
    pub rescale_slope: Option<f64>,
    pub rescale_type: Option<String>,
    pub lossy_image_compression: Option<String>,

    pub(crate) elements: Vec<Element>,
    pub(crate) input: InputStream,
    pub(crate) output: Option<ChunkChain>,
    pub(crate) pixel_data_start: Option<Cursor>,
    pub(crate) pixel_header: Option<DataElementHeader>,
    pub(crate) pixel_data: Option<Vec<u8>>,
    pub(crate) basic_offset_table: Vec<u32>,
    pub(crate) fragment_lengths: Vec<u32>,
    pub(crate) plan: FileDecodingPlan,
    pub(crate) bytes_parsed: u64,
}

fn parse_date(text: Option<&String>) -> Option<NaiveDate> {
    let text = text?.trim();
    NaiveDate::parse_from_str(text, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y.%m.%d"))
        .ok()
}

impl HeaderSummary {
    /// An empty summary reading from the given input stream.
    pub(crate) fn new(input: InputStream, plan: FileDecodingPlan) -> Self {
        HeaderSummary {
            media_storage_sop_class_uid: None,
            media_storage_sop_instance_uid: None,
            transfer_syntax_uid: None,
            implementation_class_uid: None,
            implementation_version_name: None,
            source_ae_title: None,
            sop_class_uid: None,
            sop_instance_uid: None,
            study_instance_uid: None,
            series_instance_uid: None,
            frame_of_reference_uid: None,
            accession_number: None,
            study_id: None,
            study_date_text: None,
            study_time: None,
            series_date_text: None,
            series_time: None,
            acquisition_date: None,
            acquisition_time: None,
            content_date: None,
            content_time: None,
            specific_character_set: None,
            image_type: Vec::new(),
            modality: None,
            conversion_type: None,
            manufacturer: None,
            manufacturer_model_name: None,
            institution_name: None,
            referring_physician_name: None,
            station_name: None,
            study_description: None,
            series_description: None,
            protocol_name: None,
            body_part_examined: None,
            software_versions: None,
            patient_name: None,
            patient_id: None,
            patient_birth_date_text: None,
            patient_sex: None,
            patient_age: None,
            patient_size: None,
            patient_weight: None,
            slice_thickness: None,
            kvp: None,
            spacing_between_slices: None,
            patient_position: None,
            series_number: None,
            acquisition_number: None,
            instance_number: None,
            slice_location: None,
            image_position_patient: Vec::new(),
            image_orientation_patient: Vec::new(),
            pixel_spacing: Vec::new(),
            imager_pixel_spacing: Vec::new(),
            samples_per_pixel: None,
            photometric_interpretation: None,
            planar_configuration: None,
            number_of_frames: None,
            rows: None,
            columns: None,
            bits_allocated: None,
            bits_stored: None,
            high_bit: None,
            pixel_representation: None,
            window_center: Vec::new(),
            window_width: Vec::new(),
            rescale_intercept: None,
            rescale_slope: None,
            rescale_type: None,
            lossy_image_compression: None,
            elements: Vec::new(),
            input,
            output: None,
            pixel_data_start: None,
            pixel_header: None,
            pixel_data: None,
            basic_offset_table: Vec::new(),
            fragment_lengths: Vec::new(),
            plan,
            bytes_parsed: 0,
        }
    }

    /// All decoded elements, in stream order,
    /// including sequence, item and delimiter markers.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The elements of the root data set (and the file meta group).
    pub fn top_level_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.nesting_level() == 0)
    }

    /// The resolved encodings of this file.
    pub fn plan(&self) -> &FileDecodingPlan {
        &self.plan
    }

    /// The extracted pixel data, as one contiguous buffer
    /// in the byte order of the file.
    pub fn pixel_data(&self) -> Option<&[u8]> {
        self.pixel_data.as_deref()
    }

    /// The header of the pixel data element, as read.
    pub fn pixel_data_header(&self) -> Option<&DataElementHeader> {
        self.pixel_header.as_ref()
    }

    /// The read position of the pixel data element in the input chunks.
    pub fn pixel_data_start(&self) -> Option<Cursor> {
        self.pixel_data_start
    }

    /// The offsets of the basic offset table of encapsulated pixel data.
    pub fn basic_offset_table(&self) -> &[u32] {
        &self.basic_offset_table
    }

    /// The lengths of the fragments of encapsulated pixel data,
    /// in stream order.
    pub fn fragment_lengths(&self) -> &[u32] {
        &self.fragment_lengths
    }

    /// The input chunks.
    pub fn input(&self) -> &ChunkChain {
        self.input.chain()
    }

    /// The output chunks, once [encoded](Self::encode).
    pub fn output(&self) -> Option<&ChunkChain> {
        self.output.as_ref()
    }

    /// The number of bytes decoded from the input,
    /// from the start of the file up to the end of the pixel data.
    pub fn bytes_parsed(&self) -> u64 {
        self.bytes_parsed
    }

    /// The sibling values needed to resolve contextual VRs.
    pub fn vr_context(&self) -> VrContext {
        VrContext {
            pixel_representation: self.pixel_representation,
            bits_allocated: self.bits_allocated,
        }
    }

    pub(crate) fn vendor_identity(&self) -> VendorIdentity<'_> {
        VendorIdentity {
            implementation_class_uid: self.implementation_class_uid.as_deref(),
            implementation_version_name: self.implementation_version_name.as_deref(),
            source_ae_title: self.source_ae_title.as_deref(),
            manufacturer: self.manufacturer.as_deref(),
        }
    }

    /// The expected size of uncompressed pixel data in bytes,
    /// if the image geometry is known and its size fits in a `u64`.
    pub fn expected_pixel_data_len(&self) -> Option<u64> {
        let rows = u64::from(self.rows?);
        let columns = u64::from(self.columns?);
        let bytes_per_sample = (u64::from(self.bits_allocated?) + 7) / 8;
        let samples = u64::from(self.samples_per_pixel.unwrap_or(1));
        let frames = u64::from(self.number_of_frames.unwrap_or(1).max(1));
        rows.checked_mul(columns)?
            .checked_mul(bytes_per_sample)?
            .checked_mul(samples)?
            .checked_mul(frames)
    }

    /// Study Date (0008,0020), parsed.
    pub fn study_date(&self) -> Option<NaiveDate> {
        parse_date(self.study_date_text.as_ref())
    }

    /// Series Date (0008,0021), parsed.
    pub fn series_date(&self) -> Option<NaiveDate> {
        parse_date(self.series_date_text.as_ref())
    }

    /// Patient's Birth Date (0010,0030), parsed.
    pub fn patient_birth_date(&self) -> Option<NaiveDate> {
        parse_date(self.patient_birth_date_text.as_ref())
    }
}
