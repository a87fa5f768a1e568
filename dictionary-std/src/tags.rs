//! Attribute tag constants and the entries of the standard registry.
//! Automatically generated. Edit at your own risk.

use dcmingest_core::dictionary::{DataDictionaryEntry, TagRange::*};
use dcmingest_core::Tag;
use dcmingest_core::VR::*;

/// File Meta Information Group Length 0002,0000
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version 0002,0001
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID 0002,0002
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID 0002,0003
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID 0002,0010
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID 0002,0012
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name 0002,0013
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// Source Application Entity Title 0002,0016
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// Sending Application Entity Title 0002,0017
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// Receiving Application Entity Title 0002,0018
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// Private Information Creator UID 0002,0100
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// Private Information 0002,0102
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// Specific Character Set 0008,0005
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Image Type 0008,0008
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// Instance Creation Date 0008,0012
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// Instance Creation Time 0008,0013
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOP Class UID 0008,0016
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOP Instance UID 0008,0018
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Study Date 0008,0020
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date 0008,0021
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Acquisition Date 0008,0022
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Content Date 0008,0023
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Acquisition DateTime 0008,002A
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// Study Time 0008,0030
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Series Time 0008,0031
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// Acquisition Time 0008,0032
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time 0008,0033
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Accession Number 0008,0050
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality 0008,0060
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Conversion Type 0008,0064
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer 0008,0070
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name 0008,0080
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Institution Code Sequence 0008,0082
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// Referring Physician's Name 0008,0090
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Code Value 0008,0100
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// Coding Scheme Designator 0008,0102
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// Code Meaning 0008,0104
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// Station Name 0008,1010
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Study Description 0008,1030
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Procedure Code Sequence 0008,1032
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// Series Description 0008,103E
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Institutional Department Name 0008,1040
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// Performing Physician's Name 0008,1050
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// Manufacturer's Model Name 0008,1090
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Referenced Study Sequence 0008,1110
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// Referenced Performed Procedure Step Sequence 0008,1111
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// Referenced Series Sequence 0008,1115
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// Referenced Patient Sequence 0008,1120
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// Referenced Image Sequence 0008,1140
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// Referenced SOP Class UID 0008,1150
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID 0008,1155
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Referenced SOP Sequence 0008,1199
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// Related Series Sequence 0008,1250
#[rustfmt::skip]
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// Derivation Description 0008,2111
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// Source Image Sequence 0008,2112
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// Anatomic Region Sequence 0008,2218
#[rustfmt::skip]
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// Primary Anatomic Structure Sequence 0008,2228
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE: Tag = Tag(0x0008, 0x2228);
/// Derivation Code Sequence 0008,9215
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// Patient's Name 0010,0010
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID 0010,0020
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Patient's Birth Date 0010,0030
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient's Sex 0010,0040
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Other Patient IDs Sequence 0010,1002
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// Patient's Age 0010,1010
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient's Size 0010,1020
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// Patient's Weight 0010,1030
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Patient Comments 0010,4000
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// Body Part Examined 0018,0015
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Slice Thickness 0018,0050
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP 0018,0060
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Spacing Between Slices 0018,0088
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Device Serial Number 0018,1000
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// Software Versions 0018,1020
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Protocol Name 0018,1030
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// Exposure Time 0018,1150
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// X-Ray Tube Current 0018,1151
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure 0018,1152
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// Imager Pixel Spacing 0018,1164
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// Patient Position 0018,5100
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// View Position 0018,5101
#[rustfmt::skip]
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// Sequence of Ultrasound Regions 0018,6011
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// Region Spatial Format 0018,6012
#[rustfmt::skip]
pub const REGION_SPATIAL_FORMAT: Tag = Tag(0x0018, 0x6012);
/// Region Data Type 0018,6014
#[rustfmt::skip]
pub const REGION_DATA_TYPE: Tag = Tag(0x0018, 0x6014);
/// Study Instance UID 0020,000D
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID 0020,000E
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID 0020,0010
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number 0020,0011
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number 0020,0012
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number 0020,0013
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Patient Orientation 0020,0020
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// Image Position (Patient) 0020,0032
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation (Patient) 0020,0037
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Frame of Reference UID 0020,0052
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality 0020,0060
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// Slice Location 0020,1041
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Image Comments 0020,4000
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// Frame Content Sequence 0020,9111
#[rustfmt::skip]
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// Plane Position Sequence 0020,9113
#[rustfmt::skip]
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// Plane Orientation Sequence 0020,9116
#[rustfmt::skip]
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// Dimension Organization Sequence 0020,9221
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
/// Dimension Index Sequence 0020,9222
#[rustfmt::skip]
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// Samples per Pixel 0028,0002
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Photometric Interpretation 0028,0004
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Planar Configuration 0028,0006
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number of Frames 0028,0008
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows 0028,0010
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns 0028,0011
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing 0028,0030
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Pixel Aspect Ratio 0028,0034
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// Bits Allocated 0028,0100
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored 0028,0101
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit 0028,0102
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation 0028,0103
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Image Pixel Value 0028,0106
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value 0028,0107
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Pixel Padding Value 0028,0120
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// Window Center 0028,1050
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width 0028,1051
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept 0028,1052
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope 0028,1053
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type 0028,1054
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Window Center & Width Explanation 0028,1055
#[rustfmt::skip]
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// Lossy Image Compression 0028,2110
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio 0028,2112
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// Modality LUT Sequence 0028,3000
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUT Descriptor 0028,3002
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUT Data 0028,3006
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOI LUT Sequence 0028,3010
#[rustfmt::skip]
pub const VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// Pixel Measures Sequence 0028,9110
#[rustfmt::skip]
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// Frame VOI LUT Sequence 0028,9132
#[rustfmt::skip]
pub const FRAME_VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// Pixel Value Transformation Sequence 0028,9145
#[rustfmt::skip]
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// Requested Procedure Description 0032,1060
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// Requested Procedure Code Sequence 0032,1064
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// Performed Procedure Step Start Date 0040,0244
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// Performed Procedure Step Description 0040,0254
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// Performed Protocol Code Sequence 0040,0260
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// Request Attributes Sequence 0040,0275
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// Acquisition Context Sequence 0040,0555
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// Concept Name Code Sequence 0040,A043
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// Content Sequence 0040,A730
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// Radiopharmaceutical Information Sequence 0054,0016
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// View Code Sequence 0054,0220
#[rustfmt::skip]
pub const VIEW_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0220);
/// Icon Image Sequence 0088,0200
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// Shared Functional Groups Sequence 5200,9229
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// Per-frame Functional Groups Sequence 5200,9230
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// Overlay Rows 60xx,0010
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// Overlay Columns 60xx,0011
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// Overlay Type 60xx,0040
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// Overlay Origin 60xx,0050
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// Overlay Bits Allocated 60xx,0100
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// Overlay Bit Position 60xx,0102
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// Overlay Data 60xx,3000
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// Pixel Data 7FE0,0010
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Data Set Trailing Padding FFFC,FFFC
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item FFFE,E000
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// Item Delimitation Item FFFE,E00D
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// Sequence Delimitation Item FFFE,E0DD
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

type E = DataDictionaryEntry;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(Tag(0x0002, 0x0000)), alias: "FileMetaInformationGroupLength", vr: UL, vm: "1", description: "File Meta Information Group Length" },
    E { tag: Single(Tag(0x0002, 0x0001)), alias: "FileMetaInformationVersion", vr: OB, vm: "1", description: "File Meta Information Version" },
    E { tag: Single(Tag(0x0002, 0x0002)), alias: "MediaStorageSOPClassUID", vr: UI, vm: "1", description: "Media Storage SOP Class UID" },
    E { tag: Single(Tag(0x0002, 0x0003)), alias: "MediaStorageSOPInstanceUID", vr: UI, vm: "1", description: "Media Storage SOP Instance UID" },
    E { tag: Single(Tag(0x0002, 0x0010)), alias: "TransferSyntaxUID", vr: UI, vm: "1", description: "Transfer Syntax UID" },
    E { tag: Single(Tag(0x0002, 0x0012)), alias: "ImplementationClassUID", vr: UI, vm: "1", description: "Implementation Class UID" },
    E { tag: Single(Tag(0x0002, 0x0013)), alias: "ImplementationVersionName", vr: SH, vm: "1", description: "Implementation Version Name" },
    E { tag: Single(Tag(0x0002, 0x0016)), alias: "SourceApplicationEntityTitle", vr: AE, vm: "1", description: "Source Application Entity Title" },
    E { tag: Single(Tag(0x0002, 0x0017)), alias: "SendingApplicationEntityTitle", vr: AE, vm: "1", description: "Sending Application Entity Title" },
    E { tag: Single(Tag(0x0002, 0x0018)), alias: "ReceivingApplicationEntityTitle", vr: AE, vm: "1", description: "Receiving Application Entity Title" },
    E { tag: Single(Tag(0x0002, 0x0100)), alias: "PrivateInformationCreatorUID", vr: UI, vm: "1", description: "Private Information Creator UID" },
    E { tag: Single(Tag(0x0002, 0x0102)), alias: "PrivateInformation", vr: OB, vm: "1", description: "Private Information" },
    E { tag: Single(Tag(0x0008, 0x0005)), alias: "SpecificCharacterSet", vr: CS, vm: "1-n", description: "Specific Character Set" },
    E { tag: Single(Tag(0x0008, 0x0008)), alias: "ImageType", vr: CS, vm: "2-n", description: "Image Type" },
    E { tag: Single(Tag(0x0008, 0x0012)), alias: "InstanceCreationDate", vr: DA, vm: "1", description: "Instance Creation Date" },
    E { tag: Single(Tag(0x0008, 0x0013)), alias: "InstanceCreationTime", vr: TM, vm: "1", description: "Instance Creation Time" },
    E { tag: Single(Tag(0x0008, 0x0016)), alias: "SOPClassUID", vr: UI, vm: "1", description: "SOP Class UID" },
    E { tag: Single(Tag(0x0008, 0x0018)), alias: "SOPInstanceUID", vr: UI, vm: "1", description: "SOP Instance UID" },
    E { tag: Single(Tag(0x0008, 0x0020)), alias: "StudyDate", vr: DA, vm: "1", description: "Study Date" },
    E { tag: Single(Tag(0x0008, 0x0021)), alias: "SeriesDate", vr: DA, vm: "1", description: "Series Date" },
    E { tag: Single(Tag(0x0008, 0x0022)), alias: "AcquisitionDate", vr: DA, vm: "1", description: "Acquisition Date" },
    E { tag: Single(Tag(0x0008, 0x0023)), alias: "ContentDate", vr: DA, vm: "1", description: "Content Date" },
    E { tag: Single(Tag(0x0008, 0x002A)), alias: "AcquisitionDateTime", vr: DT, vm: "1", description: "Acquisition DateTime" },
    E { tag: Single(Tag(0x0008, 0x0030)), alias: "StudyTime", vr: TM, vm: "1", description: "Study Time" },
    E { tag: Single(Tag(0x0008, 0x0031)), alias: "SeriesTime", vr: TM, vm: "1", description: "Series Time" },
    E { tag: Single(Tag(0x0008, 0x0032)), alias: "AcquisitionTime", vr: TM, vm: "1", description: "Acquisition Time" },
    E { tag: Single(Tag(0x0008, 0x0033)), alias: "ContentTime", vr: TM, vm: "1", description: "Content Time" },
    E { tag: Single(Tag(0x0008, 0x0050)), alias: "AccessionNumber", vr: SH, vm: "1", description: "Accession Number" },
    E { tag: Single(Tag(0x0008, 0x0060)), alias: "Modality", vr: CS, vm: "1", description: "Modality" },
    E { tag: Single(Tag(0x0008, 0x0064)), alias: "ConversionType", vr: CS, vm: "1", description: "Conversion Type" },
    E { tag: Single(Tag(0x0008, 0x0070)), alias: "Manufacturer", vr: LO, vm: "1", description: "Manufacturer" },
    E { tag: Single(Tag(0x0008, 0x0080)), alias: "InstitutionName", vr: LO, vm: "1", description: "Institution Name" },
    E { tag: Single(Tag(0x0008, 0x0082)), alias: "InstitutionCodeSequence", vr: SQ, vm: "1", description: "Institution Code Sequence" },
    E { tag: Single(Tag(0x0008, 0x0090)), alias: "ReferringPhysicianName", vr: PN, vm: "1", description: "Referring Physician's Name" },
    E { tag: Single(Tag(0x0008, 0x0100)), alias: "CodeValue", vr: SH, vm: "1", description: "Code Value" },
    E { tag: Single(Tag(0x0008, 0x0102)), alias: "CodingSchemeDesignator", vr: SH, vm: "1", description: "Coding Scheme Designator" },
    E { tag: Single(Tag(0x0008, 0x0104)), alias: "CodeMeaning", vr: LO, vm: "1", description: "Code Meaning" },
    E { tag: Single(Tag(0x0008, 0x1010)), alias: "StationName", vr: SH, vm: "1", description: "Station Name" },
    E { tag: Single(Tag(0x0008, 0x1030)), alias: "StudyDescription", vr: LO, vm: "1", description: "Study Description" },
    E { tag: Single(Tag(0x0008, 0x1032)), alias: "ProcedureCodeSequence", vr: SQ, vm: "1", description: "Procedure Code Sequence" },
    E { tag: Single(Tag(0x0008, 0x103E)), alias: "SeriesDescription", vr: LO, vm: "1", description: "Series Description" },
    E { tag: Single(Tag(0x0008, 0x1040)), alias: "InstitutionalDepartmentName", vr: LO, vm: "1", description: "Institutional Department Name" },
    E { tag: Single(Tag(0x0008, 0x1050)), alias: "PerformingPhysicianName", vr: PN, vm: "1-n", description: "Performing Physician's Name" },
    E { tag: Single(Tag(0x0008, 0x1090)), alias: "ManufacturerModelName", vr: LO, vm: "1", description: "Manufacturer's Model Name" },
    E { tag: Single(Tag(0x0008, 0x1110)), alias: "ReferencedStudySequence", vr: SQ, vm: "1", description: "Referenced Study Sequence" },
    E { tag: Single(Tag(0x0008, 0x1111)), alias: "ReferencedPerformedProcedureStepSequence", vr: SQ, vm: "1", description: "Referenced Performed Procedure Step Sequence" },
    E { tag: Single(Tag(0x0008, 0x1115)), alias: "ReferencedSeriesSequence", vr: SQ, vm: "1", description: "Referenced Series Sequence" },
    E { tag: Single(Tag(0x0008, 0x1120)), alias: "ReferencedPatientSequence", vr: SQ, vm: "1", description: "Referenced Patient Sequence" },
    E { tag: Single(Tag(0x0008, 0x1140)), alias: "ReferencedImageSequence", vr: SQ, vm: "1", description: "Referenced Image Sequence" },
    E { tag: Single(Tag(0x0008, 0x1150)), alias: "ReferencedSOPClassUID", vr: UI, vm: "1", description: "Referenced SOP Class UID" },
    E { tag: Single(Tag(0x0008, 0x1155)), alias: "ReferencedSOPInstanceUID", vr: UI, vm: "1", description: "Referenced SOP Instance UID" },
    E { tag: Single(Tag(0x0008, 0x1199)), alias: "ReferencedSOPSequence", vr: SQ, vm: "1", description: "Referenced SOP Sequence" },
    E { tag: Single(Tag(0x0008, 0x1250)), alias: "RelatedSeriesSequence", vr: SQ, vm: "1", description: "Related Series Sequence" },
    E { tag: Single(Tag(0x0008, 0x2111)), alias: "DerivationDescription", vr: ST, vm: "1", description: "Derivation Description" },
    E { tag: Single(Tag(0x0008, 0x2112)), alias: "SourceImageSequence", vr: SQ, vm: "1", description: "Source Image Sequence" },
    E { tag: Single(Tag(0x0008, 0x2218)), alias: "AnatomicRegionSequence", vr: SQ, vm: "1", description: "Anatomic Region Sequence" },
    E { tag: Single(Tag(0x0008, 0x2228)), alias: "PrimaryAnatomicStructureSequence", vr: SQ, vm: "1", description: "Primary Anatomic Structure Sequence" },
    E { tag: Single(Tag(0x0008, 0x9215)), alias: "DerivationCodeSequence", vr: SQ, vm: "1", description: "Derivation Code Sequence" },
    E { tag: Single(Tag(0x0010, 0x0010)), alias: "PatientName", vr: PN, vm: "1", description: "Patient's Name" },
    E { tag: Single(Tag(0x0010, 0x0020)), alias: "PatientID", vr: LO, vm: "1", description: "Patient ID" },
    E { tag: Single(Tag(0x0010, 0x0030)), alias: "PatientBirthDate", vr: DA, vm: "1", description: "Patient's Birth Date" },
    E { tag: Single(Tag(0x0010, 0x0040)), alias: "PatientSex", vr: CS, vm: "1", description: "Patient's Sex" },
    E { tag: Single(Tag(0x0010, 0x1002)), alias: "OtherPatientIDsSequence", vr: SQ, vm: "1", description: "Other Patient IDs Sequence" },
    E { tag: Single(Tag(0x0010, 0x1010)), alias: "PatientAge", vr: AS, vm: "1", description: "Patient's Age" },
    E { tag: Single(Tag(0x0010, 0x1020)), alias: "PatientSize", vr: DS, vm: "1", description: "Patient's Size" },
    E { tag: Single(Tag(0x0010, 0x1030)), alias: "PatientWeight", vr: DS, vm: "1", description: "Patient's Weight" },
    E { tag: Single(Tag(0x0010, 0x4000)), alias: "PatientComments", vr: LT, vm: "1", description: "Patient Comments" },
    E { tag: Single(Tag(0x0018, 0x0015)), alias: "BodyPartExamined", vr: CS, vm: "1", description: "Body Part Examined" },
    E { tag: Single(Tag(0x0018, 0x0050)), alias: "SliceThickness", vr: DS, vm: "1", description: "Slice Thickness" },
    E { tag: Single(Tag(0x0018, 0x0060)), alias: "KVP", vr: DS, vm: "1", description: "KVP" },
    E { tag: Single(Tag(0x0018, 0x0088)), alias: "SpacingBetweenSlices", vr: DS, vm: "1", description: "Spacing Between Slices" },
    E { tag: Single(Tag(0x0018, 0x1000)), alias: "DeviceSerialNumber", vr: LO, vm: "1", description: "Device Serial Number" },
    E { tag: Single(Tag(0x0018, 0x1020)), alias: "SoftwareVersions", vr: LO, vm: "1-n", description: "Software Versions" },
    E { tag: Single(Tag(0x0018, 0x1030)), alias: "ProtocolName", vr: LO, vm: "1", description: "Protocol Name" },
    E { tag: Single(Tag(0x0018, 0x1150)), alias: "ExposureTime", vr: IS, vm: "1", description: "Exposure Time" },
    E { tag: Single(Tag(0x0018, 0x1151)), alias: "XRayTubeCurrent", vr: IS, vm: "1", description: "X-Ray Tube Current" },
    E { tag: Single(Tag(0x0018, 0x1152)), alias: "Exposure", vr: IS, vm: "1", description: "Exposure" },
    E { tag: Single(Tag(0x0018, 0x1164)), alias: "ImagerPixelSpacing", vr: DS, vm: "2", description: "Imager Pixel Spacing" },
    E { tag: Single(Tag(0x0018, 0x5100)), alias: "PatientPosition", vr: CS, vm: "1", description: "Patient Position" },
    E { tag: Single(Tag(0x0018, 0x5101)), alias: "ViewPosition", vr: CS, vm: "1", description: "View Position" },
    E { tag: Single(Tag(0x0018, 0x6011)), alias: "SequenceOfUltrasoundRegions", vr: SQ, vm: "1", description: "Sequence of Ultrasound Regions" },
    E { tag: Single(Tag(0x0018, 0x6012)), alias: "RegionSpatialFormat", vr: US, vm: "1", description: "Region Spatial Format" },
    E { tag: Single(Tag(0x0018, 0x6014)), alias: "RegionDataType", vr: US, vm: "1", description: "Region Data Type" },
    E { tag: Single(Tag(0x0020, 0x000D)), alias: "StudyInstanceUID", vr: UI, vm: "1", description: "Study Instance UID" },
    E { tag: Single(Tag(0x0020, 0x000E)), alias: "SeriesInstanceUID", vr: UI, vm: "1", description: "Series Instance UID" },
    E { tag: Single(Tag(0x0020, 0x0010)), alias: "StudyID", vr: SH, vm: "1", description: "Study ID" },
    E { tag: Single(Tag(0x0020, 0x0011)), alias: "SeriesNumber", vr: IS, vm: "1", description: "Series Number" },
    E { tag: Single(Tag(0x0020, 0x0012)), alias: "AcquisitionNumber", vr: IS, vm: "1", description: "Acquisition Number" },
    E { tag: Single(Tag(0x0020, 0x0013)), alias: "InstanceNumber", vr: IS, vm: "1", description: "Instance Number" },
    E { tag: Single(Tag(0x0020, 0x0020)), alias: "PatientOrientation", vr: CS, vm: "2", description: "Patient Orientation" },
    E { tag: Single(Tag(0x0020, 0x0032)), alias: "ImagePositionPatient", vr: DS, vm: "3", description: "Image Position (Patient)" },
    E { tag: Single(Tag(0x0020, 0x0037)), alias: "ImageOrientationPatient", vr: DS, vm: "6", description: "Image Orientation (Patient)" },
    E { tag: Single(Tag(0x0020, 0x0052)), alias: "FrameOfReferenceUID", vr: UI, vm: "1", description: "Frame of Reference UID" },
    E { tag: Single(Tag(0x0020, 0x0060)), alias: "Laterality", vr: CS, vm: "1", description: "Laterality" },
    E { tag: Single(Tag(0x0020, 0x1041)), alias: "SliceLocation", vr: DS, vm: "1", description: "Slice Location" },
    E { tag: Single(Tag(0x0020, 0x4000)), alias: "ImageComments", vr: LT, vm: "1", description: "Image Comments" },
    E { tag: Single(Tag(0x0020, 0x9111)), alias: "FrameContentSequence", vr: SQ, vm: "1", description: "Frame Content Sequence" },
    E { tag: Single(Tag(0x0020, 0x9113)), alias: "PlanePositionSequence", vr: SQ, vm: "1", description: "Plane Position Sequence" },
    E { tag: Single(Tag(0x0020, 0x9116)), alias: "PlaneOrientationSequence", vr: SQ, vm: "1", description: "Plane Orientation Sequence" },
    E { tag: Single(Tag(0x0020, 0x9221)), alias: "DimensionOrganizationSequence", vr: SQ, vm: "1", description: "Dimension Organization Sequence" },
    E { tag: Single(Tag(0x0020, 0x9222)), alias: "DimensionIndexSequence", vr: SQ, vm: "1", description: "Dimension Index Sequence" },
    E { tag: Single(Tag(0x0028, 0x0002)), alias: "SamplesPerPixel", vr: US, vm: "1", description: "Samples per Pixel" },
    E { tag: Single(Tag(0x0028, 0x0004)), alias: "PhotometricInterpretation", vr: CS, vm: "1", description: "Photometric Interpretation" },
    E { tag: Single(Tag(0x0028, 0x0006)), alias: "PlanarConfiguration", vr: US, vm: "1", description: "Planar Configuration" },
    E { tag: Single(Tag(0x0028, 0x0008)), alias: "NumberOfFrames", vr: IS, vm: "1", description: "Number of Frames" },
    E { tag: Single(Tag(0x0028, 0x0010)), alias: "Rows", vr: US, vm: "1", description: "Rows" },
    E { tag: Single(Tag(0x0028, 0x0011)), alias: "Columns", vr: US, vm: "1", description: "Columns" },
    E { tag: Single(Tag(0x0028, 0x0030)), alias: "PixelSpacing", vr: DS, vm: "2", description: "Pixel Spacing" },
    E { tag: Single(Tag(0x0028, 0x0034)), alias: "PixelAspectRatio", vr: IS, vm: "2", description: "Pixel Aspect Ratio" },
    E { tag: Single(Tag(0x0028, 0x0100)), alias: "BitsAllocated", vr: US, vm: "1", description: "Bits Allocated" },
    E { tag: Single(Tag(0x0028, 0x0101)), alias: "BitsStored", vr: US, vm: "1", description: "Bits Stored" },
    E { tag: Single(Tag(0x0028, 0x0102)), alias: "HighBit", vr: US, vm: "1", description: "High Bit" },
    E { tag: Single(Tag(0x0028, 0x0103)), alias: "PixelRepresentation", vr: US, vm: "1", description: "Pixel Representation" },
    E { tag: Single(Tag(0x0028, 0x0106)), alias: "SmallestImagePixelValue", vr: XS, vm: "1", description: "Smallest Image Pixel Value" },
    E { tag: Single(Tag(0x0028, 0x0107)), alias: "LargestImagePixelValue", vr: XS, vm: "1", description: "Largest Image Pixel Value" },
    E { tag: Single(Tag(0x0028, 0x0120)), alias: "PixelPaddingValue", vr: XS, vm: "1", description: "Pixel Padding Value" },
    E { tag: Single(Tag(0x0028, 0x1050)), alias: "WindowCenter", vr: DS, vm: "1-n", description: "Window Center" },
    E { tag: Single(Tag(0x0028, 0x1051)), alias: "WindowWidth", vr: DS, vm: "1-n", description: "Window Width" },
    E { tag: Single(Tag(0x0028, 0x1052)), alias: "RescaleIntercept", vr: DS, vm: "1", description: "Rescale Intercept" },
    E { tag: Single(Tag(0x0028, 0x1053)), alias: "RescaleSlope", vr: DS, vm: "1", description: "Rescale Slope" },
    E { tag: Single(Tag(0x0028, 0x1054)), alias: "RescaleType", vr: LO, vm: "1", description: "Rescale Type" },
    E { tag: Single(Tag(0x0028, 0x1055)), alias: "WindowCenterWidthExplanation", vr: LO, vm: "1-n", description: "Window Center & Width Explanation" },
    E { tag: Single(Tag(0x0028, 0x2110)), alias: "LossyImageCompression", vr: CS, vm: "1", description: "Lossy Image Compression" },
    E { tag: Single(Tag(0x0028, 0x2112)), alias: "LossyImageCompressionRatio", vr: DS, vm: "1-n", description: "Lossy Image Compression Ratio" },
    E { tag: Single(Tag(0x0028, 0x3000)), alias: "ModalityLUTSequence", vr: SQ, vm: "1", description: "Modality LUT Sequence" },
    E { tag: Single(Tag(0x0028, 0x3002)), alias: "LUTDescriptor", vr: XS, vm: "3", description: "LUT Descriptor" },
    E { tag: Single(Tag(0x0028, 0x3006)), alias: "LUTData", vr: OW, vm: "1-n", description: "LUT Data" },
    E { tag: Single(Tag(0x0028, 0x3010)), alias: "VOILUTSequence", vr: SQ, vm: "1", description: "VOI LUT Sequence" },
    E { tag: Single(Tag(0x0028, 0x9110)), alias: "PixelMeasuresSequence", vr: SQ, vm: "1", description: "Pixel Measures Sequence" },
    E { tag: Single(Tag(0x0028, 0x9132)), alias: "FrameVOILUTSequence", vr: SQ, vm: "1", description: "Frame VOI LUT Sequence" },
    E { tag: Single(Tag(0x0028, 0x9145)), alias: "PixelValueTransformationSequence", vr: SQ, vm: "1", description: "Pixel Value Transformation Sequence" },
    E { tag: Single(Tag(0x0032, 0x1060)), alias: "RequestedProcedureDescription", vr: LO, vm: "1", description: "Requested Procedure Description" },
    E { tag: Single(Tag(0x0032, 0x1064)), alias: "RequestedProcedureCodeSequence", vr: SQ, vm: "1", description: "Requested Procedure Code Sequence" },
    E { tag: Single(Tag(0x0040, 0x0244)), alias: "PerformedProcedureStepStartDate", vr: DA, vm: "1", description: "Performed Procedure Step Start Date" },
    E { tag: Single(Tag(0x0040, 0x0254)), alias: "PerformedProcedureStepDescription", vr: LO, vm: "1", description: "Performed Procedure Step Description" },
    E { tag: Single(Tag(0x0040, 0x0260)), alias: "PerformedProtocolCodeSequence", vr: SQ, vm: "1", description: "Performed Protocol Code Sequence" },
    E { tag: Single(Tag(0x0040, 0x0275)), alias: "RequestAttributesSequence", vr: SQ, vm: "1", description: "Request Attributes Sequence" },
    E { tag: Single(Tag(0x0040, 0x0555)), alias: "AcquisitionContextSequence", vr: SQ, vm: "1", description: "Acquisition Context Sequence" },
    E { tag: Single(Tag(0x0040, 0xA043)), alias: "ConceptNameCodeSequence", vr: SQ, vm: "1", description: "Concept Name Code Sequence" },
    E { tag: Single(Tag(0x0040, 0xA730)), alias: "ContentSequence", vr: SQ, vm: "1", description: "Content Sequence" },
    E { tag: Single(Tag(0x0054, 0x0016)), alias: "RadiopharmaceuticalInformationSequence", vr: SQ, vm: "1", description: "Radiopharmaceutical Information Sequence" },
    E { tag: Single(Tag(0x0054, 0x0220)), alias: "ViewCodeSequence", vr: SQ, vm: "1", description: "View Code Sequence" },
    E { tag: Single(Tag(0x0088, 0x0200)), alias: "IconImageSequence", vr: SQ, vm: "1", description: "Icon Image Sequence" },
    E { tag: Single(Tag(0x5200, 0x9229)), alias: "SharedFunctionalGroupsSequence", vr: SQ, vm: "1", description: "Shared Functional Groups Sequence" },
    E { tag: Single(Tag(0x5200, 0x9230)), alias: "PerFrameFunctionalGroupsSequence", vr: SQ, vm: "1", description: "Per-frame Functional Groups Sequence" },
    E { tag: Group100(Tag(0x6000, 0x0010)), alias: "OverlayRows", vr: US, vm: "1", description: "Overlay Rows" },
    E { tag: Group100(Tag(0x6000, 0x0011)), alias: "OverlayColumns", vr: US, vm: "1", description: "Overlay Columns" },
    E { tag: Group100(Tag(0x6000, 0x0040)), alias: "OverlayType", vr: CS, vm: "1", description: "Overlay Type" },
    E { tag: Group100(Tag(0x6000, 0x0050)), alias: "OverlayOrigin", vr: SS, vm: "2", description: "Overlay Origin" },
    E { tag: Group100(Tag(0x6000, 0x0100)), alias: "OverlayBitsAllocated", vr: US, vm: "1", description: "Overlay Bits Allocated" },
    E { tag: Group100(Tag(0x6000, 0x0102)), alias: "OverlayBitPosition", vr: US, vm: "1", description: "Overlay Bit Position" },
    E { tag: Group100(Tag(0x6000, 0x3000)), alias: "OverlayData", vr: OX, vm: "1", description: "Overlay Data" },
    E { tag: Single(Tag(0x7FE0, 0x0010)), alias: "PixelData", vr: OX, vm: "1", description: "Pixel Data" },
    E { tag: Single(Tag(0xFFFC, 0xFFFC)), alias: "DataSetTrailingPadding", vr: OB, vm: "1", description: "Data Set Trailing Padding" },
    E { tag: Single(Tag(0xFFFE, 0xE000)), alias: "Item", vr: UN, vm: "1", description: "Item" },
    E { tag: Single(Tag(0xFFFE, 0xE00D)), alias: "ItemDelimitationItem", vr: UN, vm: "1", description: "Item Delimitation Item" },
    E { tag: Single(Tag(0xFFFE, 0xE0DD)), alias: "SequenceDelimitationItem", vr: UN, vm: "1", description: "Sequence Delimitation Item" },
];
