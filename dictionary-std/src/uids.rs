//! Well-known UIDs: the transfer syntaxes the reader tells apart,
//! and a few storage SOP classes used around the workspace.

// uncompressed transfer syntaxes
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";

/// Deflated Explicit VR Little Endian, recognized but not read
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";

/// Common root of the JPEG, JPEG-LS, JPEG 2000, MPEG and HEVC syntaxes.
/// The component after it selects the coding process.
pub const JPEG_FAMILY_PREFIX: &str = "1.2.840.10008.1.2.4.";

// a sample of the encapsulated syntaxes
pub const JPEG_BASELINE_8BIT: &str = "1.2.840.10008.1.2.4.50";
pub const JPEG_EXTENDED_12BIT: &str = "1.2.840.10008.1.2.4.51";
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
pub const JPEG_LS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
pub const JPEG_LS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
pub const JPEG_2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
pub const JPEG_2000: &str = "1.2.840.10008.1.2.4.91";
pub const MPEG2_MAIN_PROFILE: &str = "1.2.840.10008.1.2.4.100";
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";

// storage SOP classes
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
