//! Construction of small files for the integration tests.
#![allow(dead_code)]

use dcmingest_core::header::LengthForm;
use dcmingest_core::{Tag, VR};
use dcmingest_encoding::TransferSyntax;

pub const IMPLICIT_VR_LE: &str = "1.2.840.10008.1.2";
pub const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";
pub const EXPLICIT_VR_BE: &str = "1.2.840.10008.1.2.2";
pub const JPEG_BASELINE: &str = "1.2.840.10008.1.2.4.50";

/// The syntax that a transfer syntax UID stands for,
/// for the uncompressed UIDs above.
pub fn syntax_of(uid: &str) -> TransferSyntax {
    match uid {
        IMPLICIT_VR_LE => TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_BE => TransferSyntax::EXPLICIT_VR_BIG_ENDIAN,
        _ => TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
    }
}

fn pad(mut value: Vec<u8>, vr: VR) -> Vec<u8> {
    if value.len() % 2 == 1 {
        value.push(vr.padding_byte());
    }
    value
}

/// Writes elements by hand, one syntax at a time.
#[derive(Debug, Clone)]
pub struct Encoder {
    pub syntax: TransferSyntax,
    pub bytes: Vec<u8>,
}

impl Encoder {
    pub fn new(syntax: TransferSyntax) -> Self {
        Encoder {
            syntax,
            bytes: Vec::new(),
        }
    }

    fn u16(&mut self, value: u16) {
        if self.syntax.is_big_endian() {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        } else {
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn u32(&mut self, value: u32) {
        if self.syntax.is_big_endian() {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        } else {
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    pub fn header(&mut self, tag: Tag, vr: VR, len: u32) -> &mut Self {
        self.u16(tag.group());
        self.u16(tag.element());
        if tag.is_delimiter_group() || !self.syntax.is_explicit_vr() {
            self.u32(len);
            return self;
        }
        self.bytes.extend_from_slice(&vr.to_bytes());
        match vr.length_form() {
            LengthForm::Short => self.u16(len as u16),
            LengthForm::Long => {
                self.bytes.extend_from_slice(&[0, 0]);
                self.u32(len);
            }
        }
        self
    }

    /// An element with a raw value, written verbatim.
    pub fn raw(&mut self, tag: Tag, vr: VR, value: &[u8]) -> &mut Self {
        self.header(tag, vr, value.len() as u32);
        self.bytes.extend_from_slice(value);
        self
    }

    pub fn text(&mut self, tag: Tag, vr: VR, text: &str) -> &mut Self {
        let value = pad(text.as_bytes().to_vec(), vr);
        self.raw(tag, vr, &value)
    }

    pub fn us(&mut self, tag: Tag, values: &[u16]) -> &mut Self {
        self.header(tag, VR::US, 2 * values.len() as u32);
        for &v in values {
            self.u16(v);
        }
        self
    }

    pub fn ul(&mut self, tag: Tag, values: &[u32]) -> &mut Self {
        self.header(tag, VR::UL, 4 * values.len() as u32);
        for &v in values {
            self.u32(v);
        }
        self
    }

    /// A sequence of undefined length with items of undefined length.
    pub fn sequence(&mut self, tag: Tag, items: &[Encoder]) -> &mut Self {
        self.header(tag, VR::SQ, u32::MAX);
        for item in items {
            self.header(Tag::ITEM, VR::UN, u32::MAX);
            self.bytes.extend_from_slice(&item.bytes);
            self.header(Tag::ITEM_DELIMITER, VR::UN, 0);
        }
        self.header(Tag::SEQUENCE_DELIMITER, VR::UN, 0);
        self
    }

    /// A sequence of defined length with one item of defined length.
    pub fn defined_sequence(&mut self, tag: Tag, item: &Encoder) -> &mut Self {
        let item_len = item.bytes.len() as u32;
        self.header(tag, VR::SQ, item_len + 8);
        self.header(Tag::ITEM, VR::UN, item_len);
        self.bytes.extend_from_slice(&item.bytes);
        self
    }

    /// An element of undefined length but not a sequence,
    /// holding one item whose contents are in implicit VR little endian.
    /// The item and the delimiters are written in that syntax too.
    pub fn undefined_length(&mut self, tag: Tag, vr: VR, item: &Encoder) -> &mut Self {
        assert_eq!(item.syntax, TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN);
        self.header(tag, vr, u32::MAX);
        let mut nested = Encoder::new(TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN);
        nested.header(Tag::ITEM, VR::UN, u32::MAX);
        nested.bytes.extend_from_slice(&item.bytes);
        nested
            .header(Tag::ITEM_DELIMITER, VR::UN, 0)
            .header(Tag::SEQUENCE_DELIMITER, VR::UN, 0);
        self.bytes.extend_from_slice(&nested.bytes);
        self
    }

    /// Encapsulated pixel data with an empty offset table.
    pub fn fragments(&mut self, fragments: &[&[u8]]) -> &mut Self {
        self.header(Tag::PIXEL_DATA, VR::OB, u32::MAX);
        self.header(Tag::ITEM, VR::UN, 0);
        for fragment in fragments {
            self.header(Tag::ITEM, VR::UN, fragment.len() as u32);
            self.bytes.extend_from_slice(fragment);
        }
        self.header(Tag::SEQUENCE_DELIMITER, VR::UN, 0);
        self
    }
}

/// A whole file: preamble, signature, file meta group and data set.
pub fn file(transfer_syntax_uid: &str, dataset: &Encoder) -> Vec<u8> {
    let mut meta = Encoder::new(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN);
    meta.text(Tag(0x0002, 0x0002), VR::UI, "1.2.840.10008.5.1.4.1.1.2")
        .text(Tag(0x0002, 0x0003), VR::UI, "1.2.3.4.5.6.7")
        .text(Tag(0x0002, 0x0010), VR::UI, transfer_syntax_uid)
        .text(Tag(0x0002, 0x0012), VR::UI, "1.2.3.999")
        .text(Tag(0x0002, 0x0013), VR::SH, "INGEST_TEST");

    let mut group_length = Encoder::new(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN);
    group_length.ul(Tag(0x0002, 0x0000), &[meta.bytes.len() as u32]);

    let mut bytes = vec![0u8; 128];
    bytes.extend_from_slice(b"DICM");
    bytes.extend_from_slice(&group_length.bytes);
    bytes.extend_from_slice(&meta.bytes);
    bytes.extend_from_slice(&dataset.bytes);
    bytes
}

/// The data set of a small 2x2 CT image with 16-bit native pixel data.
pub fn ct_dataset(syntax: TransferSyntax) -> Encoder {
    let mut reference = Encoder::new(syntax);
    reference
        .text(Tag(0x0008, 0x1150), VR::UI, "1.2.840.10008.5.1.4.1.1.2")
        .text(Tag(0x0008, 0x1155), VR::UI, "1.2.3.4.5.6.0")
        .text(Tag(0x0008, 0x0060), VR::CS, "MR");

    let mut ds = Encoder::new(syntax);
    ds.text(Tag(0x0008, 0x0016), VR::UI, "1.2.840.10008.5.1.4.1.1.2")
        .text(Tag(0x0008, 0x0018), VR::UI, "1.2.3.4.5.6.7")
        .text(Tag(0x0008, 0x0020), VR::DA, "20240131")
        .text(Tag(0x0008, 0x0060), VR::CS, "CT")
        .text(Tag(0x0008, 0x0070), VR::LO, "ACME")
        .sequence(Tag(0x0008, 0x1140), &[reference])
        .text(Tag(0x0010, 0x0010), VR::PN, "Doe^John^Q^Dr^Jr")
        .text(Tag(0x0010, 0x0020), VR::LO, "PID001")
        .text(Tag(0x0018, 0x0050), VR::DS, "1.25")
        .text(Tag(0x0020, 0x0013), VR::IS, "7")
        .text(Tag(0x0020, 0x0032), VR::DS, "-100\\-120.5\\30")
        .us(Tag(0x0028, 0x0002), &[1])
        .text(Tag(0x0028, 0x0004), VR::CS, "MONOCHROME2")
        .us(Tag(0x0028, 0x0010), &[2])
        .us(Tag(0x0028, 0x0011), &[2])
        .text(Tag(0x0028, 0x0030), VR::DS, "0.5\\0.5")
        .us(Tag(0x0028, 0x0100), &[16])
        .us(Tag(0x0028, 0x0101), &[12])
        .us(Tag(0x0028, 0x0102), &[11])
        .us(Tag(0x0028, 0x0103), &[0]);
    ds
}

/// The pixel values of [`ct_dataset`], in the given byte order.
pub fn ct_pixels(syntax: TransferSyntax) -> Vec<u8> {
    [1u16, 2, 0x0300, 0x0FFF]
        .iter()
        .flat_map(|v| {
            if syntax.is_big_endian() {
                v.to_be_bytes()
            } else {
                v.to_le_bytes()
            }
        })
        .collect()
}

/// A whole CT file in the given uncompressed syntax.
pub fn ct_file(transfer_syntax_uid: &str) -> Vec<u8> {
    let syntax = syntax_of(transfer_syntax_uid);
    let mut ds = ct_dataset(syntax);
    ds.raw(Tag::PIXEL_DATA, VR::OW, &ct_pixels(syntax));
    file(transfer_syntax_uid, &ds)
}
