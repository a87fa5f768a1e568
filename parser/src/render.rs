//! Canonical text rendering of decoded elements,
//! independent of the decoding process.
//!
//! Numbers render as plain decimal text,
//! strings pass through as decoded (already trimmed),
//! and person names render their parts in reading order.
//! Opaque bytes, sequences, attribute tags and empty values render as nothing.
//! Multiple values are joined with a backslash.

use crate::value::VALUE_SEPARATOR;
use dcmingest_core::{Element, ElementValue};
use std::fmt::Display;

fn join<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(VALUE_SEPARATOR);
        }
        out.push_str(&v.to_string());
    }
    out
}

/// Render the value of an element as text.
pub fn render_value(element: &Element) -> String {
    match element.value() {
        ElementValue::Strs(v) => join(v),
        ElementValue::PersonName(v) => join(v),
        ElementValue::U16(v) => join(v),
        ElementValue::I16(v) => join(v),
        ElementValue::U32(v) => join(v),
        ElementValue::I32(v) => join(v),
        ElementValue::U64(v) => join(v),
        ElementValue::I64(v) => join(v),
        ElementValue::F32(v) => join(v),
        ElementValue::F64(v) => join(v),
        ElementValue::Tags(_)
        | ElementValue::Bytes
        | ElementValue::Sequence
        | ElementValue::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::decode_value;
    use dcmingest_core::{DataElementHeader, Length, Tag, VR};

    fn element(tag: Tag, vr: VR, raw: &[u8]) -> Element {
        Element::new(
            DataElementHeader::new(tag, vr, Length(raw.len() as u32)),
            0,
            raw.to_vec(),
            decode_value(vr, raw),
            None,
        )
    }

    #[test]
    fn render_per_representation() {
        let raw = [512_u16.to_ne_bytes(), 2_u16.to_ne_bytes()].concat();
        let e = element(Tag(0x0028, 0x0010), VR::US, &raw);
        assert_eq!(render_value(&e), "512\\2");

        let e = element(Tag(0x0018, 0x0050), VR::FD, &1.5_f64.to_ne_bytes());
        assert_eq!(render_value(&e), "1.5");

        let e = element(Tag(0x0008, 0x0008), VR::CS, b"ORIGINAL\\PRIMARY ");
        assert_eq!(render_value(&e), "ORIGINAL\\PRIMARY");

        let e = element(Tag(0x0010, 0x0010), VR::PN, b"Doe^John^^Dr^Jr ");
        assert_eq!(render_value(&e), "Dr John Doe Jr");
    }

    #[test]
    fn opaque_values_render_empty() {
        let e = element(Tag(0x0009, 0x1010), VR::OB, &[1, 2, 3, 4]);
        assert_eq!(render_value(&e), "");
        let e = element(Tag(0x0072, 0x0026), VR::AT, &[0x28, 0x00, 0x10, 0x00]);
        assert_eq!(render_value(&e), "");
        let e = element(Tag(0x0010, 0x0020), VR::LO, b"");
        assert_eq!(render_value(&e), "");
    }

    #[test]
    fn word_blobs_render_empty() {
        let e = element(Tag(0x6000, 0x3000), VR::OW, &[1, 0, 2, 0, 3, 0]);
        assert_eq!(render_value(&e), "");
        let e = element(Tag(0x0028, 0x3006), VR::OW, &[0; 512]);
        assert_eq!(render_value(&e), "");
        for vr in [VR::OF, VR::OL, VR::OD, VR::OV, VR::UN] {
            let e = element(Tag(0x0009, 0x1020), vr, &[0; 8]);
            assert_eq!(render_value(&e), "", "{}", vr);
        }
    }
}
