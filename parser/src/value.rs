//! Element value decoding.
//!
//! Raw bytes of multi-byte numbers are first brought to native byte order,
//! in place, and then read into typed values.
//! Text values are split on the backslash separator
//! and trimmed of padding, leaving the raw bytes untouched.

use dcmingest_core::value::C;
use dcmingest_core::{ElementValue, PersonName, Tag, VR};
use dcmingest_encoding::transfer_syntax::{swap_in_place, swap_width, TransferSyntax};
use smallvec::SmallVec;

/// The separator of multiple values in a text value.
pub const VALUE_SEPARATOR: char = '\\';

/// The prefix prepended to the text of the auto-load element.
pub const AUTO_LOAD_PREFIX: &str = "AUTOLOAD:";

/// Bring multi-byte numbers of a raw value to native byte order.
///
/// `syntax` is the syntax in effect for the element.
pub fn to_native_order(tag: Tag, vr: VR, raw: &mut [u8], syntax: TransferSyntax) {
    if let Some(width) = swap_width(vr) {
        if syntax.for_tag(tag).needs_swap() {
            swap_in_place(raw, width);
        }
    }
}

fn trim_padding(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\0')
}

fn trim_end_padding(s: &str) -> &str {
    s.trim_end_matches(|c: char| c == ' ' || c == '\0')
}

fn numbers<T, const N: usize>(raw: &[u8], from: fn([u8; N]) -> T) -> C<T> {
    raw.chunks_exact(N)
        .map(|word| {
            let mut bytes = [0u8; N];
            bytes.copy_from_slice(word);
            from(bytes)
        })
        .collect()
}

/// Decode a raw value in native byte order into its typed form.
pub fn decode_value(vr: VR, raw: &[u8]) -> ElementValue {
    if raw.is_empty() {
        return if vr == VR::SQ {
            ElementValue::Sequence
        } else {
            ElementValue::Empty
        };
    }

    match vr {
        VR::US | VR::XS => ElementValue::U16(numbers(raw, u16::from_ne_bytes)),
        VR::SS => ElementValue::I16(numbers(raw, i16::from_ne_bytes)),
        VR::UL => ElementValue::U32(numbers(raw, u32::from_ne_bytes)),
        VR::SL => ElementValue::I32(numbers(raw, i32::from_ne_bytes)),
        VR::UV => ElementValue::U64(numbers(raw, u64::from_ne_bytes)),
        VR::SV => ElementValue::I64(numbers(raw, i64::from_ne_bytes)),
        VR::FL => ElementValue::F32(numbers(raw, f32::from_ne_bytes)),
        VR::FD => ElementValue::F64(numbers(raw, f64::from_ne_bytes)),
        // word blobs keep their raw bytes only
        VR::OB | VR::OW | VR::OL | VR::OV | VR::OF | VR::OD | VR::UN => ElementValue::Bytes,
        VR::AT => {
            let words: C<u16> = numbers(raw, u16::from_ne_bytes);
            ElementValue::Tags(words.chunks_exact(2).map(|p| Tag(p[0], p[1])).collect())
        }
        VR::PN => {
            let text = String::from_utf8_lossy(raw);
            ElementValue::PersonName(text.split(VALUE_SEPARATOR).map(PersonName::parse).collect())
        }
        VR::LT | VR::ST | VR::UT | VR::UR => {
            let text = String::from_utf8_lossy(raw);
            let mut v = SmallVec::new();
            v.push(trim_end_padding(&text).to_string());
            ElementValue::Strs(v)
        }
        vr if vr.is_multi_string() => {
            let text = String::from_utf8_lossy(raw);
            ElementValue::Strs(
                text.split(VALUE_SEPARATOR)
                    .map(|s| trim_padding(s).to_string())
                    .collect(),
            )
        }
        VR::SQ => ElementValue::Sequence,
        _ => ElementValue::Bytes,
    }
}

/// Prepend the auto-load marker to the first text value.
pub fn mark_auto_load(value: &mut ElementValue) {
    if let ElementValue::Strs(v) = value {
        match v.first_mut() {
            Some(first) => first.insert_str(0, AUTO_LOAD_PREFIX),
            None => v.push(AUTO_LOAD_PREFIX.to_string()),
        }
    }
}

/// Build the raw value of a text in native byte order,
/// for the given VR.
///
/// Text VRs take the text as is, padded to an even length.
/// Binary numeric VRs parse each backslash-separated number.
/// Returns `None` when the VR admits no textual edit
/// or a number could not be parsed.
pub fn raw_from_text(vr: VR, text: &str) -> Option<Vec<u8>> {
    fn parse_all<T: std::str::FromStr>(text: &str) -> Option<Vec<T>> {
        text.split(VALUE_SEPARATOR)
            .map(|s| s.trim().parse().ok())
            .collect()
    }

    let raw = match vr {
        VR::US | VR::OW => parse_all::<u16>(text)?
            .into_iter()
            .flat_map(u16::to_ne_bytes)
            .collect(),
        VR::SS => parse_all::<i16>(text)?
            .into_iter()
            .flat_map(i16::to_ne_bytes)
            .collect(),
        VR::UL | VR::OL => parse_all::<u32>(text)?
            .into_iter()
            .flat_map(u32::to_ne_bytes)
            .collect(),
        VR::SL => parse_all::<i32>(text)?
            .into_iter()
            .flat_map(i32::to_ne_bytes)
            .collect(),
        VR::UV | VR::OV => parse_all::<u64>(text)?
            .into_iter()
            .flat_map(u64::to_ne_bytes)
            .collect(),
        VR::SV => parse_all::<i64>(text)?
            .into_iter()
            .flat_map(i64::to_ne_bytes)
            .collect(),
        VR::FL | VR::OF => parse_all::<f32>(text)?
            .into_iter()
            .flat_map(f32::to_ne_bytes)
            .collect(),
        VR::FD | VR::OD => parse_all::<f64>(text)?
            .into_iter()
            .flat_map(f64::to_ne_bytes)
            .collect(),
        vr if vr.is_multi_string() || vr.is_single_string() => {
            let mut raw = text.as_bytes().to_vec();
            if raw.len() % 2 == 1 {
                raw.push(vr.padding_byte());
            }
            raw
        }
        _ => return None,
    };
    Some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmingest_encoding::transfer_syntax::TransferSyntax;
    use smallvec::smallvec;

    #[test]
    fn decode_strings() {
        let v = decode_value(VR::CS, b"ORIGINAL\\PRIMARY ");
        assert_eq!(
            v,
            ElementValue::Strs(smallvec!["ORIGINAL".to_string(), "PRIMARY".to_string()])
        );
        assert_eq!(v.multiplicity(), 2);

        let v = decode_value(VR::UI, b"1.2.840.10008.1.2\0");
        assert_eq!(v.first_str(), Some("1.2.840.10008.1.2"));

        // backslash is not a separator in text VRs
        let v = decode_value(VR::LT, b"  a\\b  ");
        assert_eq!(v.first_str(), Some("  a\\b"));
        assert_eq!(v.multiplicity(), 1);
    }

    #[test]
    fn decode_person_name() {
        let v = decode_value(VR::PN, b"Doe^John^^Dr^Jr ");
        let name = v.first_person_name().unwrap();
        assert_eq!(name.last(), "Doe");
        assert_eq!(name.first(), "John");
        assert_eq!(name.middle(), "");
        assert_eq!(name.prefix(), "Dr");
        assert_eq!(name.suffix(), "Jr");
    }

    #[test]
    fn decode_numbers_from_big_endian() {
        let mut raw = vec![0x00, 0x02, 0xFF, 0xFE];
        let big = TransferSyntax::EXPLICIT_VR_BIG_ENDIAN;
        to_native_order(Tag(0x0028, 0x0010), VR::US, &mut raw, big);
        assert_eq!(decode_value(VR::US, &raw), ElementValue::U16(smallvec![512, 0xFFFE]));

        let mut raw = vec![0x00, 0x02];
        let little = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
        to_native_order(Tag(0x0028, 0x0010), VR::SS, &mut raw, little);
        assert_eq!(decode_value(VR::SS, &raw), ElementValue::I16(smallvec![512]));

        // text is never swapped
        let mut raw = b"MR".to_vec();
        to_native_order(Tag(0x0008, 0x0060), VR::CS, &mut raw, big);
        assert_eq!(raw, b"MR");
    }

    #[test]
    fn decode_attribute_tags() {
        let mut raw = vec![0x28, 0x00, 0x10, 0x21];
        let little = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
        to_native_order(Tag(0x0072, 0x0026), VR::AT, &mut raw, little);
        assert_eq!(
            decode_value(VR::AT, &raw),
            ElementValue::Tags(smallvec![Tag(0x0028, 0x2110)])
        );
    }

    #[test]
    fn empty_and_opaque() {
        assert_eq!(decode_value(VR::LO, b""), ElementValue::Empty);
        assert_eq!(decode_value(VR::OB, &[1, 2]), ElementValue::Bytes);
        assert_eq!(decode_value(VR::UN, &[1, 2]), ElementValue::Bytes);
        for vr in [VR::OW, VR::OL, VR::OF] {
            assert_eq!(decode_value(vr, &[1, 0, 2, 0]), ElementValue::Bytes, "{}", vr);
        }
        assert_eq!(decode_value(VR::OD, &1.0_f64.to_ne_bytes()), ElementValue::Bytes);
        assert_eq!(decode_value(VR::OV, &7_u64.to_ne_bytes()), ElementValue::Bytes);
    }

    #[test]
    fn auto_load_marker() {
        let mut v = decode_value(VR::LO, b"SCRIPT");
        mark_auto_load(&mut v);
        assert_eq!(v.first_str(), Some("AUTOLOAD:SCRIPT"));
        assert_eq!(AUTO_LOAD_PREFIX.len(), 9);
    }

    #[test]
    fn raw_values_from_text() {
        assert_eq!(raw_from_text(VR::LO, "ABC").unwrap(), b"ABC ");
        assert_eq!(raw_from_text(VR::UI, "1.2.3").unwrap(), b"1.2.3\0");
        assert_eq!(
            raw_from_text(VR::US, "512\\3").unwrap(),
            [512_u16.to_ne_bytes(), 3_u16.to_ne_bytes()].concat()
        );
        assert!(raw_from_text(VR::US, "x").is_none());
        assert!(raw_from_text(VR::SQ, "").is_none());
        assert!(raw_from_text(VR::OB, "00").is_none());
    }
}
