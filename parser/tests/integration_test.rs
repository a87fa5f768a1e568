mod common;

use common::*;
use dcmingest_core::{Tag, VR};
use dcmingest_encoding::{PixelEncoding, TransferSyntax};
use dcmingest_parser::{DecodeOptions, EditSpec, FailureKind, HeaderSummary, ReadPreamble};
use rstest::rstest;

fn decode(bytes: &[u8]) -> HeaderSummary {
    DecodeOptions::new().from_bytes(bytes).unwrap()
}

/// Compare element lists by header and raw value.
fn assert_same_elements(a: &HeaderSummary, b: &HeaderSummary) {
    assert_eq!(a.elements().len(), b.elements().len());
    for (x, y) in a.elements().iter().zip(b.elements()) {
        assert_eq!(x.header().tag, y.header().tag);
        assert_eq!(x.vr(), y.vr(), "VR of {}", x.header().tag);
        assert_eq!(x.header().len.0, y.header().len.0, "length of {}", x.header().tag);
        assert_eq!(x.nesting_level(), y.nesting_level());
        assert_eq!(x.raw(), y.raw(), "value of {}", x.header().tag);
    }
}

#[rstest]
#[case(IMPLICIT_VR_LE)]
#[case(EXPLICIT_VR_LE)]
#[case(EXPLICIT_VR_BE)]
fn decode_and_project(#[case] uid: &str) {
    let summary = decode(&ct_file(uid));
    let syntax = syntax_of(uid);

    assert_eq!(summary.plan().meta_syntax, TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN);
    assert_eq!(summary.plan().dataset_syntax, syntax);
    assert_eq!(summary.plan().pixel_encoding, Some(PixelEncoding::Uncompressed));
    assert_eq!(summary.transfer_syntax_uid.as_deref(), Some(uid));
    assert_eq!(summary.implementation_version_name.as_deref(), Some("INGEST_TEST"));

    // the top level occurrence wins over the one in the sequence
    assert_eq!(summary.modality.as_deref(), Some("CT"));
    assert_eq!(summary.patient_id.as_deref(), Some("PID001"));
    assert_eq!(summary.manufacturer.as_deref(), Some("ACME"));
    assert_eq!(summary.slice_thickness, Some(1.25));
    assert_eq!(summary.instance_number, Some(7));
    assert_eq!(summary.image_position_patient, vec![-100., -120.5, 30.]);
    assert_eq!(summary.pixel_spacing, vec![0.5, 0.5]);
    assert_eq!(summary.rows, Some(2));
    assert_eq!(summary.columns, Some(2));
    assert_eq!(summary.bits_allocated, Some(16));
    assert_eq!(summary.bits_stored, Some(12));
    assert_eq!(summary.high_bit, Some(11));
    assert_eq!(summary.pixel_representation, Some(0));
    assert_eq!(summary.photometric_interpretation.as_deref(), Some("MONOCHROME2"));
    assert_eq!(
        summary.study_date(),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 31)
    );

    assert_eq!(summary.pixel_data(), Some(&ct_pixels(syntax)[..]));
    assert_eq!(summary.expected_pixel_data_len(), Some(8));
    assert_eq!(summary.bytes_parsed(), ct_file(uid).len() as u64);

    let nested = summary
        .elements()
        .iter()
        .find(|e| e.header().tag == Tag(0x0008, 0x1155))
        .unwrap();
    assert_eq!(nested.nesting_level(), 1);
    assert_eq!(nested.value().first_str(), Some("1.2.3.4.5.6.0"));
}

#[test]
fn person_name_components() {
    let summary = decode(&ct_file(EXPLICIT_VR_LE));
    let name = summary.patient_name.as_ref().unwrap();
    assert_eq!(name.last(), "Doe");
    assert_eq!(name.first(), "John");
    assert_eq!(name.middle(), "Q");
    assert_eq!(name.prefix(), "Dr");
    assert_eq!(name.suffix(), "Jr");
    assert_eq!(name.to_string(), "Dr John Q Doe Jr");
}

#[rstest]
#[case(IMPLICIT_VR_LE)]
#[case(EXPLICIT_VR_LE)]
#[case(EXPLICIT_VR_BE)]
fn rewrite_reproduces_the_input(#[case] uid: &str) {
    let bytes = ct_file(uid);
    let mut summary = decode(&bytes);
    let out = summary.encode().unwrap().to_vec();
    assert_eq!(out, bytes);

    let again = decode(&out);
    assert_same_elements(&summary, &again);
    assert_eq!(summary.pixel_data(), again.pixel_data());
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(16)]
#[case(65536)]
fn chunk_capacity_does_not_change_the_outcome(#[case] capacity: usize) {
    let bytes = ct_file(EXPLICIT_VR_BE);
    let reference = decode(&bytes);
    let summary = DecodeOptions::new()
        .chunk_capacity(capacity)
        .from_bytes(&bytes)
        .unwrap();
    assert_eq!(summary.input().chunk_capacity(), capacity);
    assert_same_elements(&reference, &summary);
    assert_eq!(reference.pixel_data(), summary.pixel_data());
    assert_eq!(reference.modality, summary.modality);
    assert_eq!(reference.image_position_patient, summary.image_position_patient);
}

#[test]
fn undefined_length_element_is_read_as_implicit_little_endian() {
    let syntax = TransferSyntax::EXPLICIT_VR_BIG_ENDIAN;
    let mut item = Encoder::new(TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN);
    item.us(Tag(0x0028, 0x0010), &[258])
        .text(Tag(0x0008, 0x0060), VR::CS, "OT");
    let mut ds = ct_dataset(syntax);
    ds.undefined_length(Tag(0x0040, 0x0275), VR::UN, &item)
        .raw(Tag::PIXEL_DATA, VR::OW, &ct_pixels(syntax));
    let bytes = file(EXPLICIT_VR_BE, &ds);

    let mut summary = decode(&bytes);
    assert_eq!(summary.plan().dataset_syntax, syntax);

    let marker = summary
        .elements()
        .iter()
        .position(|e| e.header().tag == Tag(0x0040, 0x0275))
        .unwrap();
    let element = &summary.elements()[marker];
    assert_eq!(element.nesting_level(), 0);
    assert_eq!(element.vr(), VR::UN);
    assert!(element.header().len.is_undefined());

    let nested: Vec<_> = summary.elements()[marker + 1..]
        .iter()
        .map(|e| (e.header().tag, e.nesting_level()))
        .collect();
    assert_eq!(
        nested,
        vec![
            (Tag::ITEM, 1),
            (Tag(0x0028, 0x0010), 1),
            (Tag(0x0008, 0x0060), 1),
            (Tag::ITEM_DELIMITER, 1),
            (Tag::SEQUENCE_DELIMITER, 1),
        ]
    );
    let rows = &summary.elements()[marker + 2];
    assert_eq!(rows.vr(), VR::US);
    assert_eq!(rows.value().to_u16(), Some(258));
    assert_eq!(rows.raw(), &258_u16.to_ne_bytes()[..]);

    // nested values are not projected into the summary
    assert_eq!(summary.rows, Some(2));
    assert_eq!(summary.modality.as_deref(), Some("CT"));
    assert_eq!(summary.pixel_data(), Some(&ct_pixels(syntax)[..]));

    assert_eq!(summary.encode().unwrap().to_vec(), bytes);
}

#[test]
fn missing_modality() {
    let syntax = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut ds = Encoder::new(syntax);
    ds.text(Tag(0x0010, 0x0010), VR::PN, "Doe^Jane")
        .text(Tag(0x0010, 0x0020), VR::LO, "PID002");
    let err = DecodeOptions::new()
        .from_bytes(&file(EXPLICIT_VR_LE, &ds))
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::RequiredElementMissing);

    ds.text(Tag(0x0010, 0x0030), VR::DA, "19700101");
    let mut with_modality = Encoder::new(syntax);
    with_modality.text(Tag(0x0008, 0x0060), VR::CS, "OT");
    with_modality.bytes.extend_from_slice(&ds.bytes);
    let summary = decode(&file(EXPLICIT_VR_LE, &with_modality));
    assert_eq!(summary.modality.as_deref(), Some("OT"));
    assert!(summary.pixel_data().is_none());
    assert_eq!(
        summary.patient_birth_date(),
        chrono::NaiveDate::from_ymd_opt(1970, 1, 1)
    );
}

#[test]
fn modality_inside_a_sequence_only() {
    let syntax = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut item = Encoder::new(syntax);
    item.text(Tag(0x0008, 0x0060), VR::CS, "MR");
    let mut ds = Encoder::new(syntax);
    ds.defined_sequence(Tag(0x0008, 0x1140), &item)
        .text(Tag(0x0010, 0x0010), VR::PN, "Doe^Jane")
        .text(Tag(0x0010, 0x0020), VR::LO, "PID002");
    let summary = decode(&file(EXPLICIT_VR_LE, &ds));
    assert_eq!(summary.modality.as_deref(), Some("MR"));
}

#[test]
fn encapsulated_pixel_data() {
    let syntax = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut ds = ct_dataset(syntax);
    ds.fragments(&[&[0xFF, 0xD8, 0x01, 0x02], &[0x03, 0x04, 0x05, 0x06, 0xFF, 0xD9]]);
    let bytes = file(JPEG_BASELINE, &ds);

    let mut summary = decode(&bytes);
    assert_eq!(summary.plan().pixel_encoding, Some(PixelEncoding::CompressedLossy));
    assert_eq!(
        summary.pixel_data(),
        Some(&[0xFF, 0xD8, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xFF, 0xD9][..])
    );
    assert_eq!(summary.fragment_lengths(), &[4, 6]);
    assert!(summary.pixel_data_header().unwrap().len.is_undefined());

    // written back as one block of defined length
    let out = summary.encode().unwrap().to_vec();
    let again = decode(&out);
    assert_same_elements(&summary, &again);
    assert_eq!(again.pixel_data(), summary.pixel_data());
    assert_eq!(again.pixel_data_header().unwrap().len.0, 10);
    assert_eq!(again.pixel_data_header().unwrap().vr, VR::OB);
}

#[test]
fn unknown_transfer_syntax() {
    let syntax = TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN;
    let mut ds = ct_dataset(syntax);
    ds.raw(Tag::PIXEL_DATA, VR::OW, &ct_pixels(syntax));
    let bytes = file("1.2.3.4.5", &ds);

    let err = DecodeOptions::new()
        .trust_declared_file(true)
        .from_bytes(&bytes)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::UnresolvableTransferSyntax);

    // without trust, the data set falls back to implicit VR little endian
    let summary = decode(&bytes);
    assert_eq!(summary.plan().dataset_syntax, syntax);
    assert_eq!(summary.plan().pixel_encoding, Some(PixelEncoding::Uncompressed));
    assert_eq!(summary.rows, Some(2));
}

#[test]
fn mislabeled_transfer_syntax() {
    // explicit VR content declared as implicit
    let syntax = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut ds = ct_dataset(syntax);
    ds.raw(Tag::PIXEL_DATA, VR::OW, &ct_pixels(syntax));
    let bytes = file(IMPLICIT_VR_LE, &ds);

    let summary = decode(&bytes);
    assert_eq!(summary.plan().dataset_syntax, syntax);
    assert_eq!(summary.modality.as_deref(), Some("CT"));

    let err = DecodeOptions::new()
        .trust_declared_file(true)
        .from_bytes(&bytes);
    assert!(err.is_err());
}

#[rstest]
#[case("1.2.840.10008.1.2.1.99")]
#[case("1.2.840.10008.1.2.4.100")]
fn unsupported_transfer_syntax(#[case] uid: &str) {
    let mut ds = ct_dataset(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN);
    ds.raw(Tag::PIXEL_DATA, VR::OB, &[0; 8]);
    let err = DecodeOptions::new()
        .from_bytes(&file(uid, &ds))
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::UnsupportedPixelEncoding);
}

#[test]
fn signature_without_preamble() {
    let bytes = ct_file(EXPLICIT_VR_LE);
    let summary = decode(&bytes[128..]);
    assert_eq!(summary.modality.as_deref(), Some("CT"));

    let summary = DecodeOptions::new()
        .read_preamble(ReadPreamble::Never)
        .from_bytes(&bytes[128..])
        .unwrap();
    assert_eq!(summary.rows, Some(2));

    let err = DecodeOptions::new()
        .read_preamble(ReadPreamble::Always)
        .from_bytes(&bytes[128..])
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::BadSignature);
}

#[test]
fn truncated_file() {
    let bytes = ct_file(EXPLICIT_VR_LE);
    let err = DecodeOptions::new()
        .from_bytes(&bytes[..bytes.len() - 3])
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::TruncatedStream);
}

#[test]
fn edits_are_written_back() {
    let mut summary = decode(&ct_file(EXPLICIT_VR_BE));
    let edits: Vec<EditSpec> = ["PatientID=ANON", "0028,0010=4", "(0020,0032)=1\\2\\3"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    summary.apply_edits(&edits).unwrap();
    assert_eq!(summary.patient_id.as_deref(), Some("ANON"));
    assert_eq!(summary.rows, Some(4));

    let out = summary.encode().unwrap().to_vec();
    let again = decode(&out);
    assert_eq!(again.patient_id.as_deref(), Some("ANON"));
    assert_eq!(again.rows, Some(4));
    assert_eq!(again.image_position_patient, vec![1., 2., 3.]);
    assert_eq!(again.modality.as_deref(), Some("CT"));
    assert_eq!(again.pixel_data(), summary.pixel_data());
}

#[test]
fn invalid_edits_leave_the_summary_untouched() {
    let mut summary = decode(&ct_file(EXPLICIT_VR_LE));
    let edits = [
        EditSpec::new(Tag(0x0010, 0x0020), "ANON"),
        EditSpec::new(Tag(0x0028, 0x0010), "many"),
    ];
    let err = summary.apply_edits(&edits).unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidEdit);
    assert_eq!(summary.patient_id.as_deref(), Some("PID001"));

    let err = summary
        .apply_edits(&[EditSpec::new(Tag(0x0008, 0x1140), "x")])
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidEdit);

    // nested elements are out of reach
    let err = summary
        .apply_edits(&[EditSpec::new(Tag(0x0008, 0x1155), "1.2")])
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidEdit);
}

#[test]
fn elements_of_undefined_length_cannot_be_edited() {
    let syntax = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut item = Encoder::new(TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN);
    item.us(Tag(0x0028, 0x0010), &[4]);
    let mut ds = ct_dataset(syntax);
    ds.undefined_length(Tag(0x0028, 0x1201), VR::OW, &item)
        .raw(Tag::PIXEL_DATA, VR::OW, &ct_pixels(syntax));
    let bytes = file(EXPLICIT_VR_LE, &ds);
    let mut summary = decode(&bytes);
    let before = summary.elements().len();

    let err = summary
        .apply_edits(&[EditSpec::new(Tag(0x0028, 0x1201), "1\\2")])
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidEdit);
    assert_eq!(summary.elements().len(), before);
    assert_eq!(summary.encode().unwrap().to_vec(), bytes);
}

#[test]
fn files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ct.dcm");
    let output = dir.path().join("ct_anon.dcm");
    std::fs::write(&input, ct_file(IMPLICIT_VR_LE)).unwrap();

    let mut summary = dcmingest_parser::open_file(&input).unwrap();
    summary
        .apply_edits(&["PatientName=Anonymous".parse().unwrap()])
        .unwrap();
    summary.write_to_file(&output).unwrap();

    let again = dcmingest_parser::open_file(&output).unwrap();
    assert_eq!(again.patient_name.as_ref().map(|n| n.last()), Some("Anonymous"));
    assert_eq!(again.pixel_data(), summary.pixel_data());

    let err = dcmingest_parser::open_file(dir.path().join("missing.dcm")).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io);
}
