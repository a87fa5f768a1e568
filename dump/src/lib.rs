//! Printing of decoded header summaries.
//!
//! The output has three parts separated by rules:
//! the summary fields, one line per decoded element
//! (indented by nesting level), and the pixel data description.
//!
//! ```no_run
//! let summary = dcmingest_parser::open_file("path/to/file.dcm")?;
//! dcmingest_dump::dump_summary(&summary)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
use dcmingest_core::{Element, ElementValue, Tag, VR};
use dcmingest_parser::{render_value, HeaderSummary};
use owo_colors::{OwoColorize, Stream};
use std::fmt::{self, Display, Formatter};
use std::io::{stdout, Result as IoResult, Write};
use std::str::FromStr;

/// Width assumed when none is given and no terminal is attached.
const FALLBACK_WIDTH: u32 = 120;

/// Columns taken by the tag, alias, VR and length before a value.
const VALUE_COLUMN: u32 = 63;

/// Builder of dump settings.
///
/// ```no_run
/// use dcmingest_dump::{ColorMode, DumpOptions};
///
/// let summary = dcmingest_parser::open_file("scan.dcm")?;
/// DumpOptions::new()
///     .width(100)
///     .color_mode(ColorMode::Never)
///     .summary_only(true)
///     .dump_summary(&summary)?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct DumpOptions {
    pub color: ColorMode,
    /// line width for cutting values, `None` to ask the terminal
    pub width: Option<u32>,
    /// print text values whole
    pub no_text_limit: bool,
    /// print every value whole
    pub no_limit: bool,
    /// skip the element lines
    pub summary_only: bool,
}

impl DumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cut values so that lines fit in `width` characters.
    ///
    /// Only applies when dumping to standard output.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Take the width from the terminal, if there is one.
    pub fn width_auto(&mut self) -> &mut Self {
        self.width = None;
        self
    }

    pub fn no_text_limit(&mut self, no_text_limit: bool) -> &mut Self {
        self.no_text_limit = no_text_limit;
        self
    }

    pub fn no_limit(&mut self, no_limit: bool) -> &mut Self {
        self.no_limit = no_limit;
        self
    }

    pub fn summary_only(&mut self, summary_only: bool) -> &mut Self {
        self.summary_only = summary_only;
        self
    }

    pub fn color_mode(&mut self, color: ColorMode) -> &mut Self {
        self.color = color;
        self
    }

    /// Dump a header summary to standard output.
    pub fn dump_summary(&self, summary: &HeaderSummary) -> IoResult<()> {
        self.dump(stdout().lock(), summary, true)
    }

    /// Dump a header summary to the given writer, without cutting values.
    pub fn dump_summary_to(&self, to: impl Write, summary: &HeaderSummary) -> IoResult<()> {
        self.dump(to, summary, false)
    }

    fn dump(&self, mut to: impl Write, summary: &HeaderSummary, terminal: bool) -> IoResult<()> {
        match self.color {
            ColorMode::Always => owo_colors::set_override(true),
            ColorMode::Auto if terminal => owo_colors::unset_override(),
            ColorMode::Auto | ColorMode::Never => owo_colors::set_override(false),
        }

        let limits = if terminal {
            let max = Some(determine_width(self.width)).filter(|_| !self.no_limit);
            Limits {
                max,
                text_max: max.filter(|_| !self.no_text_limit),
            }
        } else {
            Limits::default()
        };

        summary_dump(&mut to, summary)?;
        rule(&mut to)?;
        if !self.summary_only {
            for element in summary.elements() {
                dump_element(&mut to, element, limits)?;
            }
            rule(&mut to)?;
        }
        pixel_dump(&mut to, summary)
    }
}

/// Line widths for values, `None` meaning no cut.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Limits {
    pub max: Option<u32>,
    pub text_max: Option<u32>,
}

/// When to color the output.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ColorMode {
    /// color standard output when it is a terminal,
    /// never color other writers
    #[default]
    Auto,
    Never,
    Always,
}

impl ColorMode {
    fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Never => "never",
            ColorMode::Always => "always",
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ColorMode::Auto, ColorMode::Never, ColorMode::Always]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or(ColorModeError)
    }
}

/// A color mode other than `auto`, `never` or `always`.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ColorModeError;

impl Display for ColorModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("color mode must be one of auto, never, always")
    }
}

impl std::error::Error for ColorModeError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Style {
    Tag,
    Alias,
    Number,
    Text,
    Time,
    Missing,
}

/// A piece of output painted according to its kind.
///
/// The formatter width, if any, pads the painted text.
#[derive(Debug, Clone, PartialEq)]
struct Painted<T>(Style, T);

impl Painted<&'static str> {
    fn missing() -> Self {
        Painted(Style::Missing, "(no value)")
    }
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Painted(style, value) = self;
        let text = match style {
            Style::Tag => value.if_supports_color(Stream::Stdout, |v| v.dimmed()).to_string(),
            Style::Alias => value.if_supports_color(Stream::Stdout, |v| v.bold()).to_string(),
            Style::Number => value.if_supports_color(Stream::Stdout, |v| v.cyan()).to_string(),
            Style::Text => value.if_supports_color(Stream::Stdout, |v| v.yellow()).to_string(),
            Style::Time => value.if_supports_color(Stream::Stdout, |v| v.green()).to_string(),
            Style::Missing => value.if_supports_color(Stream::Stdout, |v| v.italic()).to_string(),
        };
        // pad by the visible length, escape codes excluded
        let visible = value.to_string().chars().count();
        f.write_str(&text)?;
        if let Some(width) = f.width() {
            for _ in visible..width {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

fn rule(to: &mut impl Write) -> IoResult<()> {
    writeln!(to, "{:-<58}", "")
}

/// Dump a header summary to standard output with the default options.
pub fn dump_summary(summary: &HeaderSummary) -> IoResult<()> {
    DumpOptions::new().dump_summary(summary)
}

/// Dump a header summary to the given writer with the default options.
pub fn dump_summary_to(to: impl Write, summary: &HeaderSummary) -> IoResult<()> {
    DumpOptions::new().dump_summary_to(to, summary)
}

fn field<W: ?Sized + Write>(to: &mut W, label: &str, value: Option<&str>) -> IoResult<()> {
    match value {
        Some(value) => writeln!(to, "{}: {}", label, value),
        None => writeln!(to, "{}: {}", label, Painted::missing()),
    }
}

fn summary_dump<W: ?Sized + Write>(to: &mut W, summary: &HeaderSummary) -> IoResult<()> {
    let plan = summary.plan();
    field(to, "Media Storage SOP Class UID", summary.media_storage_sop_class_uid.as_deref())?;
    field(to, "Media Storage SOP Instance UID", summary.media_storage_sop_instance_uid.as_deref())?;
    match summary.transfer_syntax_uid.as_deref() {
        Some(uid) => writeln!(to, "Transfer Syntax: {} ({})", uid, plan.dataset_syntax)?,
        None => writeln!(to, "Transfer Syntax: {}", plan.dataset_syntax)?,
    }
    field(to, "Implementation Class UID", summary.implementation_class_uid.as_deref())?;
    field(to, "Implementation version name", summary.implementation_version_name.as_deref())?;
    writeln!(to)?;

    field(to, "Modality", summary.modality.as_deref())?;
    let patient_name = summary.patient_name.as_ref().map(|n| n.to_string());
    field(to, "Patient Name", patient_name.as_deref())?;
    field(to, "Patient ID", summary.patient_id.as_deref())?;
    let study_date = summary.study_date().map(|d| d.format("%Y-%m-%d").to_string());
    field(to, "Study Date", study_date.as_deref().or(summary.study_date_text.as_deref()))?;
    field(to, "Study Instance UID", summary.study_instance_uid.as_deref())?;
    field(to, "Series Instance UID", summary.series_instance_uid.as_deref())?;
    field(to, "SOP Instance UID", summary.sop_instance_uid.as_deref())?;
    field(to, "Manufacturer", summary.manufacturer.as_deref())?;
    match (summary.rows, summary.columns) {
        (Some(rows), Some(columns)) => writeln!(
            to,
            "Image: {}x{}, {} bits allocated",
            columns,
            rows,
            summary.bits_allocated.unwrap_or(0)
        )?,
        _ => field(to, "Image", None)?,
    }
    writeln!(to, "Bytes parsed: {}", summary.bytes_parsed())
}

fn pixel_dump<W: ?Sized + Write>(to: &mut W, summary: &HeaderSummary) -> IoResult<()> {
    let (Some(header), Some(pixels)) = (summary.pixel_data_header(), summary.pixel_data()) else {
        return writeln!(to, "Pixel Data: {}", Painted::missing());
    };
    let encoding = match summary.plan().pixel_encoding {
        Some(encoding) => format!("{:?}", encoding),
        None => "unknown".to_string(),
    };
    writeln!(to, "Pixel Data: {} {} bytes, {}", header.vr, pixels.len(), encoding)?;
    if !summary.fragment_lengths().is_empty() {
        let table = summary.basic_offset_table();
        if table.is_empty() {
            writeln!(to, "  offset table: {}", Painted(Style::Missing, "(empty)"))?;
        } else {
            let offsets = table.iter().map(|n| format!("{:04X}", n));
            writeln!(to, "  offset table: {}", value_list(offsets, None, false))?;
        }
        writeln!(to, "  fragments: {}", value_list(summary.fragment_lengths(), None, false))?;
    }
    if let Some(expected) = summary.expected_pixel_data_len() {
        writeln!(to, "  expected uncompressed size: {} bytes", expected)?;
    }
    Ok(())
}

fn marker_alias(tag: Tag) -> &'static str {
    match tag {
        Tag::ITEM => "Item",
        Tag::ITEM_DELIMITER => "ItemDelimitationItem",
        Tag::SEQUENCE_DELIMITER => "SequenceDelimitationItem",
        _ => "«Unknown Attribute»",
    }
}

/// Print one line describing the element,
/// indented by two spaces per nesting level.
pub fn dump_element<W>(to: &mut W, element: &Element, limits: Limits) -> IoResult<()>
where
    W: ?Sized + Write,
{
    let depth = element.nesting_level();
    let header = element.header();
    let tag = Painted(Style::Tag, header.tag);
    write!(to, "{:indent$}", "", indent = (depth * 2) as usize)?;

    let length = if header.len.is_undefined() {
        "u/l".to_string()
    } else {
        format!("{} bytes", header.len.0)
    };
    if element.is_delimitation() {
        let alias = Painted(Style::Alias, marker_alias(header.tag));
        return writeln!(to, "{} {} ({})", tag, alias, length);
    }

    let alias = Painted(Style::Alias, element.alias().unwrap_or("«Unknown Attribute»"));
    if element.value() == &ElementValue::Sequence || header.len.is_undefined() {
        return writeln!(to, "{} {:28} {} ({})", tag, alias, element.vr(), length);
    }

    let vm = match element.vr() {
        VR::OB | VR::OW | VR::UN => 1,
        _ => element.multiplicity(),
    };
    let room = |max: Option<u32>| max.map(|m| m.saturating_sub(VALUE_COLUMN + depth * 2));
    let limits = Limits {
        max: room(limits.max),
        text_max: room(limits.text_max),
    };
    writeln!(
        to,
        "{} {:28} {} ({},{:>3} bytes): {}",
        tag,
        alias,
        element.vr(),
        vm,
        header.len.0,
        value_summary(element, limits),
    )
}

fn value_summary(element: &Element, limits: Limits) -> Painted<String> {
    let Limits { max, text_max } = limits;
    match (element.value(), element.vr()) {
        (ElementValue::Empty | ElementValue::Sequence, _) => {
            Painted(Style::Missing, "(no value)".to_string())
        }
        (ElementValue::Strs(values), VR::DA | VR::TM | VR::DT) => {
            Painted(Style::Time, value_list(values, max, false))
        }
        (ElementValue::Strs(values), _) => Painted(Style::Text, value_list(values, text_max, true)),
        (ElementValue::PersonName(names), _) => Painted(
            Style::Text,
            value_list(names.iter().map(|n| n.to_dicom_string()), text_max, true),
        ),
        (ElementValue::Tags(tags), _) => Painted(Style::Tag, value_list(tags, max, false)),
        (ElementValue::Bytes, _) => Painted(
            Style::Number,
            value_list(element.raw().iter().map(|b| format!("{:02X}", b)), max, false),
        ),
        _ => {
            let text = render_value(element).replace('\\', ", ");
            Painted(Style::Number, truncate(text, max))
        }
    }
}

/// Replace control characters with visible symbols.
fn visible(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' => '␊',
            '\r' => '␍',
            '\0' => '␀',
            c if c.is_control() => '�',
            c => c,
        })
        .collect()
}

/// Join values into `a, b, c`, bracketed when there is more than one,
/// and cut to `max` characters.
fn value_list<I>(values: I, max: Option<u32>, quoted: bool) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    // every value takes at least one character
    let take = max.map_or(usize::MAX, |max| max as usize);
    let pieces: Vec<String> = values
        .into_iter()
        .take(take)
        .map(|value| {
            let value = visible(&value.to_string());
            if quoted {
                format!("\"{}\"", value.replace('"', "\\\""))
            } else {
                value
            }
        })
        .collect();
    let joined = pieces.join(", ");
    let out = if pieces.len() > 1 {
        format!("[{}]", joined)
    } else {
        joined
    };
    truncate(out, max)
}

/// Cut `text` to `max` characters, the last three being an ellipsis.
fn truncate(text: String, max: Option<u32>) -> String {
    let Some(max) = max else {
        return text;
    };
    let keep = max.saturating_sub(3) as usize;
    match text.char_indices().nth(keep) {
        Some((at, _)) => format!("{}...", &text[..at]),
        None => text,
    }
}

fn determine_width(user_width: Option<u32>) -> u32 {
    user_width
        .or_else(|| terminal_size::terminal_size().map(|(width, _)| u32::from(width.0)))
        .unwrap_or(FALLBACK_WIDTH)
}
