//! CSV utilities for lead export. Uses the `csv` crate for safe serialization.
//!
//! Layout: unquoted header, every data field wrapped in double quotes,
//! rows joined by `\n` with no trailing newline.

use crate::domain::BusinessContact;
use serde::Deserialize;

/// Header row, in column order.
pub const CSV_HEADERS: [&str; 6] = [
    "Business Name",
    "Website",
    "Phone",
    "Email",
    "Address",
    "Description",
];

/// How quote characters inside field values are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// RFC 4180: embedded `"` is doubled, so commas and quotes stay inside one field.
    #[default]
    Standard,
    /// Wrap in quotes with no escaping. Byte-compatible with older exports,
    /// but a value containing `"` corrupts the row.
    Verbatim,
}

/// Convert contacts to CSV text.
///
/// # Arguments
/// * `contacts` - Leads in display order
/// * `quoting` - Escaping mode for field values
///
/// # Returns
/// CSV string with header row, or error if serialization fails.
pub fn contacts_to_csv(
    contacts: &[BusinessContact],
    quoting: CsvQuoting,
) -> Result<String, csv::Error> {
    let mut lines = Vec::with_capacity(contacts.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for contact in contacts {
        let fields = contact_fields(contact);
        let row = match quoting {
            CsvQuoting::Standard => format_quoted_row(&fields)?,
            CsvQuoting::Verbatim => fields
                .iter()
                .map(|f| format!("\"{}\"", f))
                .collect::<Vec<_>>()
                .join(","),
        };
        lines.push(row);
    }

    Ok(lines.join("\n"))
}

/// File name for an export: `leads_<niche>_<location>.csv`.
///
/// Whitespace runs become `_`. Path separators and other characters that are not
/// legal in a file name also become `_`, so the result never leaves the export dir.
pub fn export_file_name(niche: &str, location: &str) -> String {
    format!(
        "leads_{}_{}.csv",
        file_name_part(niche),
        file_name_part(location)
    )
}

/// Characters rejected in file names on at least one common platform.
const RESERVED_FILE_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

fn file_name_part(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_gap = false;
    for ch in value.chars() {
        if ch.is_whitespace() || ch.is_control() || RESERVED_FILE_NAME_CHARS.contains(&ch) {
            if !in_gap {
                out.push('_');
                in_gap = true;
            }
        } else {
            out.push(ch);
            in_gap = false;
        }
    }
    out
}

fn contact_fields(contact: &BusinessContact) -> [&str; 6] {
    [
        contact.name.as_str(),
        contact.website.as_str(),
        contact.phone.as_deref().unwrap_or(""),
        contact.email.as_deref().unwrap_or(""),
        contact.address.as_deref().unwrap_or(""),
        contact.description.as_str(),
    ]
}

fn format_quoted_row(fields: &[&str; 6]) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(fields)?;
    wtr.flush()?;

    let bytes = wtr.into_inner().map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    let mut row = String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })?;
    if row.ends_with('\n') {
        row.pop();
    }
    Ok(row)
}
