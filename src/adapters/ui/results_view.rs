//! Result renderer. Pure: SearchView in, lines of text out.
//!
//! Rows are positional; the only identity a lead has on screen is its index.

use crate::domain::{BusinessContact, SearchView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Characters of the address shown before eliding.
const ADDRESS_PREVIEW_CHARS: usize = 25;
const NAME_WIDTH: usize = 28;
const CONTACT_WIDTH: usize = 30;
const WEBSITE_WIDTH: usize = 32;
const DESCRIPTION_WIDTH: usize = 48;
const NOT_AVAILABLE: &str = "N/A";

pub const EMPTY_TITLE: &str = "No results found";
pub const EMPTY_HINT: &str = "Try broadening your location or changing your niche keywords.";
pub const LOADING_TEXT: &str = "Scraping...";

/// One table row, already reduced to display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRow {
    pub initial: String,
    pub name: String,
    pub address_preview: Option<String>,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub description: String,
}

impl LeadRow {
    pub fn from_contact(contact: &BusinessContact) -> Self {
        Self {
            initial: contact.name.chars().next().map(String::from).unwrap_or_default(),
            name: contact.name.clone(),
            address_preview: contact
                .address
                .as_deref()
                .filter(|a| !a.is_empty())
                .map(address_preview),
            email: or_not_available(contact.email.as_deref()),
            phone: or_not_available(contact.phone.as_deref()),
            website: contact.website.clone(),
            description: contact.description.clone(),
        }
    }
}

/// What the screen shows for a view. Blank renders nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Nothing,
    Loading(String),
    Error(String),
    Empty { title: String, hint: String },
    Table { title: String, lines: Vec<String> },
}

pub fn render(view: SearchView<'_>) -> Rendered {
    match view {
        SearchView::Blank => Rendered::Nothing,
        SearchView::Loading => Rendered::Loading(LOADING_TEXT.to_string()),
        SearchView::Error(message) => {
            Rendered::Error(format!("Error searching for leads: {}", message))
        }
        SearchView::Empty => Rendered::Empty {
            title: EMPTY_TITLE.to_string(),
            hint: EMPTY_HINT.to_string(),
        },
        SearchView::Table(data) => Rendered::Table {
            title: format!("Search Results ({} found)", data.len()),
            lines: table_lines(data),
        },
    }
}

/// Header, separator, then one line per lead.
pub fn table_lines(data: &[BusinessContact]) -> Vec<String> {
    let index_width = data.len().to_string().len();
    let mut lines = Vec::with_capacity(data.len() + 2);

    let header = format_columns(
        index_width,
        "#",
        "Business",
        "Contact Info",
        "Website",
        "Description",
    );
    lines.push(header.clone());
    lines.push("-".repeat(header.width()));

    for (i, contact) in data.iter().enumerate() {
        let row = LeadRow::from_contact(contact);
        let business = match &row.address_preview {
            Some(addr) => format!("[{}] {} @ {}", row.initial, row.name, addr),
            None => format!("[{}] {}", row.initial, row.name),
        };
        let contact_info = format!("{} / {}", row.email, row.phone);
        lines.push(format_columns(
            index_width,
            &(i + 1).to_string(),
            &business,
            &contact_info,
            &row.website,
            &row.description,
        ));
    }
    lines
}

fn format_columns(
    index_width: usize,
    index: &str,
    business: &str,
    contact: &str,
    website: &str,
    description: &str,
) -> String {
    format!(
        "{}  {}  {}  {}  {}",
        pad(index, index_width),
        pad(&truncate_to_width(business, NAME_WIDTH), NAME_WIDTH),
        pad(&truncate_to_width(contact, CONTACT_WIDTH), CONTACT_WIDTH),
        pad(&truncate_to_width(website, WEBSITE_WIDTH), WEBSITE_WIDTH),
        truncate_to_width(description, DESCRIPTION_WIDTH),
    )
    .trim_end()
    .to_string()
}

/// First 25 characters, `...` appended only when something was cut.
pub fn address_preview(address: &str) -> String {
    let mut chars = address.chars();
    let head: String = chars.by_ref().take(ADDRESS_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Cut to at most `width` display columns, ending in `…` when cut.
pub fn truncate_to_width(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(fill))
}
