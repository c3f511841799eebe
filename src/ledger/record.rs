use chrono::{NaiveDate, NaiveDateTime};
use getset::Getters;
use log::debug;

pub const DEFAULT_CURRENCY: &str = "CNY";
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Formats tried in order when normalizing a date value. Date-only shapes
/// first, then the datetime shapes spreadsheet cells commonly carry.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y年%m月%d日",
    "%m/%d/%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];

/// Single blankness rule shared by every defaulting decision.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Best-effort date parsing. Anything that fails every known format falls
/// back to the epoch date; a parse failure never propagates.
pub fn parse_date_or_default(raw: &str) -> NaiveDate {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        // NaiveDate::default() is 1970-01-01.
        return NaiveDate::default();
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date;
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return datetime.date();
        }
    }

    debug!("unparseable date {:?}, using {}", raw, NaiveDate::default());
    NaiveDate::default()
}

/// One normalized account row, ready to be formatted as an `open` directive.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct OpenRecord {
    date: NaiveDate,
    account: String,
    currency: String,
    note: String,
    category: String,
}

impl OpenRecord {
    /// Applies the defaulting rules: a blank category becomes `Unknown`, a
    /// blank currency becomes `CNY`, blank account and note become empty.
    /// Non-blank values are kept verbatim.
    pub fn new(
        open_date: &str,
        account: &str,
        currency: &str,
        display_name: &str,
        category: &str,
    ) -> OpenRecord {
        OpenRecord {
            date: parse_date_or_default(open_date),
            account: if is_blank(account) {
                String::new()
            } else {
                account.to_string()
            },
            currency: if is_blank(currency) {
                DEFAULT_CURRENCY.to_string()
            } else {
                currency.to_string()
            },
            note: if is_blank(display_name) {
                String::new()
            } else {
                display_name.to_string()
            },
            category: if is_blank(category) {
                UNKNOWN_CATEGORY.to_string()
            } else {
                category.to_string()
            },
        }
    }

    /// The `open` directive line for this record. The note is appended
    /// verbatim, unescaped.
    pub fn directive(&self) -> String {
        let mut line = format!(
            "{} open {} {}",
            self.date.format("%Y-%m-%d"),
            self.account,
            self.currency
        );

        if !self.note.is_empty() {
            line.push_str("  ; ");
            line.push_str(&self.note);
        }

        line
    }
}
