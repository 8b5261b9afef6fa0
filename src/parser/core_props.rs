//! Mapping of the core properties part (`cp:coreProperties`) to metadata.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::xml::XmlElement;
use crate::model::Metadata;

/// Map the root of the core properties part to metadata.
pub fn parse_core_properties(root: &XmlElement) -> Metadata {
    let text = |name: &str| root.child(name).map(XmlElement::text);
    let timestamp = |name: &str| {
        let raw = text(name)?;
        let parsed = parse_timestamp(&raw);
        if parsed.is_none() {
            log::debug!("ignoring unparseable {} timestamp {:?}", name, raw);
        }
        parsed
    };

    Metadata {
        title: text("title"),
        subject: text("subject"),
        author: text("creator"),
        keywords: text("keywords"),
        last_modified_by: text("lastModifiedBy"),
        created: timestamp("created"),
        modified: timestamp("modified"),
    }
}

/// Parse a W3CDTF timestamp. Zone-less values are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
