//! Human-readable timestamps for feed entries.
//!
//! Client-side (hydrate): `Date.toLocaleString()` in the user's locale.
//! Native: UTC rendering via the `time` crate so output is deterministic.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Label shown for timestamps that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Render `raw` for display.
pub fn format_timestamp(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let date = js_sys::Date::new(&JsValue::from_str(raw));
        String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        native::format(raw).unwrap_or_else(|| INVALID_DATE.to_owned())
    }
}

#[cfg(not(feature = "hydrate"))]
mod native {
    use std::borrow::Cow;

    use ::time::format_description::well_known::Rfc3339;
    use ::time::macros::format_description;
    use ::time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

    pub(super) fn format(raw: &str) -> Option<String> {
        let raw = raw.trim();
        let utc = parse(raw)?.to_offset(UtcOffset::UTC);
        let rendered = utc
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
            .ok()?;
        Some(format!("{rendered} UTC"))
    }

    // Offset-less values are read as UTC. A space may stand in for the `T`.
    fn parse(raw: &str) -> Option<OffsetDateTime> {
        let raw = with_t_separator(raw);
        if let Ok(at) = OffsetDateTime::parse(&raw, &Rfc3339) {
            return Some(at);
        }
        let naive = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        );
        if let Ok(at) = PrimitiveDateTime::parse(&raw, naive) {
            return Some(at.assume_utc());
        }
        Date::parse(&raw, format_description!("[year]-[month]-[day]"))
            .ok()
            .map(|day| day.midnight().assume_utc())
    }

    fn with_t_separator(raw: &str) -> Cow<'_, str> {
        match raw.split_once(' ') {
            Some((day, rest)) if day.len() == 10 => Cow::Owned(format!("{day}T{rest}")),
            _ => Cow::Borrowed(raw),
        }
    }
}
