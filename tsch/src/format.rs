//! Format tags for strings and arrays, and the checks behind them.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Hex color with optional leading `#`, three to six digits.
static COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#?[0-9a-f]{3,6}$").expect("color pattern is valid"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("url pattern is valid")
});

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Presentation/validation hint attached to a string descriptor.
///
/// `Password` and `Textarea` only affect the emitted document; the other tags
/// are also checked during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFormat {
    Color,
    Date,
    Email,
    Password,
    Textarea,
    Url,
}

impl StringFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringFormat::Color => "color",
            StringFormat::Date => "date",
            StringFormat::Email => "email",
            StringFormat::Password => "password",
            StringFormat::Textarea => "textarea",
            StringFormat::Url => "url",
        }
    }

    /// Whether `value` satisfies this format.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            StringFormat::Color => COLOR_REGEX.is_match(value),
            StringFormat::Date => is_calendar_date(value),
            StringFormat::Email => EMAIL_REGEX.is_match(value),
            StringFormat::Url => URL_REGEX.is_match(value),
            StringFormat::Password | StringFormat::Textarea => true,
        }
    }

    /// Message reported when [`accepts`](Self::accepts) fails.
    pub fn error_message(&self) -> &'static str {
        match self {
            StringFormat::Color => "Value has to be a valid color.",
            StringFormat::Date => "Value has to be a valid date.",
            StringFormat::Email => "Value has to be a valid email address.",
            StringFormat::Url => "Value has to be a valid url.",
            StringFormat::Password | StringFormat::Textarea => "",
        }
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation hint attached to an array descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayFormat {
    Table,
}

impl ArrayFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrayFormat::Table => "table",
        }
    }
}

impl fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_calendar_date(value: &str) -> bool {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
        || DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(value, format).is_ok())
        || DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_rfc2822(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_accepts_short_and_long_hex() {
        for value in ["#fff", "fff", "#00ff00", "#FFA500", "abcd"] {
            assert!(StringFormat::Color.accepts(value), "{value}");
        }
    }

    #[test]
    fn test_color_rejects_non_hex() {
        for value in ["#ff", "#1234567", "red", "#ggg", ""] {
            assert!(!StringFormat::Color.accepts(value), "{value}");
        }
    }

    #[test]
    fn test_date_accepts_common_layouts() {
        for value in [
            "2022-12-22",
            "2022/12/22",
            "12/22/2022",
            "2022-12-22T10:30:00",
            "2022-12-22T10:30:00Z",
            "2022-12-22T10:30:00.123+02:00",
            "Thu, 22 Dec 2022 10:30:00 +0000",
        ] {
            assert!(StringFormat::Date.accepts(value), "{value}");
        }
    }

    #[test]
    fn test_date_rejects_impossible_dates() {
        for value in ["2022-13-01", "2022-02-30", "yesterday", ""] {
            assert!(!StringFormat::Date.accepts(value), "{value}");
        }
    }

    #[test]
    fn test_email() {
        assert!(StringFormat::Email.accepts("jeremy@example.com"));
        assert!(StringFormat::Email.accepts("first.last@mail.example.org"));
        assert!(!StringFormat::Email.accepts("jeremy@"));
        assert!(!StringFormat::Email.accepts("no-at-sign.com"));
        assert!(!StringFormat::Email.accepts("a@b"));
    }

    #[test]
    fn test_url() {
        assert!(StringFormat::Url.accepts("https://example.com"));
        assert!(StringFormat::Url.accepts("http://www.example.com/path?q=1"));
        assert!(!StringFormat::Url.accepts("ftp://example.com"));
        assert!(!StringFormat::Url.accepts("example.com"));
    }

    #[test]
    fn test_presentation_formats_accept_anything() {
        assert!(StringFormat::Password.accepts(""));
        assert!(StringFormat::Textarea.accepts("multi\nline"));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(StringFormat::Textarea.to_string(), "textarea");
        assert_eq!(ArrayFormat::Table.as_str(), "table");
    }
}
