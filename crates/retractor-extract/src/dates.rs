//! Date-shape validation and `DateEntry` construction
//!
//! A date element may legitimately carry only a year, or a year and month;
//! missing trailing components are padded with "1" when the calendar date
//! is built, and the original precision is recorded alongside. A component
//! set that is not a prefix (a day without a month, say) is corrupt data
//! and fails the document.

use chrono::NaiveDate;

use crate::error::ExtractError;
use crate::record::{DateComponents, DateEntry};

/// Raw Year/Month/Day text found inside one date container.
#[derive(Debug, Default, Clone)]
pub struct DateParts {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl DateParts {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// Enforce that the present components form one of the allowed
    /// prefixes: {}, {year}, {year, month}, {year, month, day}.
    ///
    /// The error names the container and the offending element so the
    /// operator can find the document that needs attention.
    pub fn validate_shape(&self, container: &str) -> Result<(), ExtractError> {
        let detail = match (&self.year, &self.month, &self.day) {
            (None, Some(_), None) => Some("Month present without Year"),
            (None, Some(_), Some(_)) => Some("Month and Day present without Year"),
            (None, None, Some(_)) => Some("Day present without Year and Month"),
            (Some(_), None, Some(_)) => Some("Day present without Month"),
            _ => None,
        };

        match detail {
            Some(detail) => Err(ExtractError::DateComponents {
                container: container.to_string(),
                detail: detail.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Build a [`DateEntry`] from validated parts.
///
/// Returns `Ok(None)` for an empty container. Missing month/day default to
/// "1" for date construction but are flagged `false` in `components`.
pub fn build_date_entry(
    container: &str,
    parts: &DateParts,
) -> Result<Option<DateEntry>, ExtractError> {
    parts.validate_shape(container)?;

    let year_text = match &parts.year {
        Some(year) => year,
        None => return Ok(None),
    };

    let components = DateComponents {
        year: true,
        month: parts.month.is_some(),
        day: parts.day.is_some(),
    };

    let month_text = parts.month.as_deref().unwrap_or("1");
    let day_text = parts.day.as_deref().unwrap_or("1");

    let invalid = || ExtractError::InvalidDate {
        container: container.to_string(),
        date: format!("{year_text}-{month_text}-{day_text}"),
    };

    let year: i32 = year_text.trim().parse().map_err(|_| invalid())?;
    let month = parse_month(month_text.trim()).ok_or_else(invalid)?;
    let day: u32 = day_text.trim().parse().map_err(|_| invalid())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    Ok(Some(DateEntry { date, components }))
}

/// Handle both numeric and text months ("11" and "Nov").
fn parse_month(s: &str) -> Option<u32> {
    match s.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => match s.to_lowercase().as_str() {
            "jan" => Some(1),
            "feb" => Some(2),
            "mar" => Some(3),
            "apr" => Some(4),
            "may" => Some(5),
            "jun" => Some(6),
            "jul" => Some(7),
            "aug" => Some(8),
            "sep" => Some(9),
            "oct" => Some(10),
            "nov" => Some(11),
            "dec" => Some(12),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(year: Option<&str>, month: Option<&str>, day: Option<&str>) -> DateParts {
        DateParts {
            year: year.map(String::from),
            month: month.map(String::from),
            day: day.map(String::from),
        }
    }

    #[test]
    fn year_only() {
        let entry = build_date_entry("DateCompleted", &parts(Some("2011"), None, None))
            .unwrap()
            .unwrap();
        assert_eq!(entry.date.to_string(), "2011-01-01");
        assert!(entry.components.year);
        assert!(!entry.components.month);
        assert!(!entry.components.day);
    }

    #[test]
    fn year_and_month() {
        let entry = build_date_entry("DateCompleted", &parts(Some("2011"), Some("10"), None))
            .unwrap()
            .unwrap();
        assert_eq!(entry.date.to_string(), "2011-10-01");
        assert!(entry.components.year);
        assert!(entry.components.month);
        assert!(!entry.components.day);
    }

    #[test]
    fn full_date() {
        let entry = build_date_entry("DateCompleted", &parts(Some("2011"), Some("10"), Some("2")))
            .unwrap()
            .unwrap();
        assert_eq!(entry.date.to_string(), "2011-10-02");
        assert!(entry.components.year && entry.components.month && entry.components.day);
    }

    #[test]
    fn empty_container_yields_no_entry() {
        let entry = build_date_entry("DateCompleted", &parts(None, None, None)).unwrap();
        assert!(entry.is_none());
    }

    #[test]
    fn month_name() {
        let entry = build_date_entry("DateCompleted", &parts(Some("2024"), Some("Dec"), None))
            .unwrap()
            .unwrap();
        assert_eq!(entry.date.to_string(), "2024-12-01");
    }

    #[test]
    fn rejects_all_disallowed_subsets() {
        let disallowed = [
            parts(Some("2011"), None, Some("2")), // year+day, no month
            parts(None, Some("10"), None),
            parts(None, Some("10"), Some("2")),
            parts(None, None, Some("2")),
        ];
        for p in disallowed {
            let err = build_date_entry("DateRevised", &p).unwrap_err();
            let msg = format!("{err}");
            assert!(msg.contains("DateRevised"), "missing container in: {msg}");
        }
    }

    #[test]
    fn year_day_error_names_missing_month() {
        let err = parts(Some("2011"), None, Some("2"))
            .validate_shape("DateCompleted")
            .unwrap_err();
        assert!(format!("{err}").contains("Day present without Month"));
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        let err =
            build_date_entry("DateCompleted", &parts(Some("2011"), Some("2"), Some("30")))
                .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidDate { .. }));
    }

    #[test]
    fn rejects_unparseable_year() {
        let err = build_date_entry("DateCompleted", &parts(Some("20xx"), None, None)).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidDate { .. }));
    }

    #[test]
    fn rejects_month_out_of_range() {
        let err =
            build_date_entry("DateCompleted", &parts(Some("2011"), Some("13"), None)).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidDate { .. }));
    }

    #[test]
    fn parse_month_names() {
        assert_eq!(parse_month("Jan"), Some(1));
        assert_eq!(parse_month("jun"), Some(6));
        assert_eq!(parse_month("Dec"), Some(12));
        assert_eq!(parse_month("11"), Some(11));
        assert_eq!(parse_month("Frimaire"), None);
    }
}
