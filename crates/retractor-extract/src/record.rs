//! Normalized article record
//!
//! One record per source document. Field names in the serialized form are
//! fixed by the downstream loader: `pmid`, `Author`, `pubDate`,
//! `reviseDate`, `ISSN`, `country`, `Topic`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use retractor_core::sanitize;

/// Extracted metadata for one article.
///
/// Optional fields are omitted from the JSON entirely when absent. A record
/// is constructed once per document, sanitized, and never mutated again.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleRecord {
    /// External identifier; present iff the document had a citation block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmid: Option<String>,

    /// Author display names, in document order
    #[serde(rename = "Author")]
    pub authors: Vec<String>,

    /// Completion date (`DateCompleted`)
    #[serde(rename = "pubDate", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateEntry>,

    /// Most recent revision date (`DateRevised`)
    #[serde(rename = "reviseDate", skip_serializing_if = "Option::is_none")]
    pub revise_date: Option<DateEntry>,

    #[serde(rename = "ISSN", skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// MeSH descriptor names; absent when the document has no heading list
    #[serde(rename = "Topic", skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

/// A calendar date plus which precision levels the source actually carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    pub date: NaiveDate,
    pub components: DateComponents,
}

/// Which of Year/Month/Day were present before padding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateComponents {
    pub year: bool,
    pub month: bool,
    pub day: bool,
}

impl ArticleRecord {
    /// True when not a single field was recognized in the source document.
    pub fn is_empty(&self) -> bool {
        self.pmid.is_none()
            && self.authors.is_empty()
            && self.pub_date.is_none()
            && self.revise_date.is_none()
            && self.issn.is_none()
            && self.country.is_none()
            && self.topics.as_ref().map_or(true, |t| t.is_empty())
    }

    /// Sanitize every string field, recursively across sequences.
    pub fn sanitized(self) -> Self {
        Self {
            pmid: self.pmid.as_deref().map(sanitize),
            authors: self.authors.iter().map(|a| sanitize(a)).collect(),
            pub_date: self.pub_date,
            revise_date: self.revise_date,
            issn: self.issn.as_deref().map(sanitize),
            country: self.country.as_deref().map(sanitize),
            topics: self
                .topics
                .map(|topics| topics.iter().map(|t| sanitize(t)).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_record_is_empty() {
        assert!(ArticleRecord::default().is_empty());
    }

    #[test]
    fn record_with_pmid_not_empty() {
        let record = ArticleRecord {
            pmid: Some("111111".to_string()),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn record_with_empty_topic_list_is_empty() {
        let record = ArticleRecord {
            topics: Some(Vec::new()),
            ..Default::default()
        };
        assert!(record.is_empty());
    }

    #[test]
    fn serialized_field_names() {
        let record = ArticleRecord {
            pmid: Some("111111".to_string()),
            authors: vec!["fore_name last_name".to_string()],
            pub_date: Some(DateEntry {
                date: date(2011, 11, 11),
                components: DateComponents {
                    year: true,
                    month: true,
                    day: true,
                },
            }),
            revise_date: None,
            issn: Some("0".to_string()),
            country: Some("Australia".to_string()),
            topics: Some(vec!["Fraud".to_string()]),
        };

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["pmid"], "111111");
        assert_eq!(json["Author"][0], "fore_name last_name");
        assert_eq!(json["pubDate"]["date"], "2011-11-11");
        assert_eq!(json["pubDate"]["components"]["year"], true);
        assert_eq!(json["ISSN"], "0");
        assert_eq!(json["country"], "Australia");
        assert_eq!(json["Topic"][0], "Fraud");
        // absent optionals are omitted, not null
        assert!(json.get("reviseDate").is_none());
    }

    #[test]
    fn absent_fields_omitted() {
        let json = serde_json::to_string(&ArticleRecord::default()).unwrap();
        assert_eq!(json, r#"{"Author":[]}"#);
    }

    #[test]
    fn roundtrip_deserialize() {
        let record = ArticleRecord {
            pmid: Some("1".to_string()),
            authors: vec!["A B".to_string()],
            issn: Some("1234-5678".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ArticleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn sanitized_covers_nested_sequences() {
        let record = ArticleRecord {
            pmid: Some(" 111111\\n".to_string()),
            authors: vec!["  fore\\tname ".to_string()],
            country: Some("Aus\ntralia".to_string()),
            topics: Some(vec![" Fraud\\r ".to_string()]),
            ..Default::default()
        };

        let clean = record.sanitized();
        assert_eq!(clean.pmid.as_deref(), Some("111111"));
        assert_eq!(clean.authors, vec!["forename"]);
        assert_eq!(clean.country.as_deref(), Some("Australia"));
        assert_eq!(clean.topics, Some(vec!["Fraud".to_string()]));
    }

    #[test]
    fn sanitized_idempotent() {
        let record = ArticleRecord {
            pmid: Some(" 1\\t1 ".to_string()),
            ..Default::default()
        };
        let once = record.sanitized();
        let twice = once.clone().sanitized();
        assert_eq!(once, twice);
    }
}
