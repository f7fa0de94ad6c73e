//! NCBI E-utilities API access
//!
//! URL construction and JSON response parsing for `esearch` (PMID
//! resolution) and `efetch` (article XML). Every network call goes through
//! the fixed retry budget in `retractor-core`.

use anyhow::{Context, Result};
use serde::Deserialize;

use retractor_core::{get_text, retry_fixed};

/// `esearch` response envelope.
///
/// The API reports `count` as a JSON string, not a number.
#[derive(Debug, Deserialize)]
struct EsearchResponse {
    esearchresult: EsearchResult,
}

#[derive(Debug, Deserialize)]
struct EsearchResult {
    count: String,
    #[serde(default)]
    idlist: Vec<String>,
}

/// Entry point URL for an E-utilities function.
fn eutils_endpoint(base_url: &str, function: &str) -> String {
    format!("{}{function}.fcgi", ensure_trailing_slash(base_url))
}

fn ensure_trailing_slash(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    }
}

/// URL counting articles matching a search term.
pub fn count_url(base_url: &str, term: &str) -> Result<String> {
    let url = reqwest::Url::parse_with_params(
        &eutils_endpoint(base_url, "esearch"),
        &[
            ("db", "pubmed"),
            ("term", term),
            ("retmode", "json"),
            ("rettype", "count"),
        ],
    )
    .with_context(|| format!("invalid E-utilities base URL: {base_url}"))?;
    Ok(url.into())
}

/// URL listing up to `retmax` PMIDs matching a search term.
pub fn search_url(base_url: &str, term: &str, retmax: usize) -> Result<String> {
    let url = reqwest::Url::parse_with_params(
        &eutils_endpoint(base_url, "esearch"),
        &[
            ("db", "pubmed"),
            ("term", term),
            ("retmax", retmax.to_string().as_str()),
            ("retmode", "json"),
        ],
    )
    .with_context(|| format!("invalid E-utilities base URL: {base_url}"))?;
    Ok(url.into())
}

/// URL fetching the XML document for a single article.
pub fn fetch_url(base_url: &str, pmid: &str) -> Result<String> {
    let url = reqwest::Url::parse_with_params(
        &eutils_endpoint(base_url, "efetch"),
        &[("db", "pubmed"), ("id", pmid), ("rettype", "xml")],
    )
    .with_context(|| format!("invalid E-utilities base URL: {base_url}"))?;
    Ok(url.into())
}

/// Number of articles matching `term`.
pub fn resolve_count(base_url: &str, term: &str) -> Result<usize> {
    let url = count_url(base_url, term)?;
    let body = retry_fixed("esearch count", || get_text(&url))
        .context("failed to query article count")?;
    let response = parse_esearch(&body)?;
    response
        .esearchresult
        .count
        .parse()
        .with_context(|| format!("esearch count is not a number: {}", response.esearchresult.count))
}

/// Up to `max` PMIDs matching `term`.
pub fn resolve_ids(base_url: &str, term: &str, max: usize) -> Result<Vec<String>> {
    let url = search_url(base_url, term, max)?;
    let body =
        retry_fixed("esearch ids", || get_text(&url)).context("failed to query article ids")?;
    Ok(parse_esearch(&body)?.esearchresult.idlist)
}

/// Raw XML for a single article.
pub fn fetch_article(base_url: &str, pmid: &str) -> Result<String> {
    let url = fetch_url(base_url, pmid)?;
    retry_fixed(&format!("efetch {pmid}"), || get_text(&url))
        .with_context(|| format!("failed to download article {pmid}"))
}

fn parse_esearch(body: &str) -> Result<EsearchResponse> {
    serde_json::from_str(body).context("malformed esearch response")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

    #[test]
    fn count_url_parameters() {
        let url = count_url(BASE, "Retracted Publications").unwrap();
        assert!(url.starts_with("https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi?"));
        assert!(url.contains("db=pubmed"));
        assert!(url.contains("term=Retracted+Publications"));
        assert!(url.contains("retmode=json"));
        assert!(url.contains("rettype=count"));
    }

    #[test]
    fn search_url_parameters() {
        let url = search_url(BASE, "Retracted Publications", 250).unwrap();
        assert!(url.contains("esearch.fcgi?"));
        assert!(url.contains("retmax=250"));
        assert!(url.contains("retmode=json"));
    }

    #[test]
    fn fetch_url_parameters() {
        let url = fetch_url(BASE, "111111").unwrap();
        assert!(url.contains("efetch.fcgi?"));
        assert!(url.contains("db=pubmed"));
        assert!(url.contains("id=111111"));
        assert!(url.contains("rettype=xml"));
    }

    #[test]
    fn base_url_without_trailing_slash() {
        let url = fetch_url("https://example.com/eutils", "1").unwrap();
        assert!(url.starts_with("https://example.com/eutils/efetch.fcgi?"));
    }

    #[test]
    fn invalid_base_url_rejected() {
        assert!(count_url("not a url", "term").is_err());
    }

    #[test]
    fn parse_esearch_count() {
        let body = r#"{"header":{"type":"esearch","version":"0.3"},
            "esearchresult":{"count":"14243","retmax":"0","retstart":"0","idlist":[]}}"#;
        let response = parse_esearch(body).unwrap();
        assert_eq!(response.esearchresult.count, "14243");
        assert!(response.esearchresult.idlist.is_empty());
    }

    #[test]
    fn parse_esearch_idlist() {
        let body = r#"{"esearchresult":{"count":"3","idlist":["111111","222222","333333"]}}"#;
        let response = parse_esearch(body).unwrap();
        assert_eq!(
            response.esearchresult.idlist,
            vec!["111111", "222222", "333333"]
        );
    }

    #[test]
    fn parse_esearch_invalid() {
        assert!(parse_esearch("invalid").is_err());
        assert!(parse_esearch(r#"{"unexpected":true}"#).is_err());
    }
}
