//! PubMed XML document parser using quick-xml
//!
//! Streaming walk over one downloaded document. Field extraction is
//! order-independent and absence of an optional element is not an error;
//! malformed XML, a malformed author element, or an invalid date-component
//! combination fails the document (and with it the batch).

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::dates::{DateParts, build_date_entry};
use crate::error::ExtractError;
use crate::record::ArticleRecord;

fn xml_err(document: &str, error: quick_xml::Error) -> ExtractError {
    ExtractError::Xml {
        document: document.to_string(),
        error,
    }
}

/// Parse one document into a sanitized [`ArticleRecord`].
///
/// `document` is the source name used in diagnostics (normally the file
/// name). A contradictory pubDate/reviseDate pair is recovered locally:
/// both are cleared, a warning is emitted, and the record survives.
pub fn parse_document(xml: &str, document: &str) -> Result<ArticleRecord, ExtractError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut record = ArticleRecord::default();
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) if e.name().as_ref() == b"MedlineCitation" => {
                parse_citation(&mut reader, document, &mut record)?;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    // A completion date cannot postdate its most recent revision. This is a
    // contradiction in the source data, not a parse error: drop both dates,
    // keep the record.
    if let (Some(pub_date), Some(revise_date)) = (&record.pub_date, &record.revise_date) {
        if pub_date.date > revise_date.date {
            log::warn!(
                "{document}: pubDate {} is greater than reviseDate {}, discarding both",
                pub_date.date,
                revise_date.date
            );
            record.pub_date = None;
            record.revise_date = None;
        }
    }

    Ok(record.sanitized())
}

fn parse_citation(
    reader: &mut Reader<&[u8]>,
    document: &str,
    record: &mut ArticleRecord,
) -> Result<(), ExtractError> {
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) => match e.name().as_ref() {
                // Direct child only; CommentsCorrections blocks nest PMIDs
                // of *other* articles and are skipped below.
                b"PMID" => {
                    let pmid = read_text(reader, document)?;
                    if record.pmid.is_none() {
                        record.pmid = Some(pmid);
                    }
                }
                b"DateCompleted" => {
                    let entry = parse_date_container(reader, document, "DateCompleted")?;
                    if record.pub_date.is_none() {
                        record.pub_date = entry;
                    }
                }
                b"DateRevised" => {
                    let entry = parse_date_container(reader, document, "DateRevised")?;
                    if record.revise_date.is_none() {
                        record.revise_date = entry;
                    }
                }
                b"Article" => parse_article(reader, document, record)?,
                b"MedlineJournalInfo" => parse_journal_info(reader, document, record)?,
                b"MeshHeadingList" => {
                    let topics = parse_mesh_list(reader, document)?;
                    if record.topics.is_none() {
                        record.topics = Some(topics);
                    }
                }
                other => {
                    let name = other.to_vec();
                    skip_element(reader, document, &name)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"MedlineCitation" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_article(
    reader: &mut Reader<&[u8]>,
    document: &str,
    record: &mut ArticleRecord,
) -> Result<(), ExtractError> {
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"Journal" => parse_journal(reader, document, record)?,
                b"AuthorList" => parse_author_list(reader, document, record)?,
                other => {
                    let name = other.to_vec();
                    skip_element(reader, document, &name)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"Article" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_journal(
    reader: &mut Reader<&[u8]>,
    document: &str,
    record: &mut ArticleRecord,
) -> Result<(), ExtractError> {
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"ISSN" => {
                    let issn = read_text(reader, document)?;
                    if record.issn.is_none() {
                        record.issn = Some(issn);
                    }
                }
                other => {
                    let name = other.to_vec();
                    skip_element(reader, document, &name)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"Journal" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_journal_info(
    reader: &mut Reader<&[u8]>,
    document: &str,
    record: &mut ArticleRecord,
) -> Result<(), ExtractError> {
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"Country" => {
                    let country = read_text(reader, document)?;
                    if record.country.is_none() {
                        record.country = Some(country);
                    }
                }
                other => {
                    let name = other.to_vec();
                    skip_element(reader, document, &name)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"MedlineJournalInfo" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_author_list(
    reader: &mut Reader<&[u8]>,
    document: &str,
    record: &mut ArticleRecord,
) -> Result<(), ExtractError> {
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) if e.name().as_ref() == b"Author" => {
                record.authors.push(parse_author(reader, document)?);
            }
            Event::End(e) if e.name().as_ref() == b"AuthorList" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Extract the display name for one author.
///
/// A fore-name/last-name pair wins; a collective name is the fallback.
/// Neither form present means the element is structurally malformed.
fn parse_author(reader: &mut Reader<&[u8]>, document: &str) -> Result<String, ExtractError> {
    let mut fore_name = None;
    let mut last_name = None;
    let mut collective_name = None;
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"ForeName" => fore_name = Some(read_text(reader, document)?),
                b"LastName" => last_name = Some(read_text(reader, document)?),
                b"CollectiveName" => collective_name = Some(read_text(reader, document)?),
                other => {
                    let name = other.to_vec();
                    skip_element(reader, document, &name)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"Author" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    match (fore_name, last_name, collective_name) {
        (Some(fore), Some(last), _) => Ok(format!("{fore} {last}")),
        (_, _, Some(collective)) => Ok(collective),
        _ => Err(ExtractError::MalformedAuthor {
            document: document.to_string(),
        }),
    }
}

fn parse_mesh_list(
    reader: &mut Reader<&[u8]>,
    document: &str,
) -> Result<Vec<String>, ExtractError> {
    let mut topics = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"DescriptorName" => topics.push(read_text(reader, document)?),
                b"MeshHeading" => {}
                other => {
                    let name = other.to_vec();
                    skip_element(reader, document, &name)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"MeshHeadingList" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(topics)
}

/// Collect Year/Month/Day children of a date container and build the entry.
fn parse_date_container(
    reader: &mut Reader<&[u8]>,
    document: &str,
    container: &str,
) -> Result<Option<crate::record::DateEntry>, ExtractError> {
    let mut parts = DateParts::default();
    let mut buf = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"Year" => parts.year = Some(read_text(reader, document)?),
                b"Month" => parts.month = Some(read_text(reader, document)?),
                b"Day" => parts.day = Some(read_text(reader, document)?),
                other => {
                    let name = other.to_vec();
                    skip_element(reader, document, &name)?;
                }
            },
            Event::End(e) if e.name().as_ref() == container.as_bytes() => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    build_date_entry(container, &parts)
}

/// Read text content until the current element's end tag, flattening nested
/// markup like `<i>` or `<sup>`.
fn read_text(reader: &mut Reader<&[u8]>, document: &str) -> Result<String, ExtractError> {
    let mut buf = Vec::new();
    let mut text = String::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Text(e) => text.push_str(&e.unescape().map_err(|e| xml_err(document, e))?),
            Event::Start(_) => text.push_str(&read_text(reader, document)?),
            Event::End(_) => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Skip an element and everything nested inside it.
fn skip_element(
    reader: &mut Reader<&[u8]>,
    document: &str,
    end_tag: &[u8],
) -> Result<(), ExtractError> {
    let mut buf = Vec::new();
    let mut depth = 1usize;

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_err(document, e))?
        {
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() == end_tag {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
