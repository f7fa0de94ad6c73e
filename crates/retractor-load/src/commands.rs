//! Cypher command generation
//!
//! One statement per record, built from MERGE clauses so a re-run within
//! the same load is idempotent. The load as a whole is a full replace: the
//! first command always wipes the graph. That suits the development/reset
//! workflow this importer exists for; it is not an incremental loader.

use retractor_extract::ArticleRecord;

/// Unconditional wipe of all nodes and relationships.
pub const WIPE_COMMAND: &str = "MATCH (n) DETACH DELETE n";

/// Derive the command sequence for a full load.
///
/// The wipe comes first; then one joined statement per record that has a
/// `pmid`. A record without an external identifier is not a valid graph
/// subject and contributes nothing.
pub fn commands_from_records(records: &[ArticleRecord]) -> Vec<String> {
    let mut commands = vec![WIPE_COMMAND.to_string()];
    commands.extend(records.iter().filter_map(record_command));
    commands
}

/// Build the single upsert statement for one record, or `None` without a
/// `pmid`. Clauses share the `article` binding, so they are joined into
/// one statement rather than emitted separately.
fn record_command(record: &ArticleRecord) -> Option<String> {
    let pmid = record.pmid.as_ref()?;

    let mut clauses = vec![format!(
        "MERGE (article:Article {{title:'{}'}})",
        escape(pmid)
    )];

    if let Some(issn) = &record.issn {
        clauses.push(format!("SET article.ISSN = '{}'", escape(issn)));
    }

    for (i, author) in record.authors.iter().enumerate() {
        clauses.push(format!(
            "MERGE (author{i}:Author {{name:'{}'}}) \
             MERGE (article)-[:AUTHORED_BY]->(author{i})",
            escape(author)
        ));
    }

    if let Some(country) = &record.country {
        clauses.push(format!(
            "MERGE (country:Country {{name:'{}'}}) \
             MERGE (article)-[:ORIGINATED_IN]->(country)",
            escape(country)
        ));
    }

    if let Some(entry) = &record.pub_date {
        let month = entry.date.format("%B").to_string();
        let year = entry.date.format("%Y").to_string();
        clauses.push(format!(
            "MERGE (month:Month {{name:'{month}'}}) \
             MERGE (article)-[:PUBLISHED_IN]->(month)"
        ));
        clauses.push(format!(
            "MERGE (year:Year {{name:'{year}'}}) \
             MERGE (article)-[:PUBLISHED_IN]->(year)"
        ));
    }

    if let Some(topics) = &record.topics {
        for (i, topic) in topics.iter().enumerate() {
            clauses.push(format!(
                "MERGE (topic{i}:Topic {{name:'{}'}}) \
                 MERGE (article)-[:ABOUT]->(topic{i})",
                escape(topic)
            ));
        }
    }

    Some(clauses.join(" "))
}

/// Escape a value for inclusion in a single-quoted Cypher string literal.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
