//! End-to-end: downloaded document through extraction to the derived
//! command sequence.

use tempfile::TempDir;

use retractor_load::{WIPE_COMMAND, commands_from_records};

const DOCUMENT: &str = r#"<?xml version="1.0"?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
      <PMID Version="1">111111</PMID>
      <DateCompleted>
        <Year>2011</Year>
        <Month>11</Month>
        <Day>11</Day>
      </DateCompleted>
      <Article PubModel="Print">
        <Journal>
          <ISSN IssnType="Print">0</ISSN>
          <Title>Journal of Testing</Title>
        </Journal>
        <ArticleTitle>A retracted article.</ArticleTitle>
        <AuthorList CompleteYN="Y">
          <Author ValidYN="Y">
            <LastName>last_name</LastName>
            <ForeName>fore_name</ForeName>
          </Author>
        </AuthorList>
      </Article>
      <MedlineJournalInfo>
        <Country>Australia</Country>
      </MedlineJournalInfo>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

#[test]
fn document_to_commands() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("111111.xml"), DOCUMENT).unwrap();

    let records = retractor_extract::run(temp_dir.path()).unwrap();
    let commands = commands_from_records(&records);

    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0], WIPE_COMMAND);

    let cmd = &commands[1];
    assert!(cmd.contains("MERGE (article:Article {title:'111111'})"));
    assert!(cmd.contains("SET article.ISSN = '0'"));
    assert!(cmd.contains("MERGE (author0:Author {name:'fore_name last_name'})"));
    assert!(cmd.contains("MERGE (country:Country {name:'Australia'})"));
    assert!(cmd.contains("MERGE (month:Month {name:'November'})"));
    assert!(cmd.contains("MERGE (year:Year {name:'2011'})"));
}

#[test]
fn empty_records_load_as_a_bare_wipe() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("empty.xml"),
        "<PubmedArticleSet></PubmedArticleSet>",
    )
    .unwrap();

    let records = retractor_extract::run(temp_dir.path()).unwrap();
    assert_eq!(records.len(), 1);

    let commands = commands_from_records(&records);
    assert_eq!(commands, vec![WIPE_COMMAND.to_string()]);
}
