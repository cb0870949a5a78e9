use cpdrkit::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

const EXPECTED_CSV: &str = "\
Item,respondent_nation,complainant_nation,case_status,year_claim_initiated,year_claim_resolved,means_of_resolution,respondent_type,complainant_type,respondent_nation_economy,complainant_nation_economy,provenience_nation
Parthenon Marbles,United Kingdom,Greece,Unresolved,1983,,,Museum,,,,
Quedlinburg Treasures,United States,Germany,Object(s) relinquished,1990,1996,\"Negotiation, Settlement\",,,,,\"Germany, France\"
";

#[test]
fn test_extract_published_cases() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("cpdr_published_cases.csv");

    let report = convert_wxr_to_csv(fixture("sample_export.xml"), dest.clone()).unwrap();

    assert_eq!(report.destination, dest);
    assert_eq!(report.items_scanned, 5);
    assert_eq!(report.rows_written, 2);
    assert_eq!(report.rejected_post_type, 2);
    assert_eq!(report.rejected_status, 1);
    assert_eq!(fs::read_to_string(&dest).unwrap(), EXPECTED_CSV);
}

#[test]
fn test_every_row_has_schema_width() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("cases.csv");
    convert_wxr_to_csv(fixture("sample_export.xml"), dest.clone()).unwrap();

    let mut reader = csv::Reader::from_path(&dest).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, Schema::cpdr().columns());

    for record in reader.records() {
        assert_eq!(record.unwrap().len(), 12);
    }
}

#[test]
fn test_no_matching_items_writes_nothing() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("cases.csv");
    let options = ExtractOptions {
        post_type: "exhibition".to_string(),
        ..ExtractOptions::default()
    };

    let err = convert_wxr_to_csv_with_options(fixture("sample_export.xml"), dest.clone(), &options)
        .unwrap_err();

    assert!(err.is_warning());
    assert!(matches!(err, Error::NoMatchingItems { .. }));
    assert!(!dest.exists());
}

#[test]
fn test_missing_source_writes_nothing() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("missing.xml");
    let dest = dir.path().join("cases.csv");

    let err = convert_wxr_to_csv(source, dest.clone()).unwrap_err();

    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(!dest.exists());
}

#[test]
fn test_malformed_source_writes_nothing() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("broken.xml");
    let dest = dir.path().join("cases.csv");
    fs::write(
        &source,
        "<rss xmlns:wp=\"http://wordpress.org/export/1.2/\"><channel><item><title>x</item></channel></rss>",
    )
    .unwrap();

    let err = convert_wxr_to_csv(source, dest.clone()).unwrap_err();

    assert!(!err.is_warning());
    assert!(!dest.exists());
}

#[test]
fn test_content_outside_root_writes_nothing() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("cases.csv");
    let export = fs::read_to_string(fixture("sample_export.xml")).unwrap();

    for (name, content) in [
        ("trailing.xml", format!("{export}junk after root")),
        ("leading.xml", format!("junk{export}")),
    ] {
        let source = dir.path().join(name);
        fs::write(&source, content).unwrap();

        let err = convert_wxr_to_csv(source, dest.clone()).unwrap_err();

        assert!(matches!(err, Error::MalformedXml { .. }), "{name}: {err}");
        assert!(!dest.exists());
    }
}

#[test]
fn test_unbound_prefix_writes_nothing() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("no_wp_namespace.xml");
    let dest = dir.path().join("cases.csv");
    fs::write(
        &source,
        "<rss><channel><item><title>Parthenon Marbles</title>\
         <wp:post_type>cpdr</wp:post_type><wp:status>publish</wp:status>\
         </item></channel></rss>",
    )
    .unwrap();

    let err = convert_wxr_to_csv(source, dest.clone()).unwrap_err();

    assert!(!err.is_warning());
    assert!(matches!(err, Error::MalformedXml { .. }));
    assert!(!dest.exists());
}

#[test]
fn test_unwritable_destination() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("no_such_dir").join("cases.csv");

    let err = convert_wxr_to_csv(fixture("sample_export.xml"), dest).unwrap_err();

    assert!(matches!(err, Error::WriteFailed { .. }));
}

#[test]
fn test_custom_columns() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("years.csv");
    let options = ExtractOptions {
        columns: vec![
            "Item".to_string(),
            "year_claim_resolved".to_string(),
            "edit_last".to_string(),
        ],
        ..ExtractOptions::default()
    };

    convert_wxr_to_csv_with_options(fixture("sample_export.xml"), dest.clone(), &options).unwrap();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "Item,year_claim_resolved,edit_last\nParthenon Marbles,,\nQuedlinburg Treasures,1996,\n"
    );
}

#[test]
fn test_extract_then_embed_round_trip() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("cases.csv");
    convert_wxr_to_csv(fixture("sample_export.xml"), dest.clone()).unwrap();

    let csv_bytes = fs::read_to_string(&dest).unwrap();
    let snippet = embed_csv_file(&dest, &EmbedOptions::default()).unwrap();

    let start = snippet.find("const csvData = `").unwrap() + "const csvData = `".len();
    let end = snippet.rfind("`;").unwrap();
    assert_eq!(&snippet[start..end], csv_bytes);
}

#[test]
fn test_embed_keeps_backticks_and_crlf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("odd.csv");
    fs::write(&path, "Item\r\nThe `Ghent` Altarpiece\r\n").unwrap();

    let snippet = embed_csv_file(&path, &EmbedOptions::default()).unwrap();

    assert!(snippet.contains("const csvData = `Item\r\nThe `Ghent` Altarpiece\r\n`;\n"));
}

#[test]
fn test_embed_missing_file() {
    let dir = tempdir().unwrap();
    let err = embed_csv_file(dir.path().join("nope.csv"), &EmbedOptions::default()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_inspect_fixture() {
    let summary = summarize_file(fixture("sample_export.xml"), &ExtractOptions::default()).unwrap();

    assert_eq!(summary.total_items, 5);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.groups[0].post_type, "cpdr");
    assert_eq!(summary.groups[0].status, "publish");
    assert_eq!(summary.groups[0].count, 2);
}

#[test]
fn test_config_file_drives_extraction() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("cpdrkit.toml");
    fs::write(
        &config_path,
        "[extract]\nstatus = \"draft\"\ncolumns = [\"Item\", \"respondent_nation\"]\n",
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let dest = dir.path().join("drafts.csv");
    convert_wxr_to_csv_with_options(fixture("sample_export.xml"), dest.clone(), &config.extract)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "Item,respondent_nation\nDraft: Benin Bronzes,United Kingdom\n"
    );
}
