use super::*;

use crate::model::record::{Dataset, Record};

#[test]
fn test_parse_run_without_selection() {
    let cli = Cli::try_parse_from([
        "kira-marketrisk",
        "run",
        "--reference",
        "ref.tsv",
        "--target",
        "target.tsv",
        "--out",
        "out",
    ])
    .unwrap();
    match cli.command {
        Command::Run {
            reference,
            district,
            market,
            ..
        } => {
            assert_eq!(reference, PathBuf::from("ref.tsv"));
            assert!(selection_from(district, market).is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_run_with_selection() {
    let cli = Cli::try_parse_from([
        "kira-marketrisk",
        "--verbose",
        "run",
        "--reference",
        "ref.tsv",
        "--target",
        "target.tsv",
        "--out",
        "out",
        "--district",
        "Gangnam",
        "--market",
        "Cafe",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Run {
            district, market, ..
        } => {
            let sel = selection_from(district, market).unwrap();
            assert_eq!(sel.district, "Gangnam");
            assert_eq!(sel.market, "Cafe");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_district_requires_market() {
    let res = Cli::try_parse_from([
        "kira-marketrisk",
        "run",
        "--reference",
        "ref.tsv",
        "--target",
        "target.tsv",
        "--out",
        "out",
        "--district",
        "Gangnam",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_parse_lookup_requires_keys() {
    let res = Cli::try_parse_from([
        "kira-marketrisk",
        "lookup",
        "--reference",
        "ref.tsv",
        "--target",
        "target.tsv",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_list_markets() {
    let ds = Dataset::new(
        DatasetRole::Target,
        vec![
            Record::new("Mapo", "Cafe", vec![]),
            Record::new("Gangnam", "Cafe", vec![]),
            Record::new("Gangnam", "Bakery", vec![]),
        ],
    );
    let index = MarketIndex::build(&ds);
    assert_eq!(list_markets(&index, None), vec!["Gangnam", "Mapo"]);
    assert_eq!(list_markets(&index, Some("Gangnam")), vec!["Bakery", "Cafe"]);
    assert!(list_markets(&index, Some("Nowhere")).is_empty());
}

#[test]
fn test_missing_reference_file_is_input_error() {
    let dir = std::env::temp_dir().join(format!("kira_marketrisk_main_{}", std::process::id()));
    let err = score_inputs(&dir.join("missing.tsv"), &dir.join("also_missing.tsv")).unwrap_err();
    assert!(matches!(err, AppError::Input(InputError::MissingInput(_))));
}
