mod common;

use std::collections::BTreeSet;

use jsonpatch_util::deep_equal;

use common::fixtures::load_cases;

#[test]
fn fixture_cases_replay() {
    let cases = load_cases("cases.json");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        assert!(
            case.expected.is_some() != case.error.is_some(),
            "{}: exactly one of expected/error must be set",
            case.comment
        );
        let mut doc = case.doc.clone();
        let result = case.patch_engine().apply_in_place(&mut doc, &case.patch);
        match (&case.expected, result) {
            (Some(expected), Ok(())) => {
                if !deep_equal(expected, &doc) {
                    failures.push(format!("{}: expected {expected}, got {doc}", case.comment));
                }
            }
            (Some(_), Err(err)) => {
                failures.push(format!("{}: unexpected error: {err}", case.comment));
            }
            (None, Ok(())) => {
                failures.push(format!("{}: expected an error, got {doc}", case.comment));
            }
            (None, Err(err)) => {
                let kind = format!("{:?}", err.kind());
                if let Some(want) = &case.kind {
                    if *want != kind {
                        failures.push(format!(
                            "{}: expected {want} error, got {kind}: {err}",
                            case.comment
                        ));
                    }
                }
            }
        }
    }
    assert!(failures.is_empty(), "{} failing cases:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn fixture_comments_are_unique() {
    let cases = load_cases("cases.json");
    let mut seen = BTreeSet::new();
    for case in &cases {
        assert!(seen.insert(case.comment.as_str()), "duplicate case {:?}", case.comment);
    }
}

#[test]
fn check_failures_leave_the_document_untouched() {
    for case in load_cases("cases.json") {
        let patch = case.patch_engine();
        if patch.check(&case.patch).is_ok() {
            continue;
        }
        let mut doc = case.doc.clone();
        assert!(patch.apply_in_place(&mut doc, &case.patch).is_err());
        assert_eq!(doc, case.doc, "{}", case.comment);
    }
}
