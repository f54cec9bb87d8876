//! Concrete end-to-end scenarios, exercised directly against the engine
//! crate's primitives (index + rankers + deduper), without the facade.

use kwsearch_core::Status;
use kwsearch_engine::{find_top_documents, parse_query, remove_duplicates, SearchIndex, StopWords};

fn actual(_id: i64, status: Status, _rating: i32) -> bool {
    status == Status::Actual
}

#[test]
fn s1_stop_words_exclude_matches() {
    let sw = StopWords::from_str("in the").unwrap();
    let mut idx = SearchIndex::new();
    idx.add_document(42, "cat in the city", Status::Actual, &[1, 2, 3], &sw).unwrap();

    let q = parse_query("in", &sw).unwrap();
    assert!(find_top_documents(&idx, &q, actual).is_empty());
}

#[test]
fn s2_status_filter() {
    let sw = StopWords::default();
    let mut idx = SearchIndex::new();
    idx.add_document(12, "one red shoe found under a shelf", Status::Actual, &[1, 2, 3], &sw).unwrap();
    idx.add_document(15, "green hat found on the table", Status::Banned, &[3, 3, 5], &sw).unwrap();

    let q = parse_query("found", &sw).unwrap();
    assert_eq!(find_top_documents(&idx, &q, actual).iter().map(|d| d.id).collect::<Vec<_>>(), vec![12]);
    assert_eq!(
        find_top_documents(&idx, &q, |_, s, _| s == Status::Banned).iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![15]
    );

    let chair = parse_query("chair", &sw).unwrap();
    assert!(find_top_documents(&idx, &chair, actual).is_empty());
}

#[test]
fn s3_minus_words() {
    let sw = StopWords::default();
    let mut idx = SearchIndex::new();
    idx.add_document(12, "one red shoe found under a shelf", Status::Actual, &[1, 2, 3], &sw).unwrap();
    idx.add_document(15, "green hat found on the table", Status::Actual, &[3, 3, 5], &sw).unwrap();

    let q = parse_query("found -hat", &sw).unwrap();
    assert_eq!(find_top_documents(&idx, &q, actual).iter().map(|d| d.id).collect::<Vec<_>>(), vec![12]);

    let q = parse_query("found -shoe", &sw).unwrap();
    assert_eq!(find_top_documents(&idx, &q, actual).iter().map(|d| d.id).collect::<Vec<_>>(), vec![15]);

    let q = parse_query("-found shoe hat", &sw).unwrap();
    assert!(find_top_documents(&idx, &q, actual).is_empty());
}

#[test]
fn s4_relevance_values() {
    let sw = StopWords::default();
    let mut idx = SearchIndex::new();
    idx.add_document(12, "one red shoe found under a shelf near the table", Status::Actual, &[1, 2, 3], &sw)
        .unwrap();
    idx.add_document(15, "green hat found on the table", Status::Actual, &[3, 3, 5], &sw).unwrap();
    idx.add_document(18, "orange cat lost in the forest", Status::Actual, &[0], &sw).unwrap();

    let q = parse_query("found", &sw).unwrap();
    let results = find_top_documents(&idx, &q, actual);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, 12);
    assert!((results[0].relevance - 0.067_577_5).abs() < 1e-6);
    assert_eq!(results[1].id, 15);
    assert!((results[1].relevance - 0.040_546_5).abs() < 1e-6);
}

#[test]
fn s5_rating_truncation() {
    let cases: &[(&[i32], i32)] = &[
        (&[1, 3, 4], 2),
        (&[5, 2, 8], 5),
        (&[11, 0, 2], 4),
        (&[33, 10, 14], 19),
        (&[-33, -10, -14], -19),
        (&[-1, -1, -3], -1),
        (&[-5, 5, 1], 0),
        (&[-5, -4, 3], -2),
    ];
    let sw = StopWords::default();
    for (i, (ratings, expected)) in cases.iter().enumerate() {
        let mut idx = SearchIndex::new();
        idx.add_document(i as i64, "word", Status::Actual, ratings, &sw).unwrap();
        assert_eq!(idx.metadata(i as i64).unwrap().rating, *expected, "ratings = {ratings:?}");
    }
}

#[test]
fn s6_dedup_reports_removed_id_to_stdout_style_sink() {
    let sw = StopWords::default();
    let mut idx = SearchIndex::new();
    idx.add_document(1, "funny pet cat", Status::Actual, &[], &sw).unwrap();
    idx.add_document(2, "funny pet cat", Status::Actual, &[], &sw).unwrap();

    let mut sink = Vec::new();
    let removed = remove_duplicates(&mut idx, &mut sink).unwrap();
    assert_eq!(removed, vec![2]);
    assert_eq!(String::from_utf8(sink).unwrap(), "Found duplicate document id 2\n");
}
