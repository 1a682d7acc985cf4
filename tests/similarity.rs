use jaccard_similarity::request::{Request, evaluate, parse_request};
use jaccard_similarity::tokens::unique_tokens;
use jaccard_similarity::{TokenSet, jaccard_similarity};

fn set(values: &[&str]) -> TokenSet {
    unique_tokens(values)
}

#[test]
fn self_similarity_is_one() {
    for values in [&[][..], &["a"][..], &["a", "b", "c"][..]] {
        let a = set(values);
        assert_eq!(jaccard_similarity(&a, &a), 1.0);
    }
}

#[test]
fn empty_against_non_empty_is_zero_both_ways() {
    let empty = set(&[]);
    let full = set(&["scholarship grants"]);
    assert_eq!(jaccard_similarity(&empty, &full), 0.0);
    assert_eq!(jaccard_similarity(&full, &empty), 0.0);
}

#[test]
fn subset_scores_by_size_ratio() {
    let small = set(&["a", "b"]);
    let large = set(&["a", "b", "c", "d"]);
    assert_eq!(jaccard_similarity(&small, &large), 0.5);
}

#[test]
fn batch_request_matches_direct_calls() {
    let input = r#"{"pairs": [
        {"set_a": ["publication", "patent", "grant", "conference"],
         "set_b": ["grant", "fellowship", "publication"]},
        {"set_a": ["accreditation"], "set_b": []}
    ]}"#;
    let request = parse_request(input).unwrap();
    let Request::Batch(pairs) = &request else {
        panic!("expected batch request");
    };
    assert_eq!(pairs.len(), 2);

    let expected: Vec<f64> = pairs
        .iter()
        .map(|pair| jaccard_similarity(&pair.set_a, &pair.set_b))
        .collect();
    let rendered = serde_json::to_value(evaluate(&request)).unwrap();
    assert_eq!(rendered["results"], serde_json::json!(expected));
    assert_eq!(expected, vec![0.4, 0.0]);
}
