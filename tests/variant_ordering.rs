use std::cmp::Ordering;

use container_queries::ordering::{compare, Variant};

fn sorted(mut variants: Vec<Variant>) -> Vec<String> {
    variants.sort_by(compare);
    variants.into_iter().map(|v| v.value).collect()
}

#[test]
fn min_width_ascends() {
    let a = Variant::new("(min-width:100px)");
    let b = Variant::new("(min-width:200px)");
    let c = Variant::new("(min-width:300px)");
    assert_eq!(compare(&a, &b), Ordering::Less);
    assert_eq!(compare(&b, &c), Ordering::Less);
    assert_eq!(compare(&c, &a), Ordering::Greater);
    assert_eq!(compare(&b, &b), Ordering::Equal);
    assert_eq!(
        sorted(vec![c.clone(), a.clone(), b.clone()]),
        vec!["(min-width:100px)", "(min-width:200px)", "(min-width:300px)"]
    );
}

#[test]
fn shorthand_and_clause_sort_together() {
    let order = sorted(vec![
        Variant::new("48rem"),
        Variant::new("(min-width: 10rem)"),
        Variant::new("20rem"),
    ]);
    assert_eq!(order, vec!["(min-width: 10rem)", "20rem", "48rem"]);
}

#[test]
fn min_height_breaks_min_width_ties() {
    let low = Variant::new("(min-width: 100px) and (min-height: 50px)");
    let high = Variant::new("(min-width: 100px) and (min-height: 80px)");
    assert_eq!(compare(&low, &high), Ordering::Less);
}

#[test]
fn looser_maximum_comes_first() {
    let unbounded = Variant::new("(min-width: 100px)");
    let wide = Variant::new("(min-width: 100px) and (max-width: 900px)");
    let narrow = Variant::new("(min-width: 100px) and (max-width: 500px)");
    assert_eq!(
        sorted(vec![narrow.clone(), wide.clone(), unbounded.clone()]),
        vec![unbounded.value, wide.value, narrow.value]
    );
    let tall = Variant::new("(max-height: 900px)");
    let short = Variant::new("(max-height: 300px)");
    assert_eq!(compare(&tall, &short), Ordering::Less);
}

#[test]
fn raw_values_go_last() {
    let raw = Variant::new("(orientation: portrait)");
    let other_raw = Variant::new("(foo: bar)");
    let sortable = Variant::new("(min-width: 5000px)");
    assert_eq!(compare(&raw, &sortable), Ordering::Greater);
    assert_eq!(compare(&sortable, &raw), Ordering::Less);
    assert_eq!(compare(&raw, &other_raw), Ordering::Equal, "raw values are mutually unordered");
    assert_eq!(
        sorted(vec![raw.clone(), sortable.clone(), other_raw.clone(), Variant::new("1px")]),
        vec!["1px", "(min-width: 5000px)", "(orientation: portrait)", "(foo: bar)"]
    );
}

#[test]
fn unparseable_values_compare_equal() {
    let garbage = Variant::new("garbage");
    let valid = Variant::new("(min-width: 100px)");
    let raw = Variant::new("(foo: bar)");
    assert_eq!(compare(&garbage, &valid), Ordering::Equal);
    assert_eq!(compare(&valid, &garbage), Ordering::Equal);
    assert_eq!(compare(&garbage, &raw), Ordering::Equal);
    assert_eq!(compare(&Variant::new(""), &Variant::new("")), Ordering::Equal);
}

#[test]
fn empty_label_sorts_after_named() {
    let named = Variant::labeled("(min-width: 100px)", "a");
    let unnamed = Variant::new("(min-width: 100px)");
    let blank = Variant::labeled("(min-width: 100px)", "");
    assert_eq!(compare(&named, &unnamed), Ordering::Less);
    assert_eq!(compare(&unnamed, &named), Ordering::Greater);
    assert_eq!(compare(&unnamed, &blank), Ordering::Equal, "missing and empty labels are the same");
}

#[test]
fn labels_use_numeric_collation() {
    let two = Variant::labeled("(min-width: 100px)", "2");
    let ten = Variant::labeled("(min-width: 100px)", "10");
    assert_eq!(compare(&two, &ten), Ordering::Less, "\"10\" sorts after \"2\"");
    let card = Variant::labeled("(min-width: 100px)", "card");
    let aside = Variant::labeled("(min-width: 100px)", "Aside");
    assert_eq!(compare(&aside, &card), Ordering::Less);
}

#[test]
fn labels_only_matter_on_full_ties() {
    let labeled = Variant::labeled("(min-width: 300px)", "a");
    let unlabeled = Variant::new("(min-width: 200px)");
    assert_eq!(compare(&unlabeled, &labeled), Ordering::Less);
}

#[test]
fn order_does_not_depend_on_input_order() {
    let values = ["(min-width: 30rem)", "10rem", "(max-width: 20rem)", "(foo: bar)", "(min-width: 10rem) and (max-width: 40rem)"];
    let forward: Vec<Variant> = values.iter().map(|v| Variant::new(*v)).collect();
    let backward: Vec<Variant> = values.iter().rev().map(|v| Variant::new(*v)).collect();
    let expected = vec!["(max-width: 20rem)", "10rem", "(min-width: 10rem) and (max-width: 40rem)", "(min-width: 30rem)", "(foo: bar)"];
    assert_eq!(sorted(forward), expected);
    assert_eq!(sorted(backward), expected);
}

#[test]
fn variants_deserialize_with_optional_modifier() {
    let variants: Vec<Variant> = serde_json::from_str(
        r#"[{"value": "(min-width: 40rem)", "modifier": "card"}, {"value": "20rem"}]"#,
    )
    .expect("variants parse");
    assert_eq!(variants[0], Variant::labeled("(min-width: 40rem)", "card"));
    assert_eq!(variants[1], Variant::new("20rem"));
    assert_eq!(compare(&variants[1], &variants[0]), Ordering::Less);
    assert_eq!(
        serde_json::to_value(&variants[1]).expect("serializes"),
        serde_json::json!({ "value": "20rem", "modifier": null })
    );
}
