use scrolly_chart::core::{FieldValue, Record};

#[test]
fn records_deserialize_from_json_objects_in_field_order() {
    let records: Vec<Record> = serde_json::from_str(
        r#"[{"name":"Left Bar","value":11},{"name":"Right Bar","value":"34","flag":true}]"#,
    )
    .expect("parse records");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].category("name"), "Left Bar");
    assert_eq!(records[0].number("value"), 11.0);
    assert_eq!(records[1].number("value"), 34.0);
    assert_eq!(records[1].number("flag"), 1.0);
    assert_eq!(records[1].get("flag"), Some(&FieldValue::Bool(true)));
}

#[test]
fn missing_and_malformed_fields_degrade_instead_of_failing() {
    let record = Record::new().with("x", 0.5).with("y", "abc").with("z", "  ");
    assert_eq!(record.category("x"), "0.5");
    assert_eq!(record.category("missing"), "undefined");
    assert!(record.number("y").is_nan());
    assert_eq!(record.number("z"), 0.0);
    assert!(record.number("missing").is_nan());
}

#[test]
fn extreme_numeric_categories_print_with_signed_exponents() {
    let data: Vec<Record> =
        serde_json::from_str(r#"[{"x":1e21,"y":1},{"x":0.0000001,"y":2}]"#).expect("parse");
    assert_eq!(data[0].category("x"), "1e+21");
    assert_eq!(data[1].category("x"), "1e-7");
}
