use super::Count;
use anyhow::Result;
use serde_json::json;

#[test]
fn test_count_deserializes_valid_integers() -> Result<()> {
    let test_cases = vec![
        (json!(0), 0),
        (json!(1), 1),
        (json!(1000), 1000),
        (json!(u64::MAX), u64::MAX),
    ];

    for (input_value, expected_output) in test_cases {
        let count: Count = serde_json::from_value(input_value)?;
        assert_eq!(count.get(), expected_output);
    }

    Ok(())
}

#[test]
fn test_count_coerces_invalid_values_to_zero() -> Result<()> {
    let test_cases = vec![
        json!(null),
        json!(-3),
        json!(2.5),
        json!("7"),
        json!("abc"),
        json!(true),
        json!([1]),
        json!({"value": 1}),
    ];

    for input_value in test_cases {
        let count: Count = serde_json::from_value(input_value)?;
        assert_eq!(count.get(), 0);
    }

    Ok(())
}

#[test]
fn test_count_supports_accumulation() {
    let mut total = Count::from(3);
    total += Count::from(4);

    assert_eq!(total.get(), 7);
    assert_eq!(total.to_string(), "7");
}

#[test]
fn test_count_keeps_previous_value_on_overflow() {
    let mut total = Count::from(u64::MAX);
    total += Count::from(1);

    assert_eq!(total.get(), u64::MAX);
}

#[test]
fn test_count_sums_an_iterator_of_counters() {
    let values = vec![Count::from(1), Count::from(2), Count::from(3)];
    let total: Count = values.into_iter().sum();

    assert_eq!(total.get(), 6);
}
