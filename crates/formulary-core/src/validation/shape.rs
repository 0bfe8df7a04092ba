//! Shape checks for collections read back from disk.
//!
//! A collection is accepted or rejected as a whole. Nothing is coerced or
//! skipped.

use serde_json::Value;

use super::positive_whole_json_number;
use crate::models::formulary_contains;

/// Numeric fields every stored inventory item must carry.
const PACK_NUMBER_FIELDS: [&str; 3] = ["pack_size", "strength", "total_packs"];

/// True iff `data` is an array of strings.
pub fn formulary_validator(data: &Value) -> bool {
    data.as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

/// Build an inventory shape check bound to a formulary snapshot.
pub fn inventory_validator(formulary: &[String]) -> impl Fn(&Value) -> bool + '_ {
    move |data: &Value| is_valid_inventory(formulary, data)
}

/// True iff `data` is an array of inventory objects whose names are in `formulary`.
pub fn is_valid_inventory(formulary: &[String], data: &Value) -> bool {
    data.as_array()
        .is_some_and(|items| items.iter().all(|item| is_valid_inventory_item(formulary, item)))
}

fn is_valid_inventory_item(formulary: &[String], item: &Value) -> bool {
    let Some(fields) = item.as_object() else {
        return false;
    };

    let name_ok = fields
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty() && formulary_contains(formulary, name));

    name_ok
        && PACK_NUMBER_FIELDS
            .iter()
            .all(|field| fields.get(*field).is_some_and(is_positive_json_number))
}

/// A JSON number holding a positive whole value.
fn is_positive_json_number(value: &Value) -> bool {
    match value {
        Value::Number(number) => positive_whole_json_number(number).is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn formulary() -> Vec<String> {
        vec!["Paracetamol".into(), "Ibuprofen".into()]
    }

    #[test]
    fn test_formulary_shape() {
        assert!(formulary_validator(&json!([])));
        assert!(formulary_validator(&json!(["Paracetamol", "Ibuprofen"])));
        assert!(!formulary_validator(&json!(["Paracetamol", 3])));
        assert!(!formulary_validator(&json!({"name": "Paracetamol"})));
        assert!(!formulary_validator(&json!(null)));
        assert!(!formulary_validator(&json!("Paracetamol")));
    }

    #[test]
    fn test_inventory_shape_accepts_valid_items() {
        let data = json!([
            {"name": "Paracetamol", "strength": 500, "pack_size": 30, "total_packs": 10},
            {"name": "Ibuprofen", "strength": 200, "pack_size": 24, "total_packs": 1, "note": "extra"}
        ]);
        assert!(is_valid_inventory(&formulary(), &data));
        assert!(inventory_validator(&formulary())(&json!([])));
    }

    #[test]
    fn test_inventory_shape_accepts_integral_floats() {
        let data = json!([
            {"name": "Paracetamol", "strength": 500.0, "pack_size": 30, "total_packs": 1e1}
        ]);
        assert!(is_valid_inventory(&formulary(), &data));
    }

    #[test]
    fn test_inventory_shape_requires_formulary_name() {
        let data = json!([
            {"name": "Aspirin", "strength": 75, "pack_size": 28, "total_packs": 2}
        ]);
        assert!(!is_valid_inventory(&formulary(), &data));
    }

    #[test]
    fn test_inventory_shape_rejects_bad_numbers() {
        let f = formulary();
        let zero = json!([{"name": "Paracetamol", "strength": 0, "pack_size": 30, "total_packs": 1}]);
        let negative = json!([{"name": "Paracetamol", "strength": 500, "pack_size": -30, "total_packs": 1}]);
        let fraction = json!([{"name": "Paracetamol", "strength": 500, "pack_size": 30, "total_packs": 1.5}]);
        let text = json!([{"name": "Paracetamol", "strength": "500", "pack_size": 30, "total_packs": 1}]);
        let missing = json!([{"name": "Paracetamol", "strength": 500, "pack_size": 30}]);

        assert!(!is_valid_inventory(&f, &zero));
        assert!(!is_valid_inventory(&f, &negative));
        assert!(!is_valid_inventory(&f, &fraction));
        assert!(!is_valid_inventory(&f, &text));
        assert!(!is_valid_inventory(&f, &missing));
    }

    #[test]
    fn test_one_bad_item_rejects_whole_collection() {
        let data = json!([
            {"name": "Paracetamol", "strength": 500, "pack_size": 30, "total_packs": 10},
            {"name": "", "strength": 200, "pack_size": 24, "total_packs": 1}
        ]);
        assert!(!is_valid_inventory(&formulary(), &data));
        assert!(!is_valid_inventory(&formulary(), &json!([null])));
    }
}
