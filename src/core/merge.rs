use serde_json::{Map, Value};

use super::build_patch;
use crate::models::ConOpsInput;

/// Note stamped onto every generated full specification.
const GENERATED_NOTE: &str = "Generated by ConOps Builder v2";

/// Deep-merge `patch` onto `base`.
///
/// Two objects merge key-by-key, recursing on shared keys. A `Null` patch
/// value keeps the base value, so patches never erase baseline fields by
/// omission. Anything else — arrays included — is a full replacement.
/// Merging the same patch repeatedly is idempotent.
pub fn deep_merge(base: Value, patch: Value) -> Value {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            let mut out: Map<String, Value> = base_map;
            for (key, patch_value) in patch_map {
                let merged = match out.remove(&key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => deep_merge(Value::Null, patch_value),
                };
                out.insert(key, merged);
            }
            Value::Object(out)
        }
        (base, Value::Null) => base,
        (_, patch) => patch,
    }
}

/// Build the full merged specification: the input's patch overlaid on the
/// baseline when one exists, the patch alone when it doesn't. A missing
/// baseline is a normal branch, not an error. The `study.notes` stamp is
/// applied unconditionally, creating `study` if the baseline lacked it.
pub fn build_full_spec(input: &ConOpsInput, baseline: Option<Value>) -> Value {
    let patch = build_patch(input);
    let mut full = match baseline {
        Some(base) => deep_merge(base, patch),
        None => patch,
    };

    let study = full
        .as_object_mut()
        .expect("patch document is always an object")
        .entry("study")
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(study_map) = study {
        study_map.insert("notes".to_string(), Value::String(GENERATED_NOTE.to_string()));
    }
    full
}
