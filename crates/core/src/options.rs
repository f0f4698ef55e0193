// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Untyped option mappings shared by triggers, rules, and handlers.
//!
//! Trigger options (e.g. a glob pattern), handler options (e.g. a `force`
//! flag from a pack override), and the `with = { ... }` table in
//! `.dodot.toml` all share the same shape: a small string-keyed mapping of
//! scalar/array/table values. We reuse [`toml::Value`] rather than invent a
//! parallel enum, since `.dodot.toml` overrides already produce one.

use std::collections::BTreeMap;

/// A handler/trigger option mapping.
///
/// Deliberately a `BTreeMap` (not `HashMap`): grouping and fingerprinting
/// (§4.5, §9) depend on stable key order.
pub type Options = BTreeMap<String, toml::Value>;

/// Build a canonical, stable string representation of an [`Options`] map.
///
/// Used as the grouping key component in the action generator (§4.5) and
/// must be identical across runs for identical inputs (§8 P4). Keys are
/// already sorted by `BTreeMap` iteration; values are rendered through
/// `toml::Value`'s `Display`, which is stable for a given value.
pub fn fingerprint(options: &Options) -> String {
    let mut out = String::new();
    for (key, value) in options {
        out.push_str(key);
        out.push('=');
        out.push_str(&canonical_value(value));
        out.push(';');
    }
    out
}

fn canonical_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => format!("{s:?}"),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(d) => d.to_string(),
        toml::Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(canonical_value).collect();
            format!("[{}]", rendered.join(","))
        }
        toml::Value::Table(table) => {
            let mut keys: Vec<&String> = table.keys().collect();
            keys.sort();
            let rendered: Vec<String> = keys
                .into_iter()
                .map(|k| format!("{k}:{}", canonical_value(&table[k])))
                .collect();
            format!("{{{}}}", rendered.join(","))
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
