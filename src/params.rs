// src/params.rs
use crate::config::defaults::DEFAULT_FORM;

/// Complete form payload for one model run: the default payload with caller
/// overrides merged in. Ordered, and a key may repeat (`vars` does).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Merge caller overrides over the default payload.
///
/// Overrides win; default keys the caller never names keep their value;
/// unknown keys pass through unchanged. An override for a repeated key
/// replaces every default entry for that key. Pure merge, no validation.
pub fn build(overrides: &[(&str, &str)]) -> Params {
    let mut pairs: Vec<(String, String)> =
        Vec::with_capacity(DEFAULT_FORM.len() + overrides.len());

    let mut replaced: Vec<&str> = Vec::new();
    for (key, default) in DEFAULT_FORM {
        let hits: Vec<&(&str, &str)> =
            overrides.iter().filter(|(k, _)| k == key).collect();
        if hits.is_empty() {
            pairs.push((s!(*key), s!(*default)));
        } else if !replaced.contains(key) {
            // All override values for the key, at its first default position
            replaced.push(*key);
            for (k, v) in hits {
                pairs.push((s!(*k), s!(*v)));
            }
        }
    }

    // Unknown keys pass through in the order given
    for (k, v) in overrides {
        if !DEFAULT_FORM.iter().any(|(dk, _)| dk == k) {
            pairs.push((s!(*k), s!(*v)));
        }
    }

    Params { pairs }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>(p: &'a Params, key: &str) -> Vec<&'a str> {
        p.pairs()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn defaults_pass_through_untouched() {
        let p = build(&[]);
        assert_eq!(p.get("model"), Some("msis"));
        assert_eq!(p.get("year"), Some("2000"));
        assert_eq!(p.pairs().len(), DEFAULT_FORM.len());
    }

    #[test]
    fn overrides_win_and_untouched_defaults_stay() {
        let p = build(&[("start", "100."), ("stop", "500.")]);
        assert_eq!(p.get("start"), Some("100."));
        assert_eq!(p.get("stop"), Some("500."));
        assert_eq!(p.get("year"), Some("2000"));
        assert_eq!(p.get("step"), Some("50."));
    }

    #[test]
    fn unknown_keys_pass_through() {
        let p = build(&[("not_a_field", "x")]);
        assert_eq!(p.get("not_a_field"), Some("x"));
        assert_eq!(p.pairs().len(), DEFAULT_FORM.len() + 1);
    }

    #[test]
    fn repeated_key_override_replaces_all_defaults() {
        let p = build(&[("vars", "11"), ("vars", "12")]);
        assert_eq!(values(&p, "vars"), vec!["11", "12"]);
    }

    #[test]
    fn merge_keeps_default_order() {
        let p = build(&[("latitude", "-30."), ("extra", "1")]);
        let keys: Vec<&str> = p.pairs().iter().map(|(k, _)| k.as_str()).collect();
        let lat = keys.iter().position(|k| *k == "latitude").unwrap();
        let lon = keys.iter().position(|k| *k == "longitude").unwrap();
        assert!(lat < lon);
        assert_eq!(keys.last(), Some(&"extra"));
    }
}
