//! Quality selection over a variant collection.

use std::collections::BTreeMap;

/// Select a variant by quality key.
///
/// With no requested quality the entry at the maximum key wins. With an
/// explicit quality only an exact key match is returned - there is no
/// nearest-match fallback, so a missing quality yields `None` rather than a
/// silently substituted variant. An empty collection always yields `None`;
/// callers must treat that as "no variant available".
///
/// Keys are unique within one manifest (last-wins at normalization time), so
/// no tie-break is needed here.
pub fn select<V>(variants: &BTreeMap<u32, V>, requested: Option<u32>) -> Option<&V> {
    match requested {
        Some(key) => variants.get(&key),
        None => variants.iter().next_back().map(|(_, variant)| variant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants() -> BTreeMap<u32, &'static str> {
        BTreeMap::from([(360, "low"), (720, "mid"), (1080, "high")])
    }

    #[test]
    fn defaults_to_maximum_key() {
        assert_eq!(select(&variants(), None), Some(&"high"));
    }

    #[test]
    fn explicit_quality_is_exact_match_only() {
        let v = variants();
        assert_eq!(select(&v, Some(720)), Some(&"mid"));
        assert_eq!(select(&v, Some(480)), None);
    }

    #[test]
    fn empty_collection_yields_none() {
        let empty: BTreeMap<u32, &str> = BTreeMap::new();
        assert_eq!(select(&empty, None), None);
        assert_eq!(select(&empty, Some(720)), None);
    }

    #[test]
    fn selecting_the_maximum_equals_selecting_default() {
        let v = variants();
        let max_key = *v.keys().next_back().unwrap();
        assert_eq!(select(&v, Some(max_key)), select(&v, None));
    }
}
