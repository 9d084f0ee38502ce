use indexmap::IndexMap;

use super::percent;

/// Ordered multimap of query parameters.
///
/// Keys keep the order in which they were first seen; each key's values keep
/// the order in which they appeared.
pub type QueryParams = IndexMap<String, Vec<String>>;

/// Decode a raw query string (without the leading `?`) into a [`QueryParams`].
///
/// Entries are separated by `&`, empty entries are skipped, and each entry is
/// split at its first `=` (an entry without `=` gets an empty value). `+`
/// stands for a space, as in HTML form encoding, before percent-decoding.
pub fn decode_query(query: &str) -> QueryParams {
    let mut params = QueryParams::new();

    for entry in query.split('&').filter(|entry| !entry.is_empty()) {
        let (key, value) = entry.split_once('=').unwrap_or((entry, ""));

        params
            .entry(decode_component(key))
            .or_default()
            .push(decode_component(value));
    }

    params
}

fn decode_component(raw: &str) -> String {
    percent::decode(&raw.replace('+', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &QueryParams) -> Vec<(&str, Vec<&str>)> {
        params
            .iter()
            .map(|(k, v)| (k.as_str(), v.iter().map(String::as_str).collect()))
            .collect()
    }

    #[test]
    fn test_empty_query() {
        assert!(decode_query("").is_empty());
    }

    #[test]
    fn test_single_pair() {
        let params = decode_query("key=val");
        assert_eq!(pairs(&params), vec![("key", vec!["val"])]);
    }

    #[test]
    fn test_duplicate_keys_accumulate() {
        let params = decode_query("key=val&multi=1&multi=2");
        assert_eq!(
            pairs(&params),
            vec![("key", vec!["val"]), ("multi", vec!["1", "2"])]
        );
    }

    #[test]
    fn test_keys_keep_first_seen_order() {
        let params = decode_query("b=1&a=2&b=3&c=4");
        assert_eq!(
            pairs(&params),
            vec![("b", vec!["1", "3"]), ("a", vec!["2"]), ("c", vec!["4"])]
        );
    }

    #[test]
    fn test_empty_entries_dropped() {
        let params = decode_query("&&a=1&&b=2&");
        assert_eq!(pairs(&params), vec![("a", vec!["1"]), ("b", vec!["2"])]);
    }

    #[test]
    fn test_entry_without_equals_has_empty_value() {
        let params = decode_query("flag&a=1");
        assert_eq!(pairs(&params), vec![("flag", vec![""]), ("a", vec!["1"])]);
    }

    #[test]
    fn test_blank_value_kept() {
        let params = decode_query("a=");
        assert_eq!(pairs(&params), vec![("a", vec![""])]);
    }

    #[test]
    fn test_splits_at_first_equals() {
        let params = decode_query("expr=a=b");
        assert_eq!(pairs(&params), vec![("expr", vec!["a=b"])]);
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let params = decode_query("q=hello+world&full+name=x");
        assert_eq!(
            pairs(&params),
            vec![("q", vec!["hello world"]), ("full name", vec!["x"])]
        );
    }

    #[test]
    fn test_escaped_plus_stays_plus() {
        let params = decode_query("sum=1%2B1");
        assert_eq!(pairs(&params), vec![("sum", vec!["1+1"])]);
    }

    #[test]
    fn test_percent_decoding_of_keys_and_values() {
        let params = decode_query("caf%C3%A9=na%C3%AFve&bad=%ZZ");
        assert_eq!(
            pairs(&params),
            vec![("café", vec!["naïve"]), ("bad", vec!["%ZZ"])]
        );
    }

    #[test]
    fn test_encoded_separators_do_not_split() {
        let params = decode_query("a=1%262&b=x%3Dy");
        assert_eq!(pairs(&params), vec![("a", vec!["1&2"]), ("b", vec!["x=y"])]);
    }
}
