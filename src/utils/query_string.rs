use std::collections::HashMap;

use urlencoding::encode;

/// Build a query string from key-value pairs
pub fn build_query_string(pairs: &[(String, String)]) -> String {
    let mut first = true;
    let mut out = String::new();
    for (k, v) in pairs {
        if !first {
            out.push('&');
        } else {
            first = false;
        }
        out.push_str(&encode(k));
        out.push('=');
        out.push_str(&encode(v));
    }
    out
}

/// Parse a query string (with or without the leading `?`) into decoded values per key.
/// `+` is read as a space, as browsers submit GET forms.
pub fn parse_query_string(raw: &str) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    let raw = raw.trim().trim_start_matches('?');
    for pair in raw.split('&') {
        if pair.is_empty() { continue; }
        let mut parts = pair.splitn(2, '=');
        let key_enc = parts.next().unwrap_or("").replace('+', " ");
        let val_enc = parts.next().unwrap_or("").replace('+', " ");
        let key = urlencoding::decode(&key_enc).map(|c| c.into_owned()).unwrap_or_else(|_| key_enc.clone());
        let val = urlencoding::decode(&val_enc).map(|c| c.into_owned()).unwrap_or_else(|_| val_enc.clone());
        map.entry(key).or_default().push(val);
    }
    map
}
