use serde_json::Value;

/// Fallback written into generated code wherever a lookup failed.
pub const PLACEHOLDER: &str = "FIXME";

/// Field type that stands for a plain counter in the input.
pub const SHARED_METRIC: &str = "SharedMetric";

/// Go type a `SharedMetric` field is rewritten to.
pub const UINT64: &str = "uint64";

/// Irregular first-letter pairs (upper spelling, lower spelling).
const CASE_EXCEPTIONS: [(&str, &str); 1] = [("RTCDeviceMetrics", "rtcDeviceMetrics")];

/// JSON-quotes `text` (`rx` → `"rx"`).
pub fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

/// Capitalizes the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
    }
}

/// Converts `snake_case` to `CamelCase`: every underscore-separated word is
/// capitalized and the words are joined without a separator.
/// `rx_accepted` → `RxAccepted`. The tail of each word is lowercased, so
/// `HTTP_ok` → `HttpOk`.
pub fn to_camel_case(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

/// Lowers the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    if let Some((_, lower)) = CASE_EXCEPTIONS.iter().find(|(upper, _)| *upper == s) {
        return lower.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().to_string() + chars.as_str(),
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    if let Some((upper, _)) = CASE_EXCEPTIONS.iter().find(|(_, lower)| *lower == s) {
        return upper.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Go struct tag for a JSON field: `` `json:"rx_accepted"` ``.
pub fn json_tag(name: &str) -> String {
    format!("`json:{}`", quote(name))
}
