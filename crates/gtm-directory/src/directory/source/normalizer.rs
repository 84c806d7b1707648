/// Lowercased, whitespace-collapsed key for matching locations and categories.
pub(crate) fn normalize_key(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Splits a `|`-separated list cell, dropping blank entries.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(|item| item.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|item| !item.is_empty())
        .collect()
}

pub(crate) fn same_key(left: &str, right: &str) -> bool {
    normalize_key(left) == normalize_key(right)
}
