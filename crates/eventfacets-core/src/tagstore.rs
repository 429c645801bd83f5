use crate::TagValue;

/// Prefix carried by curated internal tags on the wire (`sys:release`,
/// `sys:user`, ...). User-facing responses use the bare key.
const INTERNAL_KEY_PREFIX: &str = "sys:";

/// Canonical display form of a raw tag key. Pure and deterministic: the
/// same raw key always standardizes to the same display key, so aliased
/// variants of one tag land in one facet group.
pub fn standardize_key(key: &str) -> String {
    key.strip_prefix(INTERNAL_KEY_PREFIX)
        .unwrap_or(key)
        .to_string()
}

/// Display label for a raw tag value. Internal user values are composite
/// (`id:123`, `email:jane@acme.io`, `username:jane`, `ip:10.0.0.1`); the
/// label is the part after the qualifier. Everything else labels as itself.
pub fn tag_value_label(key: &str, value: &TagValue) -> String {
    if standardize_key(key) == "user" {
        if let TagValue::Text(raw) = value {
            for qualifier in ["id:", "email:", "username:", "ip:"] {
                if let Some(rest) = raw.strip_prefix(qualifier) {
                    return rest.to_string();
                }
            }
        }
    }
    value.to_string()
}
