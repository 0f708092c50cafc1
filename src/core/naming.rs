/// Convert a camel-case identifier into its snake-case wire key.
///
/// A run of non-lowercase characters is treated as a single word: only the
/// first character of the run gets an `_` in front of it. This also applies
/// to the very first character, so `"ID"` becomes `"_id"` and `"URLString"`
/// becomes `"_urlstring"`.
pub fn to_wire_key(identifier: &str) -> String {
    let mut key = String::with_capacity(identifier.len() + 4);
    let mut prev_was_non_lower = false;

    for ch in identifier.chars() {
        if ch.is_lowercase() {
            key.push(ch);
            prev_was_non_lower = false;
            continue;
        }

        if !prev_was_non_lower {
            key.push('_');
        }
        key.extend(ch.to_lowercase());
        prev_was_non_lower = true;
    }

    key
}
