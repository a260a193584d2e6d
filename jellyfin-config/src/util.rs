use std::str::FromStr;

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse_bool_var<F>(lookup: &F, name: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|raw| parse_bool(&raw))
}

/// Reads `name` and parses it, treating unparseable values as unset.
pub fn parse_var<F, T>(lookup: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name).and_then(|raw| raw.trim().parse().ok())
}

/// Reads `name`, treating blank values as unset.
pub fn string_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn typed_vars_ignore_garbage() {
        let lookup = lookup_from(&[("PORT", "8920"), ("BAD", "eighty")]);
        assert_eq!(parse_var::<_, u16>(&lookup, "PORT"), Some(8920));
        assert_eq!(parse_var::<_, u16>(&lookup, "BAD"), None);
        assert_eq!(parse_var::<_, u16>(&lookup, "MISSING"), None);
    }

    #[test]
    fn blank_strings_count_as_unset() {
        let lookup = lookup_from(&[("HOST", "  "), ("NAME", "den")]);
        assert_eq!(string_var(&lookup, "HOST"), None);
        assert_eq!(string_var(&lookup, "NAME").as_deref(), Some("den"));
    }
}
