// crates/countrymap-core/src/text.rs

/// Convert a string into a folded key suitable for tolerant comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use countrymap_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Accent-insensitive and case-insensitive equality.
///
/// ```rust
/// use countrymap_core::text::equals_folded;
///
/// assert!(equals_folded("São Tomé and Príncipe", "sao tome and principe"));
/// assert!(!equals_folded("Niger", "Nigeria"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Case-insensitive equality; accents must match.
///
/// This is the comparison used when the user types a country name: exact,
/// only the letter case is ignored.
///
/// ```rust
/// use countrymap_core::text::equals_case_folded;
///
/// assert!(equals_case_folded("France", "FRANCE"));
/// assert!(!equals_case_folded("France", "Fran"));
/// ```
pub fn equals_case_folded(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Upper-case the first character and lower-case the rest.
///
/// Used for the display name of fetched country details.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
