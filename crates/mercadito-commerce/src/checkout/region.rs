//! Postal-code to region resolution.
//!
//! Colombian postal codes are six digits and the first two identify the
//! department. The table below covers the department capitals the
//! storefront pre-fills; anything else falls back to manual selection.

/// Department and city matched from a postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// ISO 3166-2:CO department code (e.g. `ANT`).
    pub department_code: &'static str,
    /// City pre-filled in the checkout form.
    pub city: &'static str,
}

const POSTAL_REGIONS: &[(&str, Region)] = &[
    ("11", Region { department_code: "DC", city: "Bogotá" }),
    ("05", Region { department_code: "ANT", city: "Medellín" }),
    ("76", Region { department_code: "VAC", city: "Cali" }),
    ("08", Region { department_code: "ATL", city: "Barranquilla" }),
    ("13", Region { department_code: "BOL", city: "Cartagena" }),
    ("68", Region { department_code: "SAN", city: "Bucaramanga" }),
    ("54", Region { department_code: "NSA", city: "Cúcuta" }),
    ("66", Region { department_code: "RIS", city: "Pereira" }),
    ("17", Region { department_code: "CAL", city: "Manizales" }),
    ("63", Region { department_code: "QUI", city: "Armenia" }),
    ("73", Region { department_code: "TOL", city: "Ibagué" }),
    ("20", Region { department_code: "CES", city: "Valledupar" }),
    ("47", Region { department_code: "MAG", city: "Santa Marta" }),
    ("19", Region { department_code: "CAU", city: "Popayán" }),
    ("52", Region { department_code: "NAR", city: "Pasto" }),
    ("15", Region { department_code: "BOY", city: "Tunja" }),
    ("25", Region { department_code: "CUN", city: "Chía" }),
    ("41", Region { department_code: "HUI", city: "Neiva" }),
    ("23", Region { department_code: "COR", city: "Montería" }),
    ("50", Region { department_code: "MET", city: "Villavicencio" }),
];

/// Resolve a postal code to its region.
///
/// Returns `None` unless the code is exactly six digits with a known
/// department prefix.
pub fn lookup_postal_code(code: &str) -> Option<Region> {
    let code = code.trim();
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let prefix = &code[..2];
    POSTAL_REGIONS
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, region)| *region)
}

/// Keep only digits from postal-code input, capped at six.
pub fn normalize_postal_input(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(6).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_prefixes_resolve() {
        let region = lookup_postal_code("110111").unwrap();
        assert_eq!(region.department_code, "DC");
        assert_eq!(region.city, "Bogotá");

        let region = lookup_postal_code("050021").unwrap();
        assert_eq!(region.department_code, "ANT");
        assert_eq!(region.city, "Medellín");
    }

    #[test]
    fn unknown_prefix_is_none() {
        assert_eq!(lookup_postal_code("990001"), None);
    }

    #[test]
    fn malformed_codes_are_none() {
        assert_eq!(lookup_postal_code("1101"), None); // too short
        assert_eq!(lookup_postal_code("1101112"), None); // too long
        assert_eq!(lookup_postal_code("11a111"), None); // non-digit
        assert_eq!(lookup_postal_code(""), None);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(lookup_postal_code(" 110111 ").is_some());
    }

    #[test]
    fn normalization_strips_and_caps() {
        assert_eq!(normalize_postal_input("11-01 11"), "110111");
        assert_eq!(normalize_postal_input("11011199"), "110111");
        assert_eq!(normalize_postal_input("abc"), "");
    }
}
