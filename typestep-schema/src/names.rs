//! Identifier case helpers.

/// Returns `s` with its first character in uppercase.
///
/// The remaining characters are left untouched, so `first_name` becomes
/// `First_name`. An empty string stays empty.
#[must_use]
pub fn first_to_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_to_upper() {
        assert_eq!(first_to_upper("aField"), "AField");
        assert_eq!(first_to_upper("BField"), "BField");
        assert_eq!(first_to_upper("first_name"), "First_name");
        assert_eq!(first_to_upper("été"), "Été");
        assert_eq!(first_to_upper(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("OrderRequest"), "order_request");
        assert_eq!(to_snake_case("y"), "y");
        assert_eq!(to_snake_case("X"), "x");
        assert_eq!(to_snake_case("HTTPConfig"), "httpconfig");
        assert_eq!(to_snake_case("Point3d"), "point3d");
    }
}
