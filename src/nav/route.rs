//! Path helpers shared by the route guard, the tab strip and the side menu.

/// True for paths that start with `/`.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Strips trailing slashes, keeping the root as `/`.
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// True when `location` is a strict descendant of `base` on a segment boundary.
///
/// `/orders/place` descends from `/orders`; `/orders-archive` does not.
pub fn is_strict_descendant(location: &str, base: &str) -> bool {
    let location = normalize(location);
    let base = normalize(base);
    if base == "/" {
        return location != "/";
    }
    location
        .strip_prefix(base)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// True when `location` equals `base` or descends from it.
pub fn is_within(location: &str, base: &str) -> bool {
    normalize(location) == normalize(base) || is_strict_descendant(location, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize("/orders/"), "/orders");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("///"), "/");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn descendant_requires_segment_boundary() {
        assert!(is_strict_descendant("/orders/place", "/orders"));
        assert!(!is_strict_descendant("/orders", "/orders"));
        assert!(!is_strict_descendant("/orders-archive", "/orders"));
        assert!(!is_strict_descendant("/dealers/orders", "/orders"));
    }

    #[test]
    fn root_contains_everything_but_itself() {
        assert!(is_strict_descendant("/dashboard", "/"));
        assert!(!is_strict_descendant("/", "/"));
        assert!(is_within("/", "/"));
    }

    #[test]
    fn within_accepts_equal_and_descendant() {
        assert!(is_within("/(auth)", "/(auth)"));
        assert!(is_within("/(auth)/forgot-password", "/(auth)"));
        assert!(is_within("/(auth)/", "/(auth)"));
        assert!(!is_within("/dashboard", "/(auth)"));
    }
}
