/// Parses a path segment as a row id. Anything that is not a positive integer is `None`.
pub fn valid_id(id: &str) -> Option<i64> {
    id.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers_only() {
        assert_eq!(valid_id("42"), Some(42));
        assert_eq!(valid_id("0"), None);
        assert_eq!(valid_id("-3"), None);
        assert_eq!(valid_id("abc"), None);
        assert_eq!(valid_id("1.5"), None);
        assert_eq!(valid_id(""), None);
    }
}
