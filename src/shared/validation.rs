use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating category and product slugs
    /// Must be lowercase alphanumeric with single hyphens between segments
    /// - Valid: "roses", "new-arrivals", "gifts2go"
    /// - Invalid: "-roses", "roses-", "new--arrivals", "Roses", "new_arrivals"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}
