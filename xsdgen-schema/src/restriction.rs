//! Restriction facets attached to simple types.

/// A single constraining facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Restriction {
    /// `minInclusive`, kept as the lexical value from the schema.
    MinInclusive(String),
    /// `maxInclusive`.
    MaxInclusive(String),
    /// `minExclusive`.
    MinExclusive(String),
    /// `maxExclusive`.
    MaxExclusive(String),
    /// `totalDigits`.
    TotalDigits(u32),
    /// `fractionDigits`.
    FractionDigits(u32),
    /// `length`.
    Length(u32),
    /// `minLength`.
    MinLength(u32),
    /// `maxLength`.
    MaxLength(u32),
    /// `pattern`.
    Pattern(String),
}

impl Restriction {
    /// Returns the facet name as written in the schema.
    #[must_use]
    pub const fn facet_name(&self) -> &'static str {
        match self {
            Self::MinInclusive(_) => "minInclusive",
            Self::MaxInclusive(_) => "maxInclusive",
            Self::MinExclusive(_) => "minExclusive",
            Self::MaxExclusive(_) => "maxExclusive",
            Self::TotalDigits(_) => "totalDigits",
            Self::FractionDigits(_) => "fractionDigits",
            Self::Length(_) => "length",
            Self::MinLength(_) => "minLength",
            Self::MaxLength(_) => "maxLength",
            Self::Pattern(_) => "pattern",
        }
    }

    /// Returns an English description of the facet for documentation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MinInclusive(v) => format!("Minimum inclusive value: {v}."),
            Self::MaxInclusive(v) => format!("Maximum inclusive value: {v}."),
            Self::MinExclusive(v) => format!("Minimum exclusive value: {v}."),
            Self::MaxExclusive(v) => format!("Maximum exclusive value: {v}."),
            Self::TotalDigits(n) => format!("Total number of digits: {n}."),
            Self::FractionDigits(n) => format!("Total number of digits in fraction: {n}."),
            Self::Length(n) => format!("Length: {n}."),
            Self::MinLength(n) => format!("Minimum length: {n}."),
            Self::MaxLength(n) => format!("Maximum length: {n}."),
            Self::Pattern(p) => format!("Pattern: {p}."),
        }
    }
}

/// Ordered collection of facets attached to a datatype.
///
/// Order follows the schema walker (derived facets before inherited ones);
/// the typed accessors return the first matching facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSet {
    restrictions: Vec<Restriction>,
}

impl RestrictionSet {
    /// Creates an empty restriction set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            restrictions: Vec::new(),
        }
    }

    /// Appends a facet.
    pub fn push(&mut self, restriction: Restriction) {
        self.restrictions.push(restriction);
    }

    /// Appends a facet, builder style.
    #[must_use]
    pub fn with(mut self, restriction: Restriction) -> Self {
        self.push(restriction);
        self
    }

    /// Returns the facets in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Restriction> {
        self.restrictions.iter()
    }

    /// Returns the number of facets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restrictions.len()
    }

    /// Returns true if no facet is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }

    /// Lexical value of the `minInclusive` facet.
    #[must_use]
    pub fn min_inclusive(&self) -> Option<&str> {
        self.restrictions.iter().find_map(|r| match r {
            Restriction::MinInclusive(v) => Some(v.as_str()),
            _ => None,
        })
    }

    /// Lexical value of the `maxInclusive` facet.
    #[must_use]
    pub fn max_inclusive(&self) -> Option<&str> {
        self.restrictions.iter().find_map(|r| match r {
            Restriction::MaxInclusive(v) => Some(v.as_str()),
            _ => None,
        })
    }

    /// Value of the `totalDigits` facet.
    #[must_use]
    pub fn total_digits(&self) -> Option<u32> {
        self.restrictions.iter().find_map(|r| match r {
            Restriction::TotalDigits(n) => Some(*n),
            _ => None,
        })
    }

    /// Descriptions of all facets, in order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.restrictions.iter().map(Restriction::description).collect()
    }
}

impl FromIterator<Restriction> for RestrictionSet {
    fn from_iter<I: IntoIterator<Item = Restriction>>(iter: I) -> Self {
        Self {
            restrictions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RestrictionSet {
    type Item = &'a Restriction;
    type IntoIter = std::slice::Iter<'a, Restriction>;

    fn into_iter(self) -> Self::IntoIter {
        self.restrictions.iter()
    }
}

/// Parses an inclusive bound facet as an integer.
///
/// Accepts an optional sign and a fractional part made of zeros only
/// (`"100.00"`); anything else, including values that overflow `i128`, is
/// treated as an unknown bound.
#[must_use]
pub fn parse_integer_bound(lexical: &str) -> Option<i128> {
    let trimmed = lexical.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed, None),
    };
    if let Some(frac) = frac_part {
        if !frac.chars().all(|c| c == '0') {
            return None;
        }
    }
    let int_part = int_part.strip_prefix('+').unwrap_or(int_part);
    if int_part.is_empty() || int_part == "-" {
        return None;
    }
    int_part.parse::<i128>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_first_facet() {
        let set = RestrictionSet::new()
            .with(Restriction::MinInclusive("1".to_string()))
            .with(Restriction::TotalDigits(4))
            .with(Restriction::MinInclusive("7".to_string()));

        assert_eq!(set.min_inclusive(), Some("1"));
        assert_eq!(set.max_inclusive(), None);
        assert_eq!(set.total_digits(), Some(4));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_descriptions() {
        let set: RestrictionSet = vec![
            Restriction::MaxLength(10),
            Restriction::Pattern("[A-Z]+".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            set.descriptions(),
            vec!["Maximum length: 10.", "Pattern: [A-Z]+."]
        );
    }

    #[test]
    fn test_parse_integer_bound() {
        assert_eq!(parse_integer_bound("255"), Some(255));
        assert_eq!(parse_integer_bound(" -128 "), Some(-128));
        assert_eq!(parse_integer_bound("+7"), Some(7));
        assert_eq!(parse_integer_bound("100.000"), Some(100));
        assert_eq!(parse_integer_bound("1.5"), None);
        assert_eq!(parse_integer_bound("abc"), None);
        assert_eq!(parse_integer_bound(""), None);
        assert_eq!(
            parse_integer_bound("9999999999999999999999999999999999999999999"),
            None
        );
    }
}
