//! Effective host type resolution.
//!
//! Maps a schema datatype plus its restriction facets to the host value type
//! the generated member will use. Integer-family datatypes are narrowed to the
//! tightest host integer that can hold every value allowed by the facets.
//! Resolution is total: every input yields a type, falling back to text when
//! the value space cannot be bounded.

use crate::datatype::{Datatype, HostType, TypeCode};
use crate::restriction::{RestrictionSet, parse_integer_bound};
use serde::{Deserialize, Serialize};

/// Candidate widths in the order they are tried when both bounds are known.
const WIDTHS: [HostType; 8] = [
    HostType::U8,
    HostType::I8,
    HostType::U16,
    HostType::I16,
    HostType::U32,
    HostType::I32,
    HostType::U64,
    HostType::I64,
];

/// Digit count at which non-negative integer families stop being numeric.
pub const UNSIGNED_DIGIT_CEILING: u32 = 30;

/// Digit count at which signed integer families stop being numeric.
pub const SIGNED_DIGIT_CEILING: u32 = 29;

/// Fixed host type for integer-family datatypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerOverride {
    /// Host type to use.
    pub host_type: HostType,
    /// Only use the override where narrowing would otherwise yield text.
    #[serde(default)]
    pub fallback_only: bool,
}

/// Options consumed by [`TypeResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverOptions {
    /// Fixed integer host type.
    pub integer_override: Option<IntegerOverride>,
    /// Map `xs:dateTime` to the offset-aware host type.
    pub date_time_offset: bool,
    /// Map `xs:duration` to the host duration type instead of text.
    pub native_duration: bool,
}

/// Resolves schema datatypes to host value types.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    options: &'a ResolverOptions,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver over a frozen option set.
    #[must_use]
    pub const fn new(options: &'a ResolverOptions) -> Self {
        Self { options }
    }

    /// Returns the effective host type for a datatype.
    ///
    /// # Arguments
    /// * `datatype` - Datatype descriptor from the schema walker
    /// * `restrictions` - Facets constraining the datatype
    /// * `is_attribute` - Whether the value is carried by an attribute
    #[must_use]
    pub fn resolve_effective_type(
        &self,
        datatype: &Datatype,
        restrictions: &RestrictionSet,
        is_attribute: bool,
    ) -> HostType {
        let resolved = match datatype.type_code {
            TypeCode::AnyAtomicType => HostType::String,
            TypeCode::AnyUri
            | TypeCode::GDay
            | TypeCode::GMonth
            | TypeCode::GMonthDay
            | TypeCode::GYear
            | TypeCode::GYearMonth => HostType::String,
            TypeCode::Duration => {
                if self.options.native_duration {
                    HostType::Duration
                } else {
                    HostType::String
                }
            }
            TypeCode::Time => HostType::Time,
            TypeCode::DateTime => {
                if self.options.date_time_offset {
                    HostType::DateTimeOffset
                } else {
                    HostType::DateTime
                }
            }
            TypeCode::Idref => HostType::String,
            code if code.is_integer_family() => self.resolve_integer(code, restrictions),
            _ => datatype.value_type.clone(),
        };

        if !datatype.is_list() {
            return resolved;
        }

        let item = match resolved {
            HostType::Array(inner) => *inner,
            other => other,
        };

        // Lists only serialize on attributes; date/time and binary items are
        // ambiguous once listed.
        if !is_attribute
            || matches!(
                item,
                HostType::DateTime | HostType::Time | HostType::Bytes
            )
        {
            tracing::trace!(
                "List of {} resolved to text (attribute: {})",
                datatype.type_code.xsd_name(),
                is_attribute
            );
            return HostType::String;
        }

        item
    }

    /// Narrows an integer-family datatype.
    #[must_use]
    pub fn resolve_integer(&self, code: TypeCode, restrictions: &RestrictionSet) -> HostType {
        if let Some(over) = &self.options.integer_override {
            if !over.fallback_only {
                return over.host_type.clone();
            }
        }

        let min = match restrictions.min_inclusive() {
            Some(v) => parse_integer_bound(v),
            None => match code {
                TypeCode::PositiveInteger => Some(1),
                TypeCode::NonNegativeInteger => Some(0),
                _ => None,
            },
        };
        let max = match restrictions.max_inclusive() {
            Some(v) => parse_integer_bound(v),
            None => match code {
                TypeCode::NegativeInteger => Some(-1),
                TypeCode::NonPositiveInteger => Some(0),
                _ => None,
            },
        };

        if let (Some(min), Some(max)) = (min, max) {
            return narrowest_for_range(min, max);
        }

        let ceiling = if code.is_non_negative_family() {
            UNSIGNED_DIGIT_CEILING
        } else {
            SIGNED_DIGIT_CEILING
        };

        match restrictions.total_digits() {
            Some(digits) if digits < ceiling => digit_tier(code, digits),
            digits => {
                if let Some(over) = &self.options.integer_override {
                    tracing::debug!(
                        "Integer {} unbounded (totalDigits {:?}), using fallback {:?}",
                        code.xsd_name(),
                        digits,
                        over.host_type
                    );
                    return over.host_type.clone();
                }
                tracing::debug!(
                    "Integer {} unbounded (totalDigits {:?}), resolved to text",
                    code.xsd_name(),
                    digits
                );
                HostType::String
            }
        }
    }

    /// Returns whether the datatype needs an explicit data-type annotation.
    ///
    /// Host types shared by several XSD types (date/time, binary) need the
    /// schema name spelled out for the serializer.
    #[must_use]
    pub fn data_type_annotation_allowed(&self, datatype: &Datatype) -> bool {
        match datatype.type_code {
            TypeCode::AnyAtomicType => false,
            TypeCode::Time | TypeCode::Date | TypeCode::Base64Binary | TypeCode::HexBinary => true,
            TypeCode::DateTime => !self.options.date_time_offset,
            _ => false,
        }
    }
}

/// Returns the narrowest host integer covering `[min, max]`, or decimal.
#[must_use]
pub fn narrowest_for_range(min: i128, max: i128) -> HostType {
    WIDTHS
        .iter()
        .find(|width| {
            width
                .integer_range()
                .is_some_and(|(lo, hi)| min >= lo && max <= hi)
        })
        .cloned()
        .unwrap_or(HostType::Decimal)
}

/// Returns the host type for a digit count below the family ceiling.
fn digit_tier(code: TypeCode, digits: u32) -> HostType {
    if code.is_non_negative_family() {
        match digits {
            0..3 => HostType::U8,
            3..5 => HostType::U16,
            5..10 => HostType::U32,
            10..20 => HostType::U64,
            _ => HostType::Decimal,
        }
    } else {
        match digits {
            0..3 => HostType::I8,
            3..5 => HostType::I16,
            5..10 => HostType::I32,
            10..19 => HostType::I64,
            _ => HostType::Decimal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restriction::Restriction;

    fn bounds(min: Option<&str>, max: Option<&str>) -> RestrictionSet {
        let mut set = RestrictionSet::new();
        if let Some(min) = min {
            set.push(Restriction::MinInclusive(min.to_string()));
        }
        if let Some(max) = max {
            set.push(Restriction::MaxInclusive(max.to_string()));
        }
        set
    }

    fn digits(n: u32) -> RestrictionSet {
        RestrictionSet::new().with(Restriction::TotalDigits(n))
    }

    fn resolve(code: TypeCode, set: &RestrictionSet, options: &ResolverOptions) -> HostType {
        TypeResolver::new(options).resolve_effective_type(&Datatype::atomic(code), set, false)
    }

    #[test]
    fn test_range_narrowing_at_width_boundaries() {
        let opts = ResolverOptions::default();
        let cases = [
            ("0", "255", HostType::U8),
            ("0", "256", HostType::U16),
            ("-128", "127", HostType::I8),
            ("-129", "127", HostType::I16),
            ("-1", "200", HostType::I16),
            ("0", "65535", HostType::U16),
            ("0", "65536", HostType::U32),
            ("-32768", "32767", HostType::I16),
            ("-32769", "0", HostType::I32),
            ("0", "4294967295", HostType::U32),
            ("0", "4294967296", HostType::U64),
            ("-2147483648", "2147483647", HostType::I32),
            ("-2147483649", "0", HostType::I64),
            ("0", "18446744073709551615", HostType::U64),
            ("0", "18446744073709551616", HostType::Decimal),
            ("-9223372036854775808", "9223372036854775807", HostType::I64),
            ("-9223372036854775809", "0", HostType::Decimal),
        ];

        for (min, max, expected) in cases {
            let set = bounds(Some(min), Some(max));
            assert_eq!(
                resolve(TypeCode::Integer, &set, &opts),
                expected,
                "range [{min}, {max}]"
            );
        }
    }

    #[test]
    fn test_default_bounds_per_type_code() {
        let opts = ResolverOptions::default();
        // negativeInteger supplies max = -1
        let set = bounds(Some("-100"), None);
        assert_eq!(resolve(TypeCode::NegativeInteger, &set, &opts), HostType::I8);
        // nonPositiveInteger supplies max = 0
        let set = bounds(Some("-40000"), None);
        assert_eq!(resolve(TypeCode::NonPositiveInteger, &set, &opts), HostType::I32);
        // positiveInteger supplies min = 1
        let set = bounds(None, Some("1000"));
        assert_eq!(resolve(TypeCode::PositiveInteger, &set, &opts), HostType::U16);
        // nonNegativeInteger supplies min = 0
        let set = bounds(None, Some("255"));
        assert_eq!(resolve(TypeCode::NonNegativeInteger, &set, &opts), HostType::U8);
    }

    #[test]
    fn test_unparseable_explicit_bound_is_unknown() {
        let opts = ResolverOptions::default();
        let set = bounds(Some("1.5"), Some("10"));
        assert_eq!(resolve(TypeCode::Integer, &set, &opts), HostType::String);
    }

    #[test]
    fn test_digit_tiers_unsigned() {
        let opts = ResolverOptions::default();
        let cases = [
            (2, HostType::U8),
            (3, HostType::U16),
            (4, HostType::U16),
            (5, HostType::U32),
            (9, HostType::U32),
            (10, HostType::U64),
            (18, HostType::U64),
            (19, HostType::U64),
            (20, HostType::Decimal),
            (28, HostType::Decimal),
            (29, HostType::Decimal),
            (30, HostType::String),
        ];
        for (n, expected) in cases {
            assert_eq!(
                resolve(TypeCode::NonNegativeInteger, &digits(n), &opts),
                expected,
                "nonNegativeInteger totalDigits {n}"
            );
        }
    }

    #[test]
    fn test_digit_tiers_signed() {
        let opts = ResolverOptions::default();
        let cases = [
            (2, HostType::I8),
            (3, HostType::I16),
            (4, HostType::I16),
            (5, HostType::I32),
            (9, HostType::I32),
            (10, HostType::I64),
            (18, HostType::I64),
            (19, HostType::Decimal),
            (20, HostType::Decimal),
            (28, HostType::Decimal),
            (29, HostType::String),
            (30, HostType::String),
        ];
        for (n, expected) in cases {
            assert_eq!(
                resolve(TypeCode::Integer, &digits(n), &opts),
                expected,
                "integer totalDigits {n}"
            );
        }
    }

    #[test]
    fn test_no_facets_resolves_to_text() {
        let opts = ResolverOptions::default();
        assert_eq!(
            resolve(TypeCode::Integer, &RestrictionSet::new(), &opts),
            HostType::String
        );
    }

    #[test]
    fn test_fixed_override_wins() {
        let opts = ResolverOptions {
            integer_override: Some(IntegerOverride {
                host_type: HostType::I64,
                fallback_only: false,
            }),
            ..ResolverOptions::default()
        };
        let set = bounds(Some("0"), Some("10"));
        assert_eq!(resolve(TypeCode::Integer, &set, &opts), HostType::I64);
    }

    #[test]
    fn test_fallback_override_only_replaces_text() {
        let opts = ResolverOptions {
            integer_override: Some(IntegerOverride {
                host_type: HostType::I64,
                fallback_only: true,
            }),
            ..ResolverOptions::default()
        };
        assert_eq!(
            resolve(TypeCode::PositiveInteger, &digits(30), &opts),
            HostType::I64
        );
        assert_eq!(
            resolve(TypeCode::Integer, &digits(29), &opts),
            HostType::I64
        );
        assert_eq!(
            resolve(TypeCode::Integer, &RestrictionSet::new(), &opts),
            HostType::I64
        );
        assert_eq!(resolve(TypeCode::Integer, &digits(4), &opts), HostType::I16);
    }

    #[test]
    fn test_date_time_offset_toggle() {
        let on = ResolverOptions {
            date_time_offset: true,
            ..ResolverOptions::default()
        };
        let off = ResolverOptions::default();
        let set = RestrictionSet::new();
        assert_eq!(resolve(TypeCode::DateTime, &set, &on), HostType::DateTimeOffset);
        assert_eq!(resolve(TypeCode::DateTime, &set, &off), HostType::DateTime);
    }

    #[test]
    fn test_fixed_mappings() {
        let opts = ResolverOptions::default();
        let set = RestrictionSet::new();
        assert_eq!(resolve(TypeCode::AnyUri, &set, &opts), HostType::String);
        assert_eq!(resolve(TypeCode::GYearMonth, &set, &opts), HostType::String);
        assert_eq!(resolve(TypeCode::Idref, &set, &opts), HostType::String);
        assert_eq!(resolve(TypeCode::Time, &set, &opts), HostType::Time);
        assert_eq!(resolve(TypeCode::Duration, &set, &opts), HostType::String);
        assert_eq!(resolve(TypeCode::Int, &set, &opts), HostType::I32);
        assert_eq!(resolve(TypeCode::Date, &set, &opts), HostType::DateTime);

        let native = ResolverOptions {
            native_duration: true,
            ..ResolverOptions::default()
        };
        assert_eq!(resolve(TypeCode::Duration, &set, &native), HostType::Duration);

        let union = Datatype::union();
        assert_eq!(
            TypeResolver::new(&opts).resolve_effective_type(&union, &set, true),
            HostType::String
        );
    }

    #[test]
    fn test_list_handling() {
        let opts = ResolverOptions::default();
        let resolver = TypeResolver::new(&opts);
        let set = RestrictionSet::new();

        let ints = Datatype::list(TypeCode::Int);
        assert_eq!(resolver.resolve_effective_type(&ints, &set, true), HostType::I32);
        assert_eq!(resolver.resolve_effective_type(&ints, &set, false), HostType::String);

        let dates = Datatype::list(TypeCode::Date);
        assert_eq!(resolver.resolve_effective_type(&dates, &set, true), HostType::String);

        let binary = Datatype::list(TypeCode::HexBinary);
        assert_eq!(resolver.resolve_effective_type(&binary, &set, true), HostType::String);

        let ranged = Datatype::list(TypeCode::NonNegativeInteger);
        let set = bounds(None, Some("100"));
        assert_eq!(resolver.resolve_effective_type(&ranged, &set, true), HostType::U8);
    }

    #[test]
    fn test_data_type_annotation_allowed() {
        let opts = ResolverOptions::default();
        let resolver = TypeResolver::new(&opts);
        assert!(resolver.data_type_annotation_allowed(&Datatype::atomic(TypeCode::Date)));
        assert!(resolver.data_type_annotation_allowed(&Datatype::atomic(TypeCode::DateTime)));
        assert!(!resolver.data_type_annotation_allowed(&Datatype::atomic(TypeCode::String)));

        let offset = ResolverOptions {
            date_time_offset: true,
            ..ResolverOptions::default()
        };
        let resolver = TypeResolver::new(&offset);
        assert!(!resolver.data_type_annotation_allowed(&Datatype::atomic(TypeCode::DateTime)));
    }
}
