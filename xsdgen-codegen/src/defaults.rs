//! Conversion of schema default and fixed literals into initializer
//! expressions.

use crate::context::GenerationContext;
use crate::decl::{Expr, Literal};
use crate::error::CodegenError;
use xsdgen_schema::{HostType, TypeId, TypeKind, XSD_NAMESPACE};

/// Converts a literal into an initializer for a member of the given type.
///
/// Value carriers convert against their effective host type, enums resolve
/// the literal to a member, and simple-content classes wrap the converted
/// literal of their root value carrier in an object initializer.
///
/// # Errors
/// Returns `CodegenError` if the literal does not fit the type or the type
/// has no construction rule for defaults.
pub fn default_value_for(
    ctx: &GenerationContext<'_>,
    type_id: TypeId,
    literal: &str,
    is_attribute: bool,
) -> Result<Expr, CodegenError> {
    let model = ctx.graph.get(type_id);
    match &model.kind {
        TypeKind::Simple(_) => {
            let host = ctx
                .effective_type(type_id, is_attribute)
                .unwrap_or(HostType::String);
            convert_literal(&host, literal)
        }
        TypeKind::Enum(e) => match e.value_for_literal(literal) {
            Some(value) => Ok(Expr::EnumMember {
                enum_type: ctx.type_ref(type_id, None, false, false, false),
                member: value.name.clone(),
            }),
            None => Err(CodegenError::UnknownEnumLiteral {
                literal: literal.to_string(),
                enum_name: model.name.clone(),
            }),
        },
        TypeKind::Class(_) => {
            let root = ctx
                .graph
                .all_base_types(type_id)
                .last()
                .copied()
                .filter(|&b| ctx.graph.get(b).is_simple());
            match (root, ctx.config.text_value_property_name.as_deref()) {
                (Some(root), Some(property)) => Ok(Expr::ObjectInit {
                    type_ref: ctx.type_ref(type_id, None, false, false, false),
                    property: property.to_string(),
                    value: Box::new(default_value_for(ctx, root, literal, is_attribute)?),
                }),
                _ => Err(CodegenError::unsupported_default(literal, &model.name)),
            }
        }
        TypeKind::Interface(_) => Err(CodegenError::unsupported_default(literal, &model.name)),
    }
}

/// Converts a literal into an expression of a host type.
///
/// # Errors
/// Returns `CodegenError` if the literal is not a valid lexical value of the
/// type or the type has no literal form.
pub fn convert_literal(host: &HostType, literal: &str) -> Result<Expr, CodegenError> {
    match host {
        HostType::String | HostType::Uri | HostType::Object => {
            Ok(Expr::Literal(Literal::Text(literal.to_string())))
        }
        HostType::Bool => convert_bool(literal).map(|b| Expr::Literal(Literal::Bool(b))),
        HostType::U8
        | HostType::I8
        | HostType::U16
        | HostType::I16
        | HostType::U32
        | HostType::I32
        | HostType::U64
        | HostType::I64 => convert_integer(host, literal),
        HostType::Decimal => convert_decimal(literal),
        HostType::F32 | HostType::F64 => convert_float(literal),
        HostType::DateTime | HostType::DateTimeOffset | HostType::Time | HostType::Duration => {
            Ok(Expr::Parse {
                target: host.clone(),
                text: literal.to_string(),
            })
        }
        HostType::Bytes => convert_hex(literal).map(Expr::Bytes),
        HostType::QualifiedName => {
            let prefixed = literal
                .get(..3)
                .is_some_and(|p| p.eq_ignore_ascii_case("xs:"));
            if prefixed {
                Ok(Expr::QualifiedName {
                    name: literal[3..].to_string(),
                    namespace: XSD_NAMESPACE.to_string(),
                })
            } else {
                Err(CodegenError::unsupported_default(literal, "QualifiedName"))
            }
        }
        HostType::Array(_) => Err(CodegenError::unsupported_default(literal, format!("{host:?}"))),
    }
}

/// Converts a boolean literal; `"1"` and `"0"` are accepted alongside the
/// case-insensitive words.
fn convert_bool(literal: &str) -> Result<bool, CodegenError> {
    match literal {
        "1" => Ok(true),
        "0" => Ok(false),
        other if other.trim().eq_ignore_ascii_case("true") => Ok(true),
        other if other.trim().eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(CodegenError::invalid_literal(literal, "boolean")),
    }
}

fn convert_integer(host: &HostType, literal: &str) -> Result<Expr, CodegenError> {
    let trimmed = literal.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let value: i128 = digits
        .parse()
        .map_err(|_| CodegenError::invalid_literal(literal, format!("{host:?}")))?;
    match host.integer_range() {
        Some((min, max)) if value >= min && value <= max => Ok(Expr::Literal(Literal::Int(value))),
        _ => Err(CodegenError::invalid_literal(literal, format!("{host:?}"))),
    }
}

fn convert_decimal(literal: &str) -> Result<Expr, CodegenError> {
    let trimmed = literal.trim();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let valid = !(int_part.is_empty() && frac_part.is_empty())
        && int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.chars().all(|c| c.is_ascii_digit());
    if !valid {
        return Err(CodegenError::invalid_literal(literal, "decimal"));
    }
    let canonical = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Ok(Expr::Literal(Literal::Decimal(canonical.to_string())))
}

fn convert_float(literal: &str) -> Result<Expr, CodegenError> {
    let trimmed = literal.trim();
    match trimmed {
        "INF" | "-INF" | "NaN" => Ok(Expr::Literal(Literal::Float(trimmed.to_string()))),
        _ if trimmed.parse::<f64>().is_ok_and(f64::is_finite) => {
            Ok(Expr::Literal(Literal::Float(trimmed.to_string())))
        }
        _ => Err(CodegenError::invalid_literal(literal, "floating point")),
    }
}

/// Parses paired hex digits.
fn convert_hex(literal: &str) -> Result<Vec<u8>, CodegenError> {
    let bytes = literal.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(CodegenError::invalid_literal(literal, "hex-encoded bytes"));
    }
    bytes
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| CodegenError::invalid_literal(literal, "hex-encoded bytes"))
        })
        .collect()
}
