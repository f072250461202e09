//! Primitive types, literal kinds and the literal/type compatibility table.
//!
//! Ra7ma has no type system beyond its primitive types. The only static type check the front end performs is
//! "does this literal fit the variable it is assigned to", which is answered by [`accepts_literal`].
//!
//! ## Notes
//! - Compatibility is decided per **family**, not per type: a signed integer literal may initialize an `Imw` and an
//!   unsigned one may initialize a `SIMw`.
//! - [`PrimitiveType::Unknown`] accepts every literal so that a failed lookup upstream never cascades into a second
//!   diagnostic.
//!
//! ## Examples
//! ```rust
//! use ra7ma_core::lang::types::{accepts_literal, LiteralKind, PrimitiveType};
//!
//! assert!(accepts_literal(PrimitiveType::Integer, LiteralKind::SignedInteger));
//! assert!(!accepts_literal(PrimitiveType::Integer, LiteralKind::Float));
//! ```

use std::fmt;

/// The closed set of types a symbol can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Integer,
    SignedInteger,
    Character,
    Text,
    Float,
    SignedFloat,
    Void,
    Unknown,
}

/// The kind of a literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    SignedInteger,
    Float,
    SignedFloat,
    Character,
    Text,
}

/// Groups of mutually assignable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    Integral,
    Floating,
    Character,
    Text,
    Void,
    Unknown,
}

impl PrimitiveType {
    pub const fn family(self) -> TypeFamily {
        match self {
            PrimitiveType::Integer | PrimitiveType::SignedInteger => TypeFamily::Integral,
            PrimitiveType::Float | PrimitiveType::SignedFloat => TypeFamily::Floating,
            PrimitiveType::Character => TypeFamily::Character,
            PrimitiveType::Text => TypeFamily::Text,
            PrimitiveType::Void => TypeFamily::Void,
            PrimitiveType::Unknown => TypeFamily::Unknown,
        }
    }

    /// Human-readable name used in diagnostics and symbol dumps.
    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Integer => "Integer",
            PrimitiveType::SignedInteger => "SignedInteger",
            PrimitiveType::Character => "Character",
            PrimitiveType::Text => "String",
            PrimitiveType::Float => "Float",
            PrimitiveType::SignedFloat => "SignedFloat",
            PrimitiveType::Void => "Void",
            PrimitiveType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LiteralKind {
    pub const fn family(self) -> TypeFamily {
        match self {
            LiteralKind::Integer | LiteralKind::SignedInteger => TypeFamily::Integral,
            LiteralKind::Float | LiteralKind::SignedFloat => TypeFamily::Floating,
            LiteralKind::Character => TypeFamily::Character,
            LiteralKind::Text => TypeFamily::Text,
        }
    }

    /// The numeric literal kind for a sign/fraction combination.
    pub const fn numeric(signed: bool, float: bool) -> Self {
        match (signed, float) {
            (false, false) => LiteralKind::Integer,
            (true, false) => LiteralKind::SignedInteger,
            (false, true) => LiteralKind::Float,
            (true, true) => LiteralKind::SignedFloat,
        }
    }

    /// The type a variable would get if declared from this literal.
    pub const fn natural_type(self) -> PrimitiveType {
        match self {
            LiteralKind::Integer => PrimitiveType::Integer,
            LiteralKind::SignedInteger => PrimitiveType::SignedInteger,
            LiteralKind::Float => PrimitiveType::Float,
            LiteralKind::SignedFloat => PrimitiveType::SignedFloat,
            LiteralKind::Character => PrimitiveType::Character,
            LiteralKind::Text => PrimitiveType::Text,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LiteralKind::Integer => "integer",
            LiteralKind::SignedInteger => "signed integer",
            LiteralKind::Float => "float",
            LiteralKind::SignedFloat => "signed float",
            LiteralKind::Character => "character",
            LiteralKind::Text => "string",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a literal of kind `literal` may be assigned to a variable of type `target`.
pub const fn accepts_literal(target: PrimitiveType, literal: LiteralKind) -> bool {
    match (target.family(), literal.family()) {
        (TypeFamily::Unknown, _) => true,
        (TypeFamily::Void, _) => false,
        (TypeFamily::Integral, TypeFamily::Integral) => true,
        (TypeFamily::Floating, TypeFamily::Floating) => true,
        (TypeFamily::Character, TypeFamily::Character) => true,
        (TypeFamily::Text, TypeFamily::Text) => true,
        (
            TypeFamily::Integral | TypeFamily::Floating | TypeFamily::Character | TypeFamily::Text,
            TypeFamily::Integral
            | TypeFamily::Floating
            | TypeFamily::Character
            | TypeFamily::Text
            | TypeFamily::Void
            | TypeFamily::Unknown,
        ) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [PrimitiveType; 8] = [
        PrimitiveType::Integer,
        PrimitiveType::SignedInteger,
        PrimitiveType::Character,
        PrimitiveType::Text,
        PrimitiveType::Float,
        PrimitiveType::SignedFloat,
        PrimitiveType::Void,
        PrimitiveType::Unknown,
    ];

    const ALL_LITERALS: [LiteralKind; 6] = [
        LiteralKind::Integer,
        LiteralKind::SignedInteger,
        LiteralKind::Float,
        LiteralKind::SignedFloat,
        LiteralKind::Character,
        LiteralKind::Text,
    ];

    #[test]
    fn integral_family_accepts_both_signs() {
        for target in [PrimitiveType::Integer, PrimitiveType::SignedInteger] {
            assert!(accepts_literal(target, LiteralKind::Integer));
            assert!(accepts_literal(target, LiteralKind::SignedInteger));
            assert!(!accepts_literal(target, LiteralKind::Float));
            assert!(!accepts_literal(target, LiteralKind::Character));
        }
    }

    #[test]
    fn void_rejects_and_unknown_accepts_everything() {
        for literal in ALL_LITERALS {
            assert!(!accepts_literal(PrimitiveType::Void, literal));
            assert!(accepts_literal(PrimitiveType::Unknown, literal));
        }
    }

    #[test]
    fn literal_accepted_by_its_natural_type() {
        for literal in ALL_LITERALS {
            assert!(accepts_literal(literal.natural_type(), literal), "{literal:?}");
        }
    }

    #[test]
    fn accepted_pairs_share_a_family() {
        for target in ALL_TYPES {
            for literal in ALL_LITERALS {
                if target.family() != TypeFamily::Unknown && accepts_literal(target, literal) {
                    assert_eq!(target.family(), literal.family(), "{target:?} <- {literal:?}");
                }
            }
        }
    }

    #[test]
    fn numeric_kind_from_sign_and_fraction() {
        assert_eq!(LiteralKind::numeric(true, false), LiteralKind::SignedInteger);
        assert_eq!(LiteralKind::numeric(false, true), LiteralKind::Float);
    }
}
