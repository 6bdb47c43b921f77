//! Type declaration resolution.

use refract_ast::{NameKind, TypeHint};
use refract_types::{FqsenError, ResolutionContext, Type};

/// Turn a type declaration into a [`Type`], resolving class names through
/// `ctx`.
///
/// Keywords are matched case-insensitively. A union of `null` and exactly
/// one other type collapses to a nullable type.
pub fn resolve_type(hint: &TypeHint, ctx: &ResolutionContext) -> Result<Type, FqsenError> {
    match hint {
        TypeHint::Named(name) => {
            if name.kind == NameKind::Normal && name.parts.len() == 1 {
                if let Some(keyword) = keyword_type(name.first()) {
                    return Ok(keyword);
                }
            }
            let fqsen = ctx.resolve_class_name(&name.to_code_string())?;
            Ok(Type::object(fqsen))
        }
        TypeHint::Nullable(inner) => match resolve_type(inner, ctx)? {
            already @ (Type::Nullable(_) | Type::Null | Type::Mixed) => Ok(already),
            ty => Ok(Type::nullable(ty)),
        },
        TypeHint::Union(members) => {
            let mut types = Vec::with_capacity(members.len());
            for member in members {
                let ty = resolve_type(member, ctx)?;
                if !types.contains(&ty) {
                    types.push(ty);
                }
            }
            Ok(collapse_union(types))
        }
    }
}

fn collapse_union(mut types: Vec<Type>) -> Type {
    if types.len() == 1 {
        return types.remove(0);
    }
    if types.len() == 2 {
        if let Some(null_at) = types.iter().position(|ty| *ty == Type::Null) {
            let other = types.remove(1 - null_at);
            return Type::nullable(other);
        }
    }
    Type::Compound(types)
}

fn keyword_type(word: &str) -> Option<Type> {
    let ty = match word.to_ascii_lowercase().as_str() {
        "string" => Type::String,
        "int" | "integer" => Type::Integer,
        "float" | "double" => Type::Float,
        "bool" | "boolean" | "true" | "false" => Type::Boolean,
        "array" => Type::array(),
        "callable" => Type::Callable,
        "iterable" => Type::Iterable,
        "void" => Type::Void,
        "null" => Type::Null,
        "never" => Type::Never,
        "mixed" => Type::Mixed,
        "object" => Type::Object(None),
        "resource" => Type::Resource,
        "scalar" => Type::Scalar,
        "self" => Type::Self_,
        "static" => Type::Static,
        "$this" => Type::This,
        _ => return None,
    };
    Some(ty)
}
