//! Naming conventions for synthesized members.
//!
//! Every identifier the engine synthesizes is derived deterministically from
//! the owner class and its field names by the rules in this module.

use crate::ident::{ClassId, Name};

/// Short name of the synthesized nested builder class.
pub const BUILDER_CLASS_NAME: &str = "Builder";

/// Short name of a companion namespace.
pub const COMPANION_CLASS_NAME: &str = "Companion";

/// Name of the builder entry point on the owner type.
pub const NEW_BUILDER_FUN_NAME: &str = "newBuilder";

/// Name of the terminal operation on the builder, and of the companion DSL
/// entry point.
pub const BUILD_FUN_NAME: &str = "build";

/// Name of the functional-update operation on the owner type.
pub const COPY_FUN_NAME: &str = "copy";

/// Constructor pseudo-name used in callable enumeration.
pub const INIT_NAME: &str = "<init>";

/// Derives the builder class identifier for an owner: the owner's namespace,
/// nested name `Builder`. Total; collisions are reported by
/// [`crate::validation::validate_index`], not here.
#[must_use]
pub fn builder_class_id(owner: &ClassId) -> ClassId {
    owner.nested(Name::new(BUILDER_CLASS_NAME))
}

/// Derives the companion class identifier for an owner.
#[must_use]
pub fn companion_class_id(owner: &ClassId) -> ClassId {
    owner.nested(Name::new(COMPANION_CLASS_NAME))
}

/// Converts a field name to its Java-setter name: `age` becomes `setAge`.
#[must_use]
pub fn to_java_setter(name: &Name) -> Name {
    let mut result = String::with_capacity(name.as_str().len() + 3);
    result.push_str("set");
    let mut chars = name.as_str().chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.push_str(chars.as_str());
    }
    Name::new(result)
}

/// Converts a Java-setter name back to its parameter name: strips the leading
/// `set` and lowercases the first remaining letter, so `setAge` becomes
/// `age`. Names without the `set` prefix are returned unchanged.
#[must_use]
pub fn to_parameter_name(name: &Name) -> Name {
    let Some(stripped) = name.as_str().strip_prefix("set") else {
        return name.clone();
    };
    let mut chars = stripped.chars();
    let Some(first) = chars.next() else {
        return name.clone();
    };
    let mut result = String::with_capacity(stripped.len());
    result.extend(first.to_lowercase());
    result.push_str(chars.as_str());
    Name::new(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::FqName;

    #[test]
    fn test_builder_class_id() {
        let person = ClassId::top_level(FqName::new("com.example"), Name::new("Person"));
        let builder = builder_class_id(&person);
        assert_eq!(builder.to_string(), "com.example.Person.Builder");
        assert_eq!(builder.outer().unwrap(), person);
    }

    #[test]
    fn test_companion_class_id() {
        let person = ClassId::top_level(FqName::new("com.example"), Name::new("Person"));
        assert_eq!(
            companion_class_id(&person).to_string(),
            "com.example.Person.Companion"
        );
    }

    #[test]
    fn test_to_java_setter() {
        assert_eq!(to_java_setter(&Name::new("age")).as_str(), "setAge");
        assert_eq!(to_java_setter(&Name::new("name")).as_str(), "setName");
        assert_eq!(
            to_java_setter(&Name::new("nickName")).as_str(),
            "setNickName"
        );
    }

    #[test]
    fn test_to_parameter_name() {
        assert_eq!(to_parameter_name(&Name::new("setAge")).as_str(), "age");
        assert_eq!(
            to_parameter_name(&Name::new("setNickName")).as_str(),
            "nickName"
        );
    }

    #[test]
    fn test_to_parameter_name_without_prefix() {
        assert_eq!(to_parameter_name(&Name::new("age")).as_str(), "age");
        assert_eq!(to_parameter_name(&Name::new("set")).as_str(), "set");
    }

    #[test]
    fn test_setter_round_trip() {
        let field = Name::new("emailAddress");
        assert_eq!(to_parameter_name(&to_java_setter(&field)), field);
    }
}
