//! Function synthesis.
//!
//! One synthesizer per row of the routing table: `newBuilder` and `copy` on
//! the owner, `build` and the per-field mutators on the builder, and the DSL
//! entry on the companion namespace. Each produces a public, final,
//! instance-bound function except the companion entry, which binds
//! statically.

use crate::contract::CallableContract;
use crate::declarations::{Dispatch, FunctionDecl, ParamDecl, Visibility};
use brickforge_schema::naming::{to_java_setter, to_parameter_name};
use brickforge_schema::{
    CallableId, CallbackType, ClassId, Name, NamedType, TypeRef, TypeSchema,
};

fn function(
    id: CallableId,
    dispatch: Dispatch,
    params: Vec<ParamDecl>,
    return_type: NamedType,
) -> FunctionDecl {
    FunctionDecl {
        id,
        visibility: Visibility::Public,
        is_final: true,
        is_inline: false,
        dispatch,
        params,
        return_type,
        contract: None,
    }
}

/// Synthesizes `newBuilder` on the owner: no parameters, returns the builder
/// type, bound to the owner instance whose field values seed the builder.
#[must_use]
pub fn new_builder_function(owner_id: &ClassId, builder_id: &ClassId, id: CallableId) -> FunctionDecl {
    function(
        id,
        Dispatch::Instance(owner_id.clone()),
        Vec::new(),
        NamedType::new(builder_id.clone()),
    )
}

/// Synthesizes the terminal `build` on the builder: no parameters, returns
/// the owner type.
#[must_use]
pub fn build_function(builder_id: &ClassId, owner_id: &ClassId, id: CallableId) -> FunctionDecl {
    function(
        id,
        Dispatch::Instance(builder_id.clone()),
        Vec::new(),
        NamedType::new(owner_id.clone()),
    )
}

/// Synthesizes the fluent mutator for one schema field: one parameter with
/// the field's name and original (non-widened) type, returning the builder
/// for chaining. Returns `None` when the name matches no field.
#[must_use]
pub fn fluent_setter(
    schema: &TypeSchema,
    builder_id: &ClassId,
    id: CallableId,
) -> Option<FunctionDecl> {
    let field = schema.field(&id.name)?;
    let param = ParamDecl::new(field.name.clone(), TypeRef::Named(field.ty.clone()));
    Some(function(
        id,
        Dispatch::Instance(builder_id.clone()),
        vec![param],
        NamedType::new(builder_id.clone()),
    ))
}

/// Synthesizes the Java-style `setX` mutator: the requested name is stripped
/// of its `set` prefix and lower-camel-cased to locate the field; the
/// parameter carries that name and the field's original type. Returns `None`
/// when the stripped name matches no field.
#[must_use]
pub fn java_setter(
    schema: &TypeSchema,
    builder_id: &ClassId,
    id: CallableId,
) -> Option<FunctionDecl> {
    let field = schema
        .fields
        .iter()
        .find(|field| to_java_setter(&field.name) == id.name)?;
    let param = ParamDecl::new(to_parameter_name(&id.name), TypeRef::Named(field.ty.clone()));
    Some(function(
        id,
        Dispatch::Instance(builder_id.clone()),
        vec![param],
        NamedType::new(builder_id.clone()),
    ))
}

/// Synthesizes `copy` on the owner: one single-use callback parameter
/// `transform` over the builder, returning the owner type. Inline, with an
/// exactly-once contract on the callback.
#[must_use]
pub fn copy_function(owner_id: &ClassId, builder_id: &ClassId, id: CallableId) -> FunctionDecl {
    let callback = CallbackType::new(NamedType::new(builder_id.clone()));
    let param = ParamDecl::new(Name::new("transform"), TypeRef::Callback(callback));
    FunctionDecl {
        is_inline: true,
        contract: Some(CallableContract::calls_exactly_once(0)),
        ..function(
            id,
            Dispatch::Instance(owner_id.clone()),
            vec![param],
            NamedType::new(owner_id.clone()),
        )
    }
}

/// Synthesizes the DSL entry on the owner's companion namespace: one
/// single-use callback parameter `builder` over the builder type, returning
/// the owner type. Inline, statically bound, with an exactly-once contract.
#[must_use]
pub fn dsl_entry_function(
    companion_id: &ClassId,
    owner_id: &ClassId,
    builder_id: &ClassId,
    id: CallableId,
) -> FunctionDecl {
    let callback = CallbackType::new(NamedType::new(builder_id.clone()));
    let param = ParamDecl::new(Name::new("builder"), TypeRef::Callback(callback));
    FunctionDecl {
        is_inline: true,
        contract: Some(CallableContract::calls_exactly_once(0)),
        ..function(
            id,
            Dispatch::Static(companion_id.clone()),
            vec![param],
            NamedType::new(owner_id.clone()),
        )
    }
}
