//! Example driving the engine the way a host toolchain would.
//!
//! Run with: `cargo run --example synthesize`

use brickforge::prelude::*;

fn named(package: &str, name: &str) -> NamedType {
    NamedType::new(ClassId::top_level(FqName::new(package), Name::new(name)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let person = ClassId::top_level(FqName::new("com.example"), Name::new("Person"));
    let mut def = TypeDef::new(person.clone());
    def.mark_buildable();
    def.set_has_companion(true);

    let mut ctor = CtorDef::new();
    ctor.add_param(ParamDef::new(Name::new("name"), named("kotlin", "String")));
    ctor.add_param(ParamDef::new(
        Name::new("nickname"),
        named("kotlin", "String").as_nullable(),
    ));
    ctor.add_param(ParamDef::new(Name::new("age"), named("kotlin", "Int")));
    def.set_primary_constructor(ctor);

    // Options arrive as key=value pairs, e.g. `enableJavaSetters=true`.
    let mut options = SynthesisOptions::default();
    for arg in std::env::args().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            options.apply(key, value)?;
        }
    }

    let index = SymbolIndex::from_defs(vec![def]);
    validate_index(&index, options.enable_java_setters)?;
    let engine = SynthesisEngine::new(index, options);

    println!("Declarations synthesized for {person}:");
    for symbol in synthesize_companions(&engine, &person) {
        println!("  {symbol}");
    }

    // The evaluation harness gives the declarations operational meaning.
    let schema = engine.resolve_schema(&person).expect("Person resolves");
    let instance = build_with(schema, |builder| {
        builder.set(&Name::new("name"), "Ada".into()).unwrap();
        builder.set(&Name::new("age"), 36i64.into()).unwrap();
    })?;

    println!("Built instance:");
    for (field, value) in instance.values() {
        println!("  {field} = {value}");
    }

    Ok(())
}
