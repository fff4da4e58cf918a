//! Integration tests for the spec compiler

use argspec_foundation::{ErrorKind, Location, TypeTag};
use argspec_language::{
    ArgumentForm, CompilerConfig, Quantifier, Requirement, SpecCompiler, compile,
};

const BASIC: &str =
    "--size,-s Int10 [--verbose,-v,--noisy] [--help,-h [String]] [--file,-f String] String String";

fn syntax_message(source: &str) -> String {
    match compile(source).unwrap_err().kind {
        ErrorKind::SpecSyntax(message) => message,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

// =============================================================================
// Declarations
// =============================================================================

#[test]
fn basic_spec_structure() {
    let spec = compile(BASIC).unwrap();
    assert_eq!(spec.options().len(), 4);
    assert_eq!(spec.rest().len(), 2);
    assert_eq!(spec.alias_count(), 9);

    let size = spec.lookup("-s").unwrap();
    assert_eq!(size.canonical_name, "--size");
    assert_eq!(size.requirement, Requirement::Required);
    assert_eq!(size.argument, ArgumentForm::Mandatory(TypeTag::Int(10)));

    let help = spec.lookup("-h").unwrap();
    assert_eq!(help.argument, ArgumentForm::Optional(TypeTag::String));

    let verbose = spec.lookup("--noisy").unwrap();
    assert_eq!(verbose.canonical_name, "--verbose");
    assert_eq!(verbose.argument, ArgumentForm::None);

    assert!(spec.rest().iter().all(|r| r.quantifier == Quantifier::One));
}

#[test]
fn every_alias_resolves_to_its_declaration() {
    let spec = compile(BASIC).unwrap();
    for node in spec.options() {
        for alias in &node.names {
            assert_eq!(spec.lookup(alias).unwrap().canonical_name, node.canonical_name);
        }
    }
    assert!(spec.lookup("--missing").is_none());
}

#[test]
fn required_options_in_declaration_order() {
    let spec = compile("-b String [-x] -a Float").unwrap();
    let names: Vec<_> = spec
        .required_options()
        .map(|node| node.canonical_name.as_str())
        .collect();
    assert_eq!(names, vec!["-b", "-a"]);
}

#[test]
fn quantifiers_on_final_rest() {
    for (suffix, expected) in [
        ("?", Quantifier::ZeroOrOne),
        ("*", Quantifier::ZeroOrMany),
        ("+", Quantifier::OneOrMany),
    ] {
        let spec = compile(&format!("String Int8{suffix}")).unwrap();
        assert_eq!(spec.rest()[1].quantifier, expected);
        assert_eq!(spec.rest()[1].tag, TypeTag::Int(8));
    }
}

// =============================================================================
// Syntax Errors
// =============================================================================

#[test]
fn quantifier_on_non_final_rest_is_rejected() {
    for source in ["String? String", "Float* Int10", "String+ String String"] {
        let err = compile(source).unwrap_err();
        assert!(err.kind.is_compile_error(), "{source}");
        assert!(matches!(err.location, Some(Location::Spec { .. })));
    }
}

#[test]
fn malformed_specs_are_rejected() {
    for source in [
        "[--verbose",
        "--size",
        "--size [Int10]",
        "[--x]]",
        "String [-v]",
        "--a,b String",
        "[-v][-x]",
    ] {
        assert!(compile(source).is_err(), "{source:?} should not compile");
    }
}

#[test]
fn error_messages_name_the_problem() {
    assert!(syntax_message("[--verbose").contains("unterminated"));
    assert!(syntax_message("String [-v]").contains("before positional"));
    assert!(syntax_message("String? String").contains("last positional"));
}

// =============================================================================
// Compiler Configuration
// =============================================================================

#[test]
fn default_config_accepts_unknown_tags_and_duplicates() {
    let spec = compile("[--path Path] [-x] [-x Float]").unwrap();
    assert_eq!(
        spec.lookup("--path").unwrap().argument.type_tag(),
        Some(&TypeTag::Unknown("Path".to_string()))
    );
    assert_eq!(
        spec.lookup("-x").unwrap().argument,
        ArgumentForm::Mandatory(TypeTag::Float)
    );
}

#[test]
fn strict_config_rejects_both() {
    let compiler = SpecCompiler::with_config(CompilerConfig::strict());
    assert!(compiler.compile("[--path Path]").is_err());
    assert!(compiler.compile("[-x] [-x Float]").is_err());
    assert!(compiler.compile(BASIC).is_ok());
}
