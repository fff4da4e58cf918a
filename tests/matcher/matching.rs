//! Integration tests for argument matching

use argspec_foundation::{ErrorKind, Location, Value};
use argspec_language::compile;
use argspec_matcher::{Matcher, parse};

const BASIC: &str =
    "--size,-s Int10 [--verbose,-v,--noisy] [--help,-h [String]] [--file,-f String] String String";

fn kind(argv: &[&str]) -> ErrorKind {
    parse(BASIC, argv).unwrap_err().kind
}

// =============================================================================
// Successful Matches
// =============================================================================

#[test]
fn reference_match() {
    let result = parse(BASIC, ["-v", "-s", "5", "foo", "bar"]).unwrap();
    let options: Vec<_> = result
        .options
        .iter()
        .map(|(k, v)| (k.as_str(), v.clone()))
        .collect();
    assert_eq!(
        options,
        vec![("--size", Value::Int(5)), ("--verbose", Value::presence())]
    );
    assert_eq!(result.rest, vec![Value::from("foo"), Value::from("bar")]);
}

#[test]
fn every_option_form() {
    let result = parse(
        BASIC,
        ["--noisy", "--size", "12", "-h", "-f", "out.txt", "a", "b"],
    )
    .unwrap();
    assert!(result.is_flag_set("--verbose"));
    assert_eq!(result.get("--size"), Some(&Value::Int(12)));
    assert!(result.is_flag_set("--help"));
    assert_eq!(result.get("--file"), Some(&Value::from("out.txt")));
}

#[test]
fn unsupplied_options_are_absent() {
    let result = parse(BASIC, ["-s", "1", "a", "b"]).unwrap();
    assert_eq!(result.options.len(), 1);
    assert!(result.get("--file").is_none());
    assert!(!result.contains("--verbose"));
}

#[test]
fn one_spec_many_matches() {
    let spec = compile("[-n Int10] Float*").unwrap();
    let matcher = Matcher::new(&spec);
    assert_eq!(matcher.match_args(["1.5"]).unwrap().rest.len(), 1);
    assert_eq!(matcher.match_args(["-n", "3"]).unwrap().rest.len(), 0);
    assert!(matcher.match_args(["x"]).is_err());
    assert_eq!(matcher.match_args(["-n", "1", "2", "3"]).unwrap().rest.len(), 2);
}

// =============================================================================
// Match Errors
// =============================================================================

#[test]
fn unknown_option() {
    assert_eq!(
        kind(&["--badOptionName", "foo", "bar"]),
        ErrorKind::UnknownOption("--badOptionName".to_string())
    );
}

#[test]
fn missing_argument() {
    let err = parse("--file,-f String", ["--file"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingArgument("--file".to_string()));
}

#[test]
fn missing_required_option() {
    assert_eq!(
        kind(&["foo", "bar"]),
        ErrorKind::MissingRequiredOption("--size".to_string())
    );
}

#[test]
fn too_few_and_too_many_positionals() {
    assert!(matches!(
        kind(&["-s", "1", "foo"]),
        ErrorKind::InsufficientRestArguments { .. }
    ));
    assert_eq!(
        kind(&["-s", "1", "a", "b", "c"]),
        ErrorKind::TooManyArguments("c".to_string())
    );
}

#[test]
fn plus_needs_one_star_needs_none() {
    assert!(matches!(
        parse("String+", Vec::<String>::new()).unwrap_err().kind,
        ErrorKind::InsufficientRestArguments { .. }
    ));
    assert!(parse("String*", Vec::<String>::new()).unwrap().rest.is_empty());
}

#[test]
fn int16_rejects_letters() {
    let err = parse("Int16", ["1a"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeCoercion { .. }));
    assert_eq!(err.location, Some(Location::Argument(0)));
}

#[test]
fn errors_point_at_the_offending_argument() {
    let cases: [(&[&str], usize); 3] = [
        (&["-s", "1", "--nope"], 2),
        (&["-s", "x", "a", "b"], 1),
        (&["-s", "1", "a", "b", "c"], 4),
    ];
    for (argv, index) in cases {
        let err = parse(BASIC, argv).unwrap_err();
        assert_eq!(err.location, Some(Location::Argument(index)), "{argv:?}");
    }
}
