use rational::{Rational, RationalError, parse_rational};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct TestCase {
    input: String,
    numerator: Option<i64>,
    denominator: Option<i64>,
    canonical: Option<String>,
    mixed: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    cases: Vec<TestCase>,
}

#[derive(Debug, Serialize)]
struct Summary {
    passed: usize,
    failed: usize,
    total: usize,
}

fn run_test_case(case: &TestCase) -> Result<(), String> {
    let parsed = parse_rational(&case.input);
    let expected = case.numerator.zip(case.denominator);

    match (parsed, expected) {
        (None, None) => Ok(()),
        (Some(value), None) => Err(format!(
            "\n✗ Expected rejection for input \"{}\", got {}",
            case.input, value
        )),
        (None, Some(_)) => Err(format!("\n✗ Unexpected rejection for input \"{}\"", case.input)),
        (Some(value), Some(pair)) => {
            let actual = (value.numerator(), value.denominator());
            if actual != pair {
                return Err(format!(
                    "\n✗ Mismatch for input: \"{}\"\nExpected:   {:?}\nActual:     {:?}",
                    case.input, pair, actual
                ));
            }
            if let Some(canonical) = &case.canonical {
                if &value.to_string() != canonical {
                    return Err(format!(
                        "\n✗ Canonical form of \"{}\": expected \"{}\", got \"{}\"",
                        case.input, canonical, value
                    ));
                }
            }
            if let Some(mixed) = &case.mixed {
                if &value.to_mixed_string() != mixed {
                    return Err(format!(
                        "\n✗ Mixed form of \"{}\": expected \"{}\", got \"{}\"",
                        case.input,
                        mixed,
                        value.mixed()
                    ));
                }
            }
            Ok(())
        }
    }
}

#[test]
fn test_parse_fixture() {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("parse-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

    let test_suite: TestCases = toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));

    let mut failures = Vec::new();
    for (i, case) in test_suite.cases.iter().enumerate() {
        if let Err(msg) = run_test_case(case) {
            failures.push(format!("[Case {}] {}", i + 1, msg));
        }
    }

    let summary = Summary {
        passed: test_suite.cases.len() - failures.len(),
        failed: failures.len(),
        total: test_suite.cases.len(),
    };
    let json = serde_json::to_string(&summary).unwrap();
    println!("{}", json);

    assert!(summary.total >= 24, "fixture lost cases: {}", json);
    assert!(failures.is_empty(), "{}\n{}", failures.join("\n"), json);
}

#[test]
fn test_from_str_error() {
    let err = "1 1/x".parse::<Rational>().unwrap_err();
    assert_eq!(err, RationalError::InvalidInput("1 1/x".to_string()));
    assert_eq!(err.to_string(), "invalid fraction string: '1 1/x'");
}

#[test]
fn test_parse_matches_pair_constructor() {
    for (text, n, d) in [("5/10", 5, 10), ("3 1/3", 10, 3), ("14/21", 14, 21)] {
        assert_eq!(Rational::parse(text), Some(Rational::new(n, d)));
    }
}
