use mamdani_core::errors::*;

#[test]
fn definition_errors_carry_distinct_codes() {
    let cases: Vec<(DefinitionError, &str)> = vec![
        (
            DefinitionError::InvalidShape {
                kind: "triangular",
                reason: "a > b".to_string(),
            },
            "INVALID_SHAPE",
        ),
        (
            DefinitionError::DuplicateTerm {
                variable: "mood".to_string(),
                term: "low".to_string(),
            },
            "DUPLICATE_TERM",
        ),
        (
            DefinitionError::Domain {
                variable: "mood".to_string(),
                term: "low".to_string(),
                low: -1.0,
                high: 5.0,
                min: 0.0,
                max: 10.0,
            },
            "DOMAIN_ERROR",
        ),
        (
            DefinitionError::UnknownVariable("sleep".to_string()),
            "UNKNOWN_VARIABLE",
        ),
        (
            DefinitionError::UnknownTerm {
                variable: "mood".to_string(),
                term: "ecstatic".to_string(),
            },
            "UNKNOWN_TERM",
        ),
        (
            DefinitionError::RoleMismatch {
                variable: "risk".to_string(),
                expected: "input",
                actual: "output",
            },
            "ROLE_MISMATCH",
        ),
    ];

    for (error, code) in cases {
        assert_eq!(error.error_code(), code);
    }
}

#[test]
fn inference_errors_carry_distinct_codes() {
    assert_eq!(
        InferenceError::MissingInput("mood".to_string()).error_code(),
        "MISSING_INPUT"
    );
    assert_eq!(
        InferenceError::EmptyAggregate("risk".to_string()).error_code(),
        "EMPTY_AGGREGATE"
    );
}

#[test]
fn caller_mistakes_are_distinct_from_empty_aggregates() {
    let cases = [
        (
            InferenceError::UniverseMismatch {
                variable: "risk".to_string(),
                reason: "101 samples for 11 points".to_string(),
            },
            "UNIVERSE_MISMATCH",
        ),
        (InferenceError::UnknownOutput("riks".to_string()), "UNKNOWN_OUTPUT"),
        (InferenceError::MissingFallback("risk".to_string()), "MISSING_FALLBACK"),
    ];
    for (error, code) in cases {
        assert_eq!(error.error_code(), code);
        assert_ne!(error.error_code(), "EMPTY_AGGREGATE");
    }
}

#[test]
fn coded_string_prefixes_the_code() {
    let err = InferenceError::EmptyAggregate("risk".to_string());
    assert_eq!(
        err.coded_string(),
        "[EMPTY_AGGREGATE] aggregated membership for risk is zero everywhere; no rule fired"
    );
}

#[test]
fn top_level_error_delegates_code() {
    let err: MamdaniError = InferenceError::MissingInput("energy".to_string()).into();
    assert_eq!(err.error_code(), "MISSING_INPUT");
    assert!(err.to_string().starts_with("Inference error:"));

    let err: MamdaniError = DefinitionError::EmptyAntecedent.into();
    assert_eq!(err.error_code(), "EMPTY_ANTECEDENT");

    let err: MamdaniError = ConfigError::FileNotFound {
        path: "mamdani.toml".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
