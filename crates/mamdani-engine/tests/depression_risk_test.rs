use mamdani_core::InferenceError;
use mamdani_engine::presets::depression_risk::{APPETITE, ENERGY, MOOD, RISK, SOCIAL};
use mamdani_engine::presets::{depression_risk_system, RiskAssessment, RiskBand};

fn inputs(mood: f64, energy: f64, appetite: f64, social: f64) -> [(&'static str, f64); 4] {
    [(MOOD, mood), (ENERGY, energy), (APPETITE, appetite), (SOCIAL, social)]
}

#[test]
fn all_low_wellbeing_is_high_risk() {
    let system = depression_risk_system().unwrap();
    let assessment = RiskAssessment::assess(&system, &inputs(0.0, 0.0, -5.0, 0.0)).unwrap();

    assert_eq!(assessment.band, RiskBand::High);
    assert!((assessment.score - 260.0 / 3.0).abs() < 1e-9);
}

#[test]
fn all_high_wellbeing_is_low_risk() {
    let system = depression_risk_system().unwrap();
    let assessment = RiskAssessment::assess(&system, &inputs(10.0, 10.0, 0.0, 10.0)).unwrap();

    assert_eq!(assessment.band, RiskBand::Low);
    assert!((assessment.score - 40.0 / 3.0).abs() < 1e-9);
}

#[test]
fn middling_inputs_are_medium_risk() {
    let system = depression_risk_system().unwrap();
    let assessment = RiskAssessment::assess(&system, &inputs(5.0, 5.0, 0.0, 5.0)).unwrap();

    assert_eq!(assessment.band, RiskBand::Medium);
    assert!((assessment.score - 50.0).abs() < 1e-9);
}

#[test]
fn every_input_is_required() {
    let system = depression_risk_system().unwrap();
    let partial = [(MOOD, 3.0), (ENERGY, 3.0), (SOCIAL, 3.0)];
    assert_eq!(
        system.compute(&partial).unwrap_err(),
        InferenceError::MissingInput(APPETITE.to_string())
    );
}

#[test]
fn scores_stay_inside_the_risk_universe() {
    let system = depression_risk_system().unwrap();
    let batch: Vec<_> = (0..=10)
        .flat_map(|mood| (-5..=5).map(move |appetite| inputs(mood as f64, 2.0, appetite as f64, 8.0)))
        .collect();

    for result in system.compute_batch(&batch) {
        match result {
            Ok(output) => {
                let score = output.output(RISK).unwrap();
                assert!((0.0..=100.0).contains(&score), "score = {score}");
            }
            Err(e) => assert!(matches!(e, InferenceError::EmptyAggregate(_))),
        }
    }
}
