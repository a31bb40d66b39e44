use super::*;
use crate::model::biomarker::BiomarkerKey;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_all_normal_scenario() {
    let risk = fuse(&[100.0, 14.0, 0.0, 0.0, 0.0]).unwrap();
    assert!(approx(risk.components.glucose, 0.15));
    assert_eq!(risk.components.anemia, 0.0);
    assert_eq!(risk.components.heart_failure, 0.0);
    assert_eq!(risk.components.lipid, 0.0);
    assert_eq!(risk.components.troponin, 0.0);
    assert!(approx(risk.score, 0.045));
}

#[test]
fn test_troponin_alone_contributes_tenth() {
    let base = fuse(&[100.0, 14.0, 0.0, 0.0, 0.0]).unwrap();
    let risk = fuse(&[100.0, 14.0, 0.0, 0.0, 1.0]).unwrap();
    assert_eq!(risk.components.troponin, 1.0);
    assert!(approx(risk.components.contributions()[4], 0.10));
    assert!(approx(risk.score - base.score, 0.10));
}

#[test]
fn test_severe_anemia_contributes_quarter() {
    let risk = fuse(&[70.0, 6.0, 0.0, 0.0, 0.0]).unwrap();
    assert_eq!(risk.components.anemia, 1.0);
    assert!(approx(risk.score, 0.25));
}

#[test]
fn test_negative_ntprobnp_guarded() {
    let risk = fuse(&[70.0, 14.0, -50.0, 0.0, 0.0]).unwrap();
    assert_eq!(risk.components.heart_failure, 0.0);
    assert_eq!(risk.score, 0.0);
}

#[test]
fn test_all_maxed_scores_one() {
    let risk = fuse(&[1000.0, 0.0, 1e9, 500.0, 50.0]).unwrap();
    assert!(approx(risk.score, 1.0));
}

#[test]
fn test_score_in_unit_range_over_physiological_grid() {
    for g in [40.0, 70.0, 100.0, 200.0, 400.0] {
        for hb in [4.0, 8.0, 13.0, 18.0] {
            for n in [0.0, 120.0, 500.0, 35_000.0] {
                for l in [0.0, 30.0, 100.0, 250.0] {
                    for t in [0.0, 0.04, 1.0, 50.0] {
                        let risk = fuse(&[g, hb, n, l, t]).unwrap();
                        assert!((0.0..=1.0).contains(&risk.score));
                        for c in risk.components.as_array() {
                            assert!((0.0..=1.0).contains(&c));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_non_finite_input_is_error() {
    let err = fuse(&[100.0, f64::NAN, 0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        SenseError::InvalidNumericInput {
            key: BiomarkerKey::Hemoglobin,
            ..
        }
    ));
    assert!(fuse(&[100.0, 14.0, f64::INFINITY, 0.0, 0.0]).is_err());
}

#[test]
fn test_fuse_readings_is_order_insensitive() {
    let readings = vec![
        BiomarkerReading {
            key: BiomarkerKey::Troponin,
            value: 0.3,
        },
        BiomarkerReading {
            key: BiomarkerKey::Glucose,
            value: 150.0,
        },
        BiomarkerReading {
            key: BiomarkerKey::LipoproteinA,
            value: 60.0,
        },
        BiomarkerReading {
            key: BiomarkerKey::Hemoglobin,
            value: 11.0,
        },
        BiomarkerReading {
            key: BiomarkerKey::NtProbnp,
            value: 300.0,
        },
    ];
    let a = fuse_readings(&readings).unwrap();
    let b = fuse(&[150.0, 11.0, 300.0, 60.0, 0.3]).unwrap();
    assert_eq!(a.score.to_bits(), b.score.to_bits());
}

#[test]
fn test_fuse_readings_missing_key() {
    let readings = vec![BiomarkerReading {
        key: BiomarkerKey::Glucose,
        value: 100.0,
    }];
    assert!(matches!(
        fuse_readings(&readings),
        Err(SenseError::InvalidBiomarkerOrder(_))
    ));
}

#[test]
fn test_determinism_bits() {
    let v = [123.4, 9.7, 812.0, 44.0, 0.21];
    let a = fuse(&v).unwrap();
    let b = fuse(&v).unwrap();
    assert_eq!(a.score.to_bits(), b.score.to_bits());
}
