use super::*;
use crate::model::biomarker::BIOMARKER_ORDER;
use crate::model::roi::HsvMean;

fn stat(s: f64) -> ColorStat {
    ColorStat::Mean(HsvMean { h: 0.0, s, v: 200.0 })
}

#[test]
fn test_zero_saturation_is_normal_level() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    for key in BIOMARKER_ORDER {
        let v = mapper.map_to_value(&stat(0.0), key);
        assert!((v - profile.get(key).normal).abs() < 1e-9, "{key}");
    }
}

#[test]
fn test_full_saturation_is_high_level() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    for key in BIOMARKER_ORDER {
        let v = mapper.map_to_value(&stat(255.0), key);
        assert!((v - profile.get(key).high).abs() < 1e-9, "{key}");
    }
}

#[test]
fn test_saturation_is_clamped() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    let over = mapper.map_to_value(&stat(400.0), BiomarkerKey::Glucose);
    let under = mapper.map_to_value(&stat(-20.0), BiomarkerKey::Glucose);
    assert_eq!(over, 200.0);
    assert_eq!(under, 100.0);
}

#[test]
fn test_monotonic_by_direction() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    for key in BIOMARKER_ORDER {
        let mut prev = mapper.map_to_value(&stat(0.0), key);
        for s in 1..=255 {
            let v = mapper.map_to_value(&stat(s as f64), key);
            match profile.get(key).direction {
                Direction::Increasing => assert!(v >= prev, "{key} at s={s}"),
                Direction::Inverse => assert!(v <= prev, "{key} at s={s}"),
            }
            prev = v;
        }
    }
}

#[test]
fn test_hemoglobin_inverse_midpoint() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    let v = mapper.map_to_value(&stat(127.5), BiomarkerKey::Hemoglobin);
    assert_eq!(v, 10.5);
}

#[test]
fn test_empty_region_returns_normal_exactly() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    for key in BIOMARKER_ORDER {
        assert_eq!(
            mapper.map_to_value(&ColorStat::Empty, key),
            profile.get(key).normal
        );
    }
}

#[test]
fn test_rounds_to_three_decimals() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    let v = mapper.map_to_value(&stat(1.0), BiomarkerKey::Troponin);
    assert_eq!(v, 0.044);
}

#[test]
fn test_nan_saturation_degrades_to_baseline() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    assert_eq!(mapper.map_to_value(&stat(f64::NAN), BiomarkerKey::LipoproteinA), 30.0);
}

#[test]
fn test_unknown_named_key_is_rejected() {
    let profile = ThresholdProfile::sense_v1();
    let mapper = ColorimetricMapper::new(&profile);
    let err = mapper.map_named(&stat(100.0), "ferritin").unwrap_err();
    assert!(matches!(err, SenseError::UnknownBiomarkerKey(_)));
    assert_eq!(mapper.map_named(&stat(0.0), "lpa").unwrap(), 30.0);
}
