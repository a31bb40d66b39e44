use super::*;

#[test]
fn test_canonical_order_indices() {
    for (i, key) in BIOMARKER_ORDER.iter().enumerate() {
        assert_eq!(key.index(), i);
    }
}

#[test]
fn test_parse_ids_and_aliases() {
    assert_eq!("glucose".parse::<BiomarkerKey>().unwrap(), BiomarkerKey::Glucose);
    assert_eq!("HB".parse::<BiomarkerKey>().unwrap(), BiomarkerKey::Hemoglobin);
    assert_eq!("ntprobnp".parse::<BiomarkerKey>().unwrap(), BiomarkerKey::NtProbnp);
    assert_eq!(" lpa ".parse::<BiomarkerKey>().unwrap(), BiomarkerKey::LipoproteinA);
    for key in BIOMARKER_ORDER {
        assert_eq!(key.id().parse::<BiomarkerKey>().unwrap(), key);
    }
}

#[test]
fn test_unknown_key_rejected() {
    let err = "cholesterol".parse::<BiomarkerKey>().unwrap_err();
    assert!(matches!(err, SenseError::UnknownBiomarkerKey(ref k) if k == "cholesterol"));
}

#[test]
fn test_validate_order_permutation() {
    let order = [
        BiomarkerKey::Troponin,
        BiomarkerKey::Glucose,
        BiomarkerKey::Hemoglobin,
        BiomarkerKey::NtProbnp,
        BiomarkerKey::LipoproteinA,
    ];
    assert_eq!(validate_order(&order).unwrap(), order);
}

#[test]
fn test_validate_order_rejects_duplicates_and_length() {
    let dup = [BiomarkerKey::Glucose; 5];
    assert!(matches!(
        validate_order(&dup),
        Err(SenseError::InvalidBiomarkerOrder(_))
    ));
    assert!(matches!(
        validate_order(&BIOMARKER_ORDER[..4]),
        Err(SenseError::InvalidBiomarkerOrder(_))
    ));
}

#[test]
fn test_parse_order_text() {
    let order = parse_order("glucose,hb,ntprobnp,lpa,troponin").unwrap();
    assert_eq!(order, BIOMARKER_ORDER);
    assert!(matches!(
        parse_order("glucose,hb,ntprobnp,lpa,ck-mb"),
        Err(SenseError::UnknownBiomarkerKey(_))
    ));
}

#[test]
fn test_serde_ids_match_display() {
    for key in BIOMARKER_ORDER {
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", key.id()));
    }
}
