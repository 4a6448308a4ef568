use sentra_core::models::{Medication, Patient, VitalSigns};

#[test]
fn patient_deserializes_with_missing_optional_fields() {
    let patient: Patient = serde_json::from_str(r#"{ "age": 72 }"#).unwrap();
    assert_eq!(patient.age, 72);
    assert!(patient.medications.is_empty());
    assert!(patient.chief_complaint.is_none());
    assert!(patient.vitals.is_none());
}

#[test]
fn patient_roundtrips() {
    let patient = Patient {
        age: 58,
        chief_complaint: Some("chest pain".to_string()),
        medications: vec![Medication {
            name: "Warfarin".to_string(),
            generic_name: None,
            dosage: Some("5 mg daily".to_string()),
            frequency: Some("qd".to_string()),
        }],
        conditions: vec!["atrial fibrillation".to_string()],
        vitals: Some(VitalSigns {
            systolic_bp: Some(150.0),
            diastolic_bp: Some(92.0),
            heart_rate: Some(88.0),
            bmi: None,
        }),
        ..Default::default()
    };

    let json = serde_json::to_string(&patient).unwrap();
    let back: Patient = serde_json::from_str(&json).unwrap();
    assert_eq!(back.age, 58);
    assert_eq!(back.medications.len(), 1);
    assert_eq!(back.medications[0].name, "Warfarin");
    assert_eq!(back.conditions, patient.conditions);
}

#[test]
fn medication_names_include_lowercased_generics() {
    let patient = Patient {
        age: 40,
        medications: vec![
            Medication {
                name: "Coumadin".to_string(),
                generic_name: Some("Warfarin".to_string()),
                ..Default::default()
            },
            Medication {
                name: "Aspirin".to_string(),
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    assert_eq!(patient.medication_names(), vec!["coumadin", "warfarin", "aspirin"]);
}
