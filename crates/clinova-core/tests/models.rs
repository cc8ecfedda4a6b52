//! Wire-contract tests for the domain models.

use jiff::civil::date;
use serde_json::json;

use clinova_core::models::booking::BookingRequest;
use clinova_core::models::diagnostic::{Diagnostic, NewDiagnostic};
use clinova_core::models::session::{Session, SessionStatus};
use clinova_core::models::therapist::{TherapistType, distinct_specialties, filter_directory};
use clinova_core::models::user::{Role, UserProfile};
use clinova_core::schedule::{ReservedSlot, WeeklyAvailability};

fn therapist_profile(name: &str, specialty: Option<&str>) -> UserProfile {
    serde_json::from_value(json!({
        "uid": format!("uid-{name}"),
        "nombre": name,
        "apellido": "Rivas",
        "correo": format!("{name}@clinova.test"),
        "rol": 4,
        "tipo_terapeuta": specialty,
    }))
    .expect("profile fixture should parse")
}

#[test]
fn role_decodes_from_wire_codes() {
    assert_eq!(Role::from_code(1).unwrap(), Role::Admin);
    assert_eq!(Role::from_code(4).unwrap(), Role::Therapist);
    assert_eq!(Role::from_code(6).unwrap(), Role::Patient);
}

#[test]
fn unknown_role_code_is_an_error_not_a_fallthrough() {
    assert!(Role::from_code(0).is_err());
    assert!(Role::from_code(2).is_err());
    assert!(Role::from_code(255).is_err());

    let result: Result<UserProfile, _> = serde_json::from_value(json!({
        "uid": "u1",
        "nombre": "Ana",
        "correo": "ana@clinova.test",
        "rol": 9,
    }));
    assert!(result.is_err());
}

#[test]
fn role_serializes_back_to_its_code() {
    assert_eq!(serde_json::to_value(Role::Therapist).unwrap(), json!(4));
    assert_eq!(serde_json::to_value(Role::Patient).unwrap(), json!(6));
}

#[test]
fn profile_parses_backend_field_names_and_defaults() {
    let profile: UserProfile = serde_json::from_value(json!({
        "uid": "u1",
        "nombre": "Ana",
        "correo": "ana@clinova.test",
        "rol": 6,
    }))
    .unwrap();

    assert_eq!(profile.first_name, "Ana");
    assert_eq!(profile.last_name, "");
    assert_eq!(profile.role, Role::Patient);
    assert!(profile.phone.is_none());
    assert!(profile.therapist_type.is_none());
    assert_eq!(profile.full_name(), "Ana");
}

#[test]
fn session_parses_wire_timestamps_without_seconds() {
    let session: Session = serde_json::from_value(json!({
        "session_id": "s1",
        "terapeuta_id": "t1",
        "paciente_id": "p1",
        "fecha": "2025-08-05",
        "hora_inicio": "2025-08-05T08:00",
        "hora_final": "2025-08-05T09:00",
        "duracion": 60,
        "motivo": "initial consult",
        "estado": "pendiente",
    }))
    .unwrap();

    assert_eq!(session.date, date(2025, 8, 5));
    assert_eq!(session.starts_at.hour(), 8);
    assert_eq!(session.status, SessionStatus::Pending);
    assert!(session.is_pending());
}

#[test]
fn session_status_round_trips_spanish_wire_names() {
    for (value, status) in [
        ("pendiente", SessionStatus::Pending),
        ("confirmada", SessionStatus::Confirmed),
        ("rechazada", SessionStatus::Rejected),
        ("completada", SessionStatus::Completed),
    ] {
        let parsed: SessionStatus = serde_json::from_value(json!(value)).unwrap();
        assert_eq!(parsed, status);
        assert_eq!(serde_json::to_value(status).unwrap(), json!(value));
    }
}

#[test]
fn weekly_availability_defaults_missing_days_to_empty_rows() {
    let weekly: WeeklyAvailability = serde_json::from_value(json!({
        "monday": [
            { "bloque": 1, "activado": true },
        ],
    }))
    .unwrap();

    assert_eq!(weekly.monday.len(), 1);
    assert!(weekly.sunday.is_empty());
}

#[test]
fn reserved_slot_parses_wire_names() {
    let slot: ReservedSlot =
        serde_json::from_value(json!({ "dia": "tuesday", "bloque": 3 })).unwrap();
    assert_eq!(slot.day, "tuesday");
    assert_eq!(slot.block, 3);
}

#[test]
fn booking_request_derives_timestamps_from_the_block() {
    let request =
        BookingRequest::new("t1", "p1", date(2025, 8, 5), 1, "first visit").unwrap();
    assert_eq!(request.starts_at, "2025-08-05T08:00");
    assert_eq!(request.ends_at, "2025-08-05T09:00");
    assert_eq!(request.day, "tuesday");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["terapeuta_id"], json!("t1"));
    assert_eq!(value["paciente_id"], json!("p1"));
    assert_eq!(value["fecha"], json!("2025-08-05"));
    assert_eq!(value["motivo"], json!("first visit"));
    assert_eq!(value["dia"], json!("tuesday"));
    assert_eq!(value["bloque"], json!(1));
}

#[test]
fn booking_request_rejects_out_of_range_blocks() {
    assert!(BookingRequest::new("t1", "p1", date(2025, 8, 5), 0, "x").is_err());
    assert!(BookingRequest::new("t1", "p1", date(2025, 8, 5), 13, "x").is_err());
}

#[test]
fn new_diagnostic_flattens_onto_the_wire() {
    let payload = NewDiagnostic {
        session_id: "s1".to_string(),
        diagnostic: Diagnostic {
            therapist_note: "note".to_string(),
            diagnosis: "dx".to_string(),
            recommended_treatment: "tx".to_string(),
            emotional_state_start: "anxious".to_string(),
            emotional_state_end: "calm".to_string(),
        },
    };

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["session_id"], json!("s1"));
    assert_eq!(value["nota_terapeuta"], json!("note"));
    assert_eq!(value["estado_emocional_final"], json!("calm"));
}

#[test]
fn diagnostic_completeness_requires_every_field() {
    let mut diagnostic = Diagnostic {
        therapist_note: "note".to_string(),
        diagnosis: "dx".to_string(),
        recommended_treatment: "tx".to_string(),
        emotional_state_start: "anxious".to_string(),
        emotional_state_end: "calm".to_string(),
    };
    assert!(diagnostic.is_complete());

    diagnostic.recommended_treatment = "   ".to_string();
    assert!(!diagnostic.is_complete());
}

#[test]
fn therapist_type_parses_catalog_entries() {
    let entry: TherapistType = serde_json::from_value(json!({
        "_id": "tt1",
        "nombre": "Cognitive Behavioral",
        "tipo": "clinical",
    }))
    .unwrap();
    assert_eq!(entry.name, "Cognitive Behavioral");
    assert_eq!(entry.category, "clinical");
}

#[test]
fn directory_filter_matches_name_and_specialty() {
    let therapists = vec![
        therapist_profile("Ana", Some("Cognitive Behavioral")),
        therapist_profile("Bruno", Some("Family")),
        therapist_profile("Carla", None),
    ];

    let by_name = filter_directory(&therapists, "bru", None);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].first_name, "Bruno");

    let by_specialty = filter_directory(&therapists, "", Some("Cognitive Behavioral"));
    assert_eq!(by_specialty.len(), 1);
    assert_eq!(by_specialty[0].first_name, "Ana");

    assert_eq!(filter_directory(&therapists, "", None).len(), 3);
}

#[test]
fn distinct_specialties_are_sorted_and_deduplicated() {
    let therapists = vec![
        therapist_profile("Ana", Some("Family")),
        therapist_profile("Bruno", Some("Cognitive Behavioral")),
        therapist_profile("Carla", Some("Family")),
        therapist_profile("Dana", None),
    ];
    assert_eq!(
        distinct_specialties(&therapists),
        vec!["Cognitive Behavioral".to_string(), "Family".to_string()]
    );
}
