//! Tests for the config migration path.

use serde_json::json;

use clinova_desktop::config::{ClinovaConfig, config_info, migrate};

#[test]
fn v0_config_gains_project_id_and_a_version_stamp() {
    let on_disk = json!({
        "api_base_url": "https://api.clinova.example",
        "identity_api_key": "AIzaSyExampleExampleExample",
        "created_at": "2025-08-05T12:00:00Z",
    });

    let migrated = migrate(on_disk, 0).expect("migration should succeed");
    assert_eq!(migrated["config_version"], json!(1));
    assert_eq!(migrated["project_id"], json!(""));

    let config: ClinovaConfig =
        serde_json::from_value(migrated).expect("migrated config should deserialize");
    assert_eq!(config.config_version, 1);
    assert!(config.project_id.is_empty());
}

#[test]
fn a_current_config_passes_through_unchanged() {
    let on_disk = json!({
        "config_version": 1,
        "api_base_url": "https://api.clinova.example",
        "identity_api_key": "AIzaSyExampleExampleExample",
        "project_id": "clinova-prod",
        "created_at": "2025-08-05T12:00:00Z",
    });

    let migrated = migrate(on_disk.clone(), 1).expect("migration should succeed");
    assert_eq!(migrated, on_disk);
}

#[test]
fn a_newer_config_version_is_refused() {
    assert!(migrate(json!({}), 99).is_err());
}

#[test]
fn config_info_redacts_the_api_key() {
    let config = ClinovaConfig {
        config_version: 1,
        api_base_url: "https://api.clinova.example".to_string(),
        identity_api_key: "AIzaSyExampleExampleExample".to_string(),
        project_id: "clinova-prod".to_string(),
        created_at: "2025-08-05T12:00:00Z".parse().unwrap(),
    };

    let info = config_info(&config);
    assert_eq!(info.api_key_hint, "AIza...mple");
    assert!(!info.api_key_hint.contains("Example"));
}
