use setup_domain::{AdminAccount, AppEnv, DatabaseSettings, EnvConfig, InstallProfile};
use setup_persistence::{InstallStateStore, KEY_INSTALLED};

fn sample_config() -> EnvConfig {
    let admin = AdminAccount::new("admin", "pw", "pw").unwrap();
    let profile = InstallProfile::new(admin, DatabaseSettings::sqlite(), AppEnv::Production, "http://localhost").unwrap();
    EnvConfig::from_profile(&profile)
}

#[test]
fn fresh_store_is_not_installed() {
    let dir = tempfile::tempdir().unwrap();
    let store = InstallStateStore::new(dir.path().join("state.json"));

    assert!(!store.is_installed().unwrap());
    assert_eq!(store.admin_username().unwrap(), None);
    assert!(store.db_config().unwrap().is_none());
}

#[test]
fn record_installation_persists_the_three_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = InstallStateStore::new(dir.path().join("state.json"));

    store.record_installation("admin", &sample_config()).unwrap();

    assert!(store.is_installed().unwrap());
    assert_eq!(store.admin_username().unwrap().as_deref(), Some("admin"));
    let config = store.db_config().unwrap().expect("config stored");
    assert_eq!(config, sample_config());

    // El marcador se guarda como string, no como booleano JSON.
    assert_eq!(store.get(KEY_INSTALLED).unwrap().as_deref(), Some("true"));
}

#[test]
fn reset_allows_reinstallation() {
    let dir = tempfile::tempdir().unwrap();
    let store = InstallStateStore::new(dir.path().join("state.json"));

    store.record_installation("admin", &sample_config()).unwrap();
    assert!(store.is_installed().unwrap());

    store.reset().unwrap();
    assert!(!store.is_installed().unwrap());

    // reset es idempotente aunque no haya archivo.
    store.reset().unwrap();
}

#[test]
fn write_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = InstallStateStore::new(dir.path().join("nested/deeper/state.json"));

    store.record_installation("admin", &sample_config()).unwrap();
    assert!(store.is_installed().unwrap());
}

#[test]
fn corrupt_state_file_surfaces_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = InstallStateStore::new(path);
    assert!(store.is_installed().is_err());
}
