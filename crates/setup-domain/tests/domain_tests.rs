use std::str::FromStr;

use setup_domain::{AdminAccount, AppEnv, DatabaseKind, DatabaseSettings, DomainError, EnvConfig, InstallProfile, SQLITE_DATABASE_PATH};

fn admin() -> AdminAccount {
    AdminAccount::new("admin", "s3cret", "s3cret").unwrap()
}

#[test]
fn admin_account_requires_username_and_password() {
    let err = AdminAccount::new("", "pw", "pw").unwrap_err();
    assert_eq!(err, DomainError::ValidationError("Username and password are required".into()));
    let err = AdminAccount::new("admin", "", "").unwrap_err();
    assert_eq!(err, DomainError::ValidationError("Username and password are required".into()));
}

#[test]
fn admin_account_rejects_mismatched_confirmation() {
    let err = AdminAccount::new("admin", "pw1", "pw2").unwrap_err();
    assert_eq!(err, DomainError::ValidationError("Passwords do not match".into()));
}

#[test]
fn networked_profile_requires_connection_fields() {
    let mut db = DatabaseSettings::default();
    db.host = String::new();
    let err = InstallProfile::new(admin(), db, AppEnv::Production, "http://localhost").unwrap_err();
    assert_eq!(err,
               DomainError::ValidationError("All database connection fields are required".into()));
}

#[test]
fn sqlite_profile_ignores_connection_fields() {
    let mut db = DatabaseSettings::sqlite();
    db.host = String::new();
    db.user = String::new();
    // SQLite no pide datos de conexión, aunque estén vacíos.
    assert!(InstallProfile::new(admin(), db, AppEnv::Production, "http://localhost").is_ok());
}

#[test]
fn default_ports_follow_engine() {
    assert_eq!(DatabaseKind::Mysql.default_port(), Some(3306));
    assert_eq!(DatabaseKind::Postgresql.default_port(), Some(5432));
    assert_eq!(DatabaseKind::Sqlite.default_port(), None);
    assert_eq!(DatabaseKind::from_str("postgresql").unwrap(), DatabaseKind::Postgresql);
    assert!(DatabaseKind::from_str("oracle").is_err());
}

#[test]
fn env_config_for_networked_kind_carries_connection() {
    let db = DatabaseSettings::networked(DatabaseKind::Mysql, "db.example.com", "webschedulr", "root", "hunter2");
    let profile = InstallProfile::new(admin(), db, AppEnv::Development, "https://sched.example.com").unwrap();
    let config = EnvConfig::from_profile(&profile);

    assert_eq!(config.app_name, "WebSchedulr");
    assert!(config.app_debug);
    assert_eq!(config.db_connection, DatabaseKind::Mysql);
    assert_eq!(config.db_host.as_deref(), Some("db.example.com"));
    assert_eq!(config.db_port, Some(3306));
    assert_eq!(config.db_database, "webschedulr");
    assert_eq!(config.db_username.as_deref(), Some("root"));
    assert_eq!(config.db_password.as_deref(), Some("hunter2"));
    assert_eq!(config.admin_username, "admin");
}

#[test]
fn env_config_for_sqlite_uses_file_path_only() {
    let profile = InstallProfile::new(admin(), DatabaseSettings::sqlite(), AppEnv::Production, "http://localhost").unwrap();
    let config = EnvConfig::from_profile(&profile);

    assert!(!config.app_debug);
    assert_eq!(config.db_database, SQLITE_DATABASE_PATH);
    assert_eq!(config.db_host, None);
    assert_eq!(config.db_port, None);
    assert_eq!(config.db_username, None);
    assert_eq!(config.db_password, None);

    // Los campos ausentes no aparecen en la serialización.
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("DB_HOST"));
    assert!(json.contains("\"DB_DATABASE\":\"database/webschedulr.sqlite\""));
}

#[test]
fn env_config_roundtrip_and_dotenv_render() {
    let db = DatabaseSettings::networked(DatabaseKind::Postgresql, "localhost", "webschedulr", "postgres", "pw");
    let profile = InstallProfile::new(admin(), db, AppEnv::Production, "http://localhost").unwrap();
    let config = EnvConfig::from_profile(&profile);

    let json = serde_json::to_string(&config).unwrap();
    let back: EnvConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let rendered = config.to_env_string();
    assert!(rendered.contains("APP_ENV=production"));
    assert!(rendered.contains("APP_DEBUG=false"));
    assert!(rendered.contains("DB_CONNECTION=postgresql"));
    assert!(rendered.contains("DB_PORT=5432"));
    assert!(rendered.contains("ADMIN_USERNAME=admin"));
}
