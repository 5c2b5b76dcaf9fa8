use super::*;
use tempfile::TempDir;

#[test]
fn tuning_defaults() {
    let tuning = StoreTuning::default();
    assert_eq!(tuning.random_draw_interval, 4000);
    assert!(tuning.validate().is_empty());
}

#[test]
fn tuning_rejects_zero_interval() {
    let tuning = StoreTuning {
        random_draw_interval: 0,
    };
    let errors = tuning.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("random_draw_interval"));
}

#[test]
fn tuning_load_missing_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let tuning = StoreTuning::load(&StoreTuning::path(temp_dir.path())).unwrap();
    assert_eq!(tuning, StoreTuning::default());
}

#[test]
fn tuning_save_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = StoreTuning::path(temp_dir.path());

    let tuning = StoreTuning {
        random_draw_interval: 128,
    };
    tuning.save(&path).unwrap();

    let loaded = StoreTuning::load(&path).unwrap();
    assert_eq!(loaded, tuning);
}

#[test]
fn config_load_reads_tuning_file() {
    let temp_dir = TempDir::new().unwrap();
    let tuning = StoreTuning {
        random_draw_interval: 64,
    };
    tuning.save(&StoreTuning::path(temp_dir.path())).unwrap();

    let config = Config::load(temp_dir.path()).unwrap();
    assert_eq!(config.tuning, tuning);
    assert_eq!(config.base_path, temp_dir.path());
}

#[test]
fn config_load_without_tuning_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load(temp_dir.path()).unwrap();
    assert_eq!(config.tuning, StoreTuning::default());
}

#[test]
fn scope_db_path_nests_under_scope() {
    let config = Config::new("/data/archives");
    let scope = ScopeId::try_from("site-main").unwrap();

    assert_eq!(
        config.scope_db_path(&scope),
        PathBuf::from("/data/archives/site-main/arca.redb")
    );
    assert_eq!(config.db_path(), PathBuf::from("/data/archives/arca.redb"));
}
