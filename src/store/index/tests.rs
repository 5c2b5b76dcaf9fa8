use super::*;

mod common {
    use super::*;
    use tempfile::TempDir;

    pub(super) const CONTAINERS: ContainerIndex = ContainerIndex::new("test_by_container");
    pub(super) const DATES: DateIndex = DateIndex::new("test_by_date");

    pub(super) fn create_test_db() -> (redb::Database, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db = redb::Database::create(temp_dir.path().join("index.redb")).unwrap();

        let write_txn = db.begin_write().unwrap();
        CONTAINERS.init(&write_txn).unwrap();
        DATES.init(&write_txn).unwrap();
        write_txn.commit().unwrap();

        (db, temp_dir)
    }

    pub(super) fn make_container(s: &str) -> ContainerKey {
        ContainerKey::try_from(s).unwrap()
    }
}

mod container {
    use super::common::{CONTAINERS, create_test_db, make_container};
    use crate::types::RecordId;
    use redb::ReadableDatabase;

    #[test]
    fn test_bucket_scan_is_isolated() {
        let (db, _temp) = create_test_db();
        let c1 = make_container("uid-one");
        let c2 = make_container("uid-two");

        let write_txn = db.begin_write().unwrap();
        CONTAINERS.insert(&write_txn, &c1, RecordId::new(3)).unwrap();
        CONTAINERS.insert(&write_txn, &c1, RecordId::new(-8)).unwrap();
        CONTAINERS.insert(&write_txn, &c2, RecordId::new(5)).unwrap();
        write_txn.commit().unwrap();

        let read_txn = db.begin_read().unwrap();
        let ids = CONTAINERS.ids(&read_txn, &c1).unwrap();
        assert_eq!(ids, vec![RecordId::new(-8), RecordId::new(3)]);

        let ids = CONTAINERS.ids(&read_txn, &c2).unwrap();
        assert_eq!(ids, vec![RecordId::new(5)]);

        let ids = CONTAINERS
            .ids(&read_txn, &make_container("uid-none"))
            .unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_remove_reports_presence() {
        let (db, _temp) = create_test_db();
        let container = make_container("uid-one");

        let write_txn = db.begin_write().unwrap();
        CONTAINERS
            .insert(&write_txn, &container, RecordId::new(1))
            .unwrap();
        assert!(
            CONTAINERS
                .remove(&write_txn, &container, RecordId::new(1))
                .unwrap()
        );
        assert!(
            !CONTAINERS
                .remove(&write_txn, &container, RecordId::new(1))
                .unwrap()
        );
        write_txn.commit().unwrap();
    }
}

mod date {
    use super::common::{DATES, create_test_db};
    use crate::types::RecordId;
    use redb::ReadableDatabase;

    #[test]
    fn test_scan_is_strictly_before_cutoff() {
        let (db, _temp) = create_test_db();

        let write_txn = db.begin_write().unwrap();
        DATES.insert(&write_txn, 100, RecordId::new(1)).unwrap();
        DATES.insert(&write_txn, 200, RecordId::new(2)).unwrap();
        DATES.insert(&write_txn, 300, RecordId::new(3)).unwrap();
        write_txn.commit().unwrap();

        let read_txn = db.begin_read().unwrap();

        // The cutoff day itself is excluded.
        let ids = DATES.ids_before(&read_txn, 200).unwrap();
        assert_eq!(ids, vec![RecordId::new(1)]);

        let ids = DATES.ids_before(&read_txn, 301).unwrap();
        assert_eq!(
            ids,
            vec![RecordId::new(1), RecordId::new(2), RecordId::new(3)]
        );

        let ids = DATES.ids_before(&read_txn, 100).unwrap();
        assert!(ids.is_empty());
    }
}

mod reset {
    use super::common::{CONTAINERS, DATES, create_test_db, make_container};
    use crate::types::RecordId;
    use redb::ReadableDatabase;

    #[test]
    fn test_reset_empties_index() {
        let (db, _temp) = create_test_db();
        let container = make_container("uid-one");

        let write_txn = db.begin_write().unwrap();
        CONTAINERS
            .insert(&write_txn, &container, RecordId::new(1))
            .unwrap();
        DATES.insert(&write_txn, 42, RecordId::new(1)).unwrap();
        write_txn.commit().unwrap();

        let write_txn = db.begin_write().unwrap();
        CONTAINERS.reset(&write_txn).unwrap();
        DATES.reset(&write_txn).unwrap();
        write_txn.commit().unwrap();

        let read_txn = db.begin_read().unwrap();
        assert!(CONTAINERS.ids(&read_txn, &container).unwrap().is_empty());
        assert!(DATES.ids_before(&read_txn, u64::MAX).unwrap().is_empty());
    }
}
