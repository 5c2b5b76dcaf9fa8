use super::*;

#[test]
fn record_id_round_trip() {
    for raw in [i32::MIN, -1, 0, 1, 4000, i32::MAX] {
        let id = RecordId::new(raw);
        let bytes = <RecordId as redb::Value>::as_bytes(&id);
        let id_from_bytes = <RecordId as redb::Value>::from_bytes(&bytes);
        assert_eq!(id, id_from_bytes);
    }
}

#[test]
fn record_id_ordering() {
    const RAWS: [i32; 5] = [i32::MIN, -1, 0, 1, i32::MAX];

    for l in RAWS.iter() {
        for r in RAWS.iter() {
            let bytes_l = <RecordId as redb::Value>::as_bytes(&RecordId::new(*l));
            let bytes_r = <RecordId as redb::Value>::as_bytes(&RecordId::new(*r));
            assert_eq!(
                <RecordId as redb::Key>::compare(&bytes_l, &bytes_r),
                l.cmp(r),
                "comparing {} and {}",
                l,
                r
            );
        }
    }
}
