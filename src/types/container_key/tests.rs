use super::*;

#[test]
fn container_key_normal_usage() {
    let key_str = "uid-0a1b2c3d";
    let key = ContainerKey::try_from(key_str).unwrap();
    assert_eq!(key.as_str(), key_str);

    let bytes = <ContainerKey as redb::Value>::as_bytes(&key);
    let key_from_bytes = <ContainerKey as redb::Value>::from_bytes(bytes);
    assert_eq!(key, key_from_bytes);
}

#[test]
fn container_key_rejects_empty_string() {
    let result = ContainerKey::try_from("");
    result.unwrap_err();
}

#[test]
fn container_key_rejects_whitespace_string() {
    let result = ContainerKey::try_from("   ");
    result.unwrap_err();
}

#[test]
fn container_key_rejects_too_long_string() {
    let long_string = "a".repeat(MAX_CONTAINER_KEY_LENGTH + 1);
    let result = ContainerKey::try_from(long_string.as_str());
    result.unwrap_err();
}

#[test]
fn container_key_ordering() {
    const KEYS: [&str; 4] = ["a", "b", "a-1", "apple"];

    for l in KEYS.iter() {
        for r in KEYS.iter() {
            let key_l = ContainerKey::try_from(*l).unwrap();
            let key_r = ContainerKey::try_from(*r).unwrap();
            let expected_ordering = l.cmp(r);
            assert_eq!(
                key_l.cmp(&key_r),
                expected_ordering,
                "comparing '{}' and '{}'",
                l,
                r
            );
        }
    }
}
