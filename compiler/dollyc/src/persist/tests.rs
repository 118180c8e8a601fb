use super::*;
use pretty_assertions::assert_eq;

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn writes_only_on_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Order.g.cs");

    assert_eq!(write_if_changed(&path, "one", false).unwrap(), WriteStatus::Written);
    assert_eq!(write_if_changed(&path, "one", false).unwrap(), WriteStatus::Unchanged);
    assert_eq!(write_if_changed(&path, "two", false).unwrap(), WriteStatus::Written);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn dry_run_leaves_disk_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Order.g.cs");

    assert_eq!(write_if_changed(&path, "one", true).unwrap(), WriteStatus::WouldWrite);
    assert!(!path.exists());
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn persist_all_creates_directory_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");
    let sources = [
        GeneratedSource::new("A.g.cs", "a"),
        GeneratedSource::new("B.g.cs", "b"),
    ];

    let first = persist_all(&out, &sources, false).unwrap();
    assert_eq!(
        first,
        PersistSummary {
            written: 2,
            ..PersistSummary::default()
        }
    );

    let second = persist_all(&out, &sources, false).unwrap();
    assert_eq!(
        second,
        PersistSummary {
            unchanged: 2,
            ..PersistSummary::default()
        }
    );
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn unwritable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "not a directory").unwrap();

    let sources = [GeneratedSource::new("A.g.cs", "a")];
    let err = persist_all(&blocker.join("nested"), &sources, false).err();
    assert!(err.is_some_and(|(path, _)| path.starts_with(&blocker)));
}

#[test]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn non_utf8_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Order.g.cs");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    assert_eq!(write_if_changed(&path, "one", false).unwrap(), WriteStatus::Written);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one");
}
