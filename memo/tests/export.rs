use memopad_memo::export::write_export;
use memopad_memo::types::Memo;
use memopad_memo::types::UNTITLED_LABEL;
use pretty_assertions::assert_eq;

#[test]
fn export_writes_title_and_body_to_a_title_derived_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut memo = Memo::new(1);
    memo.title = "Meeting notes".to_string();
    memo.content = "agenda\nactions".to_string();

    let path = write_export(&memo, dir.path()).unwrap();
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("Meeting notes.txt"));
    let payload = std::fs::read_to_string(&path).unwrap();
    assert_eq!(payload, "Title: Meeting notes\n\nagenda\nactions");
}

#[test]
fn blank_title_exports_under_the_untitled_label() {
    let dir = tempfile::tempdir().unwrap();
    let mut memo = Memo::new(1);
    memo.title.clear();
    memo.content = "body".to_string();

    let path = write_export(&memo, dir.path()).unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some(format!("{UNTITLED_LABEL}.txt").as_str())
    );
    let payload = std::fs::read_to_string(&path).unwrap();
    assert!(payload.contains(UNTITLED_LABEL));
    assert!(payload.ends_with("\n\nbody"));
}
