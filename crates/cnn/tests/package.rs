use cnn::package::PackageInfo;

#[test]
fn metadata_comes_from_the_manifest() {
    let info = PackageInfo::current();
    assert_eq!(info.name, "cnn");
    assert_eq!(info.version, "0.0.0");
    assert_eq!(info.authors, "abhishekpatel16");
    assert_eq!(info.description, "A small package for a CNN image classification app");
    assert!(info.repository.starts_with("https://github.com/abhishekpatel16/"));
}

#[test]
fn bug_tracker_points_at_issues() {
    let info = PackageInfo::current();
    assert_eq!(info.bug_tracker(), format!("{}/issues", info.repository));
    assert!(info.to_string().ends_with(&format!("Bug Tracker: {}", info.bug_tracker())));
}
