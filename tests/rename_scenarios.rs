use hlpr_rename::{PlannedRename, RenameError, RenameOptions, RenameStyle, rename_recursive};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn put(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fixture(root: &Path) {
    put(root, "File One.txt", "x");
    put(root, "another-file.TXT", "y");
    put(root, "Nested Dir/Deep File.testdata.js", "z");
    put(root, "Nested Dir/Deep Directory/Inner File.md", "a");
}

#[test]
fn kebab_run_over_the_reference_tree() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let root = td.path();
    fixture(root);

    let performed = rename_recursive(root, RenameStyle::Kebab, &RenameOptions::default())?;

    assert_eq!(fs::read_to_string(root.join("file-one.txt"))?, "x");
    assert_eq!(fs::read_to_string(root.join("another-file.TXT"))?, "y");
    assert_eq!(fs::read_to_string(root.join("nested-dir/deep-file.testdata.js"))?, "z");
    assert_eq!(fs::read_to_string(root.join("nested-dir/deep-directory/inner-file.md"))?, "a");
    assert!(!root.join("Nested Dir").exists());
    assert_eq!(performed.len(), 5);
    assert!(!performed.iter().any(|p| p.from.ends_with("another-file.TXT")));
    Ok(())
}

#[test]
fn dry_run_matches_real_run_and_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let root = td.path();
    fixture(root);

    let planned = rename_recursive(root, RenameStyle::Kebab, &RenameOptions { dry_run: true })?;
    assert!(root.join("File One.txt").is_file());
    assert!(root.join("Nested Dir/Deep File.testdata.js").is_file());
    assert!(root.join("Nested Dir/Deep Directory/Inner File.md").is_file());

    let performed = rename_recursive(root, RenameStyle::Kebab, &RenameOptions::default())?;
    assert_eq!(planned, performed);
    Ok(())
}

#[test]
fn every_entry_precedes_its_ancestors_rename() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let root = td.path();
    fixture(root);
    put(root, "Nested Dir/Second Level/Third Level/Leaf File.rs", "l");

    let performed = rename_recursive(root, RenameStyle::Snake, &RenameOptions { dry_run: true })?;
    for (i, step) in performed.iter().enumerate() {
        for earlier in &performed[..i] {
            assert!(
                !step.from.starts_with(&earlier.from),
                "{} planned after its ancestor {}",
                step.from.display(),
                earlier.from.display()
            );
        }
    }
    assert!(performed.last().is_some_and(|p| p.from == root.join("Nested Dir")));
    Ok(())
}

#[test]
fn extensions_are_kept_byte_for_byte() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let root = td.path();
    for name in ["Photo Album.JPG", "backup copy.tar.GZ", "Read Me.Md"] {
        put(root, name, "");
    }

    let performed = rename_recursive(root, RenameStyle::Upper, &RenameOptions::default())?;
    let mut targets: Vec<String> = performed
        .iter()
        .map(|p| p.to.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    targets.sort();
    assert_eq!(targets, ["BACKUP_COPY.tar.GZ", "PHOTO_ALBUM.JPG", "READ_ME.Md"]);
    Ok(())
}

#[test]
fn collisions_keep_both_entries_and_report_the_requested_name() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let root = td.path();
    put(root, "file-one.txt", "existing");
    put(root, "File One.txt", "renamed");

    let performed = rename_recursive(root, RenameStyle::Kebab, &RenameOptions::default())?;

    assert_eq!(
        performed,
        vec![PlannedRename {
            from: root.join("File One.txt"),
            to: root.join("file-one.txt"),
        }]
    );
    assert_eq!(fs::read_to_string(root.join("file-one.txt"))?, "existing");
    assert_eq!(fs::read_to_string(root.join("file-one_1.txt"))?, "renamed");
    Ok(())
}

#[test]
fn case_only_renames_apply() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let root = td.path();
    put(root, "README.md", "r");
    put(root, "DOCS/GUIDE.md", "g");

    rename_recursive(root, RenameStyle::Lower, &RenameOptions::default())?;

    let mut names: Vec<String> = fs::read_dir(root)?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    names.sort();
    assert_eq!(names, ["docs", "readme.md"]);
    assert_eq!(fs::read_to_string(root.join("docs/guide.md"))?, "g");
    Ok(())
}

#[test]
fn missing_root_is_reported() {
    let td = tempdir().unwrap();
    let err = rename_recursive(&td.path().join("absent"), RenameStyle::Kebab, &RenameOptions::default())
        .unwrap_err();
    assert!(matches!(err, RenameError::RootNotFound(_)));
    assert_eq!(err.code(), "root_not_found");
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_aborts_the_run() {
    use std::os::unix::fs::PermissionsExt;

    let td = tempdir().unwrap();
    let root = td.path();
    put(root, "Locked Dir/Inner File.txt", "");
    let locked = root.join("Locked Dir");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Root ignores permission bits; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = rename_recursive(root, RenameStyle::Kebab, &RenameOptions::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
    assert!(locked.exists(), "directory must keep its name after a failed subtree");
}

#[test]
fn plan_serializes_as_from_to_pairs() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let root = td.path();
    put(root, "Some File.txt", "");

    let planned = rename_recursive(root, RenameStyle::Camel, &RenameOptions { dry_run: true })?;
    let json = serde_json::to_value(&planned)?;
    let entry = &json[0];
    assert!(entry["from"].as_str().unwrap().ends_with("Some File.txt"));
    assert!(entry["to"].as_str().unwrap().ends_with("someFile.txt"));
    Ok(())
}

#[test]
fn case_only_rename_of_a_maximal_length_name() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let root = td.path();
    let upper = format!("{}.txt", "A".repeat(240));
    put(root, &upper, "long");

    let performed = rename_recursive(root, RenameStyle::Lower, &RenameOptions::default())?;

    let lower = format!("{}.txt", "a".repeat(240));
    assert_eq!(performed.len(), 1);
    assert_eq!(fs::read_to_string(root.join(&lower))?, "long");
    assert_eq!(fs::read_dir(root)?.count(), 1);
    Ok(())
}
