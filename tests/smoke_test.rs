use spectree::{convert_to_spec, convert_to_tree, split_document, Error};
use std::fs;
use tempfile::tempdir;

#[test]
fn it_round_trips_a_project() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();

    // Build a small project tree.
    let project = root.join("project");
    fs::create_dir_all(project.join("src"))?;
    let main_content = "fn main() {\n    println!(\"Hello!\");\n}";
    fs::write(project.join("src/main.rs"), main_content)?;
    let lib_content = "pub fn add(a: i32, b: i32) -> i32 {\n    a + b\n}";
    fs::write(project.join("src/lib.rs"), lib_content)?;
    fs::write(project.join("README.md"), "# Round trip")?;

    // Package, then reconstruct elsewhere.
    let spec_file = root.join("project.spec");
    let packaged = convert_to_spec(&project, &spec_file)?;
    assert_eq!(packaged, 3);

    let restored = root.join("restored");
    let created = convert_to_tree(&spec_file, &restored)?;
    assert_eq!(created, 3);

    assert_eq!(fs::read_to_string(restored.join("src/main.rs"))?, main_content);
    assert_eq!(fs::read_to_string(restored.join("src/lib.rs"))?, lib_content);
    assert_eq!(fs::read_to_string(restored.join("README.md"))?, "# Round trip");

    Ok(())
}

#[test]
fn it_packages_deterministically() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();

    let project = root.join("project");
    fs::create_dir_all(project.join("b"))?;
    fs::write(project.join("b/two.txt"), "two")?;
    fs::write(project.join("one.txt"), "one")?;
    fs::write(project.join("three.txt"), "three")?;

    let first = root.join("first.spec");
    let second = root.join("second.spec");
    convert_to_spec(&project, &first)?;
    convert_to_spec(&project, &second)?;

    assert_eq!(fs::read(&first)?, fs::read(&second)?);

    Ok(())
}

#[test]
fn it_enforces_the_exclusion_set() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let project = temp_dir.path().join("project");

    fs::create_dir_all(project.join(".git"))?;
    fs::write(project.join(".git/config"), "[core]")?;
    fs::create_dir_all(project.join("node_modules"))?;
    fs::write(project.join("node_modules/x.js"), "1")?;
    fs::write(project.join("a.log"), "log")?;
    fs::write(project.join(".env.example"), "KEY=")?;
    fs::write(project.join("kept.txt"), "kept")?;

    let spec_file = temp_dir.path().join("out.spec");
    convert_to_spec(&project, &spec_file)?;

    let document = fs::read_to_string(&spec_file)?;
    assert!(document.contains(".env.example"));
    assert!(document.contains("kept.txt"));
    assert!(!document.contains(".git"));
    assert!(!document.contains("node_modules"));
    assert!(!document.contains("a.log"));

    Ok(())
}

#[test]
fn it_materializes_nothing_from_an_empty_document() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();

    let spec_file = root.join("empty.spec");
    fs::write(&spec_file, "just prose, no separators\n")?;

    let out_dir = root.join("out");
    let created = convert_to_tree(&spec_file, &out_dir)?;

    assert_eq!(created, 0);
    // No entries means no directories were created either.
    assert!(!out_dir.exists());

    Ok(())
}

#[test]
fn it_rejects_a_missing_spec_file() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("nope.spec");
    let out_dir = temp_dir.path().join("out");

    let err = convert_to_tree(&missing, &out_dir).unwrap_err();
    assert!(matches!(err, Error::SpecFileNotFound(_)));
    assert!(!out_dir.exists());
}

#[test]
fn it_rejects_a_missing_project_dir() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("no-such-dir");
    let out_file = temp_dir.path().join("out.spec");

    let err = convert_to_spec(&missing, &out_file).unwrap_err();
    assert!(matches!(err, Error::ProjectDirNotFound(_)));
    assert!(!out_file.exists());
}

#[test]
fn it_parses_externally_authored_quoted_blocks() -> anyhow::Result<()> {
    let document = "\
# ==================== config/app.toml ====================
\"\"\"
[app]
name = \"demo\"
\"\"\"

# ==================== scripts/run.sh ====================
'''#!/bin/sh
echo ok'''
";
    let mapping = split_document(document)?;
    assert_eq!(mapping.get("config/app.toml"), Some("[app]\nname = \"demo\""));
    assert_eq!(mapping.get("scripts/run.sh"), Some("#!/bin/sh\necho ok"));
    Ok(())
}
