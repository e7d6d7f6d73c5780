use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use stencil_core::templates::{
    list_templates, load_template, materialize, LoadPolicy, ResolvedProject, TokenValues,
    MANIFEST_FILE,
};
use walkdir::WalkDir;

/// Relative paths of everything below `root`, directories marked with a trailing slash
fn tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let rel = entry.path().strip_prefix(root).unwrap();
            let rel = rel.to_string_lossy().replace('\\', "/");
            if entry.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect()
}

fn write(path: PathBuf, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn library_with_web_template(root: &Path) -> PathBuf {
    let template = root.join("web");
    write(
        template.join(MANIFEST_FILE),
        "name: Web\ndescription: site\ntokens:\n  - name: TITLE\nignore:\n  - node_modules\n",
    );
    write(template.join("index.html"), "<title>${TITLE}</title>");
    write(template.join("src").join("app").join("main.js"), "console.log('${TITLE}');");
    write(template.join("src").join("app").join("node_modules").join("keep.txt"), "nested");
    write(template.join("styles").join("main.css"), "h1 {}");
    write(template.join("node_modules").join("dep").join("index.js"), "ignored");
    fs::create_dir_all(template.join("empty")).unwrap();
    template
}

#[test]
fn reproduces_nested_tree_minus_manifest_and_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    let template_dir = library_with_web_template(&tmp.path().join("library"));
    let manifest = load_template(&template_dir).unwrap();

    let dest = tmp.path().join("out").join("site");
    let values: TokenValues = [("TITLE", "My App")].into_iter().collect();
    let project = ResolvedProject::new(manifest, dest.clone(), values);
    let written = materialize(&project).unwrap();

    let expected: BTreeSet<String> = tree(&template_dir)
        .into_iter()
        .filter(|p| p != MANIFEST_FILE && !p.starts_with("node_modules/"))
        .collect();
    assert_eq!(tree(&dest), expected);
    assert_eq!(written.len(), 4);

    // Ignore applies to the top level only
    assert!(dest.join("src/app/node_modules/keep.txt").is_file());
    assert!(!dest.join("node_modules").exists());

    assert_eq!(
        fs::read_to_string(dest.join("index.html")).unwrap(),
        "<title>My App</title>"
    );
    assert_eq!(
        fs::read_to_string(dest.join("src/app/main.js")).unwrap(),
        "console.log('My App');"
    );
}

#[test]
fn path_tokens_apply_at_every_level() {
    let tmp = tempfile::tempdir().unwrap();
    let template = tmp.path().join("library").join("crate");
    write(
        template.join(MANIFEST_FILE),
        "name: Crate\ntokens:\n  - name: MODULE\n    is_path: true\n",
    );
    write(
        template.join("src").join("%MODULE%").join("%MODULE%.rs"),
        "// ${MODULE} in ${PROJECT_DIR}",
    );
    write(template.join("%PROJECT_DIR%.config"), "path=${PROJECT_PATH}");

    let manifest = load_template(&template).unwrap();
    let dest = tmp.path().join("myapp");
    let values: TokenValues = [("MODULE", "parser")].into_iter().collect();
    materialize(&ResolvedProject::new(manifest, dest.clone(), values)).unwrap();

    assert_eq!(
        fs::read_to_string(dest.join("src/parser/parser.rs")).unwrap(),
        "// parser in myapp"
    );
    assert_eq!(
        fs::read_to_string(dest.join("myapp.config")).unwrap(),
        format!("path={}", dest.display())
    );
}

#[test]
fn existing_destination_left_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let template_dir = library_with_web_template(&tmp.path().join("library"));
    let manifest = load_template(&template_dir).unwrap();

    let dest = tmp.path().join("existing");
    write(dest.join("index.html"), "original");
    let before = tree(&dest);

    let project = ResolvedProject::new(manifest, dest.clone(), TokenValues::new());
    assert!(materialize(&project).is_err());

    assert_eq!(tree(&dest), before);
    assert_eq!(fs::read_to_string(dest.join("index.html")).unwrap(), "original");
}

#[test]
fn empty_library_lists_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(list_templates(tmp.path(), LoadPolicy::Skip).unwrap().is_empty());
    assert!(list_templates(tmp.path(), LoadPolicy::Fail).unwrap().is_empty());
}
