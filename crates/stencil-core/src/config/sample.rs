//! Sample template written into a freshly created library

use crate::error::ConfigError;
use crate::templates::MANIFEST_FILE;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name of the sample template inside the library root
pub const SAMPLE_TEMPLATE_DIR: &str = "html";

const MANIFEST: &str = r#"name: HTML
description: Barebones HTML project with JavaScript and CSS
tokens:
  - name: TITLE
    default: Hello world
pre_message: This is just a barebones HTML project.
post_message: Go into the new project directory and open 'index.html' in a browser.
ignore:
  - .DS_Store
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>${TITLE}</title>
    <link rel="stylesheet" href="styles/main.css">
  </head>
  <body>
    <script type="text/javascript" src="src/main.js"></script>
  </body>
</html>
"#;

const MAIN_JS: &str = r#"const heading = document.createElement("h1");
heading.innerText = "${TITLE}";
document.body.appendChild(heading);
"#;

const MAIN_CSS: &str = r#"h1 {
  font-family: Arial;
  font-size: 24px;
}
"#;

const FILES: &[(&str, &str)] = &[
    (MANIFEST_FILE, MANIFEST),
    ("index.html", INDEX_HTML),
    ("src/main.js", MAIN_JS),
    ("styles/main.css", MAIN_CSS),
];

/// Write the sample template under `templates_dir`, returning its directory
pub fn write_sample_template(templates_dir: &Path) -> Result<PathBuf, ConfigError> {
    let root = templates_dir.join(SAMPLE_TEMPLATE_DIR);

    for (relative, content) in FILES {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::io("create", parent))?;
        }
        fs::write(&path, content).map_err(ConfigError::io("write", &path))?;
    }

    Ok(root)
}
