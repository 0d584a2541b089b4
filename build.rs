use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("help_text.rs");

    let help_text = fs::read_to_string("docs/HELP.md").unwrap_or_default();

    let generated = format!("pub const HELP_TEXT: &str = r#\"{}\"#;", help_text);
    fs::write(dest_path, generated).unwrap();

    println!("cargo:rerun-if-changed=docs/HELP.md");
}
