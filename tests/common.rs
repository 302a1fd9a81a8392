// tests/common.rs

use assert_cmd::Command;
use std::fs;
use std::path::Path;

#[allow(dead_code)] // Not every test file uses every helper.
pub fn llm_context_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("llm_context"));
    cmd.env_remove("LLM_CONTEXT_HOME").env("RUST_LOG", "info");
    cmd
}

#[allow(dead_code)]
pub fn create_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[allow(dead_code)]
pub fn write_catalog(install_dir: &Path, json: &str) {
    fs::write(install_dir.join("config.json"), json).unwrap();
}

#[allow(dead_code)]
pub fn write_local_config(repo: &Path, json: &str) {
    create_file(repo, ".LLMContext/config.json", json);
}

#[allow(dead_code)]
pub fn read_dump(repo: &Path) -> String {
    fs::read_to_string(repo.join(".LLMContext").join("repository_dump.txt")).unwrap()
}
