use std::path::PathBuf;

use stencil::loader::{LocalLoader, TemplateLoader, TemplateSource};
use tempfile::TempDir;

#[test]
fn test_template_source_from_string() {
    match TemplateSource::from_string("https://github.com/user/repo.git") {
        TemplateSource::Git(url) => assert_eq!(url, "https://github.com/user/repo.git"),
        _ => panic!("Expected Git source"),
    }

    match TemplateSource::from_string("git@github.com:user/repo.git") {
        TemplateSource::Git(url) => assert_eq!(url, "git@github.com:user/repo.git"),
        _ => panic!("Expected Git source"),
    }

    match TemplateSource::from_string("./local/path") {
        TemplateSource::FileSystem(path) => {
            assert_eq!(path, PathBuf::from("./local/path"))
        }
        _ => panic!("Expected FileSystem source"),
    }
}

#[test]
fn test_template_source_display() {
    let fs_source = TemplateSource::FileSystem(PathBuf::from("/path/to/template"));
    assert_eq!(format!("{}", fs_source), "local path: '/path/to/template'");

    let git_source = TemplateSource::Git("git@github.com:user/repo".to_string());
    assert_eq!(
        format!("{}", git_source),
        "git repository: 'git@github.com:user/repo'"
    );
}

#[test]
fn test_local_loader() {
    let temp_dir = TempDir::new().unwrap();
    let loader = LocalLoader::new(temp_dir.path());

    match loader.load() {
        Ok(path) => assert_eq!(path, temp_dir.path()),
        Err(_) => panic!("Expected successful load"),
    }
}

#[test]
fn test_local_loader_missing_path() {
    let loader = LocalLoader::new("/definitely/not/here");
    assert!(loader.load().is_err());
}
