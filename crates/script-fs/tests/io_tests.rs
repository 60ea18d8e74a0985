use script_fs::{Encoding, NormalizedPath, ReadOptions, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_open_lines_streams_file_lines() {
    let temp = TempDir::new().unwrap();
    let file_path = NormalizedPath::new(temp.path().join("script.py"));
    fs::write(file_path.to_native(), "# /// script\n# ///\nprint('hi')").unwrap();

    let lines: Vec<String> = io::open_lines(&file_path, &ReadOptions::default())
        .unwrap()
        .map(|l| l.unwrap())
        .collect();

    assert_eq!(lines, vec!["# /// script\n", "# ///\n", "print('hi')"]);
}

#[test]
fn test_read_text_matches_file_contents() {
    let temp = TempDir::new().unwrap();
    let file_path = NormalizedPath::new(temp.path().join("script.py"));
    let content = "# comment\r\nimport os\n";
    fs::write(file_path.to_native(), content).unwrap();

    assert_eq!(io::read_text(&file_path, &ReadOptions::default()).unwrap(), content);
}

#[test]
fn test_read_text_latin1() {
    let temp = TempDir::new().unwrap();
    let file_path = NormalizedPath::new(temp.path().join("legacy.py"));
    fs::write(file_path.to_native(), b"# caf\xe9\n").unwrap();

    let options = ReadOptions::new().with_encoding(Encoding::Latin1);
    assert_eq!(io::read_text(&file_path, &options).unwrap(), "# caf\u{e9}\n");
}

#[test]
fn test_read_text_utf8_sig_drops_bom() {
    let temp = TempDir::new().unwrap();
    let file_path = NormalizedPath::new(temp.path().join("bom.py"));
    fs::write(file_path.to_native(), "\u{feff}# /// script\n").unwrap();

    let options = ReadOptions::new().with_encoding(Encoding::Utf8Sig);
    assert_eq!(io::read_text(&file_path, &options).unwrap(), "# /// script\n");
}

#[test]
fn test_max_bytes_allows_small_files() {
    let temp = TempDir::new().unwrap();
    let file_path = NormalizedPath::new(temp.path().join("small.py"));
    fs::write(file_path.to_native(), "x = 1\n").unwrap();

    let options = ReadOptions::new().with_max_bytes(6);
    assert_eq!(io::read_text(&file_path, &options).unwrap(), "x = 1\n");
}
