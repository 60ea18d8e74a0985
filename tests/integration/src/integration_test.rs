//! End-to-end tests across the workspace
//!
//! Exercises the complete flow: read a script from disk -> extract blocks ->
//! decode the pyproject block -> parse run requirements.

use script_blocks::{Error as BlocksError, ScriptMetadata};
use script_fs::{Encoding, ReadOptions};
use script_pyproject::PyprojectMetadata;
use script_test_utils::dir::ScriptDir;
use script_test_utils::logging;
use script_test_utils::scripts::{self, Expected};
use std::thread;

#[test]
fn test_every_fixture_parses_the_same_from_disk_and_memory() {
    logging::capture();
    let dir = ScriptDir::new();

    for fixture in scripts::fixtures() {
        let path = dir.write_script(&format!("{}.py", fixture.name), fixture.source);

        let from_string = ScriptMetadata::from_string(fixture.source);
        let from_path = ScriptMetadata::from_path_default(&path);

        match (fixture.expected, from_string, from_path) {
            (Expected::Blocks { .. }, Ok(a), Ok(b)) => assert_eq!(a, b, "{}", fixture.name),
            (
                Expected::Duplicate { .. },
                Err(BlocksError::DuplicateBlock { name: a, line: la }),
                Err(BlocksError::DuplicateBlock { name: b, line: lb }),
            ) => {
                assert_eq!(a, b, "{}", fixture.name);
                assert_eq!(la, lb, "{}", fixture.name);
            }
            (_, a, b) => panic!("{}: string gave {:?}, path gave {:?}", fixture.name, a, b),
        }
    }
}

#[test]
fn test_full_flow_from_disk() {
    let dir = ScriptDir::new();
    let path = dir.write_script("pep-723-sample.py", scripts::PEP_EXAMPLE);

    let meta = PyprojectMetadata::from_path(&path, &ReadOptions::default()).unwrap();
    assert!(meta.warnings().is_empty());

    let run = meta.run_requirements().unwrap();
    assert_eq!(run.requires_python.unwrap().to_string(), ">=3.11");
    let names: Vec<String> = run.dependencies.iter().map(|d| d.name.to_string()).collect();
    assert_eq!(names, vec!["requests", "rich"]);
}

#[test]
fn test_bom_prefixed_script_with_utf8_sig() {
    let dir = ScriptDir::new();
    let source = format!("\u{feff}{}", scripts::SEPARATE_BLOCKS);
    let path = dir.write_script("bom.py", &source);

    // Plain UTF-8 keeps the mark, so the first opener is not recognised
    let plain = ScriptMetadata::from_path_default(&path).unwrap();
    assert!(!plain.has_block("pyproject"));
    assert!(plain.has_block("script"));

    let options = ReadOptions::new().with_encoding(Encoding::Utf8Sig);
    let with_sig = ScriptMetadata::from_path(&path, &options).unwrap();
    assert_eq!(with_sig, ScriptMetadata::from_string(scripts::SEPARATE_BLOCKS).unwrap());
}

#[test]
fn test_read_options_from_host_config() {
    #[derive(serde::Deserialize)]
    struct HostConfig {
        source: ReadOptions,
    }

    let config: HostConfig = toml::from_str(
        r#"
[source]
encoding = "latin-1"
"#,
    )
    .unwrap();

    let dir = ScriptDir::new();
    let path = dir.write_bytes("legacy.py", b"# /// script\n# name = \"caf\xe9\"\n# ///\n");
    let meta = ScriptMetadata::from_path(&path, &config.source).unwrap();
    assert_eq!(meta.block("script"), Some("name = \"caf\u{e9}\"\n"));
}

#[test]
fn test_parallel_parses_do_not_interfere() {
    logging::capture();
    let handles: Vec<_> = scripts::fixtures()
        .into_iter()
        .map(|fixture| {
            thread::spawn(move || {
                let results: Vec<String> = (0..50)
                    .map(|_| format!("{:?}", ScriptMetadata::from_string(fixture.source)))
                    .collect();
                (fixture.name, results)
            })
        })
        .collect();

    for handle in handles {
        let (name, results) = handle.join().unwrap();
        assert!(
            results.windows(2).all(|w| w[0] == w[1]),
            "{name}: results differ between runs"
        );
    }
}
