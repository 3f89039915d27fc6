use glob::glob;
use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

fn read(path: &Path) -> String {
    let mut contents = String::new();
    File::open(path).unwrap().read_to_string(&mut contents).unwrap();
    contents
}

fn file_pairs(base_str: &str, pair_extension: &str) -> Vec<(PathBuf, PathBuf, String)> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let base = root.join(Path::new(base_str));

    glob(&format!("{}/**/*{}", base.to_str().unwrap(), pair_extension)).unwrap()
        .filter_map(|entry| {
            let out_path = entry.unwrap();
            let source_path = PathBuf::from(&out_path.to_str().unwrap().replace(pair_extension, ".js"));
            if source_path.exists() {
                let name = source_path.strip_prefix(&root).unwrap().to_str().unwrap().to_string();
                Some((out_path, source_path, name))
            } else {
                None
            }
        }).collect()
}

#[test]
fn trans_fixtures() {
    let pairs = file_pairs("tests/trans-fixtures", ".out.js");
    assert!(!pairs.is_empty(), "no fixtures found");

    for (out_path, source_path, name) in pairs {
        let expected = read(&out_path);
        let source = read(&source_path);
        match letvar::compile(&source) {
            Ok(out) => assert_eq!(out, expected, "trans fixture {} got wrong result", name),
            Err(err) => panic!("trans fixture {} failed to compile: {:?}", name, err),
        }
    }
}
