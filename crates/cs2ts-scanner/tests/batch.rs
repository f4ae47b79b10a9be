//! Batch conversion over a temporary source tree.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use cs2ts_core::GeneratorConfig;
use cs2ts_scanner::BatchConverter;

fn write(root: &Utf8Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, contents).expect("write");
}

#[test]
fn test_convert_and_write_tree() {
    let src_dir = tempfile::tempdir().expect("tempdir");
    let out_dir = tempfile::tempdir().expect("tempdir");
    let src = Utf8Path::from_path(src_dir.path()).expect("utf-8 tempdir");
    let out = Utf8Path::from_path(out_dir.path()).expect("utf-8 tempdir");

    write(src, "Models/Order.cs", "public class Order { public Money Total { get; set; } }");
    write(src, "Models/Enums/Status.cs", "public enum Status { Open, Closed }");
    write(src, "Broken.cs", "public class Broken { public (int, int) Pair { get; set; } }");
    write(src, "Empty.cs", "using System;");
    write(src, "bin/Debug/Skipped.cs", "public class Skipped { }");

    let config = GeneratorConfig::parse("Money=@shared/money", "").expect("valid config");
    let converter = BatchConverter::new(config);
    let result = converter.convert_dir(src).expect("convert");

    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.stats.total, 4);
    assert_eq!(result.stats.converted, 4);
    assert_eq!(result.stats.with_warnings, 1);
    assert_eq!(result.stats.warnings, 1);

    let written = converter
        .write_outputs(&result.outputs, src, out)
        .expect("write outputs");
    let mut relative: Vec<Utf8PathBuf> = written
        .iter()
        .map(|path| path.strip_prefix(out).expect("under out root").to_owned())
        .collect();
    relative.sort();
    assert_eq!(
        relative,
        [
            Utf8PathBuf::from("Broken.ts"),
            Utf8PathBuf::from("Models/Enums/Status.ts"),
            Utf8PathBuf::from("Models/Order.ts"),
        ]
    );

    let order = fs::read_to_string(out.join("Models/Order.ts")).expect("read");
    assert_eq!(
        order,
        "import { Money } from '@shared/money';\n\nexport type Order = {\n  total: Money;\n};\n"
    );
}

#[test]
fn test_convert_dir_rejects_missing_root() {
    let converter = BatchConverter::new(GeneratorConfig::default());
    let err = converter
        .convert_dir(Utf8Path::new("/definitely/not/a/dir"))
        .expect_err("missing root");
    assert!(err.is_fatal());
}
