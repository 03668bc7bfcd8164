use std::{process::Command, path::{Path, PathBuf}, fmt::Write};

fn main() {
    // only build and bundle the frontend if the bundle feature is set
    if std::env::var("CARGO_FEATURE_BUNDLE").is_err() {
        return;
    }

    println!("cargo:rerun-if-changed=../frontend/src");
    println!("cargo:rerun-if-changed=../frontend/index.html");

    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap());

    let status = Command::new("../script/build-frontend")
        .env("OUT_DIR", &out_dir)
        .spawn()
        .unwrap()
        .wait()
        .unwrap();

    if !status.success() {
        panic!("script/build-frontend failed");
    }

    let dist_dir = out_dir.join("dist");

    if !dist_dir.join("index.html").exists() {
        panic!("trunk did not produce index.html in {}", dist_dir.display());
    }

    let bundle_rs = bundle_source(&dist_dir);
    std::fs::write(out_dir.join("bundle.rs"), bundle_rs)
        .expect("write bundle.rs");
}

/// Generates a static table of every file trunk emitted, keyed by file name.
fn bundle_source(dist_dir: &Path) -> String {
    let mut entries = std::fs::read_dir(dist_dir)
        .expect("read dist dir")
        .map(|entry| entry.expect("read dist entry").path())
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();

    // stable output keeps rebuilds quiet
    entries.sort();

    let mut source = String::from("pub static FILES: &[(&str, &[u8])] = &[\n");

    for path in entries {
        let name = path.file_name()
            .and_then(|name| name.to_str())
            .expect("dist file name is utf-8");

        writeln!(source, "    ({name:?}, include_bytes!({:?})),", path.display().to_string())
            .unwrap();
    }

    source.push_str("];\n");
    source
}
