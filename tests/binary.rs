//! Exit status and diagnostics of the `mesh_convert` executable.

use std::fs;
use std::process::Command;

fn mesh_convert() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mesh_convert"))
}

#[test]
fn success() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tri.obj");
    let output = dir.path().join("tri.mesh");
    fs::write(&input, "v 1 2 3\nf 1 1 1\n").unwrap();

    let out = mesh_convert().arg(&input).arg("-o").arg(&output).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        ":Vertices\n1 2 3\n\n:Indices\n0 0 0 \n\n:TexCoord\n\n:Color\n"
    );
}

#[test]
fn count_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = mesh_convert()
        .args(["a.obj", "b.obj", "c.obj", "-o", "x", "y"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: invalid output:"), "{stderr}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn malformed_record_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.obj");
    fs::write(&input, "v 1 2 3\nvt 0.5\n").unwrap();

    let out = mesh_convert()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("bad.mesh"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("error: line 2: malformed `vt` record"),
        "{stderr}"
    );
    assert!(!dir.path().join("bad.mesh").exists());
}
