use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn intersect_planar_crossing() {
    let dir = assert_fs::TempDir::new().unwrap();
    let a = dir.child("a.csv");
    a.write_str("0,0,0\n10,0,10\n").unwrap();
    let b = dir.child("b.csv");
    b.write_str("5,-5,0\n5,5,20\n").unwrap();

    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "--epsg",
            "32614",
            "intersect",
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Intersection: 5.000,0.000 z_a=5.000 z_b=10.000 (planar crossing)",
        ));
    dir.close().unwrap();
}

#[test]
fn intersect_true_3d() {
    let dir = assert_fs::TempDir::new().unwrap();
    let a = dir.child("a.csv");
    a.write_str("0,0,0\n10,0,0\n").unwrap();
    let b = dir.child("b.csv");
    b.write_str("5,-5,0\n5,5,0\n").unwrap();
    let out = dir.child("hits.geojson");

    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "intersect",
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
            "--output",
            out.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3D)"))
        .stdout(predicate::str::contains("Wrote"));

    out.assert(predicate::str::contains("\"is_3d\":true"));
    dir.close().unwrap();
}

#[test]
fn intersect_require_match_filters_crossing() {
    let dir = assert_fs::TempDir::new().unwrap();
    let a = dir.child("a.csv");
    a.write_str("0,0,0\n10,0,10\n").unwrap();
    let b = dir.child("b.csv");
    b.write_str("5,-5,0\n5,5,20\n").unwrap();

    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "intersect",
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
            "--require-match",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No intersection"));
    dir.close().unwrap();
}

#[test]
fn intersect_with_config_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let a = dir.child("a.csv");
    a.write_str("0,0,0\n10,0,10\n").unwrap();
    let b = dir.child("b.csv");
    b.write_str("5,-5,0\n5,5,10.5\n").unwrap();
    let config = dir.child("options.json");
    config.write_str(r#"{ "z_tolerance": 1.0 }"#).unwrap();

    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "intersect",
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3D)"));
    dir.close().unwrap();
}

#[test]
fn intersect_rejects_single_vertex() {
    let dir = assert_fs::TempDir::new().unwrap();
    let a = dir.child("a.csv");
    a.write_str("1,2,3\n").unwrap();
    let b = dir.child("b.csv");
    b.write_str("5,-5,0\n5,5,20\n").unwrap();

    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "intersect",
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 vertices"));
    dir.close().unwrap();
}

#[test]
fn transform_command() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("flight.csv");
    input.write_str("0,0,100\n1,1,200\n").unwrap();
    let output = dir.child("flight_3857.csv");

    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "transform",
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
            "--to",
            "3857",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    output.assert(predicate::str::starts_with("0,"));
    output.assert(predicate::str::contains(",100\n"));
    dir.close().unwrap();
}

#[test]
fn geojson_export_then_import() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("lines.csv");
    input.write_str("0,0,0\n1,1,1\n\n2,2,2\n3,3,3\n").unwrap();
    let geojson = dir.child("lines.geojson");
    let back = dir.child("back.csv");

    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "export-geojson",
            input.path().to_str().unwrap(),
            geojson.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    geojson.assert(predicate::str::contains("LineString"));

    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "import-geojson",
            geojson.path().to_str().unwrap(),
            back.path().to_str().unwrap(),
        ])
        .assert()
        .success();
    back.assert("0,0,0\n1,1,1\n\n2,2,2\n3,3,3\n");
    dir.close().unwrap();
}

#[test]
fn interpolate_command() {
    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "interpolate",
            "0.0",
            "0.0",
            "0.0",
            "10.0",
            "0.0",
            "10.0",
            "2.5",
            "0.0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Elevation: 2.500"));
}

#[test]
fn interpolate_strict_vertical_segment_fails() {
    Command::cargo_bin("geoshape3d_cli")
        .unwrap()
        .args([
            "interpolate",
            "1.0",
            "1.0",
            "0.0",
            "1.0",
            "1.0",
            "50.0",
            "1.0",
            "-2.0",
            "--strict",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("degenerate segment"));
}
