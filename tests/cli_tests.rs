//! End-to-end tests for the `book-catalog` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CATEGORIES: &str = "nombre,ficcion
Novela,true
Ciencia,false
";

const BOOKS: &str = "titulo,autor,calificacion,categoria,portada,ancho,alto
Veinte mil leguas,Julio Verne,4.0,Novela,leguas.jpg,320,480
Cosmos,Carl Sagan,5.0,Ciencia,cosmos.jpg,350,500
Cocina peruana,Gaston Acurio,3.0,Cocina,cocina.jpg,400,400
";

fn setup() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("categorias.csv"), CATEGORIES).unwrap();
    std::fs::write(dir.path().join("libros.csv"), BOOKS).unwrap();
    std::fs::create_dir(dir.path().join("covers")).unwrap();
    std::fs::write(dir.path().join("covers").join("cosmos.jpg"), b"image").unwrap();
    dir
}

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("book-catalog").unwrap();
    cmd.arg("--categories")
        .arg(dir.path().join("categorias.csv"))
        .arg("--books")
        .arg(dir.path().join("libros.csv"))
        .arg("--assets-dir")
        .arg(dir.path().join("covers"));
    cmd
}

#[test]
fn test_find_existing_book() {
    let dir = setup();
    cmd(&dir)
        .args(["find", "Cosmos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carl Sagan"));
}

#[test]
fn test_find_missing_book_is_not_an_error() {
    let dir = setup();
    cmd(&dir)
        .args(["find", "Rayuela"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No book titled 'Rayuela'"));
}

#[test]
fn test_author_search_json() {
    let dir = setup();
    let output = cmd(&dir)
        .args(["--format", "json", "author", "ulio v"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let books: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Veinte mil leguas");
    assert_eq!(books[0]["category"], "Novela");
}

#[test]
fn test_synthesized_category_is_listed() {
    let dir = setup();
    cmd(&dir)
        .args(["--format", "tsv", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cocina\tfalse\tsynthesized\t1\t3"));
}

#[test]
fn test_stats_text() {
    let dir = setup();
    cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average rating:  4.00"))
        .stdout(predicate::str::contains("Best rated:      Ciencia"))
        .stdout(predicate::str::contains("Without cover:   2"))
        .stdout(predicate::str::contains("Cocina: 1 book(s)"));
}

#[test]
fn test_author_categories_tsv() {
    let dir = setup();
    cmd(&dir)
        .args(["-f", "tsv", "author-categories", "Julio Verne"])
        .assert()
        .success()
        .stdout(predicate::str::diff("name\tis_fiction\nNovela\ttrue\n"));
}

#[test]
fn test_export_writes_json() {
    let dir = setup();
    let output = dir.path().join("catalog.json");
    cmd(&dir).arg("export").arg(&output).assert().success();

    let json = std::fs::read_to_string(&output).unwrap();
    let data: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(data["books"].as_array().unwrap().len(), 3);
    assert_eq!(data["dynamic_categories"][0]["name"], "Cocina");
}

#[test]
fn test_missing_source_fails() {
    let dir = setup();
    Command::cargo_bin("book-catalog")
        .unwrap()
        .arg("--categories")
        .arg(dir.path().join("nope.csv"))
        .arg("--books")
        .arg(dir.path().join("libros.csv"))
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record source unavailable"));
}

#[test]
fn test_invalid_delimiter_rejected() {
    let dir = setup();
    cmd(&dir)
        .args(["--delimiter", ";;", "stats"])
        .assert()
        .failure();
}
