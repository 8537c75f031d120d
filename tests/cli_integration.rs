#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "product_name,product_price,product_quantity,date_updated\n";

fn stocktake(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stocktake").unwrap();
    cmd.current_dir(dir)
        .env_remove("STOCKTAKE_CONFIG")
        .env_remove("STOCKTAKE_DB")
        .env("NO_COLOR", "1");
    cmd
}

fn workspace(seed_rows: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let seed_dir = temp.path().join("store-inventory");
    fs::create_dir_all(&seed_dir).unwrap();
    fs::write(
        seed_dir.join("inventory.csv"),
        format!("{}{}", HEADER, seed_rows),
    )
    .unwrap();
    temp
}

#[test]
fn test_seed_then_view() {
    let temp = workspace("Widget,$5.99,10,1/1/2020\n");

    stocktake(temp.path())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 new"));

    assert!(temp.path().join("inventory.db").exists());

    stocktake(temp.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Widget"))
        .stdout(predicate::str::contains("Price: $5.99"))
        .stdout(predicate::str::contains("Quantity: 10"))
        .stdout(predicate::str::contains("Date Updated: 2020-01-01"));
}

#[test]
fn test_reseed_does_not_duplicate() {
    let temp = workspace("Widget,$5.99,10,1/1/2020\nGadget,$1.25,4,3/2/2019\n");

    for _ in 0..2 {
        stocktake(temp.path()).arg("seed").assert().success();
    }

    stocktake(temp.path())
        .args(["view", "3", "--no-seed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between 1 and 2"));
}

#[test]
fn test_missing_seed_file_is_fatal() {
    let temp = TempDir::new().unwrap();

    stocktake(temp.path())
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_malformed_seed_row_is_fatal() {
    let temp = workspace("Widget,5.99,10,1/1/2020\n");

    stocktake(temp.path())
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("Malformed price"));
}

#[test]
fn test_add_rejects_zero_quantity() {
    let temp = workspace("");

    stocktake(temp.path())
        .args(["add", "--name", "Widget", "--price", "$5.99", "--quantity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid quantity"));

    stocktake(temp.path())
        .args(["view", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_add_rejects_blank_name() {
    let temp = workspace("");

    stocktake(temp.path())
        .args(["add", "--name", "   ", "--price", "$5.99", "--quantity", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid product name"))
        .stderr(predicate::str::contains("Api Error").not());
}

#[test]
fn test_export_round_trips_as_seed() {
    let temp = workspace("Widget,$5.99,10,1/1/2020\n\"Big, Gadget\",$120.50,3,12/25/2019\n");

    stocktake(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup complete"));

    let backup = fs::read_to_string(temp.path().join("store-inventory/backup.csv")).unwrap();
    assert_eq!(
        backup,
        format!(
            "{}Widget,$5.99,10,1/1/2020\n\"Big, Gadget\",$120.50,3,12/25/2019\n",
            HEADER
        )
    );

    // A fresh database seeded from the backup ends up with the same rows.
    stocktake(temp.path())
        .args(["--db", "restored.db", "--seed-file", "store-inventory/backup.csv"])
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Price: $120.50"));
}

#[test]
fn test_interactive_add_and_view() {
    let temp = workspace("Widget,$5.99,10,1/1/2020\n");

    stocktake(temp.path())
        .write_stdin("a\nGizmo\n5.99\n$3.10\n2\nv\n2\nr\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter the price in the correct format please.",
        ))
        .stdout(predicate::str::contains("Product added: Gizmo"))
        .stdout(predicate::str::contains("Name: Gizmo"))
        .stdout(predicate::str::contains("Price: $3.10"));
}

#[test]
fn test_config_file_locations() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("seed.csv"),
        format!("{}Widget,$5.99,10,1/1/2020\n", HEADER),
    )
    .unwrap();
    fs::write(
        temp.path().join("stocktake.json"),
        r#"{ "database": "data/stock.db", "seed_file": "seed.csv", "backup_file": "out.csv" }"#,
    )
    .unwrap();

    stocktake(temp.path()).arg("export").assert().success();

    assert!(temp.path().join("data/stock.db").exists());
    assert!(fs::read_to_string(temp.path().join("out.csv"))
        .unwrap()
        .contains("Widget,$5.99,10,1/1/2020"));
}
