use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const CID: &str = "QmTestCid";

fn write_collection(root: &Path, count: u64) {
    fs::create_dir_all(root.join("json")).unwrap();
    fs::create_dir_all(root.join("images")).unwrap();
    for id in 0..count {
        let meta = serde_json::json!({
            "name": format!("Villager {id}"),
            "description": "Villager",
            "image": format!("ipfs://{CID}/{id}.png"),
        });
        fs::write(root.join("json").join(id.to_string()), serde_json::to_vec(&meta).unwrap()).unwrap();
        fs::write(root.join("images").join(format!("{}.png", id % 9)), b"png").unwrap();
    }
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("prepare-metadata").unwrap();
    cmd.env_remove("REVEAL_PASSPHRASE")
        .env_remove("REVEAL_KDF_ITERATIONS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn writes_numbered_batches() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_collection(input.path(), 5);

    cmd()
        .arg("--dir").arg(input.path())
        .arg("--cid").arg(CID)
        .arg("--batch-size").arg("2")
        .arg("--output-dir").arg(output.path())
        .arg("--kdf-iterations").arg("1000")
        .env("REVEAL_PASSPHRASE", "s3cret")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 3 batch(es) for 5 token(s)"));

    let out_dir = output.path().join(CID);
    for name in ["0", "1", "2"] {
        let text = fs::read_to_string(out_dir.join(name)).unwrap();
        let pt = reveal_core::crypto::open_artifact(b"s3cret", 1000, &text).unwrap();
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&pt).unwrap();
        assert!(!map.is_empty());
    }
    assert!(!out_dir.join("3").exists());
}

#[test]
fn passphrase_is_required() {
    let input = tempdir().unwrap();
    write_collection(input.path(), 1);

    cmd()
        .arg("--dir").arg(input.path())
        .arg("--cid").arg(CID)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--passphrase"));
}

#[test]
fn zero_batch_size_rejected() {
    let input = tempdir().unwrap();
    write_collection(input.path(), 1);

    cmd()
        .arg("--dir").arg(input.path())
        .arg("--cid").arg(CID)
        .arg("--batch-size").arg("0")
        .arg("--passphrase").arg("pw")
        .assert()
        .failure();
}

#[test]
fn missing_collection_fails_with_context() {
    let output = tempdir().unwrap();

    cmd()
        .arg("--dir").arg(output.path().join("does-not-exist"))
        .arg("--cid").arg(CID)
        .arg("--passphrase").arg("pw")
        .arg("--kdf-iterations").arg("1")
        .arg("--output-dir").arg(output.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to prepare collection"))
        .stderr(predicate::str::contains("failed to list token ids"));
}

#[test]
fn weak_iterations_warn() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_collection(input.path(), 1);

    cmd()
        .arg("--dir").arg(input.path())
        .arg("--cid").arg(CID)
        .arg("--passphrase").arg("password")
        .arg("--kdf-iterations").arg("1")
        .arg("--output-dir").arg(output.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("PBKDF2 iteration count is below the recommended minimum"));
}

#[test]
fn shared_shards_warn() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_collection(input.path(), 10);

    cmd()
        .arg("--dir").arg(input.path())
        .arg("--cid").arg(CID)
        .arg("--passphrase").arg("pw")
        .arg("--kdf-iterations").arg("1")
        .arg("--output-dir").arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 1 batch(es) for 10 token(s)"))
        .stderr(predicate::str::contains("more tokens than shards"));
}
