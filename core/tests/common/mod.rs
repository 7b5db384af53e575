#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use reveal_core::crypto::open_artifact;
use reveal_core::types::TokenRecord;

pub const PASSPHRASE: &str = "correct horse battery staple";
pub const TEST_ITERATIONS: u32 = 1_000;
pub const CID: &str = "QmQskW3RWhbiYyebrgJTAA6BwkUcSuxbmAMKyVQbo27zRq";

pub fn metadata_json(n: u64) -> String {
    format!(
        r#"{{"name": "Villager {n}", "description": "Villager", "image": "ipfs://{CID}/{n}.png", "attributes": []}}"#
    )
}

pub fn media_bytes(n: u64) -> Vec<u8> {
    format!("\u{89}PNG fake image {n}").into_bytes()
}

/// Lay out `json/{id}` for every token id and `images/{s}.png` for every
/// shard those ids resolve to.
pub fn write_collection(root: &Path, token_ids: &[u64], shard_count: u64) {
    fs::create_dir_all(root.join("json")).unwrap();
    fs::create_dir_all(root.join("images")).unwrap();
    for id in token_ids {
        fs::write(root.join("json").join(id.to_string()), metadata_json(*id)).unwrap();
        let shard = id % shard_count;
        fs::write(root.join("images").join(format!("{shard}.png")), media_bytes(shard)).unwrap();
    }
}

/// Decrypt one stored artifact into its raw JSON text.
pub fn open_text(text: &str, passphrase: &str, iterations: u32) -> String {
    let plaintext = open_artifact(passphrase.as_bytes(), iterations, text).unwrap();
    String::from_utf8(plaintext).unwrap()
}

/// Decrypt one stored artifact into a token id -> record map.
pub fn open_records(text: &str, passphrase: &str, iterations: u32) -> BTreeMap<String, TokenRecord> {
    serde_json::from_str(&open_text(text, passphrase, iterations)).unwrap()
}

/// Names of the files in an output directory, sorted numerically.
pub fn output_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort_by_key(|n| n.parse::<u64>().unwrap());
    names
}
