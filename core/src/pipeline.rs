// ## 📂 File: `src/pipeline.rs`
// ## Pipeline wiring: record builder -> batcher -> encryptor -> batch writer

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::artifact::encode_artifact;
use crate::batcher::Batcher;
use crate::config::PrepareConfig;
use crate::crypto::Encryptor;
use crate::record::RecordBuilder;
use crate::stores::{BatchStore, FsBatchStore, FsCollection, MediaStore, MetadataStore};
use crate::telemetry::{RunCounters, RunSummary};
use crate::types::{FlushedBatch, PrepareError};

// ============================================================
// Filesystem entry point
// ============================================================

/// Prepare a collection on disk into `{output_root}/{cid}/`.
pub fn run_prepare(config: &PrepareConfig) -> Result<RunSummary, PrepareError> {
    let collection = FsCollection::new(&config.collection_dir);
    let mut store = FsBatchStore::new(config.output_dir());
    run_pipeline(config, &collection, &collection, &mut store)
}

// ============================================================
// Store-generic pipeline
// ============================================================

/// Run the pipeline against arbitrary stores. Key material is derived once
/// here and shared by every batch of the run.
pub fn run_pipeline<M, I, S>(
    config: &PrepareConfig,
    metadata: &M,
    media: &I,
    store: &mut S,
) -> Result<RunSummary, PrepareError>
where
    M: MetadataStore + ?Sized,
    I: MediaStore + ?Sized,
    S: BatchStore + ?Sized,
{
    config.validate()?;
    let started = Instant::now();

    if config.is_weak_kdf() {
        warn!(
            iterations = config.kdf_iterations,
            "PBKDF2 iteration count is below the recommended minimum; artifacts are cheap to brute-force"
        );
    }

    info!(
        cid = %config.metadata_cid,
        batch_size = ?config.batch_size.map(|n| n.get()),
        shard_count = config.shard_count,
        "starting metadata preparation"
    );

    let token_ids = metadata.token_ids()?;
    if token_ids.len() as u64 > config.shard_count {
        warn!(
            tokens = token_ids.len(),
            shard_count = config.shard_count,
            "more tokens than shards; several tokens will share one metadata file"
        );
    }

    let encryptor = Encryptor::new(config.passphrase.as_bytes(), config.kdf_iterations)?;
    store.reset()?;

    let builder = RecordBuilder::new(metadata, media, &config.metadata_cid, config.shard_count);
    let mut batcher = Batcher::new(config.batch_size);
    let mut counters = RunCounters::default();
    let mut seen = HashSet::with_capacity(token_ids.len());

    for token_id in token_ids {
        if !seen.insert(token_id.clone()) {
            return Err(PrepareError::DuplicateToken(token_id));
        }
        let record = builder.build(&token_id)?;
        counters.add_token();
        if let Some(flushed) = batcher.push(token_id, record)? {
            write_batch(&encryptor, store, flushed, &mut counters)?;
        }
    }

    if let Some(flushed) = batcher.finish() {
        write_batch(&encryptor, store, flushed, &mut counters)?;
    }

    let summary = RunSummary::capture(&counters, config.output_dir(), started);
    info!(
        tokens = summary.tokens_processed,
        batches = summary.batches_written,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "metadata preparation finished"
    );
    Ok(summary)
}

/// Serialize, seal, encode and persist one flushed batch. The batch is
/// consumed here.
fn write_batch<S>(
    encryptor: &Encryptor,
    store: &mut S,
    flushed: FlushedBatch,
    counters: &mut RunCounters,
) -> Result<(), PrepareError>
where
    S: BatchStore + ?Sized,
{
    let FlushedBatch { index, batch } = flushed;
    let records = batch.len();
    let plaintext = batch.to_json_vec()?;
    drop(batch);

    let artifact = encryptor.seal(&plaintext)?;
    let text = encode_artifact(&artifact);
    store.write_batch(index, &text)?;

    counters.add_batch(plaintext.len(), artifact.wire_len(), text.len());
    debug!(index, plaintext_len = plaintext.len(), "sealed batch");
    info!(index, records, "wrote batch");
    Ok(())
}
