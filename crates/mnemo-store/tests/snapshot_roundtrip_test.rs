use mnemo_core::config::{RecallConfig, StoreConfig};
use mnemo_embeddings::HashingEmbedder;
use mnemo_store::MemoryStore;

fn restore(blob: &[u8]) -> MemoryStore {
    MemoryStore::deserialize(
        blob,
        Box::new(HashingEmbedder::default()),
        StoreConfig::default(),
        RecallConfig::default(),
    )
    .unwrap()
}

#[test]
fn snapshot_round_trips_every_field() {
    let mut store = MemoryStore::with_defaults();
    store.write("사과는 빨간색", Some("fruit"), Some(0.8)).unwrap();
    store.write("사과는 달다", Some("fruit"), Some(0.6)).unwrap();
    store.write("rust is a systems language", None, None).unwrap();

    // Touch access bookkeeping so non-default values round-trip too.
    store.query("사과", 2).unwrap();

    let blob = store.serialize().unwrap();
    let restored = restore(&blob);

    assert_eq!(restored.len(), store.len());
    for original in store.records() {
        let copy = restored.get(&original.id).expect("record survives");
        assert_eq!(copy.content, original.content);
        assert_eq!(copy.context, original.context);
        assert_eq!(copy.importance, original.importance);
        assert_eq!(copy.embedding, original.embedding);
        assert_eq!(copy.tier, original.tier);
        assert_eq!(copy.created_at, original.created_at);
        assert_eq!(copy.last_accessed_at, original.last_accessed_at);
        assert_eq!(copy.access_count, original.access_count);
        assert_eq!(copy.strength, original.strength);
        assert_eq!(copy.cycles_survived, original.cycles_survived);
        assert_eq!(copy.content_hash, original.content_hash);
    }
}

#[test]
fn restored_store_answers_queries_identically() {
    let mut store = MemoryStore::with_defaults();
    store.write("사과는 빨간색", None, Some(0.8)).unwrap();
    store.write("바나나는 노란색", None, Some(0.8)).unwrap();

    let blob = store.serialize().unwrap();
    let mut restored = restore(&blob);

    let before: Vec<String> = store
        .query("사과는 무슨 색이야", 5)
        .unwrap()
        .iter()
        .map(|h| h.record.id.clone())
        .collect();
    let after: Vec<String> = restored
        .query("사과는 무슨 색이야", 5)
        .unwrap()
        .iter()
        .map(|h| h.record.id.clone())
        .collect();
    assert_eq!(before, after);
}
