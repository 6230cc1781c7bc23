use anyhow::{Result, anyhow};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use wasmtime_bridge_types::{HostDataId, HostDataTable};

#[test]
fn concurrent_inserts_get_distinct_ids() -> Result<()> {
    let table = Arc::new(HostDataTable::new());
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let table = Arc::clone(&table);
            thread::spawn(move || (0..32).map(|i| table.insert(n * 100 + i)).collect::<Vec<_>>())
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.join().map_err(|_| anyhow!("inserting thread panicked"))?);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8 * 32);
    assert_eq!(table.len(), 8 * 32);
    assert!(ids.iter().all(|id| id.into_raw() != 0));
    Ok(())
}

#[test]
fn raw_words_round_trip() -> Result<()> {
    let table = HostDataTable::new();
    let id = table.insert(vec![1u8, 2, 3]);
    let word = id.into_raw();
    let back = HostDataId::from_raw(word).ok_or_else(|| anyhow!("zero host data word"))?;
    assert_eq!(table.with(back, Vec::len), Some(3));
    assert_eq!(table.remove(back), Some(vec![1, 2, 3]));
    assert_eq!(table.get(back), None);
    Ok(())
}
