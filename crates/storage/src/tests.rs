//! Tests for the storage collaborators

#[cfg(test)]
mod storage_tests {
    use crate::file::{decode_frame, encode_frame, sweep_temp_files, TEMP_GRACE_PERIOD};
    use crate::{CompressionConfig, FileStore, MemoryStore, Store};
    use std::sync::Arc;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;
    use txproof_core::{Error, Result};

    fn small_threshold() -> CompressionConfig {
        CompressionConfig {
            enabled: true,
            level: 3,
            min_size: 10,
        }
    }

    #[tokio::test]
    async fn test_memory_store_basic() -> Result<()> {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.put("alpha", b"one").await?;
        assert_eq!(store.get("alpha").await?, Some(b"one".to_vec()));
        assert!(store.contains("alpha").await?);
        assert_eq!(store.get("missing").await?, None);

        store.put("alpha", b"two").await?;
        assert_eq!(store.get("alpha").await?, Some(b"two".to_vec()));
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_memory_put_if_absent_keeps_first_value() -> Result<()> {
        let store = MemoryStore::new();

        assert!(store.put_if_absent("tree_1", b"first").await?);
        assert!(!store.put_if_absent("tree_1", b"second").await?);
        assert_eq!(store.get("tree_1").await?, Some(b"first".to_vec()));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.put("", b"x").await,
            Err(Error::InvalidKey { .. })
        ));

        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path(), CompressionConfig::default())
            .await
            .unwrap();
        assert!(matches!(store.get("").await, Err(Error::InvalidKey { .. })));
    }

    #[tokio::test]
    async fn test_file_store_basic() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path(), CompressionConfig::default()).await?;

        store.put("greeting", b"Hello, World!").await?;
        assert_eq!(store.get("greeting").await?, Some(b"Hello, World!".to_vec()));
        assert!(store.contains("greeting").await?);

        assert_eq!(store.get("absent").await?, None);
        assert!(!store.contains("absent").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        {
            let store = FileStore::open(temp_dir.path(), CompressionConfig::default()).await?;
            store.put("tree_7", b"persisted").await?;
        }

        let store = FileStore::open(temp_dir.path(), CompressionConfig::default()).await?;
        assert_eq!(store.get("tree_7").await?, Some(b"persisted".to_vec()));
        Ok(())
    }

    #[tokio::test]
    async fn test_compression() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path(), small_threshold()).await?;

        let data = vec![b'A'; 10_000];
        store.put("compressible", &data).await?;

        let on_disk = std::fs::metadata(store.path_for("compressible")).unwrap().len();
        assert!(on_disk < data.len() as u64 / 2);
        assert_eq!(store.get("compressible").await?, Some(data));
        Ok(())
    }

    #[tokio::test]
    async fn test_uncompressed_store() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path(), CompressionConfig::disabled()).await?;

        let data = vec![b'A'; 10_000];
        store.put("plain", &data).await?;

        let on_disk = std::fs::metadata(store.path_for("plain")).unwrap().len();
        assert!(on_disk > data.len() as u64);
        assert_eq!(store.get("plain").await?, Some(data));
        Ok(())
    }

    #[tokio::test]
    async fn test_corruption_detection() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path(), CompressionConfig::disabled()).await?;

        store.put("victim", b"Important data").await?;

        let path = store.path_for("victim");
        let mut bytes = std::fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        std::fs::write(&path, bytes).unwrap();

        match store.get("victim").await {
            Err(Error::Corruption { key, reason }) => {
                assert_eq!(key, "victim");
                assert!(reason.contains("CRC"));
            }
            other => panic!("expected corruption, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_truncated_value_is_corruption() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path(), CompressionConfig::disabled()).await?;

        store.put("short", b"some bytes that will be cut").await?;
        let path = store.path_for("short");
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 4]).unwrap();

        assert!(matches!(
            store.get("short").await,
            Err(Error::Corruption { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_frame_rejects_garbage() {
        assert!(matches!(
            decode_frame("k", b"not a frame"),
            Err(Error::Corruption { .. })
        ));

        let frame = encode_frame("k", b"payload", &CompressionConfig::default()).unwrap();
        assert_eq!(decode_frame("k", &frame).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn test_file_put_if_absent() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path(), CompressionConfig::default()).await?;

        assert!(store.put_if_absent("tree_3", b"first").await?);
        assert!(!store.put_if_absent("tree_3", b"second").await?);
        assert_eq!(store.get("tree_3").await?, Some(b"first".to_vec()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_put_if_absent_has_one_winner() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(FileStore::open(temp_dir.path(), CompressionConfig::default()).await?);

        let mut handles = Vec::new();
        for writer in 0..16u8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.put_if_absent("tree_42", &[writer; 64]).await
            }));
        }

        let mut winners = Vec::new();
        for (writer, handle) in handles.into_iter().enumerate() {
            if handle.await.unwrap()? {
                winners.push(writer as u8);
            }
        }

        assert_eq!(winners.len(), 1);
        assert_eq!(store.get("tree_42").await?, Some(vec![winners[0]; 64]));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_memory_put_if_absent_has_one_winner() -> Result<()> {
        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for writer in 0..16u8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.put_if_absent("tree_42", &[writer]).await
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap()? {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
        Ok(())
    }

    fn age_file(path: &std::path::Path, by: Duration) {
        let file = std::fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - by).unwrap();
    }

    #[tokio::test]
    async fn test_stale_temp_files_are_swept() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let stale = temp_dir.path().join("74726565.bin.tmp.deadbeef");
        std::fs::write(&stale, b"half written").unwrap();
        age_file(&stale, TEMP_GRACE_PERIOD + Duration::from_secs(60));

        let store = FileStore::open(temp_dir.path(), CompressionConfig::default()).await?;
        assert!(!stale.exists());
        assert_eq!(store.get("tree").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_recent_temp_files_survive_open() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let in_flight = temp_dir.path().join("74726565.bin.tmp.cafebabe");
        std::fs::write(&in_flight, b"another writer").unwrap();

        FileStore::open(temp_dir.path(), CompressionConfig::default()).await?;
        assert!(in_flight.exists());

        assert_eq!(sweep_temp_files(temp_dir.path(), Duration::ZERO).await?, 1);
        assert!(!in_flight.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_long_keys_round_trip() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let files = FileStore::open(temp_dir.path(), CompressionConfig::default()).await?;
        let memory = MemoryStore::new();
        let key = "k".repeat(600);

        for store in [&files as &dyn Store, &memory as &dyn Store] {
            store.put(&key, b"v").await?;
            assert_eq!(store.get(&key).await?, Some(b"v".to_vec()));
            assert!(!store.put_if_absent(&key, b"w").await?);
        }

        let name = files.path_for(&key);
        let name = name.file_name().unwrap().to_string_lossy();
        assert_eq!(name.len(), 64 + ".bin".len());
        assert_ne!(files.path_for("a"), files.path_for("b"));
        Ok(())
    }

    #[tokio::test]
    async fn test_no_temp_files_left_after_writes() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path(), CompressionConfig::default()).await?;

        store.put("a", b"1").await?;
        store.put("a", b"2").await?;
        store.put_if_absent("b", b"3").await?;
        store.put_if_absent("b", b"4").await?;

        let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_store_through_arc_dyn() -> Result<()> {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        store.put("k", b"v").await?;
        assert!(store.contains("k").await?);
        Ok(())
    }
}
