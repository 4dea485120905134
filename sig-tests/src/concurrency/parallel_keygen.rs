//! Parallel Key Generation Tests

#[cfg(test)]
mod tests {
    use sig_core::{CoreConfig, generate_keypair_with_config};
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn concurrent_keygen_convenience_unique() {
        const NUM_THREADS: usize = 8;
        const KEYS_PER_THREAD: usize = 8;

        let config = CoreConfig::for_production();
        let handles: Vec<_> = (0..NUM_THREADS)
            .map(|_| {
                let config = config.clone();
                thread::spawn(move || {
                    (0..KEYS_PER_THREAD)
                        .map(|_| {
                            generate_keypair_with_config(&config)
                                .expect("keypair generation should succeed")
                                .0
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for public_key in handle.join().expect("thread should not panic") {
                assert!(seen.insert(public_key), "duplicate public key across threads");
            }
        }
        assert_eq!(seen.len(), NUM_THREADS * KEYS_PER_THREAD);
    }

    #[test]
    fn concurrent_keygen_scoped_threads() {
        let keys: Vec<Vec<u8>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        crate::utils::test_keypair()
                            .public_key()
                            .encode_point(true)
                            .expect("encoding should succeed")
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().expect("thread should not panic")).collect()
        });

        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }
}
