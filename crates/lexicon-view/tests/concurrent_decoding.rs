//! Parallel decoding against the shared, lazily built registries.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::thread;

use lexicon_view::bsky::{decode_actor_starter_packs, decode_starter_pack};

const LISTING: &[u8] = include_bytes!("fixtures/actor_starter_packs.json");
const SINGLE: &[u8] = include_bytes!("fixtures/starter_pack.json");
const THREADS: usize = 8;
const ROUNDS: usize = 4;

#[test]
fn parallel_results_match_sequential_results() {
    let listing = decode_actor_starter_packs(LISTING).expect("listing decodes");
    let single = decode_starter_pack(SINGLE).expect("single pack decodes");

    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    (0..ROUNDS)
                        .map(|_| {
                            (
                                decode_actor_starter_packs(LISTING).expect("listing decodes"),
                                decode_starter_pack(SINGLE).expect("single pack decodes"),
                            )
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let results = handle.join().expect("decoder thread panicked");
            assert_eq!(results.len(), ROUNDS);
            for (parallel_listing, parallel_single) in results {
                assert_eq!(parallel_listing, listing);
                assert_eq!(parallel_single, single);
            }
        }
    });
}

#[test]
fn first_use_races_initialise_registries_once() {
    // Every thread hits the registries at the same time on first use.
    let barrier = std::sync::Barrier::new(THREADS);

    let cursors: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    decode_actor_starter_packs(LISTING)
                        .expect("listing decodes")
                        .cursor()
                        .map(|cursor| cursor.as_str().to_owned())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("decoder thread panicked"))
            .collect()
    });

    assert!(cursors.iter().all(|cursor| cursor.as_deref() == Some("3lep6hpx7qq2c")));
}
