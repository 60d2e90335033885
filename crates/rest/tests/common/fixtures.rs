//! Bookmark fixtures.

use bookmarks_persistence::types::Bookmark;
use chrono::{DateTime, TimeZone, Utc};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// Record A: host `example.com`, created later than B.
pub fn bookmark_a() -> Bookmark {
    Bookmark::new("Example Domain", "https://example.com/")
        .unwrap()
        .with_id("a")
        .with_description("Illustrative examples")
        .with_created(at(2024, 6, 1))
}

/// Record B: host `test.org`, created earlier than A.
pub fn bookmark_b() -> Bookmark {
    Bookmark::new("Test Organisation", "https://test.org/about")
        .unwrap()
        .with_id("b")
        .with_created(at(2024, 1, 1))
}

/// The two-record A/B set.
pub fn scenario() -> Vec<Bookmark> {
    vec![bookmark_b(), bookmark_a()]
}

/// A larger set spanning several hosts and fields.
pub fn rich() -> Vec<Bookmark> {
    vec![
        bookmark_a(),
        bookmark_b(),
        Bookmark::new("The Rust Book", "https://doc.rust-lang.org/book/")
            .unwrap()
            .with_id("rust-book")
            .with_description("Learn RUST from the ground up")
            .with_created(at(2024, 3, 15)),
        Bookmark::new("Axum docs", "https://docs.rs/axum/latest/axum/")
            .unwrap()
            .with_id("axum")
            .with_description("Ergonomic web framework")
            .with_created(at(2024, 4, 2)),
        Bookmark::new("C++ [reference]", "https://en.cppreference.com/w/")
            .unwrap()
            .with_id("cpp")
            .with_created(at(2023, 11, 20)),
        Bookmark::new("Examples archive", "https://archive.example.com/list")
            .unwrap()
            .with_id("archive")
            .with_created(at(2024, 2, 10)),
    ]
}
