//! # sovran-syncmap
//!
//! A thread-safe key-value store holding a closed set of typed values.
//!
//! `sovran-syncmap` gives many threads a shared mapping from string keys to
//! values without each of them having to manage a lock. Values come from a
//! fixed set of kinds (strings and integers), and callers match on the kind to
//! get the payload back in its native type.
//!
//! ## Key Features
//!
//! - **Thread-safe**: A single `Arc<Mutex<_>>` serializes every operation
//! - **Infallible**: `store`, `load` and `delete` never fail; a missing key is `None` or `false`
//! - **Closed value set**: `Value` is an enum, so retrieval sites match exhaustively
//! - **Shared by handle**: Cloning a `ConcurrentMap` shares the same entries
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_syncmap::{ConcurrentMap, Value};
//!
//! let map = ConcurrentMap::new();
//!
//! map.store("foo", "bar");
//! map.store("foo2", 2i64);
//!
//! match map.load("foo") {
//!     Some(Value::String(s)) => println!("foo = {}", s.value()),
//!     Some(other) => println!("foo holds an unexpected {}", other.kind()),
//!     None => println!("foo is missing"),
//! }
//!
//! assert_eq!(map.load("foo2").and_then(|v| v.as_integer()), Some(2));
//! assert!(map.load("foo3").is_none());
//!
//! assert!(map.delete("foo"));
//! assert!(!map.delete("foo"));
//! ```
//!
//! ### Sharing Between Threads
//!
//! ```rust
//! use sovran_syncmap::ConcurrentMap;
//! use std::thread;
//!
//! let sessions = ConcurrentMap::new();
//!
//! let handles: Vec<_> = (0..4i64)
//!     .map(|worker| {
//!         let sessions = sessions.clone();
//!         thread::spawn(move || {
//!             sessions.store(format!("worker-{}", worker), worker);
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(sessions.len(), 4);
//! ```
//!
//! ### Typed Loads
//!
//! ```rust
//! use sovran_syncmap::{ConcurrentMap, IntegerValue, StringValue, ValueError};
//!
//! let map = ConcurrentMap::new();
//! map.store("retries", 3i64);
//!
//! match map.load_as::<StringValue>("retries") {
//!     Ok(Some(s)) => println!("retries: {}", s.value()),
//!     Ok(None) => println!("retries not set"),
//!     Err(ValueError::KindMismatch { expected, found }) => {
//!         println!("wanted {}, found {}", expected, found)
//!     }
//! }
//!
//! let retries = map.load_as::<IntegerValue>("retries").ok().flatten();
//! assert_eq!(retries.map(|r| r.value()), Some(3));
//! ```

mod error;
mod map;
mod value;

pub use error::ValueError;
pub use map::ConcurrentMap;
pub use value::{IntegerValue, StringValue, TypedValue, Value, ValueKind};
