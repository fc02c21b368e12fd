//! Demonstrates sharing one ConcurrentMap as a session registry across threads.
//!
//! Each component receives its own handle to the same map; there is no global.
//!
//! Run with: cargo run --example session_registry

use sovran_syncmap::{ConcurrentMap, Value};
use std::thread;

struct SessionRegistry {
    sessions: ConcurrentMap,
}

impl SessionRegistry {
    fn new(sessions: ConcurrentMap) -> Self {
        Self { sessions }
    }

    fn open(&self, token: &str, user: &str) {
        self.sessions.store(format!("session:{}", token), user);
    }

    fn user_for(&self, token: &str) -> Option<String> {
        match self.sessions.load(&format!("session:{}", token)) {
            Some(Value::String(user)) => Some(user.into_inner()),
            Some(other) => {
                eprintln!("session {} holds a {}, not a user name", token, other.kind());
                None
            }
            None => None,
        }
    }

    fn close(&self, token: &str) -> bool {
        self.sessions.delete(&format!("session:{}", token))
    }
}

struct LoginCounter {
    counts: ConcurrentMap,
}

impl LoginCounter {
    fn new(counts: ConcurrentMap) -> Self {
        Self { counts }
    }

    fn record(&self, user: &str, logins: i64) {
        self.counts.store(format!("logins:{}", user), logins);
    }

    fn logins(&self, user: &str) -> i64 {
        self.counts
            .load(&format!("logins:{}", user))
            .and_then(|v| v.as_integer())
            .unwrap_or(0)
    }
}

fn main() {
    env_logger::init();

    let shared = ConcurrentMap::new();

    let workers: Vec<_> = ["alice", "bob", "carol"]
        .into_iter()
        .enumerate()
        .map(|(i, user)| {
            let registry = SessionRegistry::new(shared.clone());
            let counter = LoginCounter::new(shared.clone());
            thread::spawn(move || {
                let token = format!("tok-{}", i);
                registry.open(&token, user);
                counter.record(user, i as i64 + 1);
                token
            })
        })
        .collect();

    let mut tokens = Vec::new();
    for worker in workers {
        match worker.join() {
            Ok(token) => tokens.push(token),
            Err(_) => eprintln!("a worker thread panicked"),
        }
    }

    let registry = SessionRegistry::new(shared.clone());
    let counter = LoginCounter::new(shared.clone());

    for token in &tokens {
        if let Some(user) = registry.user_for(token) {
            println!("{} -> {} ({} logins)", token, user, counter.logins(&user));
        }
    }

    // Closing twice only removes the session once
    if let Some(token) = tokens.first() {
        println!("close {}: {}", token, registry.close(token));
        println!("close {} again: {}", token, registry.close(token));
    }

    println!("Registry now holds {} entries", shared.len());
}
