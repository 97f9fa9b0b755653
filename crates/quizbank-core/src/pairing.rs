//! Two-player session pairing.
//!
//! A session is only a label written onto both players' records; nothing
//! here synchronizes play between them.

use std::fmt;

use rand::Rng;

use crate::registry::UserRegistry;

/// Inclusive range of the random suffix appended to session ids.
const SUFFIX_RANGE: std::ops::RangeInclusive<u32> = 1000..=9999;

/// A generated `"{user1}_{user2}_{NNNN}"` tag.
///
/// Ids are not unique; two pairings may produce the same one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    fn generate<R: Rng + ?Sized>(user1: &str, user2: &str, rng: &mut R) -> Self {
        let suffix = rng.gen_range(SUFFIX_RANGE);
        Self(format!("{user1}_{user2}_{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pair `user1` and `user2` using the thread-local RNG.
pub fn start_session(users: &mut UserRegistry, user1: &str, user2: &str) -> SessionId {
    start_session_with_rng(users, user1, user2, &mut rand::thread_rng())
}

/// Pair `user1` and `user2`, drawing the suffix from `rng`.
///
/// The id is always generated. It is written onto every existing record
/// named `user1` or `user2`; names without a record are not created.
pub fn start_session_with_rng<R: Rng + ?Sized>(
    users: &mut UserRegistry,
    user1: &str,
    user2: &str,
    rng: &mut R,
) -> SessionId {
    let id = SessionId::generate(user1, user2, rng);
    let mut tagged = 0usize;
    for user in users.iter_mut() {
        if user.username == user1 || user.username == user2 {
            user.current_game = id.as_str().to_owned();
            tagged += 1;
        }
    }
    tracing::info!(session = %id, tagged, "started session");
    id
}

/// The session recorded on `username`, or `None` if the user does not exist.
///
/// An existing user who was never paired yields `Some("")`.
pub fn current_session<'a>(users: &'a UserRegistry, username: &str) -> Option<&'a str> {
    users.find(username).map(|u| u.current_game.as_str())
}
