//! The user registry: best scores and leaderboard ordering.

use crate::model::User;

/// Ordered, in-memory collection of users.
///
/// Usernames are meant to be unique. If a loaded file contains duplicates,
/// lookups and updates act on the first match and `delete` removes them all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    pub fn into_vec(self) -> Vec<User> {
        self.users
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, User> {
        self.users.iter_mut()
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    fn find_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.username == username)
    }

    /// Create `username` with score 0 unless it already exists.
    ///
    /// Returns `true` if a record was created.
    pub fn ensure_exists(&mut self, username: &str) -> bool {
        if self.find(username).is_some() {
            return false;
        }
        tracing::debug!(username, "registering new user");
        self.users.push(User::new(username));
        true
    }

    /// Raise the stored score to `score` if it is strictly greater.
    ///
    /// Returns `true` when the stored score changed. Unknown users are
    /// ignored.
    pub fn update_best_score(&mut self, username: &str, score: u32) -> bool {
        match self.find_mut(username) {
            Some(user) if score > user.score => {
                tracing::info!(username, previous = user.score, score, "new best score");
                user.score = score;
                true
            }
            _ => false,
        }
    }

    /// Stored best score, or 0 for a user that does not exist.
    pub fn best_score(&self, username: &str) -> u32 {
        self.find(username).map_or(0, |u| u.score)
    }

    /// Remove every record named `username` and return how many went.
    pub fn delete(&mut self, username: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|u| u.username != username);
        let removed = before - self.users.len();
        if removed > 0 {
            tracing::debug!(username, removed, "deleted user");
        }
        removed
    }

    /// All users by score, highest first. Equal scores keep registry order.
    pub fn leaderboard(&self) -> Vec<&User> {
        let mut ranked: Vec<&User> = self.users.iter().collect();
        // `sort_by` is stable, which keeps ties in insertion order.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

impl From<Vec<User>> for UserRegistry {
    fn from(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl FromIterator<User> for UserRegistry {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a UserRegistry {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}
