use std::collections::VecDeque;

use crate::problem::Signature;

/// Most recently asked problems, oldest first. Pushing past capacity evicts
/// the oldest signature.
#[derive(Debug, Clone)]
pub struct RecentQuestionLog {
    entries: VecDeque<Signature>,
    capacity: usize,
}

impl RecentQuestionLog {
    pub const DEFAULT_CAPACITY: usize = 6;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn contains(&self, signature: &Signature) -> bool {
        self.entries.contains(signature)
    }

    pub fn push(&mut self, signature: Signature) {
        self.entries.push_back(signature);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.entries.iter()
    }
}

impl Default for RecentQuestionLog {
    fn default() -> Self {
        Self::new()
    }
}
