use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered accumulator.
///
/// Keys keep the order in which they were first seen, so a stable sort over
/// `into_vec()` breaks ties first-encountered-first.
#[derive(Debug, Clone)]
pub struct Tally<K, V> {
    index: HashMap<K, usize>,
    slots: Vec<(K, V)>,
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            slots: Vec::new(),
        }
    }

    /// Value for `key`, created with `init` on first sight
    pub fn entry(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let existing = self.index.get(&key).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => {
                self.slots.push((key.clone(), init()));
                self.index.insert(key, self.slots.len() - 1);
                self.slots.len() - 1
            }
        };
        &mut self.slots[slot].1
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.slots[slot].1)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, V)> {
        self.slots.iter()
    }

    /// First slot holding the largest `score`
    pub fn leader_by<F>(&self, score: F) -> Option<&(K, V)>
    where
        F: Fn(&V) -> u64,
    {
        self.slots.iter().fold(None, |best: Option<&(K, V)>, slot| match best {
            Some(current) if score(&current.1) >= score(&slot.1) => Some(current),
            _ => Some(slot),
        })
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.slots
    }
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
    V: Default + std::ops::AddAssign,
{
    pub fn add(&mut self, key: K, amount: V) {
        *self.entry(key, V::default) += amount;
    }
}

impl<K, V> Default for Tally<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
