use std::collections::HashMap;
use std::hash::Hash;

use lotto_db::models::DrawRecord;

/// Valeur renvoyée quand aucune boule n'a pu être identifiée.
pub const NO_BALL: u8 = 0;

/// Attribut catégoriel d'un tirage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Machine,
    BallSet,
}

impl Attribute {
    pub fn value_from<'a>(&self, draw: &'a DrawRecord) -> &'a str {
        match self {
            Attribute::Machine => &draw.machine,
            Attribute::BallSet => &draw.ball_set,
        }
    }
}

/// Compteur d'occurrences qui conserve l'ordre de première rencontre des clés.
#[derive(Debug, Clone)]
pub struct FrequencyCount<K> {
    entries: Vec<(K, u32)>,
    index: HashMap<K, usize>,
}

impl<K> Default for FrequencyCount<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> FrequencyCount<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get(&self, key: &K) -> u32 {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paires (clé, compte) dans l'ordre de première rencontre.
    pub fn entries(&self) -> &[(K, u32)] {
        &self.entries
    }

    /// Paires triées par compte décroissant ; à égalité, la clé rencontrée
    /// en premier reste devant (tri stable).
    pub fn ranked_entries(&self) -> Vec<(K, u32)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    pub fn most_frequent(&self) -> Option<&K> {
        let mut best: Option<&(K, u32)> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(k, _)| k)
    }
}

impl<K: Clone + Eq + Hash> FromIterator<K> for FrequencyCount<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut count = Self::new();
        for key in iter {
            count.record(key);
        }
        count
    }
}

pub fn count_occurrences<'a, I>(draws: I, attribute: Attribute) -> FrequencyCount<&'a str>
where
    I: IntoIterator<Item = &'a DrawRecord>,
{
    draws.into_iter().map(|d| attribute.value_from(d)).collect()
}

/// Compte les sept boules de chaque tirage. Les valeurs de `excluded` ne sont
/// pas comptées du tout.
pub fn count_balls<'a, I>(draws: I, excluded: &[u8]) -> FrequencyCount<u8>
where
    I: IntoIterator<Item = &'a DrawRecord>,
{
    draws
        .into_iter()
        .flat_map(|d| d.all_balls())
        .filter(|b| !excluded.contains(b))
        .collect()
}

pub fn rank_by_frequency_descending<K: Clone + Eq + Hash>(count: &FrequencyCount<K>) -> Vec<K> {
    count.ranked_entries().into_iter().map(|(k, _)| k).collect()
}

pub fn most_frequent_ball<'a, I>(draws: I, excluded: &[u8]) -> Option<u8>
where
    I: IntoIterator<Item = &'a DrawRecord>,
{
    count_balls(draws, excluded).most_frequent().copied()
}

/// Comme [`most_frequent_ball`], mais renvoie [`NO_BALL`] faute de candidat.
pub fn most_frequent_ball_value<'a, I>(draws: I, excluded: &[u8]) -> u8
where
    I: IntoIterator<Item = &'a DrawRecord>,
{
    most_frequent_ball(draws, excluded).unwrap_or(NO_BALL)
}
