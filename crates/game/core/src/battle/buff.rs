use std::collections::BTreeMap;

/// A timed status. The effect tag is carried for presentation and never
/// interpreted by the battle rules.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub remaining: f32,
    pub effect: Option<String>,
}

/// Active buffs of a participant, keyed by buff id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Buffs {
    entries: BTreeMap<String, Buff>,
}

impl Buffs {
    /// Applies or refreshes a buff. Non-positive durations are ignored.
    pub fn apply(&mut self, id: impl Into<String>, duration: f32, effect: Option<String>) {
        if duration <= 0.0 {
            return;
        }
        self.entries.insert(
            id.into(),
            Buff {
                remaining: duration,
                effect,
            },
        );
    }

    pub fn remove(&mut self, id: &str) -> Option<Buff> {
        self.entries.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Buff> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Buff)> {
        self.entries.iter().map(|(id, buff)| (id.as_str(), buff))
    }

    /// Decrements every buff by `dt` and drops the expired ones.
    ///
    /// Returns the ids removed this tick.
    pub fn tick(&mut self, dt: f32) -> Vec<String> {
        let mut expired = Vec::new();
        self.entries.retain(|id, buff| {
            buff.remaining -= dt;
            if buff.remaining <= 0.0 {
                expired.push(id.clone());
                false
            } else {
                true
            }
        });
        expired
    }
}
