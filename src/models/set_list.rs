// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ordered set-list store.
//!
//! Holds the sets of the exercise being edited, in insertion order, and
//! hands out ids from a counter that only ever grows for the lifetime of
//! the store. The store knows nothing about persistence or rendering; the
//! tracker wraps every mutation with a snapshot write.

use super::set_record::{SetField, SetId, SetRecord, MAX_SET_ID};
use crate::error::RestoreError;
use std::collections::HashSet;

/// Ordered collection of set records with monotonically allocated ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetList {
    sets: Vec<SetRecord>,
    next_id: SetId,
}

impl SetList {
    /// Create an empty store whose first id will be 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new set, allocating the next id.
    pub fn add_set(
        &mut self,
        reps: Option<f64>,
        weight: Option<f64>,
        rest: Option<f64>,
    ) -> SetRecord {
        let record = SetRecord::new(self.next_id, reps, weight, rest);
        // restored ids are capped at MAX_SET_ID, so this never saturates in practice
        self.next_id = self.next_id.saturating_add(1);
        self.sets.push(record.clone());
        record
    }

    /// Remove the set with the given id. Returns whether anything was removed.
    pub fn remove_set(&mut self, id: SetId) -> bool {
        let before = self.sets.len();
        self.sets.retain(|s| s.id != id);
        self.sets.len() != before
    }

    /// Update one field of a set. Returns whether the set exists.
    pub fn update_field(&mut self, id: SetId, field: SetField, value: Option<f64>) -> bool {
        match self.sets.iter_mut().find(|s| s.id == id) {
            Some(record) => {
                record.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Replace the whole store with restored sets.
    ///
    /// The counter continues after the highest restored id so ids stay
    /// unique across reloads. Repeated ids keep their first occurrence.
    /// Ids above `MAX_SET_ID` are rejected and leave the store unchanged.
    pub fn restore_from_snapshot(&mut self, sets: Vec<SetRecord>) -> Result<(), RestoreError> {
        let mut seen = HashSet::new();
        let mut restored = Vec::with_capacity(sets.len());
        for record in sets {
            if seen.insert(record.id) {
                restored.push(record);
            } else {
                log::warn!("Dropping restored set with duplicate id {}", record.id);
            }
        }

        let next_id = match restored.iter().map(|s| s.id).max() {
            None => 0,
            Some(max) => max
                .checked_add(1)
                .filter(|_| max <= MAX_SET_ID)
                .ok_or(RestoreError::IdOutOfRange(max))?,
        };

        self.next_id = next_id;
        self.sets = restored;
        Ok(())
    }

    /// Sets in display order.
    pub fn sets(&self) -> &[SetRecord] {
        &self.sets
    }

    /// Look up a set by id.
    pub fn get(&self, id: SetId) -> Option<&SetRecord> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// The most recently added set, shown as active.
    pub fn active(&self) -> Option<&SetRecord> {
        self.sets.last()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Id the next `add_set` will hand out.
    #[cfg(test)]
    pub fn next_id(&self) -> SetId {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &SetList) -> Vec<SetId> {
        list.sets().iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut list = SetList::new();
        let mut handed_out = Vec::new();

        for step in 0..20 {
            handed_out.push(list.add_set(None, None, None).id);
            if step % 3 == 0 {
                let first = list.sets()[0].id;
                list.remove_set(first);
            }
            if step % 5 == 0 {
                if let Some(last) = list.active().map(|s| s.id) {
                    list.remove_set(last);
                }
            }
        }

        assert!(handed_out.windows(2).all(|w| w[0] < w[1]));

        let current = ids(&list);
        let unique: HashSet<_> = current.iter().collect();
        assert_eq!(unique.len(), current.len());
    }

    #[test]
    fn test_restore_empty_then_add_starts_at_zero() {
        let mut list = SetList::new();
        list.add_set(None, None, None);
        list.add_set(None, None, None);

        list.restore_from_snapshot(Vec::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.add_set(None, None, None).id, 0);
    }

    #[test]
    fn test_restore_continues_after_max_id() {
        let mut list = SetList::new();
        list.restore_from_snapshot(vec![
            SetRecord::new(3, Some(10.0), None, None),
            SetRecord::new(7, None, Some(20.0), None),
        ])
        .unwrap();

        let added = list.add_set(None, None, None);
        assert_eq!(added.id, 8);
        assert_eq!(ids(&list), vec![3, 7, 8]);
    }

    #[test]
    fn test_restore_drops_duplicate_ids() {
        let mut list = SetList::new();
        list.restore_from_snapshot(vec![
            SetRecord::new(2, Some(1.0), None, None),
            SetRecord::new(2, Some(99.0), None, None),
            SetRecord::new(1, None, None, None),
        ])
        .unwrap();

        assert_eq!(ids(&list), vec![2, 1]);
        assert_eq!(list.get(2).unwrap().reps, Some(1.0));
        assert_eq!(list.next_id(), 3);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut list = SetList::new();
        list.add_set(Some(10.0), Some(15.0), Some(60.0));
        let before = list.clone();

        assert!(!list.remove_set(42));
        assert_eq!(list, before);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut list = SetList::new();
        list.add_set(Some(10.0), None, None);
        let before = list.clone();

        assert!(!list.update_field(42, SetField::Reps, Some(5.0)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_update_field_in_place() {
        let mut list = SetList::new();
        let first = list.add_set(None, None, None);
        list.add_set(None, None, None);

        assert!(list.update_field(first.id, SetField::Rest, Some(90.0)));
        assert_eq!(list.get(first.id).unwrap().rest, Some(90.0));
        assert_eq!(ids(&list), vec![0, 1]);
    }

    #[test]
    fn test_active_is_last_in_insertion_order() {
        let mut list = SetList::new();
        assert!(list.active().is_none());

        list.add_set(None, None, None);
        let second = list.add_set(None, None, None);
        assert_eq!(list.active().unwrap().id, second.id);

        list.remove_set(second.id);
        assert_eq!(list.active().unwrap().id, 0);
    }

    #[test]
    fn test_restore_rejects_ids_past_the_limit() {
        let mut list = SetList::new();
        list.add_set(Some(10.0), None, None);
        let before = list.clone();

        let sets: Vec<SetRecord> =
            serde_json::from_str(r#"[{"id": 18446744073709551615, "reps": 1}]"#).unwrap();
        assert_eq!(
            list.restore_from_snapshot(sets),
            Err(RestoreError::IdOutOfRange(SetId::MAX))
        );
        assert_eq!(
            list.restore_from_snapshot(vec![SetRecord::new(MAX_SET_ID + 1, None, None, None)]),
            Err(RestoreError::IdOutOfRange(MAX_SET_ID + 1))
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_restore_accepts_largest_allowed_id() {
        let mut list = SetList::new();
        list.restore_from_snapshot(vec![SetRecord::new(MAX_SET_ID, None, None, None)])
            .unwrap();

        assert_eq!(list.add_set(None, None, None).id, MAX_SET_ID + 1);
        assert!(list.add_set(None, None, None).id > MAX_SET_ID + 1);
    }
}
