//! An ordered list of scenes that reports its own mutations.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneCacheError};
use crate::scene::Scene;

/// A change to a scene list, in index ranges of the list after the change
/// for additions and before the change for removals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListEvent {
    IntervalAdded(Range<usize>),
    IntervalRemoved(Range<usize>),
}

/// Scenes of one dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneList {
    scenes: Vec<Scene>,
}

impl SceneList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append scenes at the end. Returns `None` if nothing was added.
    pub fn append(&mut self, scenes: impl IntoIterator<Item = Scene>) -> Option<ListEvent> {
        let start = self.scenes.len();
        self.scenes.extend(scenes);
        let end = self.scenes.len();
        (end > start).then_some(ListEvent::IntervalAdded(start..end))
    }

    /// Remove a contiguous range. An empty range is not an event.
    pub fn remove_range(&mut self, range: Range<usize>) -> Result<Option<ListEvent>> {
        if range.start > range.end || range.end > self.scenes.len() {
            return Err(SceneCacheError::invalid_range(&range, self.scenes.len()));
        }
        if range.is_empty() {
            return Ok(None);
        }
        self.scenes.drain(range.clone());
        Ok(Some(ListEvent::IntervalRemoved(range)))
    }

    /// Sort by grid address then date.
    ///
    /// Reported as the whole list being removed and added back.
    pub fn sort(&mut self) -> Vec<ListEvent> {
        let len = self.scenes.len();
        self.scenes.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        if len == 0 {
            Vec::new()
        } else {
            vec![ListEvent::IntervalRemoved(0..len), ListEvent::IntervalAdded(0..len)]
        }
    }

    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use geo_common::GridAddress;

    fn scene(id: &str, column: i32, day: u32) -> Scene {
        Scene::new(
            id,
            GridAddress::new(column, 30),
            NaiveDate::from_ymd_opt(2010, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_append_reports_new_range() {
        let mut list = SceneList::new();
        assert_eq!(
            list.append(vec![scene("a", 1, 1), scene("b", 2, 1)]),
            Some(ListEvent::IntervalAdded(0..2))
        );
        assert_eq!(list.append(vec![scene("c", 3, 1)]), Some(ListEvent::IntervalAdded(2..3)));
        assert_eq!(list.append(Vec::new()), None);
    }

    #[test]
    fn test_remove_range() {
        let mut list = SceneList::new();
        list.append(vec![scene("a", 1, 1), scene("b", 2, 1), scene("c", 3, 1)]);
        assert_eq!(
            list.remove_range(1..2),
            Ok(Some(ListEvent::IntervalRemoved(1..2)))
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(|s| s.entity_id.as_str()), Some("c"));
        assert_eq!(list.remove_range(1..1), Ok(None));
        assert!(list.remove_range(1..5).is_err());
    }

    #[test]
    fn test_sort_by_address_then_date() {
        let mut list = SceneList::new();
        list.append(vec![scene("late", 2, 9), scene("x", 1, 5), scene("early", 2, 3)]);
        let events = list.sort();
        assert_eq!(events.len(), 2);
        let ids: Vec<&str> = list.scenes().iter().map(|s| s.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["x", "early", "late"]);
    }
}
