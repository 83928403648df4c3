//! A merged scene list kept in step with several component lists.
//!
//! The combined list is fed the component lists' change events. Additions
//! are copied in at the end; removals are located by counting only the
//! entries that came from the same component, so interleaving with other
//! components does not shift the count. While [`CombinedSceneList::order`]
//! rebuilds the list it clears it itself, and removal events raised by the
//! component sorts are ignored.

use std::ops::Range;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, SceneCacheError};
use crate::scene::Scene;
use crate::scene_list::{ListEvent, SceneList};

/// A scene in the combined list and the component it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedEntry {
    pub component: usize,
    pub scene: Scene,
}

/// The merged list.
#[derive(Debug, Default)]
pub struct CombinedSceneList {
    entries: Vec<CombinedEntry>,
    ordering: bool,
}

impl CombinedSceneList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one change event raised by component `component`, whose list
    /// is `source` after the change.
    pub fn handle_event(&mut self, component: usize, source: &SceneList, event: &ListEvent) {
        match event {
            ListEvent::IntervalAdded(range) => {
                self.interval_added(component, source, range.clone())
            }
            ListEvent::IntervalRemoved(range) => self.interval_removed(component, range.clone()),
        }
    }

    fn interval_added(&mut self, component: usize, source: &SceneList, range: Range<usize>) {
        let Some(added) = source.scenes().get(range.clone()) else {
            warn!(
                component,
                start = range.start,
                end = range.end,
                len = source.len(),
                "Added interval is outside the component list"
            );
            return;
        };
        self.entries.extend(added.iter().map(|scene| CombinedEntry {
            component,
            scene: scene.clone(),
        }));
    }

    fn interval_removed(&mut self, component: usize, range: Range<usize>) {
        if self.ordering {
            debug!(component, "Ignoring removal raised while reordering");
            return;
        }
        let mut index = 0;
        self.entries.retain(|entry| {
            if entry.component != component {
                return true;
            }
            let keep = !range.contains(&index);
            index += 1;
            keep
        });
    }

    /// Re-sort every component and rebuild the merged list in grid address,
    /// then date order.
    pub fn order(&mut self, components: &mut [SceneList]) {
        self.ordering = true;
        self.entries.clear();
        for (component, list) in components.iter_mut().enumerate() {
            for event in list.sort() {
                self.handle_event(component, list, &event);
            }
        }
        self.entries.sort_by(|a, b| {
            a.scene
                .sort_key()
                .cmp(&b.scene.sort_key())
                .then(a.component.cmp(&b.component))
        });
        self.ordering = false;
        debug!(entries = self.entries.len(), "Reordered combined scene list");
    }

    /// Whether the entries from each component are exactly that
    /// component's list, in order.
    pub fn is_in_sync_with(&self, components: &[SceneList]) -> bool {
        let stray = self.entries.iter().any(|e| e.component >= components.len());
        if stray {
            return false;
        }
        components.iter().enumerate().all(|(component, list)| {
            self.entries
                .iter()
                .filter(|e| e.component == component)
                .map(|e| &e.scene)
                .eq(list.scenes().iter())
        })
    }

    pub fn entries(&self) -> &[CombinedEntry] {
        &self.entries
    }

    /// Entries from one component.
    pub fn count_for(&self, component: usize) -> usize {
        self.entries.iter().filter(|e| e.component == component).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Component lists and their merged view, mutated together so every change
/// reaches the merged list.
#[derive(Debug)]
pub struct CompositeSceneList {
    names: Vec<String>,
    components: Vec<SceneList>,
    combined: CombinedSceneList,
}

impl CompositeSceneList {
    /// One empty component list per name.
    pub fn new<I, S>(component_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = component_names.into_iter().map(Into::into).collect();
        let components = vec![SceneList::new(); names.len()];
        Self {
            names,
            components,
            combined: CombinedSceneList::new(),
        }
    }

    /// Append scenes to one component.
    pub fn append(
        &mut self,
        component: usize,
        scenes: impl IntoIterator<Item = Scene>,
    ) -> Result<()> {
        let list = self
            .components
            .get_mut(component)
            .ok_or(SceneCacheError::UnknownComponent(component))?;
        if let Some(event) = list.append(scenes) {
            self.combined.handle_event(component, list, &event);
        }
        Ok(())
    }

    /// Remove a range of one component.
    pub fn remove_range(&mut self, component: usize, range: Range<usize>) -> Result<()> {
        let list = self
            .components
            .get_mut(component)
            .ok_or(SceneCacheError::UnknownComponent(component))?;
        if let Some(event) = list.remove_range(range)? {
            self.combined.handle_event(component, list, &event);
        }
        Ok(())
    }

    /// Sort every list by grid address, then date.
    pub fn order(&mut self) {
        self.combined.order(&mut self.components);
    }

    /// Whether the merged list matches the components. Logs a warning
    /// when it does not.
    pub fn is_in_sync(&self) -> bool {
        let in_sync = self.combined.is_in_sync_with(&self.components);
        if !in_sync {
            warn!(
                combined = self.combined.len(),
                components = ?self.components.iter().map(SceneList::len).collect::<Vec<_>>(),
                "Combined scene list is out of sync"
            );
        }
        in_sync
    }

    pub fn combined(&self) -> &CombinedSceneList {
        &self.combined
    }

    pub fn component(&self, index: usize) -> Option<&SceneList> {
        self.components.get(index)
    }

    pub fn component_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
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

    fn ids(list: &CombinedSceneList) -> Vec<&str> {
        list.entries()
            .iter()
            .map(|e| e.scene.entity_id.as_str())
            .collect()
    }

    #[test]
    fn test_additions_append_in_signal_order() {
        let mut composite = CompositeSceneList::new(["tm", "mss"]);
        composite.append(0, vec![scene("a1", 1, 1)]).unwrap();
        composite.append(1, vec![scene("b1", 1, 2)]).unwrap();
        composite.append(0, vec![scene("a2", 2, 1)]).unwrap();
        assert_eq!(ids(composite.combined()), vec!["a1", "b1", "a2"]);
        assert!(composite.is_in_sync());
    }

    #[test]
    fn test_removal_counts_only_own_component() {
        let mut composite = CompositeSceneList::new(["tm", "mss"]);
        composite.append(0, vec![scene("a0", 1, 1)]).unwrap();
        composite.append(1, vec![scene("b0", 1, 1), scene("b1", 1, 2)]).unwrap();
        composite
            .append(0, vec![scene("a1", 2, 1), scene("a2", 3, 1)])
            .unwrap();

        // Component 0 index 1 is the fourth combined entry
        composite.remove_range(0, 1..2).unwrap();
        assert_eq!(ids(composite.combined()), vec!["a0", "b0", "b1", "a2"]);
        assert!(composite.is_in_sync());
    }

    #[test]
    fn test_order_ignores_sort_removals() {
        let mut composite = CompositeSceneList::new(["tm", "mss"]);
        composite.append(0, vec![scene("a-late", 2, 9), scene("a-early", 2, 1)]).unwrap();
        composite.append(1, vec![scene("b", 1, 5)]).unwrap();

        composite.order();
        assert_eq!(ids(composite.combined()), vec!["b", "a-early", "a-late"]);
        assert_eq!(composite.combined().len(), 3);
        assert!(composite.is_in_sync());
    }

    #[test]
    fn test_unknown_component() {
        let mut composite = CompositeSceneList::new(["tm"]);
        assert_eq!(
            composite.append(2, vec![scene("x", 1, 1)]),
            Err(SceneCacheError::UnknownComponent(2))
        );
        assert!(composite.remove_range(0, 0..1).is_err());
    }

    #[test]
    fn test_detects_out_of_sync() {
        let mut combined = CombinedSceneList::new();
        let mut list = SceneList::new();
        let event = list.append(vec![scene("a", 1, 1)]).unwrap();
        assert!(!combined.is_in_sync_with(std::slice::from_ref(&list)));
        combined.handle_event(0, &list, &event);
        assert!(combined.is_in_sync_with(std::slice::from_ref(&list)));
    }
}
