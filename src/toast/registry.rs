// SPDX-License-Identifier: MPL-2.0
//! Ordered toast collection.
//!
//! The `Registry` is the sole owner of toast state. Every mutator is a total,
//! idempotent function of the current state plus the time passed in: unknown
//! ids and wrong phases are silent no-ops, because renderers legitimately
//! race with scheduler-driven removal.

use super::entity::{Kind, Overrides, Toast, ToastId};
use std::time::{Duration, Instant};

/// Insertion-ordered toasts plus the id counter.
#[derive(Debug)]
pub struct Registry {
    toasts: Vec<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Registry {
    /// Creates an empty registry whose toasts count down from `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            duration,
        }
    }

    /// Appends a new pending toast and returns its id.
    ///
    /// Ids come from a counter that is never reset, so they stay unique for
    /// the registry's whole lifetime, even across [`Registry::clear`].
    pub fn create(
        &mut self,
        message: impl Into<String>,
        kind: Kind,
        overrides: Overrides,
    ) -> ToastId {
        let id = ToastId::from_raw(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast::new(
            id,
            message.into(),
            kind,
            overrides,
            self.duration,
        ));
        id
    }

    /// Promotes a pending toast to visible.
    pub fn activate(&mut self, id: ToastId, now: Instant) -> bool {
        self.get_mut(id).is_some_and(|toast| toast.activate(now))
    }

    /// Ages every visible, unpaused toast against one shared `now`.
    ///
    /// Returns the ids that expired during this call, in insertion order.
    pub fn age(&mut self, now: Instant) -> Vec<ToastId> {
        self.toasts
            .iter_mut()
            .filter_map(|toast| toast.age(now).then(|| toast.id()))
            .collect()
    }

    pub fn pause(&mut self, id: ToastId, now: Instant) -> bool {
        self.get_mut(id).is_some_and(|toast| toast.pause(now))
    }

    pub fn resume(&mut self, id: ToastId, now: Instant) -> bool {
        self.get_mut(id).is_some_and(|toast| toast.resume(now))
    }

    /// Hides a pending or visible toast. Returns `true` only on the call that
    /// performed the transition.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.get_mut(id).is_some_and(Toast::hide)
    }

    /// Drops a toast from the collection.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id() != id);
        self.toasts.len() < before
    }

    /// Removes every toast. The id counter keeps running.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|toast| toast.id() == id)
    }

    /// Returns an immutable copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            toasts: self.toasts.clone(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Earliest expiry among visible, unpaused toasts.
    #[must_use]
    pub fn next_expiry(&self) -> Option<Instant> {
        self.toasts.iter().filter_map(Toast::expires_at).min()
    }

    /// Whether any toast is currently visible (paused or not).
    #[must_use]
    pub fn has_visible(&self) -> bool {
        self.toasts.iter().any(Toast::is_visible)
    }
}

/// A point-in-time, insertion-ordered view of the registry.
///
/// The view does not follow later mutations and can be iterated any number
/// of times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    toasts: Vec<Toast>,
}

impl Snapshot {
    pub fn iter(&self) -> std::slice::Iter<'_, Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Toast;
    type IntoIter = std::slice::Iter<'a, Toast>;

    fn into_iter(self) -> Self::IntoIter {
        self.toasts.iter()
    }
}

impl IntoIterator for Snapshot {
    type Item = Toast;
    type IntoIter = std::vec::IntoIter<Toast>;

    fn into_iter(self) -> Self::IntoIter {
        self.toasts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Phase;
    use std::collections::HashSet;

    const DURATION: Duration = Duration::from_millis(3000);

    fn registry() -> Registry {
        Registry::new(DURATION)
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = registry();
        assert!(registry.is_empty());
        assert!(!registry.has_visible());
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn create_appends_pending_toast() {
        let mut registry = registry();
        let id = registry.create("Saved", Kind::Success, Overrides::default());

        let toast = registry.get(id).expect("toast should exist");
        assert_eq!(toast.phase(), Phase::Pending);
        assert_eq!(toast.remaining(), DURATION);
        assert!(!toast.is_paused());
        assert_eq!(toast.message(), "Saved");
    }

    #[test]
    fn ids_are_unique_across_clear() {
        let mut registry = registry();
        let mut seen = HashSet::new();
        for i in 0..50 {
            assert!(seen.insert(registry.create(format!("m{i}"), Kind::Error, Overrides::default())));
            if i % 10 == 0 {
                registry.clear();
            }
        }
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut registry = registry();
        let a = registry.create("a", Kind::Success, Overrides::default());
        let b = registry.create("b", Kind::Error, Overrides::default());
        let c = registry.create("c", Kind::Success, Overrides::default());

        let ids: Vec<_> = registry.snapshot().iter().map(Toast::id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn snapshot_is_not_live() {
        let mut registry = registry();
        let id = registry.create("a", Kind::Success, Overrides::default());
        let snapshot = registry.snapshot();

        registry.dismiss(id);
        registry.create("b", Kind::Success, Overrides::default());

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get(id).map(Toast::phase), Some(Phase::Pending));
        // Restartable: a second pass sees the same items.
        assert_eq!(snapshot.iter().count(), (&snapshot).into_iter().count());
    }

    #[test]
    fn dismiss_transitions_once() {
        let mut registry = registry();
        let id = registry.create("a", Kind::Success, Overrides::default());

        assert!(registry.dismiss(id));
        assert!(!registry.dismiss(id));
        assert!(!registry.dismiss(id));
        assert!(registry.get(id).is_some_and(Toast::is_hidden));
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut registry = registry();
        let ghost = ToastId::from_raw(99);
        let now = Instant::now();

        assert!(!registry.dismiss(ghost));
        assert!(!registry.pause(ghost, now));
        assert!(!registry.resume(ghost, now));
        assert!(!registry.activate(ghost, now));
        assert!(!registry.remove(ghost));
    }

    #[test]
    fn age_reports_only_newly_expired() {
        let mut registry = registry();
        let t0 = Instant::now();
        let early = registry.create("early", Kind::Success, Overrides::default());
        let late = registry.create("late", Kind::Success, Overrides::default());
        registry.activate(early, t0);
        registry.activate(late, t0 + Duration::from_millis(1000));

        assert_eq!(registry.age(t0 + Duration::from_millis(3000)), vec![early]);
        assert!(registry.age(t0 + Duration::from_millis(3100)).is_empty());
        assert_eq!(registry.age(t0 + Duration::from_millis(4000)), vec![late]);
    }

    #[test]
    fn shared_now_preserves_relative_order() {
        let mut registry = registry();
        let t0 = Instant::now();
        let first = registry.create("first", Kind::Success, Overrides::default());
        let second = registry.create("second", Kind::Success, Overrides::default());
        registry.activate(first, t0);
        registry.activate(second, t0 + Duration::from_millis(20));

        registry.age(t0 + Duration::from_millis(500));

        let first_left = registry.get(first).map(Toast::remaining);
        let second_left = registry.get(second).map(Toast::remaining);
        assert!(first_left < second_left);
    }

    #[test]
    fn remove_drops_toast() {
        let mut registry = registry();
        let id = registry.create("a", Kind::Success, Overrides::default());
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn next_expiry_skips_paused_and_pending_toasts() {
        let mut registry = registry();
        let t0 = Instant::now();
        let early = registry.create("early", Kind::Success, Overrides::default());
        let late = registry.create("late", Kind::Success, Overrides::default());
        registry.create("pending", Kind::Success, Overrides::default());
        registry.activate(early, t0);
        registry.activate(late, t0 + Duration::from_millis(7));

        assert_eq!(registry.next_expiry(), Some(t0 + DURATION));

        registry.pause(early, t0 + Duration::from_millis(100));
        assert_eq!(
            registry.next_expiry(),
            Some(t0 + Duration::from_millis(7) + DURATION)
        );

        registry.dismiss(late);
        assert_eq!(registry.next_expiry(), None);
    }
}
