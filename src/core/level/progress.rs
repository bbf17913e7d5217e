//! Level index bookkeeping and delayed level loads.
use bevy::prelude::*;

use crate::gameplay::flight::ports::{DeferredLoad, LevelLoader};

/// Which level is live and which one should be loaded next.
#[derive(Resource, Debug, Default)]
pub struct LevelProgress {
    current: usize,
    count: usize,
    requested: Option<usize>,
}

impl LevelProgress {
    /// Starts with `start` already requested so the first frame spawns it.
    pub fn new(start: usize, count: usize) -> Self {
        let start = if start < count { start } else { 0 };
        Self {
            current: start,
            count,
            requested: (count > 0).then_some(start),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn pending(&self) -> Option<usize> {
        self.requested
    }

    /// Queue a load of `index`; a later request in the same frame replaces an earlier one.
    pub fn request(&mut self, index: usize) -> bool {
        if index >= self.count {
            warn!(target: "level", "ignoring load of level {index}: only {} levels", self.count);
            return false;
        }
        self.requested = Some(index);
        true
    }

    /// Consume the pending request, marking it current.
    pub fn take_request(&mut self) -> Option<usize> {
        let index = self.requested.take()?;
        self.current = index;
        Some(index)
    }
}

struct PendingLoad {
    remaining: f32,
    then: DeferredLoad,
}

/// Timer continuations scheduled through [`LevelLoader::schedule_after`].
/// Cleared whenever a level is (re)loaded, so loads scheduled by a torn-down level never fire.
#[derive(Resource, Default)]
pub struct DeferredLoads {
    pending: Vec<PendingLoad>,
}

impl DeferredLoads {
    pub fn schedule(&mut self, seconds: f32, then: DeferredLoad) {
        self.pending.push(PendingLoad {
            remaining: seconds.max(0.0),
            then,
        });
    }

    /// Count down by `dt` and hand back every continuation that came due, in scheduling order.
    pub fn advance(&mut self, dt: f32) -> Vec<DeferredLoad> {
        let mut due = Vec::new();
        let mut waiting = Vec::with_capacity(self.pending.len());
        for mut p in self.pending.drain(..) {
            p.remaining -= dt;
            if p.remaining <= 0.0 {
                due.push(p.then);
            } else {
                waiting.push(p);
            }
        }
        self.pending = waiting;
        due
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
    pub fn len(&self) -> usize {
        self.pending.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// [`LevelLoader`] over the level resources, borrowed for one system call.
pub struct LevelDirector<'a> {
    progress: &'a mut LevelProgress,
    deferred: &'a mut DeferredLoads,
}

impl<'a> LevelDirector<'a> {
    pub fn new(progress: &'a mut LevelProgress, deferred: &'a mut DeferredLoads) -> Self {
        Self { progress, deferred }
    }
}

impl LevelLoader for LevelDirector<'_> {
    fn load_level(&mut self, index: usize) {
        if self.progress.request(index) {
            info!(target: "level", "level {index} requested (current {})", self.progress.current());
        }
    }
    fn level_count(&self) -> usize {
        self.progress.count()
    }
    fn current_level_index(&self) -> usize {
        self.progress.current()
    }
    fn schedule_after(&mut self, seconds: f32, then: DeferredLoad) {
        debug!(target: "level", "level load scheduled in {seconds:.2}s");
        self.deferred.schedule(seconds, then);
    }
}

/// Fire due continuations against the level resources.
pub fn tick_deferred_loads(
    time: Res<Time>,
    mut deferred: ResMut<DeferredLoads>,
    mut progress: ResMut<LevelProgress>,
) {
    if deferred.is_empty() {
        return;
    }
    let due = deferred.advance(time.delta_secs());
    if due.is_empty() {
        return;
    }
    let mut director = LevelDirector::new(&mut progress, &mut deferred);
    for then in due {
        then(&mut director);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::flight::ports::{load_first_level, load_next_level};

    #[test]
    fn start_out_of_range_falls_back_to_first() {
        let p = LevelProgress::new(7, 3);
        assert_eq!(p.current(), 0);
        assert_eq!(p.pending(), Some(0));
        assert_eq!(LevelProgress::new(0, 0).pending(), None);
    }

    #[test]
    fn deferred_fires_once_after_delay() {
        let mut deferred = DeferredLoads::default();
        deferred.schedule(1.0, Box::new(load_first_level));
        assert!(deferred.advance(0.6).is_empty());
        assert_eq!(deferred.advance(0.6).len(), 1);
        assert!(deferred.is_empty());
        assert!(deferred.advance(5.0).is_empty());
    }

    #[test]
    fn director_wraps_and_rejects_out_of_range() {
        let mut progress = LevelProgress::new(2, 3);
        progress.take_request();
        let mut deferred = DeferredLoads::default();
        let mut director = LevelDirector::new(&mut progress, &mut deferred);
        load_next_level(&mut director);
        director.load_level(9);
        assert_eq!(progress.take_request(), Some(0));
        assert_eq!(progress.current(), 0);
        assert_eq!(progress.take_request(), None);
    }
}
