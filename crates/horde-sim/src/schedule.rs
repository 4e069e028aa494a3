//! Deferred effects as tagged, cancellable scheduled tasks.
//!
//! Reload completion, staggered zombie spawns, and wave advancement
//! all apply on a later tick, never synchronously mid-update. Every
//! task carries the session generation it was scheduled under; a task
//! fires only if its generation still matches, so a timer started in
//! one session can never mutate a reset or restarted game.

/// What a task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskKind {
    /// Spawn one zombie of the current wave.
    SpawnZombie { boss: bool },
    /// Advance to the next wave after the grace delay.
    AdvanceWave,
    /// Complete the reload of the weapon in `slot`.
    FinishReload { slot: usize },
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    fire_at_secs: f64,
    generation: u64,
    kind: TaskKind,
}

/// Pending deferred effects plus the live session generation.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    tasks: Vec<ScheduledTask>,
    generation: u64,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Queue a task under the current generation.
    pub fn push(&mut self, fire_at_secs: f64, kind: TaskKind) {
        self.tasks.push(ScheduledTask {
            fire_at_secs,
            generation: self.generation,
            kind,
        });
    }

    /// Start a new session generation. Tasks from earlier generations
    /// are dropped lazily when they come due.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Drain all tasks due at `now`, in scheduling order. Stale-
    /// generation tasks are discarded without firing.
    pub fn take_due(&mut self, now_secs: f64) -> Vec<TaskKind> {
        let generation = self.generation;
        let mut due = Vec::new();
        self.tasks.retain(|task| {
            if task.fire_at_secs > now_secs {
                return true;
            }
            if task.generation == generation {
                due.push(task.kind);
            }
            false
        });
        due
    }

    /// Drop pending tasks matching the predicate.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&TaskKind) -> bool) {
        self.tasks.retain(|task| !predicate(&task.kind));
    }

    /// Number of live pending tasks.
    pub fn pending(&self) -> usize {
        let generation = self.generation;
        self.tasks
            .iter()
            .filter(|t| t.generation == generation)
            .count()
    }
}
