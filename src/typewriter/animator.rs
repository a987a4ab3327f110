use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::typewriter::error::AnimatorError;
use crate::typewriter::machine::{Mode, Render, Step, Typewriter, TypewriterTiming};
use crate::typewriter::phrase::Phrase;
use crate::typewriter::scheduler::{Scheduler, TimerId};

/// Callback notified with the new snapshot after every applied transition.
///
/// Runs while the animator's lock is held: a sink must not call back into
/// the [`Animator`] it is attached to.
pub type RenderSink = Arc<dyn Fn(&Render) + Send + Sync>;

/// Timer-driven typewriter.
///
/// Exactly one callback is pending at any time. Each callback applies one
/// transition under the lock and schedules the next one before releasing it.
/// Dropping the animator disposes it.
pub struct Animator {
    shared: Arc<Shared>,
}

struct Shared {
    scheduler: Arc<dyn Scheduler>,
    on_render: Option<RenderSink>,
    slot: Mutex<Slot>,
}

struct Slot {
    machine: Typewriter,
    /// Bumped on every schedule; a callback whose generation is stale is a no-op.
    generation: u64,
    pending: Option<TimerId>,
    disposed: bool,
}

impl Animator {
    /// Start animating `phrases` with the default timing and no render sink.
    pub fn create(
        phrases: Vec<Phrase>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, AnimatorError> {
        Self::create_with(phrases, scheduler, TypewriterTiming::default(), None)
    }

    pub fn create_with(
        phrases: Vec<Phrase>,
        scheduler: Arc<dyn Scheduler>,
        timing: TypewriterTiming,
        on_render: Option<RenderSink>,
    ) -> Result<Self, AnimatorError> {
        let machine = Typewriter::new(phrases, timing)?;
        let first = machine.first_step();
        let phrase_count = machine.phrases().len();

        let shared = Arc::new(Shared {
            scheduler,
            on_render,
            slot: Mutex::new(Slot {
                machine,
                generation: 0,
                pending: None,
                disposed: false,
            }),
        });

        {
            let mut slot = shared.slot.lock();
            schedule_step(&shared, &mut slot, first);
        }

        tracing::debug!(phrases = phrase_count, "typewriter started");
        Ok(Self { shared })
    }

    /// Current text, style tag and phrase index. Never mutates state.
    pub fn current_render(&self) -> Render {
        self.shared.slot.lock().machine.render()
    }

    pub fn mode(&self) -> Mode {
        self.shared.slot.lock().machine.mode()
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.slot.lock().disposed
    }

    /// Stop the animation. Safe to call any number of times.
    pub fn dispose(&self) {
        let mut slot = self.shared.slot.lock();
        if slot.disposed {
            return;
        }
        slot.disposed = true;
        if let Some(id) = slot.pending.take() {
            self.shared.scheduler.cancel(id);
        }
        tracing::debug!(
            phrase_index = slot.machine.phrase_index(),
            "typewriter disposed"
        );
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn schedule_step(shared: &Arc<Shared>, slot: &mut Slot, step: Step) {
    slot.generation += 1;
    let generation = slot.generation;
    let weak = Arc::downgrade(shared);
    let id = shared.scheduler.schedule(
        step.delay(),
        Box::new(move || fire(&weak, generation, step)),
    );
    slot.pending = Some(id);
}

fn fire(weak: &Weak<Shared>, generation: u64, step: Step) {
    let Some(shared) = weak.upgrade() else {
        return;
    };

    let mut slot = shared.slot.lock();
    if slot.disposed || slot.generation != generation {
        return;
    }
    let next = match step {
        Step::Tick(_) => slot.machine.tick(),
        Step::Pause(_) => slot.machine.finish_pause(),
    };
    if let Step::Pause(delay) = next {
        tracing::trace!(pause_ms = delay.as_millis() as u64, "phrase complete");
    }
    schedule_step(&shared, &mut slot, next);

    // Sink runs under the lock; `dispose` waits for it to return.
    if let Some(sink) = &shared.on_render {
        sink(&slot.machine.render());
    }
}
