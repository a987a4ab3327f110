//! Typewriter text animation.
//!
//! Cycles through a fixed list of phrases, revealing each one a character at
//! a time and then deleting it again, forever:
//!
//! ```text
//! Typing ──(phrase complete, pause)──→ Deleting
//!    ↑                                    │
//!    └──────(text empty, next phrase)─────┘
//! ```
//!
//! - [`Typewriter`]: the pure transition function, no timers involved
//! - [`Animator`]: drives a `Typewriter` through an injected [`Scheduler`]
//! - [`TokioScheduler`] / [`VirtualClock`]: real and simulated time sources

mod animator;
mod clock;
mod error;
mod machine;
mod phrase;
mod scheduler;

pub use animator::{Animator, RenderSink};
pub use clock::VirtualClock;
pub use error::AnimatorError;
pub use machine::{Mode, Render, Step, Typewriter, TypewriterTiming};
pub use phrase::Phrase;
pub use scheduler::{Scheduler, Task, TimerId, TokioScheduler};
