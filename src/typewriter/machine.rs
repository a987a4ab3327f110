use std::sync::Arc;
use std::time::Duration;

use crate::typewriter::error::AnimatorError;
use crate::typewriter::phrase::Phrase;

/// Whether characters are currently being added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Typing,
    Deleting,
}

/// Delays between transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between two typed characters.
    pub type_interval: Duration,
    /// Delay between two deleted characters.
    pub delete_interval: Duration,
    /// Hold time on a fully typed phrase before deleting starts.
    pub pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            delete_interval: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
        }
    }
}

/// What the driver has to schedule after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Call [`Typewriter::tick`] again after the delay.
    Tick(Duration),
    /// Call [`Typewriter::finish_pause`] after the delay.
    Pause(Duration),
}

impl Step {
    pub fn delay(&self) -> Duration {
        match self {
            Step::Tick(delay) | Step::Pause(delay) => *delay,
        }
    }
}

/// Read-only snapshot handed to the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Render {
    pub text: String,
    pub style: Option<String>,
    pub phrase_index: usize,
}

/// Pure typewriter state machine.
///
/// `visible_text` is always a prefix of the active phrase, counted in
/// `char`s so multi-byte text is never split.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Arc<[Phrase]>,
    timing: TypewriterTiming,
    phrase_index: usize,
    visible_text: String,
    visible_chars: usize,
    mode: Mode,
}

impl Typewriter {
    pub fn new(phrases: Vec<Phrase>, timing: TypewriterTiming) -> Result<Self, AnimatorError> {
        if phrases.is_empty() {
            return Err(AnimatorError::EmptyPhraseList);
        }
        if let Some(index) = phrases.iter().position(|phrase| phrase.text.is_empty()) {
            return Err(AnimatorError::EmptyPhrase { index });
        }

        Ok(Self {
            phrases: phrases.into(),
            timing,
            phrase_index: 0,
            visible_text: String::new(),
            visible_chars: 0,
            mode: Mode::Typing,
        })
    }

    /// The step to schedule right after construction.
    pub fn first_step(&self) -> Step {
        Step::Tick(self.timing.type_interval)
    }

    /// Apply one transition and report what to schedule next.
    pub fn tick(&mut self) -> Step {
        let active = &self.phrases[self.phrase_index].text;
        match self.mode {
            Mode::Typing => match active.chars().nth(self.visible_chars) {
                Some(next) => {
                    self.visible_text.push(next);
                    self.visible_chars += 1;
                    Step::Tick(self.timing.type_interval)
                }
                None => Step::Pause(self.timing.pause),
            },
            Mode::Deleting => {
                if self.visible_text.pop().is_some() {
                    self.visible_chars -= 1;
                    Step::Tick(self.timing.delete_interval)
                } else {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                    Step::Tick(self.timing.type_interval)
                }
            }
        }
    }

    /// End of the hold on a complete phrase: start deleting.
    pub fn finish_pause(&mut self) -> Step {
        self.mode = Mode::Deleting;
        Step::Tick(self.timing.delete_interval)
    }

    pub fn render(&self) -> Render {
        let phrase = &self.phrases[self.phrase_index];
        Render {
            text: self.visible_text.clone(),
            style: phrase.style.clone(),
            phrase_index: self.phrase_index,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn visible_text(&self) -> &str {
        &self.visible_text
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(texts: &[&str]) -> Typewriter {
        let phrases = texts.iter().map(|text| Phrase::new(*text)).collect();
        Typewriter::new(phrases, TypewriterTiming::default()).unwrap()
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn rejects_empty_phrase_list() {
        let err = Typewriter::new(Vec::new(), TypewriterTiming::default()).unwrap_err();
        assert_eq!(err, AnimatorError::EmptyPhraseList);
    }

    #[test]
    fn rejects_phrase_without_text() {
        let phrases = vec![Phrase::new("ok"), Phrase::new("")];
        let err = Typewriter::new(phrases, TypewriterTiming::default()).unwrap_err();
        assert_eq!(err, AnimatorError::EmptyPhrase { index: 1 });
    }

    #[test]
    fn starts_typing_with_empty_text() {
        let tw = machine(&["AI"]);
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.visible_text(), "");
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.first_step(), Step::Tick(ms(100)));
    }

    #[test]
    fn full_cycle_for_two_phrases() {
        let mut tw = machine(&["AI", "ML"]);

        assert_eq!(tw.tick(), Step::Tick(ms(100)));
        assert_eq!(tw.visible_text(), "A");
        assert_eq!(tw.tick(), Step::Tick(ms(100)));
        assert_eq!(tw.visible_text(), "AI");

        // Complete phrase: nothing changes, a pause is requested.
        assert_eq!(tw.tick(), Step::Pause(ms(2000)));
        assert_eq!(tw.visible_text(), "AI");
        assert_eq!(tw.mode(), Mode::Typing);

        assert_eq!(tw.finish_pause(), Step::Tick(ms(50)));
        assert_eq!(tw.mode(), Mode::Deleting);
        assert_eq!(tw.visible_text(), "AI");

        assert_eq!(tw.tick(), Step::Tick(ms(50)));
        assert_eq!(tw.visible_text(), "A");
        assert_eq!(tw.tick(), Step::Tick(ms(50)));
        assert_eq!(tw.visible_text(), "");
        assert_eq!(tw.phrase_index(), 0);

        assert_eq!(tw.tick(), Step::Tick(ms(100)));
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.visible_text(), "");

        tw.tick();
        assert_eq!(tw.visible_text(), "M");
        tw.tick();
        assert_eq!(tw.visible_text(), "ML");
    }

    #[test]
    fn index_wraps_after_last_phrase() {
        let mut tw = machine(&["x"]);
        tw.tick(); // "x"
        tw.tick(); // pause requested
        tw.finish_pause();
        tw.tick(); // ""
        tw.tick(); // advance
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.mode(), Mode::Typing);
    }

    #[test]
    fn multibyte_text_is_revealed_per_char() {
        let mut tw = machine(&["全局"]);
        tw.tick();
        assert_eq!(tw.visible_text(), "全");
        tw.tick();
        assert_eq!(tw.visible_text(), "全局");
        assert!(matches!(tw.tick(), Step::Pause(_)));
        tw.finish_pause();
        tw.tick();
        assert_eq!(tw.visible_text(), "全");
    }

    #[test]
    fn render_forwards_style_of_active_phrase() {
        let phrases = vec![Phrase::styled("a", "blue"), Phrase::new("b")];
        let mut tw = Typewriter::new(phrases, TypewriterTiming::default()).unwrap();
        tw.tick();
        assert_eq!(
            tw.render(),
            Render {
                text: "a".to_string(),
                style: Some("blue".to_string()),
                phrase_index: 0,
            }
        );
        tw.tick();
        tw.finish_pause();
        tw.tick();
        tw.tick();
        assert_eq!(tw.render().style, None);
        assert_eq!(tw.render().phrase_index, 1);
    }
}
