use leptos::prelude::*;

/// Reveals a fixed string one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    revealed: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            revealed: 0,
            total,
        }
    }

    /// Reveals the next character. Returns `false` once the text is
    /// complete, after which ticking changes nothing.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn revealed(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.total
    }
}

/// A [`Typewriter`] owned by the current reactive owner, with the tick that
/// advances it. Once the owner is cleaned up the signal is disposed and the
/// tick is a no-op.
pub fn typewriter_signal(
    text: &str,
) -> (RwSignal<Typewriter>, impl Fn() + Clone + Send + Sync + 'static) {
    let typewriter = RwSignal::new(Typewriter::new(text));
    let tick = move || {
        typewriter.try_maybe_update(|t| (t.tick(), ()));
    };
    (typewriter, tick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_progress() {
        let mut tw = Typewriter::new("Rust");
        assert_eq!(tw.revealed(), "");
        assert!(!tw.is_done());

        for n in 1..4 {
            assert!(tw.tick());
            assert_eq!(tw.revealed_len(), n);
        }
        assert_eq!(tw.revealed(), "Rus");

        assert!(tw.tick());
        assert!(tw.is_done());
        assert_eq!(tw.revealed(), "Rust");
    }

    #[test]
    fn test_inert_after_completion() {
        let mut tw = Typewriter::new("ok");
        tw.tick();
        tw.tick();
        let done = tw.clone();
        for _ in 0..10 {
            assert!(!tw.tick());
        }
        assert_eq!(tw, done);
        assert_eq!(tw.revealed_len(), 2);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new("AI & ML ✓");
        for _ in 0..8 {
            tw.tick();
        }
        assert_eq!(tw.revealed(), "AI & ML ");
        tw.tick();
        assert_eq!(tw.revealed(), "AI & ML ✓");
        assert!(tw.is_done());
    }

    #[test]
    fn test_empty_text() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.revealed(), "");
    }

    #[test]
    fn test_no_ticks_after_unmount() {
        let owner = Owner::new();
        let (typewriter, tick) = owner.with(|| typewriter_signal("Rust"));
        tick();
        assert_eq!(typewriter.with_untracked(Typewriter::revealed_len), 1);

        owner.cleanup();
        tick();
        tick();
        assert_eq!(typewriter.try_with_untracked(Typewriter::revealed_len), None);
    }
}
