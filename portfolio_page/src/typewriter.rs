use std::time::Duration;

use tokio::time::MissedTickBehavior;

/// Yields ever longer prefixes of a text, one character at a time, ending
/// with the full text.
#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    text: &'a str,
    end: Option<usize>,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            end: Some(0),
        }
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.end?;
        let next = self.text[end..].chars().next()?;
        let end = end + next.len_utf8();
        self.end = (end < self.text.len()).then_some(end);
        Some(&self.text[..end])
    }
}

/// Passes every frame of `text` to `show`, waiting `delay` between frames.
///
/// A zero `delay` shows all frames at once.
pub async fn type_out(text: &str, delay: Duration, mut show: impl FnMut(&str)) {
    let mut interval = (!delay.is_zero()).then(|| {
        let mut interval = tokio::time::interval(delay);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    });
    for frame in Typewriter::new(text) {
        if let Some(interval) = &mut interval {
            interval.tick().await;
        }
        show(frame);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    use super::*;

    #[test]
    fn frames() {
        assert_eq!(
            Typewriter::new("Hi!").collect::<Vec<_>>(),
            ["H", "Hi", "Hi!"]
        );
    }

    #[test]
    fn multibyte() {
        assert_eq!(
            Typewriter::new("Zoë ✓").collect::<Vec<_>>(),
            ["Z", "Zo", "Zoë", "Zoë ", "Zoë ✓"]
        );
    }

    #[test]
    fn empty() {
        assert_eq!(Typewriter::new("").next(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn timing() {
        // Arrange
        let start = Instant::now();
        let mut frames = Vec::new();

        // Act
        type_out("abc", Duration::from_millis(100), |frame| {
            frames.push(frame.to_owned())
        })
        .await;

        // Assert
        assert_eq!(frames, ["a", "ab", "abc"]);
        assert!(start.elapsed() >= Duration::from_millis(200));
        assert!(start.elapsed() < Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay() {
        // Arrange
        let start = Instant::now();
        let mut frames = Vec::new();

        // Act
        type_out("ab", Duration::ZERO, |frame| frames.push(frame.to_owned())).await;

        // Assert
        assert_eq!(frames, ["a", "ab"]);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
