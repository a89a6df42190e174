//! Loading indicators.
//!
//! A frame-based spinner shown inside busy input fields, and the shimmer
//! used for the placeholder cells of a loading table.

/// Spinner animation frames.
const BRAILLE_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Placeholder cell shades, cycled to pulse while loading.
const PLACEHOLDER_SHADES: &[&str] = &["░", "▒"];

/// An animated spinner advanced on each tick.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    /// Current frame index.
    state: usize,
}

impl Spinner {
    /// Create a new spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the animation by one frame.
    pub fn tick(&mut self) {
        self.state = self.state.wrapping_add(1);
    }

    /// Get the current spinner frame.
    pub fn frame(&self) -> &'static str {
        BRAILLE_FRAMES[self.state % BRAILLE_FRAMES.len()]
    }

    /// Get a placeholder bar of `width` cells for the current frame.
    pub fn placeholder(&self, width: usize) -> String {
        // Pulse slower than the spinner.
        let shade = PLACEHOLDER_SHADES[(self.state / 4) % PLACEHOLDER_SHADES.len()];
        shade.repeat(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        let mut spinner = Spinner::new();
        assert_eq!(spinner.frame(), "⠋");
        spinner.tick();
        assert_eq!(spinner.frame(), "⠙");
        for _ in 0..9 {
            spinner.tick();
        }
        assert_eq!(spinner.frame(), "⠋");
    }

    #[test]
    fn test_placeholder_pulses() {
        let mut spinner = Spinner::new();
        assert_eq!(spinner.placeholder(3), "░░░");
        for _ in 0..4 {
            spinner.tick();
        }
        assert_eq!(spinner.placeholder(2), "▒▒");
    }
}
