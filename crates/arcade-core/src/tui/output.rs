//! Terminal output: progress bars, status lines, final report
//!
//! Nothing here may abort a scaffold. Rendering failures (closed stdout, no
//! terminal) are logged and otherwise ignored.

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::scaffold::{Reporter, ScaffoldOutcome, TaskProgress};
use crate::ASSETS_DIR;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

/// Closing lines; `{name}` is replaced with the project name
const SUCCESS_MESSAGES: &[&str] = &[
    "Game on! {name} is ready.",
    "Insert coin: {name} is ready to play.",
    "Level 1 unlocked. {name} has been created.",
    "Press start! {name} is all set up.",
    "New high score: {name} scaffolded.",
];

/// Log and drop a rendering failure
pub(crate) fn render(result: io::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to render terminal output");
    }
}

/// Source of uniformly distributed picks
pub trait Dice {
    /// Return a value in `0..sides`; `sides` is never zero
    fn roll(&mut self, sides: usize) -> usize;
}

/// Dice seeded from the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockDice;

impl Dice for ClockDice {
    fn roll(&mut self, sides: usize) -> usize {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        nanos as usize % sides
    }
}

/// Pick a closing line for `name`
pub fn success_message(dice: &mut dyn Dice, name: &str) -> String {
    let index = dice.roll(SUCCESS_MESSAGES.len()) % SUCCESS_MESSAGES.len();
    SUCCESS_MESSAGES[index].replace("{name}", name)
}

/// Reporter drawing cliclack progress bars and log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackReporter;

struct ClackTask {
    bar: cliclack::ProgressBar,
    label: String,
}

impl Reporter for ClackReporter {
    fn task(&self, label: &str, total: usize) -> Box<dyn TaskProgress> {
        let bar = cliclack::progress_bar(total as u64);
        bar.start(label);
        Box::new(ClackTask {
            bar,
            label: label.to_string(),
        })
    }

    fn info(&self, message: &str) {
        render(cliclack::log::info(message));
    }

    fn warning(&self, message: &str) {
        render(cliclack::log::warning(message));
    }
}

impl TaskProgress for ClackTask {
    fn advance(&mut self, completed: usize, total: usize) {
        self.bar
            .set_message(format!("{} ({}/{})", self.label, completed, total));
        self.bar.inc(1);
    }

    fn finish(&mut self, message: &str) {
        self.bar.stop(message);
    }

    fn fail(&mut self, message: &str) {
        self.bar.error(message);
    }
}

/// Report a finished project and what to do next
pub fn report_success<C: ProductConfig>(
    config: &C,
    outcome: &ScaffoldOutcome,
    dice: &mut dyn Dice,
) {
    render(cliclack::log::success(format!(
        "Created {} with {} {}",
        outcome.config.project_name,
        config.display_name(),
        outcome.release.tag
    )));

    let steps = config.next_steps(&outcome.project_dir, &outcome.config);
    render(cliclack::note("Next steps", numbered(&steps)));

    if !outcome.blank {
        render(cliclack::log::remark(format!(
            "Swap the files in {}/ for your own art and audio.",
            ASSETS_DIR
        )));
    }

    render(cliclack::outro(success_message(
        dice,
        &outcome.config.project_name,
    )));
}

/// Report a scaffold that stopped early
pub fn report_failure(err: &ScaffoldError) {
    render(cliclack::outro_cancel(format!("Error: {}", err)));
}

fn numbered(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}.  {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Loaded(usize);

    impl Dice for Loaded {
        fn roll(&mut self, _sides: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_success_message_uses_dice() {
        assert_eq!(
            success_message(&mut Loaded(0), "demo-game"),
            "Game on! demo-game is ready."
        );
        assert_eq!(
            success_message(&mut Loaded(3), "demo-game"),
            "Press start! demo-game is all set up."
        );
    }

    #[test]
    fn test_success_message_tolerates_out_of_range_rolls() {
        let message = success_message(&mut Loaded(SUCCESS_MESSAGES.len()), "x");
        assert_eq!(message, "Game on! x is ready.");
    }

    #[test]
    fn test_clock_dice_stays_in_range() {
        let mut dice = ClockDice;
        for sides in 1..20 {
            assert!(dice.roll(sides) < sides);
        }
    }

    #[test]
    fn test_numbered_steps() {
        let steps = vec!["cd demo".to_string(), "make".to_string()];
        assert_eq!(numbered(&steps), "1.  cd demo\n2.  make");
    }

    #[test]
    fn test_render_swallows_errors() {
        render(Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));
    }
}
