//! Character display refresh

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::Duration;
use lumen_core::ui::{primary_line, scroll_window, DisplayMode};
use lumen_hal::{CharacterDisplay, DisplayLine, LINE_WIDTH};

use crate::pipe::SamplePipe;
use crate::ui::UiState;

/// What a render cycle drew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderOutcome {
    /// New sample shown in the given mode
    Fresh(DisplayMode),
    /// No sample within the wait; the primary line was left as it was
    Reused,
}

/// Draws the current mode's value and the banner window
pub struct RendererTask<'a, M: RawMutex, D> {
    pipe: &'a SamplePipe<M>,
    ui: &'a UiState,
    scroll_text: &'static str,
    wait: Duration,
    display: D,
}

impl<'a, M: RawMutex, D: CharacterDisplay> RendererTask<'a, M, D> {
    pub fn new(
        pipe: &'a SamplePipe<M>,
        ui: &'a UiState,
        scroll_text: &'static str,
        wait: Duration,
        display: D,
    ) -> Self {
        Self {
            pipe,
            ui,
            scroll_text,
            wait,
            display,
        }
    }

    /// Wait for a sample and redraw
    ///
    /// A fresh sample clears the screen and rewrites the primary line. The
    /// banner window is written every cycle.
    pub async fn run_once(&mut self) -> Result<RenderOutcome, D::Error> {
        let outcome = match self.pipe.receive(self.wait).await {
            Ok(sample) => {
                let mode = self.ui.mode();
                self.display.clear()?;
                self.display
                    .write_line(DisplayLine::Primary, &primary_line(mode, &sample))?;
                RenderOutcome::Fresh(mode)
            }
            Err(_) => RenderOutcome::Reused,
        };

        let window = scroll_window(self.scroll_text, self.ui.scroll_position(), LINE_WIDTH);
        self.display.write_line(DisplayLine::Secondary, window)?;

        Ok(outcome)
    }
}
