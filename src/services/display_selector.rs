use crate::models::Display;
use crate::platform::WindowSystem;
use crate::{Result, WinTileError};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Picks the display the windows are tiled onto
pub struct DisplaySelector {
    displays: Vec<Display>,
}

impl DisplaySelector {
    pub fn new(displays: Vec<Display>) -> Self {
        Self { displays }
    }

    /// Snapshot the displays currently attached to the system
    pub fn from_system(system: &dyn WindowSystem) -> Result<Self> {
        let displays = system.displays()?;
        debug!(count = displays.len(), "Enumerated displays");
        Ok(Self::new(displays))
    }

    /// Return the only display, or list them on `output` and ask which one
    /// to use. A reply that is not a listed index ends the run.
    pub fn select_display<R, W>(&self, input: &mut R, output: &mut W) -> Result<Display>
    where
        R: BufRead,
        W: Write,
    {
        match self.displays.len() {
            0 => Err(WinTileError::NoDisplays.into()),
            1 => Ok(self.displays[0].clone()),
            count => {
                for (index, display) in self.displays.iter().enumerate() {
                    writeln!(output, "{}. {}", index + 1, display)?;
                }
                write!(output, "Found {} screens. Choose screen: ", count)?;
                output.flush()?;

                let mut line = String::new();
                input.read_line(&mut line)?;
                let selected = self.choose(parse_selection(&line)?)?;

                info!("Selected display {} ({})", selected.name, selected.bounds);
                Ok(selected)
            }
        }
    }

    /// Display at the 1-based `index`, as shown in the listing
    pub fn choose(&self, index: usize) -> Result<Display> {
        if self.displays.is_empty() {
            return Err(WinTileError::NoDisplays.into());
        }

        index
            .checked_sub(1)
            .and_then(|zero_based| self.displays.get(zero_based))
            .cloned()
            .ok_or_else(|| {
                WinTileError::InvalidSelection(format!(
                    "{} is not between 1 and {}",
                    index,
                    self.displays.len()
                ))
                .into()
            })
    }
}

fn parse_selection(line: &str) -> Result<usize> {
    let trimmed = line.trim();
    trimmed.parse::<usize>().map_err(|_| {
        WinTileError::InvalidSelection(format!("'{}' is not a screen number", trimmed)).into()
    })
}
