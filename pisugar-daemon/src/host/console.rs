//! Line-oriented UI on a text stream
//!
//! Keeps the labeled value elements in memory and writes one line per
//! element whenever it changed since the last flush.

use std::io::{self, Write};

use log::{debug, warn};
use pisugar_core::traits::{LabeledValueSpec, LabeledValueUi, UiError};

/// Nominal width handed to plugins for element placement
pub const DEFAULT_WIDTH: u32 = 250;

struct Element {
    key: String,
    label: String,
    value: String,
    dirty: bool,
}

/// Text console standing in for a screen
pub struct ConsoleUi<W> {
    out: W,
    width: u32,
    elements: Vec<Element>,
}

impl ConsoleUi<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), DEFAULT_WIDTH)
    }
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(out: W, width: u32) -> Self {
        Self {
            out,
            width,
            elements: Vec::new(),
        }
    }

    /// Write every element that changed since the last flush
    pub fn flush(&mut self) -> io::Result<()> {
        for element in self.elements.iter_mut().filter(|e| e.dirty) {
            writeln!(self.out, "{} {}", element.label, element.value)?;
            element.dirty = false;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn element_mut(&mut self, key: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.key == key)
    }
}

impl<W: Write> LabeledValueUi for ConsoleUi<W> {
    fn width(&self) -> u32 {
        self.width
    }

    fn add_labeled_value(&mut self, spec: &LabeledValueSpec) -> Result<(), UiError> {
        if self.elements.iter().any(|e| e.key == spec.key) {
            return Err(UiError::DuplicateElement);
        }
        debug!("UI element '{}' added at {:?}", spec.key, spec.position);
        self.elements.push(Element {
            key: spec.key.to_owned(),
            label: spec.label.to_owned(),
            value: spec.value.to_owned(),
            dirty: true,
        });
        Ok(())
    }

    fn remove_element(&mut self, key: &str) -> Result<(), UiError> {
        let before = self.elements.len();
        self.elements.retain(|e| e.key != key);
        if self.elements.len() == before {
            return Err(UiError::UnknownElement);
        }
        Ok(())
    }

    fn set_label(&mut self, key: &str, label: &str) {
        match self.element_mut(key) {
            Some(e) if e.label != label => {
                e.label = label.to_owned();
                e.dirty = true;
            }
            Some(_) => {}
            None => warn!("set_label on unknown element '{}'", key),
        }
    }

    fn set_value(&mut self, key: &str, value: &str) {
        match self.element_mut(key) {
            Some(e) if e.value != value => {
                e.value = value.to_owned();
                e.dirty = true;
            }
            Some(_) => {}
            None => warn!("set_value on unknown element '{}'", key),
        }
    }

    fn force_update(&mut self, status: &str) {
        if let Err(e) = self.flush() {
            warn!("console flush failed: {}", e);
        }
        if let Err(e) = writeln!(self.out, "{}", status).and_then(|_| self.out.flush()) {
            warn!("console write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> LabeledValueSpec {
        LabeledValueSpec {
            key: "bat",
            label: "BAT",
            value: "0%",
            position: (135, 0),
        }
    }

    fn output(ui: ConsoleUi<Vec<u8>>) -> String {
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn test_only_changes_are_written() {
        let mut ui = ConsoleUi::new(Vec::new(), DEFAULT_WIDTH);
        ui.add_labeled_value(&spec()).unwrap();
        ui.flush().unwrap();

        ui.set_value("bat", "3.85v");
        ui.flush().unwrap();
        ui.set_value("bat", "3.85v");
        ui.flush().unwrap();
        ui.set_label("bat", "CHG");
        ui.flush().unwrap();

        assert_eq!(output(ui), "BAT 0%\nBAT 3.85v\nCHG 3.85v\n");
    }

    #[test]
    fn test_duplicate_and_unknown_elements() {
        let mut ui = ConsoleUi::new(Vec::new(), DEFAULT_WIDTH);
        ui.add_labeled_value(&spec()).unwrap();
        assert_eq!(ui.add_labeled_value(&spec()), Err(UiError::DuplicateElement));
        assert_eq!(ui.remove_element("bat"), Ok(()));
        assert_eq!(ui.remove_element("bat"), Err(UiError::UnknownElement));
    }

    #[test]
    fn test_force_update_writes_status() {
        let mut ui = ConsoleUi::new(Vec::new(), DEFAULT_WIDTH);
        ui.add_labeled_value(&spec()).unwrap();
        ui.set_value("bat", " 4%");
        ui.force_update("Battery exhausted, bye ...");

        assert_eq!(output(ui), "BAT  4%\nBattery exhausted, bye ...\n");
    }
}
