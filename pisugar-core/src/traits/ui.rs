//! Labeled value UI element trait

/// Errors from the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiError {
    /// An element with this key is already registered
    DuplicateElement,
    /// No element with this key
    UnknownElement,
    /// UI not initialized or already torn down
    Unavailable,
}

/// Description of a labeled value element at registration time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabeledValueSpec {
    /// Element key used for later updates
    pub key: &'static str,
    /// Initial label text
    pub label: &'static str,
    /// Initial value text
    pub value: &'static str,
    /// Top-left position in pixels
    pub position: (u32, u32),
}

/// Host UI holding labeled value elements
///
/// The telemetry code only goes through these accessors; it never touches
/// the host's internal element state.
pub trait LabeledValueUi {
    /// Screen width in pixels
    fn width(&self) -> u32;

    /// Register a new element
    fn add_labeled_value(&mut self, spec: &LabeledValueSpec) -> Result<(), UiError>;

    /// Remove a previously registered element
    fn remove_element(&mut self, key: &str) -> Result<(), UiError>;

    /// Replace an element's label
    fn set_label(&mut self, key: &str, label: &str);

    /// Replace an element's value
    fn set_value(&mut self, key: &str, value: &str);

    /// Redraw immediately with the given status message
    fn force_update(&mut self, status: &str);
}
