//! Fullscreen view trait

/// Errors that can occur when switching view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewError {
    /// Host has no fullscreen mode
    Unsupported,
    /// Host refused the request
    Denied,
}

/// Trait for entering and leaving fullscreen
pub trait ViewMode {
    /// Request fullscreen on or off
    fn set_fullscreen(&mut self, on: bool) -> Result<(), ViewError>;

    /// Whether fullscreen is currently engaged
    fn is_fullscreen(&self) -> bool;
}

/// View for hosts with a single fixed layout
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedView;

impl ViewMode for FixedView {
    fn set_fullscreen(&mut self, _on: bool) -> Result<(), ViewError> {
        Err(ViewError::Unsupported)
    }

    fn is_fullscreen(&self) -> bool {
        false
    }
}
