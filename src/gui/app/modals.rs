use crate::gui::{
    error_modal::ErrorModal,
    reset_modal::ResetSessionModal,
};

pub struct Modals {
    pub error: ErrorModal,
    pub reset: ResetSessionModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { error: ErrorModal::new(), reset: ResetSessionModal::new() }
    }
}
