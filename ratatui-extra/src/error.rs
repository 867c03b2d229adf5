#[derive(thiserror::Error, Debug)]
pub enum RatatuiExtraError {
    #[error("Label at cursor {cursor} not available. Available labels: {available:?}")]
    FormLabelNotAvailable {
        cursor: usize,
        available: Vec<String>,
    },

    #[error("Form item {label} is not an input box.")]
    FormItemNotInput { label: String },
}
