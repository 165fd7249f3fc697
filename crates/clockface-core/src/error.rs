use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    #[error("invalid ring geometry: {0}")]
    InvalidGeometry(String),
    #[error("hour {0} is outside 0..24")]
    HourOutOfRange(u8),
    #[error("minute {0} is outside 0..60")]
    MinuteOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, PickerError>;
