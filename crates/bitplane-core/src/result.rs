use crate::error::BitplaneError;

pub type Result<T> = std::result::Result<T, BitplaneError>;
