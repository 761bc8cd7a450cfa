use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn new(code: i32, message: &str) -> Self {
        Self {
            code: code,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(e: log::SetLoggerError) -> Self {
        Self::new(1006, &format!("{}: {}", ERROR_1006, e))
    }
}

impl From<log4rs::config::runtime::ConfigErrors> for Error {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        Self::new(1006, &format!("{}: {}", ERROR_1006, e))
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = ::std::result::Result<T, E>;

pub static ERROR_1001: &'static str = "Image width or height can not be less than 1";
pub static ERROR_1002: &'static str = "Invalid disparity range (max < min)";
pub static ERROR_1003: &'static str = "Window half size can not be less than 1";
pub static ERROR_1004: &'static str = "Source image is not monochrome";
pub static ERROR_1005: &'static str = "Intensity data length does not match image dimensions";
pub static ERROR_1006: &'static str = "Failed to initialize logger";
