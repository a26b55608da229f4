//! Printer status structures

use std::fmt;

use crate::error::{Error, Result};

/// Media subsystem condition (one hex digit of the `~HQES` error block)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MediaFault {
    PaperOut,
    RibbonOut,
    MediaDoorOpen,
    CutterFault,
}

impl MediaFault {
    pub fn message(self) -> &'static str {
        match self {
            Self::PaperOut => "Paper out",
            Self::RibbonOut => "Ribbon Out",
            Self::MediaDoorOpen => "Media Door Open",
            Self::CutterFault => "Cutter Fault",
        }
    }
}

impl TryFrom<char> for MediaFault {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        match code {
            '1' => Ok(Self::PaperOut),
            '2' => Ok(Self::RibbonOut),
            '4' => Ok(Self::MediaDoorOpen),
            '8' => Ok(Self::CutterFault),
            _ => Err(Error::UnknownCode {
                subsystem: "media",
                code,
            }),
        }
    }
}

/// Printhead subsystem condition
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HeadFault {
    PrintheadOverheating,
    MotorOverheating,
    PrintheadFault,
    IncorrectPrinthead,
}

impl HeadFault {
    pub fn message(self) -> &'static str {
        match self {
            Self::PrintheadOverheating => "Printhead Overheating",
            Self::MotorOverheating => "Motor Overheating",
            Self::PrintheadFault => "Printhead Fault",
            Self::IncorrectPrinthead => "Incorrect Printhead",
        }
    }
}

impl TryFrom<char> for HeadFault {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        match code {
            '1' => Ok(Self::PrintheadOverheating),
            '2' => Ok(Self::MotorOverheating),
            '4' => Ok(Self::PrintheadFault),
            '8' => Ok(Self::IncorrectPrinthead),
            _ => Err(Error::UnknownCode {
                subsystem: "head",
                code,
            }),
        }
    }
}

/// One entry of a [`StatusReport`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StatusError {
    Media(MediaFault),
    Head(HeadFault),
    Paused,

    /// Printer reports not ready without naming a cause
    Unknown,

    /// Status reply too short to decode
    MalformedResponse,
}

impl StatusError {
    pub fn message(self) -> &'static str {
        match self {
            Self::Media(fault) => fault.message(),
            Self::Head(fault) => fault.message(),
            Self::Paused => "Printer Paused",
            Self::Unknown => "Unknown Error",
            Self::MalformedResponse => "Malformed Status Response",
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Decoded printer readiness
///
/// Entries are ordered media, head, pause; a report that is not ready always
/// carries at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub is_ready_to_print: bool,
    pub errors: Vec<StatusError>,
}

impl StatusReport {
    /// Build a report, adding [`StatusError::Unknown`] when a not-ready report
    /// would otherwise be empty
    pub fn new(is_ready_to_print: bool, mut errors: Vec<StatusError>) -> Self {
        if !is_ready_to_print && errors.is_empty() {
            errors.push(StatusError::Unknown);
        }

        Self {
            is_ready_to_print,
            errors,
        }
    }

    /// Report for a reply that could not be decoded
    pub fn malformed() -> Self {
        Self::new(false, vec![StatusError::MalformedResponse])
    }

    /// Error messages in report order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message().to_string()).collect()
    }

    /// Error messages joined with `,`
    pub fn joined_errors(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ready_to_print {
            write!(f, "Ready")?;
        } else {
            write!(f, "Not ready")?;
        }

        if self.has_errors() {
            write!(f, " [{}]", self.joined_errors())?;
        }

        Ok(())
    }
}
