//! `~HQES` status reply decoding
//!
//! The printer answers a host status query with a fixed-layout text block.
//! Only four characters of it matter for readiness (offsets count
//! characters):
//!
//! ```text
//! offset  70        84       87     88
//!         │         │        │      │
//!         ready     paused   head   media
//!         '0'=yes   '1'=yes  code   code
//! ```
//!
//! Head and media codes are single hex digits; only the single-condition
//! values `1`, `2`, `4` and `8` are reported.

use tracing::{debug, trace, warn};

use zbprint_types::{HeadFault, MediaFault, StatusError, StatusReport};

use crate::error::{Error, Result};

/// Decoded positions of the status reply
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StatusField {
    /// `'0'` when the printer has no error flag set
    Ready,

    /// `'1'` when the printer is paused
    Paused,

    /// Printhead subsystem code
    Head,

    /// Media subsystem code
    Media,
}

impl StatusField {
    /// All fields, in decoding order
    pub const ALL: [StatusField; 4] = [
        StatusField::Ready,
        StatusField::Media,
        StatusField::Head,
        StatusField::Paused,
    ];

    /// Character (not byte) offset inside the reply
    pub const fn offset(self) -> usize {
        match self {
            Self::Ready => 70,
            Self::Paused => 84,
            Self::Head => 87,
            Self::Media => 88,
        }
    }
}

/// Shortest reply that contains every [`StatusField`]
pub const MIN_RESPONSE_LEN: usize = StatusField::Media.offset() + 1;

/// Raw codes extracted from a status reply
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatusFields {
    pub ready: char,
    pub paused: char,
    pub head: char,
    pub media: char,
}

impl StatusFields {
    /// Extract the status codes
    ///
    /// Offsets count characters, not bytes, so a non-ASCII character earlier
    /// in the reply does not shift the fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResponseTooShort`] if the reply ends before the last
    /// field.
    pub fn parse(raw: &str) -> Result<Self> {
        let chars: Vec<char> = raw.chars().collect();

        if chars.len() < MIN_RESPONSE_LEN {
            return Err(Error::ResponseTooShort {
                expected: MIN_RESPONSE_LEN,
                actual: chars.len(),
            });
        }

        let at = |field: StatusField| chars[field.offset()];

        Ok(Self {
            ready: at(StatusField::Ready),
            paused: at(StatusField::Paused),
            head: at(StatusField::Head),
            media: at(StatusField::Media),
        })
    }

    /// Raw code at a field
    pub fn get(&self, field: StatusField) -> char {
        match field {
            StatusField::Ready => self.ready,
            StatusField::Paused => self.paused,
            StatusField::Head => self.head,
            StatusField::Media => self.media,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready == '0'
    }

    /// Build the report, entries in media, head, pause order
    pub fn to_report(&self) -> StatusReport {
        let errors = StatusField::ALL
            .iter()
            .filter_map(|&field| self.error_at(field))
            .collect();

        StatusReport::new(self.is_ready(), errors)
    }

    fn error_at(&self, field: StatusField) -> Option<StatusError> {
        let code = self.get(field);

        match field {
            StatusField::Ready => None,
            StatusField::Media => MediaFault::try_from(code).ok().map(StatusError::Media),
            StatusField::Head => HeadFault::try_from(code).ok().map(StatusError::Head),
            StatusField::Paused => (code == '1').then_some(StatusError::Paused),
        }
    }
}

/// Decode a status reply
///
/// Never fails: a reply too short to hold every field is reported as not
/// ready with [`StatusError::MalformedResponse`].
///
/// # Examples
///
/// ```
/// use zbprint_core::status;
///
/// let mut raw = vec![b' '; 91];
/// raw[70] = b'0';
/// let report = status::decode(std::str::from_utf8(&raw).unwrap());
///
/// assert!(report.is_ready_to_print);
/// assert!(report.errors.is_empty());
/// ```
pub fn decode(raw: &str) -> StatusReport {
    trace!("Status reply ({} chars): {:?}", raw.chars().count(), raw);

    match StatusFields::parse(raw) {
        Ok(fields) => {
            let report = fields.to_report();
            debug!("Decoded status: {}", report);
            report
        }
        Err(e) => {
            warn!("Cannot decode status reply: {}", e);
            StatusReport::malformed()
        }
    }
}
