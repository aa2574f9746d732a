//! Day/month/year text captured from a date control

/// One segment of a date control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    Day,
    Month,
    Year,
}

impl DatePart {
    pub const ALL: [DatePart; 3] = [DatePart::Day, DatePart::Month, DatePart::Year];

    /// Maximum number of digits the segment accepts
    pub fn max_len(&self) -> usize {
        match self {
            Self::Day | Self::Month => 2,
            Self::Year => 4,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Day => "DD",
            Self::Month => "MM",
            Self::Year => "YYYY",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Day => Some(Self::Month),
            Self::Month => Some(Self::Year),
            Self::Year => None,
        }
    }

    /// Keep only ASCII digits, up to the segment's length
    pub fn sanitize(&self, text: &str) -> String {
        text.chars()
            .filter(char::is_ascii_digit)
            .take(self.max_len())
            .collect()
    }
}

/// Entered date segments of one field. `None` means never edited.
///
/// Not validated as a calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl DateParts {
    pub fn get(&self, part: DatePart) -> Option<&str> {
        match part {
            DatePart::Day => self.day.as_deref(),
            DatePart::Month => self.month.as_deref(),
            DatePart::Year => self.year.as_deref(),
        }
    }

    /// Replace a single segment, leaving the others untouched
    pub fn set(&mut self, part: DatePart, value: String) {
        match part {
            DatePart::Day => self.day = Some(value),
            DatePart::Month => self.month = Some(value),
            DatePart::Year => self.year = Some(value),
        }
    }
}
