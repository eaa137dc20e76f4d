use chrono::{DateTime, FixedOffset, Utc};

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Sprint {
    pub name: String,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
}

// Create
impl Sprint {
    pub fn new(
        name: impl ToString,
        start_date: &DateTime<FixedOffset>,
        end_date: &DateTime<FixedOffset>,
    ) -> Sprint {
        Self {
            name: name.to_string(),
            start_date: *start_date,
            end_date: *end_date,
        }
    }
}

// Parser
impl Sprint {
    /// Builds a sprint from RFC 3339 boundaries as the iteration API reports them.
    pub fn parse(name: impl ToString, start: &str, end: &str) -> Result<Self, String> {
        let Ok(start_date) = DateTime::parse_from_rfc3339(start) else {
            return Err(format!("Not a valid date time: {}", start));
        };
        let Ok(end_date) = DateTime::parse_from_rfc3339(end) else {
            return Err(format!("Not a valid date time: {}", end));
        };
        if start_date > end_date {
            return Err(format!("Sprint starts after it ends: {} > {}", start, end));
        }
        Ok(Self::new(name, &start_date, &end_date))
    }
}

impl Sprint {
    /// Inclusive on both ends.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start_date <= *instant && *instant <= self.end_date
    }
}
