//! Caption track loading and time-based lookup
//!
//! A caption track is an ordered list of `{from, to, speaker, text}` records
//! loaded from a JSON file. During playback the track is queried with the
//! current cursor instant and the first record whose interval contains that
//! instant is displayed.
//!
//! Records keep file order. Lookup is a linear scan and returns the first
//! match; interval containment is strict on both ends (`from < t && to > t`),
//! so an instant exactly on a record boundary matches nothing.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

/// A single timed caption record.
#[derive(Debug, Clone)]
pub struct Caption {
    /// Instant the caption becomes active
    pub from: DateTime<Utc>,
    /// Instant the caption expires
    pub to: DateTime<Utc>,
    /// Who is speaking, if anyone
    pub speaker: Option<String>,
    /// Caption body
    pub text: String,
}

impl Caption {
    pub fn new(
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        speaker: Option<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            speaker,
            text: text.into(),
        }
    }

    /// Strict open-interval containment check.
    ///
    /// Both comparisons are strict: a query instant exactly equal to `from`
    /// or `to` does not match. Adjacent records sharing a boundary instant
    /// therefore both reject that instant.
    pub fn matches(&self, t: DateTime<Utc>) -> bool {
        self.from < t && self.to > t
    }

    /// Parse a caption record from a JSON object.
    fn from_value(value: &serde_json::Value) -> Result<Self> {
        let obj = value.as_object().context("Caption must be a JSON object")?;

        let from = obj
            .get("from")
            .and_then(|v| v.as_str())
            .context("Caption 'from' must be a string")?;
        let to = obj
            .get("to")
            .and_then(|v| v.as_str())
            .context("Caption 'to' must be a string")?;

        let from = parse_instant(from)?;
        let to = parse_instant(to)?;

        if to < from {
            bail!("Caption ends before it starts ({} < {})", to, from);
        }

        let speaker = match obj.get("speaker") {
            None | Some(serde_json::Value::Null) => None,
            Some(v) => Some(
                v.as_str()
                    .context("Caption 'speaker' must be a string or null")?
                    .to_string(),
            ),
        };

        let text = obj
            .get("text")
            .and_then(|v| v.as_str())
            .context("Caption 'text' must be a string")?
            .to_string();

        Ok(Caption {
            from,
            to,
            speaker,
            text,
        })
    }
}

/// Parse an RFC 3339 timestamp into a UTC instant.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid RFC 3339 timestamp: {}", s))
        .map(|t| t.with_timezone(&Utc))
}

/// An ordered list of caption records.
#[derive(Debug, Clone, Default)]
pub struct CaptionTrack {
    records: Vec<Caption>,
}

impl CaptionTrack {
    pub fn new(records: Vec<Caption>) -> Self {
        Self { records }
    }

    /// Load a caption track from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read caption track: {:?}", path))?;
        Self::parse_str(&content)
            .with_context(|| format!("Failed to parse caption track: {:?}", path))
    }

    /// Parse a caption track from a JSON string.
    ///
    /// The expected shape is an object with a `captions` array:
    /// `{"captions": [{"from": "...", "to": "...", "speaker": null, "text": "..."}]}`
    pub fn parse_str(content: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(content).context("Failed to parse track JSON")?;

        let captions = value
            .get("captions")
            .context("Track must have a 'captions' key")?
            .as_array()
            .context("'captions' must be an array")?;

        let mut records = Vec::with_capacity(captions.len());
        for (i, entry) in captions.iter().enumerate() {
            let caption = Caption::from_value(entry)
                .with_context(|| format!("Failed to parse caption record {}", i))?;
            records.push(caption);
        }

        Ok(CaptionTrack { records })
    }

    /// Find the caption active at the given instant.
    ///
    /// Linear scan in file order; the first matching record wins.
    pub fn caption_at(&self, t: DateTime<Utc>) -> Option<&Caption> {
        self.records.iter().find(|c| c.matches(t))
    }

    /// Earliest `from` and latest `to` across all records.
    ///
    /// Returns `None` for an empty track. Callers use this to derive a
    /// playback window when no explicit bounds are given.
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.records.first()?;
        let mut min = first.from;
        let mut max = first.to;
        for c in &self.records[1..] {
            if c.from < min {
                min = c.from;
            }
            if c.to > max {
                max = c.to;
            }
        }
        Some((min, max))
    }

    pub fn records(&self) -> &[Caption] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
