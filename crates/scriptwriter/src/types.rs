use reel_timeline::SegmentRole;

use crate::error::Error;

/// A generated script: one hook, the story lines in order, one closer.
///
/// This is the wire shape the model is asked to return and the only script
/// representation the rest of the pipeline sees.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Script {
    pub hook: String,
    pub lines: Vec<String>,
    pub closer: String,
}

impl Script {
    /// Narration order: the hook, every line in sequence, then the closer.
    ///
    /// Everything downstream (synthesis, placement, captions) walks this
    /// sequence, so role assignment and ordering are decided in exactly one
    /// place.
    pub fn units(&self) -> Vec<(SegmentRole, &str)> {
        let mut units = Vec::with_capacity(self.lines.len() + 2);
        units.push((SegmentRole::Hook, self.hook.as_str()));
        for line in &self.lines {
            units.push((SegmentRole::Line, line.as_str()));
        }
        units.push((SegmentRole::Closer, self.closer.as_str()));
        units
    }

    /// Content checks on top of the JSON shape: hook and closer must be
    /// non-blank, and so must every line entry. An empty `lines` list is
    /// allowed; a hook-plus-closer script is still a script.
    pub fn validate(&self) -> Result<(), Error> {
        if self.hook.trim().is_empty() {
            return Err(Error::InvalidScript("missing or invalid 'hook'".into()));
        }
        if self.closer.trim().is_empty() {
            return Err(Error::InvalidScript("missing or invalid 'closer'".into()));
        }
        if self.lines.iter().any(|line| line.trim().is_empty()) {
            return Err(Error::InvalidScript("missing or invalid 'lines'".into()));
        }
        Ok(())
    }
}
