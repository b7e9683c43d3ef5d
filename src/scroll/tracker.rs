use log::debug;

use super::viewport::Viewport;

/// Tracks which registered section sits under a fixed probe point near the
/// top of the window.
///
/// Registry order is priority order: when two sections both contain the
/// probe, the one listed first wins. When none does, the previous answer
/// stands.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    sections: Vec<String>,
    probe_offset: f64,
    active: String,
}

impl SectionTracker {
    /// Starts out on the first registered section.
    pub fn new<I, T>(sections: I, probe_offset: f64) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let active = sections.first().cloned().unwrap_or_default();
        Self {
            sections,
            probe_offset,
            active,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// First section, in registry order, containing the probe point.
    /// Sections that aren't mounted are skipped.
    pub fn section_at_probe<V: Viewport + ?Sized>(&self, viewport: &V) -> Option<&str> {
        self.sections
            .iter()
            .find(|id| {
                viewport
                    .section_rect(id)
                    .map_or(false, |rect| rect.contains(self.probe_offset))
            })
            .map(String::as_str)
    }

    /// Re-reads geometry and updates the active section. Returns whether it
    /// changed.
    pub fn evaluate<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        let Some(found) = self.section_at_probe(viewport) else {
            return false;
        };
        if found == self.active {
            return false;
        }

        debug!("active section {} -> {}", self.active, found);
        self.active = found.to_string();
        true
    }
}
