//! Active-section selection for the floating navigation bar.
//!
//! The observer reports a batch of entries per callback; the section whose
//! visible ratio inside the shrunk root box is highest becomes active.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Root margin that shrinks the viewport to its middle 20% band.
pub const NAV_ROOT_MARGIN: &str = "-40% 0px -40% 0px";

/// Observer thresholds `0.0, 0.1, ..., 1.0`.
#[must_use]
pub fn nav_thresholds() -> Vec<f64> {
    (0..=10).map(|step| f64::from(step) / 10.0).collect()
}

/// One observer entry reduced to what selection needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSighting {
    pub id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Pick the intersecting entry with the highest ratio. Ties keep the
/// earliest entry in the batch.
#[must_use]
pub fn most_visible(entries: &[SectionSighting]) -> Option<&str> {
    entries
        .iter()
        .filter(|entry| entry.is_intersecting)
        .fold(None::<&SectionSighting>, |best, entry| match best {
            Some(current) if current.ratio >= entry.ratio => Some(current),
            _ => Some(entry),
        })
        .map(|entry| entry.id.as_str())
}

/// Currently highlighted navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection {
    active_id: Option<String>,
}

impl ActiveSection {
    /// Start with the first section highlighted.
    #[must_use]
    pub fn new<'a>(mut ids: impl Iterator<Item = &'a str>) -> Self {
        Self { active_id: ids.next().map(str::to_owned) }
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    /// Apply one observer batch. Returns `true` when the active id changed.
    pub fn observe(&mut self, entries: &[SectionSighting]) -> bool {
        let Some(next) = most_visible(entries) else {
            return false;
        };
        if self.active_id.as_deref() == Some(next) {
            return false;
        }
        self.active_id = Some(next.to_owned());
        true
    }
}
