//! ST.2086-shaped content and display metadata.
//!
//! [`Hdr10Metadata`] describes what a content stream *claims* about its
//! dynamic range and gamut; the same shape doubles as
//! [`DisplayCharacteristics`], describing what a display can actually do.
//! The tone-mapping and gamut-mapping decision logic compares the two.
//!
//! [`MetadataStore`] models the process-wide "current content metadata"
//! slot: written by the presenting stage, read by the scaler and panel
//! stages. Updates are atomic at whole-struct granularity; readers never
//! observe a partially written record.

use hdrpipe_math::Vec2;
use std::sync::{Arc, RwLock};

/// ST.2086 mastering metadata for a content stream or display.
///
/// # Fields
///
/// Luminance values are in cd/m2 (nits); primaries are 1931 xy.
///
/// # Lifecycle
///
/// Defaulted to the display's characteristics at connection time, then
/// overwritten whenever content declares new metadata, and read by the
/// downstream scaler when deciding whether to tone-map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hdr10Metadata {
    /// Peak luminance in cd/m2.
    pub peak_luminance: f32,
    /// Frame-average light level (CALL/FALL) in cd/m2.
    pub frame_average_luminance: f32,
    /// Black level in cd/m2.
    pub min_luminance: f32,
    /// Red primary, 1931 xy.
    pub red: Vec2,
    /// Green primary, 1931 xy.
    pub green: Vec2,
    /// Blue primary, 1931 xy.
    pub blue: Vec2,
}

impl Hdr10Metadata {
    /// Metadata for a nominal 1200-nit Rec.2020 HDR display.
    ///
    /// Stands in for a real EDID/DisplayID query, which is out of scope.
    pub fn typical_hdr_display() -> Self {
        Self {
            peak_luminance: 1200.0,
            frame_average_luminance: 600.0,
            min_luminance: 0.0,
            red: Vec2::new(0.708, 0.292),
            green: Vec2::new(0.170, 0.797),
            blue: Vec2::new(0.131, 0.046),
        }
    }

    /// Relative difference between this record's peak and another peak.
    ///
    /// The 10%-threshold tone-mapping decision in the present and scaler
    /// stages is taken on this value.
    #[inline]
    pub fn relative_peak_difference(&self, other_peak: f32) -> f32 {
        (self.peak_luminance - other_peak).abs() / other_peak
    }
}

impl Default for Hdr10Metadata {
    fn default() -> Self {
        Self::typical_hdr_display()
    }
}

/// Display capability record.
///
/// Same shape as content metadata; queried once per connection or mode
/// change and then treated as immutable.
pub type DisplayCharacteristics = Hdr10Metadata;

/// Process-wide current-content-metadata slot.
///
/// Single logical writer (the presenting stage), any number of readers
/// (scaler, UI). Clones share the same underlying slot.
///
/// # Example
///
/// ```rust
/// use hdrpipe_core::{Hdr10Metadata, MetadataStore};
///
/// let store = MetadataStore::new(Hdr10Metadata::typical_hdr_display());
/// let mut content = store.get();
/// content.peak_luminance = 4000.0;
/// store.set(content);
/// assert_eq!(store.get().peak_luminance, 4000.0);
/// ```
#[derive(Debug, Clone)]
pub struct MetadataStore {
    slot: Arc<RwLock<Hdr10Metadata>>,
}

impl MetadataStore {
    /// Creates a store seeded with the given metadata.
    ///
    /// At display-connection time the slot is seeded with the display's
    /// own characteristics: until content declares otherwise, the
    /// content is whatever the panel can show.
    pub fn new(initial: Hdr10Metadata) -> Self {
        Self {
            slot: Arc::new(RwLock::new(initial)),
        }
    }

    /// Replaces the current content metadata as one atomic update.
    pub fn set(&self, metadata: Hdr10Metadata) {
        // Lock poisoning would mean a writer panicked mid-update; the
        // stored value is still a complete struct, so recover it.
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = metadata;
    }

    /// Returns a complete copy of the current content metadata.
    pub fn get(&self) -> Hdr10Metadata {
        let guard = self.slot.read().unwrap_or_else(|e| e.into_inner());
        *guard
    }
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self::new(Hdr10Metadata::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_relative_peak_difference() {
        let mut md = Hdr10Metadata::typical_hdr_display();
        md.peak_luminance = 1000.0;
        assert!((md.relative_peak_difference(1000.0)).abs() < 1e-6);
        assert!((md.relative_peak_difference(500.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_store_shares_slot_across_clones() {
        let store = MetadataStore::default();
        let reader = store.clone();
        let mut md = store.get();
        md.peak_luminance = 10000.0;
        store.set(md);
        assert_eq!(reader.get().peak_luminance, 10000.0);
    }

    #[test]
    fn test_readers_see_whole_struct() {
        // One writer flips between two complete records; readers must
        // only ever observe one of the two, never a mix.
        let a = Hdr10Metadata {
            peak_luminance: 100.0,
            frame_average_luminance: 50.0,
            ..Hdr10Metadata::typical_hdr_display()
        };
        let b = Hdr10Metadata {
            peak_luminance: 4000.0,
            frame_average_luminance: 2000.0,
            ..Hdr10Metadata::typical_hdr_display()
        };
        let store = MetadataStore::new(a);

        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..1000 {
                    store.set(if i % 2 == 0 { b } else { a });
                }
            })
        };
        for _ in 0..1000 {
            let seen = store.get();
            assert!(seen == a || seen == b);
        }
        writer.join().unwrap();
    }
}
