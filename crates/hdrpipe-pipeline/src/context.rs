//! Display context: user settings plus shared metadata, in one place.
//!
//! The SDR boost, brightness setting, and current content metadata are
//! the kind of state that tends to end up in process globals mutated
//! from UI callbacks. [`DisplayContext`] keeps them in one explicit
//! value owned by the orchestrator and borrowed by each stage, so two
//! pipelines (or two tests) never bleed settings into each other.

use hdrpipe_core::{DisplayCharacteristics, Hdr10Metadata, MetadataStore};

/// Default boost applied to classic SDR content composed onto an HDR
/// surface.
pub const DEFAULT_SDR_BOOST: f32 = 1.5;

/// Default global brightness factor at the 100% slider position.
pub const DEFAULT_GLOBAL_BRIGHTNESS: f32 = 1.6666666;

/// Reference white of the canonical composition space, in cd/m2.
///
/// scRGB 1.0 is defined as 80 nits; every nits-denominated setting is
/// divided by this to land in composition-space units.
pub const CCCS_REFERENCE_WHITE_NITS: f32 = 80.0;

/// Per-output pipeline state: display capability, content metadata, and
/// the user-facing brightness controls.
///
/// # Example
///
/// ```rust
/// use hdrpipe_pipeline::DisplayContext;
///
/// let mut ctx = DisplayContext::new_typical();
/// ctx.global_brightness_slider(50);
/// assert!(ctx.global_brightness < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DisplayContext {
    /// What the connected display can do.
    pub display: DisplayCharacteristics,
    /// Current content metadata slot, shared with downstream stages.
    pub metadata: MetadataStore,
    /// Brightness boost for SDR content composed into the HDR surface.
    pub sdr_boost: f32,
    /// Global brightness factor applied at the GPU output stage.
    pub global_brightness: f32,
    /// Monitor OSD brightness factor; 1.0 (no change) in HDR mode.
    pub osd_brightness: f32,
    /// When set, an over-range peak is reported downstream as metadata
    /// for the display to tone-map; when clear, the pipeline tone-maps
    /// locally. The two policies are mutually exclusive.
    pub trust_display_tonemap: bool,
}

impl DisplayContext {
    /// Creates a context for the given display.
    ///
    /// The metadata slot is seeded with the display's own
    /// characteristics, mirroring the boot sequence: until content
    /// declares otherwise, "the content" is whatever the panel can show.
    pub fn new(display: DisplayCharacteristics) -> Self {
        Self {
            display,
            metadata: MetadataStore::new(display),
            sdr_boost: DEFAULT_SDR_BOOST,
            global_brightness: DEFAULT_GLOBAL_BRIGHTNESS,
            osd_brightness: 1.0,
            trust_display_tonemap: false,
        }
    }

    /// Creates a context for a nominal 1200-nit HDR display.
    pub fn new_typical() -> Self {
        Self::new(Hdr10Metadata::typical_hdr_display())
    }

    /// Sets the SDR boost from a percentage slider position.
    ///
    /// 100% maps to the full 50x boost ceiling of the control, so the
    /// default boost of 1.5 sits at the 3% position.
    pub fn set_sdr_boost_slider(&mut self, percentage: u32) -> f32 {
        self.sdr_boost = percentage as f32 * 50.0 / 100.0;
        self.sdr_boost
    }

    /// Sets the global brightness from a percentage slider position.
    ///
    /// 100% is the display's sustainable full-frame brightness. A log
    /// scale would suit perception better; the control is linear for now.
    pub fn global_brightness_slider(&mut self, percentage: u32) -> f32 {
        self.global_brightness = DEFAULT_GLOBAL_BRIGHTNESS * percentage as f32 / 100.0;
        self.global_brightness
    }

    /// Sets the global brightness from an absolute nits target.
    pub fn set_nits_brightness(&mut self, nits: f32) -> f32 {
        self.global_brightness = nits / CCCS_REFERENCE_WHITE_NITS;
        self.global_brightness
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new_typical()
    }
}
