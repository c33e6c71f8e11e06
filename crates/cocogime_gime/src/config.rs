use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Silicon revision of the GIME.
///
/// The two revisions differ in how many extra ticks are added to a
/// non-zero timer reload value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GimeRevision {
    /// Original 1986 part; reload counts `value + 2` ticks.
    #[default]
    Gime1986,
    /// 1987 respin; reload counts `value + 1` ticks.
    Gime1987,
}

impl GimeRevision {
    pub(crate) fn timer_adjust(self) -> u16 {
        match self {
            GimeRevision::Gime1986 => 2,
            GimeRevision::Gime1987 => 1,
        }
    }
}

/// NTSC colour artifacting of the legacy 256x192 two-colour mode on
/// composite output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Artifacting {
    #[default]
    Off,
    /// Lit-unlit pairs show orange, unlit-lit pairs blue.
    Standard,
    /// Colour burst phase flipped: the two colours swap.
    Reverse,
}

/// Construction parameters for a [`crate::Gime`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct GimeConfig {
    #[builder(default)]
    pub revision: GimeRevision,
    /// Installed RAM in bytes. Must be a non-zero multiple of 8 KiB;
    /// block numbers wrap modulo this size.
    #[builder(default = 512 * 1024)]
    pub ram_size: usize,
    /// Number of palette snapshots kept for one frame.
    #[builder(default = 1024)]
    pub palette_rotation_slots: usize,
    /// Internal ROM image (32 KiB for a stock machine).
    #[builder(default)]
    pub rom: Vec<u8>,
    #[builder(default)]
    pub artifacting: Artifacting,
}

impl Default for GimeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
