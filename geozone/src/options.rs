use crate::projector::UtmProjector;
use crate::LatLng;
use geozone_types::geo::UtmZone;
use geozone_types::kernel::DEFAULT_SEGMENTS;
use serde::{Deserialize, Serialize};

/// How the UTM zone of an operation is chosen.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZonePolicy {
    /// Zone of the first vertex of the first operand (the center for circles).
    #[default]
    FirstOperand,
    /// Always use the given zone.
    Fixed(UtmZone),
}

impl ZonePolicy {
    /// Zone for an operation whose first operand starts at `anchor`.
    pub fn select(&self, anchor: &LatLng) -> UtmZone {
        match self {
            Self::FirstOperand => UtmZone::for_point(anchor),
            Self::Fixed(zone) => *zone,
        }
    }
}

/// Parameters shared by all geometric operations.
///
/// Operations without the `_with` suffix use [`OperationOptions::default()`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationOptions {
    /// Zone selection policy.
    pub zone: ZonePolicy,
    /// Number of segments used to approximate circles.
    pub segments: usize,
    /// A warning is logged when a point is further than this many degrees of longitude from the central meridian of
    /// the projection zone.
    pub distortion_warning_degrees: f64,
}

impl Default for OperationOptions {
    fn default() -> Self {
        Self {
            zone: ZonePolicy::FirstOperand,
            segments: DEFAULT_SEGMENTS,
            distortion_warning_degrees: 3.0,
        }
    }
}

impl OperationOptions {
    /// Sets the zone policy to always use the given zone.
    pub fn with_zone(mut self, zone: UtmZone) -> Self {
        self.zone = ZonePolicy::Fixed(zone);
        self
    }

    /// Sets the number of segments for circle approximation.
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub(crate) fn projector_for(&self, anchor: &LatLng) -> UtmProjector {
        UtmProjector::for_zone(self.zone.select(anchor))
            .with_distortion_warning(self.distortion_warning_degrees)
    }
}
