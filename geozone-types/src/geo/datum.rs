/// Reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Equatorial radius in metres.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Flattening `f = (a - b) / a`.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }

    /// First eccentricity.
    pub fn eccentricity(&self) -> f64 {
        let f = self.flattening();
        (f * (2.0 - f)).sqrt()
    }

    /// Third flattening `n = (a - b) / (a + b)`.
    pub fn third_flattening(&self) -> f64 {
        let f = self.flattening();
        f / (2.0 - f)
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
