//! Wind fields as pure functions of time and position.

use serde::{Deserialize, Serialize};

/// Horizontal wind velocity (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindVector {
    pub north_m_s: f64,
    pub east_m_s: f64,
}

impl WindVector {
    pub const CALM: Self = Self {
        north_m_s: 0.0,
        east_m_s: 0.0,
    };

    pub const fn new(north_m_s: f64, east_m_s: f64) -> Self {
        Self {
            north_m_s,
            east_m_s,
        }
    }

    /// Component along a track with the given bearing (radians from north).
    pub fn along_track(&self, bearing_rad: f64) -> f64 {
        self.north_m_s * bearing_rad.cos() + self.east_m_s * bearing_rad.sin()
    }
}

/// Wind at a given time (s) and position (deg).
pub trait WindModel {
    fn wind_at(&self, time_s: f64, lat_deg: f64, lon_deg: f64) -> WindVector;
}

/// A constant vector is a uniform, steady wind field.
impl WindModel for WindVector {
    fn wind_at(&self, _time_s: f64, _lat_deg: f64, _lon_deg: f64) -> WindVector {
        *self
    }
}

impl<F> WindModel for F
where
    F: Fn(f64, f64, f64) -> WindVector,
{
    fn wind_at(&self, time_s: f64, lat_deg: f64, lon_deg: f64) -> WindVector {
        self(time_s, lat_deg, lon_deg)
    }
}
