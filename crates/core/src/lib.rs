//! Core constants and shared primitives for the mission planning workspace.

/// Physical constants expressed in the units each domain works in.
pub mod constants {
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Mean Earth radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
    /// Earth's standard gravitational parameter (km³/s²).
    pub const MU_EARTH_KM3_S2: f64 = 398_600.44;
    /// Metres per degree of latitude used by the flat-earth approximation.
    pub const METERS_PER_DEGREE: f64 = 111_320.0;
}

/// Angle helpers. All angles are degrees unless the name says otherwise.
pub mod angles {
    /// Wrap an angle into `[-180, 180]`.
    pub fn normalize_signed_deg(mut angle: f64) -> f64 {
        while angle > 180.0 {
            angle -= 360.0;
        }
        while angle < -180.0 {
            angle += 360.0;
        }
        angle
    }

    /// Smallest signed turn taking `from` onto `to`.
    #[inline]
    pub fn turn_angle_deg(from: f64, to: f64) -> f64 {
        normalize_signed_deg(to - from)
    }

    /// Wrap a longitude into `[-180, 180]`.
    #[inline]
    pub fn wrap_longitude_deg(lon: f64) -> f64 {
        normalize_signed_deg(lon)
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Split a duration into whole days, hours and minutes.
    pub fn split_duration(seconds: f64) -> (i64, i64, i64) {
        let total_seconds = seconds.max(0.0);
        let days = (total_seconds / SECONDS_PER_DAY).floor() as i64;
        let remaining = total_seconds - (days as f64 * SECONDS_PER_DAY);
        let hours = (remaining / 3_600.0).floor() as i64;
        let minutes = ((remaining - hours as f64 * 3_600.0) / 60.0).floor() as i64;
        (days, hours, minutes)
    }
}

