use std::fmt;

use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{Degree, Hour, JulianDay, Meter, DEG_PER_HOUR, RADEG};
use crate::conversion::{format_dec, format_ra, parse_dec_to_deg, parse_ra_to_deg};
use crate::coordinates::coordinate::{Coordinate, DayHours, FullCircle, HalfCircle, Hemisphere};
use crate::coordinates::ecliptical::EclipticalCoordinates;
use crate::coordinates::galactic::{
    GalacticCoordinates, NGP_DECLINATION, NGP_LONGITUDE_OF_NCP, NGP_RIGHT_ASCENSION,
};
use crate::coordinates::geographical::GeographicalCoordinates;
use crate::coordinates::horizontal::HorizontalCoordinates;
use crate::coordinates::rectangular::RectangularCoordinates;
use crate::ref_system::precession_matrix;

/// Right ascension (hours, `[0, 24)`) and declination (degrees, `[-90, 90]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    right_ascension: Coordinate<DayHours>,
    declination: Coordinate<Hemisphere>,
}

impl EquatorialCoordinates {
    /// Arguments
    /// ---------
    /// * `right_ascension`: hours in `[0, 24]` (24 wraps to 0).
    /// * `declination`: degrees in `[-90, 90]`.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidCoordinate`] when either value lies outside its domain.
    pub fn new(right_ascension: Hour, declination: Degree) -> Result<Self, AlmanacError> {
        if !(0.0..=24.0).contains(&right_ascension) {
            return Err(AlmanacError::InvalidCoordinate(format!(
                "right ascension {right_ascension}h outside [0, 24]"
            )));
        }
        if !Coordinate::<Hemisphere>::in_range(declination) {
            return Err(AlmanacError::InvalidCoordinate(format!(
                "declination {declination}° outside [-90, 90]"
            )));
        }
        Ok(Self::from_parts(right_ascension, declination))
    }

    /// Build from a right ascension in degrees (any value, wrapped) and a declination.
    pub fn from_degrees(right_ascension: Degree, declination: Degree) -> Result<Self, AlmanacError> {
        let ra = Coordinate::<FullCircle>::new(right_ascension).value() / DEG_PER_HOUR;
        EquatorialCoordinates::new(ra, declination)
    }

    /// Parse sexagesimal strings such as `"23 09 16.641"` and `"-06 43 11.61"`.
    pub fn from_sexagesimal(right_ascension: &str, declination: &str) -> Result<Self, AlmanacError> {
        let (ra, _) = parse_ra_to_deg(right_ascension)?;
        let (dec, _) = parse_dec_to_deg(declination)?;
        EquatorialCoordinates::new(ra / DEG_PER_HOUR, dec)
    }

    /// Build from values produced by spherical trigonometry, which are in range by construction.
    pub(crate) fn from_parts(right_ascension: Hour, declination: Degree) -> Self {
        EquatorialCoordinates {
            right_ascension: Coordinate::new(right_ascension),
            declination: Coordinate::new(declination.clamp(-90.0, 90.0)),
        }
    }

    /// Right ascension in hours.
    pub fn right_ascension(&self) -> Hour {
        self.right_ascension.value()
    }

    /// Right ascension in degrees.
    pub fn right_ascension_degrees(&self) -> Degree {
        self.right_ascension.value() * DEG_PER_HOUR
    }

    pub fn declination(&self) -> Degree {
        self.declination.value()
    }

    /// Convert to ecliptical coordinates for an obliquity `ε`, tagging the result with `epoch`.
    ///
    /// ```text
    /// λ = atan2(sin α cos ε + tan δ sin ε, cos α)
    /// β = asin(sin δ cos ε − cos δ sin ε sin α)
    /// ```
    pub fn to_ecliptical(&self, obliquity: Degree, epoch: JulianDay) -> EclipticalCoordinates {
        let (alpha, delta, eps) = (
            self.right_ascension.to_radians(),
            self.declination.to_radians(),
            obliquity * RADEG,
        );
        let lambda = (alpha.sin() * eps.cos() + delta.tan() * eps.sin()).atan2(alpha.cos());
        let beta = (delta.sin() * eps.cos() - delta.cos() * eps.sin() * alpha.sin()).asin();
        EclipticalCoordinates::from_parts(lambda / RADEG, beta / RADEG, epoch)
    }

    /// Local hour angle `H = θ₀ + L − α` in degrees `[-180, 180)`, for a Greenwich sidereal
    /// time `θ₀` and an east-positive longitude `L`.
    pub fn hour_angle(&self, greenwich_sidereal_time: Degree, longitude: Degree) -> Degree {
        Coordinate::<HalfCircle>::new(
            greenwich_sidereal_time + longitude - self.right_ascension_degrees(),
        )
        .value()
    }

    /// Convert to horizontal coordinates.
    ///
    /// Arguments
    /// ---------
    /// * `geo_coords`: observer; only the latitude and the longitude are used.
    /// * `greenwich_sidereal_time`: Greenwich sidereal time in degrees (apparent for apparent
    ///   positions).
    ///
    /// Returns
    /// --------
    /// * Azimuth measured **westward from the south**, and altitude.
    pub fn to_horizontal(
        &self,
        geo_coords: &GeographicalCoordinates,
        greenwich_sidereal_time: Degree,
    ) -> HorizontalCoordinates {
        let h = self.hour_angle(greenwich_sidereal_time, geo_coords.longitude()) * RADEG;
        let phi = geo_coords.latitude() * RADEG;
        let delta = self.declination.to_radians();

        let azimuth = h.sin().atan2(h.cos() * phi.sin() - delta.tan() * phi.cos());
        let altitude = (phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.cos())
            .clamp(-1.0, 1.0)
            .asin();
        HorizontalCoordinates::from_parts(azimuth / RADEG, altitude / RADEG)
    }

    /// Convert to galactic coordinates (J2000 north galactic pole).
    pub fn to_galactic(&self) -> GalacticCoordinates {
        let alpha = (self.right_ascension_degrees() - NGP_RIGHT_ASCENSION) * RADEG;
        let delta = self.declination.to_radians();
        let pole = NGP_DECLINATION * RADEG;

        let b = (delta.sin() * pole.sin() + delta.cos() * pole.cos() * alpha.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let x = (delta.cos() * alpha.sin())
            .atan2(delta.sin() * pole.cos() - delta.cos() * pole.sin() * alpha.cos());
        GalacticCoordinates::from_parts(NGP_LONGITUDE_OF_NCP - x / RADEG, b / RADEG)
    }

    /// Unit vector (or scaled by `distance`) in the equatorial frame.
    pub fn to_rectangular(&self, distance: f64) -> RectangularCoordinates {
        RectangularCoordinates::from_spherical(
            self.right_ascension_degrees(),
            self.declination(),
            distance,
        )
    }

    /// Direction of a rectangular equatorial vector, and its length.
    pub fn from_rectangular(rect: &RectangularCoordinates) -> (Self, f64) {
        let (ra, dec, distance) = rect.to_spherical();
        (Self::from_parts(ra / DEG_PER_HOUR, dec), distance)
    }

    /// Precess mean coordinates from the equinox `from_jd` to the equinox `to_jd`.
    pub fn precess(&self, from_jd: JulianDay, to_jd: JulianDay) -> Self {
        let v = precession_matrix(from_jd, to_jd) * self.to_rectangular(1.0).to_vector();
        Self::from_rectangular(&v.into()).0
    }

    /// Angular separation with another position, in degrees.
    ///
    /// Uses `atan2(|u × v|, u · v)`, which stays accurate for very small and very large
    /// separations where the cosine formula does not.
    pub fn angular_separation(&self, other: &EquatorialCoordinates) -> Degree {
        let u = self.to_rectangular(1.0).to_vector();
        let v = other.to_rectangular(1.0).to_vector();
        u.cross(&v).norm().atan2(u.dot(&v)) / RADEG
    }

    /// Correct geocentric coordinates for the observer's parallax (topocentric position).
    ///
    /// Arguments
    /// ---------
    /// * `sin_parallax`: sine of the equatorial horizontal parallax, `sin(8.794″)/Δ` with `Δ`
    ///   in AU, or `6378.14/Δ` with `Δ` in km.
    /// * `geo_coords`, `height`: observer's position.
    /// * `greenwich_sidereal_time`: degrees.
    ///
    /// Formula
    /// -------
    /// ```text
    /// Δα = atan2(−ρ cos φ′ sin π sin H, cos δ − ρ cos φ′ sin π cos H)
    /// δ′ = atan2((sin δ − ρ sin φ′ sin π) cos Δα, cos δ − ρ cos φ′ sin π cos H)
    /// ```
    pub fn topocentric(
        &self,
        sin_parallax: f64,
        geo_coords: &GeographicalCoordinates,
        height: Meter,
        greenwich_sidereal_time: Degree,
    ) -> Self {
        let (rho_sin, rho_cos) = geo_coords.globe_factors(height);
        let h = self.hour_angle(greenwich_sidereal_time, geo_coords.longitude()) * RADEG;
        let delta = self.declination.to_radians();

        let denominator = delta.cos() - rho_cos * sin_parallax * h.cos();
        let delta_alpha = (-rho_cos * sin_parallax * h.sin()).atan2(denominator);
        let topo_delta =
            ((delta.sin() - rho_sin * sin_parallax) * delta_alpha.cos()).atan2(denominator);

        Self::from_parts(
            (self.right_ascension_degrees() + delta_alpha / RADEG) / DEG_PER_HOUR,
            topo_delta / RADEG,
        )
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {}, Dec {}",
            format_ra(self.right_ascension()),
            format_dec(self.declination())
        )
    }
}

#[cfg(test)]
mod equatorial_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_domain_rejection() {
        assert!(EquatorialCoordinates::new(-0.1, 0.0).is_err());
        assert!(EquatorialCoordinates::new(24.1, 0.0).is_err());
        assert!(EquatorialCoordinates::new(12.0, 90.1).is_err());
        assert!(EquatorialCoordinates::new(12.0, -90.1).is_err());
        let eq = EquatorialCoordinates::new(24.0, 90.0).unwrap();
        assert_eq!(eq.right_ascension(), 0.0);
        assert_eq!(eq.declination(), 90.0);
    }

    #[test]
    fn test_to_ecliptical_pollux() {
        let pollux = EquatorialCoordinates::from_degrees(116.328942, 28.026183).unwrap();
        let ecl = pollux.to_ecliptical(23.4392911, 2451545.0);
        assert_abs_diff_eq!(ecl.longitude(), 113.215630, epsilon = 1e-6);
        assert_abs_diff_eq!(ecl.latitude(), 6.684170, epsilon = 1e-6);
    }

    #[test]
    fn test_sexagesimal_and_display() {
        let venus = EquatorialCoordinates::from_sexagesimal("23 09 16.641", "-06 43 11.61").unwrap();
        assert_abs_diff_eq!(venus.right_ascension(), 23.1546225, epsilon = 1e-7);
        assert_abs_diff_eq!(venus.declination(), -6.7198917, epsilon = 1e-7);
        assert_eq!(venus.to_string(), "RA 23h 09m 16.64s, Dec -06° 43′ 11.6″");
    }

    #[test]
    fn test_angular_separation_arcturus_spica() {
        let arcturus = EquatorialCoordinates::from_degrees(213.9154, 19.1825).unwrap();
        let spica = EquatorialCoordinates::from_degrees(201.2983, -11.1614).unwrap();
        assert_abs_diff_eq!(arcturus.angular_separation(&spica), 32.7930, epsilon = 1e-4);
    }

    #[test]
    fn test_precess_theta_persei() {
        let theta_persei = EquatorialCoordinates::from_degrees(41.054063, 49.227750).unwrap();
        let precessed = theta_persei.precess(2451545.0, 2462088.69);
        assert_abs_diff_eq!(precessed.right_ascension_degrees(), 41.547214, epsilon = 1e-5);
        assert_abs_diff_eq!(precessed.declination(), 49.348483, epsilon = 1e-5);
    }

    #[test]
    fn test_topocentric_zero_parallax_is_identity() {
        let eq = EquatorialCoordinates::new(10.0, 20.0).unwrap();
        let geo = GeographicalCoordinates::new(5.0, 45.0).unwrap();
        let topo = eq.topocentric(0.0, &geo, 0.0, 100.0);
        assert_abs_diff_eq!(topo.right_ascension(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(topo.declination(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_topocentric_mars_palomar() {
        // Mars seen from Palomar, 2003 Aug 28 3h17m UT
        let mars = EquatorialCoordinates::from_degrees(339.530208, -15.771083).unwrap();
        let palomar =
            GeographicalCoordinates::new(-116.8625, 33.0 + 21.0 / 60.0 + 22.0 / 3600.0).unwrap();
        let sin_parallax = (8.794_f64 / 3600.0 * RADEG).sin() / 0.37276;
        let gast = 1.0 * 15.0 + 40.0 / 4.0 + 45.0 / 240.0;
        let topo = mars.topocentric(sin_parallax, &palomar, 1706.0, gast);
        assert_abs_diff_eq!(topo.right_ascension_degrees(), 339.530208 + 1.29 / 240.0, epsilon = 1e-4);
        assert_abs_diff_eq!(topo.declination(), -15.771083 - 14.1 / 3600.0, epsilon = 1e-4);
    }
}
