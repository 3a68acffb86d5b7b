//! # Targets
//!
//! A [`Target`] is one observable body: the Sun, the Moon, a planet, a comet, an asteroid or a
//! fixed deep-sky object. It holds
//!
//! - three apparent positions at 0h dynamical time (previous day, day, next day),
//! - the altitude threshold `h0` used for its rising and setting,
//! - optionally the [`OrbitalModel`] producing those positions, a magnitude and an apparent size,
//! - the derived [`Ephemerides`], once [`Target::calculate_ephemerides`] has run.
//!
//! Changing a position or `h0` drops the derived ephemerides; reading them before the next
//! calculation is an [`AlmanacError::EphemeridesNotCalculated`] error.
//!
//! Example
//! -------
//! ```rust, no_run
//! use almanac::coordinates::{EquatorialCoordinates, GeographicalCoordinates};
//! use almanac::delta_t::NoDeltaTData;
//! use almanac::target::night::SolarNightWindow;
//! use almanac::target::Target;
//! use almanac::time::CalendarDate;
//!
//! let mut m31 = Target::fixed("M 31", EquatorialCoordinates::new(0.712, 41.269).unwrap());
//! let brussels = GeographicalCoordinates::new(4.35, 50.85).unwrap();
//! let date = CalendarDate::from_ymd(2024, 10, 1).unwrap();
//! let ephemerides = m31
//!     .calculate_ephemerides(&brussels, &date, &NoDeltaTData, &SolarNightWindow::default())
//!     .unwrap();
//! println!("transit at JD {}", ephemerides.transit);
//! ```
pub mod night;
pub mod orbital_model;
pub mod rise_transit_set;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::almanac_errors::AlmanacError;
use crate::constants::{ArcSec, Degree, JulianDay, H0_STAR, SECONDS_PER_DAY};
use crate::coordinates::{EquatorialCoordinates, GeographicalCoordinates};
use crate::delta_t::{delta_t, DeltaTProvider};
use crate::observation::{ObservationConfig, ObservationTime};
use crate::photometry::contrast::{contrast_reserve, surface_brightness};
use crate::time::{greenwich_apparent_sidereal_time, CalendarDate};

use night::NightWindowProvider;
use orbital_model::{OrbitalModel, PositionModel};
use rise_transit_set::{DaySky, Visibility};

/// Length of the sidereal day in mean solar days.
const SIDEREAL_DAY: f64 = 0.99726957;

/// Everything derived from the positions of a target for one observer and one UT day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ephemerides {
    /// 0h UT of the day, Julian Day
    pub midnight: JulianDay,
    pub sky: DaySky,
    /// Julian Days (UT)
    pub transit: JulianDay,
    pub rising: Option<JulianDay>,
    pub setting: Option<JulianDay>,
    pub visibility: Visibility,
    /// Altitude at the transit, degrees
    pub max_height: Degree,
    /// Highest altitude reached during the observing window, `None` without darkness
    pub max_height_at_night: Option<Degree>,
    /// Instant of [`Ephemerides::max_height_at_night`]
    pub best_time: Option<JulianDay>,
}

impl Ephemerides {
    /// Altitude of the target at the instant `jd_ut`.
    ///
    /// The positions are interpolated, so the answer is meaningful within a day or so of
    /// [`Ephemerides::midnight`].
    pub fn altitude_at(&self, jd_ut: JulianDay) -> Degree {
        self.sky.altitude_at(jd_ut - self.midnight)
    }

    /// `(instant, altitude)` samples from `start` to `end` every `step_minutes`, both ends
    /// included.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::OutOfDomain`] if `step_minutes` is not strictly positive or `end < start`.
    pub fn altitude_series(
        &self,
        start: JulianDay,
        end: JulianDay,
        step_minutes: f64,
    ) -> Result<Vec<(JulianDay, Degree)>, AlmanacError> {
        if !(step_minutes > 0.0) || end < start {
            return Err(AlmanacError::OutOfDomain(format!(
                "altitude series from {start} to {end} every {step_minutes} minutes"
            )));
        }
        let step = step_minutes / 1440.0;
        let count = ((end - start) / step).floor() as usize;
        let mut samples: Vec<(JulianDay, Degree)> = (0..=count)
            .map(|k| start + k as f64 * step)
            .map(|jd| (jd, self.altitude_at(jd)))
            .collect();
        if samples.last().is_some_and(|(jd, _)| *jd < end) {
            samples.push((end, self.altitude_at(end)));
        }
        Ok(samples)
    }
}

/// One observable body and its cached ephemerides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    name: String,
    model: Option<OrbitalModel>,
    positions: Option<[EquatorialCoordinates; 3]>,
    h0: Degree,
    magnitude: Option<f64>,
    /// Major and minor axes, arcseconds
    diameter: Option<(ArcSec, ArcSec)>,
    ephemerides: Option<Ephemerides>,
}

impl Target {
    fn empty(name: impl Into<String>, model: Option<OrbitalModel>) -> Self {
        Target {
            name: name.into(),
            model,
            positions: None,
            h0: H0_STAR,
            magnitude: None,
            diameter: None,
            ephemerides: None,
        }
    }

    /// A fixed object (star, deep-sky object) at `coordinates`.
    pub fn fixed(name: impl Into<String>, coordinates: EquatorialCoordinates) -> Self {
        let mut target = Target::empty(name, None);
        target.set_equatorial_coordinates(coordinates);
        target
    }

    /// A moving body whose positions come from `model`.
    ///
    /// Positions are unknown until [`Target::update_positions`] runs.
    pub fn with_model(name: impl Into<String>, model: impl Into<OrbitalModel>) -> Self {
        Target::empty(name, Some(model.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> Option<&OrbitalModel> {
        self.model.as_ref()
    }

    pub fn h0(&self) -> Degree {
        self.h0
    }

    /// Position at 0h TD of the day, if known.
    pub fn equatorial_coordinates(&self) -> Option<EquatorialCoordinates> {
        self.positions.map(|p| p[1])
    }

    /// Positions at 0h TD of the previous day, the day and the next day, if known.
    pub fn daily_positions(&self) -> Option<[EquatorialCoordinates; 3]> {
        self.positions
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }

    pub fn diameter(&self) -> Option<(ArcSec, ArcSec)> {
        self.diameter
    }

    /// Fixes the target at `coordinates` on the three days.
    pub fn set_equatorial_coordinates(&mut self, coordinates: EquatorialCoordinates) {
        self.set_daily_positions([coordinates; 3]);
    }

    /// Replaces the three daily positions.
    pub fn set_daily_positions(&mut self, positions: [EquatorialCoordinates; 3]) {
        self.positions = Some(positions);
        self.ephemerides = None;
    }

    pub fn set_yesterday_position(&mut self, position: EquatorialCoordinates) {
        self.set_one_position(0, position);
    }

    pub fn set_today_position(&mut self, position: EquatorialCoordinates) {
        self.set_one_position(1, position);
    }

    pub fn set_tomorrow_position(&mut self, position: EquatorialCoordinates) {
        self.set_one_position(2, position);
    }

    fn set_one_position(&mut self, index: usize, position: EquatorialCoordinates) {
        let mut positions = self.positions.unwrap_or([position; 3]);
        positions[index] = position;
        self.set_daily_positions(positions);
    }

    pub fn set_h0(&mut self, h0: Degree) {
        self.h0 = h0;
        self.ephemerides = None;
    }

    pub fn set_magnitude(&mut self, magnitude: f64) {
        self.magnitude = Some(magnitude);
    }

    /// Apparent size of an extended object.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::OutOfDomain`] unless both axes are strictly positive.
    pub fn set_diameter(&mut self, major: ArcSec, minor: ArcSec) -> Result<(), AlmanacError> {
        if !(major > 0.0 && minor > 0.0) {
            return Err(AlmanacError::OutOfDomain(format!(
                "diameter {major}\" x {minor}\" must be positive"
            )));
        }
        self.diameter = Some((major, minor));
        Ok(())
    }

    /// Computes the three daily positions from the orbital model, together with `h0` and the
    /// magnitude on the day.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the UT day, its time of day is ignored.
    /// * `delta_t_provider`: source of ΔT for `date`.
    /// * `config`: observer and ephemeris mode.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::OutOfDomain`] for a target without orbital model.
    /// * any error of the model itself.
    pub fn update_positions(
        &mut self,
        date: &CalendarDate,
        delta_t_provider: &dyn DeltaTProvider,
        config: &ObservationConfig,
    ) -> Result<(), AlmanacError> {
        let model = self.model.as_ref().ok_or_else(|| {
            AlmanacError::OutOfDomain(format!("{} has no position model", self.name))
        })?;
        let dt = delta_t(date, delta_t_provider);
        let jd0 = date.midnight().julian_day();
        // 0h TD of each day, expressed in UT
        let at = |day: f64| ObservationTime::new(jd0 + day - dt / SECONDS_PER_DAY, dt);

        let today = at(0.0);

        let positions = [
            model.equatorial_position(&at(-1.0), config)?.equatorial,
            model.equatorial_position(&today, config)?.equatorial,
            model.equatorial_position(&at(1.0), config)?.equatorial,
        ];
        let h0 = model.standard_altitude(today.jde());
        let magnitude = model.magnitude(today.jde())?;
        debug!(name = %self.name, jd0, h0, "positions updated");

        self.set_daily_positions(positions);
        self.set_h0(h0);
        if magnitude.is_some() {
            self.magnitude = magnitude;
        }
        Ok(())
    }

    /// Rising, transit and setting, maximum altitude and best observing time on the UT day of
    /// `date`.
    ///
    /// The observing window is astronomical darkness, or nautical darkness when the Sun never
    /// reaches −18°. When the transit falls inside it, the best time is the transit; otherwise it
    /// is whichever end of the window sees the target higher. Without any window both the best
    /// time and the maximum altitude at night are `None`.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidCoordinate`] if no position is known yet.
    /// * any error of the night window provider.
    pub fn calculate_ephemerides(
        &mut self,
        geo_coords: &GeographicalCoordinates,
        date: &CalendarDate,
        delta_t_provider: &dyn DeltaTProvider,
        night_provider: &dyn NightWindowProvider,
    ) -> Result<&Ephemerides, AlmanacError> {
        let positions = self.positions.ok_or_else(|| {
            AlmanacError::InvalidCoordinate(format!("{} has no position", self.name))
        })?;
        let midnight = date.midnight().julian_day();
        let sky = DaySky {
            positions,
            geo_coords: *geo_coords,
            sidereal_time: greenwich_apparent_sidereal_time(midnight, None),
            delta_t: delta_t(date, delta_t_provider),
        };
        let events = sky.rise_transit_set(self.h0);
        let transit = midnight + events.transit;

        let window = night_provider
            .night_window(date, geo_coords)?
            .observing_window(midnight);
        let best = window.map(|(start, end)| {
            let transit_at_night = (-1..=2)
                .map(|k| (k, transit + f64::from(k) * SIDEREAL_DAY))
                .find(|(_, t)| (start..=end).contains(t));
            match transit_at_night {
                Some((0, _)) => (transit, events.transit_altitude),
                Some((_, t)) => (t, sky.altitude_at(t - midnight)),
                None => {
                    let at_start = sky.altitude_at(start - midnight);
                    let at_end = sky.altitude_at(end - midnight);
                    if at_start >= at_end {
                        (start, at_start)
                    } else {
                        (end, at_end)
                    }
                }
            }
        });
        if best.is_none() {
            debug!(name = %self.name, midnight, "no dark window, no best time");
        }

        let ephemerides = self.ephemerides.insert(Ephemerides {
            midnight,
            sky,
            transit,
            rising: events.rising.map(|m| midnight + m),
            setting: events.setting.map(|m| midnight + m),
            visibility: events.visibility,
            max_height: events.transit_altitude,
            max_height_at_night: best.map(|(_, altitude)| altitude),
            best_time: best.map(|(time, _)| time),
        });
        Ok(&*ephemerides)
    }

    /// The derived ephemerides.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::EphemeridesNotCalculated`] before [`Target::calculate_ephemerides`] or
    ///   after a change of position or `h0`.
    pub fn ephemerides(&self) -> Result<&Ephemerides, AlmanacError> {
        self.ephemerides
            .as_ref()
            .ok_or(AlmanacError::EphemeridesNotCalculated)
    }

    pub fn transit(&self) -> Result<JulianDay, AlmanacError> {
        Ok(self.ephemerides()?.transit)
    }

    pub fn rising(&self) -> Result<Option<JulianDay>, AlmanacError> {
        Ok(self.ephemerides()?.rising)
    }

    pub fn setting(&self) -> Result<Option<JulianDay>, AlmanacError> {
        Ok(self.ephemerides()?.setting)
    }

    pub fn max_height(&self) -> Result<Degree, AlmanacError> {
        Ok(self.ephemerides()?.max_height)
    }

    pub fn max_height_at_night(&self) -> Result<Option<Degree>, AlmanacError> {
        Ok(self.ephemerides()?.max_height_at_night)
    }

    pub fn best_time(&self) -> Result<Option<JulianDay>, AlmanacError> {
        Ok(self.ephemerides()?.best_time)
    }

    /// Mean surface brightness, mag/arcsec², `None` without magnitude or diameter.
    pub fn surface_brightness(&self) -> Result<Option<f64>, AlmanacError> {
        match (self.magnitude, self.diameter) {
            (Some(magnitude), Some((major, minor))) => {
                surface_brightness(magnitude, major, minor).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Contrast reserve of the target through a telescope.
    ///
    /// Returns
    /// --------
    /// * `None` without magnitude or diameter, the contrast reserve otherwise.
    ///
    /// See also
    /// --------
    /// * [`crate::photometry::contrast::contrast_reserve`]
    pub fn contrast_reserve(
        &self,
        sky_sqm: f64,
        aperture_mm: f64,
        magnification: f64,
    ) -> Result<Option<f64>, AlmanacError> {
        match (self.surface_brightness()?, self.diameter) {
            (Some(sb), Some((_, minor))) => {
                contrast_reserve(sb, minor, sky_sqm, aperture_mm, magnification).map(Some)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod target_test {
    use super::night::{Darkness, NightWindow};
    use super::*;
    use crate::delta_t::NoDeltaTData;
    use crate::planets::Body;
    use approx::assert_abs_diff_eq;

    /// Night window with the same darkness below every limit.
    struct FixedNight(Option<(f64, f64)>);

    impl NightWindowProvider for FixedNight {
        fn night_window(
            &self,
            date: &CalendarDate,
            _geo_coords: &GeographicalCoordinates,
        ) -> Result<NightWindow, AlmanacError> {
            let midnight = date.midnight().julian_day();
            let darkness = match self.0 {
                Some((start, end)) => Darkness::Between {
                    start: midnight + start,
                    end: midnight + end,
                },
                None => Darkness::Never,
            };
            Ok(NightWindow {
                night: darkness,
                civil: darkness,
                nautical: darkness,
                astronomical: darkness,
            })
        }
    }

    fn boston() -> GeographicalCoordinates {
        GeographicalCoordinates::new(-71.0833, 42.3333).unwrap()
    }

    fn march_20() -> CalendarDate {
        CalendarDate::from_ymd(1988, 3, 20).unwrap()
    }

    fn polaris() -> Target {
        Target::fixed("Polaris", EquatorialCoordinates::new(2.852136, 85.82742).unwrap())
    }

    #[test]
    fn test_reading_before_calculation_fails() {
        let target = polaris();
        assert_eq!(target.transit(), Err(AlmanacError::EphemeridesNotCalculated));
        assert_eq!(target.best_time(), Err(AlmanacError::EphemeridesNotCalculated));
        assert_eq!(target.max_height(), Err(AlmanacError::EphemeridesNotCalculated));
    }

    #[test]
    fn test_target_without_position() {
        let mut target = Target::with_model("Mars", Body::Mars);
        let result =
            target.calculate_ephemerides(&boston(), &march_20(), &NoDeltaTData, &FixedNight(None));
        assert!(matches!(result, Err(AlmanacError::InvalidCoordinate(_))));
    }

    #[test]
    fn test_circumpolar_target() {
        let mut target = polaris();
        let night = FixedNight(Some((0.05, 0.4)));
        let ephemerides = *target
            .calculate_ephemerides(&boston(), &march_20(), &NoDeltaTData, &night)
            .unwrap();

        assert_eq!(ephemerides.visibility, Visibility::Circumpolar);
        assert_eq!(ephemerides.rising, None);
        assert_eq!(ephemerides.setting, None);

        let transit = CalendarDate::from_julian_day(ephemerides.transit).unwrap();
        assert_eq!((transit.hour(), transit.minute()), (19, 44));

        // The transit happens in daylight: the best time is one end of the window
        let best = ephemerides.best_time.unwrap();
        let midnight = march_20().julian_day();
        assert!(best == midnight + 0.05 || best == midnight + 0.4);
        assert!(ephemerides.max_height_at_night.unwrap() < ephemerides.max_height);
        assert_eq!(
            ephemerides.max_height_at_night.unwrap(),
            ephemerides.altitude_at(best)
        );
    }

    #[test]
    fn test_transit_inside_the_night() {
        let mut target = polaris();
        let ephemerides = *target
            .calculate_ephemerides(
                &boston(),
                &march_20(),
                &NoDeltaTData,
                &FixedNight(Some((0.7, 0.9))),
            )
            .unwrap();
        assert_eq!(ephemerides.best_time, Some(ephemerides.transit));
        assert_eq!(ephemerides.max_height_at_night, Some(ephemerides.max_height));
    }

    #[test]
    fn test_transit_of_the_next_sidereal_day_inside_the_night() {
        // Transit at 0.822, window on the following day only
        let mut target = polaris();
        let ephemerides = *target
            .calculate_ephemerides(
                &boston(),
                &march_20(),
                &NoDeltaTData,
                &FixedNight(Some((1.7, 1.9))),
            )
            .unwrap();
        let best = ephemerides.best_time.unwrap();
        assert_abs_diff_eq!(best, ephemerides.transit + SIDEREAL_DAY, epsilon = 1e-12);
        assert_abs_diff_eq!(
            ephemerides.max_height_at_night.unwrap(),
            ephemerides.max_height,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_no_darkness() {
        let mut target = polaris();
        let ephemerides = target
            .calculate_ephemerides(&boston(), &march_20(), &NoDeltaTData, &FixedNight(None))
            .unwrap();
        assert_eq!(ephemerides.best_time, None);
        assert_eq!(ephemerides.max_height_at_night, None);
    }

    #[test]
    fn test_calculation_is_idempotent_and_invalidated() {
        let night = FixedNight(Some((0.05, 0.4)));
        let mut target = polaris();
        let first = *target
            .calculate_ephemerides(&boston(), &march_20(), &NoDeltaTData, &night)
            .unwrap();
        let second = *target
            .calculate_ephemerides(&boston(), &march_20(), &NoDeltaTData, &night)
            .unwrap();
        assert_eq!(first, second);

        target.set_h0(-0.8333);
        assert_eq!(target.ephemerides(), Err(AlmanacError::EphemeridesNotCalculated));

        target
            .calculate_ephemerides(&boston(), &march_20(), &NoDeltaTData, &night)
            .unwrap();
        target.set_today_position(EquatorialCoordinates::new(12.0, 30.0).unwrap());
        assert_eq!(target.ephemerides(), Err(AlmanacError::EphemeridesNotCalculated));

        let moved = *target
            .calculate_ephemerides(&boston(), &march_20(), &NoDeltaTData, &night)
            .unwrap();
        assert_ne!(moved.transit, first.transit);
        assert_eq!(moved.visibility, Visibility::RisesAndSets);
    }

    #[test]
    fn test_altitude_series() {
        let mut target = polaris();
        let ephemerides = *target
            .calculate_ephemerides(&boston(), &march_20(), &NoDeltaTData, &FixedNight(None))
            .unwrap();
        let start = ephemerides.midnight;
        let series = ephemerides.altitude_series(start, start + 1.0, 60.0).unwrap();
        assert_eq!(series.len(), 25);
        assert_eq!(series[0].0, start);
        assert!(series.iter().all(|(_, h)| *h > 38.0 && *h < 47.0));
        assert!(ephemerides.altitude_series(start, start + 1.0, 0.0).is_err());
        assert!(ephemerides.altitude_series(start + 1.0, start, 10.0).is_err());
    }

    #[test]
    fn test_update_positions_from_series() {
        let config = ObservationConfig::new(boston(), 0.0);
        let mut venus = Target::with_model("Venus", Body::Venus);
        venus.update_positions(&march_20(), &NoDeltaTData, &config).unwrap();

        let [yesterday, today, tomorrow] = venus.daily_positions().unwrap();
        // Venus moves about one degree a day eastward in March 1988
        assert!(today.right_ascension_degrees() > yesterday.right_ascension_degrees());
        assert!(tomorrow.right_ascension_degrees() > today.right_ascension_degrees());
        assert_abs_diff_eq!(today.right_ascension_degrees(), 41.73129, epsilon = 0.01);
        assert_abs_diff_eq!(today.declination(), 18.44092, epsilon = 0.01);
        assert_eq!(venus.h0(), H0_STAR);
        assert!(venus.magnitude().unwrap() < -3.5);
        // Magnitude and h0 are taken at 0h TD of the day, like the middle position
        let dt = delta_t(&march_20(), &NoDeltaTData);
        let jde = ObservationTime::new(march_20().julian_day() - dt / SECONDS_PER_DAY, dt).jde();
        assert_eq!(venus.magnitude(), venus.model().unwrap().magnitude(jde).unwrap());

        let mut moon = Target::with_model("Moon", Body::Moon);
        moon.update_positions(&march_20(), &NoDeltaTData, &config).unwrap();
        assert!(moon.h0() > 0.0);
        assert_eq!(moon.h0(), moon.model().unwrap().standard_altitude(jde));

        let mut no_model = polaris();
        assert!(no_model
            .update_positions(&march_20(), &NoDeltaTData, &config)
            .is_err());
    }

    #[test]
    fn test_photometry_of_extended_object() {
        let mut m51 = Target::fixed("M 51", EquatorialCoordinates::new(13.498, 47.195).unwrap());
        assert_eq!(m51.surface_brightness().unwrap(), None);
        assert_eq!(m51.contrast_reserve(21.0, 254.0, 100.0).unwrap(), None);

        m51.set_magnitude(8.4);
        assert!(m51.set_diameter(0.0, 300.0).is_err());
        m51.set_diameter(660.0, 420.0).unwrap();
        // 11′ × 7′
        let sb = m51.surface_brightness().unwrap().unwrap();
        assert_abs_diff_eq!(sb, 8.4 + 2.5 * (2827.0f64 * 77.0).log10(), epsilon = 1e-9);
        assert!(m51.contrast_reserve(21.0, 254.0, 100.0).unwrap().is_some());
    }
}
