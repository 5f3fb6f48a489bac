/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “SatView” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use satkit::{sgp4::sgp4,Duration,Instant,frametransform::qteme2itrf};
use nalgebra::Rotation3;
use chrono::{DateTime,Utc};
use tracing::debug;
use satview_common::{cartesian3::Cartesian3, cartographic::Cartographic};
use crate::catalog::{OrbitalRecord,SatelliteRecord};
use crate::errors::{sgp4_error, Result, SatViewOrbitalError};
use crate::{instant_from_datetime, ColumnVec};

/// number of sampling steps per displayed revolution
pub const SEGMENTS: usize = 100;

/// propagates catalog element sets and maps the resulting TEME positions into cartographic
/// coordinates of an earth-fixed frame snapshot
pub struct Locator {
    ref_instant: Instant,
    teme_to_itrf: Rotation3<f64>,
}

impl Locator {
    /// earth orientation is evaluated once, at the reference instant. All positions are
    /// rotated with that single snapshot so that sampled revolutions close up as rings in
    /// the display frame instead of drifting with earth rotation
    pub fn new (ref_time: DateTime<Utc>)->Self {
        let ref_instant = instant_from_datetime( ref_time);
        let teme_to_itrf = qteme2itrf( &ref_instant).to_rotation_matrix();

        Locator { ref_instant, teme_to_itrf }
    }

    pub fn ref_instant (&self)->Instant { self.ref_instant }

    /// map one TEME position column into cartographic coordinates. Non-finite positions
    /// yield None - that is how propagator divergence shows up here
    pub fn to_cartographic (&self, v: &ColumnVec)->Option<Cartographic> {
        let itrf = self.teme_to_itrf * v;
        let p = Cartesian3::from_col( &itrf);

        if p.is_finite() { Some( Cartographic::from(p)) } else { None }
    }

    /// position of the given element set at time t, or None if propagation diverges
    pub fn locate (&self, rec: &OrbitalRecord, t: Instant)->Option<Cartographic> {
        let tvec = vec![t];
        let (pteme, vteme, errs) = sgp4( &mut rec.tle.clone(), &tvec); // sgp4 mutates the TLE, pass a copy
        self.to_cartographic( &pteme.column(0))
    }

    /// seconds per revolution for a catalog record: the metadata orbital period where
    /// usable, otherwise derived from the element set mean motion
    pub fn revolution_seconds (rec: &SatelliteRecord)->Result<f64> {
        let rev_sec = match &rec.meta {
            Some(meta) if meta.period_min.is_finite() && meta.period_min > 0.0 => meta.period_min * 60.0,
            _ => (24.0 * 3600.0) / rec.orbital.tle.mean_motion,
        };

        if rev_sec.is_finite() && rev_sec > 0.0 {
            Ok(rev_sec)
        } else {
            Err( sgp4_error!("satellite {} has no usable revolution time", rec.orbital.catalog_id))
        }
    }

    /// sample one revolution from the reference instant in SEGMENTS equal time steps.
    /// Samples where propagation diverges are dropped, so the returned path can have
    /// fewer than SEGMENTS+1 points
    pub fn sample_orbit (&self, rec: &SatelliteRecord)->Result<Vec<Cartographic>> {
        let rev_sec = Self::revolution_seconds( rec)?;
        let step = Duration::from_seconds( rev_sec / SEGMENTS as f64);

        let mut tvec: Vec<Instant> = Vec::with_capacity( SEGMENTS + 1);
        let mut t = self.ref_instant;
        for _ in 0..=SEGMENTS {
            tvec.push(t);
            t += step;
        }

        // batch propagation of a full revolution is considerably faster than step-by-step
        let (pteme, vteme, errs) = sgp4( &mut rec.orbital.tle.clone(), &tvec);

        let mut points: Vec<Cartographic> = Vec::with_capacity( tvec.len());
        for i in 0..tvec.len() {
            match self.to_cartographic( &pteme.column(i)) {
                Some(p) => points.push(p),
                None => debug!("dropping diverged orbit sample {} of satellite {}", i, rec.orbital.catalog_id)
            }
        }

        Ok(points)
    }
}
