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

/// filter facet model for the satellite display. A FilterSelection mirrors the UI controls
/// (dropdowns plus range sliders) and translates into the where-clause / time-window pair
/// the map engine query layer evaluates. Clause text is part of the query contract - the
/// attribute names and literal formats below have to stay stable

use std::str::FromStr;
use serde::{Serialize,Deserialize};
use strum::{Display,EnumString};
use chrono::{DateTime,Utc};
use satview_common::datetime::{ser_epoch_millis, de_from_epoch_millis, utc_year_start};
use crate::errors::{filter_error, Result, SatViewSceneError};

/* #region facet domains *************************************************************************/

/// launch year slider bounds (year granularity)
pub const LAUNCH_YEAR_BOUNDS: (i64,i64) = (1950, 2025);

/// inclination slider bounds in degrees (raw values, no bucket mapping)
pub const INCLINATION_BOUNDS: (i64,i64) = (0, 160);

/// bucket index bounds of the period/apogee/perigee sliders
pub const BUCKET_BOUNDS: (i64,i64) = (0, 5);

/// orbital period bucket values in minutes, indexed by slider position
pub const PERIOD_BUCKETS: [i64;6] = [0, 100, 200, 1000, 10000, 60000];

/// apogee/perigee bucket values in km, indexed by slider position (both sliders share it)
pub const RANGE_KM_BUCKETS: [i64;6] = [0, 1000, 2000, 5000, 100000, 600000];

/// map a slider bucket index into its clause value. Out of table indices are hard errors
/// since they mean display and core disagree about the slider domain
fn bucket_value (table: &[i64;6], idx: i64)->Result<i64> {
    if idx < 0 || idx as usize >= table.len() {
        return Err( SatViewSceneError::BucketIndexError(idx) )
    }
    Ok( table[idx as usize] )
}

/* #endregion facet domains */

/* #region selection *****************************************************************************/

/// object category facet. Junk/Active discriminate on well known name markers
/// (debris "DEB" and spent rocket bodies "R/B")
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,Display,EnumString)]
#[strum(serialize_all="lowercase")]
#[serde(rename_all="lowercase")]
pub enum Category {
    All,
    Junk,
    Active
}

/// RCS size class facet, with the string forms used by the catalog data
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,Display,EnumString)]
#[strum(serialize_all="UPPERCASE")]
#[serde(rename_all="UPPERCASE")]
pub enum SizeClass {
    Small,
    Medium,
    Large
}

/// inclusive from/to state of one range slider
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct RangeSelection {
    pub from: i64,
    pub to: i64,
}

impl RangeSelection {
    pub fn new (from: i64, to: i64)->Self {
        RangeSelection { from, to }
    }

    pub fn full (bounds: (i64,i64))->Self {
        RangeSelection { from: bounds.0, to: bounds.1 }
    }

    /// a slider pushed to its bounds does not constrain
    pub fn is_full (&self, bounds: (i64,i64))->bool {
        self.from == bounds.0 && self.to == bounds.1
    }
}

/// the full facet state of the filter controls
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FilterSelection {
    pub country: Option<String>,      // None = all countries
    pub category: Category,
    pub size: Option<SizeClass>,      // None = all sizes
    pub launch: RangeSelection,       // years
    pub period: RangeSelection,       // bucket indices
    pub inclination: RangeSelection,  // degrees
    pub apogee: RangeSelection,       // bucket indices
    pub perigee: RangeSelection,      // bucket indices
}

impl FilterSelection {
    pub fn unconstrained ()->Self {
        FilterSelection {
            country: None,
            category: Category::All,
            size: None,
            launch: RangeSelection::full( LAUNCH_YEAR_BOUNDS),
            period: RangeSelection::full( BUCKET_BOUNDS),
            inclination: RangeSelection::full( INCLINATION_BOUNDS),
            apogee: RangeSelection::full( BUCKET_BOUNDS),
            perigee: RangeSelection::full( BUCKET_BOUNDS),
        }
    }

    pub fn is_unconstrained (&self)->bool {
        self.country.is_none()
            && self.category == Category::All
            && self.size.is_none()
            && self.launch.is_full( LAUNCH_YEAR_BOUNDS)
            && self.period.is_full( BUCKET_BOUNDS)
            && self.inclination.is_full( INCLINATION_BOUNDS)
            && self.apogee.is_full( BUCKET_BOUNDS)
            && self.perigee.is_full( BUCKET_BOUNDS)
    }

    /// translate the facet state into a display query. Clause term order is fixed
    /// (country, category, size, period, inclination, apogee, perigee) and the launch
    /// facet only ever contributes the time window, never a clause term
    pub fn build (&self)->Result<FilterOutcome> {
        if self.is_unconstrained() {
            return Ok( FilterOutcome::Universal )
        }

        let mut terms: Vec<String> = Vec::new();

        if let Some(country) = &self.country {
            // values come from the fixed UI option set, never from free form text input
            terms.push( format!("country='{}'", country));
        }

        match self.category {
            Category::All => {}
            Category::Junk => terms.push( "(name LIKE '%DEB%' OR name LIKE '%R/B%')".to_string()),
            Category::Active => terms.push( "(name NOT LIKE '%DEB%' AND name NOT LIKE '%R/B%')".to_string()),
        }

        if let Some(size) = &self.size {
            terms.push( format!("size='{}'", size));
        }

        if !self.period.is_full( BUCKET_BOUNDS) {
            let from = bucket_value( &PERIOD_BUCKETS, self.period.from)?;
            let to = bucket_value( &PERIOD_BUCKETS, self.period.to)?;
            terms.push( format!("(period BETWEEN {} AND {})", from, to));
        }

        if !self.inclination.is_full( INCLINATION_BOUNDS) {
            terms.push( format!("(inclination BETWEEN {} AND {})", self.inclination.from, self.inclination.to));
        }

        if !self.apogee.is_full( BUCKET_BOUNDS) {
            let from = bucket_value( &RANGE_KM_BUCKETS, self.apogee.from)?;
            let to = bucket_value( &RANGE_KM_BUCKETS, self.apogee.to)?;
            terms.push( format!("(apogee BETWEEN {} AND {})", from, to));
        }

        if !self.perigee.is_full( BUCKET_BOUNDS) {
            let from = bucket_value( &RANGE_KM_BUCKETS, self.perigee.from)?;
            let to = bucket_value( &RANGE_KM_BUCKETS, self.perigee.to)?;
            terms.push( format!("(perigee BETWEEN {} AND {})", from, to));
        }

        let time_window = if self.launch.is_full( LAUNCH_YEAR_BOUNDS) { None } else {
            let start = utc_year_start( self.launch.from as i32)
                .ok_or_else( || filter_error!("invalid launch year {}", self.launch.from))?;
            let end = utc_year_start( self.launch.to as i32)
                .ok_or_else( || filter_error!("invalid launch year {}", self.launch.to))?;
            Some( TimeWindow { start, end } )
        };

        Ok( FilterOutcome::Constrained( FilterPredicate {
            where_clause: terms.join(" AND "),
            time_window
        }))
    }
}

impl Default for FilterSelection {
    fn default ()->Self { FilterSelection::unconstrained() }
}

/* #endregion selection */

/* #region predicate *****************************************************************************/

/// year granular [start,end) display time window, serialized as epoch millis
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct TimeWindow {
    #[serde(serialize_with="ser_epoch_millis", deserialize_with="de_from_epoch_millis")]
    pub start: DateTime<Utc>,
    #[serde(serialize_with="ser_epoch_millis", deserialize_with="de_from_epoch_millis")]
    pub end: DateTime<Utc>,
}

/// what the map engine query layer consumes. The where clause can be empty when only
/// the time window constrains
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct FilterPredicate {
    pub where_clause: String,

    #[serde(skip_serializing_if="satview_common::is_none", default)]
    pub time_window: Option<TimeWindow>,
}

/// distinguishes "no constraints at all" from a constraining predicate - callers reset
/// the display filter for Universal instead of querying with a degenerate clause
#[derive(Debug,Clone,PartialEq)]
pub enum FilterOutcome {
    Universal,
    Constrained( FilterPredicate ),
}

/* #endregion predicate */
