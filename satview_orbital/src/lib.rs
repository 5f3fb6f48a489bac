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

use nalgebra::{ViewStorage,base::{Matrix,dimension::Const}};
use chrono::{DateTime,TimeZone,Utc};
use satkit::Instant;
use satview_common::datetime;

pub mod errors;
use errors::{op_failed, Result, SatViewOrbitalError};

pub mod config;
pub mod source;
pub mod catalog;
pub mod ephemeris;
pub mod session;

//--- general utility functions

pub fn instant_from_datetime<Z> (dt: DateTime<Z>)->Instant where Z:TimeZone {
    Instant::from_unixtime( dt.timestamp_millis() as f64 / 1000.0)
}

pub fn instant_from_datetime_spec (ds: &str) -> Result<Instant> {
    datetime::parse_datetime(ds).ok_or( op_failed!("invalid datetime spec {}", ds)).map( |dt| instant_from_datetime(dt))
}

pub type ColumnVec<'a> = Matrix<f64, Const<3>, Const<1>, ViewStorage<'a, f64, Const<3>, Const<1>, Const<1>, Const<3>>>;
