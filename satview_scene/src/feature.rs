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

/// typed display features for satellites. Field names and values have to match what the
/// map engine query layer evaluates where-clauses against, hence the camelCase wire format
/// and raw (string) metadata values

use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};
use satview_common::{cartographic::Cartographic, datetime::ser_epoch_millis_option};

/// queryable attributes of one displayed satellite. All metadata derived fields are
/// optional since element sets without a matching catalog entry are still displayed
#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct SatelliteAttributes {
    pub oid: u32,    // display object id (dense, 1-based)
    pub norad: u32,  // NORAD catalog number

    #[serde(skip_serializing_if="satview_common::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if="satview_common::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if="satview_common::is_none")]
    pub period: Option<f64>,       // minutes
    #[serde(skip_serializing_if="satview_common::is_none")]
    pub inclination: Option<f64>,  // degrees
    #[serde(skip_serializing_if="satview_common::is_none")]
    pub apogee: Option<f64>,       // km
    #[serde(skip_serializing_if="satview_common::is_none")]
    pub perigee: Option<f64>,      // km
    #[serde(skip_serializing_if="satview_common::is_none")]
    pub size: Option<String>,
    #[serde(serialize_with="ser_epoch_millis_option", skip_serializing_if="satview_common::is_none")]
    pub launch: Option<DateTime<Utc>>,
}

impl SatelliteAttributes {
    /// attributes for an element set without catalog metadata
    pub fn new (oid: u32, norad: u32)->Self {
        SatelliteAttributes {
            oid, norad,
            name: None, country: None, period: None, inclination: None,
            apogee: None, perigee: None, size: None, launch: None
        }
    }
}

/// a point feature as consumed by the map engine: geodetic position plus attribute bag
#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct SatelliteFeature {
    pub position: [f64;3],  // [lon_deg, lat_deg, height_m]
    pub attributes: SatelliteAttributes,
}

impl SatelliteFeature {
    pub fn new (pos: &Cartographic, attributes: SatelliteAttributes)->Self {
        SatelliteFeature { position: pos.to_degrees_array(), attributes }
    }
}

/// one sampled revolution of a selected satellite, as a polyline path
#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct OrbitTrace {
    pub oid: u32,
    pub path: Vec<[f64;3]>,
}

impl OrbitTrace {
    pub fn new (oid: u32, points: &[Cartographic])->Self {
        let path: Vec<[f64;3]> = points.iter().map( |p| p.to_degrees_array()).collect();
        OrbitTrace { oid, path }
    }

    pub fn len (&self)->usize { self.path.len() }
    pub fn is_empty (&self)->bool { self.path.is_empty() }
}
