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

use std::collections::{HashMap,HashSet};
use chrono::{DateTime,Utc};
use satkit::TLE;
use serde::Deserialize;
use tracing::debug;
use satview_common::datetime::{self,parse_utc_date};
use satview_scene::feature::SatelliteAttributes;
use crate::ephemeris::Locator;
use crate::errors::{op_failed, tle_error, Result, SatViewOrbitalError};
use crate::source::TextSource;

/* #region orbital elements ******************************************************************************/

/// one catalog entry as obtained from the element set text
#[derive(Debug,Clone)]
pub struct OrbitalRecord {
    pub catalog_id: u32,  // NORAD catalog number as encoded in the element set
    pub object_id: u32,   // 1-based position of the element pair in the input text
    pub tle: TLE,
}

pub fn parse_element_pair (line1: &str, line2: &str)->Result<TLE> {
    TLE::load_2line( line1, line2).map_err(|e| tle_error!("2 line Satkit TLE import failed {:?}", e))
}

/// parse an element set text with 2 lines per satellite (no name lines). Pairs that are
/// incomplete or that satkit rejects are skipped, as are repeated catalog numbers (first
/// occurrence wins). Object ids are assigned from the pair position, so skips leave gaps
pub fn parse_elements (text: &str)->Vec<OrbitalRecord> {
    let lines: Vec<&str> = text.lines().collect();
    let n_pairs = lines.len() / 2;

    let mut records: Vec<OrbitalRecord> = Vec::with_capacity(n_pairs);
    let mut seen: HashSet<u32> = HashSet::with_capacity(n_pairs);

    for i in 0..n_pairs {
        let line1 = lines[i*2];
        let line2 = lines[i*2 + 1];
        if line1.is_empty() || line2.is_empty() { continue }

        match parse_element_pair( line1, line2) {
            Ok(tle) => {
                let catalog_id = tle.sat_num as u32;
                if seen.insert( catalog_id) {
                    records.push( OrbitalRecord { catalog_id, object_id: (i + 1) as u32, tle })
                } else {
                    debug!("ignoring repeated element set for catalog id {}", catalog_id);
                }
            }
            Err(e) => debug!("skipping element pair {}: {}", i + 1, e)
        }
    }

    records
}

/* #endregion orbital elements */

/* #region catalog metadata ******************************************************************************/

/// one line of the metadata text, fields in input order. All values come in as strings
/// since the input has no quoting and field-level garbage must not reject the line
#[derive(Deserialize,Debug)]
pub struct RawMetadataRecord {
    pub designator: String,       // international designator
    pub name: String,
    pub catalog_id: String,
    pub country: String,
    pub period_min: String,
    pub inclination_deg: String,
    pub apogee_km: String,
    pub perigee_km: String,
    pub size: String,
    #[serde(default)]
    pub comment: Option<String>,  // unused
    #[serde(default)]
    pub launch_date: Option<String>,
}

/// the cooked representation. Numeric fields that did not parse keep a NaN sentinel,
/// which is mapped to an absent attribute when display features are built
#[derive(Debug,Clone)]
pub struct MetadataRecord {
    pub catalog_id: u32,
    pub designator: String,
    pub name: String,
    pub country: String,
    pub period_min: f64,
    pub inclination_deg: f64,
    pub apogee_km: f64,
    pub perigee_km: f64,
    pub size: String,
    pub launch_date: Option<DateTime<Utc>>,
}

impl TryFrom<&RawMetadataRecord> for MetadataRecord {
    type Error = SatViewOrbitalError;

    fn try_from (raw: &RawMetadataRecord)->Result<MetadataRecord> {
        let catalog_id: u32 = raw.catalog_id.trim().parse().map_err(|_| op_failed!("invalid catalog id {:?}", raw.catalog_id))?;

        Ok(
            MetadataRecord {
                catalog_id,
                designator: raw.designator.clone(),
                name: raw.name.clone(),
                country: raw.country.clone(),
                period_min: parse_f64( &raw.period_min),
                inclination_deg: parse_f64( &raw.inclination_deg),
                apogee_km: parse_f64( &raw.apogee_km),
                perigee_km: parse_f64( &raw.perigee_km),
                size: raw.size.clone(),
                launch_date: raw.launch_date.as_deref().and_then( parse_utc_date),
            }
        )
    }
}

fn parse_f64 (s: &str)->f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

/// parse the metadata text into a catalog_id keyed map. Lines without a numeric catalog
/// id are skipped, later lines win over earlier ones for the same id
pub fn parse_metadata (text: &str)->HashMap<u32,MetadataRecord> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)     // trailing fields are optional
        .quoting(false)     // fields split on literal commas
        .from_reader( text.as_bytes());

    let mut map: HashMap<u32,MetadataRecord> = HashMap::new();

    for res in csv_reader.deserialize::<RawMetadataRecord>() {
        if let Ok(ref raw) = res {
            if let Ok(rec) = MetadataRecord::try_from(raw) {
                map.insert( rec.catalog_id, rec);
            } else {
                debug!("skipping metadata line with invalid catalog id {:?}", raw.catalog_id);
            }
        }
    }

    map
}

/* #endregion catalog metadata */

/* #region catalog ***************************************************************************************/

/// catalog entry: element set plus (optionally) joined metadata
#[derive(Debug,Clone)]
pub struct SatelliteRecord {
    pub orbital: OrbitalRecord,
    pub meta: Option<MetadataRecord>,
}

impl SatelliteRecord {
    /// display attributes for this record. NaN sentinels and empty strings map to absent
    /// attributes so that the serialized feature never carries non-finite numbers
    pub fn attributes (&self)->SatelliteAttributes {
        let mut attrs = SatelliteAttributes::new( self.orbital.object_id, self.orbital.catalog_id);

        if let Some(meta) = &self.meta {
            attrs.name = non_empty( &meta.name);
            attrs.country = non_empty( &meta.country);
            attrs.period = finite_or_none( meta.period_min);
            attrs.inclination = finite_or_none( meta.inclination_deg);
            attrs.apogee = finite_or_none( meta.apogee_km);
            attrs.perigee = finite_or_none( meta.perigee_km);
            attrs.size = non_empty( &meta.size);
            attrs.launch = meta.launch_date;
        }

        attrs
    }
}

fn finite_or_none (v: f64)->Option<f64> {
    if v.is_finite() { Some(v) } else { None }
}

fn non_empty (s: &str)->Option<String> {
    if s.is_empty() { None } else { Some( s.to_string()) }
}

/// the full satellite catalog: element sets joined with metadata, reduced to entries that
/// could be located at the reference instant
#[derive(Debug)]
pub struct SatCatalog {
    ref_time: DateTime<Utc>,
    records: Vec<SatelliteRecord>,
    index: HashMap<u32,usize>,  // catalog_id -> records index
}

impl SatCatalog {
    /// join element sets and metadata into a catalog. The join is a left outer join on
    /// catalog id - element sets without metadata are kept with empty attributes. Element
    /// sets that cannot be located at the reference instant are dropped here so that
    /// downstream display code never sees them
    pub fn from_texts (elements: &str, metadata: &str, ref_time: DateTime<Utc>)->SatCatalog {
        let orbitals = parse_elements( elements);
        let mut meta_map = parse_metadata( metadata);
        let locator = Locator::new( ref_time);

        let mut records: Vec<SatelliteRecord> = Vec::with_capacity( orbitals.len());
        for orbital in orbitals {
            if locator.locate( &orbital, locator.ref_instant()).is_none() {
                debug!("dropping satellite {} - no location at reference time", orbital.catalog_id);
                continue;
            }
            let meta = meta_map.remove( &orbital.catalog_id);
            records.push( SatelliteRecord { orbital, meta });
        }

        let index: HashMap<u32,usize> = records.iter().enumerate().map( |(i,r)| (r.orbital.catalog_id, i)).collect();
        SatCatalog { ref_time, records, index }
    }

    /// retrieve both catalog text resources concurrently and build the catalog with the
    /// current time as reference instant. Failure of either retrieval fails the load
    pub async fn load<S: TextSource + ?Sized> (source: &S)->Result<SatCatalog> {
        let (elements, metadata) = tokio::try_join!( source.get_elements(), source.get_metadata())?;
        Ok( Self::from_texts( &elements, &metadata, datetime::utc_now()) )
    }

    pub fn ref_time (&self)->DateTime<Utc> { self.ref_time }

    pub fn len (&self)->usize { self.records.len() }
    pub fn is_empty (&self)->bool { self.records.is_empty() }

    pub fn records (&self)->&[SatelliteRecord] { &self.records }

    pub fn get (&self, catalog_id: u32)->Option<&SatelliteRecord> {
        self.index.get( &catalog_id).map( |&i| &self.records[i])
    }

    pub fn find_by_object_id (&self, object_id: u32)->Option<&SatelliteRecord> {
        self.records.iter().find( |r| r.orbital.object_id == object_id)
    }
}

/* #endregion catalog */
