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

use chrono::{TimeZone,Utc};
use satview_orbital::catalog::{parse_element_pair, parse_elements, parse_metadata, SatCatalog};
use satview_orbital::source::{FileSource, StaticSource};

/* #region test-data *****************************************************************************/

// NOAA-21, epoch 2025-03-17
const NOAA_1: &'static str = "1 54234U 22150A   25076.92835707  .00000366  00000-0  19403-3 0  9994";
const NOAA_2: &'static str = "2 54234  98.7204  17.0432 0002710  72.7407 287.4066 14.19556514121811";

// NOAA-21 again, earlier epoch of the same day
const NOAA_OLD_1: &'static str = "1 54234U 22150A   25076.57593612  .00000324  00000-0  17437-3 0  9990";
const NOAA_OLD_2: &'static str = "2 54234  98.7204  16.6962 0002723  73.3399 286.8075 14.19555996121765";

// ISS, epoch 2019-06-05
const ISS_1: &'static str = "1 25544U 98067A   19156.50900463  .00003075  00000-0  59442-4 0  9992";
const ISS_2: &'static str = "2 25544  51.6433  59.2583 0008217  16.4440 347.6745 15.51227964173550";

const ISS_META: &'static str  = "1998-067A,ISS (ZARYA),25544,US,92.8,51.6,422,416,LARGE,,1998-11-20";
const NOAA_META: &'static str = "2022-150A,NOAA 21,54234,US,101.44,98.72,829,824,LARGE,,2022-11-10";

/* #endregion test-data */

#[test]
fn test_parse_element_pair () {
    let tle = parse_element_pair( ISS_1, ISS_2).unwrap();
    println!("-- parsed element pair for sat {}", tle.sat_num);
    assert_eq!( tle.sat_num as u32, 25544);

    assert!( parse_element_pair( "not an element line", "neither is this").is_err());
}

#[test]
fn test_parse_elements_skips_bad_pairs () {
    let text = format!("{NOAA_1}\n{NOAA_2}\n\n\nnot an element line\nneither is this\n{ISS_1}\n{ISS_2}");
    let records = parse_elements( &text);
    for rec in &records { println!("-- oid {} catalog id {}", rec.object_id, rec.catalog_id); }

    assert_eq!( records.len(), 2);

    assert_eq!( records[0].catalog_id, 54234);
    assert_eq!( records[0].object_id, 1);

    // skipped pairs leave object id gaps
    assert_eq!( records[1].catalog_id, 25544);
    assert_eq!( records[1].object_id, 4);
}

#[test]
fn test_parse_elements_dedup () {
    let text = format!("{NOAA_1}\n{NOAA_2}\n{NOAA_OLD_1}\n{NOAA_OLD_2}");
    let records = parse_elements( &text);

    assert_eq!( records.len(), 1); // first occurrence wins
    assert_eq!( records[0].catalog_id, 54234);
    assert_eq!( records[0].object_id, 1);
}

#[test]
fn test_parse_metadata () {
    let text = format!("{ISS_META}\n{NOAA_META}");
    let map = parse_metadata( &text);
    assert_eq!( map.len(), 2);

    let rec = map.get( &25544).unwrap();
    println!("-- metadata for 25544: {rec:?}");
    assert_eq!( rec.designator, "1998-067A");
    assert_eq!( rec.name, "ISS (ZARYA)");
    assert_eq!( rec.country, "US");
    assert_eq!( rec.period_min, 92.8);
    assert_eq!( rec.inclination_deg, 51.6);
    assert_eq!( rec.apogee_km, 422.0);
    assert_eq!( rec.perigee_km, 416.0);
    assert_eq!( rec.size, "LARGE");
    assert_eq!( rec.launch_date.unwrap(), Utc.with_ymd_and_hms( 1998, 11, 20, 0, 0, 0).unwrap());
}

#[test]
fn test_metadata_sentinels () {
    // unusable values are kept as sentinels, not line rejections
    let text = "1998-067A,ISS (ZARYA),25544,US,n/a,,422,416,LARGE,,bad-date";
    let map = parse_metadata( text);

    let rec = map.get( &25544).unwrap();
    println!("-- metadata with sentinels: {rec:?}");
    assert!( rec.period_min.is_nan());
    assert!( rec.inclination_deg.is_nan());
    assert_eq!( rec.apogee_km, 422.0);
    assert!( rec.launch_date.is_none());
}

#[test]
fn test_metadata_bad_lines () {
    // lines without a numeric catalog id are dropped, later lines win for the same id
    let text = format!("2022-150A,NOAA 21,no-id,US,101.44,98.72,829,824,LARGE\n{ISS_META}\n1998-067A,ZARYA,25544,US,92.8,51.6,422,416,LARGE");
    let map = parse_metadata( &text);

    assert_eq!( map.len(), 1);
    assert_eq!( map.get( &25544).unwrap().name, "ZARYA");
}

#[test]
fn test_catalog_join () {
    let elements = format!("{NOAA_1}\n{NOAA_2}");
    let metadata = format!("{NOAA_META}\n{ISS_META}");
    let ref_time = Utc.with_ymd_and_hms( 2025, 3, 17, 22, 16, 50).unwrap();

    let cat = SatCatalog::from_texts( &elements, &metadata, ref_time);
    assert_eq!( cat.len(), 1);
    assert_eq!( cat.ref_time(), ref_time);

    let rec = cat.get( 54234).unwrap();
    let meta = rec.meta.as_ref().unwrap();
    assert_eq!( meta.name, "NOAA 21");

    let attrs = rec.attributes();
    println!("-- joined attributes: {attrs:?}");
    assert_eq!( attrs.oid, 1);
    assert_eq!( attrs.norad, 54234);
    assert_eq!( attrs.name.as_deref(), Some("NOAA 21"));
    assert_eq!( attrs.period, Some(101.44));
    assert_eq!( attrs.launch.unwrap(), Utc.with_ymd_and_hms( 2022, 11, 10, 0, 0, 0).unwrap());

    // metadata without a matching element set never becomes a record
    assert!( cat.get( 25544).is_none());
    assert!( cat.find_by_object_id( 1).is_some());
    assert!( cat.find_by_object_id( 2).is_none());
}

#[test]
fn test_catalog_without_metadata () {
    let elements = format!("{ISS_1}\n{ISS_2}");
    let ref_time = Utc.with_ymd_and_hms( 2019, 6, 5, 12, 0, 0).unwrap();

    let cat = SatCatalog::from_texts( &elements, "", ref_time);
    assert_eq!( cat.len(), 1);

    let rec = cat.get( 25544).unwrap();
    assert!( rec.meta.is_none());

    let attrs = rec.attributes();
    println!("-- bare attributes: {attrs:?}");
    assert_eq!( attrs.oid, 1);
    assert_eq!( attrs.norad, 25544);
    assert!( attrs.name.is_none());
    assert!( attrs.period.is_none());
}

#[tokio::test]
async fn test_static_source_load () {
    let source = StaticSource::new( format!("{NOAA_1}\n{NOAA_2}"), NOAA_META);
    let cat = SatCatalog::load( &source).await.unwrap();

    println!("-- loaded catalog with {} records at {}", cat.len(), cat.ref_time());
    assert_eq!( cat.len(), 1);
    assert_eq!( cat.get( 54234).unwrap().attributes().name.as_deref(), Some("NOAA 21"));
}

#[tokio::test]
async fn test_file_source_missing () {
    let source = FileSource::new( "no/such/elements.txt", "no/such/metadata.txt");
    let res = SatCatalog::load( &source).await;

    println!("-- load from missing files: {:?}", res.as_ref().err());
    assert!( res.is_err());
}
