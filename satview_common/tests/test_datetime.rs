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

use chrono::{Datelike,TimeZone,Timelike,Utc};
use satview_common::datetime::{parse_datetime, parse_utc_date, utc_year_start};

#[test]
fn test_year_start () {
    let dt = utc_year_start(1998).unwrap();
    println!("1998 starts at {}", dt);

    assert_eq!( dt, Utc.with_ymd_and_hms( 1998, 1, 1, 0, 0, 0).unwrap());
    assert_eq!( dt.timestamp_millis(), 883612800000);

    assert!( utc_year_start( 2025).is_some());
    assert!( utc_year_start( i32::MAX).is_none()); // outside chrono date range
}

#[test]
fn test_parse_utc_date () {
    let dt = parse_utc_date("1998-11-20").unwrap();
    println!("parsed launch date {}", dt);

    assert_eq!( (dt.year(), dt.month(), dt.day()), (1998, 11, 20));
    assert_eq!( (dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    assert_eq!( dt.timestamp_millis(), 911520000000);

    assert_eq!( parse_utc_date(" 2022-11-10 "), parse_utc_date("2022-11-10")); // whitespace tolerant

    assert!( parse_utc_date("").is_none());
    assert!( parse_utc_date("not a date").is_none());
    assert!( parse_utc_date("1998-13-40").is_none());
}

#[test]
fn test_parse_datetime () {
    let dt = parse_datetime("2025-03-17T22:16:50Z").unwrap();
    println!("parsed datetime {}", dt);
    assert_eq!( (dt.year(), dt.month(), dt.day(), dt.hour()), (2025, 3, 17, 22));

    assert!( parse_datetime("2025-03-17").is_none()); // date only is not a datetime spec
}
