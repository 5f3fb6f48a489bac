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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Serialize,Deserialize,Serializer,Deserializer,de::{Error as DeError}};

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

#[inline]
pub fn epoch_millis ()->i64 {
    let now = Utc::now();
    now.timestamp_millis()
}

#[inline]
pub fn to_epoch_millis<Tz> (date: DateTime<Tz>)->i64 where Tz: TimeZone {
    date.timestamp_millis()
}

pub fn from_epoch_millis(millis: i64)->DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap()
}

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn naive_utc_date_to_utc_datetime (nd: NaiveDate) -> DateTime<Utc> {
    let nt = NaiveTime::from_hms_opt(0, 0, 0).unwrap(); // 00:00:00 can't fail
    let ndt = NaiveDateTime::new(nd,nt);

    DateTime::from_naive_utc_and_offset(ndt,Utc)
}

/// midnight UTC of Jan 1 for the given year (display query time windows are year-granular)
pub fn utc_year_start (year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt( year, 1, 1).map( naive_utc_date_to_utc_datetime)
}

pub fn short_utc_datetime_string (dt: &DateTime<Utc>) -> String {
    format!("{}", dt.format("%Y-%m-%dT%H:%M:%S%Z"))
}

//--- support for serde

pub fn ser_epoch_millis<S: Serializer> (dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_i64(dt.timestamp_millis())
}

pub fn de_from_epoch_millis <'a,D>(deserializer: D) -> Result<DateTime<Utc>,D::Error> where D: Deserializer<'a> {
    let millis: i64 = i64::deserialize(deserializer)?;
    DateTime::from_timestamp_millis(millis).ok_or( DeError::custom("invalid timestamp value"))
}

/// NOTE if the option is None and this should not be serialized as 0 the field has to have a #[serde(skip_serializing_if="Options::is_none")] attribute
pub fn ser_epoch_millis_option<S: Serializer> (opt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>  {
    if let Some(dt) = opt {
        s.serialize_i64(dt.timestamp_millis())
    } else {
        s.serialize_i64(0)
    }
}

//--- misc string format parsing

pub fn parse_datetime (s: &str)->Option<DateTime<Utc>> {
    match DateTime::parse_from_str(s, "%+") {
        Ok(dt) => Some(dt.to_utc()),
        Err(_) => None
    }
}

/// parse a plain "%Y-%m-%d" date as midnight Utc
pub fn parse_utc_date (s: &str)->Option<DateTime<Utc>> {
    NaiveDate::parse_from_str( s.trim(), "%Y-%m-%d").ok().map( naive_utc_date_to_utc_datetime)
}
