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
use satview_scene::scene_msg;
use satview_scene::display::{JsonDisplay, SceneMsg, SpatialDisplay};
use satview_scene::feature::{OrbitTrace, SatelliteAttributes, SatelliteFeature};
use satview_scene::filter::{FilterPredicate};

#[test]
fn test_scene_msg () {
    let msg = SceneMsg::new( "satview_scene", "scene.js", "highlight", 42u32);
    let json = msg.to_json().unwrap();
    println!("-- serialized SceneMsg: {json}");
    assert_eq!( json, r#"{"mod":"satview_scene/scene.js","highlight":42}"#);

    let status = "1234 Satellites Loaded";
    let msg = scene_msg!( "scene.js", status);
    let json = msg.to_json().unwrap();
    println!("-- serialized SceneMsg from macro: {json}");
    assert_eq!( json, r#"{"mod":"satview_scene/scene.js","status":"1234 Satellites Loaded"}"#);
}

#[test]
fn test_feature_json () {
    let mut attrs = SatelliteAttributes::new( 1, 25544);
    attrs.name = Some( "ISS (ZARYA)".to_string());
    attrs.country = Some( "US".to_string());
    attrs.period = Some( 92.8);
    attrs.size = Some( "LARGE".to_string());
    attrs.launch = Some( Utc.with_ymd_and_hms( 1998, 11, 20, 0, 0, 0).unwrap());

    let feature = SatelliteFeature { position: [-122.0, 38.0, 420000.0], attributes: attrs };
    let json = serde_json::to_string( &feature).unwrap();
    println!("-- serialized feature: {json}");

    assert_eq!( json, concat!(
        r#"{"position":[-122.0,38.0,420000.0],"#,
        r#""attributes":{"oid":1,"norad":25544,"name":"ISS (ZARYA)","country":"US","#,
        r#""period":92.8,"size":"LARGE","launch":911520000000}}"#
    ));
}

#[test]
fn test_bare_attributes_json () {
    let attrs = SatelliteAttributes::new( 7, 54234); // element set without catalog metadata
    let json = serde_json::to_string( &attrs).unwrap();
    println!("-- serialized bare attributes: {json}");
    assert_eq!( json, r#"{"oid":7,"norad":54234}"#);
}

#[test]
fn test_json_display () {
    let mut display = JsonDisplay::new();

    display.set_features( Vec::new());
    display.set_status( "0 Satellites Loaded");
    let n = display.apply_filter( &FilterPredicate { where_clause: "country='US'".to_string(), time_window: None });
    display.clear_filter();
    display.highlight( 3);
    display.show_orbit( OrbitTrace { oid: 3, path: vec![[0.0, 0.0, 400000.0]] });
    display.clear_orbit();
    display.clear_highlight();

    assert_eq!( n, 0); // no features set, nothing to match

    let msgs = display.take_messages();
    for m in &msgs { println!("{m}"); }

    assert_eq!( msgs, vec![
        r#"{"mod":"satview_scene/scene.js","satellites":[]}"#,
        r#"{"mod":"satview_scene/scene.js","status":"0 Satellites Loaded"}"#,
        r#"{"mod":"satview_scene/scene.js","filter":{"whereClause":"country='US'"}}"#,
        r#"{"mod":"satview_scene/scene.js","clearFilter":true}"#,
        r#"{"mod":"satview_scene/scene.js","highlight":3}"#,
        r#"{"mod":"satview_scene/scene.js","orbit":{"oid":3,"path":[[0.0,0.0,400000.0]]}}"#,
        r#"{"mod":"satview_scene/scene.js","clearOrbit":true}"#,
        r#"{"mod":"satview_scene/scene.js","clearHighlight":true}"#,
    ]);

    assert!( display.messages().is_empty()); // take_messages drains
}
