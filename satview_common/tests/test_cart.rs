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

use satview_common::{cartesian3::Cartesian3, cartographic::Cartographic};

/// unit tests for cartesian3 and cartographic
/// run with "cargo test test_conversion -- --nocapture"

#[test]
fn test_conversion () {
    let p = Cartesian3::new( -2458250.0, -5262107.0, 4259973.0);
    let c: Cartographic = p.into();

    println!("ecef:  {:?} : {}", p, p.length());
    println!("wgs84: {}", c);

    let q = Cartesian3::from( &c);
    println!("ecef roundtrip: {:?}", q);

    let d = q - p;
    assert!( d.length() < 1e-4); // sub-mm roundtrip
}

#[test]
fn test_degrees_roundtrip () {
    let c = Cartographic::from_degrees( -122.0, 38.0, 420000.0);

    assert!( (c.longitude_deg() - (-122.0)).abs() < 1e-10);
    assert!( (c.latitude_deg() - 38.0).abs() < 1e-10);

    let a = c.to_degrees_array();
    println!("degrees array: {:?}", a);
    assert!( (a[0] - (-122.0)).abs() < 1e-10);
    assert!( (a[1] - 38.0).abs() < 1e-10);
    assert!( a[2] == 420000.0);
}

#[test]
fn test_finiteness () {
    assert!( Cartesian3::new( 1.0, 2.0, 3.0).is_finite());
    assert!( Cartesian3::zero().is_finite());

    assert!( !Cartesian3::new( f64::NAN, 2.0, 3.0).is_finite());
    assert!( !Cartesian3::new( 1.0, f64::NAN, 3.0).is_finite());
    assert!( !Cartesian3::new( 1.0, 2.0, f64::NAN).is_finite());
    assert!( !Cartesian3::new( f64::INFINITY, 2.0, 3.0).is_finite());
}

#[test]
fn test_equator_prime_meridian () {
    // on the equator at the prime meridian the ECEF x axis pierces the ellipsoid
    let c = Cartographic::from_degrees( 0.0, 0.0, 0.0);
    let p = Cartesian3::from( &c);

    println!("equator/prime meridian: {:?}", p);
    assert!( (p.x - 6378137.0).abs() < 1e-6);
    assert!( p.y.abs() < 1e-6);
    assert!( p.z.abs() < 1e-6);
}
