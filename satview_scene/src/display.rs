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

/// the seam between the portable core and a concrete scene engine binding. Engine bindings
/// (browser module behind a websocket, embedded view, test recorder) implement SpatialDisplay;
/// the core never talks to an engine API directly

use serde::{Serialize,ser::{Serializer,SerializeStruct}};
use serde_json;

use crate::errors::Result;
use crate::feature::{OrbitTrace, SatelliteFeature};
use crate::filter::FilterPredicate;

/* #region SpatialDisplay ************************************************************************/

/// display operations the viewer core needs. Implementations are free to batch or forward
/// asynchronously but have to preserve call order
pub trait SpatialDisplay {

    /// (re)populate the satellite layer
    fn set_features (&mut self, features: Vec<SatelliteFeature>);

    /// constrain the visible features, answering the number of features that match
    fn apply_filter (&mut self, predicate: &FilterPredicate)->usize;

    /// drop any filter constraint
    fn clear_filter (&mut self);

    fn highlight (&mut self, oid: u32);
    fn clear_highlight (&mut self);

    fn show_orbit (&mut self, orbit: OrbitTrace);
    fn clear_orbit (&mut self);

    /// one-line user facing status (feature counters and the like)
    fn set_status (&mut self, line: &str);
}

/* #endregion SpatialDisplay */

/* #region SceneMsg serialization ****************************************************************/

/// JSON envelope for messages sent to a scene module of a connected display client.
/// Serializes as  {"mod": "<crate>/<js_module>", "<payload_name>": <payload>}
pub struct SceneMsg<T> where T: Serialize {
    pub crate_name: &'static str,
    pub js_module: &'static str,
    pub payload_name: &'static str,
    pub payload: T
}

impl <T> SceneMsg<T> where T: Serialize {
    pub fn new (crate_name: &'static str, js_module: &'static str, payload_name: &'static str, payload: T)->Self {
        SceneMsg {crate_name, js_module, payload_name, payload}
    }

    pub fn to_json (&self)->Result<String> {
        Ok( serde_json::to_string( &self)? )
    }
}

impl <T> Serialize for SceneMsg<T> where T: Serialize {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let js_mod_path = format!("{}/{}", self.crate_name, self.js_module);

        let mut state = serializer.serialize_struct("SceneMsg", 2)?;
        state.serialize_field("mod", &js_mod_path)?;
        state.serialize_field( &self.payload_name, &self.payload)?;
        state.end()
    }
}

#[macro_export]
macro_rules! scene_msg {
    ($js_module:literal, $p:ident) => {
        satview_scene::display::SceneMsg::new( env!("CARGO_PKG_NAME"), $js_module, stringify!($p), $p)
    };

    ($crate_name:literal, $js_module:literal, $p:ident) => {
        satview_scene::display::SceneMsg::new( $crate_name, $js_module, stringify!($p), $p)
    }
}

/* #endregion SceneMsg serialization */

/* #region JsonDisplay ***************************************************************************/

const SCENE_CRATE: &'static str = "satview_scene";
const SCENE_MODULE: &'static str = "scene.js";

/// a headless SpatialDisplay that renders every call into its SceneMsg wire form, in call
/// order. This is what dev tools print and what message level tests assert against. Since
/// there is no query engine behind it the filter match count is the full feature count
#[derive(Debug)]
pub struct JsonDisplay {
    n_features: usize,
    msgs: Vec<String>,
}

impl JsonDisplay {
    pub fn new ()->Self {
        JsonDisplay { n_features: 0, msgs: Vec::new() }
    }

    pub fn messages (&self)->&[String] { &self.msgs }

    pub fn take_messages (&mut self)->Vec<String> {
        std::mem::take( &mut self.msgs)
    }

    fn push<T: Serialize> (&mut self, payload_name: &'static str, payload: T) {
        let msg = SceneMsg::new( SCENE_CRATE, SCENE_MODULE, payload_name, payload);
        match msg.to_json() {
            Ok(json) => self.msgs.push( json),
            Err(e) => tracing::warn!("failed to serialize {} msg: {}", payload_name, e)
        }
    }
}

impl SpatialDisplay for JsonDisplay {
    fn set_features (&mut self, features: Vec<SatelliteFeature>) {
        self.n_features = features.len();
        self.push( "satellites", features);
    }

    fn apply_filter (&mut self, predicate: &FilterPredicate)->usize {
        self.push( "filter", predicate);
        self.n_features
    }

    fn clear_filter (&mut self) {
        self.push( "clearFilter", true);
    }

    fn highlight (&mut self, oid: u32) {
        self.push( "highlight", oid);
    }

    fn clear_highlight (&mut self) {
        self.push( "clearHighlight", true);
    }

    fn show_orbit (&mut self, orbit: OrbitTrace) {
        self.push( "orbit", orbit);
    }

    fn clear_orbit (&mut self) {
        self.push( "clearOrbit", true);
    }

    fn set_status (&mut self, line: &str) {
        self.push( "status", line);
    }
}

/* #endregion JsonDisplay */
