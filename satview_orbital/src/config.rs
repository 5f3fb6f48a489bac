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

use std::path::Path;
use serde::{Deserialize,Serialize};
use crate::errors::{config_error, Result, SatViewOrbitalError};

/// where to get the catalog text resources from. Both entries are either filesystem paths
/// or http(s) URLs - see [`crate::source::open_source`]
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct SatViewConfig {
    pub elements: String,   // two-line element sets, 2 lines per satellite
    pub metadata: String,   // comma separated catalog metadata, 1 line per satellite
}

impl Default for SatViewConfig {
    fn default()->Self {
        SatViewConfig {
            elements: "data/tle.20200714.txt".to_string(),
            metadata: "data/oio.20200714.txt".to_string(),
        }
    }
}

pub fn load_config <C:serde::de::DeserializeOwned> (pathname: impl AsRef<Path>)->Result<C> {
    let path = pathname.as_ref();
    if path.is_file() {
        let contents = std::fs::read_to_string(path)?;
        ron::from_str::<C>(contents.as_str()).map_err(|e| config_error!("failed to parse {:?}: {:?}", path, e))
    } else {
        Err( config_error!("config file not found {:?}", path))
    }
}
