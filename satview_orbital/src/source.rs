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

use std::path::{Path,PathBuf};
use async_trait::async_trait;
use reqwest::Client;
use crate::config::SatViewConfig;
use crate::errors::{op_failed, Result, SatViewOrbitalError};

/// a trait to obtain the two catalog text resources (element sets and metadata lines)
/// from wherever they live. Retrieval failure of either resource is a hard error - the
/// catalog is only built from a complete pair
#[async_trait]
pub trait TextSource {
    async fn get_elements (&self)->Result<String>;
    async fn get_metadata (&self)->Result<String>;
}

/* #region filesystem source *****************************************************************************/

pub struct FileSource {
    elements: PathBuf,
    metadata: PathBuf,
}

impl FileSource {
    pub fn new (elements: impl AsRef<Path>, metadata: impl AsRef<Path>)->Self {
        FileSource { elements: elements.as_ref().to_path_buf(), metadata: metadata.as_ref().to_path_buf() }
    }
}

#[async_trait]
impl TextSource for FileSource {
    async fn get_elements (&self)->Result<String> {
        Ok( tokio::fs::read_to_string( &self.elements).await? )
    }

    async fn get_metadata (&self)->Result<String> {
        Ok( tokio::fs::read_to_string( &self.metadata).await? )
    }
}

/* #endregion filesystem source */

/* #region http source ***********************************************************************************/

pub struct HttpSource {
    client: Client,
    elements: String,
    metadata: String,
}

impl HttpSource {
    pub fn new (elements: impl ToString, metadata: impl ToString)->Self {
        HttpSource { client: Client::new(), elements: elements.to_string(), metadata: metadata.to_string() }
    }

    async fn get_text (&self, url: &str)->Result<String> {
        let response = self.client.get( url).send().await?;
        if response.status().is_success() {
            Ok( response.text().await? )
        } else {
            Err( op_failed!("error retrieving {}: {}", url, response.status()))
        }
    }
}

#[async_trait]
impl TextSource for HttpSource {
    async fn get_elements (&self)->Result<String> {
        self.get_text( &self.elements).await
    }

    async fn get_metadata (&self)->Result<String> {
        self.get_text( &self.metadata).await
    }
}

/* #endregion http source */

/* #region static source *********************************************************************************/

/// in-memory source for embedded snapshots and tests
pub struct StaticSource {
    elements: String,
    metadata: String,
}

impl StaticSource {
    pub fn new (elements: impl ToString, metadata: impl ToString)->Self {
        StaticSource { elements: elements.to_string(), metadata: metadata.to_string() }
    }
}

#[async_trait]
impl TextSource for StaticSource {
    async fn get_elements (&self)->Result<String> {
        Ok( self.elements.clone() )
    }

    async fn get_metadata (&self)->Result<String> {
        Ok( self.metadata.clone() )
    }
}

/* #endregion static source */

fn is_url (spec: &str)->bool {
    spec.starts_with("http://") || spec.starts_with("https://")
}

/// pick a source implementation from the configured resource locations
pub fn open_source (config: &SatViewConfig)->Box<dyn TextSource + Send + Sync> {
    if is_url( &config.elements) || is_url( &config.metadata) {
        Box::new( HttpSource::new( &config.elements, &config.metadata))
    } else {
        Box::new( FileSource::new( &config.elements, &config.metadata))
    }
}
