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
use tokio;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use satview_common::datetime::short_utc_datetime_string;
use satview_orbital::{catalog::SatCatalog, config::{load_config,SatViewConfig}, source::open_source};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "load the satellite catalog and print a summary")]
pub struct Args {
    /// RON config with the catalog resource locations
    #[arg(short,long, default_value = "configs/satview.ron")]
    pub config: String,

    /// override the configured element set location
    #[arg(long)]
    pub elements: Option<String>,

    /// override the configured metadata location
    #[arg(long)]
    pub metadata: Option<String>,

    /// list every catalog record
    #[arg(short,long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let args = Args::parse();

    let mut config: SatViewConfig = if Path::new(&args.config).is_file() {
        load_config( &args.config)?
    } else {
        SatViewConfig::default()
    };
    if let Some(elements) = args.elements { config.elements = elements }
    if let Some(metadata) = args.metadata { config.metadata = metadata }

    let source = open_source( &config);
    let catalog = SatCatalog::load( source.as_ref()).await?;

    println!("{} satellites loaded at {}", catalog.len(), short_utc_datetime_string( &catalog.ref_time()));

    if args.verbose {
        for rec in catalog.records() {
            let name = rec.meta.as_ref().map( |m| m.name.as_str()).unwrap_or("-");
            println!("{:6} {:6} {}", rec.orbital.object_id, rec.orbital.catalog_id, name);
        }
    }

    Ok(())
}
