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
use anyhow::{anyhow,Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use satview_common::datetime::{parse_datetime,short_utc_datetime_string,utc_now};
use satview_orbital::{catalog::SatCatalog, config::{load_config,SatViewConfig}, ephemeris::Locator, source::open_source};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "print one sampled revolution for a catalog satellite")]
pub struct Args {
    /// RON config with the catalog resource locations
    #[arg(short,long, default_value = "configs/satview.ron")]
    pub config: String,

    /// reference datetime spec (default is now)
    #[arg(short,long)]
    pub date: Option<String>,

    /// NORAD catalog number of the satellite to sample
    pub satellite: u32,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let args = Args::parse();

    let config: SatViewConfig = if Path::new(&args.config).is_file() {
        load_config( &args.config)?
    } else {
        SatViewConfig::default()
    };

    let ref_time = match &args.date {
        Some(ds) => parse_datetime(ds).ok_or( anyhow!("invalid datetime spec {}", ds))?,
        None => utc_now()
    };

    let source = open_source( &config);
    let (elements, metadata) = tokio::try_join!( source.get_elements(), source.get_metadata())?;
    let catalog = SatCatalog::from_texts( &elements, &metadata, ref_time);

    let rec = catalog.get( args.satellite).ok_or( anyhow!("satellite {} not in catalog", args.satellite))?;
    if let Some(meta) = &rec.meta {
        println!("{} ({}) of {}", meta.name, rec.orbital.catalog_id, meta.country);
    }

    let locator = Locator::new( catalog.ref_time());
    let points = locator.sample_orbit( rec)?;

    println!("revolution from {} with {} points:", short_utc_datetime_string( &catalog.ref_time()), points.len());
    for (i,p) in points.iter().enumerate() {
        println!("{:3}: {}", i, p);
    }

    Ok(())
}
