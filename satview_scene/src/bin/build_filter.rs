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

use std::str::FromStr;
use anyhow::{anyhow,Result};
use clap::Parser;
use satview_scene::filter::{
    Category, FilterOutcome, FilterSelection, RangeSelection, SizeClass,
    BUCKET_BOUNDS, INCLINATION_BOUNDS, LAUNCH_YEAR_BOUNDS
};
use satview_scene::display::SceneMsg;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "translate filter facet values into a display query")]
pub struct Args {
    /// country code ('US', 'PRC', ...)
    #[arg(long)]
    pub country: Option<String>,

    /// object category (all|junk|active)
    #[arg(long, default_value = "all")]
    pub category: String,

    /// RCS size class (SMALL|MEDIUM|LARGE)
    #[arg(long)]
    pub size: Option<String>,

    /// launch year range
    #[arg(long, num_args=2, value_names=["FROM","TO"])]
    pub launch: Option<Vec<i64>>,

    /// period slider bucket range (0..5)
    #[arg(long, num_args=2, value_names=["FROM","TO"])]
    pub period: Option<Vec<i64>>,

    /// inclination range in degrees (0..160)
    #[arg(long, num_args=2, value_names=["FROM","TO"])]
    pub inclination: Option<Vec<i64>>,

    /// apogee slider bucket range (0..5)
    #[arg(long, num_args=2, value_names=["FROM","TO"])]
    pub apogee: Option<Vec<i64>>,

    /// perigee slider bucket range (0..5)
    #[arg(long, num_args=2, value_names=["FROM","TO"])]
    pub perigee: Option<Vec<i64>>,
}

fn range_arg (arg: &Option<Vec<i64>>, bounds: (i64,i64))->RangeSelection {
    match arg {
        Some(vs) => RangeSelection::new( vs[0], vs[1]),
        None => RangeSelection::full( bounds)
    }
}

fn main()->Result<()> {
    let args = Args::parse();

    let category = Category::from_str( &args.category)
        .map_err( |_| anyhow!("not a category: {}", args.category))?;
    let size = match &args.size {
        Some(s) => Some( SizeClass::from_str(s).map_err( |_| anyhow!("not a size class: {s}"))? ),
        None => None
    };

    let selection = FilterSelection {
        country: args.country.clone(),
        category,
        size,
        launch: range_arg( &args.launch, LAUNCH_YEAR_BOUNDS),
        period: range_arg( &args.period, BUCKET_BOUNDS),
        inclination: range_arg( &args.inclination, INCLINATION_BOUNDS),
        apogee: range_arg( &args.apogee, BUCKET_BOUNDS),
        perigee: range_arg( &args.perigee, BUCKET_BOUNDS),
    };

    match selection.build()? {
        FilterOutcome::Universal => {
            println!("selection is unconstrained - display should clear its filter");
        }
        FilterOutcome::Constrained(filter) => {
            println!("where clause:  {}", filter.where_clause);
            if let Some(tw) = &filter.time_window {
                println!("time window:   {} .. {}", tw.start, tw.end);
            }
            let msg = SceneMsg::new( "satview_scene", "scene.js", "filter", &filter);
            println!("wire message:  {}", msg.to_json()?);
        }
    }

    Ok(())
}
