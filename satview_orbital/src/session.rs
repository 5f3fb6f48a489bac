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

use std::{cell::Cell, rc::Rc};
use tracing::{debug,info};
use satview_scene::{
    display::SpatialDisplay,
    feature::{OrbitTrace,SatelliteFeature},
    filter::{FilterOutcome,FilterSelection},
};
use crate::catalog::SatCatalog;
use crate::ephemeris::Locator;
use crate::errors::{op_failed, Result, SatViewOrbitalError};
use crate::source::TextSource;

/* #region pause guard ***********************************************************************************/

/// scoped suspension of selection event processing. Guards nest - the session stays
/// paused until the last guard drops, and dropping is also how panics release the pause
pub struct PauseGuard {
    count: Rc<Cell<u32>>,
}

impl PauseGuard {
    fn new (count: &Rc<Cell<u32>>)->Self {
        count.set( count.get() + 1);
        PauseGuard { count: Rc::clone(count) }
    }
}

impl Drop for PauseGuard {
    fn drop (&mut self) {
        self.count.set( self.count.get().saturating_sub(1));
    }
}

/* #endregion pause guard */

/// one loaded catalog wired to one spatial display: owns the current filter facet state,
/// the selected satellite and the pause flag, and drives the display through its trait
pub struct ViewerSession<D: SpatialDisplay> {
    catalog: SatCatalog,
    locator: Locator,
    display: D,
    selection: FilterSelection,
    n_loaded: usize,
    selected: Option<u32>,  // object id of the satellite with highlight and orbit trace
    pause_count: Rc<Cell<u32>>,
}

impl <D: SpatialDisplay> ViewerSession<D> {

    /// populate the display from the catalog and report the initial feature count
    pub fn new (catalog: SatCatalog, mut display: D)->Self {
        let locator = Locator::new( catalog.ref_time());

        let features: Vec<SatelliteFeature> = catalog.records().iter().filter_map( |rec| {
            locator.locate( &rec.orbital, locator.ref_instant())
                .map( |pos| SatelliteFeature::new( &pos, rec.attributes()))
        }).collect();

        let n_loaded = features.len();
        display.set_features( features);
        display.set_status( &format!("{} Satellites Loaded", n_loaded));
        info!("display populated with {} satellites", n_loaded);

        ViewerSession {
            catalog, locator, display,
            selection: FilterSelection::unconstrained(),
            n_loaded,
            selected: None,
            pause_count: Rc::new( Cell::new(0)),
        }
    }

    /// retrieve the catalog texts and start a session on them
    pub async fn load<S: TextSource + ?Sized> (source: &S, display: D)->Result<Self> {
        let catalog = SatCatalog::load( source).await?;
        Ok( Self::new( catalog, display) )
    }

    /* #region filter facet events ***********************************************************************/

    /// facet change entry point. Events arriving while the session is paused are dropped
    /// (widget resets replay as change events and must not re-enter here)
    pub fn update_filter (&mut self, selection: FilterSelection)->Result<()> {
        if self.is_paused() { return Ok(()) }
        self.selection = selection;

        match self.selection.build()? {
            FilterOutcome::Universal => {
                self.display.clear_filter();
                self.display.set_status( &format!("{} Satellites Loaded", self.n_loaded));
            }
            FilterOutcome::Constrained(predicate) => {
                let n_found = self.display.apply_filter( &predicate);
                self.display.set_status( &format!("{} of {} Satellites Found", n_found, self.n_loaded));
            }
        }

        Ok(())
    }

    /// clear all facets and restore the unfiltered display
    pub fn reset (&mut self) {
        self.clear_selection();
        {
            let _guard = self.pause_events();
            self.selection = FilterSelection::unconstrained();
        }
        self.display.clear_filter();
        self.display.set_status( &format!("{} Satellites Loaded", self.n_loaded));
    }

    /* #endregion filter facet events */

    /* #region satellite selection ***********************************************************************/

    /// highlight a satellite and show one sampled revolution for it
    pub fn select (&mut self, object_id: u32)->Result<()> {
        let rec = self.catalog.find_by_object_id( object_id)
            .ok_or( op_failed!("unknown object id {}", object_id))?;

        let points = self.locator.sample_orbit( rec)?;

        self.display.clear_orbit();
        self.display.highlight( object_id);
        self.display.show_orbit( OrbitTrace::new( object_id, &points));
        self.selected = Some(object_id);

        Ok(())
    }

    pub fn clear_selection (&mut self) {
        if self.selected.take().is_some() {
            self.display.clear_highlight();
            self.display.clear_orbit();
        }
    }

    /* #endregion satellite selection */

    /* #region event pausing *****************************************************************************/

    /// suspend facet event processing for the lifetime of the returned guard
    pub fn pause_events (&self)->PauseGuard {
        PauseGuard::new( &self.pause_count)
    }

    pub fn is_paused (&self)->bool {
        self.pause_count.get() > 0
    }

    /* #endregion event pausing */

    /* #region accessors *********************************************************************************/

    pub fn catalog (&self)->&SatCatalog { &self.catalog }
    pub fn selection (&self)->&FilterSelection { &self.selection }
    pub fn n_loaded (&self)->usize { self.n_loaded }
    pub fn selected (&self)->Option<u32> { self.selected }

    pub fn display (&self)->&D { &self.display }
    pub fn display_mut (&mut self)->&mut D { &mut self.display }

    /* #endregion accessors */
}
