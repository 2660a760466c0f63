//! Chart drawing surface.
//!
//! A [`ChartCanvas`] turns a [`PayoffChart`] into a live [`ChartInstance`].
//! Instances hold whatever the surface bound to them and must be released
//! through [`ChartInstance::destroy`]; `ChartSlot` guarantees at most one is
//! alive per slot.
//!
//! [`PayoffChart`]: crate::application::render::chart::PayoffChart

use crate::application::render::chart::PayoffChart;

pub trait ChartInstance {
    fn destroy(self);
}

pub trait ChartCanvas {
    type Instance: ChartInstance;

    fn create(&mut self, chart: &PayoffChart) -> Self::Instance;
}
