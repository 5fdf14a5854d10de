//! Step and Direction Controller (SDC) family.

use std::ops::Deref;

use crate::axis::Axis;
use crate::controller::Controller;
use crate::error::SmaractResult;
use crate::transport::Transport;

/// SmarAct Step and Direction Controller.
///
/// The SDC speaks the common command set only; the type exists so SDC
/// and MCS devices stay distinct at the API level. All base commands are
/// available through deref to [`Controller`].
pub struct SdcController {
    inner: Controller,
}

impl SdcController {
    pub fn new(axes: Vec<Axis>, transport: Box<dyn Transport>) -> SmaractResult<Self> {
        Ok(Self {
            inner: Controller::new(axes, transport)?,
        })
    }

    /// Single-axis convenience constructor; the SDC drives one channel.
    pub fn with_axis(axis: Axis, transport: Box<dyn Transport>) -> SmaractResult<Self> {
        Ok(Self {
            inner: Controller::with_axis(axis, transport)?,
        })
    }
}

impl Deref for SdcController {
    type Target = Controller;

    fn deref(&self) -> &Controller {
        &self.inner
    }
}
