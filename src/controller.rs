//! Base controller: axis ownership plus the command set shared by every
//! SmarAct controller family.

use std::sync::Arc;

use crate::axis::Axis;
use crate::error::{SmaractError, SmaractResult};
use crate::link::CommLink;
use crate::transport::Transport;

/// Base SmarAct controller.
///
/// Owns a fixed, ordered sequence of [`Axis`] channels and the shared
/// [`CommLink`] dispatcher. Channel ids equal the axis position in the
/// sequence and never change after construction; the axis set itself is
/// fixed as well (no add/remove).
///
/// The model-specific types [`SdcController`](crate::SdcController) and
/// [`McsController`](crate::McsController) deref to this base and only
/// add commands on top of it.
pub struct Controller {
    link: Arc<CommLink>,
    axes: Vec<Axis>,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("axes", &self.axes)
            .finish_non_exhaustive()
    }
}

impl Controller {
    /// Build a controller owning `axes`, in order, over `transport`.
    ///
    /// Every supplied axis must be freshly created and unclaimed; an axis
    /// already bound to a controller fails the whole construction with
    /// [`SmaractError::Construction`] before any channel id is assigned,
    /// so no partial state is observable.
    pub fn new(axes: Vec<Axis>, transport: Box<dyn Transport>) -> SmaractResult<Self> {
        if let Some(pos) = axes.iter().position(|a| !a.is_unclaimed()) {
            return Err(SmaractError::Construction(format!(
                "axis at position {pos} is already bound to a controller"
            )));
        }
        let link = Arc::new(CommLink::new(transport));
        let mut axes = axes;
        for (id, axis) in axes.iter_mut().enumerate() {
            axis.attach(id, &link);
        }
        Ok(Self { link, axes })
    }

    /// Single-axis convenience constructor.
    pub fn with_axis(axis: Axis, transport: Box<dyn Transport>) -> SmaractResult<Self> {
        Self::new(vec![axis], transport)
    }

    /// Shared dispatcher used by this controller and its axes.
    pub fn link(&self) -> &Arc<CommLink> {
        &self.link
    }

    /// Owned axes, in channel order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axis bound to `channel`, if the channel exists.
    pub fn axis(&self, channel: usize) -> Option<&Axis> {
        self.axes.get(channel)
    }

    /// Number of axes owned by this controller.
    pub fn naxes(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Send a raw command through the dispatcher.
    ///
    /// Prefer the typed command methods; this is the escape hatch for
    /// commands not exposed by the API.
    pub fn send_cmd(&self, cmd: &str) -> SmaractResult<String> {
        self.link.send_cmd(cmd)
    }

    // 3.1 - Initialization commands
    // ------------------------------------------------------------------

    /// Interface version of the system, as `"Version: a.b.c"`.
    pub fn get_version(&self) -> SmaractResult<String> {
        let reply = self.send_cmd("GIV")?;
        let components = reply.get(2..).ok_or_else(|| {
            SmaractError::Parse(format!("version reply too short: {reply:?}"))
        })?;
        Ok(format!(
            "Version: {}",
            components.split(',').collect::<Vec<_>>().join(".")
        ))
    }

    /// Number of channels the controller is configured with. This is not
    /// the number of currently connected positioners or end effectors.
    pub fn get_nchannels(&self) -> SmaractResult<usize> {
        let reply = self.send_cmd("GNC")?;
        let digits = reply.get(1..).unwrap_or("");
        digits.parse().map_err(|_| {
            SmaractError::Parse(format!("channel count reply not numeric: {reply:?}"))
        })
    }

    /// Unique system identifier, returned verbatim.
    pub fn get_id(&self) -> SmaractResult<String> {
        self.send_cmd("GSI")
    }
}
