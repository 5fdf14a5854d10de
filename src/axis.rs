//! Addressable channel unit owned by a controller.

use std::sync::{Arc, Weak};

use crate::error::{SmaractError, SmaractResult};
use crate::link::CommLink;

/// One positioner channel.
///
/// An axis is created detached, before its controller exists, and is
/// claimed at controller construction: the controller assigns the channel
/// id (the axis position in its sequence, zero-based) and a non-owning
/// back-reference to the shared command link. The back-reference never
/// keeps the controller alive; once the controller is dropped it stops
/// resolving and axis commands fail with [`SmaractError::Detached`].
#[derive(Debug, Default)]
pub struct Axis {
    id: Option<usize>,
    link: Weak<CommLink>,
}

impl Axis {
    /// Create a detached axis, ready to be handed to a controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel id assigned by the owning controller, `None` while
    /// detached.
    pub fn id(&self) -> Option<usize> {
        self.id
    }

    /// Whether the back-reference still resolves to a live controller.
    pub fn is_attached(&self) -> bool {
        self.link.strong_count() > 0
    }

    /// Shared command link of the owning controller, or `None` once the
    /// controller has been dropped.
    pub fn link(&self) -> Option<Arc<CommLink>> {
        self.link.upgrade()
    }

    /// Send a command through the owning controller's dispatcher.
    ///
    /// This is how axis-level commands reach the shared transport.
    pub fn send_cmd(&self, cmd: &str) -> SmaractResult<String> {
        let link = self.link.upgrade().ok_or(SmaractError::Detached)?;
        link.send_cmd(cmd)
    }

    /// True while the axis has never been claimed by a controller.
    pub(crate) fn is_unclaimed(&self) -> bool {
        self.id.is_none()
    }

    pub(crate) fn attach(&mut self, id: usize, link: &Arc<CommLink>) {
        self.id = Some(id);
        self.link = Arc::downgrade(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[test]
    fn test_new_axis_is_detached() {
        let axis = Axis::new();
        assert_eq!(axis.id(), None);
        assert!(!axis.is_attached());
        assert!(axis.link().is_none());
        assert!(matches!(axis.send_cmd("GSI"), Err(SmaractError::Detached)));
    }

    #[test]
    fn test_attach_sets_id_and_link() {
        let link = Arc::new(CommLink::new(Box::new(MockTransport::with_fixed_reply(
            "N1",
        ))));
        let mut axis = Axis::new();
        axis.attach(3, &link);
        assert_eq!(axis.id(), Some(3));
        assert!(axis.is_attached());
        assert!(Arc::ptr_eq(&axis.link().unwrap(), &link));
        assert_eq!(axis.send_cmd("GNC").unwrap(), "N1");
    }

    #[test]
    fn test_link_does_not_outlive_controller_side() {
        let link = Arc::new(CommLink::new(Box::new(MockTransport::with_fixed_reply(
            "N1",
        ))));
        let mut axis = Axis::new();
        axis.attach(0, &link);
        drop(link);
        assert!(!axis.is_attached());
        assert!(matches!(axis.send_cmd("GNC"), Err(SmaractError::Detached)));
    }
}
