//! SmarAct SDC/MCS motion controller ASCII protocol layer
//!
//! This crate implements the command-protocol layer for the SmarAct
//! positioner/actuator controller families that speak the line-oriented
//! ASCII request/response interface:
//!
//! - **Dispatch**: [`CommLink`] sends one command per call, decodes the
//!   error/success framing of the reply and surfaces device errors as
//!   typed failures.
//! - **Composition**: a [`Controller`] owns a fixed, ordered set of
//!   [`Axis`] channels and one shared dispatcher;
//!   [`SdcController`]/[`McsController`] add the model-specific command
//!   sets on top.
//! - **Validation**: [`limits`] rejects out-of-domain parameters
//!   (trigger index, baud rate) before anything is sent.
//!
//! The physical connection is not part of this crate: any serial or
//! network backend that can perform one synchronous write/read cycle
//! implements [`Transport`]. The dispatcher serializes commands issued
//! through one controller; callers sharing one physical connection
//! between several controllers must serialize across them as well.
//!
//! # Example
//!
//! ```
//! use smaract::{transport::mock::MockTransport, Axis, McsController};
//!
//! let transport = MockTransport::with_replies(["IV1,3,30", "N3"]);
//! let axes: Vec<Axis> = (0..3).map(|_| Axis::new()).collect();
//! let mcs = McsController::new(axes, Box::new(transport))?;
//!
//! assert_eq!(mcs.get_version()?, "Version: 1.3.30");
//! assert_eq!(mcs.get_nchannels()?, 3);
//! assert_eq!(mcs.axes()[2].id(), Some(2));
//! # Ok::<(), smaract::SmaractError>(())
//! ```

pub mod axis;
pub mod codes;
pub mod controller;
pub mod error;
pub mod limits;
pub mod link;
pub mod mcs;
pub mod sdc;
pub mod transport;

pub use axis::Axis;
pub use codes::{ErrorCode, SensorType};
pub use controller::Controller;
pub use error::{SmaractError, SmaractResult};
pub use link::CommLink;
pub use mcs::{CommunicationMode, HcmMode, McsController, SensorMode};
pub use sdc::SdcController;
pub use transport::Transport;
