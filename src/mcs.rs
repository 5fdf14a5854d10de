//! Modular Controller System (MCS) family.
//!
//! The MCS extends the common command set with communication-mode
//! control, sensor power management, the Hand Control Module, command
//! queue triggering and RS-232 configuration.

use std::ops::Deref;

use crate::axis::Axis;
use crate::controller::Controller;
use crate::error::{SmaractError, SmaractResult};
use crate::limits::{check_baud_rate, check_trigger_index, TRIGGER_CODE_BASE};
use crate::transport::Transport;

/// How the controller reports command completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommunicationMode {
    /// Replies are sent when the command has completed.
    Sync = 0,
    /// Replies are sent immediately, completion is reported separately.
    Async = 1,
}

/// Hand Control Module operation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HcmMode {
    Disabled = 0,
    Enabled = 1,
    /// The module displays state but cannot move positioners.
    ReadOnly = 2,
}

/// Sensor operation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorMode {
    Disabled = 0,
    Enabled = 1,
    /// Sensors are powered only while a closed-loop command executes.
    PowerSave = 2,
}

impl SensorMode {
    fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'0' => Some(SensorMode::Disabled),
            b'1' => Some(SensorMode::Enabled),
            b'2' => Some(SensorMode::PowerSave),
            _ => None,
        }
    }
}

/// SmarAct Modular Controller System.
///
/// Base commands are available through deref to [`Controller`].
pub struct McsController {
    inner: Controller,
}

impl McsController {
    pub fn new(axes: Vec<Axis>, transport: Box<dyn Transport>) -> SmaractResult<Self> {
        Ok(Self {
            inner: Controller::new(axes, transport)?,
        })
    }

    pub fn with_axis(axis: Axis, transport: Box<dyn Transport>) -> SmaractResult<Self> {
        Ok(Self {
            inner: Controller::with_axis(axis, transport)?,
        })
    }

    // 3.1 - Initialization commands
    // ------------------------------------------------------------------

    /// Current communication mode.
    pub fn get_communication_mode(&self) -> SmaractResult<CommunicationMode> {
        let reply = self.send_cmd("GCM")?;
        match reply.as_bytes().last() {
            Some(b'0') => Ok(CommunicationMode::Sync),
            Some(b'1') => Ok(CommunicationMode::Async),
            _ => Err(SmaractError::Parse(format!(
                "communication mode reply not 0/1: {reply:?}"
            ))),
        }
    }

    /// Switch between synchronous and asynchronous communication.
    pub fn set_communication_mode(&self, mode: CommunicationMode) -> SmaractResult<()> {
        self.send_cmd(&format!("SCM{}", mode as u8))?;
        Ok(())
    }

    /// System reset, equivalent to a power-cycle. Returns the
    /// acknowledgement value reported by the device.
    pub fn reset(&self) -> SmaractResult<f64> {
        let reply = self.send_cmd("R")?;
        let field = reply.split(',').nth(1).ok_or_else(|| {
            SmaractError::Parse(format!("reset reply missing value field: {reply:?}"))
        })?;
        field.parse().map_err(|_| {
            SmaractError::Parse(format!("reset reply not numeric: {reply:?}"))
        })
    }

    /// Set the Hand Control Module operation mode.
    pub fn set_hcm_enabled(&self, mode: HcmMode) -> SmaractResult<()> {
        self.send_cmd(&format!("SHE{}", mode as u8))?;
        Ok(())
    }

    // 3.2 - Configuration commands
    // ------------------------------------------------------------------

    /// Current sensor operation mode.
    pub fn get_sensor_enabled(&self) -> SmaractResult<SensorMode> {
        let reply = self.send_cmd("GSE")?;
        reply
            .as_bytes()
            .last()
            .copied()
            .and_then(SensorMode::from_digit)
            .ok_or_else(|| {
                SmaractError::Parse(format!("sensor mode reply not 0/1/2: {reply:?}"))
            })
    }

    /// Set the sensor operation mode.
    pub fn set_sensor_enabled(&self, mode: SensorMode) -> SmaractResult<()> {
        self.send_cmd(&format!("SSE{}", mode as u8))?;
        Ok(())
    }

    /// Trigger the queued commands loaded under `trigger_idx`.
    ///
    /// 256 logical trigger indices (0..=255) group queued commands for
    /// simultaneous execution; on the wire they occupy the code range
    /// 1792..=2047.
    pub fn trigger_command(&self, trigger_idx: i64) -> SmaractResult<()> {
        check_trigger_index(trigger_idx)?;
        self.send_cmd(&format!("TC{}", trigger_idx + TRIGGER_CODE_BASE))?;
        Ok(())
    }

    // 3.5 - Miscellaneous commands
    // ------------------------------------------------------------------

    /// Set the RS-232 baud rate and return the rate the device applied,
    /// which may differ from the requested one.
    ///
    /// Only meaningful when the underlying transport is the serial
    /// interface; over a network transport the command has no effect.
    /// This layer cannot see the transport kind, so it does not enforce
    /// that.
    pub fn configure_baudrate(&self, baudrate: u32) -> SmaractResult<u32> {
        check_baud_rate(baudrate)?;
        let reply = self.send_cmd(&format!("BR{baudrate}"))?;
        let digits = reply.get(2..).unwrap_or("");
        digits.parse().map_err(|_| {
            SmaractError::Parse(format!("baud rate reply not numeric: {reply:?}"))
        })
    }

    /// Arm the communication watchdog: if no command arrives within
    /// `delay_ms` the controller stops all positioners. `0` disables the
    /// watchdog.
    pub fn keep_alive(&self, delay_ms: u32) -> SmaractResult<()> {
        self.send_cmd(&format!("K{delay_ms}"))?;
        Ok(())
    }
}

impl Deref for McsController {
    type Target = Controller;

    fn deref(&self) -> &Controller {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::{MockTransport, SentLog};

    fn mcs_with_replies(replies: &[&str]) -> (McsController, SentLog) {
        let transport = MockTransport::with_replies(replies.iter().copied());
        let log = transport.sent_log();
        let mcs = McsController::with_axis(Axis::new(), Box::new(transport)).unwrap();
        (mcs, log)
    }

    #[test]
    fn test_communication_mode_round_trip() {
        let (mcs, log) = mcs_with_replies(&["CM0", "CM1", "E0,0"]);
        assert_eq!(
            mcs.get_communication_mode().unwrap(),
            CommunicationMode::Sync
        );
        assert_eq!(
            mcs.get_communication_mode().unwrap(),
            CommunicationMode::Async
        );
        mcs.set_communication_mode(CommunicationMode::Async).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["GCM", "GCM", "SCM1"]);
    }

    #[test]
    fn test_reset_parses_second_field() {
        let (mcs, log) = mcs_with_replies(&["R,13.5"]);
        assert_eq!(mcs.reset().unwrap(), 13.5);
        assert_eq!(*log.lock().unwrap(), vec!["R"]);
    }

    #[test]
    fn test_sensor_mode_commands() {
        let (mcs, log) = mcs_with_replies(&["SE2", "E0,0", "E0,0"]);
        assert_eq!(mcs.get_sensor_enabled().unwrap(), SensorMode::PowerSave);
        mcs.set_sensor_enabled(SensorMode::Enabled).unwrap();
        mcs.set_hcm_enabled(HcmMode::ReadOnly).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["GSE", "SSE1", "SHE2"]);
    }

    #[test]
    fn test_trigger_command_maps_index_onto_code_range() {
        let (mcs, log) = mcs_with_replies(&["E0,0", "E0,0", "E0,0"]);
        mcs.trigger_command(0).unwrap();
        mcs.trigger_command(5).unwrap();
        mcs.trigger_command(255).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["TC1792", "TC1797", "TC2047"]);
    }

    #[test]
    fn test_trigger_command_rejects_out_of_range_before_sending() {
        let (mcs, log) = mcs_with_replies(&[]);
        assert!(matches!(
            mcs.trigger_command(256),
            Err(SmaractError::InvalidArgument(_))
        ));
        assert!(matches!(
            mcs.trigger_command(-1),
            Err(SmaractError::InvalidArgument(_))
        ));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_configure_baudrate() {
        let (mcs, log) = mcs_with_replies(&["BR115200"]);
        assert_eq!(mcs.configure_baudrate(115_200).unwrap(), 115_200);
        assert_eq!(*log.lock().unwrap(), vec!["BR115200"]);
    }

    #[test]
    fn test_configure_baudrate_rejects_unknown_rate_before_sending() {
        let (mcs, log) = mcs_with_replies(&[]);
        assert!(matches!(
            mcs.configure_baudrate(12_345),
            Err(SmaractError::InvalidArgument(_))
        ));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_keep_alive() {
        let (mcs, log) = mcs_with_replies(&["E0,0", "E0,0"]);
        mcs.keep_alive(5_000).unwrap();
        mcs.keep_alive(0).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["K5000", "K0"]);
    }
}
