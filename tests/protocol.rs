//! End-to-end tests through the public API with a scripted transport.

use std::sync::Arc;

use smaract::transport::mock::MockTransport;
use smaract::{Axis, CommunicationMode, Controller, McsController, SensorMode, SmaractError};

fn fresh_axes(n: usize) -> Vec<Axis> {
    (0..n).map(|_| Axis::new()).collect()
}

#[test]
fn controller_owns_axes_in_input_order() {
    let ctrl = Controller::new(
        fresh_axes(6),
        Box::new(MockTransport::with_fixed_reply("N6")),
    )
    .unwrap();

    assert_eq!(ctrl.naxes(), 6);
    for (channel, axis) in ctrl.axes().iter().enumerate() {
        assert_eq!(axis.id(), Some(channel));
        assert!(axis.is_attached());
        assert!(Arc::ptr_eq(&axis.link().unwrap(), ctrl.link()));
    }
    assert!(ctrl.axis(6).is_none());
}

#[test]
fn axis_reaches_transport_through_back_reference() {
    let transport = MockTransport::with_fixed_reply("N2");
    let log = transport.sent_log();
    let ctrl = Controller::new(fresh_axes(2), Box::new(transport)).unwrap();

    let reply = ctrl.axes()[1].send_cmd("GS1").unwrap();
    assert_eq!(reply, "N2");
    assert_eq!(*log.lock().unwrap(), vec!["GS1"]);
}

#[test]
fn device_error_surfaces_through_controller_method() {
    let ctrl = Controller::new(
        fresh_axes(1),
        Box::new(MockTransport::with_fixed_reply("E0,150")),
    )
    .unwrap();

    let err = ctrl.get_version().unwrap_err();
    match err {
        SmaractError::Controller { code, kind } => {
            assert_eq!(code, 150);
            assert_eq!(kind.description(), "Command Not Processable Error");
        }
        other => panic!("expected controller error, got {other:?}"),
    }
}

#[test]
fn unknown_device_error_is_distinct() {
    let ctrl = Controller::new(
        fresh_axes(1),
        Box::new(MockTransport::with_fixed_reply("E0,321")),
    )
    .unwrap();
    assert!(matches!(
        ctrl.get_id(),
        Err(SmaractError::UnknownErrorCode(321))
    ));
}

#[test]
fn read_only_queries_are_idempotent() {
    let mcs = McsController::new(
        fresh_axes(1),
        Box::new(MockTransport::with_fixed_reply("IV2,0,50")),
    )
    .unwrap();
    let first = mcs.get_version().unwrap();
    for _ in 0..5 {
        assert_eq!(mcs.get_version().unwrap(), first);
    }

    let mcs = McsController::new(
        fresh_axes(1),
        Box::new(MockTransport::with_fixed_reply("SE1")),
    )
    .unwrap();
    for _ in 0..3 {
        assert_eq!(mcs.get_sensor_enabled().unwrap(), SensorMode::Enabled);
    }

    let mcs = McsController::new(
        fresh_axes(1),
        Box::new(MockTransport::with_fixed_reply("CM0")),
    )
    .unwrap();
    for _ in 0..3 {
        assert_eq!(
            mcs.get_communication_mode().unwrap(),
            CommunicationMode::Sync
        );
    }
}

#[test]
fn mcs_session_against_scripted_device() {
    let transport = MockTransport::with_replies([
        "IV1,3,30", // GIV
        "N3",       // GNC
        "ID07.000.5566", // GSI
        "CM0",      // GCM
        "E0,0",     // SCM1
        "E0,0",     // TC1797
        "BR57600",  // BR57600
        "E0,0",     // K0
    ]);
    let log = transport.sent_log();
    let mcs = McsController::new(fresh_axes(3), Box::new(transport)).unwrap();

    assert_eq!(mcs.get_version().unwrap(), "Version: 1.3.30");
    assert_eq!(mcs.get_nchannels().unwrap(), 3);
    assert_eq!(mcs.get_id().unwrap(), "ID07.000.5566");
    assert_eq!(
        mcs.get_communication_mode().unwrap(),
        CommunicationMode::Sync
    );
    mcs.set_communication_mode(CommunicationMode::Async).unwrap();
    mcs.trigger_command(5).unwrap();
    assert_eq!(mcs.configure_baudrate(57_600).unwrap(), 57_600);
    mcs.keep_alive(0).unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["GIV", "GNC", "GSI", "GCM", "SCM1", "TC1797", "BR57600", "K0"]
    );
}

#[test]
fn rejected_parameters_never_reach_the_transport() {
    let transport = MockTransport::with_replies::<_, String>([]);
    let log = transport.sent_log();
    let mcs = McsController::new(fresh_axes(1), Box::new(transport)).unwrap();

    assert!(mcs.trigger_command(256).is_err());
    assert!(mcs.trigger_command(-1).is_err());
    assert!(mcs.configure_baudrate(4_800).is_err());
    assert!(log.lock().unwrap().is_empty());
}
