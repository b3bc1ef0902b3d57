use crate::crop::{CropHandle, CropSession, CropState, CropTarget};

use googletest::prelude::*;

#[test]
fn test_new_session_is_idle() {
    let session = CropSession::new();

    assert_that!(session.state(), eq(CropState::Idle));
    assert_that!(session.live(), none());
}

#[test]
fn test_open_then_attach_is_cropping() {
    let mut session = CropSession::new();

    let (prior, generation) = session.open(CropTarget::Project);
    assert_that!(prior, none());
    assert!(session.is_current(CropTarget::Project, generation));
    assert_that!(
        session.state(),
        eq(CropState::ModalOpen {
            target: CropTarget::Project
        })
    );

    session.attach(CropTarget::Project, CropHandle(7));

    assert_that!(
        session.state(),
        eq(CropState::Cropping {
            target: CropTarget::Project,
            handle: CropHandle(7)
        })
    );
}

#[test]
fn test_reopen_same_target_hands_back_prior_handle() {
    let mut session = CropSession::new();
    session.open(CropTarget::Client);
    session.attach(CropTarget::Client, CropHandle(1));

    let (prior, _) = session.open(CropTarget::Client);

    assert_that!(prior, some(eq(CropHandle(1))));
    assert_that!(session.live(), none());
}

#[test]
fn test_other_target_keeps_its_handle_until_close() {
    let mut session = CropSession::new();
    session.open(CropTarget::Project);
    session.attach(CropTarget::Project, CropHandle(1));

    let (prior, _) = session.open(CropTarget::Client);
    session.attach(CropTarget::Client, CropHandle(2));

    assert_that!(prior, none());
    let mut closed = session.close();
    closed.sort_by_key(|handle| handle.0);
    assert_that!(closed, eq(&vec![CropHandle(1), CropHandle(2)]));
    assert_that!(session.current(), none());
}

#[test]
fn test_close_invalidates_pending_generation() {
    let mut session = CropSession::new();
    let (_, generation) = session.open(CropTarget::Project);

    session.close();

    assert!(!session.is_current(CropTarget::Project, generation));
}

#[test]
fn test_newer_open_supersedes_older_generation() {
    let mut session = CropSession::new();
    let (_, first) = session.open(CropTarget::Project);
    let (_, second) = session.open(CropTarget::Project);

    assert!(!session.is_current(CropTarget::Project, first));
    assert!(session.is_current(CropTarget::Project, second));
}
