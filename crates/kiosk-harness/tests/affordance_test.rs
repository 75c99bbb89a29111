//! Fullscreen and orientation lock against simulated hosts.

use kiosk_core::{FullscreenApi, KioskConfig, OrientationLock, Screen};
use kiosk_harness::{PlatformCall, SimConfig, SimKiosk};

fn launch(sim: SimConfig, config: KioskConfig) -> SimKiosk {
    let kiosk = SimKiosk::launch(sim, config);
    kiosk.host().ready();
    kiosk
}

#[tokio::test(start_paused = true)]
async fn ready_locks_portrait() {
    let kiosk = launch(SimConfig::default(), KioskConfig::default());
    kiosk.settle().await.unwrap();

    let platform = kiosk.host().platform();
    assert_eq!(platform.calls, vec![PlatformCall::LockOrientation(OrientationLock::Portrait)]);
    assert_eq!(platform.locked, Some(OrientationLock::Portrait));
}

#[tokio::test(start_paused = true)]
async fn orientation_change_relocks() {
    let config = KioskConfig::default().with_orientation(OrientationLock::Landscape);
    let kiosk = launch(SimConfig::default(), config);
    kiosk.host().orientation_changed();
    kiosk.settle().await.unwrap();

    let locks = kiosk
        .host()
        .platform()
        .calls
        .iter()
        .filter(|call| **call == PlatformCall::LockOrientation(OrientationLock::Landscape))
        .count();
    assert_eq!(locks, 2);
}

#[tokio::test(start_paused = true)]
async fn missing_orientation_lock_is_skipped() {
    let sim = SimConfig { orientation_lock: false, ..SimConfig::default() };
    let kiosk = launch(sim, KioskConfig::default());
    kiosk.host().orientation_changed();

    assert_eq!(kiosk.settle().await.unwrap(), Screen::Welcome);
    assert!(kiosk.host().platform().calls.is_empty());
}

#[tokio::test(start_paused = true)]
async fn rejected_orientation_lock_is_swallowed() {
    let sim = SimConfig { reject_orientation: true, ..SimConfig::default() };
    let kiosk = launch(sim, KioskConfig::default());

    kiosk.handle().navigate_to("events").unwrap();
    assert_eq!(kiosk.settle().await.unwrap(), Screen::Events);
    assert_eq!(kiosk.host().platform().locked, None);
}

#[tokio::test(start_paused = true)]
async fn fullscreen_uses_standard_first() {
    let sim = SimConfig { fullscreen_apis: FullscreenApi::CANDIDATES.to_vec(), ..SimConfig::default() };
    let kiosk = launch(sim, KioskConfig::default());

    kiosk.handle().enter_fullscreen().unwrap();
    kiosk.settle().await.unwrap();

    let platform = kiosk.host().platform();
    assert!(platform.fullscreen);
    assert!(platform.calls.contains(&PlatformCall::RequestFullscreen(FullscreenApi::Standard)));
    assert!(!platform.calls.contains(&PlatformCall::RequestFullscreen(FullscreenApi::Webkit)));
}

#[tokio::test(start_paused = true)]
async fn fullscreen_falls_back_to_vendor_variant() {
    for api in [FullscreenApi::Webkit, FullscreenApi::Ms] {
        let sim = SimConfig { fullscreen_apis: vec![api], orientation_lock: false, ..SimConfig::default() };
        let kiosk = launch(sim, KioskConfig::default());

        kiosk.handle().enter_fullscreen().unwrap();
        kiosk.handle().exit_fullscreen().unwrap();
        kiosk.settle().await.unwrap();

        assert_eq!(
            kiosk.host().platform().calls,
            vec![PlatformCall::RequestFullscreen(api), PlatformCall::ExitFullscreen(api)]
        );
    }
}

#[tokio::test(start_paused = true)]
async fn fullscreen_without_support_is_noop() {
    let sim = SimConfig { fullscreen_apis: Vec::new(), orientation_lock: false, ..SimConfig::default() };
    let kiosk = launch(sim, KioskConfig::default());

    kiosk.handle().enter_fullscreen().unwrap();
    assert_eq!(kiosk.settle().await.unwrap(), Screen::Welcome);
    assert!(kiosk.host().platform().calls.is_empty());
}

#[tokio::test(start_paused = true)]
async fn rejected_fullscreen_keeps_running() {
    let sim = SimConfig { reject_fullscreen: true, ..SimConfig::default() };
    let kiosk = launch(sim, KioskConfig::default());

    kiosk.handle().enter_fullscreen().unwrap();
    kiosk.handle().navigate_to("main-menu").unwrap();
    assert_eq!(kiosk.settle().await.unwrap(), Screen::MainMenu);
    assert!(!kiosk.host().platform().fullscreen);
}

#[tokio::test(start_paused = true)]
async fn fullscreen_on_ready_when_configured() {
    let config = KioskConfig::default().with_fullscreen_on_ready(true);
    let kiosk = launch(SimConfig::default(), config);
    kiosk.settle().await.unwrap();

    assert!(kiosk.host().platform().fullscreen);
}
