use compass_content::PinPreset;
use compass_core::{
    EntityCategory, EntityId, EntitySnapshot, Position, ScanObserver, ScanReport, Subtype,
    TrackerConfig,
};
use compass_host::SessionBuilder;

fn world() -> Vec<EntitySnapshot> {
    vec![
        EntitySnapshot::npc(1, 50, Position::new(40.0, 0.0)),
        EntitySnapshot::npc(2, 50, Position::new(0.0, -10.0)),
        EntitySnapshot::npc(3, 7, Position::new(1.0, 1.0)),
    ]
}

#[test]
fn world_load_scans_immediately() {
    let mut session = SessionBuilder::new()
        .preset(PinPreset::new().with(EntityCategory::Npc, [50]))
        .build();
    let world = world();

    let report = session.on_world_load(Position::ORIGIN, &world);

    assert_eq!(report.closest, Some(EntityId(2)));
    let indicator = session.draw(Position::ORIGIN, &world).unwrap();
    assert_eq!(indicator.target, EntityId(2));
    assert_eq!(indicator.subtype, Subtype(50));
    assert_eq!(indicator.bearing.distance, 10.0);
}

#[test]
fn draw_hides_indicator_once_target_deactivates() {
    let mut session = SessionBuilder::new()
        .preset(PinPreset::new().with(EntityCategory::Npc, [50]))
        .build();
    let mut world = world();
    session.on_world_load(Position::ORIGIN, &world);

    world[1].active = false;

    assert_eq!(session.draw(Position::ORIGIN, &world), None);
}

#[test]
fn unload_clears_configured_categories_and_reload_reapplies_preset() {
    let mut session = SessionBuilder::new()
        .preset(PinPreset::new().with(EntityCategory::Npc, [50]))
        .build();
    let world = world();
    session.on_world_load(Position::ORIGIN, &world);
    session.toggle_pin(EntityCategory::Npc, Subtype(7)).unwrap();
    session.toggle_pin(EntityCategory::Item, Subtype(3)).unwrap();

    session.on_world_unload();

    assert!(!session.is_world_loaded());
    assert_eq!(session.tracker().closest(), None);
    assert!(!session.tracker().is_pinned(EntityCategory::Npc, Subtype(7)));
    assert!(session.tracker().is_pinned(EntityCategory::Item, Subtype(3)));
    assert_eq!(session.draw(Position::ORIGIN, &world), None);

    session.on_world_load(Position::ORIGIN, &world);
    assert!(session.tracker().is_pinned(EntityCategory::Npc, Subtype(50)));
    assert_eq!(session.tracker().closest(), Some(EntityId(2)));
}

#[test]
fn unload_clears_every_configured_category() {
    let mut session = SessionBuilder::new()
        .config(
            TrackerConfig::new().with_unload_clears([EntityCategory::Npc, EntityCategory::Item]),
        )
        .build();
    session.on_world_load(Position::ORIGIN, &world());
    session.toggle_pin(EntityCategory::Npc, Subtype(7)).unwrap();
    session.toggle_pin(EntityCategory::Item, Subtype(3)).unwrap();
    session.toggle_pin(EntityCategory::Projectile, Subtype(1)).unwrap();

    session.on_world_unload();

    assert!(!session.tracker().is_pinned(EntityCategory::Npc, Subtype(7)));
    assert!(!session.tracker().is_pinned(EntityCategory::Item, Subtype(3)));
    assert!(session.tracker().is_pinned(EntityCategory::Projectile, Subtype(1)));
}

#[test]
fn unpinned_target_stays_tracked_until_next_scan() {
    let mut session = SessionBuilder::new()
        .config(TrackerConfig::new().with_scan_interval(0))
        .preset(PinPreset::new().with(EntityCategory::Npc, [50]))
        .build();
    let world = world();
    session.on_world_load(Position::ORIGIN, &world);
    session.toggle_pin(EntityCategory::Npc, Subtype(7)).unwrap();

    assert_eq!(session.toggle_pin(EntityCategory::Npc, Subtype(50)), Ok(false));
    let indicator = session.draw(Position::ORIGIN, &world).unwrap();
    assert_eq!(indicator.target, EntityId(2));

    session.update(Position::ORIGIN, &world);

    let indicator = session.draw(Position::ORIGIN, &world).unwrap();
    assert_eq!(indicator.target, EntityId(3));
}

#[test]
fn toggle_pin_flips_state() {
    let mut session = SessionBuilder::new().build();

    assert_eq!(session.toggle_pin(EntityCategory::Npc, Subtype(9)), Ok(true));
    assert_eq!(session.toggle_pin(EntityCategory::Npc, Subtype(9)), Ok(false));
    assert!(!session.tracker().is_pinned(EntityCategory::Npc, Subtype(9)));
}

#[test]
fn updates_before_load_do_nothing() {
    let mut session = SessionBuilder::new()
        .config(TrackerConfig::new().with_scan_interval(0))
        .preset(PinPreset::new().with(EntityCategory::Npc, [7]))
        .build();
    let world = world();

    assert_eq!(session.update(Position::ORIGIN, &world).report(), None);
    assert_eq!(session.tracker().closest(), None);
}

#[derive(Default)]
struct CountingObserver {
    scans: usize,
}

impl ScanObserver for CountingObserver {
    fn on_scan(&mut self, _report: &ScanReport) {
        self.scans += 1;
    }
}

#[test]
fn periodic_updates_scan_on_interval() {
    let mut session = SessionBuilder::new()
        .config(TrackerConfig::new().with_scan_interval(2))
        .preset(PinPreset::new().with(EntityCategory::Npc, [7]))
        .observer(CountingObserver::default())
        .build();
    let world = world();
    session.on_world_load(Position::ORIGIN, &world);

    for _ in 0..9 {
        session.update(Position::ORIGIN, &world);
    }

    // One scan at load, then one every third update.
    assert_eq!(session.tracker().observer().scans, 4);
    assert_eq!(session.tracker().closest(), Some(EntityId(3)));
}

#[test]
fn builds_from_host_config_files() {
    use std::io::Write;

    let mut pins = tempfile::NamedTempFile::new().unwrap();
    write!(pins, "(pins: [(category: npc, subtypes: [7])])").unwrap();
    let host = compass_host::HostConfig {
        pins_path: Some(pins.path().to_path_buf()),
        scan_interval: Some(5),
        ..Default::default()
    };

    let mut session = SessionBuilder::from_host_config(&host).unwrap().build();
    session.on_world_load(Position::ORIGIN, &world());

    assert_eq!(session.tracker().config().scan_interval, 5);
    assert_eq!(session.tracker().closest(), Some(EntityId(3)));
}
