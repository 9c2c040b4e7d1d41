use retrace_api::{CmdExtras, CmdFlags, CmdId, Extra};
use retrace_mem::{MemoryLayout, Pointer};

#[test]
fn cmd_id_sentinel() {
    assert!(!CmdId::NO_ID.is_real());
    assert!(CmdId(0).is_real());
    assert_eq!(CmdId::default(), CmdId::NO_ID);
    assert_eq!(CmdId(7).to_string(), "7");
    assert_eq!(CmdId::NO_ID.to_string(), "no-id");
}

#[test]
fn flags_compose() {
    let flags = CmdFlags::SIDE_EFFECTS | CmdFlags::USER_VISIBLE;
    assert!(flags.contains(CmdFlags::SIDE_EFFECTS));
    assert!(!flags.contains(CmdFlags::DRAW_CALL));
    assert_eq!(CmdFlags::default(), CmdFlags::empty());
}

#[test]
fn extras_keep_insertion_order() {
    let layout = MemoryLayout::little_endian_64();
    let mut extras = CmdExtras::new();
    assert!(extras.is_empty());

    extras.add(Extra::Label("first".into()));
    extras.add(Extra::Observation {
        range: Pointer::new(0x100).slice(0, 4, &layout).unwrap(),
        data: vec![1, 2, 3, 4],
    });
    extras.add(Extra::Label("second".into()));

    assert_eq!(extras.len(), 3);
    let labels: Vec<&str> = extras.labels().collect();
    assert_eq!(labels, vec!["first", "second"]);
    assert!(matches!(
        extras.iter().nth(1),
        Some(Extra::Observation { data, .. }) if data.len() == 4
    ));
}
