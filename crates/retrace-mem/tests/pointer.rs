use retrace_mem::{MemError, MemoryLayout, Pointer, ScalarKind};

#[test]
fn null_pointer() {
    assert!(Pointer::NULL.is_null());
    assert!(Pointer::new(0).is_null());
    assert!(!Pointer::new(0x123).is_null());
    assert_eq!(Pointer::default(), Pointer::NULL);
}

#[test]
fn ordering_is_by_address() {
    let a = Pointer::new(0x100);
    let b = Pointer::new(0x200);
    assert!(a < b);
    assert_eq!(a, Pointer::new(0x100));
}

#[test]
fn display_is_fixed_width_hex() {
    assert_eq!(Pointer::new(0x123).to_string(), "0x0000000000000123");
    assert_eq!(Pointer::NULL.to_string(), "0x0000000000000000");
    assert_eq!(
        Pointer::new(u64::MAX).to_string(),
        "0xffffffffffffffff"
    );
}

#[test]
fn offset_checked() {
    let p = Pointer::new(0x1000);
    assert_eq!(p.offset(0x10).unwrap(), Pointer::new(0x1010));
    assert!(matches!(
        Pointer::new(u64::MAX).offset(1),
        Err(MemError::AddressOverflow { .. })
    ));
}

#[test]
fn element_size_follows_layout() {
    let l64 = MemoryLayout::little_endian_64();
    let l32 = MemoryLayout::little_endian_32();
    // Bare pointers are byte-typed.
    assert_eq!(Pointer::new(0x10).element_size(&l64), 1);
    assert_eq!(l64.size_of(ScalarKind::Pointer), 8);
    assert_eq!(l32.size_of(ScalarKind::Pointer), 4);
    assert_eq!(l64.size_of(ScalarKind::I16), 2);
}

#[test]
fn slice_valid_and_invalid_ranges() {
    let layout = MemoryLayout::little_endian_64();
    let p = Pointer::new(0x1000);

    let s = p.slice(2, 6, &layout).unwrap();
    assert_eq!(s.base(), Pointer::new(0x1002));
    assert_eq!(s.count(), 4);
    assert_eq!(s.byte_len(), 4);

    // Empty slices are fine.
    assert_eq!(p.slice(3, 3, &layout).unwrap().count(), 0);

    assert!(matches!(
        p.slice(6, 2, &layout),
        Err(MemError::SliceRange { start: 6, end: 2 })
    ));
}

#[test]
fn slice_of_wider_elements() {
    let layout = MemoryLayout::little_endian_64();
    let p = Pointer::new(0x2000);
    let s = p.slice_of(ScalarKind::I32, 1, 4, &layout).unwrap();
    assert_eq!(s.base(), Pointer::new(0x2004));
    assert_eq!(s.count(), 3);
    assert_eq!(s.element_size(), 4);
    assert_eq!(s.byte_len(), 12);

    let sub = s.sub(1, 2).unwrap();
    assert_eq!(sub.base(), Pointer::new(0x2008));
    assert_eq!(sub.count(), 1);
    assert!(s.sub(2, 9).is_err());
}

#[cfg(not(target_arch = "wasm32"))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn offset_is_associative(base in 0u64..0x1000_0000, a in 0u64..0x1000, b in 0u64..0x1000) {
            let p = Pointer::new(base);
            let stepped = p.offset(a).unwrap().offset(b).unwrap();
            let direct = p.offset(a + b).unwrap();
            prop_assert_eq!(stepped, direct);
        }

        #[test]
        fn slice_succeeds_iff_ordered(start in 0u64..64, end in 0u64..64) {
            let layout = MemoryLayout::little_endian_64();
            let result = Pointer::new(0x1000).slice(start, end, &layout);
            if start <= end {
                let s = result.unwrap();
                prop_assert_eq!(s.count(), end - start);
            } else {
                let is_range_err = matches!(result, Err(MemError::SliceRange { .. }));
                prop_assert!(is_range_err, "start > end must fail with SliceRange");
            }
        }
    }
}
