mod common;

use boundary_flags::alu::accumulate;
use boundary_flags::{Alu, AluOutput, StatusFlags};

#[test]
fn test_chain_collects_flags_of_every_step() {
    common::init_test_logging();

    // 250 + 10 wraps to 4, 4 - 5 wraps to 255
    let out = 250u8.alu_add(10).then(|v| v.alu_sub(5));

    assert_eq!(out.value, 255);
    assert_eq!(out.flags, StatusFlags::UNDERFLOW_AND_OVERFLOW);
    assert_eq!(out.flags.to_text(), " UNDERFLOW OVERFLOW");
}

#[test]
fn test_chain_without_crossing_is_exact() {
    common::init_test_logging();

    let out = 10i32.alu_mul(10).then(|v| v.alu_sub(1)).then(|v| v.alu_neg());

    assert!(out.is_exact());
    assert_eq!(out.value, -99);
}

#[test]
fn test_accumulate_keeps_flags_after_wrapping_back() {
    common::init_test_logging();

    let out = accumulate([i8::MAX, 1, -1]);

    assert_eq!(out.value, i8::MAX, "Value wraps back into range");
    assert_eq!(out.flags, StatusFlags::BOTH, "Flags stay raised");
}

#[test]
fn test_accumulate_in_range() {
    common::init_test_logging();

    assert_eq!(accumulate(1u64..=100), AluOutput::exact(5050));
    assert_eq!(
        accumulate([usize::MAX, 1]),
        AluOutput::new(0, StatusFlags::OVERFLOW)
    );
}

#[test]
fn test_flags_from_many_outputs_merge() {
    common::init_test_logging();

    let flags: StatusFlags = [1i16.alu_add(1), i16::MIN.alu_dec(), 3i16.alu_inc()]
        .into_iter()
        .map(StatusFlags::from)
        .collect();

    assert_eq!(flags, StatusFlags::UNDERFLOW);
}

#[test]
fn test_wide_types() {
    common::init_test_logging();

    assert_eq!(
        u128::MAX.alu_mul(2),
        AluOutput::new(u128::MAX - 1, StatusFlags::OVERFLOW)
    );
    assert_eq!(
        isize::MIN.alu_neg(),
        AluOutput::new(isize::MIN, StatusFlags::OVERFLOW)
    );
}
