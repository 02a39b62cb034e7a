//! Integration tests for the step engine.
//!
//! Component: VM (step engine)
//!
//! These tests verify:
//! - Halting and the idle step after halting
//! - Jump and translocation displacement
//! - Stack, memory, math and I/O handlers
//! - Underflow and division defaults

#![cfg(test)]

use crate::common::*;

use mycelium::*;

// =============================================================================
// Halting
// =============================================================================

mod halting {
    use super::*;

    #[test]
    fn single_nop_halts_after_one_step() {
        // Arrange
        let program = row(&[(0, 0, 0)]);
        let mut machine = Machine::new();

        // Act
        let first = machine.step(&program, &mut NullSink);
        let second = machine.step(&program, &mut NullSink);

        // Assert
        assert_eq!(first, StepOutcome::Stepped);
        assert_eq!(second, StepOutcome::Idle);
        assert!(machine.is_halted());
        assert_eq!(machine.cycles(), 1);
    }

    #[test]
    fn leaving_north_halts() {
        // Arrange: turn north on the top row
        let program = row(&[(1, 0, 3), (0, 0, 0)]);

        // Act
        let machine = step_n(&program, 1);

        // Assert
        assert!(machine.is_halted());
        assert_eq!(machine.ip(), (0, -1));
    }

    #[test]
    fn halted_machine_ignores_further_steps() {
        // Arrange
        let program = grid("080041 0c0000");
        let mut machine = Machine::new();
        let mut out = String::new();
        machine.run_to_halt(&program, &mut out);
        let frozen = machine.snapshot();

        // Act
        for _ in 0..5 {
            machine.step(&program, &mut out);
        }

        // Assert
        assert_eq!(machine.snapshot(), frozen);
        assert_eq!(out, "A");
    }
}

// =============================================================================
// Control Flow
// =============================================================================

mod control_flow {
    use super::*;

    #[test]
    fn jump_zero_still_advances_one() {
        let machine = step_n(&row(&[(2, 0, 0), (0, 0, 0), (0, 0, 0)]), 1);
        assert_eq!(machine.ip(), (1, 0));
    }

    #[test]
    fn wide_jump_uses_green_as_high_byte() {
        // Arrange: jump 256 on a 300-wide row
        let mut cells = vec![(0u8, 0u8, 0u8); 300];
        cells[0] = (2, 1, 0);
        let program = row(&cells);

        // Act
        let machine = step_n(&program, 1);

        // Assert
        assert_eq!(machine.ip(), (257, 0));
    }

    #[test]
    fn jump_southward() {
        // Arrange: turn south, then jump 1 from (0, 1)
        let program = grid(
            "010001\n\
             020001\n\
             000000\n\
             000000\n",
        );

        // Act
        let machine = step_n(&program, 2);

        // Assert: (0, 1) + 1 + 1
        assert_eq!(machine.ip(), (0, 3));
    }

    #[test]
    fn goto_resumes_after_target() {
        let program = grid("090001 040000\n000000 000000\n");
        let machine = step_n(&program, 2);
        // goto (0, 1) then advance east
        assert_eq!(machine.ip(), (1, 1));
    }

    #[test]
    fn goto_out_of_grid_halts() {
        let program = grid("090909 040000");
        let machine = step_n(&program, 2);
        assert!(machine.is_halted());
        assert_eq!(machine.ip(), (10, 9));
    }

    #[test]
    fn call_records_call_site() {
        // Arrange
        let program = grid("090001 040001\n000000 000000\n");

        // Act
        let machine = step_n(&program, 2);

        // Assert
        let frames = machine.call_stack().frames();
        assert_eq!(frames, &[Frame::new(1, 0, Direction::East)]);
    }
}

// =============================================================================
// Data Handlers
// =============================================================================

mod data {
    use super::*;

    #[test]
    fn push_constant_is_sixteen_bit() {
        let machine = step_n(&row(&[(8, 0xff, 0xff)]), 1);
        assert_stack(&machine, &[65535]);
    }

    #[test]
    fn memory_pointer_walk() {
        // Arrange: ptr++ twice, store 7, ptr-- three times (clamped), load
        let program = grid("050004 050004 080007 050000 050005 050005 050005 050001");

        // Act
        let machine = step_n(&program, 8);

        // Assert
        assert_eq!(machine.memory().as_slice(), &[1, 0, 7]);
        assert_eq!(machine.mem_ptr(), 0);
        assert_stack(&machine, &[1]);
    }

    #[test]
    fn subtract_uses_top_as_left_operand() {
        // stack [2, 10] -> 10 - 2
        assert_eq!(output_of("080002 08000a 0b0001 0c0002"), "8");
    }

    #[test]
    fn shifts_and_overflow_wrap() {
        // 1 << 31
        assert_eq!(output_of("08001f 080001 0b000b 0c0002"), "-2147483648");
        // -1 >>> 28
        assert_eq!(output_of("08001c 080000 0b0008 0b000a 0c0002"), "15");
    }

    #[test]
    fn print_char_uses_utf16_unit() {
        // 0x00e9 is 'é'; a lone surrogate prints the replacement character
        assert_eq!(output_of("0800e9 0c0000"), "é");
        assert_eq!(output_of("08d800 0c0000"), "\u{fffd}");
    }

    #[test]
    fn print_on_empty_stack_prints_zero() {
        assert_eq!(output_of("0c0002"), "0");
        assert_eq!(output_of("0c0000"), "\0");
    }
}
