use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use remora_bridge::{FramingMode, LineFramer};

fn collect(mode: FramingMode, chunks: &[String]) -> (Vec<String>, String) {
    let units = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&units);
    let mut framer = LineFramer::new(mode, move |unit| sink.borrow_mut().push(unit));

    for chunk in chunks {
        framer.write(chunk);
    }

    let pending = framer.pending().to_owned();
    (units.take(), pending)
}

fn mode() -> impl Strategy<Value = FramingMode> {
    prop_oneof![Just(FramingMode::WholeBuffer), Just(FramingMode::PerLine)]
}

proptest! {
    #[test]
    fn nothing_flushes_without_terminator(
        mode in mode(),
        chunks in prop::collection::vec("[^\n]{0,12}", 0..16),
    ) {
        let (units, pending) = collect(mode, &chunks);

        prop_assert!(units.is_empty());
        prop_assert_eq!(pending, chunks.concat());
    }

    #[test]
    fn output_is_neither_lost_nor_duplicated(
        mode in mode(),
        chunks in prop::collection::vec("[a-z \n]{0,12}", 0..16),
    ) {
        let (units, pending) = collect(mode, &chunks);

        prop_assert_eq!(units.concat() + &pending, chunks.concat());
        prop_assert!(!pending.contains('\n'));
        for unit in &units {
            prop_assert!(unit.contains('\n'));
        }
    }

    #[test]
    fn per_line_units_are_single_lines(
        chunks in prop::collection::vec("[a-z \n]{0,12}", 0..16),
    ) {
        let (units, _) = collect(FramingMode::PerLine, &chunks);

        for unit in &units {
            prop_assert!(unit.ends_with('\n'));
            prop_assert_eq!(unit.matches('\n').count(), 1);
        }
    }

    #[test]
    fn whole_buffer_flushes_once_per_terminated_write(
        chunks in prop::collection::vec("[a-z \n]{0,12}", 0..16),
    ) {
        let (units, pending) = collect(FramingMode::WholeBuffer, &chunks);
        let flushing_writes = chunks.iter().filter(|chunk| chunk.contains('\n')).count();

        prop_assert_eq!(units.len(), flushing_writes);
        let tail = chunks
            .iter()
            .rev()
            .take_while(|chunk| !chunk.contains('\n'))
            .map(String::as_str)
            .collect::<Vec<_>>();
        prop_assert_eq!(pending, tail.into_iter().rev().collect::<String>());
    }
}
