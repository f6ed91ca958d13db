use proptest::prelude::*;

use fifo_buffers::{
    ArrayFifo, BufferError, Capacity, ChainFifo, Fifo, FifoBuffer, Strategy as StorageStrategy,
};

/// One step applied to a buffer.
#[derive(Clone, Debug)]
enum Op {
    Add(i32),
    Get,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Add),
        1 => Just(Op::Get),
    ]
}

fn contents<B: FifoBuffer<i32>>(buffer: &B) -> Vec<i32> {
    buffer.iter().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_keeps_last_capacity_items(
        capacity in 1usize..32,
        items in prop::collection::vec(any::<i32>(), 0..200),
    ) {
        let cap = Capacity::from_usize(capacity).unwrap();
        let expected: Vec<i32> = items[items.len().saturating_sub(capacity)..].to_vec();

        for strategy in StorageStrategy::ALL {
            let mut buffer = Fifo::new(strategy, cap);
            buffer.extend(items.iter().copied());

            prop_assert_eq!(buffer.len(), items.len().min(capacity));
            prop_assert!(buffer.len() <= buffer.capacity());
            prop_assert_eq!(contents(&buffer), expected.clone());
        }
    }

    #[test]
    fn prop_variants_agree_after_every_step(
        capacity in 1usize..16,
        ops in prop::collection::vec(op_strategy(), 0..300),
    ) {
        let cap = Capacity::from_usize(capacity).unwrap();
        let mut array = ArrayFifo::with_capacity(cap);
        let mut chain = ChainFifo::with_capacity(cap);

        for op in ops {
            match op {
                Op::Add(value) => {
                    array.add(value);
                    chain.add(value);
                }
                Op::Get => {
                    prop_assert_eq!(array.get(), chain.get());
                }
            }

            prop_assert_eq!(array.len(), chain.len());
            prop_assert_eq!(contents(&array), contents(&chain));
            prop_assert_eq!(array.peek_oldest(), chain.peek_oldest());
            prop_assert_eq!(array.peek_newest(), chain.peek_newest());
        }
    }

    #[test]
    fn prop_iteration_does_not_mutate(
        capacity in 1usize..16,
        items in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let cap = Capacity::from_usize(capacity).unwrap();

        for strategy in StorageStrategy::ALL {
            let mut buffer = Fifo::new(strategy, cap);
            buffer.extend(items.iter().copied());

            let len_before = buffer.len();
            let first = contents(&buffer);
            let second = contents(&buffer);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(buffer.len(), len_before);
        }
    }

    #[test]
    fn prop_gets_drain_in_insertion_order(
        capacity in 1usize..16,
        items in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let cap = Capacity::from_usize(capacity).unwrap();

        for strategy in StorageStrategy::ALL {
            let mut buffer = Fifo::new(strategy, cap);
            buffer.extend(items.iter().copied());
            let expected = contents(&buffer);

            let mut drained = Vec::new();
            while let Ok(value) = buffer.get() {
                drained.push(value);
            }
            prop_assert_eq!(drained, expected);
            prop_assert!(buffer.is_empty());
            prop_assert_eq!(buffer.get(), Err(BufferError::EmptyBuffer));
        }
    }

    #[test]
    fn prop_capacity_sign_decides_error(requested in any::<i64>()) {
        let result = Capacity::new(requested);
        match requested {
            0 => prop_assert_eq!(result, Err(BufferError::ZeroCapacity)),
            n if n < 0 => prop_assert_eq!(result, Err(BufferError::NegativeCapacity(n))),
            n => prop_assert_eq!(result.map(Capacity::get), Ok(n as usize)),
        }
    }
}
