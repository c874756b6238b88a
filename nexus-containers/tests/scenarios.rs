//! End-to-end scenarios across all four containers.

use nexus_containers::{Heap, MaxFirst, MinFirst, PriorityQueue, Precedes, Queue, Stack};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn assert_heap<T, P: Precedes<T>>(heap: &Heap<T, P>) {
    let nodes = heap.as_slice();
    for i in 1..nodes.len() {
        let parent = (i - 1) / 2;
        assert!(
            !heap.predicate().precedes(&nodes[i], &nodes[parent]),
            "node {} outranks parent {}",
            i,
            parent
        );
    }
}

// ============================================================================
// Heap
// ============================================================================

#[test]
fn heap_bulk_build_max() {
    init_tracing();

    let mut heap = Heap::from_vec(vec![5, 1, 9, 3], |a: &i32, b: &i32| a > b);
    assert_eq!(heap.peek(), Some(&9));

    assert_eq!(heap.remove_root(), Some(9));
    assert_eq!(heap.remove_root(), Some(5));
    assert_eq!(heap.remove_root(), Some(3));
    assert_eq!(heap.remove_root(), Some(1));
    assert_eq!(heap.remove_root(), None);
}

#[test]
fn heap_remove_last_index() {
    let mut heap = Heap::from_vec(vec![12, 7, 30, 1, 18, 25, 4, 9], MinFirst);
    assert_heap(&heap);

    let layout = heap.as_slice().to_vec();
    let last = layout.len() - 1;

    let removed = heap.remove_at(last);
    assert_eq!(removed, Some(layout[last]));
    assert_eq!(heap.as_slice(), &layout[..last]);
    assert_heap(&heap);
}

#[test]
fn heap_size_conservation() {
    let mut heap = Heap::from_vec((0..33).collect(), MaxFirst);
    let before = heap.len();

    heap.insert(100);
    assert_eq!(heap.remove_root(), Some(100));
    assert_eq!(heap.len(), before);
}

#[test]
fn heap_mixed_operations_keep_invariant() {
    let mut heap = Heap::new(MinFirst);
    for i in 0..64u32 {
        heap.insert((i * 29 + 7) % 64);
        assert_heap(&heap);
    }

    for round in 0..20usize {
        let pos = (round * 13) % heap.len();
        match round % 3 {
            0 => {
                heap.remove_at(pos);
            }
            1 => {
                heap.replace(pos, (round as u32) * 3).unwrap();
            }
            _ => {
                heap.remove_root();
            }
        }
        assert_heap(&heap);
    }
}

// ============================================================================
// Queue
// ============================================================================

#[test]
fn queue_compaction_is_transparent() {
    init_tracing();

    let mut queue: Queue<u32> = (1..=60).collect();
    for i in 1..=20 {
        assert_eq!(queue.dequeue(), Some(i));
    }

    assert_eq!(queue.front(), Some(&21));
    assert_eq!(queue.len(), 40);

    let rest: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(rest, (21..=60).collect::<Vec<_>>());
    assert!(queue.is_empty());
}

#[test]
fn queue_hundred_in_eighty_out() {
    let mut queue = Queue::new();
    for i in 0..100u64 {
        queue.enqueue(i);
    }

    for i in 0..80 {
        assert_eq!(queue.dequeue(), Some(i));
    }

    let rest: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(rest, (80..100).collect::<Vec<_>>());
}

// ============================================================================
// Stack
// ============================================================================

#[test]
fn stack_push_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.top(), Some(&3));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

// ============================================================================
// PriorityQueue
// ============================================================================

#[test]
fn priority_queue_drain_then_empty() {
    let mut pq = PriorityQueue::new(MaxFirst);
    pq.extend([4, 17, 9, 17, 2]);

    let drained: Vec<_> = pq.drain().collect();
    assert_eq!(drained, vec![17, 17, 9, 4, 2]);

    assert!(pq.is_empty());
    assert_eq!(pq.dequeue(), None);
    assert_eq!(pq.peek(), None);
}

#[test]
fn priority_queue_custom_struct() {
    #[derive(Debug, Clone, PartialEq)]
    struct Job {
        name: &'static str,
        weight: f32,
    }

    let mut jobs = PriorityQueue::new(|a: &Job, b: &Job| a.weight > b.weight);
    jobs.enqueue(Job { name: "index", weight: 0.4 });
    jobs.enqueue(Job { name: "compact", weight: 0.9 });
    jobs.enqueue(Job { name: "flush", weight: 0.7 });

    let names: Vec<_> = jobs.into_iter().map(|j| j.name).collect();
    assert_eq!(names, vec!["compact", "flush", "index"]);
}
