use ordered_bst::{MaxPriorityQueue, Queue, Stack};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn priority_queue_yields_max_first(xs: Vec<i8>) -> bool {
    let mut queue: MaxPriorityQueue<_> = xs.iter().copied().collect();
    let mut previous = None;
    while let Ok(max) = queue.del_max() {
        if previous.map_or(false, |previous| max > previous) {
            return false;
        }
        previous = Some(max);
    }
    queue.is_empty()
}

#[quickcheck]
fn queue_keeps_order(xs: Vec<i8>) -> bool {
    let mut queue: Queue<_> = xs.iter().copied().collect();
    xs.iter().all(|x| queue.dequeue() == Ok(*x)) && queue.is_empty()
}

#[quickcheck]
fn stack_reverses_order(xs: Vec<i8>) -> bool {
    let mut stack: Stack<_> = xs.iter().copied().collect();
    xs.iter().rev().all(|x| stack.pop() == Ok(*x)) && stack.is_empty()
}
