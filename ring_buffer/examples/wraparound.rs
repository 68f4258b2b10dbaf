//! Cycle a capacity-3 queue past its size to show the indices wrapping.

use ring_buffer::{Queue, RingError, Stack};

fn main() -> Result<(), RingError> {
    let mut queue = Queue::new(3);
    println!("queue {} len={}", queue, queue.len());

    queue.enqueue(1)?;
    queue.enqueue(3)?;
    queue.enqueue(2)?;
    println!("queue {} len={} full={}", queue, queue.len(), queue.is_full());

    if let Err(e) = queue.enqueue(9) {
        println!("enqueue refused: {e}");
    }

    println!("dequeue -> {}", queue.dequeue()?);
    queue.enqueue(7)?; // wraps into the freed slot
    println!("queue {} len={}", queue, queue.len());

    while let Ok(v) = queue.dequeue() {
        println!("dequeue -> {v}, queue now {}", queue);
    }

    let mut stack = Stack::new(3);
    stack.push(1)?;
    stack.push(3)?;
    stack.push(2)?;
    println!("stack {} peek={}", stack, stack.peek()?);
    println!("pop -> {}", stack.pop()?);
    println!("stack {} len={}", stack, stack.len());

    Ok(())
}
