//! Walk the three chain containers through their demo sequences.

use node_chain::{ChainError, List, Queue, Stack};

fn main() -> Result<(), ChainError> {
    let mut list = List::new();
    println!("list  {} len={}", list, list.len());
    list.push(1);
    list.push(3);
    list.push(2);
    println!("list  {} len={}", list, list.len());
    list.set(1, 6)?;
    let i = list.find(&6)?;
    list.remove(i)?;
    println!("list  {} len={}", list, list.len());

    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(3);
    queue.enqueue(2);
    println!("queue {} len={}", queue, queue.len());
    println!("queue peek -> {}", queue.peek()?);
    println!("queue pop  -> {}", queue.dequeue()?);
    println!("queue {} len={}", queue, queue.len());

    let mut stack = Stack::new();
    stack.push(1);
    stack.push(3);
    stack.push(2);
    println!("stack {} len={}", stack, stack.len());
    println!("stack peek -> {}", stack.peek()?);
    println!("stack pop  -> {}", stack.pop()?);
    println!("stack {} len={}", stack, stack.len());

    Ok(())
}
