//! Walk both array types through a construct / mutate / print sequence.

use slot_array::{ArrayError, DynamicArray, FixedArray};

fn main() -> Result<(), ArrayError> {
    // Fixed capacity: three slots, no more
    let mut fixed = FixedArray::new(3);
    println!("{} len={}", fixed, fixed.len());

    fixed.push(1)?;
    fixed.push(3)?;
    fixed.push(2)?;
    println!("{} len={}", fixed, fixed.len());

    if let Err(e) = fixed.push(4) {
        println!("push refused: {e}");
    }

    fixed.remove(1)?;
    println!("{} len={}", fixed, fixed.len());

    // Dynamic: starts with one slot and doubles as needed
    let mut dynamic = DynamicArray::new();
    println!("{} len={} cap={}", dynamic, dynamic.len(), dynamic.capacity());

    for v in [1, 3, 2] {
        dynamic.push(v)?;
    }
    println!("{} len={} cap={}", dynamic, dynamic.len(), dynamic.capacity());

    dynamic.set(0, 4)?;
    dynamic.set(1, 6)?;
    dynamic.set(2, 5)?;
    println!("{} len={} cap={}", dynamic, dynamic.len(), dynamic.capacity());

    let i = dynamic.find(&6)?;
    dynamic.remove(i)?;
    println!("{} len={} cap={}", dynamic, dynamic.len(), dynamic.capacity());

    dynamic.push(7)?;
    println!("{} len={} cap={}", dynamic, dynamic.len(), dynamic.capacity());

    Ok(())
}
