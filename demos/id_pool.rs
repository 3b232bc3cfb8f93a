use intset::{Error, ShrinkSet};

/// Hands out connection ids from a fixed pool and recycles the whole pool
/// between rounds.
fn main() -> Result<(), Error> {
    env_logger::init();

    let mut free: ShrinkSet<u16> = ShrinkSet::new(8);

    for round in 0..3 {
        let mut taken = Vec::new();
        // keep id 0 reserved
        free.remove(0);
        for _ in 0..(3 + round * 2) {
            taken.push(free.pop()?);
        }
        println!("round {}: handed out {:?}, still free {:?}", round, taken, free);

        free.retain(|id| id % 2 == 1);
        println!("round {}: odd ids left {:?}", round, free);

        free.refill();
    }

    let mut drained = 0;
    loop {
        match free.pop() {
            Ok(_) => drained += 1,
            Err(Error::EmptySet) => break,
            Err(err) => return Err(err),
        }
    }
    println!("drained {} ids", drained);

    Ok(())
}
