use std::env;

use intset::{Error, GrowSet};

/// Breadth-first search over a small ring-with-chords graph, reusing the same
/// two sets for every source node.
fn main() -> Result<(), Error> {
    env_logger::init();

    let nodes: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(12);
    let neighbours = |n: usize| [(n + 1) % nodes, (n * 3 + 1) % nodes];

    let mut visited = GrowSet::new(nodes);
    let mut frontier = GrowSet::new(nodes);
    let mut next = GrowSet::new(nodes);

    for source in 0..nodes {
        visited.clear();
        frontier.clear();
        frontier.add(source)?;
        visited.add(source)?;

        let mut depth = 0;
        while !frontier.is_empty() {
            next.clear();
            while let Ok(node) = frontier.pop() {
                for neighbour in neighbours(node) {
                    if visited.add(neighbour)? {
                        next.add(neighbour)?;
                    }
                }
            }
            std::mem::swap(&mut frontier, &mut next);
            if !frontier.is_empty() {
                depth += 1;
            }
        }

        println!(
            "from {:>3}: reached {} nodes, eccentricity {}",
            source,
            visited.len(),
            depth
        );
    }

    Ok(())
}
