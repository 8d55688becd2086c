//! Printed walkthroughs; each writes its results to `out`.

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result, bail};
use tether_collections::pool::{self, PoolExt};
use tether_collections::{LinkedList, Queue, Stack};
use tracing::{debug, info};

pub fn stack(out: &mut impl Write) -> Result<()> {
    writeln!(out, "== stack ==")?;
    let stack = Stack::new();
    for value in [1, 2, 3] {
        stack.push(value);
    }
    writeln!(out, "size: {}", stack.size())?;
    writeln!(out, "peek: {:?}", stack.peek())?;
    for _ in 0..4 {
        writeln!(out, "pop: {:?}", stack.pop())?;
    }
    writeln!(out, "size: {}", stack.size())?;
    Ok(())
}

pub fn queue(out: &mut impl Write) -> Result<()> {
    writeln!(out, "== queue ==")?;
    let queue = Queue::new();
    for value in [1, 2, 3] {
        queue.push(value);
    }
    writeln!(out, "size: {}", queue.size())?;
    writeln!(out, "pop: {:?}", queue.pop())?;
    writeln!(out, "pop: {:?}", queue.pop())?;
    writeln!(out, "size: {}", queue.size())?;
    writeln!(out, "peek: {:?}", queue.peek())?;
    writeln!(out, "pop: {:?}", queue.pop())?;
    writeln!(out, "pop: {:?}", queue.pop())?;
    writeln!(out, "size: {}", queue.size())?;
    Ok(())
}

pub fn list(out: &mut impl Write) -> Result<()> {
    writeln!(out, "== list ==")?;

    let list = LinkedList::from(vec![1, 2, 3]);
    list.insert_at(1, 4)?;
    writeln!(out, "insert_at(1, 4): {:?}", list.items())?;

    let list = LinkedList::from(vec![1, 2, 3]);
    let removed = list.remove_at(0)?;
    writeln!(out, "remove_at(0): {removed} -> {:?}", list.items())?;
    writeln!(out, "index_of(3): {:?}", list.index_of(&3))?;
    writeln!(out, "index_of(9): {:?}", list.index_of(&9))?;

    let empty = LinkedList::<i32>::new();
    match empty.remove_at(0) {
        Ok(value) => bail!("remove_at on an empty list returned {value}"),
        Err(error) => writeln!(out, "remove_at(0) on empty: {error} [{}]", error.code())?,
    }
    writeln!(out, "size: {}", empty.size())?;
    Ok(())
}

pub fn pool(out: &mut impl Write, json: bool) -> Result<()> {
    writeln!(out, "== pool ==")?;

    let stack = Stack::<i32>::acquire();
    stack.push(10);
    stack.push(20);
    writeln!(out, "pop: {:?}", stack.pop())?;
    stack.release();

    let again = Stack::<i32>::acquire();
    writeln!(out, "reacquired size: {}", again.size())?;
    again.release();

    {
        let scoped = Stack::<i32>::acquire_scoped();
        scoped.push(1);
        debug!(size = scoped.size(), "scoped stack in use");
    }

    let stats = pool::global()
        .stats::<Stack<i32>>()
        .context("stack pool missing after use")?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    } else {
        writeln!(
            out,
            "acquires: {} hits: {} misses: {} releases: {}",
            stats.acquires, stats.hits, stats.misses, stats.releases
        )?;
    }
    Ok(())
}

pub fn concurrent(out: &mut impl Write, threads: usize, per_thread: usize) -> Result<()> {
    writeln!(out, "== concurrent ==")?;
    if threads == 0 {
        bail!("--threads must be at least 1");
    }
    let Some(total) = threads.checked_mul(per_thread) else {
        bail!("--threads ({threads}) * --per-thread ({per_thread}) overflows usize");
    };

    let stack = Arc::new(Stack::new());
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let stack = Arc::clone(&stack);
            thread::spawn(move || {
                for i in 0..per_thread {
                    stack.push(t * per_thread + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("pusher thread panicked"))?;
    }

    let values = stack.pop_all();
    let unique: HashSet<usize> = values.iter().copied().collect();
    info!(threads, per_thread, "concurrent pushes finished");

    writeln!(out, "pushed: {total}")?;
    writeln!(out, "popped: {}", values.len())?;
    writeln!(out, "unique: {}", unique.len())?;
    Ok(())
}
