use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

/// The partial-sorting queue from Lemma 3.3 of the paper.
///
/// A multiset of `(vertex, value)` pairs kept only block-sorted: the block
/// sequence is ordered by approximate upper bound, and individual blocks are
/// sorted lazily when they overflow. The hot operation is [`pull`], which
/// removes roughly the `M` smallest pairs at once instead of popping a
/// single minimum, and reports the exact smallest value left behind so the
/// caller can classify later relaxations against it.
///
/// [`pull`]: PartialSortQueue::pull
#[derive(Debug)]
pub struct PartialSortQueue {
    /// Pull cap and soft block capacity `M`.
    block_cap: usize,
    /// Bound reported once the queue is drained.
    fallback_bound: f64,
    blocks: VecDeque<Vec<(usize, f64)>>,
    /// Stored pairs, duplicates included.
    len: usize,
}

impl PartialSortQueue {
    /// Creates a queue with pull cap `block_cap` and fallback bound
    /// `fallback_bound`
    pub fn new(block_cap: usize, fallback_bound: f64) -> Self {
        PartialSortQueue {
            block_cap: block_cap.max(1),
            fallback_bound,
            blocks: VecDeque::new(),
            len: 0,
        }
    }

    /// Returns the number of stored pairs (not distinct keys)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no pairs are stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a pair into the first block whose trailing value can absorb
    /// it, splitting the block at its median if it overflows.
    pub fn insert(&mut self, key: usize, val: f64) {
        let found = self.blocks.iter().position(|block| match block.last() {
            Some(&(_, last)) => last >= val,
            None => true,
        });
        let idx = match found {
            Some(idx) => idx,
            None => {
                self.blocks.push_back(Vec::new());
                self.blocks.len() - 1
            }
        };
        self.blocks[idx].push((key, val));
        self.len += 1;
        if self.blocks[idx].len() > self.block_cap {
            self.split_block(idx);
        }
    }

    /// Prepends a batch of pairs that the caller believes are all strictly
    /// smaller than anything stored. Violating pairs are re-routed through
    /// [`insert`](PartialSortQueue::insert) instead of corrupting the block
    /// order; the rest are chunked, sorted and pushed in front.
    pub fn batch_prepend(&mut self, pairs: Vec<(usize, f64)>) {
        if pairs.is_empty() {
            return;
        }
        let queue_min = self.min_value();
        let mut front = Vec::with_capacity(pairs.len());
        for (key, val) in pairs {
            match queue_min {
                Some(min) if val >= min => self.insert(key, val),
                _ => front.push((key, val)),
            }
        }
        if front.is_empty() {
            return;
        }
        front.sort_by(|a, b| a.1.total_cmp(&b.1));
        self.len += front.len();
        let chunk = self.block_cap.div_ceil(2).max(1);
        for piece in front.chunks(chunk).rev() {
            self.blocks.push_front(piece.to_vec());
        }
    }

    /// Removes up to `M` pairs with the smallest values.
    ///
    /// Returns the distinct keys among them (smallest value kept per key)
    /// and the exact minimum value still stored, or the fallback bound once
    /// the queue is empty. Every returned key was stored with a value at or
    /// below the returned bound; drained pairs that land above the remaining
    /// minimum are put back rather than returned, so the bound is a genuine
    /// separator between the pulled set and the rest.
    pub fn pull(&mut self) -> (Vec<usize>, f64) {
        if self.len == 0 {
            return (Vec::new(), self.fallback_bound);
        }

        let mut taken: Vec<(usize, f64)> = Vec::with_capacity(self.block_cap.min(self.len));
        while taken.len() < self.block_cap {
            let Some(block) = self.blocks.front_mut() else {
                break;
            };
            let need = self.block_cap - taken.len();
            if block.len() <= need {
                taken.append(block);
                self.blocks.pop_front();
            } else {
                taken.extend(block.drain(..need));
            }
        }
        self.len -= taken.len();

        let bound = self.min_value().unwrap_or(self.fallback_bound);

        let mut keys = Vec::with_capacity(taken.len());
        let mut best: HashMap<usize, f64> = HashMap::with_capacity(taken.len());
        for (key, val) in taken {
            if val > bound {
                self.insert(key, val);
                continue;
            }
            match best.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(val);
                    keys.push(key);
                }
                Entry::Occupied(mut slot) => {
                    if val < *slot.get() {
                        slot.insert(val);
                    }
                }
            }
        }

        // Progress guarantee: a badly ordered front can leave nothing below
        // the separator. Hand back the true minimum pair instead of an
        // empty set so drain loops always advance.
        if keys.is_empty() && self.len > 0 {
            if let Some((key, _)) = self.take_min_pair() {
                let bound = self.min_value().unwrap_or(self.fallback_bound);
                return (vec![key], bound);
            }
        }

        (keys, bound)
    }

    fn take_min_pair(&mut self) -> Option<(usize, f64)> {
        let mut loc: Option<(usize, usize)> = None;
        let mut best = f64::INFINITY;
        for (bi, block) in self.blocks.iter().enumerate() {
            for (i, &(_, val)) in block.iter().enumerate() {
                if loc.is_none() || val < best {
                    best = val;
                    loc = Some((bi, i));
                }
            }
        }
        let (bi, i) = loc?;
        let pair = self.blocks[bi].remove(i);
        if self.blocks[bi].is_empty() {
            self.blocks.remove(bi);
        }
        self.len -= 1;
        Some(pair)
    }

    fn split_block(&mut self, idx: usize) {
        let block = &mut self.blocks[idx];
        block.sort_by(|a, b| a.1.total_cmp(&b.1));
        let upper = block.split_off(block.len() / 2);
        self.blocks.insert(idx + 1, upper);
    }

    fn min_value(&self) -> Option<f64> {
        self.blocks
            .iter()
            .flat_map(|block| block.iter().map(|&(_, val)| val))
            .min_by(f64::total_cmp)
    }
}
