/// Lazy enumeration of all k-element subsets of `0..n`, as ascending index
/// vectors in lexicographic order.
///
/// Enumeration order is a function of input order alone, so re-runs over the
/// same library visit combinations identically. The ranking relies on this:
/// the enumeration position is the last-resort tie-break.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Advance the rightmost index that has room, then reset everything
        // to its right to the minimal ascending run.
        let mut i = self.k;
        while i > 0 {
            i -= 1;
            if self.indices[i] != i + self.n - self.k {
                self.indices[i] += 1;
                for j in i + 1..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(self.indices.clone());
            }
        }

        self.done = true;
        None
    }
}

/// C(n, k), the number of combinations `Combinations::new(n, k)` yields.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        // Exact at every step: the running product of i + 1 consecutive
        // integers is divisible by (i + 1)!.
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}
