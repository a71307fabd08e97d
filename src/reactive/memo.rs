/// Input-keyed memoization for derived values.
///
/// `Memo<I, O>` caches the last `(input, output)` pair and recomputes only
/// when the input tuple actually changes (`PartialEq`). The widgets use this
/// to implement dataflow recomputation: geometry snapshots are re-derived on
/// input change and never spuriously, so downstream animation retargets are
/// gated on real changes.
#[derive(Debug, Default)]
pub struct Memo<I, O> {
    last: Option<(I, O)>,
}

impl<I: PartialEq, O: Clone> Memo<I, O> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Return the cached output for `input`, computing it via `f` only when
    /// the input differs from the previous call.
    pub fn get(&mut self, input: I, f: impl FnOnce(&I) -> O) -> O {
        match &self.last {
            Some((cached_input, cached_output)) if *cached_input == input => {
                cached_output.clone()
            }
            _ => {
                let output = f(&input);
                self.last = Some((input, output.clone()));
                output
            }
        }
    }

    /// Drop the cached pair, forcing the next `get` to recompute.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_computes_once_per_input() {
        let mut memo = Memo::new();
        let mut calls = 0;
        for _ in 0..3 {
            let v = memo.get(7, |i| {
                calls += 1;
                i * 2
            });
            assert_eq!(v, 14);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_memo_recomputes_on_change() {
        let mut memo = Memo::new();
        assert_eq!(memo.get(1, |i| i + 1), 2);
        assert_eq!(memo.get(2, |i| i + 1), 3);
        // Going back to a previous input recomputes: only the last pair is
        // cached.
        let mut calls = 0;
        assert_eq!(
            memo.get(1, |i| {
                calls += 1;
                i + 1
            }),
            2
        );
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_memo_invalidate() {
        let mut memo = Memo::new();
        memo.get(1, |i| i * 10);
        memo.invalidate();
        let mut calls = 0;
        memo.get(1, |i| {
            calls += 1;
            i * 10
        });
        assert_eq!(calls, 1);
    }
}
