use tracing::trace;

/// Either a finished result or a call that has not been made yet.
pub enum Bounce<S, R> {
    Done(R),
    Pending(S),
}

/// A suspended call: which function to invoke, plus its arguments.
///
/// Resuming performs exactly one step of the computation and hands back the next
/// [`Bounce`], instead of making the follow-up call itself.
pub trait Suspended: Sized {
    type Output;

    fn resume(self) -> Bounce<Self, Self::Output>;
}

/// Drive `start` to completion.
///
/// This is a plain loop: however many calls the computation makes, the native
/// stack never holds more than one of them at a time.
pub fn run<S: Suspended>(start: Bounce<S, S::Output>) -> S::Output {
    run_observed(start, |_| {})
}

/// Like [`run`], but shows every pending call to `observe` before resuming it.
pub fn run_observed<S: Suspended>(
    start: Bounce<S, S::Output>,
    mut observe: impl FnMut(&S),
) -> S::Output {
    let mut bounces: u64 = 0;
    let mut bounce = start;
    loop {
        match bounce {
            Bounce::Done(out) => {
                trace!(target: "tramp_tree::trampoline", bounces, "landed");
                return out;
            }
            Bounce::Pending(call) => {
                observe(&call);
                bounces += 1;
                bounce = call.resume();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // mutually recursive even/odd, far deeper than any native stack would allow
    enum Parity {
        IsEven(u64),
        IsOdd(u64),
    }

    impl Suspended for Parity {
        type Output = bool;

        fn resume(self) -> Bounce<Self, bool> {
            match self {
                Parity::IsEven(0) => Bounce::Done(true),
                Parity::IsEven(n) => Bounce::Pending(Parity::IsOdd(n - 1)),
                Parity::IsOdd(0) => Bounce::Done(false),
                Parity::IsOdd(n) => Bounce::Pending(Parity::IsEven(n - 1)),
            }
        }
    }

    #[test]
    fn runs_a_million_bounces() {
        assert!(run(Bounce::Pending(Parity::IsEven(1_000_000))));
        assert!(!run(Bounce::Pending(Parity::IsEven(1_000_001))));
    }

    #[test]
    fn done_returns_immediately() {
        let mut seen = 0;
        let out = run_observed(Bounce::<Parity, bool>::Done(true), |_| seen += 1);
        assert!(out);
        assert_eq!(seen, 0);
    }

    #[test]
    fn observes_every_pending_call() {
        let mut seen = Vec::new();
        run_observed(Bounce::Pending(Parity::IsEven(3)), |call| {
            seen.push(match call {
                Parity::IsEven(n) => ('e', *n),
                Parity::IsOdd(n) => ('o', *n),
            })
        });
        assert_eq!(seen, vec![('e', 3), ('o', 2), ('e', 1), ('o', 0)]);
    }
}
