use crate::Producer;

/// Run the first producer until it stops, then switch to the second.
///
/// The companion value of the first producer's stop signal is discarded; the pull that
/// observes it immediately continues with the second producer.
pub fn chain<L, R>(l: L, r: R) -> Chain<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    Chain(Some(l), r)
}

/// Chains two producers sequentially.
///
/// Created via [`chain()`] or [`Producer::chain`]. The first producer is dropped once it
/// stops to free resources.
pub struct Chain<L, R>(Option<L>, R);

impl<L, R> Producer for Chain<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self, stop: &mut bool) -> Self::Item {
        if let Some(l) = &mut self.0 {
            let mut first_stopped = false;
            let value = l.pull(&mut first_stopped);
            if !first_stopped {
                return value;
            }
            self.0 = None;
        }
        self.1.pull(stop)
    }
}
