pub(crate) type LockCount = u64;

pub(crate) trait LockCountTrait {
    fn is_locked(&self) -> bool;

    fn incremented(&self) -> LockCount;

    fn decremented(&self) -> LockCount;
}

impl LockCountTrait for LockCount {
    fn is_locked(&self) -> bool {
        *self > 0
    }

    fn incremented(&self) -> LockCount {
        self.saturating_add(1)
    }

    fn decremented(&self) -> LockCount {
        self.saturating_sub(1)
    }
}
