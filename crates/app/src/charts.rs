use costboard_core::SlotKind;

/// A rendered chart. Destroying it disposes whatever the renderer drew.
pub trait ChartHandle {
    fn destroy(self: Box<Self>);
}

/// The charting collaborator: labels, values, and a title in; a
/// disposable handle out.
pub trait ChartRenderer {
    fn render(&mut self, labels: &[String], values: &[f64], title: &str) -> Box<dyn ChartHandle>;
}

/// The two chart slots. At most one live handle per slot; replacing a
/// handle destroys the previous one first.
#[derive(Default)]
pub struct ChartSlots {
    monthly: Option<Box<dyn ChartHandle>>,
    quarterly: Option<Box<dyn ChartHandle>>,
}

impl ChartSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, slot: SlotKind, handle: Box<dyn ChartHandle>) {
        let target = self.slot_mut(slot);
        if let Some(previous) = target.take() {
            previous.destroy();
        }
        *target = Some(handle);
    }

    pub fn is_filled(&self, slot: SlotKind) -> bool {
        match slot {
            SlotKind::Monthly => self.monthly.is_some(),
            SlotKind::Quarterly => self.quarterly.is_some(),
        }
    }

    pub fn clear(&mut self) {
        for slot in [SlotKind::Monthly, SlotKind::Quarterly] {
            if let Some(handle) = self.slot_mut(slot).take() {
                handle.destroy();
            }
        }
    }

    fn slot_mut(&mut self, slot: SlotKind) -> &mut Option<Box<dyn ChartHandle>> {
        match slot {
            SlotKind::Monthly => &mut self.monthly,
            SlotKind::Quarterly => &mut self.quarterly,
        }
    }
}

impl Drop for ChartSlots {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountedHandle {
        live: Rc<Cell<usize>>,
    }

    impl CountedHandle {
        fn new(live: &Rc<Cell<usize>>) -> Box<Self> {
            live.set(live.get() + 1);
            Box::new(Self { live: live.clone() })
        }
    }

    impl ChartHandle for CountedHandle {
        fn destroy(self: Box<Self>) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn replace_destroys_previous_handle() {
        let live = Rc::new(Cell::new(0));
        let mut slots = ChartSlots::new();
        slots.replace(SlotKind::Monthly, CountedHandle::new(&live));
        assert_eq!(live.get(), 1);
        slots.replace(SlotKind::Monthly, CountedHandle::new(&live));
        assert_eq!(live.get(), 1);
        assert!(slots.is_filled(SlotKind::Monthly));
        assert!(!slots.is_filled(SlotKind::Quarterly));
    }

    #[test]
    fn slots_are_independent() {
        let live = Rc::new(Cell::new(0));
        let mut slots = ChartSlots::new();
        slots.replace(SlotKind::Monthly, CountedHandle::new(&live));
        slots.replace(SlotKind::Quarterly, CountedHandle::new(&live));
        assert_eq!(live.get(), 2);
        slots.replace(SlotKind::Quarterly, CountedHandle::new(&live));
        assert_eq!(live.get(), 2);
    }

    #[test]
    fn drop_destroys_live_handles() {
        let live = Rc::new(Cell::new(0));
        {
            let mut slots = ChartSlots::new();
            slots.replace(SlotKind::Monthly, CountedHandle::new(&live));
            slots.replace(SlotKind::Quarterly, CountedHandle::new(&live));
        }
        assert_eq!(live.get(), 0);
    }
}
