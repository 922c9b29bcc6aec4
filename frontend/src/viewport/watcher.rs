//! Viewport intersection tracking, independent of the DOM.
//!
//! A [`ViewportWatcher`] holds one entry per observed region. Each entry has a
//! probe that reports the region's current rectangle (or `None` while the
//! region is not mounted) and a listener that receives the boolean "in view"
//! signal. [`ViewportWatcher::dispatch`] recomputes every entry against the
//! viewport and returns the resulting notifications so the caller can deliver
//! them after releasing its borrow of the watcher.

use std::rc::Rc;

/// Axis-aligned rectangle in CSS pixels, relative to the viewport.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grows (positive) or shrinks (negative) each edge by the margin.
    pub fn expand(&self, margin: Margin) -> Rect {
        let left = self.left - margin.left;
        let top = self.top - margin.top;
        let right = self.right() + margin.right;
        let bottom = self.bottom() + margin.bottom;
        Rect::new(left, top, right - left, bottom - top)
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Offsets applied to the viewport bounds before testing intersection.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn bottom(px: f64) -> Self {
        Margin { top: 0.0, right: 0.0, bottom: px, left: 0.0 }
    }

    /// Parses the CSS shorthand form, e.g. `"0px 0px -200px 0px"`.
    ///
    /// One to four lengths are accepted and expanded the way CSS expands
    /// `margin`. Each length is a plain number or a number with a `px` suffix.
    pub fn parse(raw: &str) -> Option<Margin> {
        let values = raw
            .split_whitespace()
            .map(|token| token.strip_suffix("px").unwrap_or(token).parse::<f64>().ok())
            .collect::<Option<Vec<f64>>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return None,
        };
        Some(Margin { top, right, bottom, left })
    }
}

/// How much of a region must be visible for it to count as in view.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Amount {
    /// Any overlap at all.
    #[default]
    Some,
    /// At least this fraction of the region's area.
    Fraction(f64),
}

impl Amount {
    pub fn is_met(self, ratio: f64) -> bool {
        match self {
            Amount::Some => ratio > 0.0,
            Amount::Fraction(f) if f <= 0.0 => ratio > 0.0,
            Amount::Fraction(f) => ratio >= f.min(1.0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct WatchOptions {
    pub amount: Amount,
    pub margin: Margin,
    pub once: bool,
}

impl WatchOptions {
    /// Latches true after the first time the region is seen.
    pub fn once() -> Self {
        WatchOptions { once: true, ..Default::default() }
    }

    /// Follows the region in and out of view indefinitely.
    pub fn continuous() -> Self {
        WatchOptions::default()
    }

    pub fn amount(mut self, fraction: f64) -> Self {
        self.amount = Amount::Fraction(fraction);
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }
}

/// Fraction of `region` that lies inside the margin-adjusted viewport.
///
/// A region with no area counts as fully visible when it sits inside the
/// viewport, which is how the browser treats empty elements.
pub fn intersection_ratio(region: &Rect, viewport: &Rect, margin: Margin) -> f64 {
    let root = viewport.expand(margin);
    let Some(overlap) = region.intersection(&root) else {
        return 0.0;
    };
    let area = region.area();
    if area == 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Per-region visibility, created when a region is registered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ViewabilityState {
    is_in_view: bool,
    has_been_seen: bool,
    once: bool,
}

impl ViewabilityState {
    pub fn new(once: bool) -> Self {
        ViewabilityState { once, ..Default::default() }
    }

    pub fn is_in_view(&self) -> bool {
        self.is_in_view
    }

    /// True once a latching region has been seen; it can never change again.
    pub fn is_latched(&self) -> bool {
        self.once && self.has_been_seen
    }

    /// Feeds a fresh threshold test. Returns whether the signal changed.
    pub fn observe(&mut self, satisfied: bool) -> bool {
        if self.is_latched() {
            return false;
        }
        let before = self.is_in_view;
        self.is_in_view = satisfied;
        self.has_been_seen |= satisfied;
        before != self.is_in_view
    }
}

pub type Probe = Box<dyn Fn() -> Option<Rect>>;
pub type Listener = Rc<dyn Fn(bool)>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WatchId(u64);

struct Entry {
    id: WatchId,
    options: WatchOptions,
    state: ViewabilityState,
    probe: Probe,
    listener: Listener,
}

/// A pending "in view" change for one region.
pub struct Notification {
    pub in_view: bool,
    listener: Listener,
}

impl Notification {
    pub fn deliver(self) {
        (self.listener)(self.in_view)
    }
}

#[derive(Default)]
pub struct ViewportWatcher {
    next_id: u64,
    entries: Vec<Entry>,
}

impl ViewportWatcher {
    pub fn watch(&mut self, options: WatchOptions, probe: Probe, listener: Listener) -> WatchId {
        let id = WatchId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            options,
            state: ViewabilityState::new(options.once),
            probe,
            listener,
        });
        id
    }

    /// Forgets a region. Returns false if it was not registered.
    pub fn unwatch(&mut self, id: WatchId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Current signal for a region; unknown regions are never in view.
    pub fn is_in_view(&self, id: WatchId) -> bool {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.state.is_in_view())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-tests every region against `viewport`, in registration order.
    pub fn dispatch(&mut self, viewport: Rect) -> Vec<Notification> {
        let mut notifications = Vec::new();
        for entry in &mut self.entries {
            if entry.state.is_latched() {
                continue;
            }
            let satisfied = (entry.probe)()
                .map(|region| {
                    let ratio = intersection_ratio(&region, &viewport, entry.options.margin);
                    entry.options.amount.is_met(ratio)
                })
                .unwrap_or(false);
            if entry.state.observe(satisfied) {
                notifications.push(Notification {
                    in_view: entry.state.is_in_view(),
                    listener: entry.listener.clone(),
                });
            }
        }
        notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    /// A region whose top edge is driven by the test, like a scrolled element.
    fn movable(height: f64) -> (Rc<Cell<f64>>, Probe) {
        let top = Rc::new(Cell::new(2000.0));
        let probe_top = top.clone();
        let probe: Probe = Box::new(move || Some(Rect::new(0.0, probe_top.get(), 1000.0, height)));
        (top, probe)
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Listener) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Rc::new(move |v: bool| sink.borrow_mut().push(v)))
    }

    fn deliver_all(watcher: &mut ViewportWatcher) {
        for n in watcher.dispatch(VIEWPORT) {
            n.deliver();
        }
    }

    #[test]
    fn parses_css_margin_shorthand() {
        assert_eq!(Margin::parse("0px 0px -200px 0px"), Some(Margin::bottom(-200.0)));
        assert_eq!(
            Margin::parse("10px"),
            Some(Margin { top: 10.0, right: 10.0, bottom: 10.0, left: 10.0 })
        );
        assert_eq!(
            Margin::parse("5 20px"),
            Some(Margin { top: 5.0, right: 20.0, bottom: 5.0, left: 20.0 })
        );
        assert_eq!(
            Margin::parse("1px 2px 3px"),
            Some(Margin { top: 1.0, right: 2.0, bottom: 3.0, left: 2.0 })
        );
        assert_eq!(Margin::parse(""), None);
        assert_eq!(Margin::parse("1px 2px 3px 4px 5px"), None);
        assert_eq!(Margin::parse("wide"), None);
    }

    #[test]
    fn ratio_accounts_for_negative_margin() {
        let region = Rect::new(0.0, 400.0, 1000.0, 400.0);
        assert_eq!(intersection_ratio(&region, &VIEWPORT, Margin::default()), 1.0);
        let shrunk = intersection_ratio(&region, &VIEWPORT, Margin::bottom(-200.0));
        assert!((shrunk - 0.5).abs() < 1e-9);
    }

    #[test]
    fn ratio_is_zero_outside_and_one_for_empty_inside() {
        let below = Rect::new(0.0, 900.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&below, &VIEWPORT, Margin::default()), 0.0);
        let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&empty, &VIEWPORT, Margin::default()), 1.0);
    }

    #[test]
    fn amount_thresholds() {
        assert!(Amount::Some.is_met(0.01));
        assert!(!Amount::Some.is_met(0.0));
        assert!(Amount::Fraction(0.4).is_met(0.4));
        assert!(!Amount::Fraction(0.4).is_met(0.39));
        assert!(!Amount::Fraction(0.0).is_met(0.0));
        assert!(Amount::Fraction(1.0).is_met(1.0));
        assert!(!Amount::Fraction(1.0).is_met(0.99));
    }

    #[test]
    fn once_latches_after_first_entry() {
        let mut state = ViewabilityState::new(true);
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(state.is_in_view());
        assert!(state.is_latched());
    }

    #[test]
    fn continuous_state_oscillates() {
        let mut state = ViewabilityState::new(false);
        assert!(state.observe(true));
        assert!(state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(true));
        assert!(!state.is_latched());
    }

    #[test]
    fn once_region_stays_true_whatever_the_scroll() {
        let mut watcher = ViewportWatcher::default();
        let (top, probe) = movable(200.0);
        let (seen, listener) = recorder();
        let id = watcher.watch(WatchOptions::once(), probe, listener);

        for position in [1500.0, 300.0, -900.0, 5000.0, 100.0, -3000.0] {
            top.set(position);
            deliver_all(&mut watcher);
            if position == 300.0 {
                assert!(watcher.is_in_view(id));
            }
        }
        assert!(watcher.is_in_view(id));
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn once_region_that_never_intersects_stays_false() {
        let mut watcher = ViewportWatcher::default();
        let (top, probe) = movable(200.0);
        let (seen, listener) = recorder();
        let id = watcher.watch(WatchOptions::once(), probe, listener);
        for position in [900.0, 1200.0, -250.0, 4000.0] {
            top.set(position);
            deliver_all(&mut watcher);
        }
        assert!(!watcher.is_in_view(id));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn continuous_region_flips_back_on_exit() {
        let mut watcher = ViewportWatcher::default();
        let (top, probe) = movable(200.0);
        let (seen, listener) = recorder();
        watcher.watch(WatchOptions::continuous(), probe, listener);
        for position in [900.0, 500.0, 450.0, -300.0, 100.0] {
            top.set(position);
            deliver_all(&mut watcher);
        }
        assert_eq!(*seen.borrow(), vec![true, false, true]);
    }

    #[test]
    fn unmounted_region_is_never_in_view() {
        let mut watcher = ViewportWatcher::default();
        let (seen, listener) = recorder();
        let id = watcher.watch(WatchOptions::continuous(), Box::new(|| None), listener);
        deliver_all(&mut watcher);
        assert!(!watcher.is_in_view(id));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unwatch_stops_notifications() {
        let mut watcher = ViewportWatcher::default();
        let (top, probe) = movable(200.0);
        let (seen, listener) = recorder();
        let id = watcher.watch(WatchOptions::continuous(), probe, listener);
        assert!(watcher.unwatch(id));
        assert!(!watcher.unwatch(id));
        assert!(watcher.is_empty());
        top.set(100.0);
        deliver_all(&mut watcher);
        assert!(seen.borrow().is_empty());
        assert!(!watcher.is_in_view(id));
    }

    #[test]
    fn rewatched_region_reports_its_own_state_without_notifying() {
        let mut watcher = ViewportWatcher::default();
        let (top, probe) = movable(200.0);
        let (seen, listener) = recorder();
        let first = watcher.watch(WatchOptions::continuous(), probe, listener);
        top.set(100.0);
        deliver_all(&mut watcher);
        assert!(watcher.is_in_view(first));
        watcher.unwatch(first);

        // Registered again after the region left the viewport: the fresh
        // state starts hidden, so no change is ever delivered and the caller
        // has to read the current value instead.
        let (top, probe) = movable(200.0);
        let (again, listener) = recorder();
        let second = watcher.watch(WatchOptions::continuous(), probe, listener);
        top.set(3000.0);
        deliver_all(&mut watcher);
        assert!(again.borrow().is_empty());
        assert!(!watcher.is_in_view(second));
        assert_eq!(*seen.borrow(), vec![true]);
        assert_eq!(watcher.len(), 1);
    }

    #[test]
    fn card_threshold_fires_before_card_is_centered() {
        // Full-height card scrolling up from below with the deck's settings.
        let options = WatchOptions::continuous()
            .amount(0.4)
            .margin(Margin::parse("0px 0px -200px 0px").unwrap());
        let mut watcher = ViewportWatcher::default();
        let (top, probe) = movable(800.0);
        let (seen, listener) = recorder();
        let id = watcher.watch(options, probe, listener);

        top.set(400.0); // 200px inside the shrunk root: ratio 0.25
        deliver_all(&mut watcher);
        assert!(!watcher.is_in_view(id));

        top.set(250.0); // 350px inside: ratio 0.4375
        deliver_all(&mut watcher);
        assert!(watcher.is_in_view(id));
        assert_eq!(*seen.borrow(), vec![true]);
    }
}
