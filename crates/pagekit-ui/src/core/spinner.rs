//! In-flight counter behind the shared loading indicator.
//!
//! Overlapping requests share one indicator: it appears when the first request
//! starts and disappears when the last one settles.

/// Change the DOM layer must apply after a counter update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinnerTransition {
    /// Insert the indicator.
    Show,
    /// Remove the indicator.
    Hide,
    /// Leave the indicator as it is.
    Unchanged,
}

/// Reference count of operations that want the indicator visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpinnerCounter {
    in_flight: u32,
}

impl SpinnerCounter {
    /// Register one more operation.
    pub const fn acquire(&mut self) -> SpinnerTransition {
        self.in_flight = self.in_flight.saturating_add(1);
        if self.in_flight == 1 {
            SpinnerTransition::Show
        } else {
            SpinnerTransition::Unchanged
        }
    }

    /// Release one operation; releases without a matching acquire are ignored.
    pub const fn release(&mut self) -> SpinnerTransition {
        match self.in_flight {
            0 => SpinnerTransition::Unchanged,
            1 => {
                self.in_flight = 0;
                SpinnerTransition::Hide
            }
            _ => {
                self.in_flight -= 1;
                SpinnerTransition::Unchanged
            }
        }
    }

    /// Drop every registration.
    pub const fn reset(&mut self) -> SpinnerTransition {
        if self.in_flight == 0 {
            SpinnerTransition::Unchanged
        } else {
            self.in_flight = 0;
            SpinnerTransition::Hide
        }
    }

    /// Number of operations currently registered.
    #[must_use]
    pub const fn in_flight(self) -> u32 {
        self.in_flight
    }

    /// True while the indicator should be visible.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.in_flight > 0
    }
}

/// Surface that can show one loading indicator.
pub trait IndicatorHost {
    /// Handle to an inserted indicator.
    type Indicator;

    /// Insert a fresh indicator; `None` when the surface refused it.
    fn insert(&self) -> Option<Self::Indicator>;

    /// Remove an indicator previously returned by [`IndicatorHost::insert`].
    fn remove(&self, indicator: Self::Indicator);
}

/// Counter plus the indicator it put on the page.
///
/// Only the indicator this spinner inserted is ever removed; look-alike
/// elements owned by the page stay untouched.
#[derive(Debug)]
pub struct Spinner<I> {
    counter: SpinnerCounter,
    indicator: Option<I>,
}

impl<I> Default for Spinner<I> {
    fn default() -> Self {
        Self {
            counter: SpinnerCounter::default(),
            indicator: None,
        }
    }
}

impl<I> Spinner<I> {
    /// Register an operation, inserting the indicator on the first one.
    pub fn show<H: IndicatorHost<Indicator = I>>(&mut self, host: &H) {
        if self.counter.acquire() == SpinnerTransition::Show {
            self.indicator = host.insert();
        }
    }

    /// Release an operation, removing the indicator after the last one.
    pub fn hide<H: IndicatorHost<Indicator = I>>(&mut self, host: &H) {
        if self.counter.release() == SpinnerTransition::Hide
            && let Some(indicator) = self.indicator.take()
        {
            host.remove(indicator);
        }
    }

    /// True while an operation holds the indicator.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.counter.is_visible()
    }
}
