//! Per-device record of every input that has ever fired
//!
//! A [`ControllerTracker`] only grows: once a button has been seen down or an
//! axis has left its deadzone, it stays listed for the rest of the session.
//! Iteration always follows the canonical order of the [`InputDomain`], no
//! matter in which order inputs were discovered.

use super::domain::{canonical_rank, DeviceId, InputDomain};
use super::source::InputSource;
use egui::Color32;
use gilrs::{Axis, Button};
use tracing::debug;

/// Axis readings at or below this magnitude are treated as noise
pub const AXIS_DEADZONE: f32 = 0.001;

/// Append-only set over a fixed, ordered domain
#[derive(Debug, Clone)]
pub struct ObservedSet<K: 'static> {
    domain: &'static [K],
    seen: Vec<bool>,
    len: usize,
}

impl<K: Copy + PartialEq> ObservedSet<K> {
    /// Empty set over `domain`
    pub fn new(domain: &'static [K]) -> Self {
        Self {
            domain,
            seen: vec![false; domain.len()],
            len: 0,
        }
    }

    /// Record `kind`. Returns `true` only when it was not known before.
    ///
    /// Kinds outside the domain are ignored.
    pub fn insert(&mut self, kind: K) -> bool {
        let Some(rank) = canonical_rank(self.domain, kind) else {
            return false;
        };
        if self.seen[rank] {
            return false;
        }
        self.seen[rank] = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, kind: K) -> bool {
        canonical_rank(self.domain, kind).is_some_and(|rank| self.seen[rank])
    }

    /// Recorded kinds in canonical order
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.domain
            .iter()
            .zip(&self.seen)
            .filter(|(_, seen)| **seen)
            .map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Colors used to draw one device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStyle {
    /// Active fill color
    pub foreground: Color32,
    /// Outline and text color
    pub background: Color32,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            foreground: Color32::from_rgb(230, 41, 55),
            background: Color32::BLACK,
        }
    }
}

/// Observation state for a single controller
#[derive(Debug, Clone)]
pub struct ControllerTracker {
    device: DeviceId,
    domain: InputDomain,
    buttons: ObservedSet<Button>,
    axes: ObservedSet<Axis>,
    style: DisplayStyle,
}

impl ControllerTracker {
    /// Start tracking `device` with nothing observed yet
    pub fn new(device: DeviceId, domain: InputDomain) -> Self {
        Self {
            device,
            domain,
            buttons: ObservedSet::new(domain.buttons),
            axes: ObservedSet::new(domain.axes),
            style: DisplayStyle::default(),
        }
    }

    /// Sample every button and axis of the domain and record the active ones
    ///
    /// Returns `true` if anything new was recorded this call.
    pub fn update<S: InputSource + ?Sized>(&mut self, source: &S) -> bool {
        let mut discovered = false;

        for &button in self.domain.buttons {
            if !source.is_button_down(self.device, button) {
                continue;
            }
            if self.buttons.insert(button) {
                debug!("Device {} reported new button {:?}", self.device, button);
                discovered = true;
            }
        }

        for &axis in self.domain.axes {
            let value = source.axis_movement(self.device, axis);
            if value.abs() <= AXIS_DEADZONE {
                continue;
            }
            if self.axes.insert(axis) {
                debug!("Device {} reported new axis {:?} ({:.3})", self.device, axis, value);
                discovered = true;
            }
        }

        discovered
    }

    pub fn device(&self) -> DeviceId {
        self.device
    }

    /// Observed buttons in canonical order
    pub fn buttons(&self) -> impl Iterator<Item = Button> + '_ {
        self.buttons.iter()
    }

    /// Observed axes in canonical order
    pub fn axes(&self) -> impl Iterator<Item = Axis> + '_ {
        self.axes.iter()
    }

    pub fn has_button(&self, button: Button) -> bool {
        self.buttons.contains(button)
    }

    pub fn has_axis(&self, axis: Axis) -> bool {
        self.axes.contains(axis)
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn observed_axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn style(&self) -> DisplayStyle {
        self.style
    }

    pub fn set_style(&mut self, style: DisplayStyle) {
        self.style = style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::gamepad::domain::{AXES, BUTTONS};
    use crate::testing::ScriptedSource;
    use proptest::prelude::*;

    const PAD: DeviceId = DeviceId(0);

    fn connected_source() -> ScriptedSource {
        let mut source = ScriptedSource::new();
        source.connect(PAD, "Test Pad");
        source
    }

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = ControllerTracker::new(PAD, InputDomain::default());
        assert_eq!(tracker.buttons().count(), 0);
        assert_eq!(tracker.axes().count(), 0);
        assert_eq!(tracker.style(), DisplayStyle::default());
    }

    #[test]
    fn test_button_stays_recorded_after_release() {
        let mut source = connected_source();
        let mut tracker = ControllerTracker::new(PAD, InputDomain::default());

        source.hold(PAD, Button::South);
        for frame in 1..=3 {
            source.advance_frame();
            let discovered = tracker.update(&source);
            assert_eq!(discovered, frame == 1);
            assert!(tracker.has_button(Button::South));
        }

        source.release(PAD, Button::South);
        source.advance_frame();
        assert!(!tracker.update(&source));
        assert!(tracker.has_button(Button::South));
        assert_eq!(tracker.button_count(), 1);
    }

    #[test]
    fn test_deadzone_boundary_is_excluded() {
        let mut source = connected_source();
        let mut tracker = ControllerTracker::new(PAD, InputDomain::default());

        source.set_axis(PAD, Axis::LeftStickX, AXIS_DEADZONE);
        source.set_axis(PAD, Axis::LeftStickY, -AXIS_DEADZONE);
        tracker.update(&source);
        assert_eq!(tracker.observed_axis_count(), 0);

        source.set_axis(PAD, Axis::LeftStickX, 0.002);
        source.set_axis(PAD, Axis::LeftStickY, -0.002);
        tracker.update(&source);
        assert!(tracker.has_axis(Axis::LeftStickX));
        assert!(tracker.has_axis(Axis::LeftStickY));
    }

    #[test]
    fn test_axes_iterate_in_canonical_order() {
        let mut source = connected_source();
        let mut tracker = ControllerTracker::new(PAD, InputDomain::default());

        source.set_axis(PAD, Axis::RightZ, 0.5);
        tracker.update(&source);
        source.set_axis(PAD, Axis::RightZ, 0.0);
        source.set_axis(PAD, Axis::LeftStickX, -0.5);
        tracker.update(&source);

        let axes: Vec<_> = tracker.axes().collect();
        assert_eq!(axes, vec![Axis::LeftStickX, Axis::RightZ]);
    }

    #[test]
    fn test_unavailable_device_records_nothing() {
        let source = ScriptedSource::new();
        let mut tracker = ControllerTracker::new(DeviceId(3), InputDomain::default());
        assert!(!tracker.update(&source));
        assert_eq!(tracker.button_count(), 0);
    }

    #[test]
    fn test_restricted_domain_ignores_other_kinds() {
        const ONLY_SOUTH: &[Button] = &[Button::South];
        const ONLY_LX: &[Axis] = &[Axis::LeftStickX];

        let mut source = connected_source();
        let mut tracker = ControllerTracker::new(PAD, InputDomain::new(ONLY_SOUTH, ONLY_LX));

        source.hold(PAD, Button::East);
        source.hold(PAD, Button::South);
        source.advance_frame();
        source.set_axis(PAD, Axis::RightStickX, 1.0);
        tracker.update(&source);

        assert_eq!(tracker.buttons().collect::<Vec<_>>(), vec![Button::South]);
        assert_eq!(tracker.observed_axis_count(), 0);
    }

    #[test]
    fn test_observed_set_insert_is_idempotent() {
        let mut set = ObservedSet::new(BUTTONS);
        assert!(set.insert(Button::North));
        assert!(!set.insert(Button::North));
        assert!(!set.insert(Button::Unknown));
        assert_eq!(set.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_sets_are_append_only(frames in prop::collection::vec(
            (prop::sample::subsequence(BUTTONS.to_vec(), 0..4),
             prop::collection::vec(-1.0f32..1.0, AXES.len())),
            1..12,
        )) {
            let mut source = connected_source();
            let mut tracker = ControllerTracker::new(PAD, InputDomain::default());

            for (held, axis_values) in frames {
                for &button in BUTTONS {
                    source.release(PAD, button);
                }
                for button in &held {
                    source.hold(PAD, *button);
                }
                for (axis, value) in AXES.iter().zip(&axis_values) {
                    source.set_axis(PAD, *axis, *value);
                }
                source.advance_frame();

                let buttons_before: Vec<_> = tracker.buttons().collect();
                let axes_before: Vec<_> = tracker.axes().collect();
                tracker.update(&source);

                for button in buttons_before {
                    prop_assert!(tracker.has_button(button));
                }
                for axis in axes_before {
                    prop_assert!(tracker.has_axis(axis));
                }
                for button in &held {
                    prop_assert!(tracker.has_button(*button));
                }
                for (axis, value) in AXES.iter().zip(&axis_values) {
                    if value.abs() > AXIS_DEADZONE {
                        prop_assert!(tracker.has_axis(*axis));
                    }
                }
            }
        }

        #[test]
        fn prop_small_axis_values_are_never_recorded(value in -AXIS_DEADZONE..=AXIS_DEADZONE) {
            let mut source = connected_source();
            let mut tracker = ControllerTracker::new(PAD, InputDomain::default());
            for &axis in AXES {
                source.set_axis(PAD, axis, value);
            }
            tracker.update(&source);
            prop_assert_eq!(tracker.observed_axis_count(), 0);
        }

        #[test]
        fn prop_order_ignores_insertion_order(
            kinds in prop::sample::subsequence(AXES.to_vec(), 0..AXES.len()).prop_shuffle()
        ) {
            let mut shuffled = ObservedSet::new(AXES);
            for axis in &kinds {
                shuffled.insert(*axis);
            }

            let canonical: Vec<_> = AXES.iter().copied().filter(|a| kinds.contains(a)).collect();
            prop_assert_eq!(shuffled.iter().collect::<Vec<_>>(), canonical);
        }
    }
}
