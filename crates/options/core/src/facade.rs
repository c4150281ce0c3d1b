//! Settings facade: typed and by-name access to the host's runtime options.
//!
//! [`RuntimeOptions`] never raises an error. Unknown names read as `false` /
//! `0` and write as a no-op; malformed values go through the total casts in
//! [`crate::cast`]. Reads always go to the host and writes reach the host
//! before the call returns, so there is nothing to cache or flush.
use crate::cast::{to_boolean, to_number};
use crate::host::{Host, RuntimeOptionsPatch, StageSize};
use crate::limit::CloneLimit;
use crate::setting::{Dimension, NumberSetting, Scalar, Toggle};
use crate::value::ArgValue;

/// Facade over an injected host.
///
/// `H` may be an owned host, `&mut` to one, a `Box<dyn Host>`, or any shared
/// handle that implements the host traits. The facade takes no locks; callers
/// sharing a host across threads serialize access themselves.
#[derive(Debug)]
pub struct RuntimeOptions<H> {
    host: H,
}

impl<H: Host> RuntimeOptions<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    // ===== toggles =====

    pub fn is_enabled(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::TurboMode => self.host.turbo_mode(),
            Toggle::Interpolation => self.host.interpolation(),
            Toggle::RemoveFencing => !self.host.runtime_options().fencing,
            Toggle::RemoveMiscLimits => !self.host.runtime_options().misc_limits,
            Toggle::HighQualityPen => self.host.high_quality_render(),
        }
    }

    pub fn set_enabled(&mut self, toggle: Toggle, enabled: bool) {
        match toggle {
            Toggle::TurboMode => self.host.set_turbo_mode(enabled),
            Toggle::Interpolation => self.host.set_interpolation(enabled),
            Toggle::RemoveFencing => self
                .host
                .set_runtime_options(RuntimeOptionsPatch::new().fencing(!enabled)),
            Toggle::RemoveMiscLimits => self
                .host
                .set_runtime_options(RuntimeOptionsPatch::new().misc_limits(!enabled)),
            Toggle::HighQualityPen => self.host.set_high_quality_render(enabled),
        }
    }

    /// Reads a toggle by menu name; unknown names read as `false`.
    pub fn get_toggle(&self, name: &str) -> bool {
        Toggle::from_name(name).is_some_and(|toggle| self.is_enabled(toggle))
    }

    /// Writes a toggle by menu name; unknown names are ignored.
    pub fn set_toggle(&mut self, name: &str, raw: &ArgValue) {
        if let Some(toggle) = Toggle::from_name(name) {
            self.set_enabled(toggle, to_boolean(raw));
        }
    }

    // ===== numbers =====

    pub fn framerate(&self) -> f64 {
        self.host.framerate()
    }

    pub fn set_framerate(&mut self, raw: &ArgValue) {
        self.host.set_framerate(to_number(raw));
    }

    pub fn clone_limit(&self) -> CloneLimit {
        self.host.runtime_options().max_clones
    }

    pub fn set_clone_limit(&mut self, raw: &ArgValue) {
        self.host
            .set_runtime_options(RuntimeOptionsPatch::new().max_clones(CloneLimit::from_arg(raw)));
    }

    pub fn stage_size(&self) -> StageSize {
        self.host.stage_size()
    }

    pub fn dimension(&self, dimension: Dimension) -> f64 {
        let size = self.host.stage_size();
        match dimension {
            Dimension::Width => size.width,
            Dimension::Height => size.height,
        }
    }

    /// Reads a stage dimension by menu name; unknown names read as `0`.
    pub fn get_dimension(&self, name: &str) -> f64 {
        Dimension::from_name(name).map_or(0.0, |dimension| self.dimension(dimension))
    }

    /// Resizes the stage in one host call.
    ///
    /// There is no single-side variant: to change one side, read the other
    /// and pass it back unchanged.
    pub fn set_dimensions(&mut self, width: &ArgValue, height: &ArgValue) {
        self.host.set_stage_size(to_number(width), to_number(height));
    }

    /// Numeric read; an unbounded clone limit reads as `f64::INFINITY`.
    pub fn get_number(&self, kind: NumberSetting) -> f64 {
        match kind {
            NumberSetting::Framerate => self.framerate(),
            NumberSetting::CloneLimit => self.clone_limit().as_number(),
            NumberSetting::Width => self.dimension(Dimension::Width),
            NumberSetting::Height => self.dimension(Dimension::Height),
        }
    }

    /// Numeric read by name; unknown names read as `0`.
    pub fn get_number_by_name(&self, name: &str) -> f64 {
        NumberSetting::from_name(name).map_or(0.0, |kind| self.get_number(kind))
    }

    pub fn set_number(&mut self, kind: Scalar, raw: &ArgValue) {
        match kind {
            Scalar::Framerate => self.set_framerate(raw),
            Scalar::CloneLimit => self.set_clone_limit(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{RenderHost, RuntimeOptionsState, VmHost};
    use crate::setting::{HostField, Normalization, descriptors};
    use strum::IntoEnumIterator;

    /// Host double recording stage resize calls.
    #[derive(Debug, Default)]
    struct FakeHost {
        turbo: bool,
        interpolation: bool,
        options: RuntimeOptionsState,
        framerate: f64,
        stage: StageSize,
        high_quality: bool,
        resize_calls: Vec<(f64, f64)>,
    }

    impl VmHost for FakeHost {
        fn turbo_mode(&self) -> bool {
            self.turbo
        }

        fn set_turbo_mode(&mut self, enabled: bool) {
            self.turbo = enabled;
        }

        fn interpolation(&self) -> bool {
            self.interpolation
        }

        fn set_interpolation(&mut self, enabled: bool) {
            self.interpolation = enabled;
        }

        fn runtime_options(&self) -> RuntimeOptionsState {
            self.options
        }

        fn set_runtime_options(&mut self, patch: RuntimeOptionsPatch) {
            patch.apply_to(&mut self.options);
        }

        fn framerate(&self) -> f64 {
            self.framerate
        }

        fn set_framerate(&mut self, fps: f64) {
            self.framerate = fps;
        }

        fn stage_size(&self) -> StageSize {
            self.stage
        }

        fn set_stage_size(&mut self, width: f64, height: f64) {
            self.resize_calls.push((width, height));
            self.stage = StageSize::new(width, height);
        }
    }

    impl RenderHost for FakeHost {
        fn high_quality_render(&self) -> bool {
            self.high_quality
        }

        fn set_high_quality_render(&mut self, enabled: bool) {
            self.high_quality = enabled;
        }
    }

    fn facade() -> RuntimeOptions<FakeHost> {
        RuntimeOptions::new(FakeHost {
            framerate: 30.0,
            ..FakeHost::default()
        })
    }

    fn text(value: &str) -> ArgValue {
        ArgValue::text(value)
    }

    fn host_flag(host: &FakeHost, field: HostField) -> bool {
        match field {
            HostField::TurboMode => host.turbo,
            HostField::Interpolation => host.interpolation,
            HostField::Fencing => host.options.fencing,
            HostField::MiscLimits => host.options.misc_limits,
            HostField::HighQualityRender => host.high_quality,
            other => panic!("{other} is not a flag"),
        }
    }

    fn host_number(host: &FakeHost, field: HostField) -> f64 {
        match field {
            HostField::Framerate => host.framerate,
            HostField::MaxClones => host.options.max_clones.as_number(),
            HostField::StageWidth => host.stage.width,
            HostField::StageHeight => host.stage.height,
            other => panic!("{other} is not a number"),
        }
    }

    /// Writes one numeric setting, passing the other stage side back unchanged.
    fn write_number(options: &mut RuntimeOptions<FakeHost>, kind: NumberSetting, raw: &ArgValue) {
        match kind {
            NumberSetting::Framerate => options.set_number(Scalar::Framerate, raw),
            NumberSetting::CloneLimit => options.set_number(Scalar::CloneLimit, raw),
            NumberSetting::Width => {
                let height = ArgValue::Number(options.dimension(Dimension::Height));
                options.set_dimensions(raw, &height);
            }
            NumberSetting::Height => {
                let width = ArgValue::Number(options.dimension(Dimension::Width));
                options.set_dimensions(&width, raw);
            }
        }
    }

    #[test]
    fn toggles_read_back_the_cast_value() {
        let mut options = facade();

        for toggle in Toggle::iter() {
            for (raw, expected) in [
                (text("true"), true),
                (text("false"), false),
                (text("FALSE"), false),
                (text("yes"), true),
                (text("0"), false),
                (ArgValue::Number(1.0), true),
                (ArgValue::Empty, false),
            ] {
                options.set_toggle(toggle.name(), &raw);
                assert_eq!(options.get_toggle(toggle.name()), expected, "{toggle} <- {raw:?}");
                assert_eq!(options.is_enabled(toggle), expected);
            }
        }
    }

    #[test]
    fn setting_twice_matches_setting_once() {
        let mut once = facade();
        let mut twice = facade();

        once.set_toggle("interpolation", &text("true"));
        twice.set_toggle("interpolation", &text("true"));
        twice.set_toggle("interpolation", &text("true"));

        assert_eq!(once.host().interpolation, twice.host().interpolation);
        assert_eq!(once.host().options, twice.host().options);
    }

    #[test]
    fn remove_fencing_inverts_host_flag() {
        let mut options = facade();

        options.set_toggle("remove fencing", &ArgValue::Bool(true));
        assert!(!options.host().options.fencing);

        options.set_toggle("remove fencing", &ArgValue::Bool(false));
        assert!(options.host().options.fencing);
    }

    #[test]
    fn remove_misc_limits_inverts_host_flag() {
        let mut options = facade();
        assert!(!options.is_enabled(Toggle::RemoveMiscLimits));

        options.set_enabled(Toggle::RemoveMiscLimits, true);
        assert!(!options.host().options.misc_limits);
        assert!(options.is_enabled(Toggle::RemoveMiscLimits));
        // Neighbouring options untouched by the partial update.
        assert!(options.host().options.fencing);
        assert_eq!(options.host().options.max_clones, CloneLimit::DEFAULT);
    }

    #[test]
    fn high_quality_pen_goes_to_renderer() {
        let mut options = facade();

        options.set_toggle("high quality pen", &text("true"));

        assert!(options.host().high_quality);
        assert!(!options.host().turbo);
    }

    #[test]
    fn unknown_toggle_reads_false_and_writes_nothing() {
        let mut options = facade();
        options.set_enabled(Toggle::TurboMode, true);

        assert!(!options.get_toggle("nonexistent"));
        assert!(!options.get_toggle("Turbo Mode"));

        options.set_toggle("nonexistent", &text("false"));
        assert!(options.host().turbo);
        assert!(options.host().options.fencing);
    }

    #[test]
    fn framerate_cast() {
        let mut options = facade();

        options.set_number(Scalar::Framerate, &text("30"));
        assert_eq!(options.get_number(NumberSetting::Framerate), 30.0);

        options.set_number(Scalar::Framerate, &text("60"));
        assert_eq!(options.framerate(), 60.0);

        options.set_number(Scalar::Framerate, &text("not-a-number"));
        assert_eq!(options.get_number(NumberSetting::Framerate), 0.0);
    }

    #[test]
    fn clone_limit_keeps_unbounded_sentinel() {
        let mut options = facade();

        options.set_number(Scalar::CloneLimit, &text("Infinity"));
        assert_eq!(options.clone_limit(), CloneLimit::Unbounded);
        assert_eq!(options.get_number(NumberSetting::CloneLimit), f64::INFINITY);

        options.set_number(Scalar::CloneLimit, &text("300"));
        assert_eq!(options.clone_limit(), CloneLimit::Limited(300.0));

        options.set_number(Scalar::CloneLimit, &text("bogus"));
        assert_eq!(options.clone_limit(), CloneLimit::Limited(0.0));
    }

    #[test]
    fn dimensions_are_written_together() {
        let mut options = facade();

        options.set_dimensions(&ArgValue::Number(480.0), &ArgValue::Number(360.0));
        assert_eq!(options.get_dimension("width"), 480.0);
        assert_eq!(options.get_dimension("height"), 360.0);

        // Changing one side means passing the other back unchanged.
        let height = ArgValue::Number(options.dimension(Dimension::Height));
        options.set_dimensions(&text("640"), &height);

        assert_eq!(options.stage_size(), StageSize::new(640.0, 360.0));
        assert_eq!(options.host().resize_calls, [(480.0, 360.0), (640.0, 360.0)]);
    }

    #[test]
    fn malformed_dimensions_become_zero() {
        let mut options = facade();

        options.set_dimensions(&text("wide"), &ArgValue::Empty);

        assert_eq!(options.stage_size(), StageSize::new(0.0, 0.0));
    }

    #[test]
    fn unknown_numbers_read_zero() {
        let options = facade();

        assert_eq!(options.get_dimension("depth"), 0.0);
        assert_eq!(options.get_number_by_name("speed"), 0.0);
        assert_eq!(options.get_number_by_name("framerate"), 30.0);
    }

    #[test]
    fn descriptor_table_matches_setters() {
        for descriptor in descriptors() {
            let mut options = facade();

            match descriptor.rule {
                Normalization::Boolean | Normalization::InvertedBoolean => {
                    options.set_toggle(descriptor.name, &text("true"));

                    let stored = host_flag(options.host(), descriptor.field);
                    let inverted = descriptor.rule == Normalization::InvertedBoolean;
                    assert_eq!(stored, !inverted, "{} -> {}", descriptor.name, descriptor.field);
                    assert!(options.get_toggle(descriptor.name));
                }
                Normalization::Number | Normalization::NumberOrUnbounded => {
                    let kind = NumberSetting::from_name(descriptor.name).unwrap();

                    write_number(&mut options, kind, &text("42"));
                    assert_eq!(host_number(options.host(), descriptor.field), 42.0);

                    write_number(&mut options, kind, &text("Infinity"));
                    assert_eq!(host_number(options.host(), descriptor.field), f64::INFINITY);
                    assert_eq!(options.get_number(kind), f64::INFINITY);

                    let unbounded = options.clone_limit().is_unbounded();
                    assert_eq!(
                        unbounded,
                        descriptor.rule == Normalization::NumberOrUnbounded,
                        "{}",
                        descriptor.name
                    );
                }
            }
        }
    }

    #[test]
    fn works_through_borrowed_and_boxed_hosts() {
        let mut host = FakeHost::default();
        {
            let mut options = RuntimeOptions::new(&mut host);
            options.set_enabled(Toggle::TurboMode, true);
        }
        assert!(host.turbo);

        let mut boxed = RuntimeOptions::new(Box::new(host));
        boxed.set_framerate(&ArgValue::Number(24.0));
        assert_eq!(boxed.into_host().framerate, 24.0);
    }
}
