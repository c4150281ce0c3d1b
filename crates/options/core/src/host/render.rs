/// Renderer quality switch.
pub trait RenderHost {
    /// Whether pen and stage are rendered at device resolution.
    fn high_quality_render(&self) -> bool;

    fn set_high_quality_render(&mut self, enabled: bool);
}

impl<T: RenderHost + ?Sized> RenderHost for &mut T {
    fn high_quality_render(&self) -> bool {
        (**self).high_quality_render()
    }

    fn set_high_quality_render(&mut self, enabled: bool) {
        (**self).set_high_quality_render(enabled)
    }
}

impl<T: RenderHost + ?Sized> RenderHost for Box<T> {
    fn high_quality_render(&self) -> bool {
        (**self).high_quality_render()
    }

    fn set_high_quality_render(&mut self, enabled: bool) {
        (**self).set_high_quality_render(enabled)
    }
}
