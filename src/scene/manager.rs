//! Active scene ownership

use crate::input::{FrameInput, InputEvent};
use crate::rasterizer::Framebuffer;
use crate::ui::TextPainter;

use super::Scene;

#[derive(Default)]
pub struct SceneManager {
    current: Option<Box<dyn Scene>>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `scene` active. The old scene's `exit` runs before the new
    /// scene's `enter`; the old scene is handed back to the caller.
    pub fn switch_to(&mut self, mut scene: Box<dyn Scene>) -> Option<Box<dyn Scene>> {
        let mut previous = self.current.take();
        if let Some(old) = previous.as_mut() {
            old.exit();
            tracing::info!(from = old.name(), to = scene.name(), "switching scene");
        }
        scene.enter();
        self.current = Some(scene);
        previous
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&dyn Scene> {
        self.current.as_deref()
    }

    pub fn handle_events(&mut self, events: &[InputEvent]) {
        if let Some(scene) = self.current.as_mut() {
            scene.handle_events(events);
        }
    }

    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        if let Some(scene) = self.current.as_mut() {
            scene.update(dt, input);
        }
    }

    pub fn draw(&mut self, fb: &mut Framebuffer) {
        if let Some(scene) = self.current.as_mut() {
            scene.draw(fb);
        }
    }

    pub fn draw_text(&self, text: &TextPainter) {
        if let Some(scene) = self.current.as_ref() {
            scene.draw_text(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recording {
        name: &'static str,
        log: Log,
    }

    impl Scene for Recording {
        fn name(&self) -> &str {
            self.name
        }

        fn enter(&mut self) {
            self.log.borrow_mut().push(format!("enter {}", self.name));
        }

        fn exit(&mut self) {
            self.log.borrow_mut().push(format!("exit {}", self.name));
        }

        fn handle_events(&mut self, events: &[InputEvent]) {
            self.log.borrow_mut().push(format!("events {} {}", self.name, events.len()));
        }

        fn update(&mut self, _dt: f32, _input: &FrameInput) {
            self.log.borrow_mut().push(format!("update {}", self.name));
        }

        fn draw(&mut self, _fb: &mut Framebuffer) {
            self.log.borrow_mut().push(format!("draw {}", self.name));
        }
    }

    fn scene(name: &'static str, log: &Log) -> Box<dyn Scene> {
        Box::new(Recording { name, log: log.clone() })
    }

    #[test]
    fn test_exit_before_enter() {
        let log: Log = Rc::default();
        let mut manager = SceneManager::new();

        assert!(manager.switch_to(scene("a", &log)).is_none());
        let old = manager.switch_to(scene("b", &log));
        assert_eq!(old.map(|s| s.name().to_string()), Some("a".to_string()));
        assert_eq!(manager.current().map(|s| s.name()), Some("b"));
        assert_eq!(*log.borrow(), vec!["enter a", "exit a", "enter b"]);
    }

    #[test]
    fn test_forwards_to_current_only() {
        let log: Log = Rc::default();
        let mut manager = SceneManager::new();
        let mut fb = Framebuffer::new(4, 4);

        // Nothing active: no-ops
        manager.update(0.1, &FrameInput::default());
        manager.draw(&mut fb);
        assert!(log.borrow().is_empty());

        manager.switch_to(scene("a", &log));
        manager.switch_to(scene("b", &log));
        log.borrow_mut().clear();

        manager.handle_events(&[]);
        manager.update(0.1, &FrameInput::default());
        manager.draw(&mut fb);
        assert_eq!(*log.borrow(), vec!["events b 0", "update b", "draw b"]);
    }
}
