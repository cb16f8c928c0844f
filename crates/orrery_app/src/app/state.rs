use input_bindings::KeyBindings;
use orrery_core::SimInput;
use render_wgpu::winit::event::WindowEvent;

/// Inputs collected between two frames, applied in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<SimInput>,
}

impl InputQueue {
    pub fn on_event(&mut self, bindings: &KeyBindings, e: &WindowEvent) {
        if let Some(input) = bindings.translate(e) {
            self.push(input);
        }
    }

    pub fn push(&mut self, input: SimInput) {
        self.pending.push(input);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, SimInput> {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_order_and_empties() {
        let keys = KeyBindings::default();
        let mut queue = InputQueue::default();
        queue.push(SimInput::SpeedUp);
        queue.on_event(&keys, &WindowEvent::CloseRequested);
        queue.on_event(&keys, &WindowEvent::Focused(false));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![SimInput::SpeedUp, SimInput::Quit]);
        assert!(queue.is_empty());
    }
}
