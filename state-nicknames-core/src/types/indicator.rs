//! 加载指示器

/// Braille spinner frames
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 由布尔值驱动的加载指示器
///
/// 停止时隐藏。只有 `start()` 能让它转起来，`tick()` 在停止状态下不做任何事。
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    animating: bool,
    frame: usize,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始转动（从第一帧开始）
    pub fn start(&mut self) {
        self.animating = true;
        self.frame = 0;
    }

    /// 停止并隐藏
    pub fn stop(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// 前进一帧
    pub fn tick(&mut self) {
        if self.animating {
            self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// 当前帧；停止时返回 `None`
    pub fn current_frame(&self) -> Option<&'static str> {
        self.animating.then(|| SPINNER_FRAMES[self.frame])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_when_stopped() {
        let indicator = LoadingIndicator::new();
        assert!(!indicator.is_animating());
        assert_eq!(indicator.current_frame(), None);
    }

    #[test]
    fn tick_does_not_start_a_stopped_indicator() {
        let mut indicator = LoadingIndicator::new();
        indicator.tick();
        indicator.tick();
        assert!(!indicator.is_animating());
    }

    #[test]
    fn tick_wraps_around_frames() {
        let mut indicator = LoadingIndicator::new();
        indicator.start();
        for _ in 0..SPINNER_FRAMES.len() {
            indicator.tick();
        }
        assert_eq!(indicator.current_frame(), Some(SPINNER_FRAMES[0]));
    }

    #[test]
    fn restart_resets_frame() {
        let mut indicator = LoadingIndicator::new();
        indicator.start();
        indicator.tick();
        indicator.stop();
        indicator.start();
        assert_eq!(indicator.current_frame(), Some(SPINNER_FRAMES[0]));
    }
}
