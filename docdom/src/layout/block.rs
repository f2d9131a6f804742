/// Vertical extent of a laid-out element, in lines from the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    pub top: u32,
    pub height: u32,
}

impl Block {
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub const fn bottom(&self) -> u32 {
        self.top + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub const fn contains(&self, y: u32) -> bool {
        y >= self.top && y < self.bottom()
    }
}
