use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollSpeed {
    Slow,
    Normal,
    Fast,
}

impl ScrollSpeed {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "slow" => Some(Self::Slow),
            "normal" => Some(Self::Normal),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }

    /// Pixels moved per auto-scroll tick.
    pub fn step(self) -> f64 {
        match self {
            Self::Slow => 2.0,
            Self::Normal => 6.0,
            Self::Fast => 16.0,
        }
    }
}

/// Vertical scroll position of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollState {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollState {
    pub fn new(viewport_height: f64, document_height: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_height,
            document_height,
        }
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    pub fn at_top(&self) -> bool {
        self.offset <= 0.0
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Move by `amount` pixels in `direction`, clamped to the page.
    ///
    /// Returns true when the move ended on the bound it was heading for.
    pub fn advance(&mut self, direction: ScrollDirection, amount: f64) -> bool {
        match direction {
            ScrollDirection::Down => {
                self.offset = (self.offset + amount).min(self.max_offset());
                self.at_bottom()
            }
            ScrollDirection::Up => {
                self.offset = (self.offset - amount).max(0.0);
                self.at_top()
            }
        }
    }

    /// One full viewport in `direction`.
    pub fn page(&mut self, direction: ScrollDirection) -> bool {
        let amount = self.viewport_height;
        self.advance(direction, amount)
    }
}
