//! Size constraints handed to widgets during measurement

/// One-dimensional size constraint from the parent layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The parent decided the size
    Exactly(u32),
    /// The widget may be as large as it wants, up to this size
    AtMost(u32),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// The exact size, if the parent imposed one
    pub fn exact(&self) -> Option<u32> {
        match self {
            MeasureSpec::Exactly(size) => Some(*size),
            _ => None,
        }
    }

    /// Resolve a widget's natural size against this constraint
    pub fn resolve(&self, natural: u32) -> u32 {
        match *self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(limit) => natural.min(limit),
            MeasureSpec::Unspecified => natural,
        }
    }
}

/// Resolved widget size in whole pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasuredSize {
    pub width: u32,
    pub height: u32,
}

impl MeasuredSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(MeasureSpec::Exactly(40).resolve(100), 40);
        assert_eq!(MeasureSpec::Exactly(40).resolve(10), 40);
        assert_eq!(MeasureSpec::AtMost(40).resolve(100), 40);
        assert_eq!(MeasureSpec::AtMost(40).resolve(10), 10);
        assert_eq!(MeasureSpec::Unspecified.resolve(100), 100);
    }

    #[test]
    fn test_exact() {
        assert_eq!(MeasureSpec::Exactly(7).exact(), Some(7));
        assert_eq!(MeasureSpec::AtMost(7).exact(), None);
        assert_eq!(MeasureSpec::Unspecified.exact(), None);
    }
}
