//! Loading indicator frames.

/// Frames cycled while a request is in flight.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return the frame for the given spinner index.
///
pub fn frame(index: usize) -> &'static str {
    FRAMES[index % FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_wraps() {
        assert_eq!(frame(0), FRAMES[0]);
        assert_eq!(frame(FRAMES.len() + 1), FRAMES[1]);
    }
}
