//! Decoder configuration.

/// What to do when a fixed-width digit payload (base2, base8) does not
/// split into whole groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Misaligned {
    /// Fail with a length error.
    #[default]
    Reject,
    /// Left-pad the payload with `'0'` to the next whole group, as early
    /// binary decoders did. `"0101"` then decodes to `[0x05]`.
    ZeroPad,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub misaligned: Misaligned,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn misaligned(mut self, misaligned: Misaligned) -> Self {
        self.misaligned = misaligned;
        self
    }
}
