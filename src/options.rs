/// What to do with a segment that no interpreter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownSegmentStrategy {
    /// Skip the segment
    #[default]
    Ignore,

    /// Decompress the segment and keep it in
    /// [`DecodedCity::unparsed_segments`](crate::models::DecodedCity::unparsed_segments)
    Retain,

    /// Fail the decode
    Error,
}

/// Options for decoding a save
///
/// ```
/// use sc2ksave::{DecodeOptions, UnknownSegmentStrategy};
/// let options = DecodeOptions::new().on_unknown_segment(UnknownSegmentStrategy::Retain);
/// assert_eq!(options.unknown_segment_strategy(), UnknownSegmentStrategy::Retain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    on_unknown_segment: UnknownSegmentStrategy,
}

impl DecodeOptions {
    pub fn new() -> Self {
        DecodeOptions::default()
    }

    pub fn on_unknown_segment(self, strategy: UnknownSegmentStrategy) -> Self {
        DecodeOptions {
            on_unknown_segment: strategy,
        }
    }

    pub fn unknown_segment_strategy(&self) -> UnknownSegmentStrategy {
        self.on_unknown_segment
    }
}
