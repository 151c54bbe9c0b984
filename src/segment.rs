use crate::{rle, Sc2kError, Sc2kErrorKind};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Four byte code naming a segment (eg: `XTER`)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentTitle([u8; 4]);

impl SegmentTitle {
    pub const ALTM: SegmentTitle = SegmentTitle(*b"ALTM");
    pub const CNAM: SegmentTitle = SegmentTitle(*b"CNAM");
    pub const XBIT: SegmentTitle = SegmentTitle(*b"XBIT");
    pub const XBLD: SegmentTitle = SegmentTitle(*b"XBLD");
    pub const XTER: SegmentTitle = SegmentTitle(*b"XTER");
    pub const XUND: SegmentTitle = SegmentTitle(*b"XUND");
    pub const XZON: SegmentTitle = SegmentTitle(*b"XZON");
    pub const XTXT: SegmentTitle = SegmentTitle(*b"XTXT");
    pub const XLAB: SegmentTitle = SegmentTitle(*b"XLAB");
    pub const MISC: SegmentTitle = SegmentTitle(*b"MISC");

    pub const fn new(code: [u8; 4]) -> Self {
        SegmentTitle(code)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Whether the payload of this segment is stored without run-length
    /// encoding
    pub fn is_uncompressed(&self) -> bool {
        UNCOMPRESSED_SEGMENTS.contains(self)
    }
}

/// Segments the game writes verbatim. Every other payload is run-length
/// encoded.
pub const UNCOMPRESSED_SEGMENTS: [SegmentTitle; 2] = [SegmentTitle::ALTM, SegmentTitle::CNAM];

impl From<[u8; 4]> for SegmentTitle {
    fn from(code: [u8; 4]) -> Self {
        SegmentTitle(code)
    }
}

impl fmt::Display for SegmentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", char::from(b))?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SegmentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentTitle({})", self)
    }
}

impl Serialize for SegmentTitle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A segment as it is laid out in the file: a title and its still compressed
/// payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    title: SegmentTitle,
    data: &'a [u8],
    offset: usize,
}

impl<'a> RawSegment<'a> {
    pub fn title(&self) -> SegmentTitle {
        self.title
    }

    /// The payload exactly as stored in the file
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Offset of the segment's title relative to the start of the segment
    /// stream
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_compressed(&self) -> bool {
        !self.title.is_uncompressed()
    }

    /// The payload with run-length encoding undone. Uncompressed segments are
    /// borrowed as is.
    pub fn decompress(&self) -> Result<Cow<'a, [u8]>, Sc2kError> {
        if !self.is_compressed() {
            return Ok(Cow::Borrowed(self.data));
        }

        let data = rle::decompress(self.data).map_err(|source| {
            Sc2kError::from(Sc2kErrorKind::MalformedSegment {
                title: self.title,
                source,
            })
        })?;

        Ok(Cow::Owned(data))
    }
}

const SEGMENT_HEADER_LEN: usize = 8;

/// Walks a stream of segments, each a 4 byte title, a big endian 4 byte
/// length, and that many bytes of payload.
///
/// The stream must be consumed exactly: trailing bytes that can't form a whole
/// segment are an error.
#[derive(Debug, Clone)]
pub struct SegmentReader<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> SegmentReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        SegmentReader::with_base(data, 0)
    }

    /// Errors report offsets shifted by `base` so they point into the whole
    /// file
    pub(crate) fn with_base(data: &'a [u8], base: usize) -> Self {
        SegmentReader { data, pos: 0, base }
    }

    fn malformed(&mut self, needed: usize) -> Sc2kError {
        let remaining = self.data.len() - self.pos;
        let offset = self.base + self.pos;
        self.pos = self.data.len();
        Sc2kError::from(Sc2kErrorKind::MalformedFile {
            offset,
            needed,
            remaining,
        })
    }
}

impl<'a> Iterator for SegmentReader<'a> {
    type Item = Result<RawSegment<'a>, Sc2kError>;

    fn next(&mut self) -> Option<Self::Item> {
        let stream: &'a [u8] = self.data;
        let rest = &stream[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let Some((header, body)) = rest.split_first_chunk::<SEGMENT_HEADER_LEN>() else {
            return Some(Err(self.malformed(SEGMENT_HEADER_LEN)));
        };

        let (title, len) = header.split_at(4);
        let title = SegmentTitle([title[0], title[1], title[2], title[3]]);
        let len = u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize;
        let Some(data) = body.get(..len) else {
            return Some(Err(self.malformed(SEGMENT_HEADER_LEN.saturating_add(len))));
        };

        let segment = RawSegment {
            title,
            data,
            offset: self.pos,
        };
        self.pos += SEGMENT_HEADER_LEN + len;
        Some(Ok(segment))
    }
}

/// Split a segment stream into its segments in file order. Titles may repeat.
///
/// ```
/// use sc2ksave::split;
/// let data = [b'A', b'B', b'C', b'D', 0, 0, 0, 3, 1, 2, 3];
/// let segments = split(&data).unwrap();
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].title().to_string(), "ABCD");
/// assert_eq!(segments[0].data(), &[1, 2, 3]);
/// ```
pub fn split(data: &[u8]) -> Result<Vec<RawSegment<'_>>, Sc2kError> {
    SegmentReader::new(data).collect()
}
