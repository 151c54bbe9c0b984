/*!
A SimCity 2000 save is an IFF style container:

 - `FORM`, the 4 byte container signature
 - 4 bytes that historically hold the file length. They are not validated.
 - `SCDH`, the 4 byte signature of a city save
 - a stream of segments, each a 4 byte title, a big endian 4 byte length, and
   that many bytes of payload

Every payload except `ALTM` and `CNAM` is run-length encoded (see
[`rle`](crate::rle)). Segments are decoded in file order. When a title
repeats, the later segment overwrites the fields the earlier one wrote.
*/

use crate::models::{DecodedCity, UnparsedSegment};
use crate::{
    BasicBuildingResolver, BuildingResolver, DecodeOptions, SegmentKind, SegmentReader,
    Sc2kError, Sc2kErrorKind, UnknownSegmentStrategy,
};
use log::{debug, trace};

const FORM_MAGIC: &[u8; 4] = b"FORM";
const SCDH_MAGIC: &[u8; 4] = b"SCDH";

/// Length of the container header preceding the segment stream
pub const HEADER_LEN: usize = 12;

/// Checks whether the data starts with a city save header
///
/// ```
/// use sc2ksave::is_save_file;
/// assert!(is_save_file(b"FORM\0\0\0\0SCDH"));
/// assert!(!is_save_file(b"FORM\0\0\0\0AIFF"));
/// assert!(!is_save_file(b"FORM"));
/// ```
pub fn is_save_file(data: &[u8]) -> bool {
    match data.first_chunk::<HEADER_LEN>() {
        Some(header) => &header[0..4] == FORM_MAGIC && &header[8..12] == SCDH_MAGIC,
        None => false,
    }
}

/// A save whose header has been validated
#[derive(Debug, Clone, Copy)]
pub struct Sc2kFile<'a> {
    data: &'a [u8],
}

impl<'a> Sc2kFile<'a> {
    /// Validate the header. No segment is read until asked for.
    pub fn from_slice(data: &'a [u8]) -> Result<Self, Sc2kError> {
        if !is_save_file(data) {
            return Err(Sc2kError::from(Sc2kErrorKind::NotASaveFile));
        }

        Ok(Sc2kFile { data })
    }

    /// The unchecked header field at bytes 4 through 7, which the game fills
    /// with the length of the file
    pub fn header_len_field(&self) -> u32 {
        let x = &self.data[4..8];
        u32::from_be_bytes([x[0], x[1], x[2], x[3]])
    }

    /// The segments following the header, in file order
    pub fn segments(&self) -> SegmentReader<'a> {
        SegmentReader::with_base(&self.data[HEADER_LEN..], HEADER_LEN)
    }

    /// Decode every segment into a city
    pub fn decode<R>(&self, options: DecodeOptions, resolver: R) -> Result<DecodedCity, Sc2kError>
    where
        R: BuildingResolver,
    {
        let mut city = DecodedCity::new();
        for segment in self.segments() {
            let segment = segment?;
            let title = segment.title();
            let data = segment.decompress()?;

            let Some(kind) = SegmentKind::from_title(title) else {
                match options.unknown_segment_strategy() {
                    UnknownSegmentStrategy::Ignore => {
                        debug!("skipping unknown segment {}", title);
                    }
                    UnknownSegmentStrategy::Retain => {
                        debug!("retaining unknown segment {}", title);
                        let data = data.into_owned();
                        city.unparsed_segments.push(UnparsedSegment { title, data });
                    }
                    UnknownSegmentStrategy::Error => {
                        return Err(Sc2kError::from(Sc2kErrorKind::UnknownSegment { title }));
                    }
                }
                continue;
            };

            trace!(
                "applying segment {} ({} bytes, {} decompressed)",
                title,
                segment.data().len(),
                data.len()
            );
            kind.apply(&data, &mut city, &resolver);
        }

        Ok(city)
    }
}

/// Decode a save with default options and without building names
///
/// ```
/// let mut data = b"FORM\0\0\0\0SCDH".to_vec();
/// data.extend_from_slice(b"CNAM\0\0\0\x04\x03Foo");
/// let city = sc2ksave::decode(&data)?;
/// assert_eq!(city.city_name(), "Foo");
/// assert_eq!(city.tiles().len(), 128 * 128);
/// # Ok::<(), sc2ksave::Sc2kError>(())
/// ```
pub fn decode(data: &[u8]) -> Result<DecodedCity, Sc2kError> {
    Sc2kFile::from_slice(data)?.decode(DecodeOptions::new(), BasicBuildingResolver::new())
}
