/*!
Most segments in a SimCity 2000 save are compressed with a simple run-length
encoding. The compressed payload is a series of chunks, each introduced by a
control byte:

 - `1..=127`: a literal chunk. The control byte is the number of data bytes that
   follow and are copied verbatim.
 - `129..=255`: a run chunk. Subtracting 127 from the control byte yields how
   many times the single following data byte is repeated.

Control bytes 0 and 128 are not written by the game. They are tolerated: 0
decodes as an empty literal and 128 as a run of one.
*/

use crate::RleError;
use log::trace;

/// Decompress a run-length encoded segment payload.
///
/// ```
/// use sc2ksave::rle::decompress;
/// let data = decompress(&[2, 34, 55, 130, 255]).unwrap();
/// assert_eq!(data, vec![34, 55, 255, 255, 255]);
/// ```
///
/// A chunk that declares more data than the input holds is an error rather
/// than a short read.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, RleError> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut pos = 0;

    while let Some(&control) = data.get(pos) {
        let rest = &data[pos + 1..];
        if control < 128 {
            let len = usize::from(control);
            let literal = rest.get(..len).ok_or(RleError {
                offset: pos,
                needed: len,
                available: rest.len(),
            })?;
            out.extend_from_slice(literal);
            pos += 1 + len;
        } else {
            let count = usize::from(control - 127);
            let &value = rest.first().ok_or(RleError {
                offset: pos,
                needed: 1,
                available: 0,
            })?;
            out.resize(out.len() + count, value);
            pos += 2;
        }
    }

    trace!("decompressed {} bytes into {}", data.len(), out.len());
    Ok(out)
}
