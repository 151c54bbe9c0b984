/*!
# SC2K Save

SC2K Save is a library to decode SimCity 2000 city saves into structured city and tile data.

```rust
use sc2ksave::{BasicBuildingResolver, DecodeOptions, Sc2kFile};

# let mut data = b"FORM\0\0\0\0SCDH".to_vec();
# data.extend_from_slice(b"CNAM\0\0\0\x0a\x09Sim Falls");
# data.extend_from_slice(b"XZON\0\0\0\x02\xff\xf4");
let file = Sc2kFile::from_slice(&data)?;

let names = BasicBuildingResolver::from_text_lines(&b"0xCC Solar power plant"[..])?;
let city = file.decode(DecodeOptions::new(), &names)?;
assert_eq!(city.city_name(), "Sim Falls");

let zone = city.tile(0, 0).and_then(|x| x.zone).expect("zoned tile");
assert!(zone.top_left && zone.bottom_right);
assert_eq!(zone.kind, 4);
# Ok::<(), Box<dyn std::error::Error>>(())
```

## Segments

A save is a sequence of titled segments, most of them run-length encoded.
The segments understood are:

| Title  | Contents                                   |
|--------|--------------------------------------------|
| `ALTM` | altitude and water presence per tile       |
| `CNAM` | city name                                  |
| `XBIT` | power, water, and piping flags per tile    |
| `XBLD` | building code per tile                     |
| `XTER` | terrain slope and water level per tile     |
| `XUND` | subways and pipes per tile                 |
| `XZON` | zoning per tile                            |
| `XTXT` | sign code per tile                         |
| `XLAB` | text labels                                |
| `MISC` | founding year, date, funds, and population |

Other segments are skipped by default. See [`UnknownSegmentStrategy`] to keep
or reject them instead.

Building names are not stored in the save. Supply them through a
[`BuildingResolver`].
*/

mod citydate;
mod errors;
pub mod file;
mod interpret;
pub mod models;
mod options;
mod resolver;
pub mod rle;
mod segment;

pub use citydate::*;
pub use errors::*;
#[doc(inline)]
pub use file::{decode, is_save_file, Sc2kFile};
pub use interpret::SegmentKind;
pub use options::*;
pub use resolver::*;
pub use segment::*;
