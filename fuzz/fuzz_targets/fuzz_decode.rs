#![no_main]
use libfuzzer_sys::fuzz_target;
use sc2ksave::{BasicBuildingResolver, DecodeOptions, UnknownSegmentStrategy};

fn run(data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    let file = sc2ksave::Sc2kFile::from_slice(data)?;

    for segment in file.segments() {
        let _ = segment?.decompress();
    }

    let options = DecodeOptions::new().on_unknown_segment(UnknownSegmentStrategy::Retain);
    let city = file.decode(options, BasicBuildingResolver::new())?;
    assert_eq!(city.tiles().len(), sc2ksave::models::TILE_COUNT);
    let _ = city.current_date();

    Ok(())
}

fuzz_target!(|data: &[u8]| {
    let _ = run(data);
});
