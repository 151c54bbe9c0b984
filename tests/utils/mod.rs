#![allow(dead_code)]

/// Run-length encode a payload the way the game does: runs of three or more
/// bytes become run chunks, everything else literal chunks.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut literal: Vec<u8> = Vec::new();
    let mut i = 0;

    while i < data.len() {
        let value = data[i];
        let run = data[i..]
            .iter()
            .take(128)
            .take_while(|&&x| x == value)
            .count();

        if run >= 3 {
            flush_literal(&mut out, &mut literal);
            out.push((run + 127) as u8);
            out.push(value);
            i += run;
        } else {
            literal.push(value);
            if literal.len() == 127 {
                flush_literal(&mut out, &mut literal);
            }
            i += 1;
        }
    }

    flush_literal(&mut out, &mut literal);
    out
}

fn flush_literal(out: &mut Vec<u8>, literal: &mut Vec<u8>) {
    if !literal.is_empty() {
        out.push(literal.len() as u8);
        out.append(literal);
    }
}

/// Assembles a save file in memory
#[derive(Debug, Default)]
pub struct SaveBuilder {
    segments: Vec<u8>,
}

impl SaveBuilder {
    pub fn new() -> Self {
        SaveBuilder::default()
    }

    /// Append a segment with the payload stored as is
    pub fn raw(mut self, title: &[u8; 4], payload: &[u8]) -> Self {
        self.segments.extend_from_slice(title);
        self.segments
            .extend_from_slice(&(payload.len() as u32).to_be_bytes());
        self.segments.extend_from_slice(payload);
        self
    }

    /// Append a segment, compressing the payload unless the title is stored
    /// uncompressed
    pub fn segment(self, title: &[u8; 4], payload: &[u8]) -> Self {
        if title == b"ALTM" || title == b"CNAM" {
            self.raw(title, payload)
        } else {
            let compressed = compress(payload);
            self.raw(title, &compressed)
        }
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = b"FORM".to_vec();
        out.extend_from_slice(&((self.segments.len() + 4) as u32).to_be_bytes());
        out.extend_from_slice(b"SCDH");
        out.extend_from_slice(&self.segments);
        out
    }
}

/// A one byte per tile payload with every tile set to `value`
pub fn grid(value: u8) -> Vec<u8> {
    vec![value; 128 * 128]
}

/// A `MISC` payload with the given founding year, days elapsed, funds, and
/// population
pub fn misc(founded: i32, days: i32, money: i32, population: i32) -> Vec<u8> {
    let mut words = vec![0i32; 1200];
    words[3] = founded;
    words[4] = days;
    words[5] = money;
    words[20] = population;
    words.iter().flat_map(|x| x.to_be_bytes()).collect()
}

pub fn city_name(name: &str) -> Vec<u8> {
    let mut out = vec![name.len() as u8];
    out.extend_from_slice(name.as_bytes());
    out.resize(33, 0);
    out
}
