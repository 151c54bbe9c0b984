use std::collections::{BTreeMap, HashMap};
use std::io::{self, BufRead, BufReader, Read};

/// Maps a building code from the `XBLD` segment to a display name.
///
/// The table of names isn't part of the save, so callers bring their own. A
/// code without a name leaves the tile's `building_name` empty.
pub trait BuildingResolver {
    fn resolve(&self, code: u8) -> Option<&str>;
}

impl<S: AsRef<str>> BuildingResolver for HashMap<u8, S> {
    fn resolve(&self, code: u8) -> Option<&str> {
        self.get(&code).map(|x| x.as_ref())
    }
}

impl<S: AsRef<str>> BuildingResolver for BTreeMap<u8, S> {
    fn resolve(&self, code: u8) -> Option<&str> {
        self.get(&code).map(|x| x.as_ref())
    }
}

impl<T: BuildingResolver + ?Sized> BuildingResolver for &'_ T {
    fn resolve(&self, code: u8) -> Option<&str> {
        (**self).resolve(code)
    }
}

/// An owned building name table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicBuildingResolver {
    names: BTreeMap<u8, String>,
}

impl BasicBuildingResolver {
    pub fn new() -> Self {
        BasicBuildingResolver::default()
    }

    /// Register the name of a building code, replacing any previous name
    pub fn insert(&mut self, code: u8, name: impl Into<String>) -> &mut Self {
        self.names.insert(code, name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Read a newline delimited table where each line is a code followed by
    /// the name. Codes are hex with a `0x` prefix or decimal. Blank lines and
    /// lines starting with `#` are skipped.
    ///
    /// ```
    /// use sc2ksave::{BasicBuildingResolver, BuildingResolver};
    /// let data = b"# power\n0xCC Solar power plant\n204 Solar power plant\n0x01 Tree\n";
    /// let resolver = BasicBuildingResolver::from_text_lines(&data[..])?;
    /// assert_eq!(resolver.resolve(0xCC), Some("Solar power plant"));
    /// assert_eq!(resolver.resolve(0x02), None);
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn from_text_lines<R: Read>(reader: R) -> io::Result<Self> {
        let mut result = BasicBuildingResolver::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (code, name) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| invalid_line(idx, "expected a code and a name"))?;

            let code = parse_code(code).ok_or_else(|| invalid_line(idx, "bad building code"))?;
            result.insert(code, name.trim());
        }

        Ok(result)
    }
}

impl BuildingResolver for BasicBuildingResolver {
    fn resolve(&self, code: u8) -> Option<&str> {
        self.names.get(&code).map(|x| x.as_str())
    }
}

fn parse_code(code: &str) -> Option<u8> {
    match code.strip_prefix("0x").or_else(|| code.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => code.parse().ok(),
    }
}

fn invalid_line(idx: usize, msg: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("line {}: {}", idx + 1, msg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_resolver() {
        let mut names = HashMap::new();
        names.insert(0xCC, "Solar power plant");
        assert_eq!(names.resolve(0xCC), Some("Solar power plant"));
        assert_eq!(names.resolve(0xCD), None);
        assert_eq!((&names).resolve(0xCC), Some("Solar power plant"));
    }

    #[test]
    fn test_btreemap_owned_strings() {
        let mut names = BTreeMap::new();
        names.insert(1u8, String::from("Tree"));
        assert_eq!(names.resolve(1), Some("Tree"));
    }

    #[test]
    fn test_text_lines_trims_names() {
        let data = "\n  0x0e   Rubble  \n";
        let resolver = BasicBuildingResolver::from_text_lines(data.as_bytes()).unwrap();
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve(0x0E), Some("Rubble"));
    }

    #[test]
    fn test_text_lines_later_entries_win() {
        let data = "1 Tree\n1 Trees\n";
        let resolver = BasicBuildingResolver::from_text_lines(data.as_bytes()).unwrap();
        assert_eq!(resolver.resolve(1), Some("Trees"));
    }

    #[test]
    fn test_text_lines_bad_code() {
        let data = "0x1FF Too big\n";
        let err = BasicBuildingResolver::from_text_lines(data.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let data = "0x01\n";
        let err = BasicBuildingResolver::from_text_lines(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
