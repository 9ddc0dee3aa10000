use std::{fs, path::Path};

use rustc_hash::FxHashMap;

use crate::{
    error::{RResult, RailosError},
    models::LayoutDump,
    parsing::parse_layout_dump,
};

/// Loads layout dump files and keeps every decoded layout, keyed by path.
///
/// The accessors report on the most recently parsed file.
#[derive(Debug, Default)]
pub struct RlyParser {
    layouts: FxHashMap<String, LayoutDump>,
    current_file: Option<String>,
}

impl RlyParser {
    pub fn new() -> Self {
        log::debug!("Creating new RlyParser");
        Self::default()
    }

    pub fn parse(&mut self, rly_file: &str) -> RResult<&LayoutDump> {
        log::info!("Parsing RLY file '{rly_file}'...");
        if !Path::new(rly_file).exists() {
            return Err(RailosError::FileNotFound(rly_file.to_string()));
        }

        // Dumps written on Windows are not always valid UTF-8.
        let bytes = fs::read(rly_file)?;
        let text = String::from_utf8_lossy(&bytes);
        let layout = parse_layout_dump(&text).map_err(|error| RailosError::Parsing {
            error,
            file: rly_file.to_string(),
        })?;

        self.layouts.insert(rly_file.to_string(), layout);
        self.current_file = Some(rly_file.to_string());
        self.layout()
    }

    // Getters/Setters

    pub fn layout(&self) -> RResult<&LayoutDump> {
        self.current_file
            .as_ref()
            .and_then(|file| self.layouts.get(file))
            .ok_or(RailosError::NothingParsed)
    }

    pub fn layout_for(&self, rly_file: &str) -> Option<&LayoutDump> {
        self.layouts.get(rly_file)
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub fn n_active_elements(&self) -> RResult<&str> {
        Ok(self.layout()?.header().n_active_elements())
    }

    pub fn n_inactive_elements(&self) -> RResult<i32> {
        Ok(self.layout()?.n_inactive_elements())
    }

    pub fn program_version(&self) -> RResult<&str> {
        Ok(self.layout()?.program_version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_log::test;

    const LAYOUT: &str = "RailOS v2.15.0\0\n0\n0\n1\n1\0\n5\n12\n-3\n100\n-1\n80\n-1\0\nCentral\0Signal A\0\n1\nInactive elements\0\n7\n20\n4\0Depot\0\0\n****";

    fn write_layout(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn nothing_parsed_yet() {
        let parser = RlyParser::new();
        assert!(matches!(
            parser.program_version(),
            Err(RailosError::NothingParsed)
        ));
        assert!(matches!(
            parser.n_inactive_elements(),
            Err(RailosError::NothingParsed)
        ));
        assert_eq!(None, parser.current_file());
    }

    #[test]
    fn missing_file() {
        let mut parser = RlyParser::new();
        match parser.parse("/does/not/exist.rly") {
            Err(RailosError::FileNotFound(path)) => assert_eq!("/does/not/exist.rly", path),
            r => panic!("Expected FileNotFound, got {r:?}"),
        }
    }

    #[test]
    fn parse_file() {
        let file = write_layout(LAYOUT.as_bytes());
        let path = file.path().to_str().unwrap();

        let mut parser = RlyParser::new();
        let layout = parser.parse(path).unwrap();
        assert_eq!(1, layout.active_elements().len());

        assert_eq!("RailOS v2.15.0", parser.program_version().unwrap());
        assert_eq!("1", parser.n_active_elements().unwrap());
        assert_eq!(1, parser.n_inactive_elements().unwrap());
        assert_eq!(Some(path), parser.current_file());
        assert!(parser.layout_for(path).is_some());
    }

    #[test]
    fn keeps_every_parsed_file() {
        let first = write_layout(LAYOUT.as_bytes());
        let second = write_layout(LAYOUT.replace("v2.15.0", "v2.16.1").as_bytes());
        let first_path = first.path().to_str().unwrap();
        let second_path = second.path().to_str().unwrap();

        let mut parser = RlyParser::new();
        parser.parse(first_path).unwrap();
        parser.parse(second_path).unwrap();

        assert_eq!("RailOS v2.16.1", parser.program_version().unwrap());
        assert_eq!(
            "RailOS v2.15.0",
            parser.layout_for(first_path).unwrap().program_version()
        );
    }

    #[test]
    fn decoding_error_names_the_file() {
        let file = write_layout(b"RailOS v2.15.0");
        let path = file.path().to_str().unwrap();

        let mut parser = RlyParser::new();
        let err = parser.parse(path).unwrap_err();
        assert!(err.to_string().contains(path), "{err}");
        assert!(matches!(err, RailosError::Parsing { .. }));
        assert!(matches!(
            parser.layout(),
            Err(RailosError::NothingParsed)
        ));
    }

    #[test]
    fn non_utf8_names_are_kept() {
        // 0xe9 is 'é' in Windows-1252.
        let contents = LAYOUT
            .replace("Depot", "D@pot")
            .bytes()
            .map(|b| if b == b'@' { 0xe9 } else { b })
            .collect::<Vec<_>>();
        let file = write_layout(&contents);

        let mut parser = RlyParser::new();
        let layout = parser.parse(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            Some("D\u{fffd}pot"),
            layout.inactive_elements()[0].location_name()
        );
    }
}
