//! # Layout dump (rly) decoding
//!
//! A layout dump is a sequence of components separated by NUL bytes, each component holding
//! newline separated fields:
//!
//! `
//! component 0  program version
//! component 1  (blank), home x, home y, declared active element count, user graphics flag
//! component 2+ element table
//! `
//!
//! The element table is read in groups of three components per record. Active records come
//! first:
//!
//! `
//! row 0  (blank), speed tag, x, y, length, second length, speed limit, second speed limit
//! row 1  (blank), location name
//! row 2  element name
//! `
//!
//! A second length or speed limit of `-1` means the element has none. The active table ends on
//! a component whose field 2 contains `Inactive elements`, field 1 of that component being the
//! declared number of inactive elements. Inactive records follow, with a shorter shape:
//!
//! `
//! row 0  (blank), speed tag, x, y
//! row 1  location name
//! row 2  (unused)
//! `
//!
//! The inactive table ends on a component whose field 1 contains `****`.
use crate::{
    models::{
        ActiveElement, Coordinate, InactiveElement, LayoutDump, LayoutHeader, PairedValue,
    },
    parsing::error::{PResult, ParsingError},
};

pub const COMPONENT_SEPARATOR: char = '\0';
pub const FIELD_SEPARATOR: char = '\n';
pub const INACTIVE_ELEMENTS_SENTINEL: &str = "Inactive elements";
pub const END_OF_TABLE_SENTINEL: &str = "****";
pub const ABSENT_VALUE: &str = "-1";

const HEADER_COMPONENTS: usize = 2;
const RECORD_STRIDE: usize = 3;

const ACTIVE_TABLE: &str = "active element";
const INACTIVE_TABLE: &str = "inactive element";
const HEADER_TABLE: &str = "header";

/// Decodes a complete layout dump.
pub fn parse_layout_dump(text: &str) -> PResult<LayoutDump> {
    let grid = DumpGrid::new(text);
    log::debug!("Retrieved {} components from the layout dump", grid.len());

    let header = parse_header(&grid)?;

    let mut active_elements = Vec::new();
    let mut inactive_elements = Vec::new();
    let mut n_inactive_elements = None;

    for event in RecordScanner::new(grid.records()) {
        match event? {
            ScanEvent::Active(element) => active_elements.push(element),
            ScanEvent::Boundary {
                n_inactive_elements: n,
            } => n_inactive_elements = Some(n),
            ScanEvent::Inactive(element) => inactive_elements.push(element),
        }
    }

    let n_inactive_elements = n_inactive_elements.ok_or_else(|| {
        ParsingError::Structural(format!(
            "missing the '{INACTIVE_ELEMENTS_SENTINEL}' line"
        ))
    })?;
    if usize::try_from(n_inactive_elements).ok() != Some(inactive_elements.len()) {
        log::warn!(
            "The dump declares {n_inactive_elements} inactive elements but {} were decoded",
            inactive_elements.len()
        );
    }

    Ok(LayoutDump::new(
        header,
        active_elements,
        inactive_elements,
        n_inactive_elements,
    ))
}

fn parse_header(grid: &DumpGrid) -> PResult<LayoutHeader> {
    if grid.len() < HEADER_COMPONENTS {
        return Err(ParsingError::Structural(format!(
            "expected at least {HEADER_COMPONENTS} header components, found {}",
            grid.len()
        )));
    }
    let header = grid.components.as_slice();

    let program_version = field(header, 0, 0)?.to_string();
    let home_position = Coordinate::new(
        integer(header, 1, 1, HEADER_TABLE, 0, "home position x")?,
        integer(header, 1, 2, HEADER_TABLE, 0, "home position y")?,
    );
    let n_active_elements = field(header, 1, 3)?.to_string();
    let user_graphics = field(header, 1, 4)?
        .chars()
        .last()
        .ok_or_else(|| ParsingError::Structural("empty user graphics flag".to_string()))?
        == '1';

    log::debug!(
        "Header: version '{program_version}', {n_active_elements} active elements declared"
    );
    Ok(LayoutHeader::new(
        program_version,
        home_position,
        n_active_elements,
        user_graphics,
    ))
}

// ------------------------------------------------------------------------------------------------
// --- DumpGrid
// ------------------------------------------------------------------------------------------------

/// The dump split into components, then fields.
struct DumpGrid<'a> {
    components: Vec<Vec<&'a str>>,
}

impl<'a> DumpGrid<'a> {
    fn new(text: &'a str) -> Self {
        let components = text
            .split(COMPONENT_SEPARATOR)
            .map(|component| {
                component
                    .split(FIELD_SEPARATOR)
                    .map(|f| f.strip_suffix('\r').unwrap_or(f))
                    .collect()
            })
            .collect();
        Self { components }
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    /// Components following the header.
    fn records(&self) -> &[Vec<&'a str>] {
        self.components.get(HEADER_COMPONENTS..).unwrap_or_default()
    }
}

fn field<'a>(rows: &[Vec<&'a str>], row: usize, column: usize) -> PResult<&'a str> {
    rows.get(row)
        .and_then(|fields| fields.get(column))
        .copied()
        .ok_or_else(|| {
            ParsingError::Structural(format!("missing field {column} in component {row}"))
        })
}

fn integer(
    rows: &[Vec<&str>],
    row: usize,
    column: usize,
    table: &'static str,
    record: usize,
    name: &'static str,
) -> PResult<i32> {
    let value = field(rows, row, column)?;
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ParsingError::NumericField {
            table,
            record,
            field: name,
            value: value.to_string(),
        })
}

fn optional_integer(
    rows: &[Vec<&str>],
    row: usize,
    column: usize,
    table: &'static str,
    record: usize,
    name: &'static str,
) -> PResult<Option<i32>> {
    if field(rows, row, column)?.trim() == ABSENT_VALUE {
        return Ok(None);
    }
    integer(rows, row, column, table, record, name).map(Some)
}

fn optional_text(rows: &[Vec<&str>], row: usize, column: usize) -> PResult<Option<String>> {
    let value = field(rows, row, column)?;
    Ok((!value.is_empty()).then(|| value.to_string()))
}

// ------------------------------------------------------------------------------------------------
// --- RecordScanner
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanState {
    Active,
    Inactive,
    Finished,
}

#[derive(Debug, PartialEq)]
enum ScanEvent {
    Active(ActiveElement),
    Boundary { n_inactive_elements: i32 },
    Inactive(InactiveElement),
}

/// Walks the element table, switching from active to inactive records on the
/// `Inactive elements` line and stopping on the `****` line. Fused after an error.
struct RecordScanner<'g, 'a> {
    rows: &'g [Vec<&'a str>],
    row: usize,
    record: usize,
    state: ScanState,
}

impl<'g, 'a> RecordScanner<'g, 'a> {
    fn new(rows: &'g [Vec<&'a str>]) -> Self {
        Self {
            rows,
            row: 0,
            record: 0,
            state: ScanState::Active,
        }
    }

    fn ensure_remaining(&self, sentinel: &str) -> PResult<()> {
        if self.row >= self.rows.len() {
            return Err(ParsingError::Structural(format!(
                "ran out of components before the '{sentinel}' line"
            )));
        }
        Ok(())
    }

    fn scan_active(&mut self) -> PResult<Option<ScanEvent>> {
        self.ensure_remaining(INACTIVE_ELEMENTS_SENTINEL)?;

        if field(self.rows, self.row, 2)?.contains(INACTIVE_ELEMENTS_SENTINEL) {
            let n_inactive_elements = integer(
                self.rows,
                self.row,
                1,
                INACTIVE_TABLE,
                0,
                "declared inactive element count",
            )?;
            log::debug!(
                "Found {} active elements, {n_inactive_elements} inactive elements declared",
                self.record
            );
            self.row += 1;
            self.record = 0;
            self.state = ScanState::Inactive;
            return Ok(Some(ScanEvent::Boundary {
                n_inactive_elements,
            }));
        }

        let element = decode_active_element(self.rows, self.row, self.record)?;
        self.row += RECORD_STRIDE;
        self.record += 1;
        Ok(Some(ScanEvent::Active(element)))
    }

    fn scan_inactive(&mut self) -> PResult<Option<ScanEvent>> {
        self.ensure_remaining(END_OF_TABLE_SENTINEL)?;

        if field(self.rows, self.row, 1)?.contains(END_OF_TABLE_SENTINEL) {
            self.state = ScanState::Finished;
            return Ok(None);
        }

        let element = decode_inactive_element(self.rows, self.row, self.record)?;
        self.row += RECORD_STRIDE;
        self.record += 1;
        Ok(Some(ScanEvent::Inactive(element)))
    }
}

impl Iterator for RecordScanner<'_, '_> {
    type Item = PResult<ScanEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = match self.state {
            ScanState::Active => self.scan_active(),
            ScanState::Inactive => self.scan_inactive(),
            ScanState::Finished => return None,
        };
        match event {
            Ok(event) => event.map(Ok),
            Err(e) => {
                self.state = ScanState::Finished;
                Some(Err(e))
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// --- Data Processing Functions
// ------------------------------------------------------------------------------------------------

fn decode_active_element(
    rows: &[Vec<&str>],
    row: usize,
    record: usize,
) -> PResult<ActiveElement> {
    let int = |column, name| integer(rows, row, column, ACTIVE_TABLE, record, name);
    let optional_int = |column, name| optional_integer(rows, row, column, ACTIVE_TABLE, record, name);

    let speed_tag = int(1, "speed tag")?;
    let position = Coordinate::new(int(2, "position x")?, int(3, "position y")?);
    let length = PairedValue::new(int(4, "length")?, optional_int(5, "second length")?);
    let speed_limit = PairedValue::new(
        int(6, "speed limit")?,
        optional_int(7, "second speed limit")?,
    );
    let location_name = optional_text(rows, row + 1, 1)?;
    let element_name = optional_text(rows, row + 2, 0)?;

    Ok(ActiveElement::new(
        speed_tag,
        position,
        length,
        speed_limit,
        location_name,
        element_name,
    ))
}

fn decode_inactive_element(
    rows: &[Vec<&str>],
    row: usize,
    record: usize,
) -> PResult<InactiveElement> {
    let int = |column, name| integer(rows, row, column, INACTIVE_TABLE, record, name);

    let speed_tag = int(1, "speed tag")?;
    let position = Coordinate::new(int(2, "position x")?, int(3, "position y")?);
    let location_name = optional_text(rows, row + 1, 0)?;

    Ok(InactiveElement::new(speed_tag, position, location_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tests::get_json_values;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn dump(components: &[&[&str]]) -> String {
        components
            .iter()
            .map(|fields| fields.join("\n"))
            .collect::<Vec<_>>()
            .join("\0")
    }

    fn minimal_dump(declared_inactive: &str) -> String {
        dump(&[
            &["RailOS v2.15.0"],
            &["", "-4", "7", "1", "1"],
            &["", "5", "12", "-3", "100", "-1", "80", "-1"],
            &["", "Central"],
            &["Signal A"],
            &["", declared_inactive, "Inactive elements"],
            &["", "7", "20", "4"],
            &["Depot"],
            &[""],
            &["", "****"],
        ])
    }

    #[test]
    fn minimal_layout() {
        let layout = parse_layout_dump(&minimal_dump("1")).unwrap();

        assert_eq!("RailOS v2.15.0", layout.program_version());
        assert_eq!(Coordinate::new(-4, 7), layout.header().home_position());
        assert_eq!("1", layout.header().n_active_elements());
        assert!(layout.header().user_graphics());

        assert_eq!(1, layout.active_elements().len());
        let active = &layout.active_elements()[0];
        assert_eq!(5, active.speed_tag());
        assert_eq!(Coordinate::new(12, -3), active.position());
        assert_eq!(PairedValue::new(100, None), active.length());
        assert_eq!(PairedValue::new(80, None), active.speed_limit());
        assert_eq!(Some("Central"), active.location_name());
        assert_eq!(Some("Signal A"), active.element_name());

        assert_eq!(1, layout.inactive_elements().len());
        let inactive = &layout.inactive_elements()[0];
        assert_eq!(7, inactive.speed_tag());
        assert_eq!(Coordinate::new(20, 4), inactive.position());
        assert_eq!(Some("Depot"), inactive.location_name());

        assert_eq!(1, layout.n_inactive_elements());
    }

    #[test]
    fn declared_inactive_count_is_kept_as_read() {
        let layout = parse_layout_dump(&minimal_dump("5")).unwrap();
        assert_eq!(1, layout.inactive_elements().len());
        assert_eq!(5, layout.n_inactive_elements());
    }

    #[test]
    fn secondary_values_and_empty_names() {
        let text = dump(&[
            &["RailOS v2.15.0"],
            &["", "0", "0", "2", "0"],
            &["", "1", "0", "0", "50", "60", "100", "40"],
            &["", ""],
            &[""],
            &["", "2", "1", "0", "-1", "-1", "-1", "-1"],
            &["", "Bay"],
            &[""],
            &["", "0", "Inactive elements"],
            &["", "****"],
            &["trailer"],
        ]);
        let layout = parse_layout_dump(&text).unwrap();
        assert!(!layout.header().user_graphics());

        let first = &layout.active_elements()[0];
        assert_eq!(PairedValue::new(50, Some(60)), first.length());
        assert_eq!(PairedValue::new(100, Some(40)), first.speed_limit());
        assert_eq!(None, first.location_name());
        assert_eq!(None, first.element_name());

        let second = &layout.active_elements()[1];
        assert_eq!(PairedValue::new(-1, None), second.length());
        assert_eq!(Some("Bay"), second.location_name());

        assert!(layout.inactive_elements().is_empty());
        assert_eq!(0, layout.n_inactive_elements());
    }

    #[test]
    fn empty_inactive_location_name() {
        let text = dump(&[
            &["RailOS v2.15.0"],
            &["", "0", "0", "0", "0"],
            &["", "2", "Inactive elements"],
            &["", "7", "20", "4"],
            &[""],
            &[""],
            &["", "8", "21", "-4"],
            &["Depot"],
            &[""],
            &["", "****"],
        ]);
        let layout = parse_layout_dump(&text).unwrap();

        assert!(layout.active_elements().is_empty());
        let unnamed = &layout.inactive_elements()[0];
        assert_eq!(7, unnamed.speed_tag());
        assert_eq!(None, unnamed.location_name());
        assert_eq!(Some("Depot"), layout.inactive_elements()[1].location_name());
        assert_eq!(2, layout.n_inactive_elements());
    }

    #[test]
    fn crlf_line_endings() {
        let text = minimal_dump("1").replace('\n', "\r\n");
        let layout = parse_layout_dump(&text).unwrap();
        assert_eq!("RailOS v2.15.0", layout.program_version());
        assert!(layout.header().user_graphics());
        assert_eq!(Some("Depot"), layout.inactive_elements()[0].location_name());
    }

    #[test]
    fn scanner_switches_tables_on_sentinel() {
        let text = minimal_dump("1");
        let grid = DumpGrid::new(&text);
        let mut scanner = RecordScanner::new(grid.records());

        assert!(matches!(scanner.next(), Some(Ok(ScanEvent::Active(_)))));
        assert_eq!(ScanState::Active, scanner.state);
        assert_eq!(
            Some(ScanEvent::Boundary {
                n_inactive_elements: 1
            }),
            scanner.next().map(Result::unwrap)
        );
        assert_eq!(ScanState::Inactive, scanner.state);
        assert!(matches!(scanner.next(), Some(Ok(ScanEvent::Inactive(_)))));
        assert!(scanner.next().is_none());
        assert_eq!(ScanState::Finished, scanner.state);
        assert!(scanner.next().is_none());
    }

    #[test]
    fn scanner_stops_after_error() {
        let text = dump(&[&["v"], &["", "0", "0", "1", "0"], &["", "x"]]);
        let grid = DumpGrid::new(&text);
        let mut scanner = RecordScanner::new(grid.records());
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert!(scanner.next().is_none());
    }

    #[test]
    fn single_component_is_structural_error() {
        match parse_layout_dump("RailOS v2.15.0\nno separators here") {
            Err(ParsingError::Structural(message)) => {
                assert!(message.contains("found 1"), "{message}")
            }
            r => panic!("Expected Structural, got {r:?}"),
        }
    }

    #[test]
    fn short_header_is_structural_error() {
        let text = dump(&[&["RailOS v2.15.0"], &["", "0", "0"]]);
        assert!(matches!(
            parse_layout_dump(&text),
            Err(ParsingError::Structural(_))
        ));
    }

    #[test]
    fn non_numeric_field_names_record_and_field() {
        let text = minimal_dump("1").replace("\n80\n", "\nfast\n");
        match parse_layout_dump(&text) {
            Err(ParsingError::NumericField {
                table,
                record,
                field,
                value,
            }) => {
                assert_eq!(ACTIVE_TABLE, table);
                assert_eq!(0, record);
                assert_eq!("speed limit", field);
                assert_eq!("fast", value);
            }
            r => panic!("Expected NumericField, got {r:?}"),
        }
    }

    #[test]
    fn missing_inactive_sentinel() {
        let text = dump(&[
            &["RailOS v2.15.0"],
            &["", "0", "0", "1", "0"],
            &["", "5", "12", "-3", "100", "-1", "80", "-1"],
            &["", ""],
            &[""],
        ]);
        match parse_layout_dump(&text) {
            Err(ParsingError::Structural(message)) => {
                assert!(message.contains(INACTIVE_ELEMENTS_SENTINEL), "{message}")
            }
            r => panic!("Expected Structural, got {r:?}"),
        }
    }

    #[test]
    fn missing_end_sentinel() {
        let text = dump(&[
            &["RailOS v2.15.0"],
            &["", "0", "0", "0", "0"],
            &["", "0", "Inactive elements"],
        ]);
        match parse_layout_dump(&text) {
            Err(ParsingError::Structural(message)) => {
                assert!(message.contains(END_OF_TABLE_SENTINEL), "{message}")
            }
            r => panic!("Expected Structural, got {r:?}"),
        }
    }

    #[test]
    fn layout_json() {
        let layout = parse_layout_dump(&minimal_dump("1")).unwrap();
        let reference = r#"
            {
                "header": {
                    "program_version": "RailOS v2.15.0",
                    "home_position": "N4-7",
                    "n_active_elements": "1",
                    "user_graphics": true
                },
                "active_elements": [
                    {
                        "speed_tag": 5,
                        "position": "12-N3",
                        "length": { "primary": 100, "secondary": null },
                        "speed_limit": { "primary": 80, "secondary": null },
                        "location_name": "Central",
                        "element_name": "Signal A"
                    }
                ],
                "inactive_elements": [
                    {
                        "speed_tag": 7,
                        "position": "20-4",
                        "location_name": "Depot"
                    }
                ],
                "n_inactive_elements": 1
            }"#;
        let (layout, reference) = get_json_values(&layout, reference).unwrap();
        assert_eq!(layout, reference);
    }
}
