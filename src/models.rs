use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    parsing::{error::ParsingError, helpers::coordinate_parser, join},
    utils::{format_time, hh_mm, option_hh_mm},
};

// ------------------------------------------------------------------------------------------------
// --- Coordinate
// ------------------------------------------------------------------------------------------------

/// Position of a track element on the layout grid.
///
/// The canonical text form writes each axis as its absolute value, prefixed with `N` when
/// negative, and joins the two axes with `-`: `(-3, 5)` is `N3-5`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    // Getters/Setters

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Axis by index: 0 is X, 1 is Y.
    pub fn axis(&self, index: usize) -> Option<i32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Component-wise sum, `None` when an axis leaves the `i32` range.
    pub fn checked_add(self, other: Coordinate) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
        ))
    }

    /// Component-wise difference, `None` when an axis leaves the `i32` range.
    pub fn checked_sub(self, other: Coordinate) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
        ))
    }

    /// Euclidean distance from the origin, truncated toward zero.
    ///
    /// The squares are summed in `i128` so the extreme axes don't overflow. The root of that
    /// sum is at most about 3.04e9, well inside `i64`.
    pub fn magnitude(&self) -> i64 {
        let x = i128::from(self.x);
        let y = i128::from(self.y);
        let squared = x * x + y * y;
        // f64 can't represent every i128, so the float root is adjusted to the exact one.
        let mut root = (squared as f64).sqrt() as i128;
        while root * root > squared {
            root -= 1;
        }
        while (root + 1) * (root + 1) <= squared {
            root += 1;
        }
        i64::try_from(root).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |v: i32| if v < 0 { "N" } else { "" };
        write!(
            f,
            "{}{}-{}{}",
            sign(self.x),
            self.x.unsigned_abs(),
            sign(self.y),
            self.y.unsigned_abs()
        )
    }
}

impl FromStr for Coordinate {
    type Err = ParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, (x, y)) =
            coordinate_parser(s).map_err(|_| ParsingError::CoordinateFormat(s.to_string()))?;
        Ok(Coordinate::new(x, y))
    }
}

impl From<Coordinate> for String {
    fn from(value: Coordinate) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Coordinate {
    type Error = ParsingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ------------------------------------------------------------------------------------------------
// --- Reference
// ------------------------------------------------------------------------------------------------

static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9]{0,4})([A-Za-z0-9]{4})$").expect("The reference regex is valid.")
});

/// A service reference: a four character headcode, optionally preceded by up to four
/// prefix characters (`2B14`, `AB122B14`).
///
/// References are kept as validated tokens, they are never resolved against other services.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Reference {
    prefix: String,
    headcode: String,
}

impl Reference {
    // Getters/Setters

    pub fn prefix(&self) -> Option<&str> {
        (!self.prefix.is_empty()).then_some(self.prefix.as_str())
    }

    pub fn headcode(&self) -> &str {
        &self.headcode
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.headcode)
    }
}

impl FromStr for Reference {
    type Err = ParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = REFERENCE_REGEX
            .captures(s)
            .ok_or_else(|| ParsingError::ReferenceFormat(s.to_string()))?;
        Ok(Reference {
            prefix: captures[1].to_string(),
            headcode: captures[2].to_string(),
        })
    }
}

impl From<Reference> for String {
    fn from(value: Reference) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Reference {
    type Error = ParsingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ------------------------------------------------------------------------------------------------
// --- Action
// ------------------------------------------------------------------------------------------------

/// Reserved statement keywords, in dispatch priority order.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ActionKeyword {
    Pas,
    Jbo,
    Fsp,
    Rsp,
    Cdt,
}

/// One parsed timetable statement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    Location(Location),
    Pas(Pas),
    Jbo(Jbo),
    Fsp(Fsp),
    Rsp(Rsp),
    Cdt(Cdt),
}

impl Action {
    /// The time the statement happens at (arrival time for a calling point).
    pub fn time(&self) -> NaiveTime {
        match self {
            Action::Location(location) => location.arrival,
            Action::Pas(pas) => pas.time,
            Action::Jbo(jbo) => jbo.time,
            Action::Fsp(fsp) => fsp.time,
            Action::Rsp(rsp) => rsp.time,
            Action::Cdt(cdt) => cdt.time,
        }
    }

    /// `None` for a plain calling point.
    pub fn keyword(&self) -> Option<ActionKeyword> {
        match self {
            Action::Location(_) => None,
            Action::Pas(_) => Some(ActionKeyword::Pas),
            Action::Jbo(_) => Some(ActionKeyword::Jbo),
            Action::Fsp(_) => Some(ActionKeyword::Fsp),
            Action::Rsp(_) => Some(ActionKeyword::Rsp),
            Action::Cdt(_) => Some(ActionKeyword::Cdt),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Location(location) => write!(f, "{location}"),
            Action::Pas(pas) => write!(f, "{pas}"),
            Action::Jbo(jbo) => write!(f, "{jbo}"),
            Action::Fsp(fsp) => write!(f, "{fsp}"),
            Action::Rsp(rsp) => write!(f, "{rsp}"),
            Action::Cdt(cdt) => write!(f, "{cdt}"),
        }
    }
}

/// A calling point, with a dwell when a departure time is given.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(with = "hh_mm")]
    arrival: NaiveTime,
    #[serde(with = "option_hh_mm")]
    departure: Option<NaiveTime>,
    name: String,
}

impl Location {
    pub fn new(arrival: NaiveTime, departure: Option<NaiveTime>, name: String) -> Self {
        Self {
            arrival,
            departure,
            name,
        }
    }

    // Getters/Setters

    pub fn arrival(&self) -> NaiveTime {
        self.arrival
    }

    pub fn departure(&self) -> Option<NaiveTime> {
        self.departure
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = vec![format_time(self.arrival)];
        fields.extend(self.departure.map(format_time));
        fields.push(self.name.clone());
        f.write_str(&join(fields))
    }
}

/// Passing a location without stopping.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pas {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    location: String,
}

impl Pas {
    pub fn new(time: NaiveTime, location: String) -> Self {
        Self { time, location }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for Pas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            ActionKeyword::Pas.to_string(),
            self.location.clone(),
        ]))
    }
}

/// Another service joins this one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Jbo {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    joining_service: Reference,
}

impl Jbo {
    pub fn new(time: NaiveTime, joining_service: Reference) -> Self {
        Self {
            time,
            joining_service,
        }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn joining_service(&self) -> &Reference {
        &self.joining_service
    }
}

impl fmt::Display for Jbo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            ActionKeyword::Jbo.to_string(),
            self.joining_service.to_string(),
        ]))
    }
}

/// The service becomes a new service.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fsp {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    new_service: Reference,
}

impl Fsp {
    pub fn new(time: NaiveTime, new_service: Reference) -> Self {
        Self { time, new_service }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn new_service(&self) -> &Reference {
        &self.new_service
    }
}

impl fmt::Display for Fsp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            ActionKeyword::Fsp.to_string(),
            self.new_service.to_string(),
        ]))
    }
}

/// The service is replaced by another service.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rsp {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    replacement_service: Reference,
}

impl Rsp {
    pub fn new(time: NaiveTime, replacement_service: Reference) -> Self {
        Self {
            time,
            replacement_service,
        }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn replacement_service(&self) -> &Reference {
        &self.replacement_service
    }
}

impl fmt::Display for Rsp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            ActionKeyword::Rsp.to_string(),
            self.replacement_service.to_string(),
        ]))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cdt {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
}

impl Cdt {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl fmt::Display for Cdt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            ActionKeyword::Cdt.to_string(),
        ]))
    }
}

// ------------------------------------------------------------------------------------------------
// --- StartType
// ------------------------------------------------------------------------------------------------

/// Tag token of a start statement, as written in a timetable line.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, EnumIter, EnumString)]
pub enum StartTypeKind {
    #[strum(serialize = "Snt")]
    Snt,

    #[strum(serialize = "Sfs")]
    Sfs,

    #[strum(serialize = "Sns-fsh")]
    SnsFsh,

    #[strum(serialize = "Snt-sh")]
    SntSh,

    #[strum(serialize = "Sns-sh")]
    SnsSh,
}

impl StartTypeKind {
    /// Discriminator carried in the `name` field of serialized start types.
    pub fn name(&self) -> &'static str {
        match self {
            StartTypeKind::Snt => "Snt",
            StartTypeKind::Sfs => "Sfs",
            StartTypeKind::SnsFsh => "Sns_fsh",
            StartTypeKind::SntSh => "Snt_sh",
            StartTypeKind::SnsSh => "Sns_sh",
        }
    }
}

/// How a service is introduced into the simulation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum StartType {
    Snt(Snt),
    Sfs(Sfs),
    #[serde(rename = "Sns_fsh")]
    SnsFsh(SnsFsh),
    #[serde(rename = "Snt_sh")]
    SntSh(SntSh),
    #[serde(rename = "Sns_sh")]
    SnsSh(SnsSh),
}

impl StartType {
    pub fn kind(&self) -> StartTypeKind {
        match self {
            StartType::Snt(_) => StartTypeKind::Snt,
            StartType::Sfs(_) => StartTypeKind::Sfs,
            StartType::SnsFsh(_) => StartTypeKind::SnsFsh,
            StartType::SntSh(_) => StartTypeKind::SntSh,
            StartType::SnsSh(_) => StartTypeKind::SnsSh,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn time(&self) -> NaiveTime {
        match self {
            StartType::Snt(snt) => snt.time,
            StartType::Sfs(sfs) => sfs.time,
            StartType::SnsFsh(sns_fsh) => sns_fsh.time,
            StartType::SntSh(snt_sh) => snt_sh.time,
            StartType::SnsSh(sns_sh) => sns_sh.time,
        }
    }
}

impl fmt::Display for StartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartType::Snt(snt) => write!(f, "{snt}"),
            StartType::Sfs(sfs) => write!(f, "{sfs}"),
            StartType::SnsFsh(sns_fsh) => write!(f, "{sns_fsh}"),
            StartType::SntSh(snt_sh) => write!(f, "{snt_sh}"),
            StartType::SnsSh(sns_sh) => write!(f, "{sns_sh}"),
        }
    }
}

fn element_pair(rear: &Coordinate, front: &Coordinate) -> String {
    format!("{rear} {front}")
}

/// Starts on the layout, occupying the rear and front elements.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snt {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    rear_element_id: Coordinate,
    front_element_id: Coordinate,
    under_signaller_control: bool,
}

impl Snt {
    pub fn new(
        time: NaiveTime,
        rear_element_id: Coordinate,
        front_element_id: Coordinate,
        under_signaller_control: bool,
    ) -> Self {
        Self {
            time,
            rear_element_id,
            front_element_id,
            under_signaller_control,
        }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn rear_element_id(&self) -> Coordinate {
        self.rear_element_id
    }

    pub fn front_element_id(&self) -> Coordinate {
        self.front_element_id
    }

    pub fn under_signaller_control(&self) -> bool {
        self.under_signaller_control
    }
}

impl fmt::Display for Snt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = vec![
            format_time(self.time),
            StartTypeKind::Snt.to_string(),
            element_pair(&self.rear_element_id, &self.front_element_id),
        ];
        if self.under_signaller_control {
            fields.push("S".to_string());
        }
        f.write_str(&join(fields))
    }
}

/// Starts by splitting from another service.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Sfs {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    splitting_service: Reference,
}

impl Sfs {
    pub fn new(time: NaiveTime, splitting_service: Reference) -> Self {
        Self {
            time,
            splitting_service,
        }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn splitting_service(&self) -> &Reference {
        &self.splitting_service
    }
}

impl fmt::Display for Sfs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            StartTypeKind::Sfs.to_string(),
            self.splitting_service.to_string(),
        ]))
    }
}

/// Starts as a new service formed from a shuttle.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SnsFsh {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    shuttle_ref: Reference,
}

impl SnsFsh {
    pub fn new(time: NaiveTime, shuttle_ref: Reference) -> Self {
        Self { time, shuttle_ref }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn shuttle_ref(&self) -> &Reference {
        &self.shuttle_ref
    }
}

impl fmt::Display for SnsFsh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            StartTypeKind::SnsFsh.to_string(),
            self.shuttle_ref.to_string(),
        ]))
    }
}

/// A shuttle starting on the layout.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SntSh {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    rear_element_id: Coordinate,
    front_element_id: Coordinate,
    shuttle_ref: Reference,
}

impl SntSh {
    pub fn new(
        time: NaiveTime,
        rear_element_id: Coordinate,
        front_element_id: Coordinate,
        shuttle_ref: Reference,
    ) -> Self {
        Self {
            time,
            rear_element_id,
            front_element_id,
            shuttle_ref,
        }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn rear_element_id(&self) -> Coordinate {
        self.rear_element_id
    }

    pub fn front_element_id(&self) -> Coordinate {
        self.front_element_id
    }

    pub fn shuttle_ref(&self) -> &Reference {
        &self.shuttle_ref
    }
}

impl fmt::Display for SntSh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            StartTypeKind::SntSh.to_string(),
            element_pair(&self.rear_element_id, &self.front_element_id),
            self.shuttle_ref.to_string(),
        ]))
    }
}

/// A shuttle started from a feeder service.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SnsSh {
    #[serde(with = "hh_mm")]
    time: NaiveTime,
    feeder_ref: Reference,
    linked_shuttle_ref: Reference,
}

impl SnsSh {
    pub fn new(time: NaiveTime, feeder_ref: Reference, linked_shuttle_ref: Reference) -> Self {
        Self {
            time,
            feeder_ref,
            linked_shuttle_ref,
        }
    }

    // Getters/Setters

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn feeder_ref(&self) -> &Reference {
        &self.feeder_ref
    }

    pub fn linked_shuttle_ref(&self) -> &Reference {
        &self.linked_shuttle_ref
    }
}

impl fmt::Display for SnsSh {
    // The linked shuttle is written before the feeder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join([
            format_time(self.time),
            StartTypeKind::SnsSh.to_string(),
            self.linked_shuttle_ref.to_string(),
            self.feeder_ref.to_string(),
        ]))
    }
}

// ------------------------------------------------------------------------------------------------
// --- PairedValue
// ------------------------------------------------------------------------------------------------

/// A primary value with an optional secondary one, e.g. the two track lengths of a
/// crossover. In the dump an absent secondary value is written as `-1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairedValue {
    primary: i32,
    secondary: Option<i32>,
}

impl PairedValue {
    pub fn new(primary: i32, secondary: Option<i32>) -> Self {
        Self { primary, secondary }
    }

    // Getters/Setters

    pub fn primary(&self) -> i32 {
        self.primary
    }

    pub fn secondary(&self) -> Option<i32> {
        self.secondary
    }
}

// ------------------------------------------------------------------------------------------------
// --- ActiveElement
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActiveElement {
    speed_tag: i32,
    position: Coordinate,
    length: PairedValue,
    speed_limit: PairedValue,
    location_name: Option<String>,
    element_name: Option<String>,
}

impl ActiveElement {
    pub fn new(
        speed_tag: i32,
        position: Coordinate,
        length: PairedValue,
        speed_limit: PairedValue,
        location_name: Option<String>,
        element_name: Option<String>,
    ) -> Self {
        Self {
            speed_tag,
            position,
            length,
            speed_limit,
            location_name,
            element_name,
        }
    }

    // Getters/Setters

    pub fn speed_tag(&self) -> i32 {
        self.speed_tag
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn length(&self) -> PairedValue {
        self.length
    }

    pub fn speed_limit(&self) -> PairedValue {
        self.speed_limit
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location_name.as_deref()
    }

    pub fn element_name(&self) -> Option<&str> {
        self.element_name.as_deref()
    }
}

// ------------------------------------------------------------------------------------------------
// --- InactiveElement
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct InactiveElement {
    speed_tag: i32,
    position: Coordinate,
    location_name: Option<String>,
}

impl InactiveElement {
    pub fn new(speed_tag: i32, position: Coordinate, location_name: Option<String>) -> Self {
        Self {
            speed_tag,
            position,
            location_name,
        }
    }

    // Getters/Setters

    pub fn speed_tag(&self) -> i32 {
        self.speed_tag
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location_name.as_deref()
    }
}

// ------------------------------------------------------------------------------------------------
// --- LayoutDump
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LayoutHeader {
    program_version: String,
    home_position: Coordinate,
    n_active_elements: String,
    user_graphics: bool,
}

impl LayoutHeader {
    pub fn new(
        program_version: String,
        home_position: Coordinate,
        n_active_elements: String,
        user_graphics: bool,
    ) -> Self {
        Self {
            program_version,
            home_position,
            n_active_elements,
            user_graphics,
        }
    }

    // Getters/Setters

    pub fn program_version(&self) -> &str {
        &self.program_version
    }

    pub fn home_position(&self) -> Coordinate {
        self.home_position
    }

    /// Declared number of active elements, exactly as written in the dump.
    pub fn n_active_elements(&self) -> &str {
        &self.n_active_elements
    }

    pub fn user_graphics(&self) -> bool {
        self.user_graphics
    }
}

/// Decoded railway layout.
///
/// `n_inactive_elements` is the count declared on the table boundary line. It is kept as read
/// and may differ from `inactive_elements().len()`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LayoutDump {
    header: LayoutHeader,
    active_elements: Vec<ActiveElement>,
    inactive_elements: Vec<InactiveElement>,
    n_inactive_elements: i32,
}

impl LayoutDump {
    pub fn new(
        header: LayoutHeader,
        active_elements: Vec<ActiveElement>,
        inactive_elements: Vec<InactiveElement>,
        n_inactive_elements: i32,
    ) -> Self {
        Self {
            header,
            active_elements,
            inactive_elements,
            n_inactive_elements,
        }
    }

    // Getters/Setters

    pub fn header(&self) -> &LayoutHeader {
        &self.header
    }

    pub fn program_version(&self) -> &str {
        self.header.program_version()
    }

    pub fn active_elements(&self) -> &[ActiveElement] {
        &self.active_elements
    }

    pub fn inactive_elements(&self) -> &[InactiveElement] {
        &self.inactive_elements
    }

    pub fn n_inactive_elements(&self) -> i32 {
        self.n_inactive_elements
    }
}
