//! Header names of the EM-DAT public export.

pub const DIS_NO: &str = "DisNo.";
pub const HISTORIC: &str = "Historic";
pub const CLASSIFICATION_KEY: &str = "Classification Key";
pub const DISASTER_GROUP: &str = "Disaster Group";
pub const DISASTER_SUBGROUP: &str = "Disaster Subgroup";
pub const DISASTER_TYPE: &str = "Disaster Type";
pub const DISASTER_SUBTYPE: &str = "Disaster Subtype";
pub const EVENT_NAME: &str = "Event Name";
pub const COUNTRY: &str = "Country";
pub const SUBREGION: &str = "Subregion";
pub const REGION: &str = "Region";
pub const LOCATION: &str = "Location";
pub const ASSOCIATED_TYPES: &str = "Associated Types";
pub const START_YEAR: &str = "Start Year";
pub const START_MONTH: &str = "Start Month";
pub const START_DAY: &str = "Start Day";
pub const END_YEAR: &str = "End Year";
pub const END_MONTH: &str = "End Month";
pub const END_DAY: &str = "End Day";
pub const TOTAL_DEATHS: &str = "Total Deaths";
pub const NO_INJURED: &str = "No. Injured";
pub const NO_AFFECTED: &str = "No. Affected";
pub const NO_HOMELESS: &str = "No. Homeless";
pub const TOTAL_AFFECTED: &str = "Total Affected";
pub const TOTAL_DAMAGES: &str = "Total Damage ('000 US$)";
/// Renamed damages header used by the cleaned exports.
pub const TOTAL_DAMAGES_ALIAS: &str = "Total Damages";

/// Columns the dashboard reads, in spreadsheet order.
pub const RELEVANT_COLUMNS: [&str; 25] = [
    DIS_NO,
    HISTORIC,
    CLASSIFICATION_KEY,
    DISASTER_GROUP,
    DISASTER_SUBGROUP,
    DISASTER_TYPE,
    DISASTER_SUBTYPE,
    EVENT_NAME,
    COUNTRY,
    SUBREGION,
    REGION,
    LOCATION,
    ASSOCIATED_TYPES,
    START_YEAR,
    START_MONTH,
    START_DAY,
    END_YEAR,
    END_MONTH,
    END_DAY,
    TOTAL_DEATHS,
    NO_INJURED,
    NO_AFFECTED,
    NO_HOMELESS,
    TOTAL_AFFECTED,
    TOTAL_DAMAGES,
];
