//! Embedded datafile schemas, one per [`DatafileSchemaVersion`].

use flagguard_core::DatafileSchemaVersion;

const DATAFILE_V2: &str = include_str!("../schemas/datafile.v2.schema.json");
const DATAFILE_V4: &str = include_str!("../schemas/datafile.v4.schema.json");

/// Raw JSON text of the schema for `version`.
pub fn embedded_schema(version: DatafileSchemaVersion) -> &'static str {
    match version {
        DatafileSchemaVersion::V2 => DATAFILE_V2,
        DatafileSchemaVersion::V4 => DATAFILE_V4,
    }
}

/// File name of the schema for `version`.
pub fn schema_name(version: DatafileSchemaVersion) -> &'static str {
    match version {
        DatafileSchemaVersion::V2 => "datafile.v2.schema.json",
        DatafileSchemaVersion::V4 => "datafile.v4.schema.json",
    }
}
