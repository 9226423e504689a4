//! XML and binary property list tables, decoded with the `plist` crate.

use std::{io::Cursor, path::Path};

use plist::Value;

use super::{DataTypeError, StringsEntry};

/// Decode a property list whose root is a dictionary of strings.
pub fn parse_property_list(bytes: &[u8], path: &Path) -> Result<Vec<StringsEntry>, DataTypeError> {
    let value = Value::from_reader(Cursor::new(bytes))
        .map_err(|e| DataTypeError::new(path, format!("invalid property list: {}", e)))?;

    let dict = match value {
        Value::Dictionary(dict) => dict,
        other => {
            return Err(DataTypeError::new(
                path,
                format!("root is {}, expected a dictionary", describe(&other)),
            ));
        }
    };

    dict.into_iter()
        .map(|(key, value)| match value {
            Value::String(value) => Ok(StringsEntry::new(key, value, None)),
            other => Err(DataTypeError::new(
                path,
                format!(
                    "value for key \"{}\" is {}, expected a string",
                    key,
                    describe(&other)
                ),
            )),
        })
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "an array",
        Value::Dictionary(_) => "a dictionary",
        Value::Boolean(_) => "a boolean",
        Value::Data(_) => "data",
        Value::Date(_) => "a date",
        Value::Real(_) => "a real number",
        Value::Integer(_) => "an integer",
        Value::String(_) => "a string",
        _ => "an unsupported value",
    }
}
