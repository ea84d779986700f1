//! Persistence codec: converts between the in-memory list and the
//! `name,quantity,notes` line format. Fields are joined with a bare comma and
//! never escaped, so a comma inside a field will not round-trip; that is a
//! documented property of the format, not something the codec papers over.

use crate::domain::model::Item;
use crate::domain::ports::Storage;
use crate::utils::error::{ListError, Result};

use super::list::ShoppingList;

pub const FIELD_DELIMITER: char = ',';
const FIELDS_PER_LINE: usize = 3;

/// Serializes the list, one record per line, in list order.
pub fn encode(list: &ShoppingList) -> String {
    let mut out = String::new();
    for item in list.items() {
        out.push_str(&item.name);
        out.push(FIELD_DELIMITER);
        out.push_str(&item.quantity.to_string());
        out.push(FIELD_DELIMITER);
        out.push_str(&item.notes);
        out.push('\n');
    }
    out
}

/// Parses the line format back into a list. All-or-nothing: the first
/// malformed line aborts the whole decode and no partial list is returned.
pub fn decode(text: &str) -> Result<ShoppingList> {
    let mut items = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if parts.len() != FIELDS_PER_LINE {
            return Err(ListError::FieldCountError {
                line: line_no + 1,
                found: parts.len(),
            });
        }

        let quantity: i64 = parts[1].parse().map_err(|_| ListError::QuantityError {
            line: line_no + 1,
            value: parts[1].to_string(),
        })?;

        items.push(Item::new(parts[0], quantity, parts[2]));
    }

    Ok(ShoppingList::from_items(items))
}

/// Writes the encoded list to `path`, overwriting any existing file.
pub fn save<S: Storage>(storage: &S, path: &str, list: &ShoppingList) -> Result<()> {
    storage.write_file(path, encode(list).as_bytes())?;
    tracing::debug!("saved {} item(s) to {}", list.len(), path);
    Ok(())
}

/// Reads `path` in full and decodes it. The file is consumed completely
/// before decoding, so a clean end-of-file is success and any genuine read
/// failure surfaces as an IO error, never as end-of-input.
pub fn load<S: Storage>(storage: &S, path: &str) -> Result<ShoppingList> {
    let data = storage.read_file(path)?;
    let text = std::str::from_utf8(&data).map_err(|_| ListError::EncodingError)?;
    let list = decode(text)?;
    tracing::debug!("loaded {} item(s) from {}", list.len(), path);
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(items: Vec<Item>) -> ShoppingList {
        ShoppingList::from_items(items)
    }

    #[test]
    fn test_encode_format() {
        let list = list_of(vec![
            Item::new("Milk", 2, "2%"),
            Item::new("Bread", 1, ""),
        ]);
        assert_eq!(encode(&list), "Milk,2,2%\nBread,1,\n");
    }

    #[test]
    fn test_encode_empty_list() {
        assert_eq!(encode(&ShoppingList::new()), "");
    }

    #[test]
    fn test_decode_round_trip() {
        let list = list_of(vec![
            Item::new("Milk", 2, "2%"),
            Item::new("Bread", 1, ""),
            Item::new("", -3, "empty name and negative quantity are stored as-is"),
        ]);

        let decoded = decode(&encode(&list)).unwrap();
        assert_eq!(decoded, list);
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        let err = decode("Milk,2\n").unwrap_err();
        assert!(matches!(err, ListError::FieldCountError { line: 1, found: 2 }));

        // a comma in a field shifts everything: four fields, refused
        let err = decode("Milk,2,half fat, please\n").unwrap_err();
        assert!(matches!(err, ListError::FieldCountError { line: 1, found: 4 }));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_decode_rejects_bad_quantity() {
        let err = decode("Milk,two,2%\n").unwrap_err();
        match err {
            ListError::QuantityError { line, value } => {
                assert_eq!(line, 1);
                assert_eq!(value, "two");
            }
            other => panic!("expected QuantityError, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_is_all_or_nothing() {
        // first line is fine, second is malformed; nothing is returned
        assert!(decode("Milk,2,2%\nbroken line\n").is_err());
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_accepts_signed_quantity() {
        let list = decode("Ice,-1,defrost\n").unwrap();
        assert_eq!(list.items()[0].quantity, -1);
    }
}
