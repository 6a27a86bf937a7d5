use super::board::CELL_COUNT;
use super::types::Cell;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(cells: &[Cell; CELL_COUNT], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text: String = cells.iter().map(|cell| cell.symbol()).collect();
    text.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<[Cell; CELL_COUNT], D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let cells = text
        .chars()
        .map(|c| {
            Cell::from_symbol(c).ok_or_else(|| D::Error::custom(format!("invalid cell '{}'", c)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let len = cells.len();
    cells.try_into().map_err(|_| {
        D::Error::custom(format!("expected {} cells, got {}", CELL_COUNT, len))
    })
}
