use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random `(start, orientation)` draws tried per ship before fleet
/// placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 500;

/// Look up the fleet entry for a ship name.
pub fn fleet_entry(name: &str) -> Option<ShipType> {
    FLEET.iter().copied().find(|def| def.name() == name)
}
