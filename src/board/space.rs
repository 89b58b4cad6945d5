//! Board layout for the standard Monopoly board.
//!
//! All 40 spaces are numbered clockwise from Go. Space metadata (name and
//! category) is stored in a compile-time lookup table indexed by space id.

/// The number of spaces on the board.
pub const BOARD_SIZE: usize = 40;

/// Go, where every game starts.
pub const GO: u8 = 0;

/// The jail space. "Just visiting" and "in jail" share this index.
pub const JAIL: u8 = 10;

/// Free Parking.
pub const FREE_PARKING: u8 = 20;

/// The space that sends the player straight to jail.
pub const GO_TO_JAIL: u8 = 30;

/// Chance spaces, in board order.
pub const CHANCE_SPACES: [u8; 3] = [7, 22, 36];

/// Community Chest spaces, in board order.
pub const COMMUNITY_CHEST_SPACES: [u8; 3] = [2, 17, 33];

/// Railroad spaces, in board order.
pub const RAILROADS: [u8; 4] = [5, 15, 25, 35];

/// Utility spaces, in board order.
pub const UTILITIES: [u8; 2] = [12, 28];

/// Tax spaces, in board order.
pub const TAX_SPACES: [u8; 2] = [4, 38];

/// Category of a board space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceKind {
    Go,
    Jail,
    FreeParking,
    GoToJail,
    Chance,
    CommunityChest,
    Tax,
    Utility,
    Railroad,
    Property,
}

/// All categories, in declaration order.
pub const ALL_SPACE_KINDS: [SpaceKind; 10] = [
    SpaceKind::Go,
    SpaceKind::Jail,
    SpaceKind::FreeParking,
    SpaceKind::GoToJail,
    SpaceKind::Chance,
    SpaceKind::CommunityChest,
    SpaceKind::Tax,
    SpaceKind::Utility,
    SpaceKind::Railroad,
    SpaceKind::Property,
];

impl SpaceKind {
    /// Returns the lowercase label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            SpaceKind::Go => "go",
            SpaceKind::Jail => "jail",
            SpaceKind::FreeParking => "free_parking",
            SpaceKind::GoToJail => "go_to_jail",
            SpaceKind::Chance => "chance",
            SpaceKind::CommunityChest => "community_chest",
            SpaceKind::Tax => "tax",
            SpaceKind::Utility => "utility",
            SpaceKind::Railroad => "railroad",
            SpaceKind::Property => "property",
        }
    }
}

/// Static metadata for a board space.
pub struct SpaceInfo {
    pub name: &'static str,
    pub kind: SpaceKind,
}

/// Compile-time lookup table: index by space id.
pub static SPACE_INFO: [SpaceInfo; BOARD_SIZE] = [
    SpaceInfo { name: "Go", kind: SpaceKind::Go },
    SpaceInfo { name: "Mediterranean Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Community Chest", kind: SpaceKind::CommunityChest },
    SpaceInfo { name: "Baltic Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Income Tax", kind: SpaceKind::Tax },
    SpaceInfo { name: "Reading Railroad", kind: SpaceKind::Railroad },
    SpaceInfo { name: "Oriental Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Chance", kind: SpaceKind::Chance },
    SpaceInfo { name: "Vermont Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Connecticut Avenue", kind: SpaceKind::Property },
    // 10
    SpaceInfo { name: "Jail", kind: SpaceKind::Jail },
    SpaceInfo { name: "St. Charles Place", kind: SpaceKind::Property },
    SpaceInfo { name: "Electric Company", kind: SpaceKind::Utility },
    SpaceInfo { name: "States Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Virginia Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Pennsylvania Railroad", kind: SpaceKind::Railroad },
    SpaceInfo { name: "St. James Place", kind: SpaceKind::Property },
    SpaceInfo { name: "Community Chest", kind: SpaceKind::CommunityChest },
    SpaceInfo { name: "Tennessee Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "New York Avenue", kind: SpaceKind::Property },
    // 20
    SpaceInfo { name: "Free Parking", kind: SpaceKind::FreeParking },
    SpaceInfo { name: "Kentucky Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Chance", kind: SpaceKind::Chance },
    SpaceInfo { name: "Indiana Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Illinois Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "B. & O. Railroad", kind: SpaceKind::Railroad },
    SpaceInfo { name: "Atlantic Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Ventnor Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Water Works", kind: SpaceKind::Utility },
    SpaceInfo { name: "Marvin Gardens", kind: SpaceKind::Property },
    // 30
    SpaceInfo { name: "Go To Jail", kind: SpaceKind::GoToJail },
    SpaceInfo { name: "Pacific Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "North Carolina Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Community Chest", kind: SpaceKind::CommunityChest },
    SpaceInfo { name: "Pennsylvania Avenue", kind: SpaceKind::Property },
    SpaceInfo { name: "Short Line", kind: SpaceKind::Railroad },
    SpaceInfo { name: "Chance", kind: SpaceKind::Chance },
    SpaceInfo { name: "Park Place", kind: SpaceKind::Property },
    SpaceInfo { name: "Luxury Tax", kind: SpaceKind::Tax },
    SpaceInfo { name: "Boardwalk", kind: SpaceKind::Property },
];

/// Returns the category of a space.
pub fn space_kind(space: u8) -> SpaceKind {
    SPACE_INFO[space as usize].kind
}

/// Returns the display name of a space.
pub fn space_name(space: u8) -> &'static str {
    SPACE_INFO[space as usize].name
}

/// Returns the ids of every space of the given category, in board order.
pub fn spaces_of_kind(kind: SpaceKind) -> Vec<u8> {
    (0..BOARD_SIZE as u8).filter(|&s| space_kind(s) == kind).collect()
}

/// Returns `space + steps` wrapped onto the board.
pub const fn advance(space: u8, steps: u8) -> u8 {
    ((space as usize + steps as usize) % BOARD_SIZE) as u8
}

/// Returns `space - steps` wrapped onto the board.
pub const fn retreat(space: u8, steps: u8) -> u8 {
    ((space as usize + BOARD_SIZE - steps as usize % BOARD_SIZE) % BOARD_SIZE) as u8
}

/// Picks the candidate closest to `from` by absolute index distance.
///
/// Ties go to the lowest index. Distance is measured along the index line,
/// not around the board, so 36 → 5 is 31 rather than 9.
pub fn nearest(from: u8, candidates: &[u8]) -> Option<u8> {
    candidates
        .iter()
        .copied()
        .min_by_key(|&c| ((c as i16 - from as i16).abs(), c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_constant_lists() {
        assert_eq!(space_kind(GO), SpaceKind::Go);
        assert_eq!(space_kind(JAIL), SpaceKind::Jail);
        assert_eq!(space_kind(FREE_PARKING), SpaceKind::FreeParking);
        assert_eq!(space_kind(GO_TO_JAIL), SpaceKind::GoToJail);
        assert_eq!(spaces_of_kind(SpaceKind::Chance), CHANCE_SPACES);
        assert_eq!(spaces_of_kind(SpaceKind::CommunityChest), COMMUNITY_CHEST_SPACES);
        assert_eq!(spaces_of_kind(SpaceKind::Railroad), RAILROADS);
        assert_eq!(spaces_of_kind(SpaceKind::Utility), UTILITIES);
        assert_eq!(spaces_of_kind(SpaceKind::Tax), TAX_SPACES);
    }

    #[test]
    fn every_space_has_exactly_one_kind() {
        let total: usize = ALL_SPACE_KINDS
            .iter()
            .map(|&k| spaces_of_kind(k).len())
            .sum();
        assert_eq!(total, BOARD_SIZE);
        assert_eq!(spaces_of_kind(SpaceKind::Property).len(), 22);
    }

    #[test]
    fn advance_and_retreat_wrap() {
        assert_eq!(advance(38, 5), 3);
        assert_eq!(advance(0, 12), 12);
        assert_eq!(retreat(2, 3), 39);
        assert_eq!(retreat(36, 3), 33);
    }

    #[test]
    fn nearest_uses_index_distance() {
        assert_eq!(nearest(7, &RAILROADS), Some(5));
        assert_eq!(nearest(22, &RAILROADS), Some(25));
        assert_eq!(nearest(36, &RAILROADS), Some(35));
        assert_eq!(nearest(7, &UTILITIES), Some(12));
        assert_eq!(nearest(22, &UTILITIES), Some(28));
        assert_eq!(nearest(36, &UTILITIES), Some(28));
    }

    #[test]
    fn nearest_tie_goes_to_lowest() {
        assert_eq!(nearest(10, &RAILROADS), Some(5));
        assert_eq!(nearest(20, &UTILITIES), Some(12));
        assert_eq!(nearest(3, &[]), None);
    }

    #[test]
    fn names() {
        assert_eq!(space_name(39), "Boardwalk");
        assert_eq!(space_name(JAIL), "Jail");
        assert_eq!(SpaceKind::CommunityChest.label(), "community_chest");
    }
}
